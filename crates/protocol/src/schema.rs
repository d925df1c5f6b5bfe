//! Per-class replication schema.
//!
//! Every entity class declares its replicated fields up front, exactly
//! once. Duplicate registration - of a field within a class, or of a
//! class name - is a programmer error and fails loudly at registration
//! time rather than silently corrupting field indexing later.

/// Handle to a registered entity class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(pub u16);

/// Index of a replicated field within its class schema.
pub type FieldId = u16;

/// Fields an entity class keeps in sync with observers.
#[derive(Debug, Clone)]
pub struct ClassSchema {
    pub classname: &'static str,
    fields: Vec<&'static str>,
}

/// Registry of every class schema known to the simulation.
#[derive(Debug, Default, Clone)]
pub struct SchemaRegistry {
    classes: Vec<ClassSchema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class and its replicated fields.
    ///
    /// # Panics
    ///
    /// Panics if the class name was already registered, if a field is
    /// listed twice, or if there are more fields than the dirty mask can
    /// track.
    pub fn register(&mut self, classname: &'static str, fields: &[&'static str]) -> ClassId {
        assert!(
            !self.classes.iter().any(|c| c.classname == classname),
            "class {classname} registered twice"
        );
        assert!(
            fields.len() <= 32,
            "class {classname} declares too many replicated fields"
        );
        for (i, field) in fields.iter().enumerate() {
            assert!(
                !fields[..i].contains(field),
                "replicated field {field} registered twice on {classname}"
            );
        }

        let id = ClassId(self.classes.len() as u16);
        self.classes.push(ClassSchema {
            classname,
            fields: fields.to_vec(),
        });
        id
    }

    /// Display name of a class.
    pub fn classname(&self, class: ClassId) -> &'static str {
        self.classes[class.0 as usize].classname
    }

    /// Number of replicated fields a class declares.
    pub fn field_count(&self, class: ClassId) -> u16 {
        self.classes[class.0 as usize].fields.len() as u16
    }

    /// Resolve a field name to its index within the class schema.
    pub fn field_id(&self, class: ClassId, name: &str) -> Option<FieldId> {
        self.classes[class.0 as usize]
            .fields
            .iter()
            .position(|f| *f == name)
            .map(|i| i as FieldId)
    }

    /// Resolve a field index back to its name.
    pub fn field_name(&self, class: ClassId, field: FieldId) -> Option<&'static str> {
        self.classes[class.0 as usize]
            .fields
            .get(field as usize)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_resolve() {
        let mut schema = SchemaRegistry::new();
        let class = schema.register("HealthEntity", &["health", "maxhealth"]);

        assert_eq!(schema.classname(class), "HealthEntity");
        assert_eq!(schema.field_count(class), 2);
        assert_eq!(schema.field_id(class, "health"), Some(0));
        assert_eq!(schema.field_id(class, "maxhealth"), Some(1));
        assert_eq!(schema.field_id(class, "armor"), None);
        assert_eq!(schema.field_name(class, 1), Some("maxhealth"));
        assert_eq!(schema.field_name(class, 2), None);
    }

    #[test]
    #[should_panic(expected = "registered twice")]
    fn test_duplicate_field_panics() {
        let mut schema = SchemaRegistry::new();
        schema.register("BrokenEntity", &["origin", "origin"]);
    }

    #[test]
    #[should_panic(expected = "registered twice")]
    fn test_duplicate_class_panics() {
        let mut schema = SchemaRegistry::new();
        schema.register("HealthEntity", &["health"]);
        schema.register("HealthEntity", &["health"]);
    }
}
