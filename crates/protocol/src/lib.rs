//! Emberfall Protocol
//!
//! The replication contract between the authoritative simulation and its
//! observers:
//!
//! - A per-class schema table declaring which entity fields replicate,
//!   validated once at registration time
//! - Message types carrying spawns, per-entity field updates, and
//!   despawns
//! - A compact binary codec for network transmission
//!
//! Delivery is fire-and-forget from the simulation's perspective. Fields
//! of one entity always travel together in a single update; no ordering
//! is guaranteed across distinct entities.

pub mod codec;
pub mod messages;
pub mod schema;

pub use codec::{decode, encode, CodecError};
pub use messages::{EntityId, EntityUpdate, FieldValue, ReplicationMessage};
pub use schema::{ClassId, FieldId, SchemaRegistry};
