//! Binary codec for replication messages.
//!
//! Provides efficient serialization for network transmission.

use thiserror::Error;

use crate::messages::ReplicationMessage;

/// Errors that can occur during encoding/decoding.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("encode error: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("decode error: {0}")]
    Decode(#[from] bincode::error::DecodeError),
}

/// Encode a message to bytes.
pub fn encode(message: &ReplicationMessage) -> Result<Vec<u8>, CodecError> {
    Ok(bincode::serde::encode_to_vec(message, bincode::config::standard())?)
}

/// Decode a message from bytes.
pub fn decode(data: &[u8]) -> Result<ReplicationMessage, CodecError> {
    let (message, _) = bincode::serde::decode_from_slice(data, bincode::config::standard())?;
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{EntityId, EntityUpdate, FieldValue};
    use glam::Vec3;

    #[test]
    fn roundtrip_update() {
        let msg = ReplicationMessage::Update(EntityUpdate {
            entity: EntityId(7),
            fields: vec![
                (0, FieldValue::I32(85)),
                (2, FieldValue::Vec3(Vec3::new(1.0, 2.5, -3.0))),
                (4, FieldValue::Entity(Some(EntityId(3)))),
            ],
        });

        let encoded = encode(&msg).unwrap();
        let decoded = decode(&encoded).unwrap();

        if let (ReplicationMessage::Update(orig), ReplicationMessage::Update(dec)) = (&msg, &decoded) {
            assert_eq!(orig.entity, dec.entity);
            assert_eq!(orig.fields, dec.fields);
        } else {
            panic!("wrong message type");
        }
    }

    #[test]
    fn roundtrip_spawn_despawn() {
        let spawn = ReplicationMessage::Spawn {
            entity: EntityId(1),
            classname: "CharacterEntity".to_string(),
        };
        let despawn = ReplicationMessage::Despawn { entity: EntityId(1) };

        for msg in [spawn, despawn] {
            let decoded = decode(&encode(&msg).unwrap()).unwrap();
            match (&msg, &decoded) {
                (
                    ReplicationMessage::Spawn { entity: a, classname: ca },
                    ReplicationMessage::Spawn { entity: b, classname: cb },
                ) => {
                    assert_eq!(a, b);
                    assert_eq!(ca, cb);
                }
                (
                    ReplicationMessage::Despawn { entity: a },
                    ReplicationMessage::Despawn { entity: b },
                ) => assert_eq!(a, b),
                _ => panic!("wrong message type"),
            }
        }
    }

    #[test]
    fn compact_encoding() {
        let msg = ReplicationMessage::Update(EntityUpdate {
            entity: EntityId(1),
            fields: vec![(0, FieldValue::I32(100))],
        });

        let encoded = encode(&msg).unwrap();
        assert!(encoded.len() < 16, "encoded size was {}", encoded.len());
    }
}
