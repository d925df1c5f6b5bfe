//! Emberfall Game Logic
//!
//! The replicated entity simulation core:
//!
//! - Entity registry with capability tagging and lifecycle hooks
//! - Health, movement, character and user entity composition
//! - Input snapshot handling
//! - The per-tick simulation driver and replication drain
//!
//! # Architecture
//!
//! Entities are plain data composed from capability parts; behavior runs
//! in the simulation driver, which walks the registry once per tick.
//! The same crate runs on both sides of the wire: the controlling side
//! simulates movement against live proxy bodies, the authoritative side
//! consumes the replicated results.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                         Simulation                            │
//! │  ┌─────────┐   ┌──────────┐   ┌──────────┐   ┌─────────────┐  │
//! │  │ Buttons │──►│ Entities │──►│ Physics  │──►│ Replication │  │
//! │  │ (users) │   │ (think)  │   │ (bodies) │   │ (updates)   │  │
//! │  └─────────┘   └──────────┘   └──────────┘   └─────────────┘  │
//! └───────────────────────────────────────────────────────────────┘
//! ```

pub mod entities;
pub mod input;
pub mod replication;
pub mod simulation;

pub use entities::{Capabilities, Classes, Entity, EntityId, Registry};
pub use input::RawInput;
pub use simulation::{Side, Simulation, SimulationConfig};

// Re-export physics types for convenience
pub use emberfall_physics::{ButtonState, MovementConfig, PhysicsWorld};
