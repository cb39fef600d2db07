//! An entity-component-system runtime built around incremental membership reconciliation.
//!
//! A [World](world::World) owns entities and systems. Every system declares which entities it
//! operates on through a predicate; instead of re-testing every entity against every system
//! each frame, the world only tests what changed since the previous frame and caches the
//! results in per-system membership lists.

extern crate self as delta_ecs;

pub mod data_structures;
pub mod components;
pub mod entities;
pub mod systems;
mod error;
mod world;

pub use lazy_static::lazy_static;
pub use error::{EcsError, Result};
pub use world::World;

pub mod prelude {
	pub use crate::systems::*;
	pub use crate::components::*;
	pub use crate::world::World;
	pub use crate::error::EcsError;
	pub use crate::data_structures::BitField;
	pub use crate::entities::{Entity, EntityData, EntityStore, Id, Identifier, SortByIdentity};
}

#[cfg(test)]
mod tests;
