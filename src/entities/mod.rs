//! [Entities](Entity) represent the individual "things" in your game or application.
//!
//! An [Entity] doesn't store any data and has no associated behaviour;
//! it is a handle identifying which pieces of data ([Components](crate::components::Component))
//! belong together. The data itself lives in an [EntityData], owned by an [EntityStore].

mod identity;
mod entity_data;
mod entity_store;
mod entity;

pub use identity::*;
pub use entity_data::*;
pub use entity_store::*;
pub use entity::*;
