//! [Components](Component) are the pieces of data attached to an [entity](crate::entities::EntityData).
//!
//! The core never looks inside a component; it only tracks *which* components an entity
//! carries, as a [BitField](crate::data_structures::BitField) of [component ids](ComponentId).

mod component;
mod component_id;
mod component_set;

pub use component::*;
pub use component_id::*;
pub use component_set::*;
pub use delta_ecs_derive::Component;
