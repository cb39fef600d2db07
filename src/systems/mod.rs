//! [Systems](System) provide the logic for modifying the state of [Entities](crate::entities::Entity)
//! and their associated [Components](crate::components::Component).
//!
//! A [System] must be added to a [World](crate::world::World) for it to become active.
//! Each system declares which entities it cares about through [System::matches];
//! the world keeps a [membership list](MembershipIndex) per system and hands it to
//! [System::update] once per frame, in priority order.

mod filter;
mod system;
mod membership;
mod system_store;

pub use filter::*;
pub use system::*;
pub use membership::*;

pub(crate) use system_store::*;
