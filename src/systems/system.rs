use crate::entities::{Entity, EntityData, EntityStore};
use crate::world::World;
use std::fmt;

/// It provides the logic for modifying the state of [Entities](crate::entities::Entity)
/// and their associated [Components](crate::components::Component).
pub trait System {
	/// Dispatch priority. Lower values run first; systems with equal priority run in registration order.
	/// Read once, when the system is added to a [World].
	fn priority(&self) -> i32 {
		0
	}

	/// Initialises the [System].
	/// Called once by [World::add_system], before the system takes part in reconciliation or dispatch.
	/// The hook may add entities and other systems to `world`.
	fn setup(&mut self, _world: &mut World) {}

	/// Whether `entity` belongs in this system's membership list.
	///
	/// Must be a pure function of the entity's current components. It is evaluated once per
	/// (system, entity) pair; a match is kept until the entity leaves the world.
	fn matches(&self, entity: &EntityData) -> bool;

	/// Executes the system on its current members.
	///
	/// `entities` is in the order the entities were first matched. Component payloads can be
	/// modified through `store`.
	fn update(&mut self, dt: f32, entities: &[Entity], store: &mut EntityStore);
}

/// A handle to a system registered in a [World].
///
/// Every registration gets its own slot, even when the same system type is added twice,
/// and every slot owns an independent membership list.
///
/// An id is only meaningful for the world that returned it; other worlds treat it as unknown.
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone)]
pub struct SystemId {
	pub(crate) world: u32,
	pub(crate) slot: usize,
}

impl SystemId {
	/// Registration index within the issuing world.
	#[inline(always)]
	pub const fn index(&self) -> usize {
		self.slot
	}
}

impl fmt::Debug for SystemId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "SystemId({}:{})", self.world, self.slot)
	}
}
