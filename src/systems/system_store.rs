use crate::systems::{MembershipIndex, System, SystemId};
use crate::entities::EntityStore;
use tracing::trace;

pub(crate) struct SystemStore {
	world: u32,
	slots: Vec<Box<dyn System>>,
	order: Vec<SystemEntry>,
}

#[derive(Copy, Clone)]
struct SystemEntry {
	id: SystemId,
	priority: i32,
}

impl SystemStore {
	pub fn new(world: u32) -> Self {
		Self::with_capacity(world, 0)
	}

	pub fn with_capacity(world: u32, capacity: usize) -> Self {
		Self {
			world,
			slots: Vec::with_capacity(capacity),
			order: Vec::with_capacity(capacity),
		}
	}

	/// Stores `system` in a new slot and inserts it after every system whose priority is lower or equal.
	pub fn add_system(&mut self, system: Box<dyn System>) -> (SystemId, i32) {
		let id = SystemId {
			world: self.world,
			slot: self.slots.len(),
		};
		let priority = system.priority();

		let index = self.order.partition_point(|e| e.priority <= priority);
		self.order.insert(index, SystemEntry { id, priority });
		self.slots.push(system);
		(id, priority)
	}

	pub fn get(&self, id: SystemId) -> Option<&dyn System> {
		self.owns(id).then(|| self.slot(id))
	}

	/// Whether `id` was issued by this store.
	pub fn owns(&self, id: SystemId) -> bool {
		id.world == self.world && id.slot < self.slots.len()
	}

	fn slot(&self, id: SystemId) -> &dyn System {
		&*self.slots[id.slot]
	}

	pub fn len(&self) -> usize {
		self.slots.len()
	}

	/// Slot ids in dispatch order.
	pub fn ids(&self) -> impl ExactSizeIterator<Item = SystemId> + '_ {
		self.order.iter().map(|e| e.id)
	}

	/// Systems in dispatch order.
	pub fn iter(&self) -> impl ExactSizeIterator<Item = &dyn System> + '_ {
		self.order.iter().map(move |e| self.slot(e.id))
	}

	pub fn run_systems(&mut self, dt: f32, membership: &MembershipIndex, entities: &mut EntityStore) {
		for entry in &self.order {
			let members = membership.members(entry.id);
			trace!(system = entry.id.slot, priority = entry.priority, members = members.len(), "running system");
			self.slots[entry.id.slot].update(dt, members, entities);
		}
	}
}
