use crate::entities::{Entity, EntityStore, Identifier};
use crate::data_structures::BitField;
use crate::systems::{SystemId, SystemStore};

/// Per-system lists of the [entities](Entity) that matched the system's predicate.
///
/// Lists are indexed by [SystemId]. An entity appears at most once per list, and each list is
/// ordered by the time its entities were first reconciled against the system.
#[derive(Default)]
pub struct MembershipIndex {
	lists: Vec<Vec<Entity>>,
}

/// Counters describing the work done by a single reconciliation pass.
#[derive(Default, Copy, Clone, Debug, Eq, PartialEq)]
pub struct ReconcileStats {
	/// Newly registered systems matched against the whole world.
	pub systems: usize,
	/// Newly added entities matched against the previously registered systems.
	pub entities: usize,
	/// Predicate evaluations.
	pub tests: usize,
	/// Entities appended to a membership list.
	pub matches: usize,
}

impl ReconcileStats {
	pub fn is_empty(&self) -> bool {
		self.systems == 0 && self.entities == 0
	}
}

impl MembershipIndex {
	pub(crate) fn with_capacity(capacity: usize) -> Self {
		Self {
			lists: Vec::with_capacity(capacity),
		}
	}

	/// The members of `system`, looked up by slot.
	pub(crate) fn members(&self, system: SystemId) -> &[Entity] {
		self.lists.get(system.slot).map(Vec::as_slice).unwrap_or_default()
	}

	pub(crate) fn add_slot(&mut self, system: SystemId) {
		debug_assert_eq!(system.slot, self.lists.len(), "Membership slots must be allocated in registration order");
		self.lists.push(Vec::new());
	}

	/// Removes `entity` from every list, matching by identity.
	/// Returns how many lists contained it.
	pub(crate) fn remove(&mut self, entity: Entity) -> usize {
		let mut removed = 0;
		for list in &mut self.lists {
			if let Some(index) = list.iter().position(|e| e.id() == entity.id()) {
				list.remove(index);
				removed += 1;
			}
		}

		removed
	}

	/// Brings the index up to date with the systems and entities added since the last pass.
	///
	/// Each new system is tested against every entity in the world, after which it is marked in
	/// `processed`. Each new entity is then tested against every system that was not marked,
	/// so no pair is tested twice and no entity is appended twice. Pairs reconciled in an earlier
	/// pass are never tested again.
	pub(crate) fn reconcile(
		&mut self, systems: &SystemStore, entities: &EntityStore, new_systems: &[SystemId], new_entities: &[Entity],
		processed: &mut BitField,
	) -> ReconcileStats {
		let mut stats = ReconcileStats::default();
		processed.clear();

		for &id in new_systems {
			let system = match systems.get(id) {
				Some(system) => system,
				None => continue,
			};

			let list = &mut self.lists[id.slot];
			for &entity in entities.entities() {
				let data = match entities.get(entity) {
					Some(data) => data,
					None => continue,
				};

				stats.tests += 1;
				if system.matches(data) {
					list.push(entity);
					stats.matches += 1;
				}
			}

			processed.set(id.slot, true);
			stats.systems += 1;
		}

		for &entity in new_entities {
			let data = match entities.get(entity) {
				Some(data) => data,
				None => continue,
			};

			for id in systems.ids() {
				if processed.get(id.slot) {
					continue;
				}

				stats.tests += 1;
				if systems.get(id).map_or(false, |s| s.matches(data)) {
					self.lists[id.slot].push(entity);
					stats.matches += 1;
				}
			}

			stats.entities += 1;
		}

		stats
	}
}
