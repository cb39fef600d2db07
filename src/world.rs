use crate::systems::{MembershipIndex, ReconcileStats, System, SystemId, SystemStore};
use crate::entities::{Entity, EntityData, EntityStore, SortByIdentity};
use crate::data_structures::BitField;
use std::sync::atomic::Ordering::Relaxed;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::AtomicU32;
use tracing::debug;

static NEXT_WORLD: AtomicU32 = AtomicU32::new(0);

/// A container for [entities](Entity) and [systems](System).
///
/// Additions are queued and only become visible to systems on the next [World::update],
/// which first reconciles the queued work into the per-system membership lists
/// and then runs every system in priority order.
///
/// The world dereferences to its [EntityStore], which exposes entity and component lookups.
pub struct World {
	entity_store: EntityStore,
	system_store: SystemStore,
	membership: MembershipIndex,

	new_systems: Vec<SystemId>,
	new_entities: Vec<Entity>,
	processed: BitField,
}

impl World {
	pub fn new() -> Self {
		Self {
			entity_store: EntityStore::new(),
			system_store: SystemStore::new(NEXT_WORLD.fetch_add(1, Relaxed)),
			membership: MembershipIndex::default(),

			new_systems: Vec::new(),
			new_entities: Vec::new(),
			processed: BitField::new(),
		}
	}

	/// Creates a [World] with room for `entities` entities and `systems` systems.
	pub fn with_capacity(entities: usize, systems: usize) -> Self {
		Self {
			entity_store: EntityStore::with_capacity(entities),
			system_store: SystemStore::with_capacity(NEXT_WORLD.fetch_add(1, Relaxed), systems),
			membership: MembershipIndex::with_capacity(systems),

			new_systems: Vec::with_capacity(systems),
			new_entities: Vec::with_capacity(entities),
			processed: BitField::with_capacity(systems),
		}
	}

	/// Add a new [system](System) to the [World].
	///
	/// [System::setup] runs first, with access to the world. The system then joins the dispatch order
	/// and is matched against every entity on the next [World::update].
	pub fn add_system<T: 'static + System>(&mut self, system: T) -> SystemId {
		self.add_boxed_system(Box::new(system))
	}

	/// Add an already boxed [system](System) to the [World]. See [World::add_system].
	pub fn add_boxed_system(&mut self, mut system: Box<dyn System>) -> SystemId {
		system.setup(self);

		let (id, priority) = self.system_store.add_system(system);
		self.membership.add_slot(id);
		self.new_systems.push(id);

		debug!(system = id.index(), priority, "added system");
		id
	}

	/// The registered [systems](System), in dispatch order.
	pub fn systems(&self) -> impl ExactSizeIterator<Item = &dyn System> + '_ {
		self.system_store.iter()
	}

	/// The ids of the registered [systems](System), in dispatch order.
	pub fn system_ids(&self) -> impl ExactSizeIterator<Item = SystemId> + '_ {
		self.system_store.ids()
	}

	pub fn system(&self, id: SystemId) -> Option<&dyn System> {
		self.system_store.get(id)
	}

	pub fn system_count(&self) -> usize {
		self.system_store.len()
	}

	/// The entities matched by `system` as of the last reconciliation.
	/// Ids issued by another world have no members here.
	pub fn members(&self, system: SystemId) -> &[Entity] {
		match self.system_store.owns(system) {
			true => self.membership.members(system),
			false => &[],
		}
	}

	/// Moves `entity` into the [World] and returns its handle.
	/// Systems see the entity from the next [World::update] on.
	pub fn add_entity(&mut self, entity: EntityData) -> Entity {
		let entity = self.entity_store.insert(entity);
		self.new_entities.push(entity);
		entity
	}

	/// Moves every entity of `entities` into the [World], in iteration order.
	pub fn add_entities(&mut self, entities: impl IntoIterator<Item = EntityData>) -> Vec<Entity> {
		entities.into_iter().map(|e| self.add_entity(e)).collect()
	}

	/// Removes `entity` from the [World] and from every system's membership list.
	/// Returns its data, or `None` if the entity is not part of this world.
	pub fn remove_entity(&mut self, entity: Entity) -> Option<EntityData> {
		let data = self.entity_store.remove(entity)?;

		if let Some(index) = self.new_entities.iter().position(|e| *e == entity) {
			self.new_entities.remove(index);
		}

		let systems = self.membership.remove(entity);
		debug!(entity = %entity.id, systems, "removed entity");
		Some(data)
	}

	pub fn entity_count(&self) -> usize {
		self.entity_store.len()
	}

	/// The handles of every entity, sorted by identity.
	pub fn entities_sorted(&self) -> Vec<Entity> {
		let mut entities = self.entity_store.entities().to_vec();
		entities.sort_by_identity();
		entities
	}

	/// Whether systems or entities were added since the last reconciliation.
	pub fn has_pending_changes(&self) -> bool {
		!self.new_systems.is_empty() || !self.new_entities.is_empty()
	}

	/// Matches the systems and entities added since the last call and updates the membership lists.
	/// Called by [World::update]; calling it directly is only useful to inspect membership.
	pub fn reconcile(&mut self) -> ReconcileStats {
		let stats = self.membership.reconcile(
			&self.system_store,
			&self.entity_store,
			&self.new_systems,
			&self.new_entities,
			&mut self.processed,
		);

		self.new_systems.clear();
		self.new_entities.clear();

		if !stats.is_empty() {
			debug!(
				systems = stats.systems,
				entities = stats.entities,
				tests = stats.tests,
				matches = stats.matches,
				"reconciled"
			);
		}

		stats
	}

	/// Reconciles pending additions, then runs every [system](System) on its members in priority order.
	/// Invoked once per frame, with `dt` being the time since the previous update.
	pub fn update(&mut self, dt: f32) {
		self.reconcile();
		self.system_store.run_systems(dt, &self.membership, &mut self.entity_store);
	}
}

impl Default for World {
	fn default() -> Self {
		Self::new()
	}
}

impl Deref for World {
	type Target = EntityStore;

	#[inline(always)]
	fn deref(&self) -> &Self::Target {
		&self.entity_store
	}
}

impl DerefMut for World {
	#[inline(always)]
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.entity_store
	}
}
