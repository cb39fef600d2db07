use crate::entities::{Entity, EntityData, Id, Identifier};
use crate::error::{EcsError, Result};
use std::hash::BuildHasherDefault;
use crate::components::Component;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use std::any::type_name;

type Hasher = BuildHasherDefault<NoHashHasher<u64>>;

/// Owns the [entities](EntityData) of a [World](crate::world::World).
///
/// Keeps the master list of [handles](Entity) in insertion order next to the data itself.
/// [Systems](crate::systems::System) receive a mutable reference to the store during dispatch,
/// which lets them modify component payloads but not add or remove entities.
#[derive(Default)]
pub struct EntityStore {
	order: Vec<Entity>,
	data: HashMap<Id, EntityData, Hasher>,
}

impl EntityStore {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn with_capacity(capacity: usize) -> Self {
		Self {
			order: Vec::with_capacity(capacity),
			data: HashMap::with_capacity_and_hasher(capacity, Hasher::default()),
		}
	}

	/// Appends an entity to the master list.
	pub(crate) fn insert(&mut self, data: EntityData) -> Entity {
		let entity = data.entity();
		self.order.push(entity);
		self.data.insert(entity.id, data);
		entity
	}

	/// Removes an entity by identity, keeping the relative order of the others.
	pub(crate) fn remove(&mut self, entity: Entity) -> Option<EntityData> {
		let index = self.order.iter().position(|e| e.id == entity.id)?;
		self.order.remove(index);
		self.data.remove(&entity.id)
	}

	/// The master list, in insertion order.
	#[inline(always)]
	pub fn entities(&self) -> &[Entity] {
		&self.order
	}

	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	pub fn contains(&self, entity: Entity) -> bool {
		self.data.contains_key(&entity.id)
	}

	pub fn get(&self, entity: Entity) -> Option<&EntityData> {
		self.data.get(&entity.id)
	}

	pub fn get_mut(&mut self, entity: Entity) -> Option<&mut EntityData> {
		self.data.get_mut(&entity.id)
	}

	/// Gets a reference to a [component](Component) bound to a specific [entity](Entity).
	pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
		self.get(entity)?.get::<T>()
	}

	/// Gets a mutable reference to a [component](Component) bound to a specific [entity](Entity).
	pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
		self.get_mut(entity)?.get_mut::<T>()
	}

	/// Like [EntityStore::get_component], but reports why the lookup failed.
	pub fn component<T: Component>(&self, entity: Entity) -> Result<&T> {
		let data = self.get(entity).ok_or(EcsError::UnknownEntity(entity.id()))?;
		data.get::<T>().ok_or(EcsError::MissingComponent {
			entity: entity.id(),
			component: type_name::<T>(),
		})
	}

	/// Like [EntityStore::get_component_mut], but reports why the lookup failed.
	pub fn component_mut<T: Component>(&mut self, entity: Entity) -> Result<&mut T> {
		let data = self.get_mut(entity).ok_or(EcsError::UnknownEntity(entity.id()))?;
		data.get_mut::<T>().ok_or(EcsError::MissingComponent {
			entity: entity.id(),
			component: type_name::<T>(),
		})
	}
}
