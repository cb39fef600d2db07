use crate::components::{Component, ComponentId};
use crate::entities::{Entity, Id, Identifier};
use crate::data_structures::BitField;
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use std::any::Any;
use std::fmt;

type Hasher = BuildHasherDefault<NoHashHasher<usize>>;

/// The data of a single entity: its [Id], its [components](Component) and the
/// capability mask describing which components it carries.
///
/// The [Id] is assigned on construction, before the entity is known to any
/// [World](crate::world::World).
pub struct EntityData {
	id: Id,
	capabilities: BitField,
	components: HashMap<ComponentId, Box<dyn Any>, Hasher>,
}

impl EntityData {
	/// Creates an entity with no [components](Component) attached.
	pub fn new() -> Self {
		Self::with_id(Id::next())
	}

	/// Creates `count` entities with no [components](Component) attached.
	/// Their ids are reserved in a single batch.
	pub fn new_batch(count: usize) -> impl ExactSizeIterator<Item = EntityData> {
		Id::next_batch(count).map(Self::with_id)
	}

	fn with_id(id: Id) -> Self {
		Self {
			id,
			capabilities: BitField::new(),
			components: HashMap::default(),
		}
	}

	/// Attaches `component`, replacing any previous component of the same type.
	pub fn with<T: Component>(mut self, component: T) -> Self {
		self.insert(component);
		self
	}

	/// The handle that refers to this entity once it has been added to a [World](crate::world::World).
	#[inline(always)]
	pub fn entity(&self) -> Entity {
		Entity::new(self.id)
	}

	/// Which [components](Component) the entity currently carries.
	#[inline(always)]
	pub fn capabilities(&self) -> &BitField {
		&self.capabilities
	}

	/// Attaches `component`, returning the one it replaced, if any.
	///
	/// Attaching a component to an entity that is already part of a [World](crate::world::World) does
	/// not re-run any system predicate.
	pub fn insert<T: Component>(&mut self, component: T) -> Option<T> {
		let id = T::component_id();
		self.capabilities.set(id.value(), true);
		let previous = self.components.insert(id, Box::new(component))?;
		previous.downcast::<T>().ok().map(|c| *c)
	}

	/// Detaches the component of type `T`, if present.
	///
	/// Membership established before the removal is kept.
	pub fn remove<T: Component>(&mut self) -> Option<T> {
		let id = T::component_id();
		let component = self.components.remove(&id)?;
		self.capabilities.set(id.value(), false);
		component.downcast::<T>().ok().map(|c| *c)
	}

	#[inline(always)]
	pub fn has<T: Component>(&self) -> bool {
		self.capabilities.get(T::component_id().value())
	}

	pub fn get<T: Component>(&self) -> Option<&T> {
		self.components.get(&T::component_id())?.downcast_ref::<T>()
	}

	pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
		self.components.get_mut(&T::component_id())?.downcast_mut::<T>()
	}

	/// Number of attached components.
	pub fn component_count(&self) -> usize {
		self.components.len()
	}
}

impl Default for EntityData {
	fn default() -> Self {
		Self::new()
	}
}

impl Identifier for EntityData {
	#[inline(always)]
	fn id(&self) -> Id {
		self.id
	}
}

impl fmt::Debug for EntityData {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EntityData")
			.field("id", &self.id)
			.field("components", &self.capabilities.iter_ones().collect::<Vec<_>>())
			.finish()
	}
}
