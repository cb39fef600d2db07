use crate::entities::{Id, Identifier};
use std::fmt;

/// A unique handle to an entity owned by a [World](crate::world::World).
///
/// Handles are cheap to copy and never own data; two handles are equal iff they refer to the
/// same entity.
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone)]
pub struct Entity {
	pub(crate) id: Id,
}

impl Entity {
	#[inline(always)]
	pub(crate) const fn new(id: Id) -> Self {
		Self { id }
	}
}

impl Identifier for Entity {
	#[inline(always)]
	fn id(&self) -> Id {
		self.id
	}
}

impl fmt::Debug for Entity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Entity({})", self.id)
	}
}
