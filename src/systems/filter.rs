use crate::data_structures::BitField;
use crate::components::ComponentSet;
use crate::entities::EntityData;
use std::sync::Arc;

/// A capability predicate built from [component sets](ComponentSet).
///
/// An entity passes when it carries every included component and none of the excluded ones.
/// Systems typically hold a [Filter] and forward [System::matches](crate::systems::System::matches) to it.
///
/// ```ignore
/// let filter = Filter::new().include::<(Position, Velocity)>().exclude::<(Frozen,)>();
/// ```
#[derive(Clone, Debug)]
pub struct Filter {
	include: Arc<BitField>,
	exclude: Arc<BitField>,
}

impl Filter {
	/// A filter that matches every entity.
	pub fn new() -> Self {
		Self {
			include: <()>::get_bitfield(),
			exclude: <()>::get_bitfield(),
		}
	}

	/// Specify which components an entity must carry.
	pub fn include<I: ComponentSet>(self) -> Self {
		Self {
			include: I::get_bitfield(),
			exclude: self.exclude,
		}
	}

	/// Specify which components an entity must not carry.
	pub fn exclude<E: ComponentSet>(self) -> Self {
		Self {
			include: self.include,
			exclude: E::get_bitfield(),
		}
	}

	#[inline]
	pub fn matches(&self, entity: &EntityData) -> bool {
		self.matches_capabilities(entity.capabilities())
	}

	#[inline]
	pub fn matches_capabilities(&self, capabilities: &BitField) -> bool {
		self.include.is_subset_of(capabilities) && !self.exclude.intersects(capabilities)
	}
}

impl Default for Filter {
	fn default() -> Self {
		Self::new()
	}
}
