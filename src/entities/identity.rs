use std::sync::atomic::Ordering::Relaxed;
use std::sync::atomic::AtomicU64;
use std::ops::Range;
use std::fmt;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// A process-wide unique, totally ordered identity.
///
/// Ids are handed out in increasing order, so sorting by [Id] yields creation order
/// for entities built on the same thread. The ordering exists for deterministic enumeration
/// only and says nothing about causality across worlds.
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug)]
pub struct Id(u64);

impl Id {
	/// Generate a fresh [Id].
	#[inline]
	pub fn next() -> Id {
		Id(NEXT_ID.fetch_add(1, Relaxed))
	}

	/// Reserve `count` consecutive ids with a single counter bump.
	///
	/// The batch yields the same sequence as `count` sequential calls to [Id::next].
	pub fn next_batch(count: usize) -> IdBatch {
		let count = count as u64;
		let start = NEXT_ID.fetch_add(count, Relaxed);
		IdBatch { range: start..start + count }
	}

	#[inline(always)]
	pub const fn value(&self) -> u64 {
		self.0
	}
}

impl fmt::Display for Id {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// A block of ids reserved by [Id::next_batch].
#[derive(Clone, Debug)]
pub struct IdBatch {
	range: Range<u64>,
}

impl Iterator for IdBatch {
	type Item = Id;

	fn next(&mut self) -> Option<Self::Item> {
		self.range.next().map(Id)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.range.size_hint()
	}
}

impl ExactSizeIterator for IdBatch {}

/// Anything that exposes an [Id].
pub trait Identifier {
	fn id(&self) -> Id;
}

impl Identifier for Id {
	#[inline(always)]
	fn id(&self) -> Id {
		*self
	}
}

impl<T: Identifier + ?Sized> Identifier for &T {
	#[inline(always)]
	fn id(&self) -> Id {
		(**self).id()
	}
}

/// Sorts a collection of [identifiers](Identifier) by [Id].
///
/// Meant for display and tests; reconciliation never relies on it.
pub trait SortByIdentity {
	fn sort_by_identity(&mut self);
}

impl<T: Identifier> SortByIdentity for [T] {
	fn sort_by_identity(&mut self) {
		self.sort_by_key(|item| item.id());
	}
}
