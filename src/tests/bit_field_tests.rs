use crate::data_structures::BitField;
use std::collections::HashSet;

#[test]
pub fn set_and_get() {
	let mut bitfield = BitField::new();
	for i in [0, 5, 31, 32, 100] {
		bitfield.set(i, true);
	}

	for i in 0..128 {
		assert_eq!(bitfield.get(i), [0, 5, 31, 32, 100].contains(&i), "Bit {} has the wrong value", i);
	}

	bitfield.set(5, false);
	bitfield.set(1000, false);
	assert!(!bitfield.get(5));
	assert_eq!(bitfield.count_ones(), 4);
	assert_eq!(bitfield.iter_ones().collect::<Vec<_>>(), [0, 31, 32, 100]);
}

#[test]
pub fn subset_and_intersection() {
	let empty = BitField::new();
	let small: BitField = [1, 40].into_iter().collect();
	let large: BitField = [1, 2, 40, 70].into_iter().collect();
	let other: BitField = [3].into_iter().collect();

	assert!(empty.is_subset_of(&small), "The empty set is a subset of every set");
	assert!(empty.is_subset_of(&empty));
	assert!(small.is_subset_of(&large));
	assert!(!large.is_subset_of(&small));
	assert!(!small.is_subset_of(&empty));

	assert!(small.intersects(&large));
	assert!(!small.intersects(&other));
	assert!(!empty.intersects(&large));
}

#[test]
pub fn trailing_zeros_are_insignificant() {
	let mut a: BitField = [3].into_iter().collect();
	let b = {
		let mut b = BitField::with_capacity(256);
		b.set(3, true);
		b
	};
	assert_eq!(a, b);

	let set = HashSet::from([a.clone()]);
	assert!(set.contains(&b), "Equal bitfields must hash the same");

	a.set(3, false);
	assert!(a.is_empty());
	assert_eq!(a, BitField::new());
	assert!(b.capacity() >= 256);
}
