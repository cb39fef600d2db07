use crate::tests::fixtures::*;
use crate::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
pub fn components_are_changeable() {
	let mut world = World::new();
	world.add_system(SystemOne::new());

	let e1 = world.add_entity(EntityData::new().with(Counter1::default()));
	world.update(0.125);

	assert_ne!(
		world.get_component::<Counter1>(e1).map(|c| c.a),
		Some(0),
		"SystemOne should have been able to change the value of Counter1::a"
	);
}

#[test]
pub fn systems_filter_entities() {
	let mut world = World::new();
	world.add_system(SystemOne::new());
	world.add_system(SystemTwo::new());
	world.add_system(SystemOneTwo::new());

	let e1 = world.add_entity(EntityData::new().with(Counter1::default()));
	let e2 = world.add_entity(EntityData::new().with(Counter2::default()));
	let e12 = world.add_entity(counters());
	let e12x1 = world.add_entity(counters().with(NotOne));
	let e12x2 = world.add_entity(counters().with(NotTwo));
	let e12x1x2 = world.add_entity(counters().with(NotOne).with(NotTwo));
	let e12x12 = world.add_entity(counters().with(NotOneTwo));

	world.update(0.125);

	// (entity, name, [a, b], [c, d]); `None` when the entity carries no such counter.
	let expected = [
		(e1, "e1", Some([1, 0]), None),
		(e2, "e2", None, Some([1, 0])),
		(e12, "e12", Some([1, 1]), Some([1, 1])),
		(e12x1, "e12x1", Some([0, 1]), Some([1, 1])),
		(e12x2, "e12x2", Some([1, 1]), Some([0, 1])),
		(e12x1x2, "e12x1x2", Some([0, 1]), Some([0, 1])),
		(e12x12, "e12x12", Some([1, 0]), Some([1, 0])),
	];

	for (entity, name, one, two) in expected {
		let actual_one = world.get_component::<Counter1>(entity).map(|c| [c.a, c.b]);
		let actual_two = world.get_component::<Counter2>(entity).map(|c| [c.c, c.d]);
		assert_eq!(actual_one, one, "{} has unexpected Counter1 values ([a, b])", name);
		assert_eq!(actual_two, two, "{} has unexpected Counter2 values ([c, d])", name);
	}
}

#[test]
pub fn remove_entity_shrinks_world_by_one() {
	const MAX_ENTITIES: usize = 10;

	for j in 0..MAX_ENTITIES {
		let mut world = World::new();
		world.add_system(SystemOneTwo::new());

		let entities = world.add_entities(EntityData::new_batch(MAX_ENTITIES));
		let before = world.entity_count();

		let removed = world.remove_entity(entities[j]);

		assert_eq!(removed.map(|e| e.entity()), Some(entities[j]));
		assert_eq!(world.entity_count(), before - 1, "World should now have exactly one less entity");
		assert!(!world.contains(entities[j]));
		assert_eq!(world.remove_entity(entities[j]).map(|e| e.entity()), None, "Removing twice is a no-op");
		assert_eq!(world.entity_count(), before - 1);
	}
}

#[test]
pub fn add_remove_update() {
	let mut world = World::new();
	world.add_system(SystemOne::new());

	let e1 = world.add_entity(counters());
	let e2 = world.add_entity(counters());
	let e3 = world.add_entity(counters());
	world.update(0.125);

	world.add_system(SystemTwo::new());
	let e4 = world.add_entity(counters());
	world.update(0.125);

	let e2 = world.remove_entity(e2).expect("e2 is part of the world");
	world.update(0.125);

	let values = |entity: Entity| {
		let one = world.get_component::<Counter1>(entity).map_or(0, |c| c.a);
		let two = world.get_component::<Counter2>(entity).map_or(0, |c| c.c);
		(one, two)
	};

	assert_eq!(values(e1), (3, 2), "e1 should be updated 3 times by SystemOne and 2 times by SystemTwo");
	assert_eq!(values(e3), (3, 2), "e3 should be updated 3 times by SystemOne and 2 times by SystemTwo");
	assert_eq!(values(e4), (2, 2), "e4 should be updated 2 times by both systems");

	let removed = (e2.get::<Counter1>().map_or(0, |c| c.a), e2.get::<Counter2>().map_or(0, |c| c.c));
	assert_eq!(removed, (2, 1), "e2 should stop being updated once removed");
}

#[test]
pub fn systems_run_in_priority_order() {
	let log = Rc::new(RefCell::new(Vec::new()));
	let mut world = World::new();

	for priority in [5, 1, 3] {
		world.add_system(LoggingSystem {
			label: priority,
			priority,
			log: log.clone(),
		});
	}

	world.update(0.0);
	assert_eq!(*log.borrow(), [1, 3, 5]);
	assert_eq!(world.systems().map(|s| s.priority()).collect::<Vec<_>>(), [1, 3, 5]);

	log.borrow_mut().clear();
	world.update(0.0);
	assert_eq!(*log.borrow(), [1, 3, 5], "Dispatch order must be stable across frames");
}

#[test]
pub fn equal_priorities_keep_registration_order() {
	let log = Rc::new(RefCell::new(Vec::new()));
	let mut world = World::new();

	for (label, priority) in [(10, 2), (20, 1), (30, 2), (40, 1), (50, 2)] {
		world.add_system(LoggingSystem {
			label,
			priority,
			log: log.clone(),
		});
	}

	world.update(0.0);
	assert_eq!(*log.borrow(), [20, 40, 10, 30, 50]);
}

#[test]
pub fn empty_update_leaves_world_empty() {
	let mut world = World::new();
	world.update(0.016);
	world.update(0.016);

	assert_eq!(world.entity_count(), 0);
	assert_eq!(world.system_count(), 0);
	assert_eq!(world.systems().count(), 0);
	assert!(world.entities().is_empty());
	assert!(!world.has_pending_changes());
	assert_eq!(world.reconcile(), ReconcileStats::default());
}

#[test]
pub fn systems_with_no_members_still_run() {
	let log = Rc::new(RefCell::new(Vec::new()));
	let mut world = World::with_capacity(16, 4);
	world.add_system(LoggingSystem {
		label: 1,
		priority: 0,
		log: log.clone(),
	});
	world.add_entity(counters());

	world.update(0.0);
	assert_eq!(*log.borrow(), [1]);
}

#[test]
pub fn matches_are_sticky() {
	let mut world = World::new();
	let one = world.add_system(SystemOne::new());

	let matched = world.add_entity(EntityData::new().with(Counter1::default()));
	let unmatched = world.add_entity(EntityData::new());
	world.update(0.0);

	// Detaching the component does not remove the entity from the membership list.
	let detached = world.get_mut(matched).and_then(|e| e.remove::<Counter1>());
	assert_eq!(detached.map(|c| c.a), Some(1));
	world.update(0.0);
	assert_eq!(world.members(one), [matched]);

	if let Some(data) = world.get_mut(matched) {
		data.insert(Counter1::default());
	}
	world.update(0.0);
	assert_eq!(world.get_component::<Counter1>(matched).map(|c| c.a), Some(1));

	// Attaching a component later does not add the entity either.
	if let Some(data) = world.get_mut(unmatched) {
		data.insert(Counter1::default());
	}
	world.update(0.0);
	assert_eq!(world.members(one), [matched]);
	assert_eq!(world.get_component::<Counter1>(unmatched).map(|c| c.a), Some(0));
}

struct Spawner {
	count: usize,
}

impl System for Spawner {
	fn priority(&self) -> i32 {
		-1
	}

	fn setup(&mut self, world: &mut World) {
		world.add_entities((0..self.count).map(|_| counters()));
		world.add_system(SystemTwo::new());
	}

	fn matches(&self, _entity: &EntityData) -> bool {
		true
	}

	fn update(&mut self, _dt: f32, _entities: &[Entity], _store: &mut EntityStore) {}
}

#[test]
pub fn setup_may_populate_the_world() {
	let mut world = World::new();
	let spawner = world.add_system(Spawner { count: 3 });

	assert_eq!(world.entity_count(), 3);
	assert_eq!(world.system_count(), 2);
	assert!(world.has_pending_changes());

	world.update(0.0);

	assert_eq!(world.members(spawner).len(), 3);
	for &entity in world.entities() {
		assert_eq!(world.get_component::<Counter2>(entity).map(|c| c.c), Some(1));
	}

	let ids = world.system_ids().collect::<Vec<_>>();
	assert_eq!(ids[0], spawner, "The spawner has the lowest priority");
}

#[test]
pub fn same_system_type_registered_twice_gets_two_slots() {
	let mut world = World::new();
	let first = world.add_system(SystemOne::new());
	let second = world.add_system(SystemOne::new());
	assert_ne!(first, second);

	let entity = world.add_entity(counters());
	world.update(0.0);

	assert_eq!(world.members(first), [entity]);
	assert_eq!(world.members(second), [entity]);
	assert_eq!(world.get_component::<Counter1>(entity).map(|c| c.a), Some(2));
}

#[test]
pub fn removing_a_pending_entity() {
	let mut world = World::new();
	let one = world.add_system(SystemOne::new());
	world.update(0.0);

	let entity = world.add_entity(counters());
	assert!(world.remove_entity(entity).is_some());
	assert!(!world.has_pending_changes());

	world.update(0.0);
	assert!(world.members(one).is_empty());
}

#[test]
pub fn membership_follows_reconciliation_order() {
	let mut world = World::new();
	let e1 = world.add_entity(counters());
	let e2 = world.add_entity(counters());
	world.update(0.0);

	let e3 = world.add_entity(counters());
	let one = world.add_system(SystemOne::new());
	let e4 = world.add_entity(counters());
	world.update(0.0);
	assert_eq!(world.members(one), [e1, e2, e3, e4]);

	let e5 = world.add_entity(counters());
	world.update(0.0);
	world.remove_entity(e2);
	assert_eq!(world.members(one), [e1, e3, e4, e5]);
}

#[test]
pub fn checked_narrowing_reports_errors() {
	let mut world = World::new();
	let entity = world.add_entity(EntityData::new().with(Counter1::default()));

	assert!(world.component::<Counter1>(entity).is_ok());
	assert_eq!(
		world.component::<Counter2>(entity).err(),
		Some(EcsError::MissingComponent {
			entity: entity.id(),
			component: std::any::type_name::<Counter2>(),
		})
	);

	world.remove_entity(entity);
	assert_eq!(world.component_mut::<Counter1>(entity).err(), Some(EcsError::UnknownEntity(entity.id())));
	assert!(world.get_component::<Counter1>(entity).is_none());
}

#[test]
pub fn entities_sorted_by_identity() {
	let mut world = World::new();
	let mut created = EntityData::new_batch(8).collect::<Vec<_>>();
	let expected = created.iter().map(|e| e.entity()).collect::<Vec<_>>();

	created.reverse();
	world.add_entities(created);

	let mut reversed = expected.clone();
	reversed.reverse();
	assert_eq!(world.entities(), reversed.as_slice());
	assert_eq!(world.entities_sorted(), expected);
}

#[test]
pub fn update_forwards_elapsed_time() {
	let first = Rc::new(RefCell::new(Vec::new()));
	let second = Rc::new(RefCell::new(Vec::new()));

	let mut world = World::new();
	world.add_system(DeltaRecorder { deltas: first.clone() });
	world.add_system(DeltaRecorder { deltas: second.clone() });
	world.add_entity(counters());

	world.update(0.125);
	world.update(0.5);

	assert_eq!(*first.borrow(), [0.125, 0.5], "Every system receives the dt of each frame");
	assert_eq!(*second.borrow(), [0.125, 0.5], "Every system receives the dt of each frame");
}

#[test]
pub fn system_ids_belong_to_their_world() {
	let mut a = World::new();
	let mut b = World::new();
	let id_a = a.add_system(SystemOne::new());
	let id_b = b.add_system(SystemTwo::new());
	assert_eq!(id_a.index(), id_b.index());
	assert_ne!(id_a, id_b);

	let entity = a.add_entity(counters());
	b.add_entity(counters());
	a.update(0.0);
	b.update(0.0);

	assert_eq!(a.members(id_a), [entity]);
	assert!(a.members(id_b).is_empty(), "Ids from another world have no members");
	assert!(a.system(id_b).is_none());
	assert!(b.system(id_a).is_none());
}
