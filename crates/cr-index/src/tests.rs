//! Unit tests for the arena AVL index.

#[cfg(test)]
mod helpers {
    use cr_core::LocationId;

    use crate::LocationIndex;

    /// Insert `ids` in order with a generated name per id.
    pub fn index_of(ids: &[u32]) -> LocationIndex {
        let mut index = LocationIndex::new();
        for &id in ids {
            index.insert(LocationId(id), format!("loc-{id}"));
        }
        index
    }

    pub fn sorted_ids(index: &LocationIndex) -> Vec<u32> {
        index.iter_sorted().map(|(id, _)| id.0).collect()
    }
}

#[cfg(test)]
mod insert {
    use cr_core::LocationId;

    use crate::LocationIndex;

    use super::helpers::{index_of, sorted_ids};

    #[test]
    fn insert_then_get() {
        let mut index = LocationIndex::new();
        index.insert(LocationId(7), "Hospital");
        assert_eq!(index.get(LocationId(7)), Some("Hospital"));
        assert_eq!(index.get(LocationId(8)), None);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn duplicate_id_updates_name_in_place() {
        let mut index = index_of(&[5, 3, 8]);
        index.insert(LocationId(3), "renamed");
        assert_eq!(index.get(LocationId(3)), Some("renamed"));
        assert_eq!(index.len(), 3, "name update must not add a node");
        index.audit(true);
    }

    // The four rotation cases, each driven by the minimal triggering
    // sequence.  `audit(true)` checks heights and |balance| ≤ 1 everywhere.

    #[test]
    fn left_left_single_rotation() {
        let index = index_of(&[30, 20, 10]);
        index.audit(true);
        assert_eq!(sorted_ids(&index), vec![10, 20, 30]);
    }

    #[test]
    fn right_right_single_rotation() {
        let index = index_of(&[10, 20, 30]);
        index.audit(true);
        assert_eq!(sorted_ids(&index), vec![10, 20, 30]);
    }

    #[test]
    fn left_right_double_rotation() {
        let index = index_of(&[30, 10, 20]);
        index.audit(true);
        assert_eq!(sorted_ids(&index), vec![10, 20, 30]);
    }

    #[test]
    fn right_left_double_rotation() {
        let index = index_of(&[10, 30, 20]);
        index.audit(true);
        assert_eq!(sorted_ids(&index), vec![10, 20, 30]);
    }

    #[test]
    fn ascending_insertions_stay_balanced() {
        let mut index = LocationIndex::new();
        for id in 0..128 {
            index.insert(LocationId(id), format!("loc-{id}"));
            index.audit(true);
        }
        assert_eq!(index.len(), 128);
    }

    #[test]
    fn shuffled_insertions_stay_balanced() {
        use rand::rngs::SmallRng;
        use rand::seq::SliceRandom;
        use rand::SeedableRng;

        let mut rng = SmallRng::seed_from_u64(42);
        let mut ids: Vec<u32> = (0..200).collect();
        ids.shuffle(&mut rng);

        let mut index = LocationIndex::new();
        for &id in &ids {
            index.insert(LocationId(id), format!("loc-{id}"));
            index.audit(true);
        }
        assert_eq!(sorted_ids(&index), (0..200).collect::<Vec<_>>());
    }
}

#[cfg(test)]
mod remove {
    use cr_core::LocationId;

    use crate::{IndexError, LocationIndex};

    use super::helpers::{index_of, sorted_ids};

    #[test]
    fn remove_absent_reports_not_found() {
        let mut index = index_of(&[1, 2, 3]);
        let err = index.remove(LocationId(9)).unwrap_err();
        assert!(matches!(err, IndexError::LocationNotFound(LocationId(9))));
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn remove_leaf() {
        let mut index = index_of(&[2, 1, 3]);
        index.remove(LocationId(1)).unwrap();
        assert_eq!(index.get(LocationId(1)), None);
        assert_eq!(sorted_ids(&index), vec![2, 3]);
        index.audit(false);
    }

    #[test]
    fn remove_one_child_node() {
        // 2 is root, 1 left, 3 right, 4 under 3.  Removing 3 promotes 4.
        let mut index = index_of(&[2, 1, 3, 4]);
        index.remove(LocationId(3)).unwrap();
        assert_eq!(sorted_ids(&index), vec![1, 2, 4]);
        index.audit(false);
    }

    #[test]
    fn remove_two_child_node_splices_successor() {
        let mut index = index_of(&[20, 10, 30, 25, 40]);
        // 30 has two children; its in-order successor 40 takes its place.
        index.remove(LocationId(30)).unwrap();
        assert_eq!(index.get(LocationId(30)), None);
        assert_eq!(index.get(LocationId(40)), Some("loc-40"));
        assert_eq!(sorted_ids(&index), vec![10, 20, 25, 40]);
        index.audit(false);
    }

    #[test]
    fn remove_root_with_two_children() {
        let mut index = index_of(&[20, 10, 30]);
        index.remove(LocationId(20)).unwrap();
        assert_eq!(sorted_ids(&index), vec![10, 30]);
        index.audit(false);
    }

    #[test]
    fn insert_n_remove_n_returns_to_empty() {
        let mut index = index_of(&[5, 3, 8, 1, 4, 7, 9, 2, 6]);
        for id in 1..=9 {
            index.remove(LocationId(id)).unwrap();
        }
        assert!(index.is_empty());
        assert_eq!(index.iter_sorted().count(), 0);
        assert_eq!(index.get(LocationId(5)), None);
    }

    #[test]
    fn freed_slots_are_recycled() {
        let mut index = index_of(&[1, 2, 3]);
        index.remove(LocationId(2)).unwrap();
        // Re-inserting after a removal must reuse the freed slot, and the
        // structure must stay consistent either way.
        index.insert(LocationId(2), "back");
        assert_eq!(index.get(LocationId(2)), Some("back"));
        assert_eq!(sorted_ids(&index), vec![1, 2, 3]);
        index.audit(false);
    }

    #[test]
    fn randomized_remove_keeps_ordering_and_heights() {
        use rand::rngs::SmallRng;
        use rand::seq::SliceRandom;
        use rand::SeedableRng;
        use std::collections::BTreeSet;

        let mut rng = SmallRng::seed_from_u64(7);
        let mut ids: Vec<u32> = (0..150).collect();
        ids.shuffle(&mut rng);

        let mut index = index_of(&ids);
        let mut live: BTreeSet<u32> = ids.iter().copied().collect();

        ids.shuffle(&mut rng);
        for &id in &ids {
            index.remove(LocationId(id)).unwrap();
            live.remove(&id);
            index.audit(false);
            assert_eq!(sorted_ids(&index), live.iter().copied().collect::<Vec<_>>());
        }
        assert!(index.is_empty());
    }
}

#[cfg(test)]
mod iter {
    use cr_core::LocationId;

    use super::helpers::{index_of, sorted_ids};

    #[test]
    fn strictly_increasing_regardless_of_insertion_order() {
        let index = index_of(&[40, 10, 30, 20, 50]);
        assert_eq!(sorted_ids(&index), vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn yields_names_alongside_ids() {
        let index = index_of(&[2, 1]);
        let pairs: Vec<_> = index.iter_sorted().collect();
        assert_eq!(pairs, vec![(LocationId(1), "loc-1"), (LocationId(2), "loc-2")]);
    }

    #[test]
    fn restartable() {
        let index = index_of(&[3, 1, 2]);
        let first: Vec<_> = index.iter_sorted().collect();
        let second: Vec<_> = index.iter_sorted().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_index_yields_nothing() {
        let index = index_of(&[]);
        assert_eq!(index.iter_sorted().next(), None);
    }
}
