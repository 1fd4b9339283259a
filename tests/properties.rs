//! Behavioural properties of the public skip set API.

use std::collections::BTreeSet;

use ordered_skipset::{
    CompareFn, GeometricLevels, LevelGenerator, NaturalOrder, SkipSet, SkipSetConfig,
    SkipSetError,
};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn contents<C, G>(set: &SkipSet<i64, C, G>) -> Vec<i64> {
    set.iter().copied().collect()
}

fn random_set(seed: u64, count: usize) -> (SkipSet<i64>, BTreeSet<i64>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut set = SkipSet::with_config(SkipSetConfig::new(10).with_seed(seed)).unwrap();
    let mut model = BTreeSet::new();

    for _ in 0..count {
        let value = rng.gen_range(-500..500);
        assert_eq!(set.insert(value).unwrap(), model.insert(value));
    }
    (set, model)
}

#[test]
fn scenario_max_level_four() {
    let mut set = SkipSet::with_config(SkipSetConfig::new(4)).unwrap();

    for value in [5, 3, 8, 1] {
        assert!(set.insert(value).unwrap());
    }
    assert_eq!(contents(&set), vec![1, 3, 5, 8]);

    assert!(set.erase(&3));
    assert_eq!(set.len(), 3);
    assert_eq!(contents(&set), vec![1, 5, 8]);

    assert_eq!(set.find(&8), Some(&8));
    assert_eq!(set.find(&99), None);

    assert!(!set.erase(&99));
    assert_eq!(set.len(), 3);
}

#[test]
fn iteration_is_strictly_ascending() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut set = SkipSet::with_config(SkipSetConfig::new(8)).unwrap();

    for _ in 0..5_000 {
        let value = rng.gen_range(-1_000..1_000);
        if rng.gen_bool(0.7) {
            set.insert(value).unwrap();
        } else {
            set.erase(&value);
        }

        let values = contents(&set);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(values.len(), set.len());
    }
}

#[test]
fn size_counts_distinct_inserts_minus_erases() {
    let (mut set, mut model) = random_set(2, 2_000);
    let distinct = model.len();
    let mut erased = 0;

    for value in (-500..500).step_by(3) {
        if set.erase(&value) {
            model.remove(&value);
            erased += 1;
        }
    }

    assert_eq!(set.len(), distinct - erased);
    assert_eq!(set.len(), set.iter().count());
    assert!(set.iter().eq(model.iter()));
}

#[test]
fn insert_existing_value_changes_nothing() {
    let (mut set, model) = random_set(3, 500);
    let before = contents(&set);
    let size = set.len();

    for value in model.iter().copied() {
        assert!(!set.insert(value).unwrap());
    }

    assert_eq!(set.len(), size);
    assert_eq!(contents(&set), before);
    for value in &model {
        assert_eq!(set.find(value), Some(value));
    }
}

#[test]
fn erase_absent_value_changes_nothing() {
    let (mut set, _) = random_set(4, 500);
    let before = contents(&set);
    let level = set.level();
    let version = set.version();

    for value in [-10_000, 10_000, 777, -777] {
        assert!(!set.erase(&value));
        assert!(set.take(&value).is_none());
    }

    assert_eq!(contents(&set), before);
    assert_eq!(set.level(), level);
    assert_eq!(set.version(), version);
}

#[test]
fn find_matches_iteration() {
    let (set, model) = random_set(5, 800);

    for value in -600..600 {
        let listed = set.iter().any(|v| *v == value);
        assert_eq!(set.find(&value).is_some(), listed, "find({value})");
        assert_eq!(set.contains(&value), model.contains(&value));
    }
}

#[test]
fn insert_all_then_erase_all_is_empty() {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let mut values: Vec<i64> = (0..3_000).collect();
    for i in (1..values.len()).rev() {
        values.swap(i, rng.gen_range(0..=i));
    }

    let mut set = SkipSet::with_config(SkipSetConfig::new(12)).unwrap();
    assert_eq!(set.try_extend(values.iter().copied()).unwrap(), values.len());

    for value in &values {
        assert!(set.erase(value));
    }

    let fresh: SkipSet<i64> = SkipSet::with_config(SkipSetConfig::new(12)).unwrap();
    assert_eq!(set.len(), 0);
    assert!(set.is_empty());
    assert_eq!(set.begin(), set.end());
    assert_eq!(set.level(), fresh.level());
    assert!(set.first().is_none());
    assert!(set.last().is_none());
}

#[test]
fn zero_max_level_is_rejected() {
    let result = SkipSet::<i64>::with_config(SkipSetConfig::new(0));
    assert!(matches!(result, Err(SkipSetError::InvalidConfiguration(_))));

    let result = GeometricLevels::new(0, 0.5, 1);
    assert!(matches!(result, Err(SkipSetError::InvalidConfiguration(_))));
}

#[test]
fn bad_probability_is_rejected() {
    let result = SkipSet::<i64>::with_config(SkipSetConfig::new(4).with_probability(1.0));
    assert!(matches!(result, Err(SkipSetError::InvalidConfiguration(_))));
}

#[test]
fn huge_max_level_reports_out_of_memory() {
    let result = SkipSet::<i64>::with_config(SkipSetConfig::new(usize::MAX));
    assert!(matches!(result, Err(SkipSetError::OutOfMemory { .. })));
}

#[test]
fn single_level_set_is_a_sorted_list() {
    let mut set = SkipSet::with_config(SkipSetConfig::new(1)).unwrap();
    set.try_extend([9, 2, 7, 4]).unwrap();

    assert_eq!(set.level(), 1);
    assert_eq!(contents(&set), vec![2, 4, 7, 9]);
    assert!(set.erase(&7));
    assert_eq!(contents(&set), vec![2, 4, 9]);
}

#[test]
fn independent_sets_with_same_seed_have_same_shape() {
    let config = SkipSetConfig::new(10).with_seed(99);
    let mut a = SkipSet::with_config(config).unwrap();
    let mut b = SkipSet::with_config(config).unwrap();
    let mut other = SkipSet::with_config(config.with_seed(100)).unwrap();

    let mut levels = Vec::new();
    for value in 0..2_000i64 {
        a.insert(value).unwrap();
        b.insert(value).unwrap();
        other.insert(value).unwrap();
        levels.push((a.level(), b.level()));
    }

    assert!(levels.iter().all(|(x, y)| x == y));
    assert!(a.iter().eq(other.iter()));
}

/// Always builds towers of one fixed height
struct FixedHeight(usize);

impl LevelGenerator for FixedHeight {
    fn max_level(&self) -> usize {
        8
    }

    fn random_height(&mut self) -> usize {
        self.0
    }
}

#[test]
fn injected_generator_drives_level() {
    let mut set = SkipSet::with_generator(NaturalOrder, FixedHeight(5)).unwrap();
    assert_eq!(set.max_level(), 8);
    assert_eq!(set.level(), 1);

    set.try_extend(0..100i64).unwrap();
    assert_eq!(set.level(), 5);
    assert_eq!(set.len(), 100);

    set.clear();
    assert_eq!(set.level(), 1);
}

#[test]
fn cursor_walks_in_order_and_detects_mutation() {
    let mut set = SkipSet::new();
    set.try_extend([30i64, 10, 20]).unwrap();

    let mut cursor = set.begin();
    let mut seen = Vec::new();
    while cursor != set.end() {
        seen.push(*set.value_at(&cursor).unwrap().unwrap());
        set.advance(&mut cursor).unwrap();
    }
    assert_eq!(seen, vec![10, 20, 30]);

    let mut cursor = set.begin();
    set.insert(5).unwrap();
    assert!(matches!(
        set.advance(&mut cursor),
        Err(SkipSetError::CursorInvalidated { .. })
    ));
    assert!(matches!(
        set.value_at(&cursor),
        Err(SkipSetError::CursorInvalidated { .. })
    ));
}

#[test]
fn empty_set_begin_equals_end() {
    let set: SkipSet<i64> = SkipSet::new();
    assert_eq!(set.begin(), set.end());
    assert!(set.begin().is_end());
    assert_eq!(set.value_at(&set.begin()).unwrap(), None);
}

#[test]
fn equality_comes_from_the_comparator() {
    // Ordering by absolute value: 3 and -3 are the same element
    let by_abs = CompareFn::new(|a: &i64, b: &i64| a.abs() < b.abs());
    let mut set = SkipSet::with_comparator(SkipSetConfig::new(6), by_abs).unwrap();

    assert!(set.insert(3).unwrap());
    assert!(!set.insert(-3).unwrap());
    assert!(set.insert(-1).unwrap());
    assert!(set.insert(2).unwrap());

    assert_eq!(contents(&set), vec![-1, 2, 3]);
    assert_eq!(set.find(&-3), Some(&3));
    assert!(set.erase(&1));
    assert_eq!(contents(&set), vec![2, 3]);
}

#[test]
fn pop_first_drains_in_order() {
    let (mut set, model) = random_set(8, 300);
    let mut drained = Vec::new();
    while let Some(value) = set.pop_first() {
        drained.push(value);
    }

    assert_eq!(drained, model.into_iter().collect::<Vec<_>>());
    assert!(set.is_empty());
    assert_eq!(set.level(), 1);
}

#[test]
fn into_iter_yields_owned_values_in_order() {
    let (set, model) = random_set(9, 300);
    let owned: Vec<i64> = set.into_iter().collect();
    assert_eq!(owned, model.into_iter().collect::<Vec<_>>());
}
