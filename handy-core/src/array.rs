// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rand::Rng;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Group `items` by the key `key` extracts.
///
/// Groups appear in the order their key is first seen; items keep their input
/// order inside a group.
///
/// ```
/// use handy_core::group_by;
///
/// let words = ["apple", "bean", "avocado", "beet", "cherry"];
/// let groups = group_by(&words, |word| word.chars().next());
///
/// assert_eq!(
///     groups,
///     vec![
///         (Some('a'), vec!["apple", "avocado"]),
///         (Some('b'), vec!["bean", "beet"]),
///         (Some('c'), vec!["cherry"]),
///     ]
/// );
/// ```
pub fn group_by<T, K, F>(items: &[T], mut key: F) -> Vec<(K, Vec<T>)>
where
    T: Clone,
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut slots = HashMap::new();
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();

    for item in items {
        let group_key = key(item);
        let slot = *slots.entry(group_key.clone()).or_insert_with(|| {
            groups.push((group_key, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(item.clone());
    }

    groups
}

/// A uniformly shuffled copy of `items` (Fisher-Yates). The input is untouched.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::rng())
}

/// [`shuffle`] with a caller-supplied random source.
pub fn shuffle_with<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();

    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }

    shuffled
}

/// `items` without repeats, keeping the first occurrence of each value.
pub fn unique<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());

    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}
