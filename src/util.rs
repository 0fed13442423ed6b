//! Small collection helpers

use std::collections::HashSet;
use std::hash::Hash;

/// Removes duplicates from `items`, keeping the first occurrence of each
/// key and preserving order.
pub fn dedupe_by_key<T, K, F>(items: Vec<T>, mut key: F) -> Vec<T>
where
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(key(item))).collect()
}

/// Removes duplicates from `items`, keeping the last occurrence of each
/// key and preserving the relative order of what remains.
pub fn dedupe_keep_last_by_key<T, K, F>(mut items: Vec<T>, key: F) -> Vec<T>
where
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    items.reverse();
    let mut kept = dedupe_by_key(items, key);
    kept.reverse();
    kept
}
