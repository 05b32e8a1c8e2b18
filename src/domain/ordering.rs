//! Helpers for the ordered collections behind drag-and-drop.
//!
//! Columns within a board and cards within a column are plain `Vec`s whose
//! order is what the user sees. Drag-and-drop produces either a full new
//! order (a list of IDs) or a pair of indices; both are applied here.

use std::collections::HashSet;
use std::hash::Hash;

/// Rearranges `items` to follow `order`
///
/// `order` must name every item exactly once. Anything else (unknown keys,
/// missing keys, duplicates) leaves `items` untouched and returns `false`.
///
/// # Examples
/// ```
/// use kanban_store::domain::ordering::reorder_by_key;
///
/// let mut items = vec!["a", "b", "c"];
/// assert!(reorder_by_key(&mut items, &["c", "a", "b"], |item| item));
/// assert_eq!(items, vec!["c", "a", "b"]);
///
/// assert!(!reorder_by_key(&mut items, &["a", "b"], |item| item));
/// assert_eq!(items, vec!["c", "a", "b"]);
/// ```
pub fn reorder_by_key<T, K, F>(items: &mut Vec<T>, order: &[K], key: F) -> bool
where
    K: Eq + Hash,
    F: Fn(&T) -> &K,
{
    if order.len() != items.len() {
        return false;
    }

    let wanted: HashSet<&K> = order.iter().collect();
    if wanted.len() != order.len() || !items.iter().all(|item| wanted.contains(key(item))) {
        return false;
    }

    let mut remaining: Vec<Option<T>> = items.drain(..).map(Some).collect();
    for k in order {
        let position = remaining
            .iter()
            .position(|slot| matches!(slot, Some(item) if key(item) == k));
        if let Some(item) = position.and_then(|i| remaining[i].take()) {
            items.push(item);
        }
    }

    true
}

/// Moves the item at `from` so that it ends up at `to`
///
/// `to` past the end means "drop at the end". Returns `false` when `from`
/// is out of range.
pub fn move_within<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() {
        return false;
    }

    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
    true
}
