//! # List Utilities
//!
//! Helpers for `Vec` manipulation where element order does not matter.

/// Removes the element at `index` in O(1) time without preserving order.
///
/// The last element is moved into the vacated slot and the vector shrinks
/// by one (swap-and-pop).
///
/// # Panics
///
/// Panics if `index >= items.len()`. Staying in bounds is the caller's
/// responsibility.
///
/// # Examples
///
/// ```
/// use simkit::remove_at_unordered;
///
/// let mut items = vec!['a', 'b', 'c', 'd'];
/// remove_at_unordered(&mut items, 1);
/// assert_eq!(items, vec!['a', 'd', 'c']);
/// ```
pub fn remove_at_unordered<T>(items: &mut Vec<T>, index: usize) {
    items.swap_remove(index);
}
