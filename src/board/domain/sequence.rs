//! Positional move primitive shared by column and task reordering.

/// Moves the element at `from` so that it ends up at index `to`.
///
/// The element is removed and reinserted; everything between the two slots
/// shifts by one to close the gap. This is not a swap: relocating index 0 to
/// index 2 in `[a, b, c, d]` yields `[b, c, a, d]`.
///
/// Returns `false` and leaves `items` untouched when `from == to` or either
/// index is out of bounds.
///
/// # Examples
///
/// ```
/// use taskboard::board::domain::relocate;
///
/// let mut items = vec!['a', 'b', 'c', 'd'];
/// assert!(relocate(&mut items, 3, 0));
/// assert_eq!(items, vec!['d', 'a', 'b', 'c']);
/// ```
pub fn relocate<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    let len = items.len();
    if from == to || from >= len || to >= len {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}
