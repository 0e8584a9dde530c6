//! Responsive row sizing and column distribution.

/// Book cards that fit in one summary row.
pub fn visible_per_row(container_width: f64, card_width: u32) -> usize {
    if card_width == 0 || !container_width.is_finite() || container_width <= 0.0 {
        return 0;
    }
    (container_width / f64::from(card_width)).floor() as usize
}

/// Similar books shown on a book page: two rows plus one.
pub fn similar_books_visible(container_width: f64, card_width: u32) -> usize {
    visible_per_row(container_width, card_width) * 2 + 1
}

/// Split `items` into three columns of `floor(n / 3)` each, appending the
/// remainder to the first column.
pub fn three_columns<T: Clone>(items: &[T]) -> [Vec<T>; 3] {
    let per_column = items.len() / 3;
    let mut columns: [Vec<T>; 3] =
        std::array::from_fn(|c| items[c * per_column..(c + 1) * per_column].to_vec());
    columns[0].extend_from_slice(&items[3 * per_column..]);
    columns
}
