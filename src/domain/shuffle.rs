use crate::domain::board::Column;
use rand::Rng;

/// Uniform random permutation of a copy of `items`
///
/// Fisher–Yates: swaps from the last index down to 1, the partner index
/// drawn uniformly from `[0, i]`. The input is never modified.
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// [`shuffle_with`] driven by the thread-local generator
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::rng())
}

/// Randomly permutes the column sequence; card contents are untouched
pub fn shuffle_columns(columns: &[Column]) -> Vec<Column> {
    shuffle(columns)
}

pub fn shuffle_columns_with<R: Rng + ?Sized>(columns: &[Column], rng: &mut R) -> Vec<Column> {
    shuffle_with(columns, rng)
}

/// Shuffles each column's cards independently, reassigning `order` to the
/// new 1-based positions
pub fn shuffle_cards_per_column(columns: &[Column]) -> Vec<Column> {
    shuffle_cards_per_column_with(columns, &mut rand::rng())
}

pub fn shuffle_cards_per_column_with<R: Rng + ?Sized>(
    columns: &[Column],
    rng: &mut R,
) -> Vec<Column> {
    columns
        .iter()
        .map(|column| {
            let mut shuffled = column.clone();
            shuffled.cards = shuffle_with(&column.cards, rng);
            shuffled.renumber_cards();
            shuffled
        })
        .collect()
}
