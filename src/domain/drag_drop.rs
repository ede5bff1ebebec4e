use crate::domain::board::{Column, ColumnId};
use crate::domain::card::Card;

/// Vertical bounding box of a rendered card element
///
/// The UI's layout query reports one rect per card element in display order,
/// with drop-zone markers already excluded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRect {
    pub top: f64,
    pub height: f64,
}

impl CardRect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Index at which a dropped card should be inserted
///
/// Returns the index of the first card whose vertical midpoint lies below
/// the pointer, or the end of the list when the pointer is past every card.
pub fn compute_drop_index(pointer_y: f64, card_rects: &[CardRect]) -> usize {
    card_rects
        .iter()
        .position(|rect| pointer_y < rect.midpoint())
        .unwrap_or(card_rects.len())
}

/// Relocates `card` into the target column at `target_index`
///
/// The card is removed by id from every column first, so it can never end up
/// in two places. The target column's cards are renumbered to their new
/// 1-based positions; other columns keep their existing orders. An index past
/// the end appends. A card found in no column is still inserted, which makes
/// this double as an add.
pub fn move_card(
    columns: &[Column],
    card: &Card,
    target_column_id: &ColumnId,
    target_index: usize,
) -> Vec<Column> {
    columns
        .iter()
        .map(|column| {
            let mut updated = column.clone();
            updated.cards.retain(|existing| existing.id != card.id);

            if &updated.id == target_column_id {
                let index = target_index.min(updated.cards.len());
                updated.cards.insert(index, card.clone());
                updated.renumber_cards();
            }
            updated
        })
        .collect()
}
