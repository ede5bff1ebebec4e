pub mod board;
pub mod card;
pub mod drag_drop;
pub mod shuffle;
pub mod sorting;
pub mod time;

pub use board::{default_columns, Column, ColumnId};
pub use card::{Card, CardId};
pub use drag_drop::{compute_drop_index, move_card, CardRect};
pub use sorting::{sort_by_order, sort_by_title, SortDirection};
