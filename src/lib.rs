//! # Driftboard Core
//!
//! Core board state and domain models for Driftboard kanban.
//!
//! This crate provides the types and operations for managing a drag-and-drop
//! kanban board (columns of ordered cards with sorting, shuffling, and
//! persistence) without any dependency on specific UI implementations or
//! storage backends.

pub mod domain;
pub mod error;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use domain::{
    board::{default_columns, Column, ColumnId},
    card::{Card, CardId},
    drag_drop::{compute_drop_index, move_card, CardRect},
    sorting::SortDirection,
};
pub use error::{DriftboardError, Result};
pub use storage::Storage;
pub use store::{BoardStore, Subscription};
