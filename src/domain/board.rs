use crate::domain::card::{Card, CardId};
use crate::domain::sorting::SortDirection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnId(String);

impl ColumnId {
    /// Wraps an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh globally-unique identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered bucket of cards representing a workflow stage
///
/// `cards` is the authoritative display order while `sort` is
/// [`SortDirection::None`]; an active sort overlays a title ordering without
/// touching the cards' `order` fields. The `disabled`, `sort`, and
/// `last_edited` fields default when absent so snapshots persisted before
/// they existed still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    pub cards: Vec<Card>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub sort: SortDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited: Option<DateTime<Utc>>,
}

impl Column {
    pub fn new(id: ColumnId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cards: Vec::new(),
            disabled: false,
            sort: SortDirection::None,
            last_edited: None,
        }
    }

    /// Order value for the next card appended to this column
    pub fn next_order(&self) -> u32 {
        self.cards.iter().map(|card| card.order).max().unwrap_or(0) + 1
    }

    /// Rewrites card orders to match the display sequence, 1-based
    pub fn renumber_cards(&mut self) {
        for (index, card) in self.cards.iter_mut().enumerate() {
            card.order = index as u32 + 1;
        }
    }

    pub fn find_card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == id)
    }

    /// Marks the column as edited now
    pub fn touch(&mut self) {
        self.last_edited = Some(Utc::now());
    }
}

/// The three columns every fresh board starts with
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new(ColumnId::new("todo"), "TODO"),
        Column::new(ColumnId::new("in-progress"), "In Progress"),
        Column::new(ColumnId::new("done"), "Done"),
    ]
}
