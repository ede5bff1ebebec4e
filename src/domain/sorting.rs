use crate::domain::card::Card;
use crate::error::DriftboardError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Transient per-column view state overlaying title-based ordering
///
/// Sorting by title never alters the cards' `order` fields, so clearing the
/// sort can always restore the explicit sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    None,
    Asc,
    Desc,
}

impl SortDirection {
    /// Cyclic transition driving a sort-toggle control: none → asc → desc → none
    pub fn next(self) -> Self {
        match self {
            Self::None => Self::Asc,
            Self::Asc => Self::Desc,
            Self::Desc => Self::None,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = DriftboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(SortDirection::None),
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(DriftboardError::InvalidSortDirection(s.to_string())),
        }
    }
}

/// Returns the cards ordered by title, leaving their `order` fields untouched
///
/// Comparison is case-insensitive. [`SortDirection::None`] returns the input
/// sequence unchanged.
pub fn sort_by_title(cards: &[Card], direction: SortDirection) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    match direction {
        SortDirection::Asc => {
            sorted.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
        SortDirection::Desc => {
            sorted.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()));
        }
        SortDirection::None => {}
    }
    sorted
}

/// Returns the cards in ascending `order`-field sequence
pub fn sort_by_order(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|card| card.order);
    sorted
}
