//! Core types for vocabulary import.

use serde::{Deserialize, Serialize};

/// A validated vocabulary row ready to become a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRecord {
    pub vietnamese: String,
    pub english: String,
    /// Category from the source row, if the column was present and non-empty.
    /// Callers fall back to the topic's default category.
    pub category: Option<String>,
    pub difficulty_level: i64,
}
