//! Database models and API types

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// === Database Entity Types ===

/// A vocabulary flashcard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Card {
    pub id: i64,
    pub vietnamese: String,
    pub english: String,
    pub category: Option<String>,
    pub difficulty_level: i64,
    pub success_count: i64,
    pub fail_count: i64,
    pub last_reviewed: Option<DateTime<Utc>>,
    pub mastered: bool,
}

// === Quiz Types ===

/// Quiz direction: which phrase is shown as the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizMode {
    EngToViet,
    VietToEng,
}

impl Default for QuizMode {
    fn default() -> Self {
        Self::EngToViet
    }
}

impl QuizMode {
    /// The phrase shown to the user.
    pub fn prompt<'a>(&self, card: &'a Card) -> &'a str {
        match self {
            Self::EngToViet => &card.english,
            Self::VietToEng => &card.vietnamese,
        }
    }

    /// The phrase the user is asked to produce.
    pub fn answer<'a>(&self, card: &'a Card) -> &'a str {
        match self {
            Self::EngToViet => &card.vietnamese,
            Self::VietToEng => &card.english,
        }
    }
}

/// Card projection sent during a quiz; hides the answer side.
#[derive(Debug, Serialize, Deserialize)]
pub struct CardQuiz {
    pub id: i64,
    pub prompt: String,
    pub mode: QuizMode,
    pub category: Option<String>,
}

// === API Request/Response Types ===

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardCreate {
    pub vietnamese: String,
    pub english: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_difficulty")]
    pub difficulty_level: i64,
}

fn default_difficulty() -> i64 {
    1
}

#[derive(Debug, Deserialize)]
pub struct RandomCardQuery {
    #[serde(default)]
    pub mode: QuizMode,
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckRequest {
    pub card_id: i64,
    pub user_input: String,
    /// Record the attempt even when the answer is wrong (final-attempt
    /// semantics). Correct answers are always recorded.
    #[serde(default)]
    pub record_result: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResponse {
    pub correct: bool,
    /// The matched phrase; only present on a correct answer.
    pub expected: Option<String>,
    /// The user's input echoed back verbatim.
    pub user_input: String,
    /// Reserved for character-level diff decoration; not computed.
    pub diff: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GiveUpRequest {
    pub card_id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GiveUpResponse {
    pub answer: String,
    pub vietnamese: String,
    pub english: String,
}

#[derive(Debug, Deserialize)]
pub struct HintQuery {
    #[serde(default)]
    pub mode: QuizMode,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HintRequest {
    pub card_id: i64,
    pub hint_level: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HintResponse {
    pub hint: String,
    pub hint_level: u8,
}

#[derive(Debug, Deserialize)]
pub struct ListCardsQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub category: Option<String>,
}

fn default_limit() -> i64 {
    100
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClearCardsResponse {
    pub deleted: u64,
    pub message: String,
}

/// Aggregated learning statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_cards: i64,
    pub total_attempts: i64,
    pub total_success: i64,
    pub total_fail: i64,
    /// Success percentage rounded to one decimal place; 0 with no attempts.
    pub accuracy: f64,
}

impl StatsResponse {
    pub fn from_totals(total_cards: i64, total_success: i64, total_fail: i64) -> Self {
        let total_attempts = total_success + total_fail;
        let accuracy = if total_attempts > 0 {
            (total_success as f64 / total_attempts as f64 * 1000.0).round() / 10.0
        } else {
            0.0
        };

        Self {
            total_cards,
            total_attempts,
            total_success,
            total_fail,
            accuracy,
        }
    }
}

// === Topic Types ===

/// An importable vocabulary topic file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicInfo {
    pub name: String,
    pub filename: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TopicLoadRequest {
    pub filename: String,
    #[serde(default)]
    pub clear_existing: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TopicLoadResponse {
    pub filename: String,
    pub cards_loaded: usize,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SyncTopicsResponse {
    pub message: String,
    /// Topic display name -> newly inserted card count.
    pub loaded: BTreeMap<String, usize>,
}
