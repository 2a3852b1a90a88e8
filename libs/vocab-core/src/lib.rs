//! Core vocabulary library shared by the backend application.
//!
//! Provides:
//! - Answer text normalization (case folding + Unicode NFC)
//! - Progressive hint masking for quiz answers
//! - CSV vocabulary source parsing with tagged per-row outcomes
//! - Shared types (ImportRecord)

pub mod error;
pub mod hint;
pub mod import;
pub mod normalize;
pub mod types;

pub use error::{ImportError, Result};
pub use hint::masked_hint;
pub use import::{default_category, parse_rows, topic_display_name, RowOutcome, SkipReason};
pub use normalize::normalize;
pub use types::ImportRecord;
