//! CSV vocabulary source parsing.
//!
//! # Format
//! ```csv
//! vietnamese,english,category,difficulty_level
//! xin chào,hello,greetings,1
//! tạm biệt,goodbye,,
//! ```
//!
//! Header names are matched case-insensitively with surrounding whitespace
//! ignored. Only `vietnamese` and `english` are required; `category` and
//! `difficulty_level` are optional columns.

use crate::error::{ImportError, Result};
use crate::types::ImportRecord;

/// Why a row was not turned into an [`ImportRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The `vietnamese` field was empty (or the column absent).
    EmptyVietnamese,
    /// The `english` field was empty (or the column absent).
    EmptyEnglish,
}

/// Outcome of parsing a single row. Skips are data, not errors; only a
/// malformed difficulty value or broken CSV aborts the whole source.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Record(ImportRecord),
    Skipped { line: usize, reason: SkipReason },
}

/// Parse CSV `content` into per-row outcomes.
///
/// Rows whose `vietnamese` or `english` field is empty after trimming are
/// skipped. An absent or empty `difficulty_level` defaults to 1; a
/// non-numeric value fails the whole source with
/// [`ImportError::InvalidDifficulty`].
pub fn parse_rows(content: &str) -> Result<Vec<RowOutcome>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let columns = Columns::resolve(reader.headers()?);

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        // Header occupies line 1; fall back to the record index when the
        // reader has no position (multi-line quoted fields keep their own).
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 2);

        let vietnamese = field(&record, columns.vietnamese);
        let english = field(&record, columns.english);

        if vietnamese.is_empty() {
            rows.push(RowOutcome::Skipped {
                line,
                reason: SkipReason::EmptyVietnamese,
            });
            continue;
        }
        if english.is_empty() {
            rows.push(RowOutcome::Skipped {
                line,
                reason: SkipReason::EmptyEnglish,
            });
            continue;
        }

        let category = field(&record, columns.category);
        let difficulty = field(&record, columns.difficulty);
        let difficulty_level = if difficulty.is_empty() {
            1
        } else {
            difficulty
                .parse::<i64>()
                .map_err(|_| ImportError::InvalidDifficulty {
                    line,
                    value: difficulty.to_string(),
                })?
        };

        rows.push(RowOutcome::Record(ImportRecord {
            vietnamese: vietnamese.to_string(),
            english: english.to_string(),
            category: (!category.is_empty()).then(|| category.to_string()),
            difficulty_level,
        }));
    }

    Ok(rows)
}

/// Display name for a topic file stem: separators become spaces, words are
/// title-cased ("common_words" -> "Common Words").
pub fn topic_display_name(stem: &str) -> String {
    separators_to_spaces(stem)
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Default card category for a topic file stem: separators replaced with
/// spaces, case preserved ("common_words" -> "common words").
pub fn default_category(stem: &str) -> String {
    separators_to_spaces(stem)
}

fn separators_to_spaces(stem: &str) -> String {
    stem.replace(['_', '-'], " ")
}

/// Trimmed field value at `col`, or empty when the column is absent or the
/// row is short.
fn field<'r>(record: &'r csv::StringRecord, col: Option<usize>) -> &'r str {
    col.and_then(|i| record.get(i)).map(str::trim).unwrap_or("")
}

/// Resolved column indices for the recognized header names. First
/// occurrence wins when a header repeats.
struct Columns {
    vietnamese: Option<usize>,
    english: Option<usize>,
    category: Option<usize>,
    difficulty: Option<usize>,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Self {
        let mut columns = Self {
            vietnamese: None,
            english: None,
            category: None,
            difficulty: None,
        };

        for (idx, name) in headers.iter().enumerate() {
            match name.trim().to_lowercase().as_str() {
                "vietnamese" => {
                    columns.vietnamese.get_or_insert(idx);
                }
                "english" => {
                    columns.english.get_or_insert(idx);
                }
                "category" => {
                    columns.category.get_or_insert(idx);
                }
                "difficulty_level" => {
                    columns.difficulty.get_or_insert(idx);
                }
                _ => {}
            }
        }

        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn records(rows: &[RowOutcome]) -> Vec<&ImportRecord> {
        rows.iter()
            .filter_map(|r| match r {
                RowOutcome::Record(rec) => Some(rec),
                RowOutcome::Skipped { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_parse_basic_rows() {
        let rows = parse_rows(
            "vietnamese,english,category,difficulty_level\n\
             xin chào,hello,greetings,1\n\
             tạm biệt,goodbye,,2\n",
        )
        .unwrap();

        let records = records(&rows);
        assert_eq!(records.len(), 2);
        assert_eq!(
            *records[0],
            ImportRecord {
                vietnamese: "xin chào".to_string(),
                english: "hello".to_string(),
                category: Some("greetings".to_string()),
                difficulty_level: 1,
            }
        );
        assert_eq!(records[1].category, None);
        assert_eq!(records[1].difficulty_level, 2);
    }

    #[test]
    fn test_headers_case_insensitive_and_trimmed() {
        let rows = parse_rows(" Vietnamese , ENGLISH \nnước,water\n").unwrap();
        let records = records(&rows);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].vietnamese, "nước");
        assert_eq!(records[0].english, "water");
    }

    #[test]
    fn test_fields_trimmed() {
        let rows = parse_rows("vietnamese,english\n  nước  ,  water  \n").unwrap();
        let records = records(&rows);
        assert_eq!(records[0].vietnamese, "nước");
        assert_eq!(records[0].english, "water");
    }

    #[test]
    fn test_empty_fields_skip_rows() {
        let rows = parse_rows(
            "vietnamese,english\n\
             ,hello\n\
             xin chào,\n\
             nước,water\n",
        )
        .unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            RowOutcome::Skipped {
                line: 2,
                reason: SkipReason::EmptyVietnamese,
            }
        );
        assert_eq!(
            rows[1],
            RowOutcome::Skipped {
                line: 3,
                reason: SkipReason::EmptyEnglish,
            }
        );
        assert_eq!(records(&rows).len(), 1);
    }

    #[test]
    fn test_missing_columns_skip_everything() {
        let rows = parse_rows("foo,bar\na,b\nc,d\n").unwrap();
        assert_eq!(records(&rows).len(), 0);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_difficulty_defaults_to_1() {
        let rows = parse_rows("vietnamese,english,difficulty_level\nnước,water,\n").unwrap();
        assert_eq!(records(&rows)[0].difficulty_level, 1);
    }

    #[test]
    fn test_non_numeric_difficulty_is_fatal() {
        let err = parse_rows("vietnamese,english,difficulty_level\nnước,water,easy\n")
            .unwrap_err();
        match err {
            ImportError::InvalidDifficulty { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "easy");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_short_rows_tolerated() {
        // flexible(true): a row missing trailing columns is not an error.
        let rows = parse_rows("vietnamese,english,category\nnước,water\n").unwrap();
        let records = records(&rows);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, None);
    }

    #[test]
    fn test_topic_display_name() {
        assert_eq!(topic_display_name("common_words"), "Common Words");
        assert_eq!(topic_display_name("food-and-drink"), "Food And Drink");
        assert_eq!(topic_display_name("greetings"), "Greetings");
    }

    #[test]
    fn test_default_category() {
        assert_eq!(default_category("common_words"), "common words");
        assert_eq!(default_category("food-and-drink"), "food and drink");
    }
}
