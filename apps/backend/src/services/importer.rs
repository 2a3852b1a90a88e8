//! Vocabulary import from CSV topic files.
//!
//! A topic is a `*.csv` file in the configured vocabulary directory. Rows
//! become cards unless their exact (vietnamese, english) pair is already
//! stored; matches are skipped silently, never updated.

use std::collections::BTreeMap;
use std::path::Path;

use vocab_core::{default_category, parse_rows, topic_display_name, RowOutcome};

use crate::db::Database;
use crate::error::{ApiError, Result};
use crate::models::{CardCreate, TopicInfo};

/// List importable topics: every CSV file in `vocab_dir`, sorted by
/// filename. A missing directory is an empty list, not an error.
pub async fn available_topics(vocab_dir: &Path) -> Result<Vec<TopicInfo>> {
    if !vocab_dir.exists() {
        return Ok(vec![]);
    }

    let mut filenames = Vec::new();
    let mut entries = tokio::fs::read_dir(vocab_dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("csv") {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            filenames.push(name.to_string());
        }
    }
    filenames.sort();

    Ok(filenames
        .into_iter()
        .map(|filename| TopicInfo {
            name: topic_display_name(stem_of(&filename)),
            filename,
        })
        .collect())
}

/// Load one topic file into the card store.
///
/// Returns the number of newly inserted cards. Rows without an explicit
/// category get the topic's default category. `clear_existing` wipes the
/// whole store first.
pub async fn load_topic(
    db: &Database,
    vocab_dir: &Path,
    filename: &str,
    clear_existing: bool,
) -> Result<usize> {
    let path = vocab_dir.join(filename);
    if !path.is_file() {
        return Err(ApiError::NotFound(format!(
            "Vocabulary file not found: {filename}"
        )));
    }

    let content = tokio::fs::read_to_string(&path).await?;
    let outcomes = parse_rows(&content)?;

    if clear_existing {
        let removed = db.delete_all_cards().await?;
        tracing::warn!("Cleared {removed} existing cards before loading {filename}");
    }

    let fallback_category = default_category(stem_of(filename));

    let mut inserted = 0;
    for outcome in outcomes {
        let record = match outcome {
            RowOutcome::Record(record) => record,
            RowOutcome::Skipped { line, reason } => {
                tracing::debug!("Skipped row {filename}:{line}: {reason:?}");
                continue;
            }
        };

        if db.pair_exists(&record.vietnamese, &record.english).await? {
            continue;
        }

        db.create_card(&CardCreate {
            vietnamese: record.vietnamese,
            english: record.english,
            category: Some(record.category.unwrap_or_else(|| fallback_category.clone())),
            difficulty_level: record.difficulty_level,
        })
        .await?;
        inserted += 1;
    }

    Ok(inserted)
}

/// Import every available topic, returning display name -> inserted count.
///
/// Topics load independently and inserts are not rolled back when a later
/// topic fails; the failing topic's error propagates to the caller.
pub async fn sync_all(db: &Database, vocab_dir: &Path) -> Result<BTreeMap<String, usize>> {
    let mut loaded = BTreeMap::new();
    for topic in available_topics(vocab_dir).await? {
        let count = load_topic(db, vocab_dir, &topic.filename, false).await?;
        loaded.insert(topic.name, count);
    }
    Ok(loaded)
}

fn stem_of(filename: &str) -> &str {
    filename.strip_suffix(".csv").unwrap_or(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_of() {
        assert_eq!(stem_of("common_words.csv"), "common_words");
        assert_eq!(stem_of("no_extension"), "no_extension");
    }
}
