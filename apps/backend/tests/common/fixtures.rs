//! Test fixtures and factory functions for creating test data.

use std::path::Path;

use serde_json::json;

/// Write a minimal two-column vocabulary CSV into `dir`.
pub fn write_topic_csv(dir: &Path, filename: &str, rows: &[(&str, &str)]) {
    let mut content = String::from("vietnamese,english\n");
    for (vietnamese, english) in rows {
        content.push_str(&format!("{vietnamese},{english}\n"));
    }
    std::fs::write(dir.join(filename), content).expect("Failed to write topic csv");
}

/// Write arbitrary CSV content into `dir`.
pub fn write_raw_csv(dir: &Path, filename: &str, content: &str) {
    std::fs::write(dir.join(filename), content).expect("Failed to write topic csv");
}

/// Greetings topic with category and difficulty columns; the last row
/// leaves the category empty.
pub fn greetings_csv() -> &'static str {
    "vietnamese,english,category,difficulty_level\n\
     xin chào,hello,basics,1\n\
     tạm biệt,goodbye,basics,1\n\
     cảm ơn,thank you,,2\n"
}

/// Create a card creation request body.
pub fn card_create_request(
    vietnamese: &str,
    english: &str,
    category: Option<&str>,
) -> serde_json::Value {
    json!({
        "vietnamese": vietnamese,
        "english": english,
        "category": category,
    })
}

/// Create an answer check request body.
pub fn check_request(card_id: i64, user_input: &str, record_result: bool) -> serde_json::Value {
    json!({
        "card_id": card_id,
        "user_input": user_input,
        "record_result": record_result,
    })
}

/// Create a hint request body.
pub fn hint_request(card_id: i64, hint_level: i64) -> serde_json::Value {
    json!({
        "card_id": card_id,
        "hint_level": hint_level,
    })
}

/// Create a topic load request body.
pub fn topic_load_request(filename: &str, clear_existing: bool) -> serde_json::Value {
    json!({
        "filename": filename,
        "clear_existing": clear_existing,
    })
}
