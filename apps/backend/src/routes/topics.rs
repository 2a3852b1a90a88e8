//! Vocabulary topic endpoints.

use std::collections::BTreeMap;

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::services::importer;
use crate::AppState;

/// GET /api/topics
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TopicInfo>>> {
    let topics = importer::available_topics(&state.config.vocab_dir).await?;
    Ok(Json(topics))
}

/// POST /api/topics/load
pub async fn load(
    State(state): State<AppState>,
    Json(payload): Json<TopicLoadRequest>,
) -> Result<Json<TopicLoadResponse>> {
    let count = importer::load_topic(
        &state.db,
        &state.config.vocab_dir,
        &payload.filename,
        payload.clear_existing,
    )
    .await?;

    let action = if payload.clear_existing {
        "Replaced all cards with"
    } else {
        "Added"
    };
    tracing::info!("Loaded {count} cards from {}", payload.filename);

    Ok(Json(TopicLoadResponse {
        message: format!("{action} {count} cards from {}", payload.filename),
        filename: payload.filename,
        cards_loaded: count,
    }))
}

/// POST /api/topics/sync
pub async fn sync(State(state): State<AppState>) -> Result<Json<SyncTopicsResponse>> {
    let vocab_dir = &state.config.vocab_dir;

    if !vocab_dir.exists() {
        tokio::fs::create_dir_all(vocab_dir).await?;
        return Ok(Json(SyncTopicsResponse {
            message: "Created vocab directory. Add CSV files and sync again.".to_string(),
            loaded: BTreeMap::new(),
        }));
    }

    let loaded = importer::sync_all(&state.db, vocab_dir).await?;
    let total: usize = loaded.values().sum();
    tracing::info!("Synced {total} cards from {} files", loaded.len());

    Ok(Json(SyncTopicsResponse {
        message: format!("Synced {total} new cards from {} files", loaded.len()),
        loaded,
    }))
}
