//! Card CRUD, statistics, and category endpoints.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /api/card
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CardCreate>,
) -> Result<Json<Card>> {
    let card = state.db.create_card(&payload).await?;
    tracing::info!("Created new card: {} -> {}", card.english, card.vietnamese);
    Ok(Json(card))
}

/// GET /api/cards
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListCardsQuery>,
) -> Result<Json<Vec<Card>>> {
    let cards = state
        .db
        .list_cards(query.skip, query.limit, query.category.as_deref())
        .await?;
    Ok(Json(cards))
}

/// DELETE /api/cards
pub async fn clear_all(State(state): State<AppState>) -> Result<Json<ClearCardsResponse>> {
    let deleted = state.db.delete_all_cards().await?;
    tracing::warn!("Deleted all {deleted} cards");
    Ok(Json(ClearCardsResponse {
        deleted,
        message: format!("Deleted {deleted} cards"),
    }))
}

/// GET /api/stats
pub async fn stats(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    Ok(Json(state.db.stats().await?))
}

/// GET /api/categories
pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    Ok(Json(state.db.categories().await?))
}
