//! Quiz endpoints: random card, answer check, give up, hints.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;

use vocab_core::{masked_hint, normalize};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/card/random
pub async fn random_card(
    State(state): State<AppState>,
    Query(query): Query<RandomCardQuery>,
) -> Result<Json<CardQuiz>> {
    let card = state
        .db
        .random_card(query.category.as_deref())
        .await?
        .ok_or_else(|| ApiError::NotFound("No cards available".to_string()))?;

    Ok(Json(CardQuiz {
        id: card.id,
        prompt: query.mode.prompt(&card).to_string(),
        mode: query.mode,
        category: card.category,
    }))
}

/// POST /api/check
pub async fn check(
    State(state): State<AppState>,
    Json(payload): Json<CheckRequest>,
) -> Result<Json<CheckResponse>> {
    let card = state
        .db
        .get_card(payload.card_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Card {} not found", payload.card_id)))?;

    let user_normalized = normalize(&payload.user_input);
    let correct_viet = user_normalized == normalize(&card.vietnamese);
    let correct_eng = user_normalized == normalize(&card.english);
    let correct = correct_viet || correct_eng;

    if payload.record_result || correct {
        state.db.record_attempt(card.id, correct, Utc::now()).await?;
    }

    // The answer is only revealed on a correct match; give-up is the
    // intentional reveal path.
    let expected = correct.then(|| {
        if correct_viet {
            card.vietnamese.clone()
        } else {
            card.english.clone()
        }
    });

    Ok(Json(CheckResponse {
        correct,
        expected,
        user_input: payload.user_input,
        diff: None,
    }))
}

/// POST /api/give_up
pub async fn give_up(
    State(state): State<AppState>,
    Json(payload): Json<GiveUpRequest>,
) -> Result<Json<GiveUpResponse>> {
    let card = state
        .db
        .get_card(payload.card_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Card {} not found", payload.card_id)))?;

    state.db.record_attempt(card.id, false, Utc::now()).await?;

    Ok(Json(GiveUpResponse {
        answer: card.vietnamese.clone(),
        vietnamese: card.vietnamese,
        english: card.english,
    }))
}

/// POST /api/hint
pub async fn hint(
    State(state): State<AppState>,
    Query(query): Query<HintQuery>,
    Json(payload): Json<HintRequest>,
) -> Result<Json<HintResponse>> {
    let card = state
        .db
        .get_card(payload.card_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Card {} not found", payload.card_id)))?;

    let hint_level = payload.hint_level.clamp(1, 3) as u8;
    let hint = masked_hint(query.mode.answer(&card), hint_level);

    Ok(Json(HintResponse { hint, hint_level }))
}
