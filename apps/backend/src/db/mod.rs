//! SQLite database operations

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};

use crate::error::{ApiError, Result};
use crate::models::{Card, CardCreate, StatsResponse};

const CARD_COLUMNS: &str = "id, vietnamese, english, category, difficulty_level, \
                            success_count, fail_count, last_reviewed, mastered";

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the SQLite database, creating the file when missing.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // An in-memory database exists per connection; a second pooled
        // connection would see an empty schema.
        let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Database(e.into()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // === Card Repository ===

    /// Insert a card and return the stored row.
    pub async fn create_card(&self, card: &CardCreate) -> Result<Card> {
        let card = sqlx::query_as::<_, Card>(&format!(
            r#"
            INSERT INTO cards (vietnamese, english, category, difficulty_level)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING {CARD_COLUMNS}
            "#,
        ))
        .bind(&card.vietnamese)
        .bind(&card.english)
        .bind(&card.category)
        .bind(card.difficulty_level)
        .fetch_one(&self.pool)
        .await?;

        Ok(card)
    }

    /// Get card by ID
    pub async fn get_card(&self, card_id: i64) -> Result<Option<Card>> {
        let card = sqlx::query_as::<_, Card>(&format!(
            r#"
            SELECT {CARD_COLUMNS}
            FROM cards
            WHERE id = ?1
            "#,
        ))
        .bind(card_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(card)
    }

    /// Pick one card at random, optionally restricted to a category.
    pub async fn random_card(&self, category: Option<&str>) -> Result<Option<Card>> {
        let card = match category {
            Some(category) => {
                sqlx::query_as::<_, Card>(&format!(
                    r#"
                    SELECT {CARD_COLUMNS}
                    FROM cards
                    WHERE category = ?1
                    ORDER BY RANDOM()
                    LIMIT 1
                    "#,
                ))
                .bind(category)
                .fetch_optional(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Card>(&format!(
                    r#"
                    SELECT {CARD_COLUMNS}
                    FROM cards
                    ORDER BY RANDOM()
                    LIMIT 1
                    "#,
                ))
                .fetch_optional(&self.pool)
                .await?
            }
        };

        Ok(card)
    }

    /// List cards with offset pagination, optionally filtered by category.
    pub async fn list_cards(
        &self,
        skip: i64,
        limit: i64,
        category: Option<&str>,
    ) -> Result<Vec<Card>> {
        let cards = match category {
            Some(category) => {
                sqlx::query_as::<_, Card>(&format!(
                    r#"
                    SELECT {CARD_COLUMNS}
                    FROM cards
                    WHERE category = ?1
                    ORDER BY id
                    LIMIT ?2 OFFSET ?3
                    "#,
                ))
                .bind(category)
                .bind(limit)
                .bind(skip)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Card>(&format!(
                    r#"
                    SELECT {CARD_COLUMNS}
                    FROM cards
                    ORDER BY id
                    LIMIT ?1 OFFSET ?2
                    "#,
                ))
                .bind(limit)
                .bind(skip)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(cards)
    }

    /// Whether a card with this exact (vietnamese, english) pair exists.
    pub async fn pair_exists(&self, vietnamese: &str, english: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM cards WHERE vietnamese = ?1 AND english = ?2",
        )
        .bind(vietnamese)
        .bind(english)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    /// Apply one quiz attempt. The counter increment and the timestamp land
    /// in a single UPDATE so concurrent checks cannot lose a count.
    pub async fn record_attempt(
        &self,
        card_id: i64,
        correct: bool,
        reviewed_at: DateTime<Utc>,
    ) -> Result<()> {
        let result = match correct {
            true => {
                sqlx::query(
                    r#"
                    UPDATE cards
                    SET success_count = success_count + 1, last_reviewed = ?1
                    WHERE id = ?2
                    "#,
                )
                .bind(reviewed_at)
                .bind(card_id)
                .execute(&self.pool)
                .await?
            }
            false => {
                sqlx::query(
                    r#"
                    UPDATE cards
                    SET fail_count = fail_count + 1, last_reviewed = ?1
                    WHERE id = ?2
                    "#,
                )
                .bind(reviewed_at)
                .bind(card_id)
                .execute(&self.pool)
                .await?
            }
        };

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("Card {card_id} not found")));
        }

        Ok(())
    }

    /// Delete every card, returning how many were removed.
    pub async fn delete_all_cards(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM cards").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    // === Statistics ===

    /// Aggregate counters over all cards.
    pub async fn stats(&self) -> Result<StatsResponse> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) as total_cards,
                   COALESCE(SUM(success_count), 0) as total_success,
                   COALESCE(SUM(fail_count), 0) as total_fail
            FROM cards
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(StatsResponse::from_totals(
            row.get("total_cards"),
            row.get("total_success"),
            row.get("total_fail"),
        ))
    }

    /// Distinct non-null categories, sorted.
    pub async fn categories(&self) -> Result<Vec<String>> {
        let categories = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM cards WHERE category IS NOT NULL ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }
}
