//! SQLite recommendation store
//!
//! Backed by an `sqlx` connection pool. The `UNIQUE` constraint on `name`
//! backs up the engine's own duplicate check, and score updates run as a
//! single `UPDATE .. RETURNING` statement.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, Pool, Sqlite};

use shared::{NewRecommendation, Recommendation, RecommendationId, ScoreFilter, ScoreOperation, ScoreQuery, service_info};

use crate::error::{StorageError, StorageResult};
use crate::traits::RecommendationRepository;

const SCHEMA: &str = include_str!("schema.sql");

const COLUMNS: &str = "id, name, youtube_link, score";

/// Database row for the recommendations table
#[derive(Debug, Clone, FromRow)]
struct RecommendationRow {
    id: i64,
    name: String,
    youtube_link: String,
    score: i64,
}

impl From<RecommendationRow> for Recommendation {
    fn from(row: RecommendationRow) -> Self {
        Recommendation {
            id: row.id,
            name: row.name,
            youtube_link: row.youtube_link,
            score: row.score,
        }
    }
}

/// Recommendation store on an SQLite database
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    /// Open (creating if missing) the database at `url` and apply the schema
    pub async fn connect(url: &str) -> StorageResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let repository = Self { pool };
        repository.apply_schema().await?;
        service_info!(url, "Connected to recommendation database");
        Ok(repository)
    }

    /// Private in-memory database on a single long-lived connection
    pub async fn in_memory() -> StorageResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let repository = Self { pool };
        repository.apply_schema().await?;
        Ok(repository)
    }

    /// Release every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
        service_info!("Recommendation database closed");
    }

    pub(crate) async fn apply_schema(&self) -> StorageResult<()> {
        for statement in SCHEMA.split(';') {
            let statement = statement.trim();
            if !statement.is_empty() {
                sqlx::query(statement).execute(&self.pool).await?;
            }
        }
        Ok(())
    }
}

fn map_insert_error(error: sqlx::Error, name: &str) -> StorageError {
    match error {
        sqlx::Error::Database(db) if db.is_unique_violation() => StorageError::UniqueViolation {
            field: "name".to_string(),
            value: name.to_string(),
        },
        other => StorageError::Database(other),
    }
}

#[async_trait]
impl RecommendationRepository for SqliteRepository {
    async fn find_by_name(&self, name: &str) -> StorageResult<Option<Recommendation>> {
        let row = sqlx::query_as::<_, RecommendationRow>(&format!(
            "SELECT {COLUMNS} FROM recommendations WHERE name = ?"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Recommendation::from))
    }

    async fn find(&self, id: RecommendationId) -> StorageResult<Option<Recommendation>> {
        let row = sqlx::query_as::<_, RecommendationRow>(&format!(
            "SELECT {COLUMNS} FROM recommendations WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Recommendation::from))
    }

    async fn create(&self, data: NewRecommendation) -> StorageResult<Recommendation> {
        let row = sqlx::query_as::<_, RecommendationRow>(&format!(
            "INSERT INTO recommendations (name, youtube_link) VALUES (?, ?) RETURNING {COLUMNS}"
        ))
        .bind(&data.name)
        .bind(&data.youtube_link)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, &data.name))?;
        Ok(row.into())
    }

    async fn update_score(&self, id: RecommendationId, operation: ScoreOperation) -> StorageResult<Recommendation> {
        let row = sqlx::query_as::<_, RecommendationRow>(&format!(
            "UPDATE recommendations SET score = score + ? WHERE id = ? RETURNING {COLUMNS}"
        ))
        .bind(operation.delta())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Recommendation::from)
            .ok_or(StorageError::RecordMissing { id })
    }

    async fn remove(&self, id: RecommendationId) -> StorageResult<()> {
        sqlx::query("DELETE FROM recommendations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_all(&self, query: Option<ScoreQuery>) -> StorageResult<Vec<Recommendation>> {
        let rows = match query {
            None => {
                sqlx::query_as::<_, RecommendationRow>(&format!(
                    "SELECT {COLUMNS} FROM recommendations ORDER BY id"
                ))
                .fetch_all(&self.pool)
                .await?
            }
            Some(query) => {
                let comparison = match query.score_filter {
                    ScoreFilter::Lte => "<=",
                    ScoreFilter::Gt => ">",
                };
                sqlx::query_as::<_, RecommendationRow>(&format!(
                    "SELECT {COLUMNS} FROM recommendations WHERE score {comparison} ? ORDER BY id"
                ))
                .bind(query.score)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(rows.into_iter().map(Recommendation::from).collect())
    }

    async fn find_top(&self, amount: u32) -> StorageResult<Vec<Recommendation>> {
        let rows = sqlx::query_as::<_, RecommendationRow>(&format!(
            "SELECT {COLUMNS} FROM recommendations ORDER BY score DESC, id ASC LIMIT ?"
        ))
        .bind(i64::from(amount))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Recommendation::from).collect())
    }

    async fn truncate(&self) -> StorageResult<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM recommendations")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM sqlite_sequence WHERE name = 'recommendations'")
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }
}
