use axum::http::StatusCode;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    error::AppError,
    model::{Note, Record},
};

/// Store connectivity as reported by the health routes. `/api/db-status`
/// maps every variant through `status_code`; `/api/status` only cares
/// whether we are `Connected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connected,
    Disconnected,
    Unreachable,
}

impl ConnectionState {
    pub fn message(self) -> &'static str {
        match self {
            ConnectionState::Connected => "Connected",
            ConnectionState::Disconnected => "Disconnected",
            ConnectionState::Unreachable => "Unreachable",
        }
    }

    pub fn status_code(self) -> StatusCode {
        match self {
            ConnectionState::Connected => StatusCode::OK,
            ConnectionState::Disconnected => StatusCode::SERVICE_UNAVAILABLE,
            ConnectionState::Unreachable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Owned persistence handle, passed to handlers through `AppState` rather
/// than living in a module global. Opened at startup, closed on shutdown;
/// if the pool drops in between, operations re-establish it on demand.
pub struct Database {
    url: String,
    pool: RwLock<Option<PgPool>>,
}

impl Database {
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let pool = open_pool(url).await?;
        Ok(Self {
            url: url.to_string(),
            pool: RwLock::new(Some(pool)),
        })
    }

    /// Handle with no live connection; every operation will try to connect
    /// on first use.
    #[cfg(test)]
    pub fn disconnected(url: &str) -> Self {
        Self {
            url: url.to_string(),
            pool: RwLock::new(None),
        }
    }

    /// Connect-if-absent guard: reuses the live pool or re-establishes it,
    /// failing with a typed persistence error instead of panicking.
    async fn pool(&self) -> Result<PgPool, AppError> {
        {
            let guard = self.pool.read().await;
            if let Some(pool) = guard.as_ref() {
                if !pool.is_closed() {
                    return Ok(pool.clone());
                }
            }
        }
        let mut guard = self.pool.write().await;
        // another request may have reconnected while we waited on the lock
        if let Some(pool) = guard.as_ref() {
            if !pool.is_closed() {
                return Ok(pool.clone());
            }
        }
        info!("no live database connection, reconnecting");
        let pool = open_pool(&self.url).await.map_err(AppError::Persistence)?;
        *guard = Some(pool.clone());
        Ok(pool)
    }

    /// Read-only probe behind the health routes; never reconnects.
    pub async fn state(&self) -> ConnectionState {
        let pool = self.pool.read().await.clone();
        match pool {
            None => ConnectionState::Disconnected,
            Some(pool) if pool.is_closed() => ConnectionState::Disconnected,
            Some(pool) => match sqlx::query("SELECT 1").execute(&pool).await {
                Ok(_) => ConnectionState::Connected,
                Err(_) => ConnectionState::Unreachable,
            },
        }
    }

    pub async fn create_record(&self, name: &str, email: &str) -> Result<Record, AppError> {
        let pool = self.pool().await?;
        let record = sqlx::query_as::<_, Record>(
            "INSERT INTO records (name, email) VALUES ($1, $2) RETURNING id, name, email, created_at",
        )
        .bind(name)
        .bind(email)
        .fetch_one(&pool)
        .await?;
        Ok(record)
    }

    pub async fn list_records(&self) -> Result<Vec<Record>, AppError> {
        let pool = self.pool().await?;
        let records = sqlx::query_as::<_, Record>(
            "SELECT id, name, email, created_at FROM records ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&pool)
        .await?;
        Ok(records)
    }

    pub async fn create_note(&self, text: &str) -> Result<Note, AppError> {
        let pool = self.pool().await?;
        let note = sqlx::query_as::<_, Note>(
            "INSERT INTO notes (text) VALUES ($1) RETURNING id, text, created_at",
        )
        .bind(text)
        .fetch_one(&pool)
        .await?;
        Ok(note)
    }

    pub async fn list_notes(&self) -> Result<Vec<Note>, AppError> {
        let pool = self.pool().await?;
        let notes = sqlx::query_as::<_, Note>(
            "SELECT id, text, created_at FROM notes ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&pool)
        .await?;
        Ok(notes)
    }

    pub async fn close(&self) {
        if let Some(pool) = self.pool.write().await.take() {
            pool.close().await;
        }
    }
}

async fn open_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new().max_connections(10).connect(url).await?;
    init_schema(&pool).await?;
    Ok(pool)
}

async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS records (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    )
    .execute(pool)
    .await?;
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS notes (
            id BIGSERIAL PRIMARY KEY,
            text TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}
