use crate::db;
use crate::errors::AppError;
use crate::models::{Lead, LeadPayload};
use sqlx::Connection;

/// Writes leads to Postgres, one short-lived connection per call.
#[derive(Debug, Clone)]
pub struct LeadStorage {
    database_url: String,
}

impl LeadStorage {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    /// Inserts one row and returns it as stored, with the id and timestamp
    /// the store assigned.
    ///
    /// Table creation and insert share one transaction. On any error the
    /// transaction and connection are dropped, which rolls back and closes.
    pub async fn insert(&self, lead: &LeadPayload) -> Result<Lead, AppError> {
        let mut conn = db::connect(&self.database_url).await?;
        let mut tx = conn.begin().await?;

        db::ensure_leads_table(&mut tx).await?;

        let stored = sqlx::query_as::<_, Lead>(db::INSERT_LEAD)
            .bind(lead.name.as_deref())
            .bind(lead.email.as_deref())
            .bind(lead.phone.as_deref())
            .bind(lead.note.as_deref())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        conn.close().await?;

        tracing::debug!("Stored lead {}", stored.id);
        Ok(stored)
    }
}
