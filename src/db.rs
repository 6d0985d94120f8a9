use sqlx::{Connection, PgConnection, Postgres, Transaction};

/// Idempotent schema for captured leads; issued on every insert.
pub const CREATE_LEADS_TABLE: &str = "CREATE TABLE IF NOT EXISTS leads(
  id serial PRIMARY KEY,
  name text,
  email text,
  phone text,
  note text,
  created_at TIMESTAMP DEFAULT NOW()
)";

pub const INSERT_LEAD: &str = "INSERT INTO leads(name, email, phone, note) VALUES ($1, $2, $3, $4)
RETURNING id, name, email, phone, note, created_at";

/// Opens a dedicated, unpooled connection for a single request.
pub async fn connect(database_url: &str) -> Result<PgConnection, sqlx::Error> {
    tracing::debug!("opening lead storage connection");
    PgConnection::connect(database_url).await
}

/// Makes sure the `leads` table exists inside the given transaction.
pub async fn ensure_leads_table(tx: &mut Transaction<'_, Postgres>) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_LEADS_TABLE).execute(&mut **tx).await?;
    Ok(())
}
