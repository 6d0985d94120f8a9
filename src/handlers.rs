use crate::config::Config;
use crate::errors::AppError;
use crate::ideasoft_client::IdeaSoftClient;
use crate::lead_storage::LeadStorage;
use crate::models::{Ack, LeadPayload, Outcome, ProductPayload, PublishReply};
use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
///
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Client for the IdeaSoft API, present only when URL and key are set.
    pub ideasoft: Option<IdeaSoftClient>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let ideasoft = config
            .ideasoft
            .credentials()
            .map(|(base_url, api_key)| IdeaSoftClient::new(base_url, api_key));

        Self { config, ideasoft }
    }
}

/// GET /health
///
/// Liveness probe; independent of configuration.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "ok": true })))
}

/// POST /leads
///
/// Stores one lead. Without `DATABASE_URL` the store is never contacted and
/// a configuration error payload is returned instead.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `payload` - Optional `name`, `email`, `phone` and `note`.
///
/// # Returns
///
/// * `Result<Json<Outcome<Ack>>, AppError>` - `{"ok": true}`, `{"error": ..}`, or a storage failure.
pub async fn create_lead(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LeadPayload>,
) -> Result<Json<Outcome<Ack>>, AppError> {
    let Some(database_url) = state.config.database_url.as_deref() else {
        tracing::warn!("POST /leads rejected: DATABASE_URL is not configured");
        return Ok(Json(Outcome::misconfigured("DATABASE_URL is not configured")));
    };

    let lead = LeadStorage::new(database_url).insert(&payload).await?;
    tracing::info!("POST /leads - stored lead {}", lead.id);

    Ok(Json(Outcome::Done(Ack::ok())))
}

/// POST /publish/ideasoft
///
/// Forwards the body to `<IDEASOFT_BASE_URL>/products` and relays the
/// upstream status and raw body.
pub async fn publish_ideasoft(
    State(state): State<Arc<AppState>>,
    Json(product): Json<ProductPayload>,
) -> Result<Json<Outcome<PublishReply>>, AppError> {
    let Some(client) = state.ideasoft.as_ref() else {
        tracing::warn!("POST /publish/ideasoft rejected: IdeaSoft API not configured");
        return Ok(Json(Outcome::misconfigured("IdeaSoft API not configured")));
    };

    let reply = client.publish_product(&product).await?;
    Ok(Json(Outcome::Done(reply)))
}
