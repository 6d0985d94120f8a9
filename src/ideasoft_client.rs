use crate::errors::AppError;
use crate::models::{ProductPayload, PublishReply};

/// Thin client for the IdeaSoft product API.
///
/// Non-success statuses are not errors here; they are handed back to the
/// caller together with the raw body.
#[derive(Clone)]
pub struct IdeaSoftClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl IdeaSoftClient {
    /// Creates a new `IdeaSoftClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The IdeaSoft API root; `/products` is appended verbatim.
    /// * `api_key` - Sent as the `X-API-KEY` header.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    /// Posts a product document and relays the upstream answer.
    ///
    /// # Returns
    ///
    /// * `Ok(PublishReply)` for any HTTP response, whatever its status.
    /// * `Err(AppError::Upstream)` when no response was received or its body
    ///   could not be read.
    pub async fn publish_product(&self, product: &ProductPayload) -> Result<PublishReply, AppError> {
        let url = self.products_url();
        tracing::info!("Publishing product to IdeaSoft: {}", url);

        let response = self
            .client
            .post(&url)
            .header("X-API-KEY", self.api_key.as_str())
            .json(product)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            tracing::info!("IdeaSoft accepted product ({})", status);
        } else {
            tracing::warn!("IdeaSoft returned {}", status);
        }

        Ok(PublishReply {
            status: status.as_u16(),
            body,
        })
    }
}
