use serde::Deserialize;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_BUCKET: &str = "media";

/// Media storage settings. Loaded at startup, not used by any endpoint yet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectStorageConfig {
    pub url: Option<String>,
    pub service_role_key: Option<String>,
    pub bucket: String,
}

impl ObjectStorageConfig {
    pub fn is_configured(&self) -> bool {
        self.url.is_some() && self.service_role_key.is_some()
    }
}

/// Target and credential for the IdeaSoft product API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdeaSoftConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

impl IdeaSoftConfig {
    /// Returns `(base_url, api_key)` only when both are present.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.base_url, &self.api_key) {
            (Some(url), Some(key)) => Some((url.as_str(), key.as_str())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: Option<String>,
    pub port: u16,
    pub object_storage: ObjectStorageConfig,
    pub ideasoft: IdeaSoftConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            port: DEFAULT_PORT,
            object_storage: ObjectStorageConfig {
                bucket: DEFAULT_BUCKET.to_string(),
                ..Default::default()
            },
            ideasoft: IdeaSoftConfig::default(),
        }
    }
}

impl Config {
    /// Reads settings from the process environment (and `.env`, if any).
    ///
    /// Missing integrations are tolerated here and reported per request instead.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;

        // Never log credentials, only what is wired up
        tracing::info!("Configuration loaded successfully");
        tracing::info!(
            "Lead storage: {}",
            if config.database_url.is_some() {
                "configured"
            } else {
                "not configured"
            }
        );
        tracing::info!(
            "IdeaSoft publishing: {}",
            if config.ideasoft.credentials().is_some() {
                "configured"
            } else {
                "not configured"
            }
        );
        if config.object_storage.is_configured() {
            tracing::info!(
                "Media storage configured (bucket: {})",
                config.object_storage.bucket
            );
        }
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// Blank values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: get("DATABASE_URL"),
            port,
            object_storage: ObjectStorageConfig {
                url: get("SUPABASE_URL"),
                service_role_key: get("SUPABASE_SERVICE_ROLE_KEY"),
                bucket: get("SUPABASE_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            },
            ideasoft: IdeaSoftConfig {
                base_url: get("IDEASOFT_BASE_URL"),
                api_key: get("IDEASOFT_API_KEY"),
            },
        })
    }
}
