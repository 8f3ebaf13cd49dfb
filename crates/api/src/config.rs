use std::time::Duration;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// Provider endpoints and credentials live in
/// [`agentdeck_providers::ProviderConfig`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Whole-request timeout in seconds (default: `120`). Provider chains
    /// are cut off at [`ServerConfig::generation_deadline`], before it.
    pub request_timeout_secs: u64,
    /// Request body limit in bytes, which bounds design uploads (default: 10 MiB).
    pub max_upload_bytes: usize,
    /// Fixed seed for fallback synthesis. Unset means fresh entropy per request.
    pub synth_seed: Option<u64>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `120`                      |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`                 |
    /// | `SYNTH_SEED`           | unset                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let synth_seed: Option<u64> = std::env::var("SYNTH_SEED")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim().parse().expect("SYNTH_SEED must be a valid u64"));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_upload_bytes,
            synth_seed,
        }
    }

    /// Deadline for all provider attempts of one generation: four fifths of
    /// the request timeout. The remainder is left for composing the fallback.
    pub fn generation_deadline(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs) * 4 / 5
    }
}
