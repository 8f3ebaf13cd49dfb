use std::sync::Arc;

use agentdeck_pipeline::Pipeline;
use agentdeck_providers::ProviderConfig;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Provider endpoints and credentials, reported by `/health`.
    pub providers: Arc<ProviderConfig>,
    /// Provider clients and agents, built once at startup.
    pub pipeline: Arc<Pipeline>,
}

impl AppState {
    /// Build the pipeline around `client` and wrap everything for sharing.
    pub fn new(config: ServerConfig, providers: ProviderConfig, client: reqwest::Client) -> Self {
        let pipeline =
            Pipeline::new(&providers, client, config.synth_seed).with_deadline(config.generation_deadline());
        Self {
            config: Arc::new(config),
            providers: Arc::new(providers),
            pipeline: Arc::new(pipeline),
        }
    }
}
