//! HTTP clients for the upstream services behind each generation kind.
//!
//! Every client takes a shared [`reqwest::Client`] and a base URL so tests can
//! point it at a mock server. Failures surface as [`ApiError`], which
//! converts into the pipeline's [`agentdeck_core::attempt::ProviderError`].

pub mod chat;
pub mod config;
pub mod error;
pub mod figma;
mod http;
pub mod images;
pub mod imdb;
pub mod leetcode;
pub mod vision;

pub use config::ProviderConfig;
pub use error::ApiError;
