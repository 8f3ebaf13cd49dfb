//! Fallback-aware generation pipeline.
//!
//! Each request runs one or more stages. A stage tries its
//! [`chain::ProviderChain`] in order and, when every provider fails,
//! synthesizes a payload locally. Either way the caller gets a payload of the
//! same shape; the source is only logged.

pub mod agents;
pub mod chain;
pub mod compose;
mod pipeline;
pub mod prompts;
pub mod provider;

pub use pipeline::Pipeline;
