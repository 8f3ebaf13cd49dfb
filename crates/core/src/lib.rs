//! Domain layer for the agentdeck generation service.
//!
//! Everything in this crate is pure: request validation, payload schemas,
//! the per-request attempt log, JSON sanitization, design layout
//! normalization and the deterministic fallback synthesizers. Network
//! access lives in `agentdeck-providers`; orchestration in
//! `agentdeck-pipeline`.

pub mod attempt;
pub mod credentials;
pub mod error;
pub mod kind;
pub mod layout;
pub mod movie_catalog;
pub mod payload;
pub mod request;
pub mod sanitize;
pub mod synth;
pub mod types;
pub mod validation;
