//! Inbound request bodies.
//!
//! Every field is optional so a missing field surfaces as the kind's own
//! "is required" message instead of a serde error. Upper bounds are declared
//! with `validator` attributes; lower bounds are checked on the trimmed value
//! in [`crate::validation`].

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CodeRequest {
    #[validate(length(max = 2048, message = "Problem URL must be at most 2048 characters long"))]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ImageRequest {
    #[validate(length(max = 2000, message = "Prompt must be at most 2000 characters long"))]
    pub prompt: Option<String>,
    #[validate(length(max = 50, message = "Style must be at most 50 characters long"))]
    pub style: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ResearchRequest {
    #[validate(length(max = 500, message = "Query must be at most 500 characters long"))]
    pub query: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MovieRequest {
    #[validate(length(max = 32, message = "Emotion must be at most 32 characters long"))]
    pub emotion: Option<String>,
    #[validate(length(max = 32, message = "Language must be at most 32 characters long"))]
    pub language: Option<String>,
}

/// A file part received with a design upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// A design submission, assembled from either a multipart form or JSON.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct DesignRequest {
    #[serde(rename = "type")]
    pub input_type: Option<String>,
    #[validate(length(max = 2048, message = "Figma URL must be at most 2048 characters long"))]
    pub url: Option<String>,
    #[serde(skip)]
    pub file: Option<UploadedFile>,
}
