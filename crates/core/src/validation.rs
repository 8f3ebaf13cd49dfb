//! Per-kind input validation.
//!
//! Each validator either returns a typed input the provider chain can use
//! directly, or a [`CoreError::Validation`] carrying the caller-facing
//! message. Lengths are measured in characters of the trimmed value, and a
//! value exactly at a minimum passes.

use std::sync::LazyLock;

use regex::Regex;
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::movie_catalog::{Genre, Language};
use crate::request::{
    CodeRequest, DesignRequest, ImageRequest, MovieRequest, ResearchRequest, UploadedFile,
};

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Minimum trimmed length of an image prompt.
pub const MIN_IMAGE_PROMPT_LENGTH: usize = 3;
/// Minimum trimmed length of a research query.
pub const MIN_RESEARCH_QUERY_LENGTH: usize = 5;
/// Style applied when an image request omits one.
pub const DEFAULT_IMAGE_STYLE: &str = "realistic";

/// Design input type for a Figma file link.
pub const DESIGN_TYPE_URL: &str = "url";
/// Design input type for an uploaded screenshot.
pub const DESIGN_TYPE_UPLOAD: &str = "upload";

static LEETCODE_SLUG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"leetcode\.com/problems/([a-z0-9]+(?:-[a-z0-9]+)*)").expect("valid regex")
});

static FIGMA_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/(?:file|design|proto)/([a-zA-Z0-9]+)").expect("valid regex")
});

// ---------------------------------------------------------------------------
// Validated inputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeInput {
    pub url: String,
    /// Problem slug, e.g. `two-sum`.
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesignInput {
    FigmaUrl {
        url: String,
        /// `None` when the link contains `figma.com` but no recognizable file key.
        file_key: Option<String>,
    },
    Upload {
        mime_type: String,
        bytes: Vec<u8>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    pub prompt: String,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchInput {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieInput {
    /// The emotion exactly as the caller sent it (echoed in the response).
    pub emotion: String,
    /// The language exactly as the caller sent it (echoed in the response).
    pub language: String,
    pub genre: Genre,
    pub lang: Language,
}

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

pub fn validate_code(req: &CodeRequest) -> Result<CodeInput, CoreError> {
    let url = required(req.url.as_deref(), "Problem URL is required")?;
    check_bounds(req)?;

    let slug = LEETCODE_SLUG_RE
        .captures(&url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| CoreError::Validation("Valid LeetCode problem URL is required".into()))?;

    Ok(CodeInput { url, slug })
}

pub fn validate_design(req: &DesignRequest) -> Result<DesignInput, CoreError> {
    check_bounds(req)?;
    match req.input_type.as_deref().map(str::trim) {
        Some(DESIGN_TYPE_URL) => {
            let url = req
                .url
                .as_deref()
                .map(str::trim)
                .filter(|u| u.contains("figma.com"))
                .ok_or_else(|| CoreError::Validation("Valid Figma URL is required".into()))?;
            Ok(DesignInput::FigmaUrl {
                url: url.to_string(),
                file_key: figma_file_key(url),
            })
        }
        Some(DESIGN_TYPE_UPLOAD) => match &req.file {
            Some(UploadedFile {
                content_type: Some(mime),
                bytes,
            }) if mime.starts_with("image/") && !bytes.is_empty() => Ok(DesignInput::Upload {
                mime_type: mime.clone(),
                bytes: bytes.clone(),
            }),
            _ => Err(CoreError::Validation("Valid image file is required".into())),
        },
        _ => Err(CoreError::Validation("Invalid input type".into())),
    }
}

pub fn validate_image(req: &ImageRequest) -> Result<ImageInput, CoreError> {
    let prompt = required(req.prompt.as_deref(), "Text prompt is required")?;
    if prompt.chars().count() < MIN_IMAGE_PROMPT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Prompt must be at least {MIN_IMAGE_PROMPT_LENGTH} characters long"
        )));
    }
    check_bounds(req)?;

    let style = req
        .style
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_IMAGE_STYLE)
        .to_string();

    Ok(ImageInput { prompt, style })
}

pub fn validate_research(req: &ResearchRequest) -> Result<ResearchInput, CoreError> {
    let query = required(req.query.as_deref(), "Research query is required")?;
    if query.chars().count() < MIN_RESEARCH_QUERY_LENGTH {
        return Err(CoreError::Validation(format!(
            "Query must be at least {MIN_RESEARCH_QUERY_LENGTH} characters long"
        )));
    }
    check_bounds(req)?;
    Ok(ResearchInput { query })
}

pub fn validate_movie(req: &MovieRequest) -> Result<MovieInput, CoreError> {
    const MISSING: &str = "Both emotion and language are required";
    let emotion = required(req.emotion.as_deref(), MISSING)?;
    let language = required(req.language.as_deref(), MISSING)?;
    check_bounds(req)?;

    match (Genre::parse(&emotion), Language::parse(&language)) {
        (Some(genre), Some(lang)) => Ok(MovieInput {
            emotion,
            language,
            genre,
            lang,
        }),
        _ => Err(CoreError::Validation(
            "Invalid language or emotion combination".into(),
        )),
    }
}

/// Extract the file key from a Figma link (`/file/<key>`, `/design/<key>`).
pub fn figma_file_key(url: &str) -> Option<String> {
    FIGMA_KEY_RE
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Trim a required field, rejecting absent or blank values with `message`.
fn required(value: Option<&str>, message: &str) -> Result<String, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(CoreError::Validation(message.to_string())),
    }
}

/// Run the declarative `validator` bounds on a request.
fn check_bounds<T: Validate>(req: &T) -> Result<(), CoreError> {
    req.validate()
        .map_err(|errors| CoreError::Validation(first_message(&errors)))
}

/// Pick a stable, human-readable message out of a `ValidationErrors` set.
fn first_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| errs.iter().map(move |e| (field, e)))
        .map(|(field, e)| match &e.message {
            Some(msg) => msg.to_string(),
            None => format!("Invalid value for '{field}'"),
        })
        .next()
        .unwrap_or_else(|| "Invalid request".to_string())
}
