//! Provider credential handling.
//!
//! A credential that is missing, blank or still set to a template
//! placeholder (`your_openai_api_key_here` and friends) is treated as absent
//! so the chain executor can skip that provider without a network call.

use std::fmt;

/// Prefix shared by every placeholder value shipped in `.env.example`.
pub const PLACEHOLDER_PREFIX: &str = "your_";

/// Known literal placeholders that do not start with [`PLACEHOLDER_PREFIX`].
const PLACEHOLDER_LITERALS: &[&str] = &["changeme", "replace_me", "xxx"];

/// Returns `true` when `value` looks like an unfilled template value.
pub fn is_placeholder(value: &str) -> bool {
    let v = value.trim().to_ascii_lowercase();
    v.starts_with(PLACEHOLDER_PREFIX) || PLACEHOLDER_LITERALS.contains(&v.as_str())
}

/// A secret API credential. `Debug` output never includes the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Build a credential from a raw value, returning `None` for blank or
    /// placeholder values.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || is_placeholder(trimmed) {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Read and parse a credential from the environment variable `var`.
    pub fn from_env(var: &str) -> Option<Self> {
        std::env::var(var).ok().and_then(|v| Self::parse(&v))
    }

    /// Expose the secret for use in a request header or query string.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_absent() {
        assert!(Credential::parse("").is_none());
        assert!(Credential::parse("   ").is_none());
    }

    #[test]
    fn template_placeholders_are_absent() {
        assert!(Credential::parse("your_openai_api_key_here").is_none());
        assert!(Credential::parse("your_actual_gemini_api_key_here").is_none());
        assert!(Credential::parse("  YOUR_FIGMA_TOKEN ").is_none());
        assert!(Credential::parse("changeme").is_none());
    }

    #[test]
    fn real_keys_resembling_placeholders_are_kept() {
        assert!(Credential::parse("sk-proj-abc_here").is_some());
        assert!(Credential::parse("hf_your_openai_mirror").is_some());
        assert!(Credential::parse("gsk_changeme123").is_some());
    }

    #[test]
    fn real_values_are_trimmed_and_kept() {
        let cred = Credential::parse("  gsk_abc123  ").unwrap();
        assert_eq!(cred.expose(), "gsk_abc123");
    }

    #[test]
    fn debug_output_is_redacted() {
        let cred = Credential::parse("gsk_secret").unwrap();
        assert_eq!(format!("{cred:?}"), "Credential(***)");
    }
}
