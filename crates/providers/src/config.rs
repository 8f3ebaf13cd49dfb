//! Provider endpoints and credentials loaded from the environment.

use std::time::Duration;

use agentdeck_core::credentials::Credential;

pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_FIGMA_BASE_URL: &str = "https://api.figma.com/v1";
pub const DEFAULT_HUGGING_FACE_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_IMGGEN_BASE_URL: &str = "https://api.imggen.ai";
pub const DEFAULT_POLLINATIONS_BASE_URL: &str = "https://image.pollinations.ai";
pub const DEFAULT_LEETCODE_BASE_URL: &str = "https://leetcode.com";
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

/// An OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub api_key: Option<Credential>,
    pub base_url: String,
    pub model: String,
}

/// Every upstream endpoint the pipeline may call.
///
/// `Default` gives the public endpoints with no credentials, so only the
/// keyless providers (Pollinations, ImgGen, LeetCode, IMDb) are usable.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub groq: ChatSettings,
    pub openai: ChatSettings,
    pub gemini_api_key: Option<Credential>,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub figma_token: Option<Credential>,
    pub figma_base_url: String,
    pub hugging_face_api_key: Option<Credential>,
    pub hugging_face_base_url: String,
    pub imggen_base_url: String,
    pub pollinations_base_url: String,
    pub leetcode_base_url: String,
    pub imdb_base_url: String,
    /// Upper bound on a single provider attempt.
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            groq: ChatSettings {
                api_key: None,
                base_url: DEFAULT_GROQ_BASE_URL.into(),
                model: DEFAULT_GROQ_MODEL.into(),
            },
            openai: ChatSettings {
                api_key: None,
                base_url: DEFAULT_OPENAI_BASE_URL.into(),
                model: DEFAULT_OPENAI_MODEL.into(),
            },
            gemini_api_key: None,
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.into(),
            gemini_model: DEFAULT_GEMINI_MODEL.into(),
            figma_token: None,
            figma_base_url: DEFAULT_FIGMA_BASE_URL.into(),
            hugging_face_api_key: None,
            hugging_face_base_url: DEFAULT_HUGGING_FACE_BASE_URL.into(),
            imggen_base_url: DEFAULT_IMGGEN_BASE_URL.into(),
            pollinations_base_url: DEFAULT_POLLINATIONS_BASE_URL.into(),
            leetcode_base_url: DEFAULT_LEETCODE_BASE_URL.into(),
            imdb_base_url: agentdeck_core::movie_catalog::IMDB_BASE_URL.into(),
            timeout: Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS),
        }
    }
}

impl ProviderConfig {
    /// Load provider configuration from environment variables.
    ///
    /// | Env Var                 | Default                                              |
    /// |-------------------------|------------------------------------------------------|
    /// | `GROQ_API_KEY`          | unset                                                |
    /// | `GROQ_BASE_URL`         | `https://api.groq.com/openai/v1`                     |
    /// | `GROQ_MODEL`            | `llama-3.3-70b-versatile`                            |
    /// | `OPENAI_API_KEY`        | unset                                                |
    /// | `OPENAI_BASE_URL`       | `https://api.openai.com/v1`                          |
    /// | `OPENAI_MODEL`          | `gpt-4o-mini`                                        |
    /// | `GEMINI_API_KEY`        | unset                                                |
    /// | `GEMINI_BASE_URL`       | `https://generativelanguage.googleapis.com/v1beta`   |
    /// | `GEMINI_MODEL`          | `gemini-1.5-flash`                                   |
    /// | `FIGMA_ACCESS_TOKEN`    | unset                                                |
    /// | `FIGMA_BASE_URL`        | `https://api.figma.com/v1`                           |
    /// | `HUGGING_FACE_API_KEY`  | unset                                                |
    /// | `HUGGING_FACE_BASE_URL` | `https://api-inference.huggingface.co`               |
    /// | `IMGGEN_BASE_URL`       | `https://api.imggen.ai`                              |
    /// | `POLLINATIONS_BASE_URL` | `https://image.pollinations.ai`                      |
    /// | `LEETCODE_BASE_URL`     | `https://leetcode.com`                               |
    /// | `IMDB_BASE_URL`         | `https://www.imdb.com`                               |
    /// | `PROVIDER_TIMEOUT_SECS` | `30`                                                 |
    ///
    /// Blank and placeholder credentials are treated as unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let timeout_secs: u64 = std::env::var("PROVIDER_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_PROVIDER_TIMEOUT_SECS.to_string())
            .parse()
            .expect("PROVIDER_TIMEOUT_SECS must be a valid u64");

        Self {
            groq: ChatSettings {
                api_key: Credential::from_env("GROQ_API_KEY"),
                base_url: env_or("GROQ_BASE_URL", defaults.groq.base_url),
                model: env_or("GROQ_MODEL", defaults.groq.model),
            },
            openai: ChatSettings {
                api_key: Credential::from_env("OPENAI_API_KEY"),
                base_url: env_or("OPENAI_BASE_URL", defaults.openai.base_url),
                model: env_or("OPENAI_MODEL", defaults.openai.model),
            },
            gemini_api_key: Credential::from_env("GEMINI_API_KEY"),
            gemini_base_url: env_or("GEMINI_BASE_URL", defaults.gemini_base_url),
            gemini_model: env_or("GEMINI_MODEL", defaults.gemini_model),
            figma_token: Credential::from_env("FIGMA_ACCESS_TOKEN"),
            figma_base_url: env_or("FIGMA_BASE_URL", defaults.figma_base_url),
            hugging_face_api_key: Credential::from_env("HUGGING_FACE_API_KEY"),
            hugging_face_base_url: env_or("HUGGING_FACE_BASE_URL", defaults.hugging_face_base_url),
            imggen_base_url: env_or("IMGGEN_BASE_URL", defaults.imggen_base_url),
            pollinations_base_url: env_or("POLLINATIONS_BASE_URL", defaults.pollinations_base_url),
            leetcode_base_url: env_or("LEETCODE_BASE_URL", defaults.leetcode_base_url),
            imdb_base_url: env_or("IMDB_BASE_URL", defaults.imdb_base_url),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// `true` when at least one chat LLM has a usable credential.
    pub fn has_llm(&self) -> bool {
        self.groq.api_key.is_some() || self.openai.api_key.is_some()
    }

    /// Which credentialed providers are usable, for the health endpoint.
    pub fn configured(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("groq", self.groq.api_key.is_some()),
            ("openai", self.openai.api_key.is_some()),
            ("gemini", self.gemini_api_key.is_some()),
            ("figma", self.figma_token.is_some()),
            ("huggingface", self.hugging_face_api_key.is_some()),
        ]
    }
}

fn env_or(var: &str, default: String) -> String {
    std::env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
}
