//! End-to-end pipeline tests with mocked and unreachable providers.

use std::time::Duration;

use agentdeck_core::attempt::ResultSource;
use agentdeck_core::credentials::Credential;
use agentdeck_core::layout::has_horizontal_layout;
use agentdeck_core::movie_catalog::{Genre, Language};
use agentdeck_core::synth::image::PLACEHOLDER_MODEL;
use agentdeck_core::validation::{CodeInput, DesignInput, ImageInput, MovieInput, ResearchInput};
use agentdeck_pipeline::Pipeline;
use agentdeck_providers::images::POLLINATIONS_MODEL;
use agentdeck_providers::ProviderConfig;
use serde_json::json;
use wiremock::matchers::{any, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Nothing listens on the discard port.
const UNREACHABLE: &str = "http://127.0.0.1:9";

fn offline_config() -> ProviderConfig {
    let mut config = ProviderConfig::default();
    config.groq.base_url = UNREACHABLE.into();
    config.openai.base_url = UNREACHABLE.into();
    config.gemini_base_url = UNREACHABLE.into();
    config.figma_base_url = UNREACHABLE.into();
    config.hugging_face_base_url = UNREACHABLE.into();
    config.imggen_base_url = UNREACHABLE.into();
    config.pollinations_base_url = UNREACHABLE.into();
    config.leetcode_base_url = UNREACHABLE.into();
    config.imdb_base_url = UNREACHABLE.into();
    config.timeout = Duration::from_secs(5);
    config
}

fn pipeline(config: &ProviderConfig) -> Pipeline {
    Pipeline::new(config, reqwest::Client::new(), Some(42))
}

fn completion(content: &str) -> serde_json::Value {
    json!({ "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }] })
}

// ---------------------------------------------------------------------------
// Test: code kind combines LeetCode and a repaired LLM solution
// ---------------------------------------------------------------------------

#[tokio::test]
async fn code_uses_lookup_and_repaired_solution() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "question": { "title": "Two Sum", "difficulty": "Easy", "content": "<p>Find two.</p>" } }
        })))
        .mount(&server)
        .await;
    // Raw newline inside the "code" string needs the repair pass.
    let solution = "Here you go:\n{\"solution\": {\"code\": \"def f():\n    return 1\", \"language\": \"python\", \
        \"timeComplexity\": \"O(n)\", \"spaceComplexity\": \"O(1)\", \"explanation\": \"Loop.\"}}";
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(solution)))
        .mount(&server)
        .await;

    let mut config = offline_config();
    config.leetcode_base_url = server.uri();
    config.groq.base_url = server.uri();
    config.groq.api_key = Credential::parse("gsk-test");

    let input = CodeInput {
        url: "https://leetcode.com/problems/two-sum/".into(),
        slug: "two-sum".into(),
    };
    let result = pipeline(&config).generate_code(&input).await;

    assert_eq!(result.source, ResultSource::Provider("leetcode+groq".into()));
    assert_eq!(result.payload.problem.title, "Two Sum");
    assert_eq!(result.payload.solution.code, "def f():\n    return 1");
    assert!(result.payload.alternative_solutions.is_empty());
}

#[tokio::test]
async fn code_falls_back_when_everything_is_down() {
    let input = CodeInput {
        url: "https://leetcode.com/problems/reverse-linked-list/".into(),
        slug: "reverse-linked-list".into(),
    };
    let result = pipeline(&offline_config()).generate_code(&input).await;

    assert_eq!(result.source, ResultSource::Fallback);
    assert_eq!(result.payload.problem.title, "Reverse Linked List");
    assert!(!result.payload.solution.code.is_empty());
}

// ---------------------------------------------------------------------------
// Test: design link with a failing Figma API falls back to vertical code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn design_figma_error_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/ABC123"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let mut config = offline_config();
    config.figma_base_url = server.uri();
    config.figma_token = Credential::parse("fig-token");

    let input = DesignInput::FigmaUrl {
        url: "https://figma.com/file/ABC123/test".into(),
        file_key: Some("ABC123".into()),
    };
    let result = pipeline(&config).generate_design(&input).await;

    assert_eq!(result.source, ResultSource::Fallback);
    assert!(!result.payload.analysis.components.is_empty());
    assert!(!result.payload.code.react.is_empty());
    assert!(!has_horizontal_layout(&result.payload.code));
}

// ---------------------------------------------------------------------------
// Test: provider-written design code is normalized too
// ---------------------------------------------------------------------------

#[tokio::test]
async fn design_llm_code_is_normalized() {
    let server = MockServer::start().await;
    let code = json!({ "code": {
        "react": "<div className=\"grid grid-cols-3 gap-4\"><div className=\"flex items-center\">A</div></div>",
        "html": "<div class=\"flex-row\">A</div>",
        "css": ".row { display: flex; } .g { grid-template-columns: 1fr 1fr; }"
    }});
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(&code.to_string())))
        .mount(&server)
        .await;

    let mut config = offline_config();
    config.groq.base_url = server.uri();
    config.groq.api_key = Credential::parse("gsk-test");

    let input = DesignInput::Upload {
        mime_type: "image/png".into(),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    };
    let result = pipeline(&config).generate_design(&input).await;

    // Gemini has no key, so the analysis fell back.
    assert_eq!(result.source, ResultSource::Fallback);
    let code = &result.payload.code;
    assert!(code.react.contains("grid-cols-1"));
    assert!(code.react.contains("flex flex-col items-center"));
    assert!(code.html.contains("flex-col"));
    assert!(!has_horizontal_layout(code));
}

// ---------------------------------------------------------------------------
// Test: image kind with every provider unreachable returns an SVG
// ---------------------------------------------------------------------------

#[tokio::test]
async fn image_offline_returns_placeholder() {
    let input = ImageInput {
        prompt: "a red sunset".into(),
        style: "realistic".into(),
    };
    let result = pipeline(&offline_config()).generate_image(&input).await;

    assert_eq!(result.source, ResultSource::Fallback);
    assert!(result.payload.image_url.starts_with("data:image/svg+xml;base64,"));
    assert!(!result.payload.enhanced_prompt.is_empty());
    assert_eq!(result.payload.metadata.model, PLACEHOLDER_MODEL);
    assert_eq!(result.payload.dimensions, "1024x1024");
}

#[tokio::test]
async fn image_metadata_names_the_provider_used() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/prompt/.+"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3]))
        .mount(&server)
        .await;

    let mut config = offline_config();
    config.pollinations_base_url = server.uri();

    let input = ImageInput {
        prompt: "a red sunset".into(),
        style: "anime".into(),
    };
    let result = pipeline(&config).generate_image(&input).await;

    assert_eq!(result.payload.metadata.model, POLLINATIONS_MODEL);
    assert!(result.payload.image_url.starts_with(&server.uri()));
    // The local enhancer stood in for the LLM.
    assert_eq!(result.source, ResultSource::Fallback);
}

// ---------------------------------------------------------------------------
// Test: research with a working LLM and with none configured
// ---------------------------------------------------------------------------

#[tokio::test]
async fn research_uses_llm_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("- First finding\n- Second finding")))
        .mount(&server)
        .await;

    let mut config = offline_config();
    config.groq.base_url = server.uri();
    config.groq.api_key = Credential::parse("gsk-test");

    let input = ResearchInput {
        query: "solar panel efficiency".into(),
    };
    let result = pipeline(&config).generate_research(&input).await.unwrap();

    assert_eq!(result.source, ResultSource::Provider("groq".into()));
    assert_eq!(result.payload.key_findings, ["First finding", "Second finding"]);
    assert!((4..=6).contains(&result.payload.sources.len()));
}

#[tokio::test]
async fn research_without_llm_is_configuration_error() {
    let input = ResearchInput {
        query: "solar panel efficiency".into(),
    };
    let err = pipeline(&offline_config()).generate_research(&input).await.unwrap_err();
    assert!(err.to_string().contains("AI service not configured"));
}

#[tokio::test]
async fn research_with_unreachable_llm_falls_back() {
    let mut config = offline_config();
    config.groq.api_key = Credential::parse("gsk-test");

    let input = ResearchInput {
        query: "solar panel efficiency".into(),
    };
    let result = pipeline(&config).generate_research(&input).await.unwrap();
    assert_eq!(result.source, ResultSource::Fallback);
    assert_eq!(result.payload.analysis.credibility, "Medium");
}

// ---------------------------------------------------------------------------
// Test: seeded fallbacks are reproducible
// ---------------------------------------------------------------------------

#[tokio::test]
async fn seeded_movie_fallback_is_reproducible() {
    let input = MovieInput {
        emotion: "Action".into(),
        language: "Telugu".into(),
        genre: Genre::Action,
        lang: Language::Telugu,
    };
    let pipeline = pipeline(&offline_config());
    let first = pipeline.generate_movie(&input).await;
    let second = pipeline.generate_movie(&input).await;

    assert_eq!(first.source, ResultSource::Fallback);
    assert_eq!(first.payload.movies, second.payload.movies);
    assert_eq!(first.payload.count, first.payload.movies.len());
}

// ---------------------------------------------------------------------------
// Test: the generation deadline cuts off hanging providers
// ---------------------------------------------------------------------------

/// A server that accepts every request and answers after five seconds.
async fn hanging_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn image_deadline_returns_placeholder_before_providers_answer() {
    let server = hanging_server().await;
    let mut config = offline_config();
    config.groq.base_url = server.uri();
    config.groq.api_key = Credential::parse("gsk-test");
    config.pollinations_base_url = server.uri();
    config.imggen_base_url = server.uri();

    let input = ImageInput {
        prompt: "a red sunset".into(),
        style: "realistic".into(),
    };
    let started = std::time::Instant::now();
    let result = pipeline(&config)
        .with_deadline(Duration::from_millis(300))
        .generate_image(&input)
        .await;

    assert!(started.elapsed() < Duration::from_secs(2));
    assert_eq!(result.source, ResultSource::Fallback);
    assert_eq!(result.payload.metadata.model, PLACEHOLDER_MODEL);
    assert_eq!(result.payload.prompt, "a red sunset");
}

#[tokio::test]
async fn research_deadline_falls_back_instead_of_failing() {
    let server = hanging_server().await;
    let mut config = offline_config();
    config.groq.base_url = server.uri();
    config.groq.api_key = Credential::parse("gsk-test");

    let input = ResearchInput {
        query: "solar panel efficiency".into(),
    };
    let result = pipeline(&config)
        .with_deadline(Duration::from_millis(300))
        .generate_research(&input)
        .await
        .unwrap();

    assert_eq!(result.source, ResultSource::Fallback);
    assert_eq!(result.payload.query, "solar panel efficiency");
}

#[tokio::test]
async fn probe_without_llm_is_configuration_error() {
    assert!(pipeline(&offline_config()).probe_llm().await.is_err());
}
