//! Response schemas for every generation kind.
//!
//! A payload has exactly the same shape whether a provider produced it or the
//! fallback synthesizer did; nothing in these types records the source.
//! Field names serialize as camelCase to match the public HTTP contract.

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Code
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodePayload {
    pub problem: Problem,
    pub solution: Solution,
    #[serde(default)]
    pub alternative_solutions: Vec<AlternativeSolution>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub title: String,
    pub difficulty: String,
    pub description: String,
    #[serde(default)]
    pub examples: Vec<ProblemExample>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemExample {
    pub input: String,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub code: String,
    pub language: String,
    pub time_complexity: String,
    pub space_complexity: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeSolution {
    pub code: String,
    pub approach: String,
    pub complexity: String,
}

/// The part of a [`CodePayload`] an LLM is asked to produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionBundle {
    pub solution: Solution,
    #[serde(default)]
    pub alternative_solutions: Vec<AlternativeSolution>,
}

// ---------------------------------------------------------------------------
// Design
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignPayload {
    pub analysis: DesignAnalysis,
    pub code: DesignCode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignAnalysis {
    #[serde(default)]
    pub components: Vec<String>,
    #[serde(default, deserialize_with = "text_or_json")]
    pub layout: String,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default, deserialize_with = "text_or_json")]
    pub typography: String,
    #[serde(default, deserialize_with = "text_or_json")]
    pub theme: String,
}

/// Wrapper matching the `{"analysis": {...}}` object a vision model returns.
#[derive(Debug, Clone, Deserialize)]
pub struct DesignAnalysisEnvelope {
    pub analysis: DesignAnalysis,
}

/// Models sometimes describe a field with an object instead of a sentence;
/// keep it as compact JSON text rather than rejecting the whole analysis.
fn text_or_json<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignCode {
    pub html: String,
    pub css: String,
    pub react: String,
}

/// Wrapper matching the `{"code": {...}}` object an LLM returns for design code.
#[derive(Debug, Clone, Deserialize)]
pub struct DesignCodeEnvelope {
    pub code: DesignCode,
}

// ---------------------------------------------------------------------------
// Image
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    pub prompt: String,
    pub enhanced_prompt: String,
    pub image_url: String,
    pub style: String,
    pub dimensions: String,
    pub generated_at: Timestamp,
    pub metadata: ImageMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageMetadata {
    /// Human-readable name of the generation path actually taken.
    pub model: String,
    pub steps: u32,
    pub guidance: f64,
}

/// An image from one generation path, before it is composed into a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub url: String,
    /// Label reported as `metadata.model`.
    pub model: String,
}

// ---------------------------------------------------------------------------
// Research
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchPayload {
    pub query: String,
    pub summary: String,
    pub key_findings: Vec<String>,
    pub sources: Vec<ResearchSource>,
    pub analysis: ResearchAnalysis,
    pub report: String,
    pub generated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchSource {
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub relevance_score: f64,
    pub domain: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchAnalysis {
    pub credibility: String,
    pub consensus: String,
    pub date_range: String,
    pub topic_depth: String,
}

// ---------------------------------------------------------------------------
// Movie
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePayload {
    pub emotion: String,
    pub language: String,
    pub url: String,
    pub movies: Vec<String>,
    pub count: usize,
    pub generated_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_payload_uses_camel_case_keys() {
        let payload = ImagePayload {
            prompt: "a red sunset".into(),
            enhanced_prompt: "a red sunset, golden hour".into(),
            image_url: "data:image/svg+xml;base64,AAAA".into(),
            style: "realistic".into(),
            dimensions: "1024x1024".into(),
            generated_at: chrono::DateTime::UNIX_EPOCH,
            metadata: ImageMetadata {
                model: "Placeholder Generator".into(),
                steps: 30,
                guidance: 7.5,
            },
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("enhancedPrompt").is_some());
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("generatedAt").is_some());
        assert_eq!(json["metadata"]["steps"], 30);
    }

    #[test]
    fn example_without_explanation_omits_the_key() {
        let example = ProblemExample {
            input: "nums = [1]".into(),
            output: "1".into(),
            explanation: None,
        };
        let json = serde_json::to_value(&example).unwrap();
        assert!(json.get("explanation").is_none());
    }

    #[test]
    fn analysis_accepts_structured_typography() {
        let raw = r##"{"analysis":{"components":["Navbar"],"layout":"stacked","colors":["#fff"],"typography":{"font":"Inter"},"theme":"clean"}}"##;
        let envelope: DesignAnalysisEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.analysis.typography, r#"{"font":"Inter"}"#);
    }

    #[test]
    fn solution_bundle_tolerates_missing_alternatives() {
        let raw = r#"{"solution":{"code":"x","language":"python","timeComplexity":"O(n)","spaceComplexity":"O(1)","explanation":"e"}}"#;
        let bundle: SolutionBundle = serde_json::from_str(raw).unwrap();
        assert!(bundle.alternative_solutions.is_empty());
        assert_eq!(bundle.solution.time_complexity, "O(n)");
    }
}
