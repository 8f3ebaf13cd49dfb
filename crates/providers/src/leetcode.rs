//! LeetCode GraphQL client for problem statements.

use std::sync::LazyLock;

use agentdeck_core::payload::{Problem, ProblemExample};
use regex::Regex;
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::http;

const SERVICE: &str = "leetcode";

const QUESTION_QUERY: &str = "query questionData($titleSlug: String!) { \
    question(titleSlug: $titleSlug) { title difficulty content } }";

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

static BLANK_LINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n(\s*\n)+").expect("valid regex"));

static EXAMPLE_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*Example\s*\d*:").expect("valid regex"));

#[derive(Debug, Clone)]
pub struct LeetCodeClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<QuestionData>,
}

#[derive(Deserialize)]
struct QuestionData {
    question: Option<Question>,
}

#[derive(Deserialize)]
struct Question {
    title: String,
    difficulty: String,
    #[serde(default)]
    content: Option<String>,
}

impl LeetCodeClient {
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Look up a problem by slug, e.g. `two-sum`.
    pub async fn get_problem(&self, slug: &str) -> Result<Problem, ApiError> {
        let body = json!({
            "query": QUESTION_QUERY,
            "variables": { "titleSlug": slug },
        });

        let response = self
            .client
            .post(http::join(&self.base_url, "graphql"))
            .header(reqwest::header::REFERER, http::join(&self.base_url, &format!("problems/{slug}/")))
            .json(&body)
            .send()
            .await?;

        let result: GraphQlResponse = http::parse_response(SERVICE, response).await?;
        let question = result
            .data
            .and_then(|d| d.question)
            .ok_or_else(|| ApiError::decode(SERVICE, format!("problem '{slug}' not found")))?;

        // Premium problems come back without content.
        let content = question
            .content
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| ApiError::decode(SERVICE, format!("problem '{slug}' has no public content")))?;

        let text = html_to_text(&content);
        Ok(Problem {
            title: question.title,
            difficulty: question.difficulty,
            description: description(&text),
            examples: parse_examples(&text),
        })
    }
}

/// Strip tags and decode the handful of entities LeetCode emits.
pub fn html_to_text(html: &str) -> String {
    let text = TAG_RE.replace_all(html, "");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    BLANK_LINES_RE.replace_all(text.trim(), "\n\n").into_owned()
}

/// The statement before the first example.
fn description(text: &str) -> String {
    let end = EXAMPLE_HEADING_RE.find(text).map_or(text.len(), |m| m.start());
    text[..end].trim().to_string()
}

/// `Input:` / `Output:` / `Explanation:` triples from the example blocks.
pub fn parse_examples(text: &str) -> Vec<ProblemExample> {
    let mut examples = Vec::new();
    let mut current: Option<ProblemExample> = None;

    for line in text.lines().map(str::trim) {
        if let Some(rest) = line.strip_prefix("Input:") {
            if let Some(done) = current.take() {
                examples.push(done);
            }
            current = Some(ProblemExample {
                input: rest.trim().to_string(),
                output: String::new(),
                explanation: None,
            });
        } else if let Some(rest) = line.strip_prefix("Output:") {
            if let Some(ex) = current.as_mut() {
                ex.output = rest.trim().to_string();
            }
        } else if let Some(rest) = line.strip_prefix("Explanation:") {
            if let Some(ex) = current.as_mut() {
                ex.explanation = Some(rest.trim().to_string());
            }
        } else if line.starts_with("Constraints:") || EXAMPLE_HEADING_RE.is_match(line) {
            if let Some(done) = current.take() {
                examples.push(done);
            }
        }
    }
    if let Some(done) = current {
        examples.push(done);
    }
    examples.retain(|ex| !ex.output.is_empty());
    examples
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &str = "<p>Given an array of integers <code>nums</code>&nbsp;and an integer <code>target</code>.</p>\n\n\
        <p><strong class=\"example\">Example 1:</strong></p>\n\
        <pre>\n<strong>Input:</strong> nums = [2,7,11,15], target = 9\n\
        <strong>Output:</strong> [0,1]\n\
        <strong>Explanation:</strong> Because nums[0] + nums[1] == 9, we return [0, 1].\n</pre>\n\n\
        <p><strong class=\"example\">Example 2:</strong></p>\n\
        <pre>\n<strong>Input:</strong> nums = [3,2,4], target = 6\n<strong>Output:</strong> [1,2]\n</pre>\n\n\
        <p><strong>Constraints:</strong></p>\n<ul><li><code>2 &lt;= nums.length</code></li></ul>";

    #[test]
    fn html_is_flattened() {
        let text = html_to_text(CONTENT);
        assert!(text.starts_with("Given an array of integers nums and an integer target."));
        assert!(text.contains("2 <= nums.length"));
        assert!(!text.contains("<code>"));
    }

    #[test]
    fn description_stops_at_first_example() {
        let text = html_to_text(CONTENT);
        assert_eq!(
            description(&text),
            "Given an array of integers nums and an integer target."
        );
    }

    #[test]
    fn examples_are_parsed() {
        let examples = parse_examples(&html_to_text(CONTENT));
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].input, "nums = [2,7,11,15], target = 9");
        assert_eq!(examples[0].output, "[0,1]");
        assert!(examples[0].explanation.as_deref().unwrap().starts_with("Because"));
        assert_eq!(examples[1].output, "[1,2]");
        assert_eq!(examples[1].explanation, None);
    }
}
