//! IMDb title search listing scraper.

use std::sync::LazyLock;

use agentdeck_core::movie_catalog::{listing_url, Genre, Language};
use regex::Regex;

use crate::error::ApiError;
use crate::http;

const SERVICE: &str = "imdb";

/// IMDb rejects requests without a browser-like agent.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
    Chrome/124.0 Safari/537.36";

/// Title headings in the search results list, e.g.
/// `<h3 class="ipc-title__text">1. Baahubali 2</h3>`.
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<h3 class="ipc-title__text[^"]*">(?:\d+\.\s*)?([^<]+)</h3>"#).expect("valid regex")
});

#[derive(Debug, Clone)]
pub struct ImdbClient {
    client: reqwest::Client,
    base_url: String,
}

/// Titles scraped from one listing page.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub url: String,
    pub titles: Vec<String>,
}

impl ImdbClient {
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub async fn get_listing(&self, genre: Genre, lang: Language) -> Result<Listing, ApiError> {
        let url = listing_url(&self.base_url, genre, lang);
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;
        let html = http::ensure_success(SERVICE, response).await?.text().await?;

        let titles = parse_titles(&html);
        if titles.is_empty() {
            return Err(ApiError::decode(SERVICE, "no titles in listing"));
        }
        Ok(Listing { url, titles })
    }
}

pub fn parse_titles(html: &str) -> Vec<String> {
    let mut titles: Vec<String> = Vec::new();
    for caps in TITLE_RE.captures_iter(html) {
        let title = caps[1]
            .trim()
            .replace("&amp;", "&")
            .replace("&#x27;", "'")
            .replace("&#39;", "'")
            .replace("&quot;", "\"");
        if !title.is_empty() && !titles.contains(&title) {
            titles.push(title);
        }
    }
    titles
}
