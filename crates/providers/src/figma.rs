//! Figma file API client and the heuristics that turn a file tree into a
//! [`DesignAnalysis`].

use std::collections::BTreeSet;

use agentdeck_core::credentials::Credential;
use agentdeck_core::payload::DesignAnalysis;
use serde::Deserialize;

use crate::error::ApiError;
use crate::http;

const SERVICE: &str = "figma";

/// Colours every analysis starts from; file colours are appended.
const BASE_COLORS: [&str; 3] = ["#3B82F6", "#1F2937", "#F9FAFB"];
const MAX_COLORS: usize = 5;

#[derive(Debug, Clone)]
pub struct FigmaClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<Credential>,
}

/// The subset of `GET /v1/files/{key}` the analysis reads.
#[derive(Debug, Clone, Deserialize)]
pub struct FigmaFile {
    #[serde(default)]
    pub name: String,
    pub document: FigmaNode,
    #[serde(default)]
    pub styles: std::collections::HashMap<String, FigmaStyle>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FigmaNode {
    #[serde(rename = "type", default)]
    pub node_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub children: Vec<FigmaNode>,
    #[serde(default)]
    pub fills: Vec<FigmaPaint>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FigmaPaint {
    #[serde(rename = "type", default)]
    pub paint_type: String,
    #[serde(default)]
    pub color: Option<FigmaColor>,
}

/// Channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FigmaColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FigmaStyle {
    #[serde(rename = "styleType", default)]
    pub style_type: String,
}

impl FigmaClient {
    pub fn with_client(client: reqwest::Client, base_url: String, token: Option<Credential>) -> Self {
        Self {
            client,
            base_url,
            token,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.token.is_some()
    }

    /// Fetch a file's document tree.
    pub async fn get_file(&self, file_key: &str) -> Result<FigmaFile, ApiError> {
        let token = self.token.as_ref().ok_or(ApiError::NotConfigured(SERVICE))?;

        let response = self
            .client
            .get(http::join(&self.base_url, &format!("files/{file_key}")))
            .header("X-Figma-Token", token.expose())
            .send()
            .await?;

        http::parse_response(SERVICE, response).await
    }
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Build an analysis from a file's node types, names and fills.
pub fn analyze(file: &FigmaFile) -> DesignAnalysis {
    let pages = &file.document.children;

    let mut components = component_kinds(pages);
    if components.is_empty() {
        components = vec!["Frame".into(), "Text".into(), "Button".into()];
    }

    DesignAnalysis {
        theme: theme(&file.name),
        components,
        layout: layout(pages),
        colors: colors(pages),
        typography: typography(file),
    }
}

/// Walk every node below the pages, depth first.
fn walk<'a>(pages: &'a [FigmaNode], visit: &mut impl FnMut(&'a FigmaNode)) {
    fn go<'a>(node: &'a FigmaNode, visit: &mut impl FnMut(&'a FigmaNode)) {
        visit(node);
        for child in &node.children {
            go(child, visit);
        }
    }
    for page in pages {
        for child in &page.children {
            go(child, visit);
        }
    }
}

fn component_kinds(pages: &[FigmaNode]) -> Vec<String> {
    let mut seen = Vec::new();
    walk(pages, &mut |node| {
        let kind = match node.node_type.as_str() {
            "RECTANGLE" | "FRAME" => "Card",
            "TEXT" => "Text",
            "COMPONENT" => "Component",
            "INSTANCE" => "Button",
            _ => return,
        };
        if !seen.contains(&kind) {
            seen.push(kind);
        }
    });
    seen.into_iter().map(String::from).collect()
}

fn colors(pages: &[FigmaNode]) -> Vec<String> {
    let mut colors: Vec<String> = BASE_COLORS.iter().map(|c| c.to_string()).collect();
    let mut found = BTreeSet::new();
    walk(pages, &mut |node| {
        for paint in &node.fills {
            if paint.paint_type == "SOLID" {
                if let Some(color) = paint.color {
                    found.insert(to_hex(color));
                }
            }
        }
    });
    for hex in found {
        if !colors.contains(&hex) {
            colors.push(hex);
        }
    }
    colors.truncate(MAX_COLORS);
    colors
}

fn to_hex(color: FigmaColor) -> String {
    let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02X}{:02X}{:02X}",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}

fn layout(pages: &[FigmaNode]) -> String {
    if pages.is_empty() {
        return "Standard layout".to_string();
    }

    let (mut grid, mut sidebar, mut header) = (false, false, false);
    walk(pages, &mut |node| {
        let name = node.name.to_lowercase();
        grid |= name.contains("grid");
        sidebar |= name.contains("sidebar") || name.contains("nav");
        header |= name.contains("header") || name.contains("top");
    });

    let mut layout = String::new();
    if header {
        layout.push_str("Header with ");
    }
    if sidebar {
        layout.push_str("sidebar navigation and ");
    }
    if grid {
        layout.push_str("grid-based ");
    }
    layout.push_str("responsive layout");
    layout
}

fn typography(file: &FigmaFile) -> String {
    let text_styles = file.styles.values().filter(|s| s.style_type == "TEXT").count();
    match text_styles {
        0 => "Modern typography".to_string(),
        1 => "Clean typography".to_string(),
        _ => "Custom typography with multiple font weights and sizes".to_string(),
    }
}

fn theme(file_name: &str) -> String {
    let name = file_name.to_lowercase();
    let has = |keys: &[&str]| keys.iter().any(|k| name.contains(k));
    let theme = if has(&["dashboard"]) {
        "Dashboard interface"
    } else if has(&["landing"]) {
        "Landing page"
    } else if has(&["mobile", "app"]) {
        "Mobile app interface"
    } else if has(&["admin", "cms"]) {
        "Admin panel"
    } else if has(&["ecommerce", "shop"]) {
        "E-commerce interface"
    } else {
        "Modern web interface"
    };
    theme.to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn file(value: serde_json::Value) -> FigmaFile {
        serde_json::from_value(value).unwrap()
    }

    fn sample() -> FigmaFile {
        file(json!({
            "name": "Admin Dashboard v2",
            "document": {
                "type": "DOCUMENT",
                "children": [{
                    "type": "CANVAS",
                    "name": "Page 1",
                    "children": [
                        { "type": "FRAME", "name": "Top Header", "children": [
                            { "type": "TEXT", "name": "Title" },
                            { "type": "INSTANCE", "name": "Login button",
                              "fills": [{ "type": "SOLID", "color": { "r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0 } }] }
                        ]},
                        { "type": "FRAME", "name": "Card grid" }
                    ]
                }]
            },
            "styles": {
                "1:2": { "styleType": "TEXT", "name": "Heading" },
                "1:3": { "styleType": "TEXT", "name": "Body" },
                "1:4": { "styleType": "FILL", "name": "Primary" }
            }
        }))
    }

    #[test]
    fn components_follow_node_types() {
        let analysis = analyze(&sample());
        assert_eq!(analysis.components, ["Card", "Text", "Button"]);
    }

    #[test]
    fn solid_fills_extend_base_palette() {
        let analysis = analyze(&sample());
        assert_eq!(analysis.colors, ["#3B82F6", "#1F2937", "#F9FAFB", "#FF0000"]);
    }

    #[test]
    fn layout_and_theme_from_names() {
        let analysis = analyze(&sample());
        assert_eq!(analysis.layout, "Header with grid-based responsive layout");
        assert_eq!(analysis.theme, "Dashboard interface");
        assert_eq!(
            analysis.typography,
            "Custom typography with multiple font weights and sizes"
        );
    }

    #[test]
    fn empty_document_gets_defaults() {
        let analysis = analyze(&file(json!({ "name": "", "document": { "type": "DOCUMENT" } })));
        assert_eq!(analysis.components, ["Frame", "Text", "Button"]);
        assert_eq!(analysis.layout, "Standard layout");
        assert_eq!(analysis.theme, "Modern web interface");
        assert_eq!(analysis.typography, "Modern typography");
    }
}
