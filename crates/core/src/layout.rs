//! Vertical-layout normalization for generated design code.
//!
//! Generated UI must stack every section in a single column. These rewrites
//! run over the React, HTML and CSS strings of every design result, whether
//! an LLM wrote the code or the fallback templates did.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::payload::DesignCode;

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

/// Tailwind multi-column grids: `grid-cols-2`, `md:grid-cols-12`, `grid-cols-[1fr_2fr]`.
static GRID_COLS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bgrid-cols-(?:(?:[1-9]\d+|[2-9])\b|\[[^\]\s]*\])").expect("valid regex")
});

static FLEX_ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bflex-row\b").expect("valid regex"));

static FLEX_DIRECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"flex-direction:\s*row").expect("valid regex"));

static JSX_FLEX_DIRECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"flexDirection:\s*(['"])row"#).expect("valid regex")
});

static GRID_TEMPLATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"grid-template-columns:\s*([^;}"'\n]+)"#).expect("valid regex")
});

static JSX_GRID_TEMPLATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"gridTemplateColumns:\s*(['"])([^'"]*)['"]"#).expect("valid regex")
});

/// `class="..."`, `className='...'`, ``className={`...`}``.
static CLASS_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?P<attr>\bclass(?:Name)?\s*=\s*\{?\s*)(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)'|`(?P<bq>[^`]*)`)"#,
    )
    .expect("valid regex")
});

/// Arguments of a class-merging helper call: `cn(...)`, `clsx(...)`, `classNames(...)`, `twMerge(...)`.
static CLASS_CALL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:cn|clsx|classNames|classnames|twMerge)\((?P<args>[^()]*)\)")
        .expect("valid regex")
});

/// A quoted or backtick string literal.
static STRING_LITERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(?P<dq>[^"]*)"|'(?P<sq>[^']*)'|`(?P<bq>[^`]*)`"#).expect("valid regex")
});

/// A CSS declaration block or JS style object without nested braces.
static CSS_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?P<body>[^{}]*)\}").expect("valid regex"));

static STYLE_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bstyle\s*=\s*"(?P<body>[^"]*)""#).expect("valid regex"));

static DISPLAY_FLEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"display:\s*['"]?(?:inline-)?flex\b['"]?"#).expect("valid regex")
});

/// `display: 'flex'` as written in a JSX style object.
static JSX_DISPLAY_FLEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"display:\s*['"](?:inline-)?flex['"]"#).expect("valid regex")
});

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Rewrite all three code strings to a single-column layout.
pub fn normalize_vertical(code: DesignCode) -> DesignCode {
    DesignCode {
        html: normalize_markup(&code.html),
        css: normalize_markup(&code.css),
        react: normalize_markup(&code.react),
    }
}

/// Apply every vertical rewrite to one source string.
pub fn normalize_markup(source: &str) -> String {
    let s = GRID_COLS_RE.replace_all(source, "grid-cols-1");
    let s = FLEX_ROW_RE.replace_all(&s, "flex-col");
    let s = FLEX_DIRECTION_RE.replace_all(&s, "flex-direction: column");
    let s = JSX_FLEX_DIRECTION_RE.replace_all(&s, "flexDirection: ${1}column");
    let s = GRID_TEMPLATE_RE.replace_all(&s, "grid-template-columns: 1fr");
    let s = JSX_GRID_TEMPLATE_RE.replace_all(&s, "gridTemplateColumns: ${1}1fr${1}");
    let s = CLASS_ATTR_RE.replace_all(&s, |caps: &Captures| rewrite_class_attr(caps));
    let s = CLASS_CALL_RE.replace_all(&s, |caps: &Captures| {
        let literals = STRING_LITERAL_RE.replace_all(&caps["args"], |lit: &Captures| rewrite_literal(lit));
        caps[0].replacen(&caps["args"], &literals, 1)
    });
    let s = CSS_BLOCK_RE.replace_all(&s, |caps: &Captures| rewrite_block(&caps[0], &caps["body"]));
    let s = STYLE_ATTR_RE.replace_all(&s, |caps: &Captures| {
        let body = &caps["body"];
        if needs_direction(body) {
            let sep = if body.trim_end().ends_with(';') { " " } else { "; " };
            format!("style=\"{}{sep}flex-direction: column\"", body.trim_end())
        } else {
            caps[0].to_string()
        }
    });
    s.into_owned()
}

/// `true` when any horizontal multi-column marker remains in the code.
pub fn has_horizontal_layout(code: &DesignCode) -> bool {
    [&code.html, &code.css, &code.react]
        .into_iter()
        .any(|s| has_horizontal_marker(s))
}

fn has_horizontal_marker(source: &str) -> bool {
    if GRID_COLS_RE.is_match(source)
        || FLEX_ROW_RE.is_match(source)
        || FLEX_DIRECTION_RE.is_match(source)
        || JSX_FLEX_DIRECTION_RE.is_match(source)
    {
        return true;
    }
    if GRID_TEMPLATE_RE
        .captures_iter(source)
        .any(|c| c[1].trim() != "1fr")
    {
        return true;
    }
    if JSX_GRID_TEMPLATE_RE
        .captures_iter(source)
        .any(|c| c[2].trim() != "1fr")
    {
        return true;
    }
    if CLASS_ATTR_RE
        .captures_iter(source)
        .any(|c| class_needs_column(class_value(&c)))
    {
        return true;
    }
    if CLASS_CALL_RE.captures_iter(source).any(|call| {
        STRING_LITERAL_RE
            .captures_iter(&call["args"])
            .any(|lit| class_needs_column(class_value(&lit)))
    }) {
        return true;
    }
    CSS_BLOCK_RE
        .captures_iter(source)
        .chain(STYLE_ATTR_RE.captures_iter(source))
        .any(|c| needs_direction(&c["body"]))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn class_value<'a>(caps: &'a Captures) -> &'a str {
    caps.name("dq")
        .or_else(|| caps.name("sq"))
        .or_else(|| caps.name("bq"))
        .map_or("", |m| m.as_str())
}

/// A class list with a flex container but no unprefixed column direction.
fn class_needs_column(classes: &str) -> bool {
    let tokens: Vec<&str> = classes.split_whitespace().collect();
    let is_flex = tokens
        .iter()
        .any(|t| matches!(t.rsplit(':').next(), Some("flex" | "inline-flex")));
    let has_column = tokens
        .iter()
        .any(|t| *t == "flex-col" || *t == "flex-col-reverse");
    is_flex && !has_column
}

/// `classes` with `flex-col` inserted after the flex container token.
fn with_column(classes: &str) -> String {
    let mut tokens: Vec<&str> = classes.split_whitespace().collect();
    let flex_at = tokens
        .iter()
        .position(|t| matches!(t.rsplit(':').next(), Some("flex" | "inline-flex")))
        .unwrap_or(0);
    tokens.insert(flex_at + 1, "flex-col");
    tokens.join(" ")
}

fn quote_of(caps: &Captures) -> char {
    if caps.name("dq").is_some() {
        '"'
    } else if caps.name("sq").is_some() {
        '\''
    } else {
        '`'
    }
}

fn rewrite_class_attr(caps: &Captures) -> String {
    let classes = class_value(caps);
    if !class_needs_column(classes) {
        return caps[0].to_string();
    }
    let q = quote_of(caps);
    format!("{}{q}{}{q}", &caps["attr"], with_column(classes))
}

fn rewrite_literal(caps: &Captures) -> String {
    let classes = class_value(caps);
    if !class_needs_column(classes) {
        return caps[0].to_string();
    }
    let q = quote_of(caps);
    format!("{q}{}{q}", with_column(classes))
}

/// Add a column direction to a flex block, in CSS or JS object syntax.
fn rewrite_block(whole: &str, body: &str) -> String {
    if !needs_direction(body) {
        return whole.to_string();
    }
    let trimmed = body.trim_end();
    if JSX_DISPLAY_FLEX_RE.is_match(body) {
        let sep = if trimmed.ends_with(',') { " " } else { ", " };
        format!("{{{trimmed}{sep}flexDirection: 'column' }}")
    } else {
        let sep = if trimmed.ends_with(';') { " " } else { "; " };
        format!("{{{trimmed}{sep}flex-direction: column; }}")
    }
}

/// A declaration list that makes a flex container without picking a direction.
fn needs_direction(body: &str) -> bool {
    DISPLAY_FLEX_RE.is_match(body)
        && !body.contains("flex-direction")
        && !body.contains("flexDirection")
}
