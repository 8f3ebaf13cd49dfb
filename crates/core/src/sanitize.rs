//! JSON sanitization for model output.
//!
//! LLMs wrap JSON in prose or code fences and routinely emit raw newlines or
//! stray backslashes inside string literals. Parsing runs in two passes:
//!
//! 1. [`parse_json`]: extract the outermost object, strip control
//!    characters, parse.
//! 2. [`parse_repaired`]: the same, plus one [`repair`] pass. The chain
//!    executor calls this at most once per attempt.

use serde::de::DeserializeOwned;

/// Slice from the first `{` to the last `}` (inclusive), if both exist in
/// that order.
pub fn extract_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Control characters removed before every parse. JSON whitespace (tab,
/// line feed, carriage return) is kept.
pub fn is_stripped_control(c: char) -> bool {
    matches!(c,
        '\u{0000}'..='\u{0008}'
        | '\u{000B}'
        | '\u{000C}'
        | '\u{000E}'..='\u{001F}'
        | '\u{007F}'..='\u{009F}')
}

/// Remove the control characters matched by [`is_stripped_control`].
pub fn strip_control_chars(text: &str) -> String {
    text.chars().filter(|c| !is_stripped_control(*c)).collect()
}

/// Repair common string-literal defects in near-JSON text.
///
/// Inside string literals: raw `\n`, `\r`, `\t` become escapes, other
/// control characters are dropped, and a backslash that does not start a
/// valid escape is doubled. Outside string literals, control characters
/// other than JSON whitespace are dropped. The function is idempotent.
pub fn repair(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut in_string = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if !in_string {
            match c {
                '"' => {
                    in_string = true;
                    out.push(c);
                }
                ' ' | '\t' | '\n' | '\r' => out.push(c),
                c if c.is_control() => {}
                c => out.push(c),
            }
            continue;
        }

        match c {
            '"' => {
                in_string = false;
                out.push(c);
            }
            '\\' => match chars.peek() {
                Some(&next) if is_escape_char(next) => {
                    out.push('\\');
                    out.push(next);
                    chars.next();
                }
                _ => out.push_str("\\\\"),
            },
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {}
            c => out.push(c),
        }
    }

    out
}

fn is_escape_char(c: char) -> bool {
    matches!(c, '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't' | 'u')
}

/// First-pass parse: extract the object, strip control characters, parse.
pub fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, String> {
    let object = extract_object(text).ok_or_else(|| "no JSON object in response".to_string())?;
    serde_json::from_str(&strip_control_chars(object)).map_err(|e| e.to_string())
}

/// Second-pass parse: as [`parse_json`] with one [`repair`] applied.
pub fn parse_repaired<T: DeserializeOwned>(text: &str) -> Result<T, String> {
    let object = extract_object(text).ok_or_else(|| "no JSON object in response".to_string())?;
    serde_json::from_str(&repair(&strip_control_chars(object))).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    // -- extract_object --

    #[test]
    fn extracts_object_from_fenced_prose() {
        let text = "Here you go:\n```json\n{\"a\": {\"b\": 1}}\n```\nEnjoy!";
        assert_eq!(extract_object(text), Some("{\"a\": {\"b\": 1}}"));
    }

    #[test]
    fn no_object_yields_none() {
        assert_eq!(extract_object("no braces here"), None);
        assert_eq!(extract_object("} backwards {"), None);
    }

    // -- strip_control_chars --

    #[test]
    fn strips_nul_and_c1_but_keeps_whitespace() {
        let text = "a\u{0000}b\u{0085}c\td\ne\rf";
        assert_eq!(strip_control_chars(text), "abc\td\ne\rf");
    }

    // -- repair --

    #[test]
    fn escapes_raw_newlines_inside_strings() {
        let broken = "{\"code\": \"line one\nline two\"}";
        let repaired = repair(broken);
        let v: Value = serde_json::from_str(&repaired).unwrap();
        assert_eq!(v["code"], "line one\nline two");
    }

    #[test]
    fn doubles_invalid_backslash_escapes() {
        let broken = r#"{"regex": "\d+\s*"}"#;
        let v: Value = serde_json::from_str(&repair(broken)).unwrap();
        assert_eq!(v["regex"], r"\d+\s*");
    }

    #[test]
    fn keeps_valid_escapes_untouched() {
        let ok = r#"{"a": "quote \" slash \\ nl \n uni \u00e9"}"#;
        assert_eq!(repair(ok), ok);
    }

    #[test]
    fn whitespace_between_tokens_is_preserved() {
        let ok = "{\n  \"a\": 1,\n\t\"b\": [1, 2]\n}";
        assert_eq!(repair(ok), ok);
    }

    #[test]
    fn repair_is_idempotent() {
        let broken = "{\"a\": \"x\ny\\qz\t\", \"b\": \"\\d\"}";
        let once = repair(broken);
        assert_eq!(repair(&once), once);
    }

    #[test]
    fn trailing_lone_backslash_is_escaped() {
        let repaired = repair("{\"a\": \"x\\");
        assert!(repaired.ends_with("x\\\\"));
    }

    // -- parse passes --

    #[test]
    fn first_pass_fails_where_repair_succeeds() {
        let text = "```json\n{\"react\": \"<div>\n  hi\n</div>\"}\n```";
        assert!(parse_json::<Value>(text).is_err());
        let v: Value = parse_repaired(text).unwrap();
        assert_eq!(v["react"], "<div>\n  hi\n</div>");
    }

    #[test]
    fn first_pass_handles_clean_json() {
        let v: Value = parse_json("result: {\"ok\": true}").unwrap();
        assert_eq!(v["ok"], true);
    }

    #[test]
    fn unrepairable_text_still_errors() {
        assert!(parse_repaired::<Value>("{not json at all}").is_err());
    }
}
