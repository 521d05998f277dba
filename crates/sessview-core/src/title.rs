//! Session title cleanup.
//!
//! Titles arrive either as plain text or as JSON-encoded metadata
//! (`{"title": "..."}`) depending on how the session was created.

use serde_json::Value;

/// Characters stripped from a title that is not usable JSON.
const STRIP_CHARS: &[char] = &['{', '}', '[', ']', '"'];

/// Returns clean display text for a raw title. Never fails; may return "".
pub fn normalize_title(raw: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) {
        if let Some(title) = map.get("title") {
            return match title {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            };
        }
    }

    raw.chars()
        .filter(|c| !STRIP_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_title_field() {
        assert_eq!(normalize_title(r#"{"title":"Intro to Cells"}"#), "Intro to Cells");
        assert_eq!(
            normalize_title(r#"{"title": "Mitosis", "source": "upload"}"#),
            "Mitosis"
        );
    }

    #[test]
    fn plain_text() {
        assert_eq!(normalize_title("plain text"), "plain text");
        assert_eq!(normalize_title("  padded  "), "padded");
    }

    #[test]
    fn broken_json_is_stripped() {
        assert_eq!(normalize_title(r#"["bad json""#), "bad json");
        assert_eq!(normalize_title(r#"{"title": "cut"#), "title: cut");
    }

    #[test]
    fn json_without_title_is_stripped() {
        assert_eq!(normalize_title(r#"{"name":"x"}"#), "name:x");
        assert_eq!(normalize_title(r#""quoted""#), "quoted");
        assert_eq!(normalize_title(r#"["a","b"]"#), "a,b");
    }

    #[test]
    fn non_string_title() {
        assert_eq!(normalize_title(r#"{"title": 42}"#), "42");
        assert_eq!(normalize_title(r#"{"title": null}"#), "");
    }

    #[test]
    fn empty() {
        assert_eq!(normalize_title(""), "");
        assert_eq!(normalize_title("{}"), "");
    }
}
