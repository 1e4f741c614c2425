//! Salvage JSON from replies that wrap it in markdown or prose
//!
//! Models sometimes ignore the "JSON only" instruction and wrap the payload
//! in a code fence or a sentence of commentary. This module carves the JSON
//! span back out. It is only consulted when the caller has opted into
//! lenient parsing; the default path hands the reply to the JSON parser
//! untouched.

/// Extract the JSON payload from a possibly-wrapped reply.
///
/// Handles a markdown code fence (with or without a language tag) and,
/// failing that, falls back to the outermost `{...}` or `[...]` span.
/// Returns the trimmed input unchanged when neither shape is found.
pub fn extract_json(reply: &str) -> &str {
    let trimmed = reply.trim();

    if let Some(inner) = fenced_block(trimmed) {
        return inner.trim();
    }

    json_span(trimmed).unwrap_or(trimmed)
}

/// The body of the first ``` fence, language tag stripped
fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find("```")?;
    let after_ticks = &text[start + 3..];
    // skip the language tag line, if any
    let body_start = after_ticks.find('\n').map(|i| i + 1).unwrap_or(0);
    let body = &after_ticks[body_start..];
    let end = body.find("```")?;
    Some(&body[..end])
}

/// The outermost object or array span, if one exists
fn json_span(text: &str) -> Option<&str> {
    let start = text.find(['{', '['])?;
    let close = match text.as_bytes()[start] {
        b'{' => '}',
        _ => ']',
    };
    let end = text.rfind(close)?;
    if end > start {
        Some(&text[start..=end])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_json_passes_through() {
        assert_eq!(extract_json(r#"{"name": "Alice"}"#), r#"{"name": "Alice"}"#);
    }

    #[test]
    fn test_fenced_json_with_language_tag() {
        let reply = "```json\n{\"name\": \"Alice\"}\n```";
        assert_eq!(extract_json(reply), r#"{"name": "Alice"}"#);
    }

    #[test]
    fn test_fenced_json_without_language_tag() {
        let reply = "```\n[1, 2, 3]\n```";
        assert_eq!(extract_json(reply), "[1, 2, 3]");
    }

    #[test]
    fn test_prose_wrapped_object() {
        let reply = r#"Here is the result: {"name": "Alice"} — let me know if it helps."#;
        assert_eq!(extract_json(reply), r#"{"name": "Alice"}"#);
    }

    #[test]
    fn test_prose_wrapped_array() {
        let reply = "The items are [1, 2] as requested.";
        assert_eq!(extract_json(reply), "[1, 2]");
    }

    #[test]
    fn test_no_json_shape_returns_trimmed_input() {
        assert_eq!(extract_json("  nothing to see here  "), "nothing to see here");
    }

    #[test]
    fn test_unterminated_fence_falls_back_to_span() {
        let reply = "```json\n{\"name\": \"Alice\"}";
        assert_eq!(extract_json(reply), r#"{"name": "Alice"}"#);
    }
}
