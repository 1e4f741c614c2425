//! Instruction templates for schema-guided translation

use serde_json::Value;

/// Placeholder replaced with the pretty-printed schema
pub const SCHEMA_SLOT: &str = "{schema}";

/// Placeholder replaced with caller-supplied context text
pub const INPUT_SLOT: &str = "{input}";

/// Default system instructions seeded at the start of every translation
pub const DEFAULT_SYSTEM_TEMPLATE: &str = r#"You convert the user's text into a JSON value conforming to the JSON Schema below.

Rules:
- Return ONLY a single JSON value, no markdown code blocks, no explanations
- Use the schema's titles and property descriptions to decide what belongs in each field
- Never invent values; leave out optional properties the text gives no evidence for
- Keep the user's wording for free-text fields

JSON Schema:
{schema}"#;

/// Default wrapper applied to context completions
pub const DEFAULT_CONTEXT_TEMPLATE: &str =
    "Complete your last response using this context:\n```\n{input}\n```";

/// Render the system instruction by embedding the pretty-printed schema
pub fn render_system(template: &str, schema: &Value) -> String {
    let pretty = serde_json::to_string_pretty(schema).unwrap_or_else(|_| schema.to_string());
    template.replace(SCHEMA_SLOT, &pretty)
}

/// Render the context wrapper around caller-supplied text
pub fn render_context(template: &str, input: &str) -> String {
    template.replace(INPUT_SLOT, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_system_render_embeds_pretty_schema() {
        let schema = json!({"type": "object", "properties": {"name": {"type": "string"}}});
        let rendered = render_system(DEFAULT_SYSTEM_TEMPLATE, &schema);

        assert!(!rendered.contains(SCHEMA_SLOT));
        // pretty printing puts each property on its own line
        assert!(rendered.contains("\"name\": {"));
        assert!(rendered.contains("Return ONLY a single JSON value"));
    }

    #[test]
    fn test_context_render_wraps_input_in_fence() {
        let rendered = render_context(DEFAULT_CONTEXT_TEMPLATE, "she moved to Berlin");

        assert!(rendered.starts_with("Complete your last response using this context:"));
        assert!(rendered.contains("```\nshe moved to Berlin\n```"));
    }

    #[test]
    fn test_custom_template_is_used_verbatim() {
        let rendered = render_context("Revise with: {input}", "new facts");
        assert_eq!(rendered, "Revise with: new facts");
    }
}
