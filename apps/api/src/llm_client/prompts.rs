// Shared prompt fragments used by every flow.
// Flow-specific templates live in flows/prompts.rs.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Appended to every rendered prompt. Replace `{schema}` with the declared output shape.
pub const OUTPUT_SHAPE_INSTRUCTION: &str = r#"Return your answer as JSON matching this EXACT schema (no extra fields, no missing fields):
{schema}"#;
