//! Prompt composition
//!
//! The relay sends a fixed instruction block plus one user-content string
//! per request. The user content bundles the question, the caller's context
//! snippets, and the retrieval metadata verbatim.

use satchel_core::PromptBundle;
use serde_json::Value;

/// System instruction sent with every completion. Keeps the model grounded
/// in the supplied context: decline and name the missing source rather than
/// invent, and cite details with bracketed [source:ROW] tokens.
pub const INSTRUCTIONS: &str = "You are Satchel's assistant. Answer using ONLY the provided CONTEXT from the user's CSV exports. \
If the context doesn't contain the answer, say what you'd need (which source/fields) and do NOT invent. \
When you use a detail, cite it like [source:ROW] (example: [fieldNotes:12]). Keep it tight and practical.";

/// JSON truthiness with JavaScript semantics: null, false, 0, and the empty
/// string are falsy; everything else (including empty arrays and objects)
/// is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Build the full prompt for one request.
pub fn build_prompt(question: &Value, context: Option<&str>, top_matches: Option<&Value>) -> PromptBundle {
    PromptBundle {
        instructions: INSTRUCTIONS.to_string(),
        input: compose_input(question, context, top_matches),
    }
}

/// Compose the user-content block: the question, the context snippets (or a
/// `(none)` placeholder), and the match metadata pretty-printed as JSON (or
/// an empty array). Falsy context and metadata take the placeholder paths.
pub fn compose_input(question: &Value, context: Option<&str>, top_matches: Option<&Value>) -> String {
    let question = match question {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    let context = context.filter(|c| !c.is_empty()).unwrap_or("(none)");

    let empty_matches = Value::Array(Vec::new());
    let matches = top_matches.filter(|m| is_truthy(m)).unwrap_or(&empty_matches);
    let metadata = serde_json::to_string_pretty(matches).unwrap_or_else(|_| "[]".to_string());

    format!(
        "QUESTION:\n{question}\n\nCONTEXT (snippets from CSV rows):\n{context}\n\nMATCH METADATA:\n{metadata}\n"
    )
}
