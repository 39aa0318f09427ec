use crate::error::{Result, VegagenError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static FENCE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"```json|```").unwrap());

/// Remove every markdown fence marker and trim surrounding whitespace.
/// Content without fences passes through untouched apart from the trim.
pub fn sanitize_completion(text: &str) -> String {
    FENCE_REGEX.replace_all(text, "").trim().to_string()
}

/// Byte range of the first balanced top-level `{...}` span, skipping brace
/// characters inside string literals.
fn balanced_object_span(text: &str) -> Option<(usize, usize)> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((start, start + offset + ch.len_utf8()));
                }
            }
            _ => {}
        }
    }

    None
}

/// Sanitize the raw completion and parse the first complete JSON object in
/// it. Truncated output, output with no object at all, and malformed JSON
/// inside the object span all fail; the error carries the sanitized text so
/// a human can diagnose what the model actually returned.
pub fn extract_chart_spec(completion: &str) -> Result<Value> {
    let sanitized = sanitize_completion(completion);

    if sanitized.is_empty() {
        return Err(VegagenError::SpecParse {
            reason: "model returned empty output".to_string(),
            raw: sanitized,
        });
    }

    let Some((start, end)) = balanced_object_span(&sanitized) else {
        return Err(VegagenError::SpecParse {
            reason: "model output did not contain a complete json object".to_string(),
            raw: sanitized,
        });
    };

    serde_json::from_str(&sanitized[start..end]).map_err(|e| VegagenError::SpecParse {
        reason: e.to_string(),
        raw: sanitized.clone(),
    })
}
