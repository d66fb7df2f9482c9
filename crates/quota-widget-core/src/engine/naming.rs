//! Display names for ungrouped models.

use quota_widget_types::NameRewriteRules;

/// Longest name shown untruncated.
pub const MAX_NAME_CHARS: usize = 25;
const KEPT_CHARS: usize = 23;
const ELLIPSIS: &str = "..";

/// `gemini-2.5-flash-thinking` -> `Gemini-2.5 Flash Thinking`.
///
/// Hyphens become spaces, the result is title-cased, rewrite rules run, and
/// anything over [`MAX_NAME_CHARS`] is cut to 23 characters plus `..`.
pub fn format_model_name(model_id: &str, rules: &NameRewriteRules) -> String {
    let titled = title_case(&model_id.replace('-', " "));
    truncate_name(&rules.apply(&titled))
}

/// A letter is uppercased when the character before it is not a letter and
/// lowercased otherwise, so `8b` -> `8B` and `claude_opus` -> `Claude_Opus`.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if prev_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_letter = c.is_alphabetic();
    }
    out
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() <= MAX_NAME_CHARS {
        return name.to_string();
    }
    let mut truncated: String = name.chars().take(KEPT_CHARS).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
