//! Cosmetic rewrite rules applied to formatted model names.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameRewrite {
    pub pattern: String,
    pub replacement: String,
}

/// Ordered `{pattern -> replacement}` table. Every occurrence of each pattern
/// is replaced, rules applied in order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct NameRewriteRules(pub Vec<NameRewrite>);

impl NameRewriteRules {
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn apply(&self, name: &str) -> String {
        self.0.iter().fold(name.to_string(), |acc, rule| {
            if rule.pattern.is_empty() {
                acc
            } else {
                acc.replace(&rule.pattern, &rule.replacement)
            }
        })
    }
}

impl Default for NameRewriteRules {
    /// "Gemini 2.5 Flash" reads as "Gemini-2.5 Flash".
    fn default() -> Self {
        Self(vec![NameRewrite {
            pattern: "Gemini ".to_string(),
            replacement: "Gemini-".to_string(),
        }])
    }
}
