//! Model group definitions.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::ConfigError;

/// A named bundle of model identifiers shown as one worst-case card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupDefinition {
    pub id: String,
    pub display_name: String,
    /// Member model IDs in display-priority order.
    pub members: Vec<String>,
}

impl GroupDefinition {
    pub fn new(id: &str, display_name: &str, members: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            members: members.iter().map(|m| (*m).to_string()).collect(),
        }
    }
}

/// Ordered, validated set of groups.
///
/// Construction rejects a model ID that appears more than once across all
/// groups, so every model contributes to at most one card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "Vec<GroupDefinition>", into = "Vec<GroupDefinition>")]
pub struct GroupTable {
    groups: Vec<GroupDefinition>,
}

impl GroupTable {
    pub fn new(groups: Vec<GroupDefinition>) -> Result<Self, ConfigError> {
        let mut group_ids: HashSet<&str> = HashSet::new();
        let mut owners: HashMap<&str, &str> = HashMap::new();

        for group in &groups {
            if !group_ids.insert(group.id.as_str()) {
                return Err(ConfigError::validation(
                    "groups",
                    format!("duplicate group id '{}'", group.id),
                ));
            }
            for member in &group.members {
                if let Some(owner) = owners.insert(member.as_str(), group.id.as_str()) {
                    return Err(ConfigError::validation(
                        "groups",
                        format!(
                            "model '{}' is listed more than once (groups '{}' and '{}')",
                            member, owner, group.id
                        ),
                    ));
                }
            }
        }

        Ok(Self { groups })
    }

    pub fn groups(&self) -> &[GroupDefinition] {
        &self.groups
    }

    /// Union of every group's members.
    pub fn all_grouped_ids(&self) -> HashSet<&str> {
        self.groups.iter().flat_map(|g| g.members.iter().map(String::as_str)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for GroupTable {
    fn default() -> Self {
        Self {
            groups: vec![
                GroupDefinition::new("A", "Gemini 3 Pro", &["gemini-3-pro-high", "gemini-3-pro-low"]),
                GroupDefinition::new("B", "Gemini 3 Flash", &["gemini-3-flash"]),
                GroupDefinition::new(
                    "C",
                    "Claude / GPT",
                    &[
                        "claude-sonnet-4-5",
                        "claude-opus-4-5-thinking",
                        "claude-sonnet-4-5-thinking",
                        "gpt-oss-120b-medium",
                    ],
                ),
                GroupDefinition::new(
                    "D",
                    "Gemini 2.5 Flash",
                    &["gemini-2.5-flash", "gemini-2.5-flash-thinking"],
                ),
            ],
        }
    }
}

impl TryFrom<Vec<GroupDefinition>> for GroupTable {
    type Error = ConfigError;

    fn try_from(groups: Vec<GroupDefinition>) -> Result<Self, Self::Error> {
        Self::new(groups)
    }
}

impl From<GroupTable> for Vec<GroupDefinition> {
    fn from(table: GroupTable) -> Self {
        table.groups
    }
}
