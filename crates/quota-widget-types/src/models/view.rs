//! View-models handed to the rendering surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::layout::LayoutPlan;
use super::quota::Remaining;

pub const OTHER_MODELS_TITLE: &str = "Other Models";

/// Worst-case summary of one model group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardViewModel {
    pub title: String,
    pub remaining: Remaining,
    pub reset_countdown: String,
}

/// One ungrouped model row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OtherModelViewModel {
    /// Display-formatted, at most 25 characters
    pub name: String,
    pub remaining: Remaining,
    pub reset_countdown: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListViewModel {
    pub title: String,
    pub items: Vec<OtherModelViewModel>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewModel {
    Group(CardViewModel),
    List(ListViewModel),
}

impl ViewModel {
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

/// Result of one poll cycle, replacing the previous one wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DashboardState {
    /// Nothing fetched yet
    Loading,
    Ready { items: Vec<ViewModel>, layout: LayoutPlan, updated_at: DateTime<Utc> },
    /// Upstream failure; the engine was not run for this cycle
    Error { message: String },
}

impl DashboardState {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error { message: message.into() }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}
