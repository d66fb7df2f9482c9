//! Quota aggregation and presentation engine.
//!
//! ```text
//! payload ──► parser (per entry) ──► aggregate (groups + others) ──► layout
//!                                        │
//!                                        └─► status (per displayed entry, at render time)
//! ```
//!
//! Every function here is a pure transform over immutable inputs.

pub mod aggregate;
pub mod groups;
pub mod layout;
pub mod naming;
pub mod parser;
pub mod status;

pub use aggregate::compute_view_model;
pub use layout::compute_layout;
pub use parser::parse_quota;
pub use status::classify;

use chrono::{DateTime, Utc};
use quota_widget_types::{
    AppConfig, GroupTable, LayoutConstants, LayoutPlan, NameRewriteRules, QuotaPayload, ViewModel,
};

/// The immutable tables both engine entry points run against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineTables {
    pub groups: GroupTable,
    pub name_rewrites: NameRewriteRules,
    pub layout: LayoutConstants,
}

impl EngineTables {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            groups: config.groups.clone(),
            name_rewrites: config.name_rewrites.clone(),
            layout: config.layout,
        }
    }

    /// View-model and layout for one payload.
    pub fn render(&self, payload: &QuotaPayload, now: DateTime<Utc>) -> (Vec<ViewModel>, LayoutPlan) {
        let items = compute_view_model(payload, &self.groups, &self.name_rewrites, now);
        let layout = compute_layout(&items, &self.layout);
        (items, layout)
    }
}
