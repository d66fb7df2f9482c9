//! # Quota Widget Types
//!
//! Data model, configuration tables, and error definitions for Quota Widget.
//!
//! - **`error`** - Typed configuration errors
//! - **`models`** - Raw quota payload, parsed quota, view-models, layout plan, config
//!
//! ## Architecture Role
//!
//! `quota-widget-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!          quota-widget-types (this crate)
//!                    │
//!                    ▼
//!            quota-widget-core
//!                    │
//!                    ▼
//!              quota-widget
//! ```
//!
//! Everything here is plain data: serializable via serde, `Clone`, and
//! `PartialEq` for testing.

pub mod error;
pub mod models;

pub use error::ConfigError;

pub use models::{
    AppConfig, CardViewModel, DashboardState, GroupDefinition, GroupTable, LayoutConstants,
    LayoutPlan, ListViewModel, NameRewrite, NameRewriteRules, OtherModelViewModel, ParsedQuota,
    PlacedRect, QuotaPayload, QuotaResponse, RawModelQuota, Remaining, StatusCategory, ViewModel,
    OTHER_MODELS_TITLE,
};
