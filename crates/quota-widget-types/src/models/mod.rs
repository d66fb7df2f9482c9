//! Core domain models for Quota Widget.
//!
//! Everything here is recomputed from scratch on every poll cycle; nothing
//! persists across cycles except [`AppConfig`].

mod config;
mod groups;
mod layout;
mod naming;
mod quota;
mod view;

pub use config::AppConfig;
pub use groups::{GroupDefinition, GroupTable};
pub use layout::{LayoutConstants, LayoutPlan, PlacedRect};
pub use naming::{NameRewrite, NameRewriteRules};
pub use quota::{ParsedQuota, QuotaPayload, QuotaResponse, RawModelQuota, Remaining, StatusCategory};
pub use view::{
    CardViewModel, DashboardState, ListViewModel, OtherModelViewModel, ViewModel,
    OTHER_MODELS_TITLE,
};
