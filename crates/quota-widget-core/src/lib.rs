//! # Quota Widget Core
//!
//! Turns a raw `fetchAvailableModels` payload into a grouped, classified
//! view-model and a deterministic layout plan, and hosts the collaborators
//! that feed it.
//!
//! ```text
//! quota-widget-core/src/
//! ├── engine/     # pure: parser, status, groups, naming, aggregate, layout
//! ├── modules/    # I/O: token_extraction, quota client, poller, config, logger
//! └── utils/      # http client builder, data/credential paths
//! ```
//!
//! Nothing under `engine/` performs I/O or reads the clock; `now` is always
//! passed in.

// Test-only lints: allow panic!, println!, etc. in test code
#![cfg_attr(test, allow(clippy::panic, clippy::print_stdout, clippy::float_cmp))]

pub mod engine;
pub mod error;
pub mod modules;
pub mod utils;

// Re-export commonly used types
pub use engine::{classify, compute_layout, compute_view_model, EngineTables};
pub use error::{AppError, AppResult};
pub use quota_widget_types as types;
