//! Typed error definitions for Quota Widget.
//!
//! Library-level errors are serializable so they can be shown in the
//! dashboard's error state or emitted with `--json`.

mod config;

pub use config::ConfigError;
