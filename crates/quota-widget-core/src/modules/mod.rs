//! Collaborators around the engine: credential store, quota client, poller,
//! configuration, and logging.

pub mod config;
pub mod logger;
pub mod poller;
pub mod quota;
pub mod token_extraction;
