// Module declarations
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod issues;
pub mod logging;
pub mod models;
pub mod publish;
pub mod teams;

// Re-export commonly used items
pub use client::GithubClient;
pub use config::ExportRules;
pub use error::{ExportError, ExportResult};
pub use models::*;
