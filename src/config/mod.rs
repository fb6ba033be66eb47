pub mod config;

pub use config::ExportRules;
