//! Configuration module for FinanceFlow
//!
//! - Path resolution (env override, XDG, APPDATA)
//! - User settings persistence, including the daily spending goal

pub mod paths;
pub mod settings;

pub use paths::FlowPaths;
pub use settings::Settings;
