pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{clipboard::SystemClipboard, terminal::TerminalReporter};
pub use crate::core::{engine::LookupEngine, matcher::SearchMode, store::OrderStore};
pub use domain::model::{Record, Source};
pub use utils::error::{LookupError, Result};
