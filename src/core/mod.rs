pub mod engine;
pub mod matcher;
pub mod parser;
pub mod resolver;
pub mod store;

pub use crate::domain::model::{Record, Source};
pub use crate::domain::ports::{ClipboardProvider, ConfigProvider, Notice, Reporter};
pub use crate::utils::error::Result;
