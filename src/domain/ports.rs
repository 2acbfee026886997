use crate::core::matcher::SearchMode;
use crate::domain::model::Record;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub trait ConfigProvider {
    fn orders_dir(&self) -> &Path;
    fn search_mode(&self) -> SearchMode;
    /// `None` means the query should come from the clipboard.
    fn query(&self) -> Option<&str>;
}

pub trait ClipboardProvider {
    fn read_text(&self) -> Result<String>;
}

/// Something the user should see that is not a search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    UnparseableFile(PathBuf),
    InvalidClipboard,
}

pub trait Reporter {
    fn notice(&mut self, notice: &Notice) -> Result<()>;
    fn render(&mut self, results: &[&Record]) -> Result<()>;
}
