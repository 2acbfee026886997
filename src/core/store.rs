use crate::core::parser::parse_order_file;
use crate::domain::model::Record;
use crate::utils::error::{LookupError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Every order line from one directory, in load order.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    records: Vec<Record>,
}

#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub store: OrderStore,
    pub unparseable: Vec<PathBuf>,
}

impl OrderStore {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Loads every `*.csv` directly inside `dir`. Files that neither parser
    /// accepts are collected in `unparseable` and do not fail the load.
    pub fn load_dir(dir: &Path) -> Result<LoadOutcome> {
        let mut records = Vec::new();
        let mut unparseable = Vec::new();

        for path in list_order_files(dir)? {
            match parse_order_file(&path) {
                Ok(parsed) => {
                    tracing::debug!(
                        "Loaded {} {:?} records from {}",
                        parsed.records.len(),
                        parsed.format,
                        path.display()
                    );
                    records.extend(parsed.records);
                }
                Err(e) => {
                    tracing::warn!("{}", e);
                    unparseable.push(path);
                }
            }
        }

        tracing::info!(
            "Loaded {} order lines from {}",
            records.len(),
            dir.display()
        );

        Ok(LoadOutcome {
            store: Self::from_records(records),
            unparseable,
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Non-recursive; keeps the platform's enumeration order.
pub fn list_order_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let dir_error = |source: std::io::Error| LookupError::OrdersDirError {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(dir_error)? {
        let entry = entry.map_err(dir_error)?;
        if entry.file_name().to_string_lossy().ends_with(".csv") {
            files.push(entry.path());
        }
    }

    Ok(files)
}
