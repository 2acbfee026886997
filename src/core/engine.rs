use crate::core::matcher::find_matches;
use crate::core::resolver::resolve_query;
use crate::core::store::OrderStore;
use crate::core::{ClipboardProvider, ConfigProvider, Notice, Reporter};
use crate::utils::error::{LookupError, Result};

pub struct LookupEngine<C: ConfigProvider, B: ClipboardProvider, R: Reporter> {
    config: C,
    clipboard: B,
    reporter: R,
}

impl<C: ConfigProvider, B: ClipboardProvider, R: Reporter> LookupEngine<C, B, R> {
    pub fn new(config: C, clipboard: B, reporter: R) -> Self {
        Self {
            config,
            clipboard,
            reporter,
        }
    }

    /// Loads the orders, resolves the query and reports the matches.
    /// Returns how many order lines matched.
    pub fn run(&mut self) -> Result<usize> {
        let outcome = OrderStore::load_dir(self.config.orders_dir())?;
        for path in outcome.unparseable {
            self.reporter.notice(&Notice::UnparseableFile(path))?;
        }

        let mode = self.config.search_mode();
        let query = match resolve_query(self.config.query(), &self.clipboard) {
            Ok(query) => query,
            Err(e @ LookupError::InvalidPartNumber { .. }) => {
                self.reporter.notice(&Notice::InvalidClipboard)?;
                return Err(e);
            }
            Err(e) => return Err(e),
        };
        tracing::debug!("Searching {:?} mode for {:?}", mode, query);

        let results = find_matches(outcome.store.records(), &query, mode);
        self.reporter.render(&results)?;

        Ok(results.len())
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }
}
