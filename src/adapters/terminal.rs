use crate::domain::model::Record;
use crate::domain::ports::{Notice, Reporter};
use crate::utils::error::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Writes colored search results to a terminal (or any writer).
pub struct TerminalReporter<W: Write> {
    out: W,
}

impl TerminalReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record(&mut self, index: usize, record: &Record) -> Result<()> {
        writeln!(self.out, "{}", format!("Result {}:", index).yellow())?;
        writeln!(self.out, "{} {}", "  Source:".cyan(), record.source)?;
        for (label, value) in record.display_fields() {
            writeln!(self.out, "  {} {}", format!("{}:", label).cyan(), value)?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> Reporter for TerminalReporter<W> {
    fn notice(&mut self, notice: &Notice) -> Result<()> {
        match notice {
            Notice::UnparseableFile(path) => {
                writeln!(self.out, "Could not parse file: {}", path.display())?
            }
            Notice::InvalidClipboard => writeln!(
                self.out,
                "{}",
                "No valid LCSC part number found in clipboard.".red()
            )?,
        }
        Ok(())
    }

    fn render(&mut self, results: &[&Record]) -> Result<()> {
        if results.is_empty() {
            writeln!(self.out, "{}", "No results found.".red())?;
            return Ok(());
        }

        writeln!(self.out, "{}", "Search Results:".green())?;
        for (i, record) in results.iter().enumerate() {
            self.write_record(i + 1, record)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
