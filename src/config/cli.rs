use crate::core::matcher::SearchMode;
use crate::core::resolver::resolve_mode;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "order-lookup")]
#[command(about = "Search LCSC and DigiKey orders")]
pub struct CliConfig {
    #[arg(
        long,
        default_value = ".",
        help = "Path to orders directory (default: current directory)"
    )]
    pub orders: PathBuf,

    #[arg(long = "lcsc_pn", help = "Search by LCSC part number")]
    pub lcsc_pn: bool,

    #[arg(long, help = "Search by manufacturer part number")]
    pub pn: bool,

    #[arg(long = "digi_pn", help = "Search by DigiKey part number")]
    pub digi_pn: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(help = "Search query; read from the clipboard when omitted")]
    pub query: Option<String>,
}

impl ConfigProvider for CliConfig {
    fn orders_dir(&self) -> &Path {
        &self.orders
    }

    fn search_mode(&self) -> SearchMode {
        resolve_mode(self.pn, self.digi_pn)
    }

    fn query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("orders", &self.orders.to_string_lossy())
    }
}
