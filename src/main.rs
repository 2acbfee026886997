use clap::Parser;
use order_lookup::utils::error::ErrorSeverity;
use order_lookup::utils::{logger, validation::Validate};
use order_lookup::{CliConfig, LookupEngine, SystemClipboard, TerminalReporter};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting order-lookup");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let mut engine = LookupEngine::new(config, SystemClipboard::new(), TerminalReporter::stdout());

    match engine.run() {
        Ok(found) => tracing::info!("Found {} matching order lines", found),
        Err(e) => {
            // Low-severity failures were already shown to the user by the reporter.
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code == 0 {
                tracing::debug!("Lookup stopped: {}", e);
                return;
            }

            tracing::error!(
                "Lookup failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code);
        }
    }
}
