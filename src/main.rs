use clap::Parser;
use shuffle_console::utils::logger;
use shuffle_console::{CliConfig, LogFormat, MenuLoop};
use std::io;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose)?,
        LogFormat::Json => logger::init_json_logger(config.verbose)?,
    }
    tracing::debug!("CLI config: {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = MenuLoop::new(stdin.lock(), stdout.lock()).with_eof_policy(config.on_eof);

    match menu.run() {
        Ok(summary) => {
            tracing::debug!("Session summary: {:?}", summary);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Console session failed: {}", e);
            eprintln!();
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
