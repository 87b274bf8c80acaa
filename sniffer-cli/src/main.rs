//! ## sniffer-cli
//! **Command-line front end**
//! Lists capture devices and runs live capture sessions that print a decoded
//! report (addresses, ports, hex and ASCII dumps) for every frame.

use clap::Parser;
use sniffer_telemetry::logging::EventLogger;

mod commands;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    EventLogger::init(&config.telemetry.log_level);

    commands::run_command(cli, config).await
}
