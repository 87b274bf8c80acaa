use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use validator::Validate;

use sniffer_config::{ConfigError, LinkLayerMode, SnifferConfig};
use sniffer_engine::{list_interfaces, run_capture_mode};
use sniffer_telemetry::metrics::MetricsRecorder;

#[derive(Parser, Debug)]
#[command(name = "sniffer", version, about)]
pub struct Cli {
    /// Configuration file; without it `config/sniffer.yaml` and `SNIFFER_*`
    /// variables are used
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List capture devices and their addresses
    Devices,
    /// Capture live traffic and print every frame
    Run(RunArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Interface to capture on
    #[arg(short, long)]
    pub interface: Option<String>,

    /// Stop after this many frames
    #[arg(short = 'c', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub count: Option<u64>,

    /// Whether buffers start with an Ethernet header: auto, present or absent
    #[arg(long)]
    pub link_layer: Option<LinkLayerMode>,

    /// Bytes to capture per frame
    #[arg(short, long)]
    pub snaplen: Option<usize>,

    /// Do not put the interface into promiscuous mode
    #[arg(long)]
    pub no_promisc: bool,
}

impl RunArgs {
    /// Command-line flags take precedence over every configuration layer.
    /// The merged configuration is validated again before it is used.
    pub fn apply(&self, config: &mut SnifferConfig) -> Result<(), ConfigError> {
        let capture = &mut config.capture;
        if let Some(interface) = &self.interface {
            capture.interface = interface.clone();
        }
        if let Some(count) = self.count {
            capture.frame_limit = Some(count);
        }
        if let Some(mode) = self.link_layer {
            capture.link_layer = mode;
        }
        if let Some(snaplen) = self.snaplen {
            capture.snaplen = snaplen;
        }
        if self.no_promisc {
            capture.promiscuous = false;
        }
        config.validate()?;
        Ok(())
    }
}

impl Cli {
    pub fn load_config(&self) -> Result<SnifferConfig, ConfigError> {
        match &self.config {
            Some(path) => SnifferConfig::load_from_path(path),
            None => SnifferConfig::load(),
        }
    }
}

pub async fn run_command(
    cli: Cli,
    mut config: SnifferConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    match cli.command {
        Commands::Devices => {
            let count = list_interfaces(&mut io::stdout().lock())?;
            info!(count, "Listed capture devices");
        }
        Commands::Run(run_args) => {
            run_args.apply(&mut config)?;
            let metrics = MetricsRecorder::new();
            run_capture_mode(&config, metrics).await?;
        }
    }
    Ok(())
}
