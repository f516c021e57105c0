use anyhow::{Context as _, Result};
use clap::{Args, Parser, Subcommand};
use gpdetect_hw::{CameraEntry, DetectOptions, GphotoBackend};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

mod config;
mod output;

use config::{Config, Format};

#[derive(Parser)]
#[command(name = "gpdetect", about = "List attached cameras and print their summaries")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect cameras, open each one and print its summary (default)
    Detect(DetectArgs),
    /// Detect cameras without opening them
    List(DetectArgs),
    /// Open one camera and print its summary, abilities and port info
    Info {
        /// Camera model as reported by `gpdetect list`
        #[arg(short, long)]
        model: String,
        /// Port path (e.g., "usb:001,004")
        #[arg(short, long)]
        port: String,
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<Format>,
    },
}

#[derive(Args, Default)]
struct DetectArgs {
    /// Only keep models containing this text (case-insensitive)
    #[arg(short, long)]
    model: Option<String>,
    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<Format>,
}

impl DetectArgs {
    fn options(&self, config: &Config, summaries: bool) -> DetectOptions {
        DetectOptions {
            placeholder_port: config.placeholder_port.clone(),
            model: self.model.clone().or_else(|| config.model.clone()),
            summaries,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let backend = GphotoBackend::new().context("libgphoto2 is unavailable")?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    match cli.command.unwrap_or(Commands::Detect(DetectArgs::default())) {
        Commands::Detect(args) => {
            let report = gpdetect_hw::autodetect(&backend, &args.options(&config, true));
            match args.format.unwrap_or(config.format) {
                Format::Text => output::write_report(&mut out, &mut err, &report)?,
                Format::Json => output::write_json(&mut out, &report)?,
            }
        }
        Commands::List(args) => {
            let report = gpdetect_hw::autodetect(&backend, &args.options(&config, false));
            match args.format.unwrap_or(config.format) {
                Format::Text => output::write_list(&mut out, &report)?,
                Format::Json => output::write_json(&mut out, &report)?,
            }
        }
        Commands::Info {
            model,
            port,
            format,
        } => {
            let entry = CameraEntry::new(model, port);
            let details = gpdetect_hw::inspect(&backend, &entry).with_context(|| {
                format!("failed to inspect camera {} on port {}", entry.model, entry.port)
            })?;
            match format.unwrap_or(config.format) {
                Format::Text => output::write_details(&mut out, &details)?,
                Format::Json => {
                    serde_json::to_writer(&mut out, &details)?;
                    writeln!(out)?;
                }
            }
        }
    }

    out.flush()?;
    Ok(())
}
