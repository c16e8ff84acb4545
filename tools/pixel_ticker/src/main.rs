// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! pixel-ticker: LED dot-matrix ticker in the terminal.
//!
//! Usage:
//!   pixel-ticker                          # built-in demo rows
//!   pixel-ticker -c assets/demo.toml      # rows from a TOML or JSON file
//!   pixel-ticker -c demo.toml --preview 60  # print every row as ASCII and exit
//!   pixel-ticker -c demo.toml --export    # print the config as JSON and exit
//!
//! Keys: q/Esc quit, space pause/resume, n next page.

use clap::Parser;
use log::{info, LevelFilter};
use pixel_ticker::{
    config::{Alignment, ColoredSegment, RowConfig, TickerConfig},
    log::init_log,
    render::{adapter::cross::CrosstermAdapter, preview::render_preview},
    Engine, Ticker, TickerError,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pixel-ticker")]
#[command(about = "LED dot-matrix ticker for the terminal")]
struct Cli {
    /// Row config file (.toml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file path
    #[arg(long, default_value = "log/pixel_ticker.log")]
    log_file: String,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Print each row as ASCII at the given column count and exit
    #[arg(long)]
    preview: Option<u32>,

    /// Print the loaded config as JSON and exit
    #[arg(long)]
    export: bool,
}

fn demo_config() -> TickerConfig {
    TickerConfig {
        rows: vec![
            RowConfig::new("PIXEL TICKER - 5X7 DOT MATRIX"),
            RowConfig::new(vec![
                ColoredSegment::new("BTC ", "#FFAA00"),
                ColoredSegment::new("↑ 2.4% ", "#00FF00"),
                ColoredSegment::new("ETH ", "#8888FF"),
                ColoredSegment::new("↓ 0.7%", "#FF3333"),
            ])
            .step_interval(30),
            RowConfig::new("12:00").fixed(Alignment::Center),
        ],
        ..TickerConfig::default()
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let cfg = match &cli.config {
        Some(path) => TickerConfig::load(path)?,
        None => demo_config(),
    };

    if cli.export {
        println!("{}", cfg.to_json_string()?);
        return Ok(());
    }

    if let Some(cols) = cli.preview {
        for (i, row) in cfg.rows.iter().enumerate() {
            println!("row {}:", i);
            for line in render_preview(row, &cfg.display, cols, 0).to_ascii() {
                println!("{}", line);
            }
        }
        return Ok(());
    }

    init_log(cli.log_level, &cli.log_file)?;
    info!("pixel-ticker start, {} rows", cfg.rows.len());
    let mut engine = Engine::new(CrosstermAdapter::new("pixel-ticker"), Ticker::new(cfg))?;
    engine.run()?;
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<TickerError>() {
                Some(TickerError::Setup(_)) => eprintln!("no usable terminal: {}", e),
                _ => eprintln!("pixel-ticker: {}", e),
            }
            ExitCode::FAILURE
        }
    }
}
