use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use imgprobe::{BmpHeightPolicy, ProbeConfig, Prober};

#[derive(Parser)]
#[command(name = "imgprobe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Report image format and dimensions from the first bytes of each file")]
struct Cli {
    /// Image files to probe
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// JSON file with probe settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    initial_bytes: Option<usize>,

    #[arg(long)]
    max_bytes: Option<usize>,

    #[arg(long, value_enum)]
    bmp_height: Option<BmpHeightArg>,

    /// Print one JSON object per file
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum BmpHeightArg {
    Corrected,
    MirrorWidth,
}

impl From<BmpHeightArg> for BmpHeightPolicy {
    fn from(arg: BmpHeightArg) -> Self {
        match arg {
            BmpHeightArg::Corrected => BmpHeightPolicy::Corrected,
            BmpHeightArg::MirrorWidth => BmpHeightPolicy::MirrorWidth,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let prober = Prober::try_new(config).context("invalid probe settings")?;

    let results: Vec<_> = cli
        .paths
        .par_iter()
        .map(|path| (path, prober.probe_path(path)))
        .collect();

    let mut failures = 0usize;
    for (path, result) in results {
        match result {
            Ok(info) if cli.json => println!("{}", serde_json::to_string(&info)?),
            Ok(info) => println!("{}: {}", path.display(), info),
            Err(e) => {
                failures += 1;
                if cli.json {
                    let line = json!({ "source": path.display().to_string(), "error": e.to_string() });
                    println!("{line}");
                } else {
                    eprintln!("{}: error: {}", path.display(), e);
                }
            }
        }
    }

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn load_config(cli: &Cli) -> Result<ProbeConfig> {
    let mut config = match &cli.config {
        Some(path) => ProbeConfig::from_json_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ProbeConfig::default(),
    };

    if let Some(bytes) = cli.initial_bytes {
        config = config.with_initial_bytes(bytes);
    }
    if let Some(bytes) = cli.max_bytes {
        config = config.with_max_bytes(bytes);
    }
    if let Some(policy) = cli.bmp_height {
        config = config.with_bmp_height(policy.into());
    }
    Ok(config)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
