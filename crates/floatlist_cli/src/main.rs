//! floatlist CLI - Fractional-Index Access from the Command Line
//!
//! Loads a sample sequence and runs one fractional-index operation on it.
//!
//! # Commands
//!
//! - `floatlist read <index>` - Print the interpolated value at an index
//! - `floatlist write <index> <value>` - Write at an index and print the samples
//! - `floatlist range <start> <stop> <step>` - Print a fractional slice
//! - `floatlist contains <item>` - Check whether a value lies on the curve
//! - `floatlist show` - Print the samples and the resolver configuration
//!
//! # Configuration
//!
//! Settings are read from `floatlist.toml` (see `--config`), then the
//! `FLOATLIST_*` environment variables, then the command-line flags.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use floatlist_core::math::resolver::{BoundaryPolicy, ResolverConfig, SampleMode, WriteStrategy};
use floatlist_core::sequence::FloatList;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use commands::{Output, SampleSource};
use config::{CliConfig, LogLevel, MAX_PRECISION};
pub use error::{CliError, Result};

const DEFAULT_CONFIG: &str = "floatlist.toml";

/// Fractional-index sample sequence CLI
#[derive(Parser)]
#[command(name = "floatlist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG)]
    config: PathBuf,

    /// Comma-separated samples (e.g. 0,4,5,6)
    #[arg(
        short,
        long,
        global = true,
        value_delimiter = ',',
        allow_hyphen_values = true,
        conflicts_with = "file"
    )]
    samples: Option<Vec<f64>>,

    /// File of comma-separated samples, any number per line
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Boundary policy (clamp, wrap)
    #[arg(long, global = true)]
    boundary: Option<BoundaryPolicy>,

    /// Sample mode (linear, floor)
    #[arg(long, global = true)]
    mode: Option<SampleMode>,

    /// Write strategy (proportional, blend)
    #[arg(long, global = true)]
    write_strategy: Option<WriteStrategy>,

    /// Fractional digits to print
    #[arg(short, long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the interpolated value at a fractional index
    #[command(allow_negative_numbers = true)]
    Read {
        /// Fractional index
        index: f64,
    },

    /// Write a value at a fractional index and print the samples
    #[command(allow_negative_numbers = true)]
    Write {
        /// Fractional index
        index: f64,

        /// Value to write
        value: f64,
    },

    /// Print the values of a fractional slice
    #[command(allow_negative_numbers = true)]
    Range {
        /// First index
        start: f64,

        /// End index (excluded unless --inclusive)
        stop: f64,

        /// Distance between indices (may be negative)
        step: f64,

        /// Include stop when it falls on the step grid
        #[arg(short, long)]
        inclusive: bool,
    },

    /// Check whether a value lies on the sampled curve
    #[command(allow_negative_numbers = true)]
    Contains {
        /// Value to look for
        item: f64,
    },

    /// Print the samples and the effective configuration
    Show,
}

impl Cli {
    /// Resolver configuration with command-line overrides applied.
    fn resolver_config(&self, base: ResolverConfig) -> ResolverConfig {
        let mut config = base;
        if let Some(boundary) = self.boundary {
            config.boundary = boundary;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(strategy) = self.write_strategy {
            config.write_strategy = strategy;
        }
        config
    }
}

/// Load, override and validate the configuration.
///
/// Returns the configuration and whether the file existed.
fn load_config(path: &Path) -> Result<(CliConfig, bool)> {
    let (config, from_file) = CliConfig::load_or_default(path)?;
    let config = config.with_env_override()?;
    config.validate()?;
    Ok((config, from_file))
}

fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, from_file) = load_config(&cli.config)?;
    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        config.log_level
    };
    init_tracing(level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    if !from_file && cli.config.as_path() != Path::new(DEFAULT_CONFIG) {
        warn!(
            "Configuration file {} not found, using defaults",
            cli.config.display()
        );
    }

    let resolver = cli.resolver_config(config.resolver);
    debug!("Resolver configuration: {}", resolver);

    let samples = SampleSource {
        inline: cli.samples.as_deref(),
        file: cli.file.as_deref(),
        configured: config.samples.as_deref(),
    }
    .load()?;
    let mut list = FloatList::with_config(samples, resolver);

    let precision = cli.precision.or(config.precision);
    if let Some(digits) = precision.filter(|&d| d > MAX_PRECISION) {
        return Err(CliError::invalid_argument(format!(
            "precision {} exceeds maximum allowed ({})",
            digits, MAX_PRECISION
        )));
    }
    let output = Output { precision };

    match cli.command {
        Commands::Read { index } => commands::read::run(&list, index, output),
        Commands::Write { index, value } => commands::write::run(&mut list, index, value, output),
        Commands::Range {
            start,
            stop,
            step,
            inclusive,
        } => commands::range::run(&list, start, stop, step, inclusive, output),
        Commands::Contains { item } => commands::contains::run(&list, item),
        Commands::Show => commands::show::run(&list, output),
    }
}
