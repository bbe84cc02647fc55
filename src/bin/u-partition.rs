//! u-partition - split a set of planets into two balanced groups
//!
//! Reads entity records from CSV, enumerates every two-way split, and
//! prints the best-scoring ones.
//!
//! ## Usage
//! ```bash
//! # Top 5 splits with default thresholds and weights
//! u-partition planets.csv
//!
//! # Top 10, looser primary threshold, balance-only scoring
//! u-partition planets.csv -n 10 --max-primary-diff 15 --attribute-only
//!
//! # Settings from a TOML file; flags still override
//! u-partition planets.csv --config split.toml --parallel -v
//! ```
//!
//! ## Config file
//! ```toml
//! [search]
//! top_n = 5
//! min_group_size = 2
//! parallel = true
//!
//! [search.thresholds]
//! max_primary_diff = 10
//! max_secondary_diff = 2
//! max_tertiary_diff = 2
//!
//! [search.weights]
//! attribute = 1000.0
//! first_dispersion = 10.0
//! second_dispersion = 10.0
//! size_balance = 1.0
//!
//! [input]
//! skip_columns = 1
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};
use u_partition::io::{load_entities, render_report, RecordLayout};
use u_partition::search::{PartitionConfig, PartitionRunner, ScoreWeights};

/// Split a set of planets into two balanced groups.
#[derive(Parser, Debug)]
#[command(name = "u-partition")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV file of entity records (header row first)
    input: PathBuf,

    /// TOML configuration file (command-line flags take precedence)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of splits to report
    #[arg(short = 'n', long = "top")]
    top: Option<usize>,

    /// Primary attribute difference must stay below this
    #[arg(long)]
    max_primary_diff: Option<i64>,

    /// Secondary attribute difference must stay below this
    #[arg(long)]
    max_secondary_diff: Option<i64>,

    /// Tertiary attribute difference must stay below this
    #[arg(long)]
    max_tertiary_diff: Option<i64>,

    /// Smallest group size on either side
    #[arg(long)]
    min_group_size: Option<usize>,

    /// Score attribute balance only (no spatial or size terms)
    #[arg(long, action = ArgAction::SetTrue)]
    attribute_only: bool,

    /// Leading CSV columns to ignore before the name
    #[arg(long)]
    skip_columns: Option<usize>,

    /// Score enumeration shards in parallel
    #[arg(long, action = ArgAction::SetTrue)]
    parallel: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    search: PartitionConfig,
    input: RecordLayout,
}

impl FileConfig {
    fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config '{}'", path.display()))?;
        toml::from_str(&text).with_context(|| format!("invalid config '{}'", path.display()))
    }

    /// Applies command-line overrides.
    fn apply(mut self, args: &Args) -> Self {
        let search = &mut self.search;
        if let Some(n) = args.top {
            search.top_n = n;
        }
        if let Some(v) = args.max_primary_diff {
            search.thresholds.max_primary_diff = v;
        }
        if let Some(v) = args.max_secondary_diff {
            search.thresholds.max_secondary_diff = v;
        }
        if let Some(v) = args.max_tertiary_diff {
            search.thresholds.max_tertiary_diff = v;
        }
        if let Some(n) = args.min_group_size {
            search.min_group_size = n;
        }
        if args.attribute_only {
            search.weights = ScoreWeights {
                attribute: search.weights.attribute,
                primary_scale: search.weights.primary_scale,
                ..ScoreWeights::attribute_only()
            };
        }
        if args.parallel {
            search.parallel = true;
        }
        if let Some(n) = args.skip_columns {
            self.input.skip_columns = n;
        }
        self
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let file_config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let settings = file_config.apply(&args);
    debug!(?settings, "resolved configuration");

    let entities = load_entities(&args.input, &settings.input)
        .with_context(|| format!("failed to load '{}'", args.input.display()))?;
    let result = PartitionRunner::run(&entities, &settings.search)?;

    print!("{}", render_report(&result, &entities));
    Ok(())
}
