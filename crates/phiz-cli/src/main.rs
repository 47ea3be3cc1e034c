//! phiz CLI - deterministic 32-bit sample streams.
//!
//! - `phiz u32` - raw output words
//! - `phiz float` - samples in [0, 1)
//! - `phiz range` - integers in [min, max)
//! - `phiz vector` - golden vector as JSON
//! - `phiz check` - chi-square uniformity smoke check
//! - `phiz config` - print the effective configuration

mod config;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use config::{CheckConfig, OutputFormat, PhizConfig, SeedSpec};
use phiz::{chi_square_u32, DeterministicRng, PhiZ};

#[derive(Parser)]
#[command(name = "phiz")]
#[command(about = "Deterministic 32-bit pseudo-random sample streams", version)]
struct Cli {
    /// Project root directory (reads .phiz/config.yaml)
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    /// Explicit config file, overrides the project lookup
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed, decimal or 0x-prefixed hex
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    seed: Option<String>,

    /// Number of values to emit
    #[arg(short = 'n', long, global = true)]
    count: Option<usize>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit raw 32-bit output words
    U32,

    /// Emit floats in [0, 1)
    Float,

    /// Emit integers in [min, max)
    Range {
        #[arg(long, allow_negative_numbers = true)]
        min: i32,

        #[arg(long, allow_negative_numbers = true)]
        max: i32,

        /// Reproduce the reference truncation toward zero
        #[arg(long)]
        truncating: bool,
    },

    /// Emit a golden vector (seed, outputs, final state) as JSON
    Vector,

    /// Run the chi-square uniformity smoke check
    Check {
        #[arg(long)]
        buckets: Option<usize>,

        #[arg(long)]
        samples: Option<usize>,
    },

    /// Print the effective configuration as YAML
    Config,
}

#[derive(Serialize)]
struct GoldenVector {
    seed: u32,
    seed_hex: String,
    outputs: Vec<u32>,
    outputs_hex: Vec<String>,
    final_state: PhiZ,
}

#[derive(Serialize)]
struct CheckReport {
    seed: u32,
    samples: u64,
    buckets: usize,
    degrees_of_freedom: usize,
    statistic: f64,
    critical_value: f64,
    z: f64,
    passed: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for samples
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = resolve_config(&cli)?;
    let seed = config.seed()?;
    tracing::debug!(
        seed,
        count = config.count,
        format = %config.format,
        "Resolved config"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command.unwrap_or(Commands::U32) {
        Commands::U32 => emit_u32(&mut out, seed, &config)?,
        Commands::Float => emit_float(&mut out, seed, &config)?,
        Commands::Range {
            min,
            max,
            truncating,
        } => emit_range(&mut out, seed, &config, min, max, truncating)?,
        Commands::Vector => emit_vector(&mut out, seed, &config)?,
        Commands::Check { buckets, samples } => {
            let mut check = config.check.clone();
            check.buckets = buckets.unwrap_or(check.buckets);
            check.samples = samples.unwrap_or(check.samples);
            run_check(&mut out, seed, &config, &check)?
        }
        Commands::Config => {
            let yaml = serde_yaml::to_string(&config).context("Failed to render config")?;
            out.write_all(yaml.as_bytes())?;
        }
    }

    out.flush()?;
    Ok(())
}

/// File config first, then command line overrides.
fn resolve_config(cli: &Cli) -> Result<PhizConfig> {
    let mut config = match (&cli.config, &cli.project) {
        (Some(path), _) => PhizConfig::load(path)?,
        (None, Some(root)) => PhizConfig::load_from_project(root)?,
        (None, None) => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            PhizConfig::load_from_project(&cwd)?
        }
    };

    if let Some(seed) = &cli.seed {
        config.seed = SeedSpec::Text(seed.clone());
    }
    if let Some(count) = cli.count {
        config.count = count;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    config.validate()?;
    Ok(config)
}

fn emit_u32(out: &mut impl Write, seed: u32, config: &PhizConfig) -> Result<()> {
    let mut rng = PhiZ::new(seed);
    let values: Vec<u32> = (0..config.count).map(|_| rng.next_u32()).collect();
    match config.format {
        OutputFormat::Dec => write_lines(out, values.iter().map(|v| v.to_string())),
        OutputFormat::Hex => write_lines(out, values.iter().map(|v| format!("{v:#010x}"))),
        OutputFormat::Json => write_json(out, &values),
    }
}

fn emit_float(out: &mut impl Write, seed: u32, config: &PhizConfig) -> Result<()> {
    let mut rng = PhiZ::new(seed);
    let values: Vec<f64> = (0..config.count).map(|_| rng.next_unit_f64()).collect();
    match config.format {
        OutputFormat::Dec => write_lines(out, values.iter().map(|v| v.to_string())),
        // Bit pattern, for byte-exact comparison across implementations.
        OutputFormat::Hex => write_lines(
            out,
            values.iter().map(|v| format!("{:#018x}", v.to_bits())),
        ),
        OutputFormat::Json => write_json(out, &values),
    }
}

fn emit_range(
    out: &mut impl Write,
    seed: u32,
    config: &PhizConfig,
    min: i32,
    max: i32,
    truncating: bool,
) -> Result<()> {
    if max <= min {
        tracing::warn!(min, max, "Empty range, every draw yields min");
    }

    let mut rng = PhiZ::new(seed);
    let values: Vec<i32> = (0..config.count)
        .map(|_| {
            if truncating {
                rng.next_in_range_truncating(min, max)
            } else {
                rng.next_in_range(min, max)
            }
        })
        .collect();
    match config.format {
        OutputFormat::Dec => write_lines(out, values.iter().map(|v| v.to_string())),
        OutputFormat::Hex => write_lines(out, values.iter().map(|v| format!("{v:#010x}"))),
        OutputFormat::Json => write_json(out, &values),
    }
}

fn emit_vector(out: &mut impl Write, seed: u32, config: &PhizConfig) -> Result<()> {
    let mut rng = PhiZ::new(seed);
    let outputs: Vec<u32> = (0..config.count).map(|_| rng.next_u32()).collect();
    let vector = GoldenVector {
        seed,
        seed_hex: format!("{seed:#010x}"),
        outputs_hex: outputs.iter().map(|v| format!("{v:#010x}")).collect(),
        outputs,
        final_state: rng,
    };
    let json = serde_json::to_string_pretty(&vector)?;
    writeln!(out, "{json}")?;
    Ok(())
}

fn run_check(
    out: &mut impl Write,
    seed: u32,
    config: &PhizConfig,
    check: &CheckConfig,
) -> Result<()> {
    tracing::info!(
        seed,
        samples = check.samples,
        buckets = check.buckets,
        "Running uniformity check"
    );

    let mut rng = PhiZ::new(seed);
    let result = chi_square_u32((0..check.samples).map(|_| rng.next_u32()), check.buckets)
        .context("Chi-square check could not run")?;

    let report = CheckReport {
        seed,
        samples: result.samples,
        buckets: result.buckets,
        degrees_of_freedom: result.degrees_of_freedom,
        statistic: result.statistic,
        critical_value: result.critical_value(check.z),
        z: check.z,
        passed: result.passes(check.z),
    };

    match config.format {
        OutputFormat::Json => write_json(out, &report)?,
        OutputFormat::Dec | OutputFormat::Hex => {
            writeln!(
                out,
                "chi2 = {:.3} (dof {}, critical {:.3} at z = {}) over {} samples: {}",
                report.statistic,
                report.degrees_of_freedom,
                report.critical_value,
                report.z,
                report.samples,
                if report.passed { "PASS" } else { "FAIL" }
            )?;
        }
    }

    anyhow::ensure!(
        report.passed,
        "Uniformity rejected: chi2 {:.3} exceeds {:.3}",
        report.statistic,
        report.critical_value
    );
    Ok(())
}

fn write_lines(out: &mut impl Write, lines: impl Iterator<Item = String>) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
