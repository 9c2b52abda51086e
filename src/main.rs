use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use sumsq::config::VerifyConfig;
use sumsq::squares::{self, Method};
use sumsq::verify;
use tracing::{debug, error, trace};

/// Sum the squares of the first ten integers and check the answer
#[derive(Parser)]
#[command(name = "sumsq")]
#[command(about = "Sum of squares of the first ten positive integers", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify the computed sum against its expected value (default command)
    Verify {
        /// Path to a TOML configuration file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compute the sum of squares for an arbitrary upper bound
    Compute {
        /// Upper bound of the range 1..=N
        #[arg(short = 'n', long, default_value = "10")]
        upper_bound: u64,

        /// Evaluation method
        #[arg(short, long, value_enum, default_value = "iterative")]
        method: Method,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2)
        .with_thread_ids(cli.verbose >= 3)
        .with_line_number(cli.verbose >= 3)
        .init();

    debug!("sumsq started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let result = match cli.command {
        Some(Commands::Verify { config, json }) => run_verify(config, json),
        Some(Commands::Compute {
            upper_bound,
            method,
            json,
        }) => run_compute(upper_bound, method, json),
        // Default to verify with the built-in configuration
        None => run_verify(None, false),
    };

    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run_verify(config: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let config = match config {
        Some(path) => VerifyConfig::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => VerifyConfig::default(),
    };

    let report = verify::verify(&config).context("Verification failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in report.lines() {
            println!("{line}");
        }
    }
    Ok(())
}

fn run_compute(upper_bound: u64, method: Method, json: bool) -> anyhow::Result<()> {
    let computation = squares::compute(upper_bound, method)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&computation)?);
    } else {
        println!(
            "The sum of squares of the first {} integers is: {}",
            computation.upper_bound, computation.sum
        );
    }
    Ok(())
}
