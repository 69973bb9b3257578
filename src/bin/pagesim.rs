//! Page replacement simulator CLI.
//!
//! Replays a reference string under FIFO, LRU, or both, and prints:
//! 1. **text:** one trace line per reference, then a stats summary.
//! 2. **json:** the full simulation result(s).
//! 3. **csv:** the `policy,step,fault_count` series for plotting.

use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use pagesim::{
    compare, parse_references, simulate, Policy, SimulationResult, DEFAULT_NUM_FRAMES,
    SAMPLE_REFERENCES,
};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Replay a page reference string under FIFO or LRU replacement",
    long_about = "Replay a page reference string under FIFO or LRU replacement.\n\nReferences may be separated by spaces and/or commas. With no references the classic sample string 7,0,1,2,0,3,0,4,2,3,0,3,2 is used.\n\nExamples:\n  pagesim\n  pagesim --policy lru 1 2 3 4 1 2 5\n  pagesim --frames 4 --policy all --format csv 1,2,3,4,1,2,5,1,2,3,4,5"
)]
struct Cli {
    /// Number of frames (resident page capacity).
    #[arg(short, long, default_value_t = DEFAULT_NUM_FRAMES)]
    frames: usize,

    /// Eviction policy: fifo, lru, or all.
    #[arg(short, long, default_value = "fifo")]
    policy: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Page references.
    references: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
    Csv,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let references = if cli.references.is_empty() {
        SAMPLE_REFERENCES.to_vec()
    } else {
        parse_references(&cli.references.join(" "))?
    };

    let results = if cli.policy.trim().eq_ignore_ascii_case("all") {
        compare(&references, cli.frames, &Policy::ALL)?
    } else {
        let policy: Policy = cli.policy.parse()?;
        vec![simulate(&references, cli.frames, policy)?]
    };

    match cli.format {
        Format::Text => print_text(&results),
        Format::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        Format::Csv => print_csv(&results),
    }

    Ok(())
}

fn print_text(results: &[SimulationResult<u32>]) {
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} with {} frames", result.policy, result.num_frames);
        for step in &result.steps {
            println!("{}", step);
        }
        println!("{}", result.stats());
    }
}

fn print_csv(results: &[SimulationResult<u32>]) {
    println!("policy,step,fault_count");
    for result in results {
        for (step, fault_count) in result.fault_series() {
            println!("{},{},{}", result.policy, step, fault_count);
        }
    }
}
