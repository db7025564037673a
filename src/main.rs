use std::hint::black_box;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use levdist::distance_in;

mod cli;
use cli::display::{self, label, row, section_bot, section_top, timing_us};
use cli::report::Report;
use cli::{Cli, Commands, DistanceOptions};

/// Exit status when the engine rejects the input.
const EXIT_INVALID_INPUT: i32 = 1;
/// Exit status for everything else that goes wrong (I/O, serialization).
const EXIT_FAILURE: i32 = 2;

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Compare {
            first,
            second,
            options,
            json,
        } => run_compare(first.as_deref(), second.as_deref(), options, json),
        Commands::Bench {
            first,
            second,
            options,
            runs,
        } => run_bench(&first, &second, options, runs).map(|()| 0),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(EXIT_FAILURE);
        }
    }
}

/// Logs go to stderr; `LEVDIST_LOG` takes an `EnvFilter` directive.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("LEVDIST_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();
}

/// Compute one distance and print it, or print why it couldn't be computed.
///
/// Returns the process exit status.
fn run_compare(
    first: Option<&str>,
    second: Option<&str>,
    options: DistanceOptions,
    json: bool,
) -> Result<i32> {
    debug!(
        first_len = first.map(|s| options.units.count(s)),
        second_len = second.map(|s| options.units.count(s)),
        max = ?options.max,
        units = %options.units,
        "comparing"
    );

    let outcome = distance_in(options.units, first, second, options.max);
    match &outcome {
        Ok(distance) => debug!(distance, "computed"),
        Err(err) => warn!(operand = %err.operand(), "rejected input: {}", err),
    }

    let report = Report::new(first, second, options, outcome);
    if json {
        println!("{}", report.to_json().context("Failed to serialize report")?);
    } else if report.is_failure() {
        eprintln!("{}", report.render_text());
    } else {
        println!("{}", report.render_text());
    }

    Ok(if report.is_failure() {
        EXIT_INVALID_INPUT
    } else {
        0
    })
}

/// Time `runs` computations of the same pair and print the mean.
///
/// One untimed call runs first so the allocator and caches are warm.
fn run_bench(first: &str, second: &str, options: DistanceOptions, runs: u32) -> Result<()> {
    let call = || {
        distance_in(
            options.units,
            Some(black_box(first)),
            Some(black_box(second)),
            options.max,
        )
    };

    let distance = call().context("Warm-up run failed")?;

    let mut total = Duration::ZERO;
    let mut fastest = Duration::MAX;
    for _ in 0..runs {
        let start = Instant::now();
        black_box(call().context("Timed run failed")?);
        let elapsed = start.elapsed();
        total += elapsed;
        fastest = fastest.min(elapsed);
    }

    let mean = total / runs;
    info!(
        runs,
        mean_ns = mean.as_nanos() as u64,
        fastest_ns = fastest.as_nanos() as u64,
        "benchmark finished"
    );

    let exceeded = options.max.filter(|&max| distance > max);
    let bound = options
        .max
        .map_or_else(|| "none".to_string(), |max| max.to_string());

    println!("{}", section_top("BENCH"));
    println!("{}", row(&format!(" {} {}", label("units     "), options.units)));
    println!("{}", row(&format!(" {} {}", label("max       "), bound)));
    println!("{}", row(&format!(" {} {}", label("runs      "), runs)));
    println!(
        "{}",
        row(&format!(
            " {} {}",
            label("distance  "),
            display::distance_value(distance, exceeded)
        ))
    );
    println!(
        "{}",
        row(&format!(" {} {} µs", label("mean      "), timing_us(micros(mean))))
    );
    println!(
        "{}",
        row(&format!(" {} {} µs", label("fastest   "), timing_us(micros(fastest))))
    );
    println!(
        "{}",
        row(&format!(" {} {:.9} s", label("seconds   "), mean.as_secs_f64()))
    );
    println!("{}", section_bot());

    Ok(())
}

fn micros(d: Duration) -> f64 {
    d.as_secs_f64() * 1_000_000.0
}
