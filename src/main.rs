//! Benchmark runner: multiplies two 1000×1000 matrices at each thread count.

use matmul_sweep::matrix::random::generate;
use matmul_sweep::{BenchConfig, Result, run_sweep};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&BenchConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &BenchConfig) -> Result<()> {
    println!("Creating matrices A and B...");
    let a = generate(config.n, config.m)?;
    let b = generate(config.m, config.p)?;

    println!(
        "Multiplying matrices with {} thread configurations...",
        config.thread_counts.len()
    );
    let results = run_sweep(&a, &b, config, |point| println!("{}", point))?;

    println!("Deleting matrices...");
    drop(results);
    drop(b);
    drop(a);

    Ok(())
}
