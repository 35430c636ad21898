//! Experiment Runner for the Scalability Analysis.
//!
//! This executable times every orthogonalization method on random `n x m` bases of growing
//! length `n`. The first `left_cols_to_skip` columns are orthonormalized up front, so each
//! run measures the basis extension step of a block Krylov solver: the fixed frame is kept
//! and the remaining block is orthogonalized. Each timing is the best of several repeats
//! on a fresh copy of the same input, and the loss of orthogonality of the result is
//! recorded next to it.

use anyhow::{Context, Result, ensure};
use clap::Parser;
use faer::prelude::*;
use krylov_ortho::{
    Method, algorithms::householder::householder_qr, try_orthogonalize,
    utils::diagnostics::orthogonality_loss,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use std::{path::PathBuf, time::Instant};

/// Command-line arguments for the scalability runner.
#[derive(Parser, Debug)]
#[clap(
    name = "scalability-runner",
    about = "Runs the scalability analysis for the orthogonalization methods."
)]
struct ScalabilityArgs {
    /// Comma-separated list of methods to time. All methods are run when omitted.
    #[clap(long, value_delimiter = ',')]
    methods: Vec<Method>,
    /// The starting number of rows of the basis.
    #[clap(long, default_value_t = 1000)]
    n_start: usize,
    /// The ending number of rows of the basis.
    #[clap(long, default_value_t = 20000)]
    n_end: usize,
    /// The step size for increasing the number of rows.
    #[clap(long, default_value_t = 1000)]
    n_step: usize,
    /// The number of columns of the basis.
    #[clap(long, default_value_t = 64)]
    m: usize,
    /// The number of leading columns kept as the fixed orthonormal frame.
    #[clap(long, default_value_t = 48)]
    left_cols_to_skip: usize,
    /// The number of timed repetitions per configuration; the fastest one is reported.
    #[clap(long, default_value_t = 3)]
    repeats: usize,
    /// Path to the output CSV file for storing the results.
    #[clap(long, value_name = "PATH")]
    output: PathBuf,
}

/// A single row of the output CSV file.
#[derive(Debug, Serialize)]
struct ScalabilityResult {
    method: String,
    n: usize,
    m: usize,
    left_cols_to_skip: usize,
    time_s: f64,
    ortho_loss: f64,
}

/// Creates an `n x m` random basis whose first `l` columns are orthonormal.
fn create_basis(n: usize, m: usize, l: usize, rng: &mut StdRng) -> Mat<f64> {
    let mut basis = Mat::from_fn(n, m, |_, _| rng.random::<f64>() - 0.5);
    if l > 0 {
        householder_qr(basis.as_mut().get_mut(.., 0..l));
    }
    basis
}

/// Rejects configurations that would fail inside the run rather than up front.
fn validate(args: &ScalabilityArgs) -> Result<()> {
    ensure!(args.n_step > 0, "The step size for n must be positive.");
    ensure!(args.repeats > 0, "At least one repetition is required.");
    ensure!(
        args.left_cols_to_skip < args.m,
        "left_cols_to_skip ({}) must be smaller than the number of columns ({}).",
        args.left_cols_to_skip,
        args.m
    );
    ensure!(
        args.m <= args.n_start,
        "The basis must not have more columns ({}) than rows ({}).",
        args.m,
        args.n_start
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .try_init()?;
    let args = ScalabilityArgs::parse();
    validate(&args)?;

    let methods: Vec<Method> = if args.methods.is_empty() {
        Method::ALL.to_vec()
    } else {
        args.methods.clone()
    };
    log::info!("Starting scalability experiment for methods: {methods:?}");

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create CSV writer for {:?}", &args.output))?;
    let mut rng = StdRng::seed_from_u64(42); // For reproducible results.

    for n in (args.n_start..=args.n_end).step_by(args.n_step) {
        log::info!("Processing problem size: n = {n}");
        let original = create_basis(n, args.m, args.left_cols_to_skip, &mut rng);

        for &method in &methods {
            let mut best = f64::INFINITY;
            let mut ortho_loss = 0.0;

            for _ in 0..args.repeats {
                let mut basis = original.clone();
                let start_time = Instant::now();
                try_orthogonalize(basis.as_mut(), args.left_cols_to_skip, method)
                    .with_context(|| format!("{method} failed for n = {n}"))?;
                best = best.min(start_time.elapsed().as_secs_f64());
                ortho_loss = orthogonality_loss(basis.as_ref());
            }

            log::info!("{method}: n={n}, time={best:.4}s, loss={ortho_loss:.2e}");
            // Written and flushed per record so partial results survive an aborted run.
            writer.serialize(ScalabilityResult {
                method: method.to_string(),
                n,
                m: args.m,
                left_cols_to_skip: args.left_cols_to_skip,
                time_s: best,
                ortho_loss,
            })?;
            writer.flush()?;
        }
    }

    log::info!(
        "Scalability experiment complete. Results saved to {:?}.",
        &args.output
    );
    Ok(())
}
