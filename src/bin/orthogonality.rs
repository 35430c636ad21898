//! Experiment Runner for Orthogonality Analysis.
//!
//! This executable measures the loss of orthogonality of Krylov bases generated with each
//! orthogonalization method. For every basis dimension `k` in the requested range, the
//! basis of `K_k(A, b)` is built with [`krylov_basis`] and `||I - V_k^H V_k||_F` is
//! recorded. The operator is diagonal with a controlled spectrum, so the scenario decides
//! how quickly the Krylov vectors become nearly parallel.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use faer::prelude::*;
use krylov_ortho::{Method, krylov_basis, utils::diagnostics::orthogonality_loss};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use std::path::PathBuf;

/// Defines the spectral properties of the test matrix A.
#[derive(ValueEnum, Clone, Debug, Copy)]
enum ProblemScenario {
    /// Eigenvalues evenly spread over `[0.1, 100]`.
    WellConditioned,
    /// Eigenvalues spread over `[1e-8, 1e4]` on a logarithmic scale, so the dominant
    /// eigenvectors take over the Krylov sequence after a few steps.
    IllConditioned,
}

/// Command-line arguments for the orthogonality analysis runner.
#[derive(Parser, Debug)]
#[clap(
    name = "orthogonality-runner",
    about = "Runs an analysis of the loss of orthogonality of Krylov bases per orthogonalization method."
)]
struct OrthoArgs {
    /// The spectral scenario for the test problem.
    #[clap(long, value_enum)]
    scenario: ProblemScenario,
    /// Comma-separated list of methods to compare. All methods are run when omitted.
    #[clap(long, value_delimiter = ',')]
    methods: Vec<Method>,
    /// Dimension of the test matrix.
    #[clap(long, default_value_t = 1000)]
    n: usize,
    /// Minimum basis dimension (k) to test.
    #[clap(long, default_value_t = 10)]
    k_min: usize,
    /// Maximum basis dimension (k) to test.
    #[clap(long, default_value_t = 200)]
    k_max: usize,
    /// Step size for iterating k.
    #[clap(long, default_value_t = 10)]
    k_step: usize,
    /// Path to the output CSV file where results will be written.
    #[clap(long, value_name = "PATH")]
    output: PathBuf,
}

/// A single row of the output CSV file.
#[derive(Debug, Serialize)]
struct OrthogonalityResult {
    method: String,
    /// The requested basis dimension.
    k: usize,
    /// The number of basis vectors actually generated before a breakdown.
    steps: usize,
    /// Loss of orthogonality `||I - V_k^H V_k||_F`.
    ortho_loss: f64,
}

/// Creates the diagonal of the test operator for the given scenario.
fn create_spectrum(n: usize, scenario: ProblemScenario) -> Vec<f64> {
    let last = (n - 1).max(1) as f64;
    match scenario {
        ProblemScenario::WellConditioned => {
            (0..n).map(|i| 0.1 + (99.9 / last) * i as f64).collect()
        }
        ProblemScenario::IllConditioned => {
            (0..n).map(|i| 10f64.powf(-8.0 + (12.0 / last) * i as f64)).collect()
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .try_init()?;
    let args = OrthoArgs::parse();
    anyhow::ensure!(args.n > 0, "The matrix dimension must be positive.");
    anyhow::ensure!(args.k_step > 0, "The step size for k must be positive.");

    let methods: Vec<Method> = if args.methods.is_empty() {
        Method::ALL
            .into_iter()
            .filter(|&method| method != Method::HouseholderQr)
            .collect()
    } else {
        args.methods.clone()
    };
    log::info!(
        "Starting orthogonality analysis for scenario: {:?}, methods: {:?}",
        args.scenario,
        methods
    );

    let eigs = create_spectrum(args.n, args.scenario);
    let a = Mat::from_fn(args.n, args.n, |i, j| if i == j { eigs[i] } else { 0.0 });
    let mut rng = StdRng::seed_from_u64(42); // For reproducible results.
    let b = Mat::from_fn(args.n, 1, |_, _| rng.random::<f64>());

    let mut writer = csv::Writer::from_path(&args.output)?;

    for &method in &methods {
        for k in (args.k_min..=args.k_max.min(args.n)).step_by(args.k_step) {
            if k == 0 {
                continue;
            }
            log::info!("Running {method} for k = {k}...");

            let output = krylov_basis(&a, b.as_ref(), k, method)?;
            if output.steps_taken < k {
                log::warn!(
                    "{method}: the Krylov subspace became invariant after {} steps.",
                    output.steps_taken
                );
            }

            writer.serialize(OrthogonalityResult {
                method: method.to_string(),
                k,
                steps: output.steps_taken,
                ortho_loss: orthogonality_loss(output.basis.as_ref()),
            })?;
        }
    }

    writer.flush()?;
    log::info!(
        "Orthogonality analysis complete. Results saved to {:?}.",
        &args.output
    );
    Ok(())
}
