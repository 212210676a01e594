//! Relax the Rosenbrock and Eggholder functions with both FIRE variants.
//!
//! Run with `RUST_LOG=info` to see the per-iteration progress, or
//! `RUST_LOG=debug` for every velocity reset.
use fire::functions::{Eggholder, Rosenbrock, RosenbrockParams};
use fire::{minimize_objective, FireParams, FireResult, Objective, Variant};
use nalgebra::DVector;

fn report(variant: Variant, res: &FireResult) {
    println!("{:?}", variant);
    println!("  xmin       = {}", res.x.transpose());
    println!("  fmin       = {}", res.fx);
    println!("  iterations = {}", res.iterations);
    println!("  status     = {:?}", res.termination);
}

fn relax<O: Objective>(
    name: &str,
    objective: &O,
    x0: &DVector<f64>,
    params: &O::Params,
    fire_params: &FireParams,
) {
    println!("========= Optimizing the {} function =========", name);
    for variant in [Variant::Fire1, Variant::Fire2] {
        match minimize_objective(variant, objective, x0, params, fire_params) {
            Ok(res) => report(variant, &res),
            Err(err) => println!("{:?} failed: {}", variant, err),
        }
    }
}

pub fn main() {
    env_logger::builder().init();

    let log_progress = std::env::args().any(|arg| arg == "--log");

    // minimum at (1, 1), f = 0
    relax(
        "Rosenbrock",
        &Rosenbrock,
        &DVector::from_column_slice(&[3.0, 4.0]),
        &RosenbrockParams::default(),
        &FireParams::default()
            .with_atol(1E-6)
            .with_log_progress(log_progress),
    );

    // global minimum near (512, 404.2319), f = -959.6407
    relax(
        "Eggholder",
        &Eggholder,
        &DVector::from_column_slice(&[0.0, 0.0]),
        &47.0,
        &FireParams::default()
            .with_atol(1E-6)
            .with_dt(0.1)
            .with_log_progress(log_progress),
    );
}
