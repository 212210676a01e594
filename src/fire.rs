//! Fast Inertial Relaxation Engine
//!
//! FIRE relaxes a point to a local minimum by integrating damped
//! Newtonian dynamics on the force field F = -∇f. The velocity is steered
//! toward the force direction and the timestep grows while the motion is
//! downhill. Whenever the dissipated power F·V turns non-positive the
//! system is stopped and restarted with a smaller timestep.
//!
//! References:
//! - Bitzek, E., Koskinen, P., Gähler, F., Moseler, M., & Gumbsch, P.
//!   (2006). Structural relaxation made simple. Physical Review Letters,
//!   97(17).
//! - Guénolé, J., Nöhring, W. G., Vaid, A., Houllé, F., Xie, Z., Prakash,
//!   A., & Bitzek, E. (2020). Assessment and optimization of the fast
//!   inertial relaxation engine (FIRE) for energy minimization in
//!   atomistic simulations and its implementation in LAMMPS.
//!   Computational Materials Science, 175.
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use log::{debug, info};
use nalgebra::DVector;

use crate::error::{FireError, Result};
use crate::objective::Objective;
use crate::observer::{IterationState, NoObserver, Observer, Step};
use crate::params::FireParams;

/// How a non-dissipative step is handled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum Variant {
    /// Original FIRE: decelerate and zero the velocity.
    Fire1,
    /// FIRE 2.0: zero the velocity after undoing half of the last step,
    /// leave the timestep alone during the initial delay, and give up
    /// after `n_neg_max` consecutive uphill steps.
    Fire2,
}

/// Why a run stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum Termination {
    /// The largest force component fell below `atol`
    Converged,
    /// `n_max` iterations passed without convergence
    Exhausted,
    /// FIRE2 saw more than `n_neg_max` consecutive uphill steps
    Stalled,
}

/// Outcome of a FIRE run
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct FireResult {
    /// Final point
    pub x: DVector<f64>,
    /// Objective value at `x`
    pub fx: f64,
    /// Largest absolute force component at `x`
    pub error: f64,
    /// 0-based index of the iteration the run stopped in
    pub iterations: usize,
    /// Number of gradient evaluations
    pub grad_evals: usize,
    pub termination: Termination,
}

impl FireResult {
    #[inline]
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Minimize `f` from `x0` with the original FIRE algorithm.
///
/// `df` returns the gradient of `f`; `params` is handed to both untouched.
///
/// # Example
///
/// ```
/// use fire::{fire1, FireParams};
/// use nalgebra::DVector;
///
/// // (x - 1)² + (y + 2)²
/// let f = |x: &DVector<f64>, _: &()| (x[0] - 1.0).powi(2) + (x[1] + 2.0).powi(2);
/// let df = |x: &DVector<f64>, _: &()| {
///     DVector::from_column_slice(&[2.0 * (x[0] - 1.0), 2.0 * (x[1] + 2.0)])
/// };
///
/// let x0 = DVector::zeros(2);
/// let res = fire1(&x0, &(), f, df, &FireParams::default().with_atol(1E-8)).unwrap();
///
/// assert!(res.converged());
/// assert!((res.x[0] - 1.0).abs() < 1E-8);
/// assert!((res.x[1] + 2.0).abs() < 1E-8);
/// ```
pub fn fire1<P, F, G>(
    x0: &DVector<f64>,
    params: &P,
    f: F,
    df: G,
    fire_params: &FireParams,
) -> Result<FireResult>
where
    P: ?Sized,
    F: Fn(&DVector<f64>, &P) -> f64,
    G: Fn(&DVector<f64>, &P) -> DVector<f64>,
{
    minimize(Variant::Fire1, x0, params, f, df, fire_params)
}

/// Minimize `f` from `x0` with FIRE 2.0.
///
/// See [`fire1`] for the meaning of the arguments.
pub fn fire2<P, F, G>(
    x0: &DVector<f64>,
    params: &P,
    f: F,
    df: G,
    fire_params: &FireParams,
) -> Result<FireResult>
where
    P: ?Sized,
    F: Fn(&DVector<f64>, &P) -> f64,
    G: Fn(&DVector<f64>, &P) -> DVector<f64>,
{
    minimize(Variant::Fire2, x0, params, f, df, fire_params)
}

/// Minimize `f` from `x0` with the given FIRE variant
pub fn minimize<P, F, G>(
    variant: Variant,
    x0: &DVector<f64>,
    params: &P,
    f: F,
    df: G,
    fire_params: &FireParams,
) -> Result<FireResult>
where
    P: ?Sized,
    F: Fn(&DVector<f64>, &P) -> f64,
    G: Fn(&DVector<f64>, &P) -> DVector<f64>,
{
    minimize_with_observer(variant, x0, params, f, df, fire_params, &mut NoObserver)
}

/// Minimize an [`Objective`] from `x0` with the given FIRE variant
///
/// # Example
///
/// ```
/// use fire::functions::{Rosenbrock, RosenbrockParams};
/// use fire::{minimize_objective, FireParams, Variant};
/// use nalgebra::DVector;
///
/// let res = minimize_objective(
///     Variant::Fire2,
///     &Rosenbrock,
///     &DVector::from_column_slice(&[3.0, 4.0]),
///     &RosenbrockParams::default(),
///     &FireParams::default().with_atol(1E-6),
/// )
/// .unwrap();
///
/// assert!(res.converged());
/// assert!(res.x.relative_eq(&DVector::from_element(2, 1.0), 1E-5, 1E-5));
/// ```
pub fn minimize_objective<O>(
    variant: Variant,
    objective: &O,
    x0: &DVector<f64>,
    params: &O::Params,
    fire_params: &FireParams,
) -> Result<FireResult>
where
    O: Objective + ?Sized,
{
    minimize(
        variant,
        x0,
        params,
        |x, p| objective.value(x, p),
        |x, p| objective.gradient(x, p),
        fire_params,
    )
}

/// Evaluate the force, -∇f, rejecting malformed gradients
fn eval_force<P, G>(
    df: &G,
    x: &DVector<f64>,
    params: &P,
    iteration: usize,
) -> Result<DVector<f64>>
where
    P: ?Sized,
    G: Fn(&DVector<f64>, &P) -> DVector<f64>,
{
    let grad = df(x, params);
    if grad.len() != x.len() {
        Err(FireError::GradientDimensionMismatch {
            expected: x.len(),
            got: grad.len(),
            iteration,
        })
    } else if grad.iter().any(|g| !g.is_finite()) {
        Err(FireError::NonFiniteForce { iteration })
    } else {
        Ok(-grad)
    }
}

fn validate_initial_point(x0: &DVector<f64>) -> Result<()> {
    if x0.is_empty() {
        return Err(FireError::EmptyInitialPoint);
    }
    match x0.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        Some((index, &value)) => {
            Err(FireError::NonFiniteInitialPoint { index, value })
        }
        None => Ok(()),
    }
}

/// Minimize `f` from `x0`, reporting every completed iteration to
/// `observer`.
///
/// When the stall escape of FIRE2 fires, the interrupted iteration is not
/// reported.
pub fn minimize_with_observer<P, F, G, O>(
    variant: Variant,
    x0: &DVector<f64>,
    params: &P,
    f: F,
    df: G,
    fire_params: &FireParams,
    observer: &mut O,
) -> Result<FireResult>
where
    P: ?Sized,
    F: Fn(&DVector<f64>, &P) -> f64,
    G: Fn(&DVector<f64>, &P) -> DVector<f64>,
    O: Observer + ?Sized,
{
    fire_params.validate()?;
    validate_initial_point(x0)?;

    let dt_max = fire_params.dt_max();
    let dt_min = fire_params.dt_min();
    let mut dt = fire_params.dt;
    let mut alpha = fire_params.alpha0;
    let mut n_pos: usize = 0;
    let mut n_neg: usize = 0;

    let mut x = x0.clone();
    let mut v: DVector<f64> = DVector::zeros(x.len());
    let mut force = eval_force(&df, &x, params, 0)?;
    let mut grad_evals = 1;
    let mut error = force.amax();

    // An exactly stationary start has no direction to mix toward.
    if error == 0.0 {
        debug!("fire ({:?}): initial point is stationary", variant);
        return Ok(FireResult {
            fx: f(&x, params),
            x,
            error,
            iterations: 0,
            grad_evals,
            termination: Termination::Converged,
        });
    }

    let mut iterations = 0;
    let mut termination = Termination::Exhausted;

    for i in 0..fire_params.n_max {
        iterations = i;
        let power = force.dot(&v);

        let step = if power > 0.0 {
            n_pos += 1;
            n_neg = 0;
            if n_pos > fire_params.n_delay {
                dt = (dt * fire_params.f_inc).min(dt_max);
                alpha *= fire_params.f_alpha;
                Step::Accelerate
            } else {
                Step::Coast
            }
        } else {
            n_pos = 0;
            match variant {
                Variant::Fire1 => {
                    dt = (dt * fire_params.f_dec).max(dt_min);
                    alpha = fire_params.alpha0;
                    v.fill(0.0);
                    debug!("fire1: i = {}, P = {}, reset with dt = {}", i, power, dt);
                    Step::Reset
                }
                Variant::Fire2 => {
                    n_neg += 1;
                    if n_neg > fire_params.n_neg_max {
                        debug!("fire2: i = {}, {} consecutive uphill steps", i, n_neg);
                        termination = Termination::Stalled;
                        break;
                    }
                    if i > fire_params.n_delay {
                        dt = (dt * fire_params.f_dec).max(dt_min);
                        alpha = fire_params.alpha0;
                    }
                    x.axpy(-0.5 * dt, &v, 1.0);
                    v.fill(0.0);
                    debug!("fire2: i = {}, P = {}, backtrack with dt = {}", i, power, dt);
                    Step::Backtrack
                }
            }
        };

        // velocity Verlet half kick, then steer toward the force
        v.axpy(0.5 * dt, &force, 1.0);
        // error > 0 here, so |F| > 0
        let scale = alpha * v.norm() / force.norm();
        v.axpy(scale, &force, 1.0 - alpha);
        x.axpy(dt, &v, 1.0);

        force = eval_force(&df, &x, params, i)?;
        grad_evals += 1;
        v.axpy(0.5 * dt, &force, 1.0);
        error = force.amax();

        observer.observe(&IterationState {
            iteration: i,
            x: &x,
            velocity: &v,
            force: &force,
            power,
            step,
            dt,
            alpha,
            n_pos,
            n_neg,
            error,
        });

        if error < fire_params.atol {
            termination = Termination::Converged;
            break;
        }

        if fire_params.log_progress {
            info!("fire: i = {}, f = {}, error = {}", i, f(&x, params), error);
        }
    }

    let fx = f(&x, params);
    debug!(
        "fire ({:?}): {:?} after {} iterations, f = {}, error = {}",
        variant, termination, iterations, fx, error
    );

    Ok(FireResult {
        x,
        fx,
        error,
        iterations,
        grad_evals,
        termination,
    })
}
