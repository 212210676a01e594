//! Fast Inertial Relaxation Engine (FIRE)
//!
//! FIRE finds a local minimum of a scalar function from its gradient alone
//! by running damped, adaptive-timestep molecular dynamics on the force
//! field F = -∇f. Two variants are provided: the original algorithm of
//! Bitzek et al. (2006), and FIRE 2.0 of Guénolé et al. (2020), which
//! backtracks half a step whenever the motion turns uphill.
//!
//! # Example
//!
//! Relax the Rosenbrock valley from (3, 4).
//!
//! ```
//! use fire::prelude::*;
//! use fire::functions::{Rosenbrock, RosenbrockParams};
//! use nalgebra::DVector;
//!
//! let x0 = DVector::from_column_slice(&[3.0, 4.0]);
//! let params = FireParams::default().with_atol(1E-6);
//!
//! let res = minimize_objective(
//!     Variant::Fire1,
//!     &Rosenbrock,
//!     &x0,
//!     &RosenbrockParams::default(),
//!     &params,
//! )
//! .unwrap();
//!
//! assert_eq!(res.termination, Termination::Converged);
//! assert!((res.x[0] - 1.0).abs() < 1E-5);
//! assert!((res.x[1] - 1.0).abs() < 1E-5);
//! ```
pub mod consts;
mod error;
mod fire;
pub mod functions;
mod objective;
mod observer;
mod params;
pub mod prelude;

pub use crate::error::{FireError, Result};
pub use crate::fire::{
    fire1, fire2, minimize, minimize_objective, minimize_with_observer,
    FireResult, Termination, Variant,
};
pub use crate::objective::Objective;
pub use crate::observer::{IterationState, NoObserver, Observer, Step};
pub use crate::params::FireParams;
