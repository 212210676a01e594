//! Default tuning constants for FIRE
//!
//! Values from Bitzek et al. (2006), "Structural relaxation made simple",
//! Phys. Rev. Lett. 97, 170201. They seed [`FireParams::default`].
//!
//! [`FireParams::default`]: crate::FireParams

/// Initial (and reset) value of the velocity mixing coefficient
pub const ALPHA0: f64 = 0.1;
/// Number of consecutive downhill steps before the timestep may grow
pub const N_DELAY: usize = 5;
/// Maximum number of iterations
pub const N_MAX: usize = 10_000;
/// Timestep growth factor
pub const F_INC: f64 = 1.1;
/// Timestep shrink factor
pub const F_DEC: f64 = 0.5;
/// Mixing coefficient decay factor
pub const F_ALPHA: f64 = 0.99;
/// Maximum number of consecutive uphill steps tolerated by FIRE2
pub const N_NEG_MAX: usize = 2000;
/// Upper timestep bound as a multiple of the initial timestep
pub const DT_MAX_FACTOR: f64 = 10.0;
/// Lower timestep bound as a multiple of the initial timestep
pub const DT_MIN_FACTOR: f64 = 0.02;
/// Default convergence tolerance on the largest force component
pub const ATOL: f64 = 1E-4;
/// Default initial timestep
pub const DT: f64 = 0.002;
