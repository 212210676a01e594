//! Standard test functions for relaxation benchmarks
use nalgebra::DVector;

use crate::objective::Objective;

/// Parameters of the Rosenbrock valley
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RosenbrockParams {
    pub a: f64,
    pub b: f64,
}

impl Default for RosenbrockParams {
    fn default() -> Self {
        Self { a: 1.0, b: 100.0 }
    }
}

/// The chained [Rosenbrock function](https://en.wikipedia.org/wiki/Rosenbrock_function)
///
/// f(x) = Σ (a - xᵢ)² + b (xᵢ₊₁ - xᵢ²)²
///
/// With two components this is the classic banana valley with its minimum
/// f = 0 at x = (a, a²). Needs at least two components.
///
/// # Example
///
/// ```
/// use fire::functions::{Rosenbrock, RosenbrockParams};
/// use fire::Objective;
/// use nalgebra::DVector;
///
/// let p = RosenbrockParams::default();
/// let x = DVector::from_column_slice(&[1.0, 1.0]);
///
/// assert_eq!(Rosenbrock.value(&x, &p), 0.0);
/// assert_eq!(Rosenbrock.gradient(&x, &p), DVector::zeros(2));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rosenbrock;

impl Objective for Rosenbrock {
    type Params = RosenbrockParams;

    fn value(&self, x: &DVector<f64>, p: &RosenbrockParams) -> f64 {
        x.as_slice()
            .windows(2)
            .map(|w| (p.a - w[0]).powi(2) + p.b * (w[1] - w[0] * w[0]).powi(2))
            .sum()
    }

    fn gradient(&self, x: &DVector<f64>, p: &RosenbrockParams) -> DVector<f64> {
        let n = x.len();
        let mut g = DVector::zeros(n);
        for i in 0..n.saturating_sub(1) {
            let t = x[i + 1] - x[i] * x[i];
            g[i] += -2.0 * (p.a - x[i]) - 4.0 * p.b * t * x[i];
            g[i + 1] += 2.0 * p.b * t;
        }
        g
    }
}

/// The [Eggholder function](https://www.sfu.ca/~ssurjano/egg.html) with
/// offset `c0` as its parameter (47 in the usual definition)
///
/// f(x, y) = -(y + c0) sin(√|y + x/2 + c0|) - x sin(√|x - (y + c0)|)
///
/// A rugged landscape with many local minima. Defined on two components;
/// the gradient is undefined where either square-root argument vanishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Eggholder;

impl Objective for Eggholder {
    type Params = f64;

    fn value(&self, x: &DVector<f64>, c0: &f64) -> f64 {
        let (x0, x1) = (x[0], x[1]);
        let s1 = (x1 + 0.5 * x0 + c0).abs().sqrt();
        let s2 = (x0 - (x1 + c0)).abs().sqrt();
        -(x1 + c0) * s1.sin() - x0 * s2.sin()
    }

    fn gradient(&self, x: &DVector<f64>, c0: &f64) -> DVector<f64> {
        let (x0, x1) = (x[0], x[1]);
        let u = x1 + 0.5 * x0 + c0;
        let w = x0 - (x1 + c0);
        let s1 = u.abs().sqrt();
        let s2 = w.abs().sqrt();
        // d√|u|/du = sign(u) / (2√|u|)
        let ds1 = u.signum() / (2.0 * s1);
        let ds2 = w.signum() / (2.0 * s2);

        let dx = -(x1 + c0) * s1.cos() * 0.5 * ds1
            - s2.sin()
            - x0 * s2.cos() * ds2;
        let dy = -s1.sin() - (x1 + c0) * s1.cos() * ds1 + x0 * s2.cos() * ds2;
        DVector::from_column_slice(&[dx, dy])
    }
}

/// Separable convex quadratic, f(x) = ½ Σ kᵢ (xᵢ - cᵢ)²
///
/// The unique minimizer is `center`. Stiffnesses must be positive.
#[derive(Clone, Debug, PartialEq)]
pub struct Quadratic {
    pub center: DVector<f64>,
    pub stiffness: DVector<f64>,
}

impl Quadratic {
    /// f(x) = ½ |x - center|²
    pub fn isotropic(center: DVector<f64>) -> Self {
        let stiffness = DVector::from_element(center.len(), 1.0);
        Self { center, stiffness }
    }

    pub fn new(center: DVector<f64>, stiffness: DVector<f64>) -> Self {
        Self { center, stiffness }
    }
}

impl Objective for Quadratic {
    type Params = ();

    fn value(&self, x: &DVector<f64>, _: &()) -> f64 {
        let d = x - &self.center;
        0.5 * d.component_mul(&d).dot(&self.stiffness)
    }

    fn gradient(&self, x: &DVector<f64>, _: &()) -> DVector<f64> {
        (x - &self.center).component_mul(&self.stiffness)
    }
}
