use nalgebra::DVector;

/// A differentiable scalar function that FIRE can relax.
///
/// The parameter payload is kept outside the objective so the same
/// function can be minimized under many parameter sets, and is handed back
/// untouched on every evaluation.
pub trait Objective {
    /// Extra data forwarded to every evaluation
    type Params: ?Sized;

    /// Objective value at `x`
    fn value(&self, x: &DVector<f64>, params: &Self::Params) -> f64;

    /// Gradient at `x`. Must have the same length as `x`.
    fn gradient(&self, x: &DVector<f64>, params: &Self::Params) -> DVector<f64>;

    /// Force at `x`, the negated gradient
    fn force(&self, x: &DVector<f64>, params: &Self::Params) -> DVector<f64> {
        -self.gradient(x, params)
    }
}
