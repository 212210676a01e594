//! Per-iteration inspection of a FIRE run
use nalgebra::DVector;

/// How the dissipated power test was resolved at the start of an iteration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Power was positive but fewer than `n_delay` downhill steps have
    /// passed, so `dt` and alpha were left alone.
    Coast,
    /// Power was positive and the timestep grew while alpha decayed.
    Accelerate,
    /// Power was non-positive: the velocity was zeroed.
    Reset,
    /// Power was non-positive (FIRE2): the last step was partially undone
    /// before the velocity was zeroed.
    Backtrack,
}

/// Snapshot of the optimizer after a completed iteration.
///
/// `power`, `step`, `dt` and `alpha` describe the adaptation decision taken
/// at the start of the iteration. The vectors and `error` describe the
/// state at its end.
#[derive(Clone, Debug)]
pub struct IterationState<'a> {
    /// 0-based iteration index
    pub iteration: usize,
    pub x: &'a DVector<f64>,
    pub velocity: &'a DVector<f64>,
    pub force: &'a DVector<f64>,
    /// Dissipated power F·V
    pub power: f64,
    pub step: Step,
    /// Timestep used for this iteration
    pub dt: f64,
    /// Mixing coefficient used for this iteration
    pub alpha: f64,
    pub n_pos: usize,
    pub n_neg: usize,
    /// Largest absolute force component at the new position
    pub error: f64,
}

/// Receives every completed iteration of a run.
///
/// Any `FnMut(&IterationState)` closure is an observer.
///
/// # Example
///
/// ```
/// use fire::{minimize_with_observer, FireParams, IterationState, Variant};
/// use nalgebra::DVector;
///
/// let mut dts = Vec::new();
/// let res = minimize_with_observer(
///     Variant::Fire1,
///     &DVector::from_column_slice(&[1.0, -2.0]),
///     &(),
///     |x: &DVector<f64>, _: &()| 0.5 * x.norm_squared(),
///     |x: &DVector<f64>, _: &()| x.clone(),
///     &FireParams::default(),
///     &mut |state: &IterationState| dts.push(state.dt),
/// )
/// .unwrap();
///
/// assert_eq!(dts.len(), res.iterations + 1);
/// ```
pub trait Observer {
    fn observe(&mut self, state: &IterationState);
}

impl<F> Observer for F
where
    F: FnMut(&IterationState),
{
    fn observe(&mut self, state: &IterationState) {
        self(state)
    }
}

/// Observer that ignores everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NoObserver;

impl Observer for NoObserver {
    #[inline]
    fn observe(&mut self, _state: &IterationState) {}
}
