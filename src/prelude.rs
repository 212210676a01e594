//! Re-imports for convenience
#[doc(no_inline)]
pub use crate::{
    fire1, fire2, minimize, minimize_objective, minimize_with_observer,
    FireError, FireParams, FireResult, IterationState, Objective, Observer,
    Step, Termination, Variant,
};
