//! Errors raised by a FIRE run
use std::fmt;

pub type Result<T> = std::result::Result<T, FireError>;

/// Reasons a FIRE run could not be carried out.
///
/// Running out of iterations or stalling are not errors. Those are reported
/// through [`Termination`](crate::Termination) on a successful result.
#[derive(Debug, Clone, PartialEq)]
pub enum FireError {
    /// The initial point has no components
    EmptyInitialPoint,
    /// A component of the initial point is infinite or NaN
    NonFiniteInitialPoint { index: usize, value: f64 },
    /// The gradient callback returned a vector of the wrong length
    GradientDimensionMismatch {
        expected: usize,
        got: usize,
        iteration: usize,
    },
    /// The gradient callback returned an infinite or NaN component
    NonFiniteForce { iteration: usize },
    /// A tuning parameter is out of its valid range
    InvalidParameter { name: &'static str, value: f64 },
}

impl std::error::Error for FireError {}

impl fmt::Display for FireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInitialPoint => {
                write!(f, "the initial point must have at least one component")
            }
            Self::NonFiniteInitialPoint { index, value } => {
                write!(f, "non-finite initial point component x[{index}] = {value}")
            }
            Self::GradientDimensionMismatch {
                expected,
                got,
                iteration,
            } => write!(
                f,
                "gradient has {got} components but the point has {expected} \
                 (iteration {iteration})"
            ),
            Self::NonFiniteForce { iteration } => {
                write!(f, "gradient is not finite at iteration {iteration}")
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "invalid value for `{name}`: {value}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_parameter() {
        let err = FireError::InvalidParameter {
            name: "atol",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "invalid value for `atol`: -1");
    }

    #[test]
    fn display_dimension_mismatch() {
        let err = FireError::GradientDimensionMismatch {
            expected: 3,
            got: 2,
            iteration: 0,
        };
        assert_eq!(
            err.to_string(),
            "gradient has 2 components but the point has 3 (iteration 0)"
        );
    }

    #[test]
    fn usable_as_boxed_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(FireError::NonFiniteForce { iteration: 7 });
        assert!(err.to_string().contains("iteration 7"));
    }
}
