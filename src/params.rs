//! Tuning parameters for the FIRE optimizer
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::{FireError, Result};

/// Parameters for the FIRE optimizer
///
/// The defaults follow Bitzek et al. (2006). Parameters are plain values
/// copied into each run, so one `FireParams` can drive any number of
/// independent runs.
///
/// # Example
///
/// ```
/// use fire::FireParams;
///
/// let params = FireParams::default()
///     .with_atol(1E-6)
///     .with_dt(0.1);
///
/// assert_eq!(params.atol, 1E-6);
/// assert_eq!(params.dt_max(), 1.0);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case", default))]
pub struct FireParams {
    /// Initial and reset value of the mixing coefficient, alpha.
    pub alpha0: f64,
    /// Downhill steps required before the timestep starts growing.
    pub n_delay: usize,
    /// Maximum number of iterations.
    pub n_max: usize,
    /// Timestep growth factor.
    pub f_inc: f64,
    /// Timestep shrink factor.
    pub f_dec: f64,
    /// Decay factor of alpha while accelerating.
    pub f_alpha: f64,
    /// Consecutive uphill steps after which FIRE2 gives up.
    pub n_neg_max: usize,
    /// `dt_max = dt_max_factor * dt`
    pub dt_max_factor: f64,
    /// `dt_min = dt_min_factor * dt`
    pub dt_min_factor: f64,
    /// Exit accuracy on the largest absolute force component.
    pub atol: f64,
    /// Initial timestep.
    pub dt: f64,
    /// Log the objective and force error at `info` level every iteration.
    /// Costs one objective evaluation per iteration.
    pub log_progress: bool,
}

impl Default for FireParams {
    fn default() -> Self {
        Self {
            alpha0: consts::ALPHA0,
            n_delay: consts::N_DELAY,
            n_max: consts::N_MAX,
            f_inc: consts::F_INC,
            f_dec: consts::F_DEC,
            f_alpha: consts::F_ALPHA,
            n_neg_max: consts::N_NEG_MAX,
            dt_max_factor: consts::DT_MAX_FACTOR,
            dt_min_factor: consts::DT_MIN_FACTOR,
            atol: consts::ATOL,
            dt: consts::DT,
            log_progress: false,
        }
    }
}

impl FireParams {
    pub fn with_alpha0(self, alpha0: f64) -> Self {
        Self { alpha0, ..self }
    }

    pub fn with_n_delay(self, n_delay: usize) -> Self {
        Self { n_delay, ..self }
    }

    pub fn with_n_max(self, n_max: usize) -> Self {
        Self { n_max, ..self }
    }

    pub fn with_f_inc(self, f_inc: f64) -> Self {
        Self { f_inc, ..self }
    }

    pub fn with_f_dec(self, f_dec: f64) -> Self {
        Self { f_dec, ..self }
    }

    pub fn with_f_alpha(self, f_alpha: f64) -> Self {
        Self { f_alpha, ..self }
    }

    pub fn with_n_neg_max(self, n_neg_max: usize) -> Self {
        Self { n_neg_max, ..self }
    }

    pub fn with_dt_bounds(self, dt_min_factor: f64, dt_max_factor: f64) -> Self {
        Self {
            dt_min_factor,
            dt_max_factor,
            ..self
        }
    }

    pub fn with_atol(self, atol: f64) -> Self {
        Self { atol, ..self }
    }

    pub fn with_dt(self, dt: f64) -> Self {
        Self { dt, ..self }
    }

    pub fn with_log_progress(self, log_progress: bool) -> Self {
        Self {
            log_progress,
            ..self
        }
    }

    /// Largest timestep the run may reach
    #[inline]
    pub fn dt_max(&self) -> f64 {
        self.dt_max_factor * self.dt
    }

    /// Smallest timestep the run may reach
    #[inline]
    pub fn dt_min(&self) -> f64 {
        self.dt_min_factor * self.dt
    }

    /// Check that every parameter is in its valid range.
    ///
    /// # Example
    ///
    /// ```
    /// use fire::{FireError, FireParams};
    ///
    /// let err = FireParams::default().with_f_dec(1.5).validate();
    /// assert_eq!(
    ///     err,
    ///     Err(FireError::InvalidParameter { name: "f_dec", value: 1.5 })
    /// );
    /// ```
    pub fn validate(&self) -> Result<()> {
        fn check(name: &'static str, value: f64, ok: bool) -> Result<()> {
            if ok && value.is_finite() {
                Ok(())
            } else {
                Err(FireError::InvalidParameter { name, value })
            }
        }

        check("atol", self.atol, self.atol > 0.0)?;
        check("dt", self.dt, self.dt > 0.0)?;
        check("alpha0", self.alpha0, self.alpha0 > 0.0 && self.alpha0 < 1.0)?;
        check("f_inc", self.f_inc, self.f_inc > 1.0)?;
        check("f_dec", self.f_dec, self.f_dec > 0.0 && self.f_dec < 1.0)?;
        check(
            "f_alpha",
            self.f_alpha,
            self.f_alpha > 0.0 && self.f_alpha <= 1.0,
        )?;
        check(
            "dt_min_factor",
            self.dt_min_factor,
            self.dt_min_factor > 0.0 && self.dt_min_factor <= 1.0,
        )?;
        check(
            "dt_max_factor",
            self.dt_max_factor,
            self.dt_max_factor >= 1.0,
        )?;
        check("n_max", self.n_max as f64, self.n_max > 0)?;
        // the bounds themselves must stay representable
        check("dt_max", self.dt_max(), true)?;
        check("dt_min", self.dt_min(), self.dt_min() > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_consts() {
        let params = FireParams::default();
        assert_eq!(params.alpha0, 0.1);
        assert_eq!(params.n_delay, 5);
        assert_eq!(params.n_max, 10_000);
        assert_eq!(params.f_inc, 1.1);
        assert_eq!(params.f_dec, 0.5);
        assert_eq!(params.f_alpha, 0.99);
        assert_eq!(params.n_neg_max, 2000);
        assert_eq!(params.atol, 1E-4);
        assert_eq!(params.dt, 0.002);
        assert!(!params.log_progress);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn dt_bounds_scale_with_initial_dt() {
        let params = FireParams::default().with_dt(0.5);
        assert::close(params.dt_max(), 5.0, 1E-14);
        assert::close(params.dt_min(), 0.01, 1E-14);
    }

    #[test]
    fn builders_only_touch_their_field() {
        let params = FireParams::default().with_n_neg_max(3).with_n_max(50);
        assert_eq!(params.n_neg_max, 3);
        assert_eq!(params.n_max, 50);
        assert_eq!(
            params.with_n_neg_max(2000).with_n_max(10_000),
            FireParams::default()
        );
    }

    #[test]
    fn rejects_nonpositive_atol() {
        for atol in [0.0, -1E-3, f64::NAN] {
            match FireParams::default().with_atol(atol).validate() {
                Err(FireError::InvalidParameter { name: "atol", .. }) => (),
                other => panic!("expected atol error, got {:?}", other),
            }
        }
    }

    #[test]
    fn rejects_bad_adaptation_factors() {
        let bad = [
            (FireParams::default().with_dt(0.0), "dt"),
            (FireParams::default().with_dt(f64::INFINITY), "dt"),
            (FireParams::default().with_alpha0(1.0), "alpha0"),
            (FireParams::default().with_f_inc(0.9), "f_inc"),
            (FireParams::default().with_f_dec(0.0), "f_dec"),
            (FireParams::default().with_f_alpha(1.2), "f_alpha"),
            (FireParams::default().with_dt_bounds(0.0, 10.0), "dt_min_factor"),
            (FireParams::default().with_dt_bounds(0.02, 0.5), "dt_max_factor"),
            (FireParams::default().with_n_max(0), "n_max"),
        ];
        for (params, expected) in bad {
            match params.validate() {
                Err(FireError::InvalidParameter { name, .. }) => {
                    assert_eq!(name, expected)
                }
                Ok(()) => panic!("{expected} should have been rejected"),
                Err(err) => panic!("unexpected error {err}"),
            }
        }
    }

    #[cfg(feature = "serde1")]
    #[test]
    fn partial_yaml_fills_defaults() {
        let yaml = indoc::indoc! {"
            ---
            atol: 1.0e-6
            dt: 0.1
            log_progress: true
        "};
        let params: FireParams = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            params,
            FireParams::default()
                .with_atol(1E-6)
                .with_dt(0.1)
                .with_log_progress(true)
        );
    }

    #[cfg(feature = "serde1")]
    #[test]
    fn json_config_with_tuning_constants() {
        let json = r#"{"n_max": 500, "f_inc": 1.2, "n_neg_max": 10}"#;
        let params: FireParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.n_max, 500);
        assert_eq!(params.f_inc, 1.2);
        assert_eq!(params.n_neg_max, 10);
        assert_eq!(params.alpha0, FireParams::default().alpha0);
    }
}
