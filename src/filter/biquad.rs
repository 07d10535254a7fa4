//! Implementation of a single second-order IIR section (biquad).
//!
//! A biquad is the ratio of two quadratics in the delay operator:
//!
//! ```text
//!        b0 + b1 z^-1 + b2 z^-2
//! H(z) = ----------------------
//!        a0 + a1 z^-1 + a2 z^-2
//! ```
//!
//! Coefficients are always stored divided through by `a0`. Samples are run
//! through the direct form II transposed realization, which keeps two state
//! values per section:
//!
//! ```text
//! y   = b0 * x + w0
//! w0' = b1 * x - a1 * y + w1
//! w1' = b2 * x - a2 * y
//! ```
//!
//! Takes in `f64` samples, outputs `f64`. Initial state is all zeros.

use crate::util::math::{
    pidf_coefficients, quadratic_roots, Coefficients, PidfGains,
};
use crate::util::FilterError;
use log::{debug, warn};
use num::Complex;

/// A second-order IIR filter section.
///
/// Higher order filters are built by cascading sections in a
/// [`BiquadChain`](crate::filter::chain::BiquadChain).
#[derive(Clone, Debug)]
pub struct Biquad {
    b: [f64; 3],
    a: [f64; 2],
    w: [f64; 2],
    reset_state_on_gain_change: bool,
}

impl Biquad {
    /// Creates the unity transfer function, `step(x) == x`.
    pub fn new() -> Biquad {
        Biquad::from_coefficients(Coefficients::identity())
    }

    /// Creates a section from coefficients that are already normalized so
    /// that `a0 == 1`.
    ///
    /// # Arguments
    ///
    /// * `b0`, `b1`, `b2` - Numerator (feed-forward) coefficients.
    /// * `a1`, `a2` - Denominator (feedback) coefficients.
    ///
    /// # Examples
    ///
    /// ```
    /// use biquad_rs::filter::biquad::Biquad;
    ///
    /// let mut bq = Biquad::from_normalized(0.5, 0.5, 0.0, 0.0, 0.0);
    /// assert_eq!(bq.step(1.0), 0.5);
    /// assert_eq!(bq.step(1.0), 1.0);
    /// ```
    pub fn from_normalized(
        b0: f64,
        b1: f64,
        b2: f64,
        a1: f64,
        a2: f64,
    ) -> Biquad {
        Biquad::from_coefficients(Coefficients {
            b: [b0, b1, b2],
            a: [a1, a2],
        })
    }

    /// Creates a section from all six coefficients, dividing each of them by
    /// `a0`.
    ///
    /// `a0 == 0` is not rejected: the stored coefficients become infinite or
    /// NaN and so does every output. Use
    /// [`try_from_unnormalized`](Biquad::try_from_unnormalized) to get an
    /// error instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use biquad_rs::filter::biquad::Biquad;
    ///
    /// let bq = Biquad::from_unnormalized(2.0, 4.0, 2.0, 2.0, -1.0, 0.5);
    /// assert_eq!(bq.coefficients().b, [1.0, 2.0, 1.0]);
    /// assert_eq!(bq.coefficients().a, [-0.5, 0.25]);
    /// ```
    pub fn from_unnormalized(
        b0: f64,
        b1: f64,
        b2: f64,
        a0: f64,
        a1: f64,
        a2: f64,
    ) -> Biquad {
        if a0 == 0.0 {
            warn!("biquad built with a0 == 0, coefficients will not be finite");
        }
        Biquad::from_normalized(b0 / a0, b1 / a0, b2 / a0, a1 / a0, a2 / a0)
    }

    /// Strict version of [`from_unnormalized`](Biquad::from_unnormalized).
    pub fn try_from_unnormalized(
        b0: f64,
        b1: f64,
        b2: f64,
        a0: f64,
        a1: f64,
        a2: f64,
    ) -> Result<Biquad, FilterError> {
        if a0 == 0.0 {
            return Err(FilterError::ZeroLeadingDenominator);
        }
        Ok(Biquad::from_unnormalized(b0, b1, b2, a0, a1, a2))
    }

    pub fn from_coefficients(coefficients: Coefficients) -> Biquad {
        Biquad {
            b: coefficients.b,
            a: coefficients.a,
            w: [0.0; 2],
            reset_state_on_gain_change: true,
        }
    }

    /// Creates a PIDF controller section. See
    /// [`configure_pidf`](Biquad::configure_pidf).
    ///
    /// # Examples
    ///
    /// ```
    /// use biquad_rs::filter::biquad::Biquad;
    /// use biquad_rs::util::math::PidfGains;
    ///
    /// let mut pidf = Biquad::pidf(&PidfGains::new(1.0, 1.0, 1.0, 1.0, 1.0));
    /// let u = pidf.step(0.1);
    /// ```
    pub fn pidf(gains: &PidfGains) -> Biquad {
        let mut bq = Biquad::new();
        bq.configure_pidf(gains);
        bq
    }

    /// Snapshot of the stored, normalized coefficients.
    pub fn coefficients(&self) -> Coefficients {
        Coefficients {
            b: self.b,
            a: self.a,
        }
    }

    /// Replaces the coefficients in place.
    ///
    /// With the reset policy on (the default) the state is zeroed, so the
    /// section continues as if it had just been built with the new
    /// coefficients. With it off, the state is carried over untouched.
    pub fn set_coefficients(
        &mut self,
        b0: f64,
        b1: f64,
        b2: f64,
        a1: f64,
        a2: f64,
    ) {
        self.b = [b0, b1, b2];
        self.a = [a1, a2];

        if self.reset_state_on_gain_change {
            self.w = [0.0; 2];
        }
        debug!(
            "biquad coefficients set to b = {:?}, a = {:?}, state reset: {}",
            self.b, self.a, self.reset_state_on_gain_change
        );
    }

    /// Chooses whether the state is zeroed by later coefficient changes. The
    /// current state is left alone.
    pub fn set_reset_state_on_gain_change(&mut self, reset: bool) {
        self.reset_state_on_gain_change = reset;
    }

    pub fn reset_state_on_gain_change(&self) -> bool {
        self.reset_state_on_gain_change
    }

    /// Sets the coefficients from a PID controller with filtered derivative,
    /// discretized with the Tustin (trapezoidal) approximation.
    ///
    /// The coefficients go through
    /// [`set_coefficients`](Biquad::set_coefficients), so the reset policy
    /// applies. `Ts` must match the rate `step` is actually called at.
    ///
    /// # Arguments
    ///
    /// * `gains` - Kp, Ki, Kd, the derivative filter pole `N` and the sample
    ///   period `Ts` in seconds.
    pub fn configure_pidf(&mut self, gains: &PidfGains) {
        if gains.is_singular() {
            warn!("PIDF configured with N * Ts == -2, coefficients will not be finite");
        }
        debug!("configuring PIDF section from {:?}", gains);
        let Coefficients { b, a } = pidf_coefficients(gains);
        self.set_coefficients(b[0], b[1], b[2], a[0], a[1]);
    }

    /// Strict version of [`configure_pidf`](Biquad::configure_pidf). The
    /// section is left unchanged on error.
    pub fn try_configure_pidf(
        &mut self,
        gains: &PidfGains,
    ) -> Result<(), FilterError> {
        if gains.is_singular() {
            return Err(FilterError::SingularPidf);
        }
        self.configure_pidf(gains);
        Ok(())
    }

    /// Runs one sample through the section and returns the filtered output.
    ///
    /// # Examples
    ///
    /// ```
    /// use biquad_rs::filter::biquad::Biquad;
    ///
    /// // y[n] = x[n] + 0.5 * y[n - 1]
    /// let mut bq = Biquad::from_normalized(1.0, 0.0, 0.0, -0.5, 0.0);
    /// assert_eq!(bq.step(1.0), 1.0);
    /// assert_eq!(bq.step(0.0), 0.5);
    /// assert_eq!(bq.step(0.0), 0.25);
    /// ```
    #[inline]
    pub fn step(&mut self, x: f64) -> f64 {
        let y = self.b[0] * x + self.w[0];
        self.w[0] = self.b[1] * x - self.a[0] * y + self.w[1];
        self.w[1] = self.b[2] * x - self.a[1] * y;
        y
    }

    /// Runs a batch of samples through the section, in order.
    pub fn step_batch(&mut self, input: &[f64]) -> Vec<f64> {
        input.iter().map(|x| self.step(*x)).collect()
    }

    /// Roots of `z^2 + a1 z + a2`. Always two values; a double pole is
    /// reported twice.
    pub fn poles(&self) -> Vec<Complex<f64>> {
        quadratic_roots(1.0, self.a[0], self.a[1]).to_vec()
    }

    /// Roots of `b0 z^2 + b1 z + b2`.
    ///
    /// With `b0 == 0` the zeros are not finite; see
    /// [`try_zeros`](Biquad::try_zeros).
    pub fn zeros(&self) -> Vec<Complex<f64>> {
        if self.b[0] == 0.0 {
            warn!("biquad zeros requested with b0 == 0");
        }
        quadratic_roots(self.b[0], self.b[1], self.b[2]).to_vec()
    }

    pub fn try_zeros(&self) -> Result<Vec<Complex<f64>>, FilterError> {
        if self.b[0] == 0.0 {
            return Err(FilterError::ZeroLeadingNumerator);
        }
        Ok(self.zeros())
    }

    /// Whether both poles lie strictly inside the unit circle.
    pub fn stable(&self) -> bool {
        self.poles().iter().all(|p| p.norm() < 1.0)
    }
}

impl Default for Biquad {
    fn default() -> Self {
        Biquad::new()
    }
}

impl From<Coefficients> for Biquad {
    fn from(coefficients: Coefficients) -> Self {
        Biquad::from_coefficients(coefficients)
    }
}
