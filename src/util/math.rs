use num::Complex;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Normalized coefficients of a second-order section,
///
/// ```text
///        b[0] + b[1] z^-1 + b[2] z^-2
/// H(z) = ----------------------------
///          1  + a[0] z^-1 + a[1] z^-2
/// ```
///
/// `a` holds `a1` and `a2`; the leading denominator term is always 1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub b: [f64; 3],
    pub a: [f64; 2],
}

impl Coefficients {
    /// The pass-through section, `H(z) = 1`.
    pub fn identity() -> Self {
        Coefficients {
            b: [1.0, 0.0, 0.0],
            a: [0.0, 0.0],
        }
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Coefficients::identity()
    }
}

/// Continuous time PID controller with a first order low pass on the
/// derivative term,
///
/// ```text
/// C(s) = Kp + Ki / s + Kd * N * s / (s + N)
/// ```
///
/// sampled every `ts` seconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PidfGains {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
    pub n: f64,
    pub ts: f64,
}

impl PidfGains {
    pub fn new(kp: f64, ki: f64, kd: f64, n: f64, ts: f64) -> Self {
        PidfGains { kp, ki, kd, n, ts }
    }

    /// True when `N * Ts == -2`, which puts the Tustin denominator at zero.
    pub fn is_singular(&self) -> bool {
        self.n * self.ts + 2.0 == 0.0
    }
}

/// Roots of `a z^2 + b z + c = 0` from the quadratic formula.
///
/// The `+sqrt` root comes first. A zero discriminant returns the repeated
/// root twice and a negative one a complex conjugate pair. `a == 0` is not
/// checked and yields non-finite roots.
///
/// # Examples
///
/// ```
/// use biquad_rs::util::math::quadratic_roots;
///
/// let roots = quadratic_roots(1.0_f64, -1.5, 0.5);
/// assert_eq!(roots[0].re, 1.0);
/// assert_eq!(roots[1].re, 0.5);
/// ```
pub fn quadratic_roots<T>(a: T, b: T, c: T) -> [Complex<T>; 2]
where
    T: Float,
{
    let two = T::one() + T::one();
    let four = two * two;
    let ds = Complex::new(b * b - four * a * c, T::zero()).sqrt();
    let minus_b = Complex::new(-b, T::zero());
    [(minus_b + ds) / (two * a), (minus_b - ds) / (two * a)]
}

/// PIDF coefficient calculator.
///
/// Discretizes the controller in `PidfGains` with the trapezoidal (Tustin)
/// approximation. No range checks are made; a singular derivative filter
/// (`N * Ts == -2`) divides by zero.
pub fn pidf_coefficients(gains: &PidfGains) -> Coefficients {
    let PidfGains { kp, ki, kd, n, ts } = *gains;
    let bd = n * ts + 2.0;

    let a1 = -4.0 / bd;
    let a2 = -(n * ts - 2.0) / bd;

    let b0 = (4.0 * kp + 4.0 * kd * n + 2.0 * ki * ts + 2.0 * kp * n * ts
        + ki * n * ts * ts)
        / (2.0 * bd);
    let b1 = (ki * n * ts * ts - 4.0 * kp - 4.0 * kd * n) / bd;
    let b2 = (4.0 * kp + 4.0 * kd * n - 2.0 * ki * ts - 2.0 * kp * n * ts
        + ki * n * ts * ts)
        / (2.0 * bd);

    Coefficients {
        b: [b0, b1, b2],
        a: [a1, a2],
    }
}

#[cfg(test)]
mod test {
    use crate::util::math::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_real_roots() {
        let roots = quadratic_roots(1.0, -1.5, 0.5);
        assert_approx_eq!(roots[0].re, 1.0, 1e-9);
        assert_approx_eq!(roots[1].re, 0.5, 1e-9);
        assert_eq!(roots[0].im, 0.0);
        assert_eq!(roots[1].im, 0.0);
    }

    #[test]
    fn test_repeated_root() {
        // (z - 0.5)^2
        let roots = quadratic_roots(1.0, -1.0, 0.25);
        assert_eq!(roots[0], roots[1]);
        assert_approx_eq!(roots[0].re, 0.5, 1e-12);
    }

    #[test]
    fn test_conjugate_roots() {
        let roots = quadratic_roots(1.0_f32, 0.0, 1.0);
        assert_approx_eq!(roots[0].re, 0.0, 1e-6);
        assert_approx_eq!(roots[0].im, 1.0, 1e-6);
        assert_approx_eq!(roots[1].im, -1.0, 1e-6);
    }

    #[test]
    fn test_scaled_leading_term() {
        // 2z^2 - 3z + 1 = 2(z - 1)(z - 0.5)
        let roots = quadratic_roots(2.0, -3.0, 1.0);
        assert_approx_eq!(roots[0].re, 1.0, 1e-12);
        assert_approx_eq!(roots[1].re, 0.5, 1e-12);
    }

    #[test]
    fn test_pidf_unit_gains() {
        // Kp = Ki = Kd = N = Ts = 1: bd = 3
        let c = pidf_coefficients(&PidfGains::new(1.0, 1.0, 1.0, 1.0, 1.0));
        assert_approx_eq!(c.a[0], -4.0 / 3.0, 1e-12);
        assert_approx_eq!(c.a[1], 1.0 / 3.0, 1e-12);
        assert_approx_eq!(c.b[0], 13.0 / 6.0, 1e-12);
        assert_approx_eq!(c.b[1], -7.0 / 3.0, 1e-12);
        assert_approx_eq!(c.b[2], 5.0 / 6.0, 1e-12);
    }

    #[test]
    fn test_pidf_pure_proportional() {
        // Only Kp: numerator is Kp times the derivative filter denominator.
        let c = pidf_coefficients(&PidfGains::new(2.5, 0.0, 0.0, 20.0, 0.01));
        assert_approx_eq!(c.b[0], 2.5, 1e-12);
        assert_approx_eq!(c.b[1], 2.5 * c.a[0], 1e-12);
        assert_approx_eq!(c.b[2], 2.5 * c.a[1], 1e-12);
    }

    #[test]
    fn test_pidf_singular() {
        let gains = PidfGains::new(1.0, 1.0, 1.0, -2.0, 1.0);
        assert!(gains.is_singular());
        let c = pidf_coefficients(&gains);
        assert!(!c.a[0].is_finite());
    }
}
