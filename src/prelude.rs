//! This module provides an easy single import for those using this crate.

pub use crate::filter::biquad::Biquad;
pub use crate::filter::chain::BiquadChain;
pub use crate::util::math::{Coefficients, PidfGains};
pub use crate::util::FilterError;
pub use num::Complex;
