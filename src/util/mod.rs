//! Helper functions shared by the filter sections and the error type raised
//! by their strict constructors.

use std::error;
use std::fmt;

/// Preconditions checked by the `try_*` variants of the filter operations.
///
/// The plain variants never fail; they let the singular case run through the
/// floating point arithmetic and hand back infinities or NaNs instead.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterError {
    ZeroLeadingDenominator,
    ZeroLeadingNumerator,
    SingularPidf,
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let desc = match *self {
            FilterError::ZeroLeadingDenominator => {
                "Leading denominator coefficient a0 must be non-zero"
            }
            FilterError::ZeroLeadingNumerator => {
                "Leading numerator coefficient b0 must be non-zero to place zeros"
            }
            FilterError::SingularPidf => {
                "PIDF derivative filter is singular, N * Ts must not equal -2"
            }
        };
        write!(f, "Filter error: {}", desc)
    }
}

impl error::Error for FilterError {
    fn cause(&self) -> Option<&dyn error::Error> {
        None
    }
}

/// Some basic math functions used by the filter sections
pub mod math;
