//! Infinite Impulse Response (IIR) filtering built from second-order
//! sections.
//!
//! IIR filters are feedback based systems, and have all the caveats associated
//! with any feedback system.  If poorly designed they can be unstable and
//! unpredictable.  The phase and group delay responses are non-linear.
//!
//! With those drawbacks noted, a well designed IIR filter can be stable in all
//! but the most unlikely scenarios, and extremely efficient as well.  Many
//! times a design that requires an 81 tap FIR filter could only require 9 taps
//! from a well designed IIR filter alternative.
//!
//! High order IIR designs are sensitive to coefficient rounding when written
//! as a single polynomial, so they are normally factored into a cascade of
//! second-order sections.  `biquad` implements one section, including a PIDF
//! controller as a special case, and `chain` runs samples through an ordered
//! cascade of them.
pub mod biquad;
pub mod chain;
