//! Second-order IIR filter sections (biquads) and cascades of them, for
//! control loops and other sample-by-sample signal processing.
//!
//! Everything here is synchronous and allocation free on the per-sample path.
//! A section or chain must only be stepped from one place at a time; the
//! chain's mutable borrows of its sections make that a compile time rule.

pub mod filter;
pub mod prelude;
pub mod util;

pub use num::Complex;
