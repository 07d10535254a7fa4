//! Cascades of biquad sections.
//!
//! Putting filters in series multiplies their transfer functions, so a
//! higher order filter is built by chaining second-order sections. The chain
//! borrows its sections mutably for as long as it lives; it never copies
//! them, and no other code can step a section while a chain holds it.
//!
//! # Example
//!
//! ```
//! use biquad_rs::filter::biquad::Biquad;
//!
//! let mut bq1 = Biquad::from_normalized(0.5, 0.0, 0.0, -0.5, 0.0);
//! let mut bq2 = Biquad::from_normalized(1.0, 1.0, 0.0, 0.0, 0.0);
//! let mut bq3 = Biquad::new();
//!
//! let mut chain = &mut bq1 * &mut bq2 * &mut bq3;
//! assert_eq!(chain.len(), 3);
//! assert_eq!(chain.poles().len(), 6);
//! assert!(chain.stable());
//! let y = chain.step(1.0);
//! ```

use crate::filter::biquad::Biquad;
use log::trace;
use num::Complex;
use std::iter::FromIterator;
use std::ops::Mul;

/// An ordered cascade of borrowed `Biquad` sections.
///
/// An empty chain passes samples through unchanged and is stable.
#[derive(Debug, Default)]
pub struct BiquadChain<'a> {
    biquads: Vec<&'a mut Biquad>,
}

impl<'a> BiquadChain<'a> {
    pub fn new() -> Self {
        BiquadChain {
            biquads: Vec::new(),
        }
    }

    /// Appends a section to the end of the cascade.
    ///
    /// Returns the chain so calls can be strung together.
    ///
    /// # Examples
    ///
    /// ```
    /// use biquad_rs::filter::biquad::Biquad;
    /// use biquad_rs::filter::chain::BiquadChain;
    ///
    /// let mut bq1 = Biquad::new();
    /// let mut bq2 = Biquad::new();
    /// let mut chain = BiquadChain::new();
    /// chain.add(&mut bq1).add(&mut bq2);
    /// assert_eq!(chain.step(2.0), 2.0);
    /// ```
    pub fn add(&mut self, bq: &'a mut Biquad) -> &mut Self {
        self.biquads.push(bq);
        trace!("biquad chain grown to {} sections", self.biquads.len());
        self
    }

    pub fn len(&self) -> usize {
        self.biquads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.biquads.is_empty()
    }

    /// Runs one sample through every section in the order they were added
    /// and returns the output of the last one.
    pub fn step(&mut self, x: f64) -> f64 {
        self.biquads.iter_mut().fold(x, |x, bq| bq.step(x))
    }

    /// Runs a batch of samples through the cascade, in order.
    pub fn step_batch(&mut self, input: &[f64]) -> Vec<f64> {
        input.iter().map(|x| self.step(*x)).collect()
    }

    /// Poles of every section, concatenated in chain order.
    pub fn poles(&self) -> Vec<Complex<f64>> {
        self.biquads.iter().flat_map(|bq| bq.poles()).collect()
    }

    /// Zeros of every section, concatenated in chain order.
    pub fn zeros(&self) -> Vec<Complex<f64>> {
        self.biquads.iter().flat_map(|bq| bq.zeros()).collect()
    }

    /// The chain is stable when each of its sections is.
    pub fn stable(&self) -> bool {
        self.biquads.iter().all(|bq| bq.stable())
    }
}

impl<'a> Extend<&'a mut Biquad> for BiquadChain<'a> {
    fn extend<I: IntoIterator<Item = &'a mut Biquad>>(&mut self, iter: I) {
        for bq in iter {
            self.add(bq);
        }
    }
}

impl<'a> FromIterator<&'a mut Biquad> for BiquadChain<'a> {
    fn from_iter<I: IntoIterator<Item = &'a mut Biquad>>(iter: I) -> Self {
        let mut chain = BiquadChain::new();
        chain.extend(iter);
        chain
    }
}

/// `&mut bq1 * &mut bq2` builds a two section chain.
impl<'a> Mul<&'a mut Biquad> for &'a mut Biquad {
    type Output = BiquadChain<'a>;

    fn mul(self, rhs: &'a mut Biquad) -> BiquadChain<'a> {
        let mut chain = BiquadChain::new();
        chain.add(self).add(rhs);
        chain
    }
}

/// `chain * &mut bq` appends to the chain.
impl<'a> Mul<&'a mut Biquad> for BiquadChain<'a> {
    type Output = BiquadChain<'a>;

    fn mul(mut self, rhs: &'a mut Biquad) -> BiquadChain<'a> {
        self.add(rhs);
        self
    }
}
