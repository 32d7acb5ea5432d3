use crate::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Linear space as used in map grid or altitude grid definitions.
/// Linear space starting from `start` ranging to `end` (included).
#[derive(Debug, Clone, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Linspace {
    /// start coordinates or value
    pub start: f64,
    /// end coordinates or value
    pub end: f64,
    /// spacing (increment value)
    pub spacing: f64,
}

impl Linspace {
    /// Builds a new Linear space.
    /// `spacing` must be strictly positive and `end` must not precede `start`.
    /// When the span is not a multiple of `spacing`, the space stops at the
    /// last multiple below `end`.
    pub fn new(start: f64, end: f64, spacing: f64) -> Result<Self, Error> {
        if spacing <= 0.0 {
            return Err(Error::BadGridSpacing(spacing));
        }
        if end < start {
            return Err(Error::BadGridSpan(start, end));
        }
        Ok(Self {
            start,
            end,
            spacing,
        })
    }
    /// Returns grid length, in terms of data points
    pub fn length(&self) -> usize {
        // tolerance absorbs the accumulated division error,
        // so exactly divisible spans keep their end point
        ((self.end - self.start) / self.spacing + 1E-9).floor() as usize + 1
    }
    /// Returns true if self is a single point space
    pub fn is_single_point(&self) -> bool {
        self.length() == 1
    }
    /// Returns the n-th sample of this space
    pub fn sample(&self, nth: usize) -> f64 {
        self.start + nth as f64 * self.spacing
    }
    /// Iterates all samples, `start` and (when divisible) `end` included
    pub fn iter(&self) -> impl Iterator<Item = f64> + Clone + '_ {
        (0..self.length()).map(|nth| self.sample(nth))
    }
}
