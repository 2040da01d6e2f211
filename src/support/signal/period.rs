use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// A duration used to configure a signal generator, in simulation seconds.
///
/// Periods gate the oscillator state machine, so a zero or negative period
/// is never meaningful; the constraint is enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Period(Constrained<f64, StrictlyPositive>);

impl Period {
    /// Creates a [`Period`] from a duration in seconds.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the duration is zero, negative, or `NaN`.
    pub fn new(seconds: f64) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(seconds)?))
    }

    /// The duration in seconds.
    #[must_use]
    pub fn seconds(&self) -> f64 {
        *self.0.as_ref()
    }
}

impl Deref for Period {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
