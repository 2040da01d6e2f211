//! Two-state signal generators.
//!
//! A signal generator produces a scalar signal as a pure function of elapsed
//! simulation time, given a small set of configured periods and rates. The
//! generators here share the [`TwoStateOscillator`] state machine and differ
//! only in how the oscillator state maps onto the output value:
//!
//! - [`Sawtooth`]: 1.0 while the oscillator is high, 0.0 while low.
//! - [`PeriodicExpDecay`]: an exponential decay curve restarting at each
//!   oscillator transition.
//!
//! Generators are constructed with defaults and configured through setters;
//! every setter is effective on the next query. Internal state advances
//! lazily on each query, so callers are expected to query with increasing
//! time values. Non-monotonic queries are not validated: the state machine
//! never rewinds, and a stale result is the caller's responsibility.

mod exp_decay;
mod period;
mod sawtooth;
mod two_state;

pub use exp_decay::PeriodicExpDecay;
pub use period::Period;
pub use sawtooth::Sawtooth;
pub use two_state::TwoStateOscillator;

/// A scalar signal sampled at an elapsed simulation time.
///
/// Sampling takes `&mut self` because generators advance their internal
/// state machine lazily on each query.
pub trait Signal {
    /// Samples the signal at the given elapsed time.
    fn signal(&mut self, time: f64) -> f64;
}
