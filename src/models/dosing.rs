//! Dosing controllers.
//!
//! A dosing controller samples a signal generator once per simulation tick,
//! derives a time-varying replication rate from it, and propagates that rate
//! into the loaded replication model of every targeted cell. Two policies
//! are supported, selected at construction: gating the rate directly with
//! change detection, or suppressing it every tick. Oscillator selection is
//! an explicit configuration choice; building a [`DosingConfig`] with no
//! oscillator fails rather than defaulting silently.

mod core;

pub use self::core::{
    DosingConfig, DosingConfigError, DosingController, DosingPolicy, Oscillator, OscillatorChoice,
};
