//! Core logic for the dosing controllers.

mod config;
mod controller;

pub use config::{DosingConfig, DosingConfigError, Oscillator, OscillatorChoice};
pub use controller::{DosingController, DosingPolicy};
