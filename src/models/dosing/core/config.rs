use thiserror::Error;

use crate::support::{
    constraint::{Constrained, NonNegative},
    host::CellKind,
    signal::{Period, PeriodicExpDecay, Sawtooth, Signal},
};

use super::{DosingController, DosingPolicy};

/// Errors raised while building a dosing controller.
#[derive(Debug, Error)]
pub enum DosingConfigError {
    /// Neither oscillator variant was selected.
    ///
    /// The choice is deliberate operator input; there is no silent default.
    #[error("no dosing oscillator selected; choose sawtooth or exponential decay")]
    NoOscillatorSelected,
}

/// Oscillator selection and parameters for a dosing schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OscillatorChoice {
    /// On/off dosing windows gating the replication rate directly.
    Sawtooth {
        /// Length of the high window, in seconds.
        on_time: Period,
        /// Length of the low window, in seconds.
        off_time: Period,
        /// State held during the initial period.
        init_state: bool,
        /// Length of the initial period, in seconds.
        init_time: Period,
    },

    /// Dose pulses with exponential washout suppressing the replication rate.
    ExpDecay {
        /// Period between doses, in seconds.
        on_time: Period,
        /// Delay before the first dose, in seconds.
        init_time: Period,
        /// Washout rate of a dose, per second.
        decay_rate: f64,
    },
}

/// A configured oscillator, either variant behind one [`Signal`] type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Oscillator {
    Sawtooth(Sawtooth),
    ExpDecay(PeriodicExpDecay),
}

impl Signal for Oscillator {
    fn signal(&mut self, time: f64) -> f64 {
        match self {
            Self::Sawtooth(osc) => osc.signal(time),
            Self::ExpDecay(osc) => osc.signal(time),
        }
    }
}

impl From<OscillatorChoice> for Oscillator {
    fn from(choice: OscillatorChoice) -> Self {
        match choice {
            OscillatorChoice::Sawtooth {
                on_time,
                off_time,
                init_state,
                init_time,
            } => {
                let mut osc = Sawtooth::new(on_time);
                osc.set_off_time(off_time);
                osc.set_init_state(init_state);
                osc.set_init_time(init_time);
                Self::Sawtooth(osc)
            }
            OscillatorChoice::ExpDecay {
                on_time,
                init_time,
                decay_rate,
            } => {
                let mut osc = PeriodicExpDecay::new(on_time);
                osc.set_init_time(init_time);
                osc.set_decay_rate(decay_rate);
                Self::ExpDecay(osc)
            }
        }
    }
}

impl OscillatorChoice {
    /// The dosing policy conventionally paired with this oscillator.
    ///
    /// Sawtooth windows gate the rate directly and only changes need to be
    /// pushed; decaying doses suppress the rate continuously, so every tick
    /// pushes.
    #[must_use]
    pub fn policy(&self) -> DosingPolicy {
        match self {
            Self::Sawtooth { .. } => DosingPolicy::GateOnChange,
            Self::ExpDecay { .. } => DosingPolicy::SuppressEveryTick,
        }
    }
}

/// Configuration for a dosing controller.
#[derive(Debug, Clone)]
pub struct DosingConfig {
    /// The replication rate when dosing does not attenuate it.
    pub base_rate: Constrained<f64, NonNegative>,

    /// Which oscillator drives the schedule. Must be set.
    pub oscillator: Option<OscillatorChoice>,

    /// Targeted cell kinds; defaults from the policy when `None`.
    pub targets: Option<Vec<CellKind>>,
}

impl DosingConfig {
    /// Builds the controller for the selected oscillator and its policy.
    ///
    /// # Errors
    ///
    /// Returns [`DosingConfigError::NoOscillatorSelected`] when no
    /// oscillator was configured.
    pub fn build(self) -> Result<DosingController<Oscillator>, DosingConfigError> {
        let choice = self
            .oscillator
            .ok_or(DosingConfigError::NoOscillatorSelected)?;
        let controller =
            DosingController::new(Oscillator::from(choice), choice.policy(), self.base_rate);
        Ok(match self.targets {
            Some(targets) => controller.with_targets(targets),
            None => controller,
        })
    }
}
