use super::{Period, Signal, TwoStateOscillator};

/// Sawtooth periodic signal: 1.0 while high, 0.0 while low.
///
/// The signal holds its initial value until the end of the initial period,
/// then alternates phase-locked to that instant. See [`TwoStateOscillator`]
/// for the exact transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sawtooth {
    osc: TwoStateOscillator,
}

impl Sawtooth {
    /// Creates a sawtooth whose off and initial windows default to `on_time`.
    #[must_use]
    pub fn new(on_time: Period) -> Self {
        Self {
            osc: TwoStateOscillator::new(on_time),
        }
    }

    /// Sets the length of the high window.
    pub fn set_on_time(&mut self, on_time: Period) {
        self.osc.set_on_time(on_time);
    }

    /// Sets the length of the low window.
    pub fn set_off_time(&mut self, off_time: Period) {
        self.osc.set_off_time(off_time);
    }

    /// Sets the length of the initial period.
    pub fn set_init_time(&mut self, init_time: Period) {
        self.osc.set_init_time(init_time);
    }

    /// Sets the state held during the initial period.
    pub fn set_init_state(&mut self, init_state: bool) {
        self.osc.set_init_state(init_state);
    }

    /// Samples the signal at the given elapsed time.
    pub fn signal(&mut self, time: f64) -> f64 {
        self.osc.update(time);
        if self.osc.is_high() { 1.0 } else { 0.0 }
    }
}

impl Signal for Sawtooth {
    fn signal(&mut self, time: f64) -> f64 {
        Sawtooth::signal(self, time)
    }
}
