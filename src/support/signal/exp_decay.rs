use super::{Period, Signal, TwoStateOscillator};

/// Periodic exponential decay signal.
///
/// Returns 0.0 during the initial period. Afterwards the signal is
/// `exp(-decay_rate * (time - flip_time))`: a decay curve restarting at each
/// oscillator transition. Both oscillator windows are kept equal to
/// `on_time`, so the curve restarts once per `on_time` and the off window
/// plays no independent role in this variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicExpDecay {
    osc: TwoStateOscillator,
    decay_rate: f64,
}

impl Default for PeriodicExpDecay {
    /// One-second period and initial delay with a unit decay rate.
    fn default() -> Self {
        Self {
            osc: TwoStateOscillator::default(),
            decay_rate: 1.0,
        }
    }
}

impl PeriodicExpDecay {
    /// Creates a periodic decay whose initial delay defaults to `on_time`.
    #[must_use]
    pub fn new(on_time: Period) -> Self {
        Self {
            osc: TwoStateOscillator::new(on_time),
            decay_rate: 1.0,
        }
    }

    /// Sets the period of the signal.
    pub fn set_on_time(&mut self, on_time: Period) {
        self.osc.set_on_time(on_time);
        self.osc.set_off_time(on_time);
    }

    /// Sets the delay before the first instance of the signal.
    pub fn set_init_time(&mut self, init_time: Period) {
        self.osc.set_init_time(init_time);
    }

    /// Sets the decay rate of the signal, per second.
    pub fn set_decay_rate(&mut self, decay_rate: f64) {
        self.decay_rate = decay_rate;
    }

    /// Samples the signal at the given elapsed time.
    pub fn signal(&mut self, time: f64) -> f64 {
        self.osc.update(time);
        if self.osc.in_initial_period() {
            return 0.0;
        }
        (-self.decay_rate * (time - self.osc.flip_time())).exp()
    }
}

impl Signal for PeriodicExpDecay {
    fn signal(&mut self, time: f64) -> f64 {
        PeriodicExpDecay::signal(self, time)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn period(seconds: f64) -> Period {
        Period::new(seconds).unwrap()
    }

    #[test]
    fn zero_during_initial_period() {
        let mut decay = PeriodicExpDecay::new(period(2.0));
        decay.set_init_time(period(4.0));
        for t in [0.0, 1.0, 3.9] {
            assert_eq!(decay.signal(t), 0.0);
        }
    }

    #[test]
    fn unity_at_each_transition() {
        let mut decay = PeriodicExpDecay::new(period(2.0));
        decay.set_init_time(period(4.0));
        decay.set_decay_rate(0.5);

        // Exiting the initial period is the first transition.
        assert_relative_eq!(decay.signal(4.0), 1.0);

        // The next window expires just after t = 6; the curve restarts there.
        assert!(decay.signal(5.9) < 1.0);
        assert_relative_eq!(decay.signal(6.1), (-0.5 * 0.1f64).exp(), max_relative = 1e-12);
    }

    #[test]
    fn decays_monotonically_within_a_window() {
        let mut decay = PeriodicExpDecay::new(period(10.0));
        decay.set_decay_rate(0.3);

        let mut last = decay.signal(10.0);
        for t in [11.0, 13.0, 15.0, 18.0, 19.9] {
            let value = decay.signal(t);
            assert!(value < last);
            last = value;
        }
    }

    #[test]
    fn decay_curve_matches_rate() {
        let mut decay = PeriodicExpDecay::new(period(100.0));
        decay.set_decay_rate(1.0 / 4.0);

        decay.signal(100.0);
        assert_relative_eq!(decay.signal(104.0), (-1.0f64).exp());
        assert_relative_eq!(decay.signal(108.0), (-2.0f64).exp());
    }
}
