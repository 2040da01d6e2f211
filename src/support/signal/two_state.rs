use super::Period;

/// Shared state machine for two-state periodic signals.
///
/// The oscillator holds its configured initial state until elapsed time
/// reaches the initial period, then leaves it permanently for the opposite
/// state, recording the transition time as the flip time. From there it
/// alternates: the high state lasts `on_time`, the low state lasts
/// `off_time`, with each observed expiry advancing the flip time by the
/// corresponding window length rather than snapping to the query time. This
/// keeps the phase locked to the end of the initial period even when queries
/// are sparse.
///
/// The flip time advances by at most one window per query, so query gaps
/// longer than a full window drop cycles instead of catching up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoStateOscillator {
    on_time: f64,
    off_time: f64,
    init_time: f64,
    init_state: bool,
    state: bool,
    flip_time: f64,
    initial_period: bool,
}

impl Default for TwoStateOscillator {
    /// One-second windows, starting high, with a one-second initial period.
    fn default() -> Self {
        Self {
            on_time: 1.0,
            off_time: 1.0,
            init_time: 1.0,
            init_state: true,
            state: true,
            flip_time: 1.0,
            initial_period: true,
        }
    }
}

impl TwoStateOscillator {
    /// Creates an oscillator whose off and initial windows default to `on_time`.
    #[must_use]
    pub fn new(on_time: Period) -> Self {
        Self {
            on_time: *on_time,
            off_time: *on_time,
            init_time: *on_time,
            init_state: true,
            state: true,
            flip_time: *on_time,
            initial_period: true,
        }
    }

    /// Sets the length of the high window.
    pub fn set_on_time(&mut self, on_time: Period) {
        self.on_time = *on_time;
    }

    /// Sets the length of the low window.
    pub fn set_off_time(&mut self, off_time: Period) {
        self.off_time = *off_time;
    }

    /// Sets the length of the initial period.
    pub fn set_init_time(&mut self, init_time: Period) {
        self.init_time = *init_time;
    }

    /// Sets the state held during the initial period.
    ///
    /// While the oscillator is still inside the initial period this also
    /// updates the live state, so the next query reflects the change.
    pub fn set_init_state(&mut self, init_state: bool) {
        self.init_state = init_state;
        if self.initial_period {
            self.state = init_state;
        }
    }

    /// True while the oscillator is in its high state.
    #[must_use]
    pub fn is_high(&self) -> bool {
        self.state
    }

    /// True until the first query at or past the initial period.
    #[must_use]
    pub fn in_initial_period(&self) -> bool {
        self.initial_period
    }

    /// The time of the most recent state transition.
    #[must_use]
    pub fn flip_time(&self) -> f64 {
        self.flip_time
    }

    /// Advances the state machine to the given elapsed time.
    ///
    /// Runs on every signal query regardless of the output mapping.
    pub fn update(&mut self, time: f64) {
        if self.initial_period {
            if time < self.init_time {
                self.state = self.init_state;
            } else {
                self.state = !self.init_state;
                self.initial_period = false;
                self.flip_time = self.init_time;
            }
        } else if self.state {
            if self.flip_time + self.on_time < time {
                self.state = false;
                self.flip_time += self.on_time;
            }
        } else if self.flip_time + self.off_time < time {
            self.state = true;
            self.flip_time += self.off_time;
        }
    }
}
