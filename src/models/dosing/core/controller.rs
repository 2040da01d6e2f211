use crate::{
    models::replication::{REPLICATING_RATE, ReplicationManager, ReplicationNetwork},
    support::{
        constraint::{Constrained, NonNegative},
        host::{CellKind, CellStore, KineticIntegrator},
        signal::Signal,
    },
};

/// How the sampled signal maps onto the replication rate, and when updates
/// are pushed into cell models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DosingPolicy {
    /// `rate = base_rate * signal`, pushed only when the rate differs from
    /// the last applied value. Comparison is exact; the first tick always
    /// pushes because no value has been applied yet.
    GateOnChange,

    /// `rate = base_rate * (1 - signal)`, pushed every tick.
    SuppressEveryTick,
}

impl DosingPolicy {
    /// Cell kinds targeted by default under this policy.
    ///
    /// Gating doses every epithelial cell that can host a model; suppression
    /// only reaches cells that already internalized virus.
    #[must_use]
    pub fn default_targets(self) -> &'static [CellKind] {
        match self {
            Self::GateOnChange => &[
                CellKind::Uninfected,
                CellKind::Infected,
                CellKind::VirusReleasing,
            ],
            Self::SuppressEveryTick => &[CellKind::Infected, CellKind::VirusReleasing],
        }
    }

    fn rate(self, base_rate: f64, signal: f64) -> f64 {
        match self {
            Self::GateOnChange => base_rate * signal,
            Self::SuppressEveryTick => base_rate * (1.0 - signal),
        }
    }
}

/// Per-tick controller propagating a time-varying replication rate.
///
/// Once per tick the controller samples its signal generator, derives the
/// current rate under its [`DosingPolicy`], and writes it into the
/// `replicating_rate` parameter of every targeted cell's loaded model.
#[derive(Debug)]
pub struct DosingController<S> {
    signal: S,
    policy: DosingPolicy,
    base_rate: f64,
    targets: Vec<CellKind>,
    last_applied: Option<f64>,
}

impl<S: Signal> DosingController<S> {
    /// Creates a controller with the policy's default targets.
    pub fn new(signal: S, policy: DosingPolicy, base_rate: Constrained<f64, NonNegative>) -> Self {
        Self {
            signal,
            policy,
            base_rate: base_rate.into_inner(),
            targets: policy.default_targets().to_vec(),
            last_applied: None,
        }
    }

    /// Replaces the targeted cell kinds.
    #[must_use]
    pub fn with_targets(mut self, targets: Vec<CellKind>) -> Self {
        self.targets = targets;
        self
    }

    /// The rate the policy derives from the signal at the given time.
    ///
    /// Sampling advances the signal generator's state machine.
    pub fn replicating_rate(&mut self, time: f64) -> f64 {
        let signal = self.signal.signal(time);
        self.policy.rate(self.base_rate, signal)
    }

    /// Runs one controller tick at the given elapsed time.
    ///
    /// Under [`DosingPolicy::GateOnChange`] the rate is pushed only when it
    /// differs from the last applied value; under
    /// [`DosingPolicy::SuppressEveryTick`] it is pushed unconditionally.
    pub fn tick<E, C, N>(
        &mut self,
        time: f64,
        engine: &mut E,
        store: &C,
        manager: &ReplicationManager<N>,
    ) where
        E: KineticIntegrator,
        C: CellStore,
        N: ReplicationNetwork,
    {
        let rate = self.replicating_rate(time);
        let push = match self.policy {
            DosingPolicy::GateOnChange => self.last_applied != Some(rate),
            DosingPolicy::SuppressEveryTick => true,
        };
        if push {
            for cell in store.cells_of(&self.targets) {
                manager.set_value(engine, cell, REPLICATING_RATE, rate);
            }
        }
        self.last_applied = Some(rate);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        models::replication::ReplicationParams,
        support::host::{
            CellId,
            test_support::{EulerIntegrator, TestStore},
        },
    };

    use super::*;

    /// Signal returning a scripted sequence of values, one per query.
    struct Scripted {
        values: Vec<f64>,
        next: usize,
    }

    impl Scripted {
        fn new(values: &[f64]) -> Self {
            Self {
                values: values.to_vec(),
                next: 0,
            }
        }
    }

    impl Signal for Scripted {
        fn signal(&mut self, _time: f64) -> f64 {
            let value = self.values[self.next];
            self.next += 1;
            value
        }
    }

    const CELL: CellId = CellId(1);

    fn base_rate(value: f64) -> Constrained<f64, NonNegative> {
        NonNegative::new(value).unwrap()
    }

    fn infected_world() -> (EulerIntegrator, TestStore, ReplicationManager) {
        let mut engine = EulerIntegrator::new();
        let mut store = TestStore::new();
        store.add(CELL, CellKind::Infected);
        let mut manager = ReplicationManager::new();
        manager
            .load(
                &mut engine,
                CELL,
                CellKind::Infected,
                0.01,
                &ReplicationParams::default(),
            )
            .unwrap();
        (engine, store, manager)
    }

    #[test]
    fn gate_on_change_pushes_only_on_changes() {
        let (mut engine, store, manager) = infected_world();
        let mut controller = DosingController::new(
            Scripted::new(&[0.5, 0.5, 0.9]),
            DosingPolicy::GateOnChange,
            base_rate(2.0),
        );

        // Tick 1: nothing applied yet, so 2.0 * 0.5 is pushed.
        controller.tick(0.0, &mut engine, &store, &manager);
        assert_eq!(manager.value(&engine, CELL, REPLICATING_RATE), 1.0);

        // Tick 2: same rate; overwrite a sentinel to prove no push happens.
        manager.set_value(&mut engine, CELL, REPLICATING_RATE, -123.0);
        controller.tick(1.0, &mut engine, &store, &manager);
        assert_eq!(manager.value(&engine, CELL, REPLICATING_RATE), -123.0);

        // Tick 3: 0.5 -> 0.9 changes the rate, so 1.8 is pushed.
        controller.tick(2.0, &mut engine, &store, &manager);
        assert_eq!(manager.value(&engine, CELL, REPLICATING_RATE), 1.8);
    }

    #[test]
    fn suppress_pushes_every_tick() {
        let (mut engine, store, manager) = infected_world();
        let mut controller = DosingController::new(
            Scripted::new(&[0.25, 0.25]),
            DosingPolicy::SuppressEveryTick,
            base_rate(2.0),
        );

        // rate = 2.0 * (1 - 0.25)
        controller.tick(0.0, &mut engine, &store, &manager);
        assert_eq!(manager.value(&engine, CELL, REPLICATING_RATE), 1.5);

        // Unchanged signal still overwrites the sentinel.
        manager.set_value(&mut engine, CELL, REPLICATING_RATE, -123.0);
        controller.tick(1.0, &mut engine, &store, &manager);
        assert_eq!(manager.value(&engine, CELL, REPLICATING_RATE), 1.5);
    }

    #[test]
    fn only_targeted_kinds_are_updated() {
        let (mut engine, mut store, mut manager) = infected_world();
        let bystander = CellId(2);
        store.add(bystander, CellKind::Uninfected);
        manager
            .load(
                &mut engine,
                bystander,
                CellKind::Uninfected,
                0.01,
                &ReplicationParams::default(),
            )
            .unwrap();

        let mut controller = DosingController::new(
            Scripted::new(&[1.0]),
            DosingPolicy::SuppressEveryTick,
            base_rate(2.0),
        );
        controller.tick(0.0, &mut engine, &store, &manager);

        // Suppression targets infected and releasing cells only.
        assert_eq!(manager.value(&engine, CELL, REPLICATING_RATE), 0.0);
        assert_eq!(manager.value(&engine, bystander, REPLICATING_RATE), 0.0);

        manager.set_value(&mut engine, bystander, REPLICATING_RATE, 7.0);
        let mut controller = DosingController::new(
            Scripted::new(&[1.0]),
            DosingPolicy::SuppressEveryTick,
            base_rate(2.0),
        );
        controller.tick(0.0, &mut engine, &store, &manager);
        assert_eq!(manager.value(&engine, bystander, REPLICATING_RATE), 7.0);
    }
}
