use std::collections::HashMap;

use tracing::{debug, warn};

use crate::support::host::{CellId, CellKind, CompileError, KineticIntegrator};

use super::{
    ReplicationParams, SECRETION, SECRETION_RATE, STATE_SYMBOLS, SecretionPolicy,
    StandardReplicationNetwork, UPTAKE, network::ReplicationNetwork, variables,
};

/// Per-cell lifecycle and variable access for the replication model.
///
/// The manager tracks which cells currently have a model loaded, (re)loads
/// models with fresh parameters, and removes them on cell death. All
/// named-variable access goes through it: names are resolved through the
/// alias table, and access to a missing variable or an unloaded model is a
/// logged, defaulted failure rather than an error — it happens routinely for
/// cell kinds that carry no model.
///
/// Stepping an unloaded cell, by contrast, is a caller bug and fails fast
/// with a panic; routine code checks [`is_loaded`](Self::is_loaded) first.
#[derive(Debug, Default)]
pub struct ReplicationManager<N = StandardReplicationNetwork> {
    network: N,
    policy: SecretionPolicy,
    loaded: HashMap<CellId, f64>,
}

impl ReplicationManager {
    /// A manager for the stock network with the default secretion policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N: ReplicationNetwork> ReplicationManager<N> {
    /// A manager for a substitute network generator and secretion policy.
    pub fn with_network(network: N, policy: SecretionPolicy) -> Self {
        Self {
            network,
            policy,
            loaded: HashMap::new(),
        }
    }

    /// Loads a replication model for `cell` with the given parameters.
    ///
    /// Any model already loaded for the cell is destroyed first, so exactly
    /// one instance is live per cell afterwards. Once bound, secretion is
    /// switched on or off according to the manager's [`SecretionPolicy`] and
    /// the cell's kind.
    ///
    /// # Errors
    ///
    /// Returns a [`CompileError`] if the host service rejects the generated
    /// network definition; the cell is left with no model in that case.
    pub fn load<E: KineticIntegrator>(
        &mut self,
        engine: &mut E,
        cell: CellId,
        kind: CellKind,
        step_size: f64,
        params: &ReplicationParams,
    ) -> Result<(), CompileError> {
        if self.loaded.remove(&cell).is_some() {
            engine.unbind(cell, self.network.name());
        }

        let definition = self.network.definition(params);
        engine.bind(cell, self.network.name(), &definition, step_size)?;
        self.loaded.insert(cell, step_size);
        debug!(cell = %cell, kind = ?kind, "loaded replication model");

        self.set_secretion_enabled(
            engine,
            cell,
            params.secretion_rate,
            self.policy.is_enabled(kind),
        );
        Ok(())
    }

    /// Removes the replication model for `cell`.
    ///
    /// Calling this on a cell with no model is a no-op.
    pub fn remove<E: KineticIntegrator>(&mut self, engine: &mut E, cell: CellId) {
        if self.loaded.remove(&cell).is_some() {
            engine.unbind(cell, self.network.name());
            debug!(cell = %cell, "removed replication model");
        }
    }

    /// Advances the cell's model by one integration step.
    ///
    /// # Panics
    ///
    /// Panics if no model is loaded for the cell. Routine code checks
    /// [`is_loaded`](Self::is_loaded) before stepping.
    pub fn step<E: KineticIntegrator>(&self, engine: &mut E, cell: CellId) {
        assert!(
            self.is_loaded(cell),
            "no replication model loaded for cell {cell}"
        );
        engine.timestep(cell, self.network.name());
    }

    /// Whether a replication model is currently loaded for `cell`.
    #[must_use]
    pub fn is_loaded(&self, cell: CellId) -> bool {
        self.loaded.contains_key(&cell)
    }

    /// The integration step size of the cell's loaded model.
    #[must_use]
    pub fn step_size(&self, cell: CellId) -> Option<f64> {
        self.loaded.get(&cell).copied()
    }

    /// Reads a model variable, accepting either a friendly name or a symbol.
    ///
    /// Returns 0.0 with a logged warning when the variable does not resolve
    /// in the cell's model, including when no model is loaded at all.
    pub fn value<E: KineticIntegrator>(&self, engine: &E, cell: CellId, name: &str) -> f64 {
        let symbol = variables::resolve(name).unwrap_or(name);
        match engine.value(cell, self.network.name(), symbol) {
            Ok(value) => value,
            Err(err) => {
                warn!(cell = %cell, symbol, %err, "replication model read failed, returning 0");
                0.0
            }
        }
    }

    /// Writes a model variable, accepting either a friendly name or a symbol.
    ///
    /// A write that does not resolve in the cell's model is a logged no-op.
    pub fn set_value<E: KineticIntegrator>(
        &self,
        engine: &mut E,
        cell: CellId,
        name: &str,
        value: f64,
    ) {
        let symbol = variables::resolve(name).unwrap_or(name);
        if let Err(err) = engine.set_value(cell, self.network.name(), symbol, value) {
            warn!(cell = %cell, symbol, %err, "replication model write failed, ignoring");
        }
    }

    /// Reads the `Secretion` accumulator and resets it to zero.
    ///
    /// Returns the pre-reset value; calling again without an intervening
    /// step or write returns 0.0.
    ///
    /// # Panics
    ///
    /// Panics if no model is loaded for the cell.
    pub fn drain_secretion<E: KineticIntegrator>(&self, engine: &mut E, cell: CellId) -> f64 {
        assert!(
            self.is_loaded(cell),
            "no replication model loaded for cell {cell}"
        );
        let secreted = self.value(engine, cell, SECRETION);
        self.set_value(engine, cell, SECRETION, 0.0);
        secreted
    }

    /// Sets the `Uptake` input port for the next integration step.
    pub fn set_uptake<E: KineticIntegrator>(&self, engine: &mut E, cell: CellId, uptake: f64) {
        self.set_value(engine, cell, UPTAKE, uptake);
    }

    /// Resets every state variable of the cell's model to zero.
    pub fn reset_variables<E: KineticIntegrator>(&self, engine: &mut E, cell: CellId) {
        for symbol in STATE_SYMBOLS {
            self.set_value(engine, cell, symbol, 0.0);
        }
    }

    /// Total viral load inside the cell: `rate * Uptake + A`.
    ///
    /// Combines the extracellular-uptake contribution, scaled by the model
    /// uptake rate, with the intracellular assembled load.
    pub fn internal_load<E: KineticIntegrator>(&self, engine: &E, cell: CellId, rate: f64) -> f64 {
        rate * self.value(engine, cell, UPTAKE) + self.value(engine, cell, variables::ASSEMBLED)
    }

    /// Switches the cell's releasing behavior without reloading the model.
    ///
    /// Sets the model's secretion rate to `rate` when enabled and to zero
    /// when disabled.
    pub fn set_secretion_enabled<E: KineticIntegrator>(
        &self,
        engine: &mut E,
        cell: CellId,
        rate: f64,
        enabled: bool,
    ) {
        let rate = if enabled { rate } else { 0.0 };
        self.set_value(engine, cell, SECRETION_RATE, rate);
    }
}
