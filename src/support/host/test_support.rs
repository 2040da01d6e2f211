//! In-memory host stand-ins for tests.
//!
//! The real host supplies an Antimony/SBML integration service. The
//! [`EulerIntegrator`] here recognizes the two stock networks by name, reads
//! their rate constants and initial values from the assignment lines of the
//! definition text, and steps them with forward Euler. That is enough to
//! exercise binding, symbol access, and short integration scenarios.

use std::collections::BTreeMap;

use crate::models::{recruitment, replication};

use super::{CellId, CellKind, CellStore, CompileError, KineticIntegrator, SymbolError};

#[derive(Debug, Clone)]
struct BoundModel {
    step_size: f64,
    vars: BTreeMap<String, f64>,
}

/// Forward-Euler stand-in for the host's integration service.
#[derive(Debug, Default)]
pub(crate) struct EulerIntegrator {
    bound: BTreeMap<(CellId, String), BoundModel>,
}

impl EulerIntegrator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of models currently bound to `cell`.
    pub(crate) fn bound_count(&self, cell: CellId) -> usize {
        self.bound.keys().filter(|(id, _)| *id == cell).count()
    }
}

/// Extracts `symbol = value;` assignments from a network definition.
fn parse_assignments(model: &str, definition: &str) -> Result<BTreeMap<String, f64>, CompileError> {
    let mut vars = BTreeMap::new();
    for line in definition.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("model ") || line == "end" || line.contains("->") {
            continue;
        }
        let Some((name, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().trim_end_matches(';').trim();
        let value: f64 = value.parse().map_err(|_| CompileError {
            model: model.to_string(),
            reason: format!("bad assignment: {line}"),
        })?;
        vars.insert(name.trim().to_string(), value);
    }
    Ok(vars)
}

fn euler_step(model: &str, dt: f64, vars: &mut BTreeMap<String, f64>) {
    let v = |vars: &BTreeMap<String, f64>, name: &str| vars.get(name).copied().unwrap_or(0.0);

    if model == replication::MODEL_NAME {
        let u = v(vars, "U");
        let r = v(vars, "R");
        let p = v(vars, "P");
        let a = v(vars, "A");
        let uptake = v(vars, "Uptake");

        let unpacking = v(vars, "unpacking_rate");
        let replicating = v(vars, "replicating_rate");
        let r_half = v(vars, "r_half");
        let translating = v(vars, "translating_rate");
        let packing = v(vars, "packing_rate");
        let secretion = v(vars, "secretion_rate");

        let growth = if r_half + r == 0.0 {
            0.0
        } else {
            replicating * r_half * r / (r_half + r)
        };

        vars.insert("U".into(), u + dt * (uptake - unpacking * u));
        vars.insert("R".into(), r + dt * (unpacking * u + growth - translating * r));
        vars.insert("P".into(), p + dt * (translating * r - packing * p));
        vars.insert("A".into(), a + dt * (packing * p - secretion * a));
        let secreted = v(vars, "Secretion");
        vars.insert("Secretion".into(), secreted + dt * secretion * a);
    } else if model == recruitment::MODEL_NAME {
        let s = v(vars, "S");
        let delayed = if v(vars, "delayRate") == 0.0 {
            0.0
        } else {
            v(vars, "totalCytokine") / v(vars, "delayRate")
        };
        let ds = v(vars, "addRate") + delayed
            - v(vars, "subRate") * v(vars, "numImmuneCells")
            - v(vars, "decayRate") * s;
        vars.insert("S".into(), s + dt * ds);
    }
}

impl KineticIntegrator for EulerIntegrator {
    fn bind(
        &mut self,
        cell: CellId,
        model: &str,
        definition: &str,
        step_size: f64,
    ) -> Result<(), CompileError> {
        if model != replication::MODEL_NAME && model != recruitment::MODEL_NAME {
            return Err(CompileError {
                model: model.to_string(),
                reason: "no Euler kernel for this network".to_string(),
            });
        }
        let vars = parse_assignments(model, definition)?;
        self.bound
            .insert((cell, model.to_string()), BoundModel { step_size, vars });
        Ok(())
    }

    fn unbind(&mut self, cell: CellId, model: &str) {
        self.bound.remove(&(cell, model.to_string()));
    }

    fn timestep(&mut self, cell: CellId, model: &str) {
        let bound = self
            .bound
            .get_mut(&(cell, model.to_string()))
            .expect("timestep on unbound model");
        euler_step(model, bound.step_size, &mut bound.vars);
    }

    fn value(&self, cell: CellId, model: &str, symbol: &str) -> Result<f64, SymbolError> {
        let bound =
            self.bound
                .get(&(cell, model.to_string()))
                .ok_or_else(|| SymbolError::NotBound {
                    cell,
                    model: model.to_string(),
                })?;
        bound
            .vars
            .get(symbol)
            .copied()
            .ok_or_else(|| SymbolError::UnknownSymbol {
                model: model.to_string(),
                symbol: symbol.to_string(),
            })
    }

    fn set_value(
        &mut self,
        cell: CellId,
        model: &str,
        symbol: &str,
        value: f64,
    ) -> Result<(), SymbolError> {
        let bound = self.bound.get_mut(&(cell, model.to_string())).ok_or_else(|| {
            SymbolError::NotBound {
                cell,
                model: model.to_string(),
            }
        })?;
        match bound.vars.get_mut(symbol) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(SymbolError::UnknownSymbol {
                model: model.to_string(),
                symbol: symbol.to_string(),
            }),
        }
    }
}

/// Vec-backed cell inventory for tests.
#[derive(Debug, Default)]
pub(crate) struct TestStore {
    cells: Vec<(CellId, CellKind)>,
}

impl TestStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, cell: CellId, kind: CellKind) {
        self.cells.push((cell, kind));
    }
}

impl CellStore for TestStore {
    fn kind(&self, cell: CellId) -> Option<CellKind> {
        self.cells
            .iter()
            .find(|(id, _)| *id == cell)
            .map(|(_, kind)| *kind)
    }

    fn cells_of(&self, kinds: &[CellKind]) -> Vec<CellId> {
        self.cells
            .iter()
            .filter(|(_, kind)| kinds.contains(kind))
            .map(|(id, _)| *id)
            .collect()
    }
}
