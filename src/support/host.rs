//! Contracts this crate requires of the host simulation engine.
//!
//! The host owns the cellular-Potts lattice, the diffusion fields, and the
//! ODE integration service. The traits here capture only the surface the
//! kinetic models need: a [`KineticIntegrator`] that compiles a textual
//! network definition and exposes named-symbol access per cell, and a
//! [`CellStore`] that enumerates cells by kind.

mod cells;
mod integrator;

#[cfg(test)]
pub(crate) mod test_support;

pub use cells::{CellId, CellKind, CellStore};
pub use integrator::{CompileError, KineticIntegrator, SymbolError};
