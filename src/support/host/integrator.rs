use thiserror::Error;

use super::CellId;

/// A network definition failed to compile in the host's integration service.
#[derive(Debug, Error)]
#[error("model `{model}` failed to compile: {reason}")]
pub struct CompileError {
    /// Name of the model that failed.
    pub model: String,

    /// Service-reported reason for the failure.
    pub reason: String,
}

/// Named-symbol access on a bound model failed.
///
/// Both variants occur routinely during normal operation (for example, when
/// a model is not loaded for a given cell kind) and are handled by the model
/// access layer with a logged fallback; they never propagate above it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// The compiled network defines no symbol with this name.
    #[error("model `{model}` defines no symbol `{symbol}`")]
    UnknownSymbol {
        /// Name of the model that was queried.
        model: String,

        /// The symbol that failed to resolve.
        symbol: String,
    },

    /// No model with this name is bound to the cell.
    #[error("cell {cell} has no model `{model}` bound")]
    NotBound {
        /// The cell that was queried.
        cell: CellId,

        /// Name of the model that was expected.
        model: String,
    },
}

/// The host's ODE integration service.
///
/// Given a textual network definition and a name, the service compiles the
/// network and maintains independent numeric state per bound cell. Symbol
/// access must distinguish an unknown name from an unbound model via
/// [`SymbolError`], which the model access layer maps to a logged default.
pub trait KineticIntegrator {
    /// Compiles `definition` and binds it to `cell` under `model`, with the
    /// given integration step size.
    ///
    /// Binding over an existing (cell, model) pair replaces it.
    ///
    /// # Errors
    ///
    /// Returns a [`CompileError`] if the definition does not compile.
    fn bind(
        &mut self,
        cell: CellId,
        model: &str,
        definition: &str,
        step_size: f64,
    ) -> Result<(), CompileError>;

    /// Destroys the model state bound to `cell` under `model`, if any.
    fn unbind(&mut self, cell: CellId, model: &str);

    /// Advances the bound model by one step of its configured step size.
    ///
    /// Callers check that the model is bound first; stepping an unbound
    /// model is a precondition violation and implementations may panic.
    fn timestep(&mut self, cell: CellId, model: &str);

    /// Reads a named symbol from the bound model.
    ///
    /// # Errors
    ///
    /// Returns a [`SymbolError`] if the model is not bound to the cell or
    /// the symbol does not exist in the compiled network.
    fn value(&self, cell: CellId, model: &str, symbol: &str) -> Result<f64, SymbolError>;

    /// Writes a named symbol in the bound model.
    ///
    /// # Errors
    ///
    /// Returns a [`SymbolError`] if the model is not bound to the cell or
    /// the symbol does not exist in the compiled network.
    fn set_value(
        &mut self,
        cell: CellId,
        model: &str,
        symbol: &str,
        value: f64,
    ) -> Result<(), SymbolError>;
}
