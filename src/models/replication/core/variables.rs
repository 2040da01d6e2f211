//! Symbols and friendly-name aliases for the replication network.

/// The `Uptake` input port. Set by the caller before each step.
pub const UPTAKE: &str = "Uptake";

/// The `Secretion` output accumulator. Drained by the caller after reads.
pub const SECRETION: &str = "Secretion";

/// The assembled load state variable.
pub const ASSEMBLED: &str = "A";

/// The secretion rate constant; written to switch releasing behavior.
pub const SECRETION_RATE: &str = "secretion_rate";

/// The replication rate constant; written by the dosing controllers.
pub const REPLICATING_RATE: &str = "replicating_rate";

/// Every state variable of the replication network.
pub const STATE_SYMBOLS: [&str; 6] = ["U", "R", "P", "A", UPTAKE, SECRETION];

/// Resolves a friendly variable name to its network symbol.
///
/// Returns `None` when the name is not a known alias; callers substitute the
/// queried name itself in that case, so canonical symbols and rate-constant
/// names pass through to the integration service unchanged.
#[must_use]
pub fn resolve(name: &str) -> Option<&'static str> {
    match name {
        "Unpacking" => Some("U"),
        "Replicating" => Some("R"),
        "Packing" => Some("P"),
        "Assembled" => Some(ASSEMBLED),
        _ => None,
    }
}
