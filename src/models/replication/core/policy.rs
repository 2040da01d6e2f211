use crate::support::host::CellKind;

/// Table deciding which cell kinds have secretion enabled on model load.
///
/// Loading a replication model ends by switching secretion on or off based
/// on the cell's kind; this table makes that policy explicit rather than
/// hard-coding kind comparisons in the manager.
#[derive(Debug, Clone, PartialEq)]
pub struct SecretionPolicy {
    enabled: Vec<CellKind>,
}

impl Default for SecretionPolicy {
    /// Only actively releasing cells secrete.
    fn default() -> Self {
        Self {
            enabled: vec![CellKind::VirusReleasing],
        }
    }
}

impl SecretionPolicy {
    /// A policy enabling secretion for exactly the given kinds.
    pub fn enabling(kinds: impl IntoIterator<Item = CellKind>) -> Self {
        Self {
            enabled: kinds.into_iter().collect(),
        }
    }

    /// Whether cells of this kind secrete.
    #[must_use]
    pub fn is_enabled(&self, kind: CellKind) -> bool {
        self.enabled.contains(&kind)
    }
}
