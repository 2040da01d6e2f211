use std::fmt;

/// Identity of a cell in the host's inventory.
///
/// The host assigns ids; this crate only keys its per-cell state by them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub u64);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cell type tags relevant to the infection models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Epithelial cell with no internalized virus.
    Uninfected,
    /// Epithelial cell with internalized virus, not yet releasing.
    Infected,
    /// Epithelial cell actively releasing assembled virus.
    VirusReleasing,
    /// Cell committed to death; carries no kinetic model.
    Dying,
    /// Recruited immune cell.
    Immune,
}

/// Host-side cell inventory.
///
/// Cells are created and destroyed by the host; this crate only reads their
/// kind and enumerates them for bulk parameter updates.
pub trait CellStore {
    /// The kind of a cell, if it still exists.
    fn kind(&self, cell: CellId) -> Option<CellKind>;

    /// All live cells whose kind is in `kinds`.
    fn cells_of(&self, kinds: &[CellKind]) -> Vec<CellId>;
}
