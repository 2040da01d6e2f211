//! Viral replication kinetic model.
//!
//! A small reaction network describing the intracellular viral lifecycle:
//! unpacking, replication, packing, assembly, and secretion, fed by an
//! `Uptake` input port and drained through a `Secretion` output port. The
//! network text is generated per cell from [`ReplicationParams`] and handed
//! to the host's integration service; [`ReplicationManager`] owns the
//! per-cell lifecycle and all named-variable access.

mod core;

pub use self::core::{
    ASSEMBLED, MODEL_NAME, REPLICATING_RATE, ReplicationManager, ReplicationNetwork,
    ReplicationParams, SECRETION, SECRETION_RATE, STATE_SYMBOLS, SecretionPolicy,
    StandardReplicationNetwork, UPTAKE, resolve,
};
