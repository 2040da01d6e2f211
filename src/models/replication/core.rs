//! Core logic for the viral replication model.

mod manager;
mod network;
mod params;
mod policy;
mod variables;

pub use manager::ReplicationManager;
pub use network::{MODEL_NAME, ReplicationNetwork, StandardReplicationNetwork};
pub use params::ReplicationParams;
pub use policy::SecretionPolicy;
pub use variables::{
    ASSEMBLED, REPLICATING_RATE, SECRETION, SECRETION_RATE, STATE_SYMBOLS, UPTAKE, resolve,
};
