//! Public kinetic models and controllers.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized by the role they play in the infection simulation:
//! the intracellular [`replication`] network, the tissue-level
//! [`recruitment`] network, and the [`dosing`] controllers that modulate
//! model parameters over simulation time.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the actual computation and domain logic lives. The names
//! a host adapter needs are re-exported from the model's top-level module;
//! the `core` layout itself is an implementation detail.

pub mod dosing;
pub mod recruitment;
pub mod replication;
