//! Immune recruitment kinetic model.
//!
//! A single-variable network tracking a tissue-level recruitment signal `S`:
//!
//! ```text
//! dS/dt = add_rate + total_cytokine / delay_rate
//!         - sub_rate * num_immune_cells - decay_rate * S
//! ```
//!
//! The host adds immune cells with a probability that is non-zero for
//! `S > 0` and removes them with a probability that is non-zero for `S < 0`.
//! Unlike the replication model there is one instance for the whole tissue;
//! the host rebinds or updates the [`TOTAL_CYTOKINE`] and
//! [`NUM_IMMUNE_CELLS`] inputs as the simulation evolves.

mod core;

pub use self::core::{
    MODEL_NAME, NUM_IMMUNE_CELLS, RecruitmentParams, STATE, TOTAL_CYTOKINE, definition,
};
