//! # VTM Models
//!
//! Intracellular kinetic models and model-building tools for cellular-Potts
//! virtual-tissue simulations of viral infection.
//!
//! This crate is a plugin library hosted by an external multicellular
//! simulation engine. It owns the generation, loading, stepping, and
//! variable access of small ODE-based reaction networks attached per cell,
//! plus the signal generators and dosing controllers that modulate those
//! networks over time. The lattice solver, the diffusion fields, and the ODE
//! integration service itself belong to the host; the surface this crate
//! requires of the host is captured by the traits in [`support::host`].
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific kinetic models and controllers.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
