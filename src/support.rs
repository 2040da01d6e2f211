//! Supporting utilities used by models.
//!
//! These modules are part of the public API because they're useful to host
//! adapters, but their APIs are not stable.

pub mod constraint;
pub mod host;
pub mod signal;
