//! Route-specific data types.
//!
//! Each submodule holds the DTOs for one chart the frontend renders. The
//! types are consolidated and re-exported through [`crate::api`].

pub mod envelope;
pub mod projection;
pub mod snapshot;
