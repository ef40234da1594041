//! machinetypes library
//!
//! Static catalog of AWS EC2 instance types and the ephemeral block devices
//! each type exposes.

pub mod aws;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use aws::{get_machine_type_info, EphemeralDevice, InstanceTypeInfo};
pub use error::{CatalogError, Result};
