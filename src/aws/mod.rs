//! AWS EC2 instance catalog
//!
//! A static, ordered table of EC2 instance types and what each one ships with.
//!
//! ## Module Organization
//!
//! - `types`: record and device types (`InstanceTypeInfo`, `EphemeralDevice`)
//! - `machine_types`: the table itself, name lookup and JSON export
//! - `ephemeral`: instance-store device naming (`/dev/sdc`, `/dev/sdd`, ...)
//!
//! The table is a `static` slice, so lookups need no initialization and are
//! safe from any thread.

mod ephemeral;
mod machine_types;
mod types;

pub use ephemeral::{device_letter, ephemeral_devices_for, MAX_EPHEMERAL_DEVICES};
pub use machine_types::{
    get_machine_type_info, machine_types, machine_types_json, BURSTABLE_CREDITS_TO_ECUS,
};
pub use types::{EphemeralDevice, InstanceTypeInfo};
