//! EC2 instance type table and lookup

use tracing::debug;

use super::types::InstanceTypeInfo;
use crate::error::{CatalogError, Result};

/// ECUs per CPU credit per hour for burstable types.
///
/// One vCPU is roughly 3 ECUs, and running one vCPU flat out for an hour
/// spends 60 CPU credits.
pub const BURSTABLE_CREDITS_TO_ECUS: f32 = 3.0 / 60.0;

/// Look up an instance type by exact, case-sensitive name.
pub fn get_machine_type_info(machine_type: &str) -> Result<&'static InstanceTypeInfo> {
    match MACHINE_TYPES.iter().find(|m| m.name == machine_type) {
        Some(info) => {
            debug!(instance_type = machine_type, "resolved instance type");
            Ok(info)
        }
        None => {
            debug!(instance_type = machine_type, "instance type not in catalog");
            Err(CatalogError::InstanceTypeNotFound {
                instance_type: machine_type.to_string(),
            })
        }
    }
}

/// Every known instance type, in table order.
pub fn machine_types() -> &'static [InstanceTypeInfo] {
    MACHINE_TYPES
}

/// The whole table as pretty-printed JSON.
pub fn machine_types_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(MACHINE_TYPES)?)
}

// Listed out by hand: the exceptions outnumber any rule that would generate it.
static MACHINE_TYPES: &[InstanceTypeInfo] = &[
    // t2 family
    InstanceTypeInfo {
        name: "t2.nano",
        memory_gb: 0.5,
        ecu: 3.0 * BURSTABLE_CREDITS_TO_ECUS,
        cores: 1,
        ephemeral_disks: &[],
        burstable: true,
    },
    InstanceTypeInfo {
        name: "t2.micro",
        memory_gb: 1.0,
        ecu: 6.0 * BURSTABLE_CREDITS_TO_ECUS,
        cores: 1,
        ephemeral_disks: &[],
        burstable: true,
    },
    InstanceTypeInfo {
        name: "t2.small",
        memory_gb: 2.0,
        ecu: 12.0 * BURSTABLE_CREDITS_TO_ECUS,
        cores: 1,
        ephemeral_disks: &[],
        burstable: true,
    },
    InstanceTypeInfo {
        name: "t2.medium",
        memory_gb: 4.0,
        ecu: 24.0 * BURSTABLE_CREDITS_TO_ECUS,
        cores: 2,
        ephemeral_disks: &[],
        burstable: true,
    },
    InstanceTypeInfo {
        name: "t2.large",
        memory_gb: 8.0,
        ecu: 36.0 * BURSTABLE_CREDITS_TO_ECUS,
        cores: 2,
        ephemeral_disks: &[],
        burstable: true,
    },
    // m3 family
    InstanceTypeInfo {
        name: "m3.medium",
        memory_gb: 3.75,
        ecu: 3.0,
        cores: 1,
        ephemeral_disks: &[4],
        burstable: false,
    },
    InstanceTypeInfo {
        name: "m3.large",
        memory_gb: 7.5,
        ecu: 6.5,
        cores: 2,
        ephemeral_disks: &[32],
        burstable: false,
    },
    InstanceTypeInfo {
        name: "m3.xlarge",
        memory_gb: 15.0,
        ecu: 13.0,
        cores: 4,
        ephemeral_disks: &[40, 40],
        burstable: false,
    },
    InstanceTypeInfo {
        name: "m3.2xlarge",
        memory_gb: 30.0,
        ecu: 26.0,
        cores: 8,
        ephemeral_disks: &[80, 80],
        burstable: false,
    },
    // m4 family
    InstanceTypeInfo {
        name: "m4.large",
        memory_gb: 8.0,
        ecu: 6.5,
        cores: 2,
        ephemeral_disks: &[],
        burstable: false,
    },
    InstanceTypeInfo {
        name: "m4.xlarge",
        memory_gb: 16.0,
        ecu: 13.0,
        cores: 4,
        ephemeral_disks: &[],
        burstable: false,
    },
    InstanceTypeInfo {
        name: "m4.2xlarge",
        memory_gb: 32.0,
        ecu: 26.0,
        cores: 8,
        ephemeral_disks: &[],
        burstable: false,
    },
    InstanceTypeInfo {
        name: "m4.4xlarge",
        memory_gb: 64.0,
        ecu: 53.5,
        cores: 16,
        ephemeral_disks: &[],
        burstable: false,
    },
    InstanceTypeInfo {
        name: "m4.10xlarge",
        memory_gb: 160.0,
        ecu: 124.5,
        cores: 40,
        ephemeral_disks: &[],
        burstable: false,
    },
    // c3 family
    InstanceTypeInfo {
        name: "c3.large",
        memory_gb: 3.75,
        ecu: 7.0,
        cores: 2,
        ephemeral_disks: &[16, 16],
        burstable: false,
    },
    InstanceTypeInfo {
        name: "c3.xlarge",
        memory_gb: 7.5,
        ecu: 14.0,
        cores: 4,
        ephemeral_disks: &[40, 40],
        burstable: false,
    },
    InstanceTypeInfo {
        name: "c3.2xlarge",
        memory_gb: 15.0,
        ecu: 28.0,
        cores: 8,
        ephemeral_disks: &[80, 80],
        burstable: false,
    },
    InstanceTypeInfo {
        name: "c3.4xlarge",
        memory_gb: 30.0,
        ecu: 55.0,
        cores: 16,
        ephemeral_disks: &[160, 160],
        burstable: false,
    },
    InstanceTypeInfo {
        name: "c3.8xlarge",
        memory_gb: 60.0,
        ecu: 108.0,
        cores: 32,
        ephemeral_disks: &[320, 320],
        burstable: false,
    },
    // c4 family
    InstanceTypeInfo {
        name: "c4.large",
        memory_gb: 3.75,
        ecu: 8.0,
        cores: 2,
        ephemeral_disks: &[],
        burstable: false,
    },
    InstanceTypeInfo {
        name: "c4.xlarge",
        memory_gb: 7.5,
        ecu: 16.0,
        cores: 4,
        ephemeral_disks: &[],
        burstable: false,
    },
    InstanceTypeInfo {
        name: "c4.2xlarge",
        memory_gb: 15.0,
        ecu: 31.0,
        cores: 8,
        ephemeral_disks: &[],
        burstable: false,
    },
    InstanceTypeInfo {
        name: "c4.4xlarge",
        memory_gb: 30.0,
        ecu: 62.0,
        cores: 16,
        ephemeral_disks: &[],
        burstable: false,
    },
    InstanceTypeInfo {
        name: "c4.8xlarge",
        memory_gb: 60.0,
        ecu: 132.0,
        cores: 32,
        ephemeral_disks: &[],
        burstable: false,
    },
];
