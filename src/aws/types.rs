//! Type definitions for the instance catalog

use serde::Serialize;

use super::ephemeral::ephemeral_devices_for;
use crate::error::Result;

/// Hardware profile of one EC2 instance type.
///
/// Entries live in a `static` table and are handed out as `&'static`
/// references; there is no way to mutate them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InstanceTypeInfo {
    pub name: &'static str,
    pub memory_gb: f32,
    pub ecu: f32,
    pub cores: u32,
    /// Instance-store disk sizes in GB, in device order.
    pub ephemeral_disks: &'static [u32],
    pub burstable: bool,
}

impl InstanceTypeInfo {
    /// Instance-store block devices for this type, one per ephemeral disk.
    ///
    /// Returns `CatalogError::UnsupportedDiskCount` if the type has more disks
    /// than the device naming scheme can address.
    pub fn ephemeral_devices(&self) -> Result<Vec<EphemeralDevice>> {
        ephemeral_devices_for(self.ephemeral_disks)
    }

    /// Family prefix of the name, e.g. `m3` for `m3.xlarge`.
    pub fn family(&self) -> &'static str {
        let name: &'static str = self.name;
        name.split_once('.').map(|(family, _)| family).unwrap_or(name)
    }

    pub fn total_ephemeral_gb(&self) -> u32 {
        self.ephemeral_disks.iter().sum()
    }
}

impl std::fmt::Display for InstanceTypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "InstanceTypeInfo {{ name: {}, memory_gb: {}, ecu: {}, cores: {}, ephemeral_disks: {:?}, burstable: {} }}",
            self.name, self.memory_gb, self.ecu, self.cores, self.ephemeral_disks, self.burstable
        )
    }
}

/// An instance-store block device mapping derived from an ephemeral disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EphemeralDevice {
    pub device_name: String,
    pub virtual_name: String,
    pub size_gb: u32,
}

impl std::fmt::Display for EphemeralDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EphemeralDevice {{ device_name: {}, virtual_name: {}, size_gb: {} }}",
            self.device_name, self.virtual_name, self.size_gb
        )
    }
}
