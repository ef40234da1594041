//! Instance-store device naming
//!
//! Ephemeral disks are mapped to `/dev/sdc`, `/dev/sdd`, ... in disk order,
//! with virtual names `ephemeral0`, `ephemeral1`, .... `/dev/sda` and
//! `/dev/sdb` are left to the root and first EBS volume.

use tracing::error;

use super::types::EphemeralDevice;
use crate::error::{CatalogError, Result};

/// Number of ephemeral disks the letter scheme can name (`c` through `v`).
pub const MAX_EPHEMERAL_DEVICES: usize = 20;

const FIRST_DEVICE_LETTER: u8 = b'c';

/// Drive letter for the ephemeral disk at `index`: 0 is `c`, 1 is `d`, and so on.
pub fn device_letter(index: usize) -> Result<char> {
    if index >= MAX_EPHEMERAL_DEVICES {
        return Err(unsupported_disk_count(index, index.saturating_add(1)));
    }
    // Bounded above, so the cast cannot truncate.
    Ok(char::from(FIRST_DEVICE_LETTER + index as u8))
}

fn unsupported_disk_count(index: usize, count: usize) -> CatalogError {
    error!(
        disk_index = index,
        disk_count = count,
        max = MAX_EPHEMERAL_DEVICES,
        "ephemeral devices beyond /dev/sdv are not supported"
    );
    CatalogError::UnsupportedDiskCount { index, count }
}

/// Build the block device mappings for a list of ephemeral disk sizes.
///
/// Fails with `UnsupportedDiskCount` (a fatal error) if any disk index would
/// be `MAX_EPHEMERAL_DEVICES` or higher. Nothing is truncated.
pub fn ephemeral_devices_for(sizes: &[u32]) -> Result<Vec<EphemeralDevice>> {
    if sizes.len() > MAX_EPHEMERAL_DEVICES {
        return Err(unsupported_disk_count(MAX_EPHEMERAL_DEVICES, sizes.len()));
    }

    sizes
        .iter()
        .enumerate()
        .map(|(i, &size_gb)| -> Result<EphemeralDevice> {
            Ok(EphemeralDevice {
                device_name: format!("/dev/sd{}", device_letter(i)?),
                virtual_name: format!("ephemeral{}", i),
                size_gb,
            })
        })
        .collect()
}
