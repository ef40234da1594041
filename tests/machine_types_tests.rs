//! Tests for the instance catalog public API
//!
//! Covers lookup by name and ephemeral device derivation for real catalog entries.

use machinetypes::aws::{machine_types, BURSTABLE_CREDITS_TO_ECUS};
use machinetypes::{get_machine_type_info, CatalogError, EphemeralDevice};

fn device(device_name: &str, virtual_name: &str, size_gb: u32) -> EphemeralDevice {
    EphemeralDevice {
        device_name: device_name.to_string(),
        virtual_name: virtual_name.to_string(),
        size_gb,
    }
}

#[test]
fn test_t2_micro_is_burstable() {
    let info = get_machine_type_info("t2.micro").unwrap();
    assert_eq!(info.name, "t2.micro");
    assert_eq!(info.memory_gb, 1.0);
    assert_eq!(info.cores, 1);
    assert!(info.burstable);
    assert_eq!(info.ecu, 6.0 * BURSTABLE_CREDITS_TO_ECUS);
    assert!((info.ecu - 0.3).abs() < 1e-6);
    assert!(info.ephemeral_devices().unwrap().is_empty());
}

#[test]
fn test_m3_xlarge_devices() {
    let info = get_machine_type_info("m3.xlarge").unwrap();
    assert_eq!(info.ephemeral_disks, &[40, 40]);

    let devices = info.ephemeral_devices().unwrap();
    assert_eq!(
        devices,
        vec![
            device("/dev/sdc", "ephemeral0", 40),
            device("/dev/sdd", "ephemeral1", 40),
        ]
    );
}

#[test]
fn test_c4_8xlarge_has_no_ephemeral_disks() {
    let info = get_machine_type_info("c4.8xlarge").unwrap();
    assert_eq!(info.memory_gb, 60.0);
    assert_eq!(info.ecu, 132.0);
    assert_eq!(info.cores, 32);
    assert!(info.ephemeral_disks.is_empty());
    assert!(!info.burstable);
    assert!(info.ephemeral_devices().unwrap().is_empty());
}

#[test]
fn test_unknown_type_is_not_found() {
    let err = get_machine_type_info("bogus.type").unwrap_err();
    assert!(matches!(
        &err,
        CatalogError::InstanceTypeNotFound { instance_type } if instance_type == "bogus.type"
    ));
    assert!(err.to_string().contains("bogus.type"));
    assert!(!err.is_fatal());
}

#[test]
fn test_every_entry_resolves_to_itself() {
    for entry in machine_types() {
        let found = get_machine_type_info(entry.name).unwrap();
        assert_eq!(found.name, entry.name);
        // Same static record, not a copy
        assert!(std::ptr::eq(found, entry));
    }
}

#[test]
fn test_every_entry_derives_devices_in_order() {
    for entry in machine_types() {
        let devices = entry.ephemeral_devices().unwrap();
        assert_eq!(devices.len(), entry.ephemeral_disks.len(), "{}", entry.name);
        for (i, (dev, &size)) in devices.iter().zip(entry.ephemeral_disks).enumerate() {
            assert_eq!(dev.virtual_name, format!("ephemeral{}", i));
            assert_eq!(dev.size_gb, size);
        }
    }
}

#[test]
fn test_families_present() {
    let mut families: Vec<&str> = machine_types().iter().map(|m| m.family()).collect();
    families.dedup();
    assert_eq!(families, vec!["t2", "m3", "m4", "c3", "c4"]);
}

#[test]
fn test_verbatim_values() {
    // (name, memory_gb, ecu, cores, ephemeral_disks, burstable)
    let expected: &[(&str, f32, f32, u32, &[u32], bool)] = &[
        ("t2.nano", 0.5, 0.15, 1, &[], true),
        ("t2.micro", 1.0, 0.3, 1, &[], true),
        ("t2.small", 2.0, 0.6, 1, &[], true),
        ("t2.medium", 4.0, 1.2, 2, &[], true),
        ("t2.large", 8.0, 1.8, 2, &[], true),
        ("m3.medium", 3.75, 3.0, 1, &[4], false),
        ("m3.large", 7.5, 6.5, 2, &[32], false),
        ("m3.xlarge", 15.0, 13.0, 4, &[40, 40], false),
        ("m3.2xlarge", 30.0, 26.0, 8, &[80, 80], false),
        ("m4.large", 8.0, 6.5, 2, &[], false),
        ("m4.xlarge", 16.0, 13.0, 4, &[], false),
        ("m4.2xlarge", 32.0, 26.0, 8, &[], false),
        ("m4.4xlarge", 64.0, 53.5, 16, &[], false),
        ("m4.10xlarge", 160.0, 124.5, 40, &[], false),
        ("c3.large", 3.75, 7.0, 2, &[16, 16], false),
        ("c3.xlarge", 7.5, 14.0, 4, &[40, 40], false),
        ("c3.2xlarge", 15.0, 28.0, 8, &[80, 80], false),
        ("c3.4xlarge", 30.0, 55.0, 16, &[160, 160], false),
        ("c3.8xlarge", 60.0, 108.0, 32, &[320, 320], false),
        ("c4.large", 3.75, 8.0, 2, &[], false),
        ("c4.xlarge", 7.5, 16.0, 4, &[], false),
        ("c4.2xlarge", 15.0, 31.0, 8, &[], false),
        ("c4.4xlarge", 30.0, 62.0, 16, &[], false),
        ("c4.8xlarge", 60.0, 132.0, 32, &[], false),
    ];

    let table = machine_types();
    assert_eq!(table.len(), expected.len());

    for (entry, &(name, memory_gb, ecu, cores, disks, burstable)) in table.iter().zip(expected) {
        assert_eq!(entry.name, name, "table order");
        assert_eq!(entry.memory_gb, memory_gb, "{} memory_gb", name);
        assert!((entry.ecu - ecu).abs() < 1e-5, "{} ecu: {}", name, entry.ecu);
        assert_eq!(entry.cores, cores, "{} cores", name);
        assert_eq!(entry.ephemeral_disks, disks, "{} ephemeral_disks", name);
        assert_eq!(entry.burstable, burstable, "{} burstable", name);
    }
}

#[test]
fn test_lookup_from_threads() {
    let handles: Vec<_> = ["t2.nano", "m4.large", "c3.xlarge", "c4.2xlarge"]
        .into_iter()
        .map(|name| std::thread::spawn(move || get_machine_type_info(name).map(|m| m.cores)))
        .collect();

    let cores: Vec<u32> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    assert_eq!(cores, vec![1, 2, 4, 8]);
}
