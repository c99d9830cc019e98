//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use medtrack::domain::{Device, DeviceId, DeviceStatus, DeviceSummary, DeviceType};
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

/// Find a port nobody is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub const DEVICE_JSON: &str = r#"{
    "id": 7,
    "name": "Ventilator A",
    "device_type": "VENTILATOR",
    "manufacturer": "Draeger",
    "model_number": "V500",
    "serial_number": "VT-0007",
    "location": "ICU 2",
    "status": "IN_USE",
    "acquisition_date": "2022-01-10",
    "warranty_expiration": null,
    "last_maintenance_date": "2024-05-02",
    "next_maintenance_date": null,
    "description": "",
    "purchase_price": "15999.90",
    "created_at": "2022-01-10T09:00:00Z",
    "updated_at": "2024-05-02T14:30:00Z",
    "maintenance_records": [],
    "documents": []
}"#;

pub fn device(id: u64, name: &str) -> Device {
    let mut device: Device = serde_json::from_str(DEVICE_JSON).unwrap();
    device.id = DeviceId(id);
    device.name = name.to_string();
    device
}

pub fn summary(id: u64) -> DeviceSummary {
    DeviceSummary {
        id: DeviceId(id),
        name: format!("Device {id}"),
        device_type: DeviceType::Monitor,
        manufacturer: "Philips".into(),
        serial_number: format!("SN-{id}"),
        location: "Ward 3".into(),
        status: DeviceStatus::Available,
        last_maintenance_date: None,
        next_maintenance_date: None,
    }
}
