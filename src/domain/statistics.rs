use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::device::{DeviceId, DeviceStatus, DeviceType};

/// Aggregates computed by `GET /devices/statistics/`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Statistics {
    pub total_devices: u32,
    #[serde(default)]
    pub active_devices: u32,
    #[serde(default)]
    pub available_devices: u32,
    #[serde(default)]
    pub in_use_devices: u32,
    #[serde(default)]
    pub maintenance_needed: u32,
    #[serde(default)]
    pub maintenance_due_soon: u32,
    #[serde(default)]
    pub device_types: Vec<TypeCount>,
    #[serde(default)]
    pub status_distribution: Vec<StatusCount>,
    #[serde(default)]
    pub recent_activity: Vec<RecentActivity>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeCount {
    pub device_type: DeviceType,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusCount {
    pub status: DeviceStatus,
    pub count: u32,
}

/// Recently created or updated device.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecentActivity {
    pub id: DeviceId,
    pub name: String,
    pub serial_number: String,
    pub status: DeviceStatus,
    pub updated_at: DateTime<Utc>,
}
