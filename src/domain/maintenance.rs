use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::decimal;
use super::device::DeviceId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaintenanceId(pub u64);

impl fmt::Display for MaintenanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceType {
    Preventive,
    Corrective,
    Calibration,
    Inspection,
}

impl MaintenanceType {
    pub fn label(self) -> &'static str {
        match self {
            MaintenanceType::Preventive => "Preventivo",
            MaintenanceType::Corrective => "Correctivo",
            MaintenanceType::Calibration => "Calibración",
            MaintenanceType::Inspection => "Inspección",
        }
    }
}

/// A dated service event attached to one device.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MaintenanceRecord {
    pub id: MaintenanceId,
    #[serde(default)]
    pub device: Option<DeviceId>,
    pub maintenance_type: MaintenanceType,
    pub maintenance_date: NaiveDate,
    #[serde(default)]
    pub performed_by: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "decimal::deserialize")]
    pub cost: Option<f64>,
    #[serde(default)]
    pub next_maintenance_due: Option<NaiveDate>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenancePayload {
    pub device: DeviceId,
    pub maintenance_type: MaintenanceType,
    pub maintenance_date: NaiveDate,
    pub performed_by: String,
    pub description: String,
    pub cost: Option<f64>,
    pub next_maintenance_due: Option<NaiveDate>,
}
