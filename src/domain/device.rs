use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::decimal;
use super::document::Document;
use super::maintenance::MaintenanceRecord;

/// Server-assigned device identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(pub u64);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Equipment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceType {
    InfusionPump,
    Ventilator,
    EcgMachine,
    Monitor,
    Defibrillator,
    Ultrasound,
    Xray,
    Mri,
    CtScanner,
    Anesthesia,
}

impl DeviceType {
    pub const ALL: [DeviceType; 10] = [
        DeviceType::InfusionPump,
        DeviceType::Ventilator,
        DeviceType::EcgMachine,
        DeviceType::Monitor,
        DeviceType::Defibrillator,
        DeviceType::Ultrasound,
        DeviceType::Xray,
        DeviceType::Mri,
        DeviceType::CtScanner,
        DeviceType::Anesthesia,
    ];

    /// Wire code, as sent in query strings and payloads.
    pub fn code(self) -> &'static str {
        match self {
            DeviceType::InfusionPump => "INFUSION_PUMP",
            DeviceType::Ventilator => "VENTILATOR",
            DeviceType::EcgMachine => "ECG_MACHINE",
            DeviceType::Monitor => "MONITOR",
            DeviceType::Defibrillator => "DEFIBRILLATOR",
            DeviceType::Ultrasound => "ULTRASOUND",
            DeviceType::Xray => "XRAY",
            DeviceType::Mri => "MRI",
            DeviceType::CtScanner => "CT_SCANNER",
            DeviceType::Anesthesia => "ANESTHESIA",
        }
    }

    /// Localized display label.
    pub fn label(self) -> &'static str {
        match self {
            DeviceType::InfusionPump => "Bomba de Infusión",
            DeviceType::Ventilator => "Ventilador",
            DeviceType::EcgMachine => "Máquina ECG",
            DeviceType::Monitor => "Monitor de Signos Vitales",
            DeviceType::Defibrillator => "Desfibrilador",
            DeviceType::Ultrasound => "Ultrasonido",
            DeviceType::Xray => "Rayos X",
            DeviceType::Mri => "Resonancia Magnética",
            DeviceType::CtScanner => "Tomógrafo",
            DeviceType::Anesthesia => "Equipo de Anestesia",
        }
    }
}

/// Operational status of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceStatus {
    Active,
    #[default]
    Available,
    InUse,
    InMaintenance,
    InRepair,
    Decommissioned,
}

/// Coarse grouping of statuses used for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Ok,
    Busy,
    Alert,
    Muted,
}

impl DeviceStatus {
    pub const ALL: [DeviceStatus; 6] = [
        DeviceStatus::Active,
        DeviceStatus::Available,
        DeviceStatus::InUse,
        DeviceStatus::InMaintenance,
        DeviceStatus::InRepair,
        DeviceStatus::Decommissioned,
    ];

    pub fn code(self) -> &'static str {
        match self {
            DeviceStatus::Active => "ACTIVE",
            DeviceStatus::Available => "AVAILABLE",
            DeviceStatus::InUse => "IN_USE",
            DeviceStatus::InMaintenance => "IN_MAINTENANCE",
            DeviceStatus::InRepair => "IN_REPAIR",
            DeviceStatus::Decommissioned => "DECOMMISSIONED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DeviceStatus::Active => "Activo",
            DeviceStatus::Available => "Disponible",
            DeviceStatus::InUse => "En Uso",
            DeviceStatus::InMaintenance => "En Mantenimiento",
            DeviceStatus::InRepair => "En Reparación",
            DeviceStatus::Decommissioned => "Desmantelado",
        }
    }

    pub fn tone(self) -> StatusTone {
        match self {
            DeviceStatus::Active | DeviceStatus::Available => StatusTone::Ok,
            DeviceStatus::InUse => StatusTone::Busy,
            DeviceStatus::InMaintenance | DeviceStatus::InRepair => StatusTone::Alert,
            DeviceStatus::Decommissioned => StatusTone::Muted,
        }
    }
}

/// Full device record as returned by `GET /devices/{id}/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub device_type: DeviceType,
    pub manufacturer: String,
    #[serde(default)]
    pub model_number: String,
    pub serial_number: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: DeviceStatus,
    #[serde(default)]
    pub acquisition_date: Option<NaiveDate>,
    #[serde(default)]
    pub warranty_expiration: Option<NaiveDate>,
    #[serde(default)]
    pub last_maintenance_date: Option<NaiveDate>,
    #[serde(default)]
    pub next_maintenance_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "decimal::deserialize")]
    pub purchase_price: Option<f64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub maintenance_records: Vec<MaintenanceRecord>,
    #[serde(default)]
    pub documents: Vec<Document>,
}

/// Reduced device shape returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeviceSummary {
    pub id: DeviceId,
    pub name: String,
    pub device_type: DeviceType,
    #[serde(default)]
    pub manufacturer: String,
    pub serial_number: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: DeviceStatus,
    #[serde(default)]
    pub last_maintenance_date: Option<NaiveDate>,
    #[serde(default)]
    pub next_maintenance_date: Option<NaiveDate>,
}

/// Body for `POST /devices/` and `PUT /devices/{id}/`.
///
/// Optional values serialize as explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DevicePayload {
    pub name: String,
    pub device_type: DeviceType,
    pub manufacturer: String,
    pub model_number: String,
    pub serial_number: String,
    pub location: String,
    pub status: DeviceStatus,
    pub acquisition_date: Option<NaiveDate>,
    pub warranty_expiration: Option<NaiveDate>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
    pub description: String,
    pub purchase_price: Option<f64>,
}
