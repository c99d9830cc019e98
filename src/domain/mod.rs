//! Inventory domain model.
//!
//! Types mirror the JSON the inventory service returns. Enumerated codes
//! are closed Rust enums so every label lookup is an exhaustive match.

mod decimal;
mod device;
mod document;
mod maintenance;
mod statistics;

use std::collections::BTreeMap;

pub use device::{
    Device, DeviceId, DevicePayload, DeviceStatus, DeviceSummary, DeviceType, StatusTone,
};
pub use document::{Document, DocumentId, DocumentPayload, DocumentType};
pub use maintenance::{MaintenanceId, MaintenancePayload, MaintenanceRecord, MaintenanceType};
pub use statistics::{RecentActivity, Statistics, StatusCount, TypeCount};

/// Field-keyed error messages, keyed by wire field name.
pub type FieldErrors = BTreeMap<String, String>;
