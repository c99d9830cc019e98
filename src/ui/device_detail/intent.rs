use crate::domain::{Device, Document, MaintenanceRecord};
use crate::ui::device_detail::state::DetailTab;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DeviceDetailIntent {
    DeviceLoaded(Device),
    DeviceFailed(String),
    MaintenanceLoaded(Vec<MaintenanceRecord>),
    DocumentsLoaded(Vec<Document>),
    SelectTab(DetailTab),
    NextTab,
    PrevTab,
    RequestDelete,
    CancelDelete,
}

impl Intent for DeviceDetailIntent {}
