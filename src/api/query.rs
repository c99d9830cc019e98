use crate::domain::{DeviceId, DeviceStatus, DeviceType};

/// Filters for `GET /devices/`. Empty filters are left out of the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceQuery {
    pub page: u32,
    pub status: Option<DeviceStatus>,
    pub device_type: Option<DeviceType>,
    pub search: Option<String>,
}

impl Default for DeviceQuery {
    fn default() -> Self {
        Self {
            page: 1,
            status: None,
            device_type: None,
            search: None,
        }
    }
}

impl DeviceQuery {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string())];
        if let Some(status) = self.status {
            pairs.push(("status", status.code().to_string()));
        }
        if let Some(device_type) = self.device_type {
            pairs.push(("device_type", device_type.code().to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        pairs
    }
}

/// Filter for maintenance and document lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordQuery {
    pub device: Option<DeviceId>,
}

impl RecordQuery {
    pub fn for_device(device: DeviceId) -> Self {
        Self {
            device: Some(device),
        }
    }

    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        self.device
            .map(|id| vec![("device", id.to_string())])
            .unwrap_or_default()
    }
}
