use crate::api::DeviceQuery;
use crate::domain::{DeviceId, DeviceStatus, DeviceSummary, DeviceType};
use crate::ui::device_list::pagination::page_window;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub struct DeviceListState {
    pub search: String,
    pub search_focused: bool,
    pub status: Option<DeviceStatus>,
    pub device_type: Option<DeviceType>,
    pub current_page: u32,
    pub total_pages: u32,
    pub devices: Vec<DeviceSummary>,
    pub loading: bool,
    /// Sequence number of the newest list request; older responses are dropped.
    pub latest_request: u64,
    pub selected: usize,
    /// Device awaiting delete confirmation.
    pub pending_delete: Option<DeviceId>,
}

impl Default for DeviceListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            search_focused: false,
            status: None,
            device_type: None,
            current_page: 1,
            total_pages: 1,
            devices: Vec::new(),
            loading: false,
            latest_request: 0,
            selected: 0,
            pending_delete: None,
        }
    }
}

impl UiState for DeviceListState {}

impl DeviceListState {
    /// The combined query this state asks the server for.
    pub fn query(&self) -> DeviceQuery {
        let search = self.search.trim();
        DeviceQuery {
            page: self.current_page,
            status: self.status,
            device_type: self.device_type,
            search: (!search.is_empty()).then(|| search.to_string()),
        }
    }

    pub fn selected_device(&self) -> Option<&DeviceSummary> {
        self.devices.get(self.selected)
    }

    pub fn pending_delete_device(&self) -> Option<&DeviceSummary> {
        let id = self.pending_delete?;
        self.devices.iter().find(|device| device.id == id)
    }

    pub fn show_pagination(&self) -> bool {
        self.total_pages > 1
    }

    pub fn page_window(&self) -> Vec<u32> {
        page_window(self.current_page, self.total_pages)
    }
}
