use crate::api::Page;
use crate::domain::DeviceSummary;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DeviceListIntent {
    FocusSearch,
    BlurSearch,
    SearchInput(char),
    SearchBackspace,
    /// Step through "all" and every status.
    CycleStatus,
    /// Step through "all" and every device type.
    CycleDeviceType,
    /// Drop search, status and type filters at once.
    ClearFilters,
    GoToPage(u32),
    NextPage,
    PrevPage,
    MoveSelection(i32),
    LoadStarted { seq: u64 },
    Loaded { seq: u64, page: Page<DeviceSummary> },
    LoadFailed { seq: u64 },
    RequestDelete,
    CancelDelete,
    /// Confirmation accepted; the delete request is on its way.
    DeleteConfirmed,
}

impl Intent for DeviceListIntent {}
