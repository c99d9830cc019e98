use crate::ui::device_detail::intent::DeviceDetailIntent;
use crate::ui::device_detail::state::DeviceDetailState;
use crate::ui::loadable::Loadable;
use crate::ui::mvi::Reducer;

pub struct DeviceDetailReducer;

impl Reducer for DeviceDetailReducer {
    type State = DeviceDetailState;
    type Intent = DeviceDetailIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DeviceDetailIntent::DeviceLoaded(device) => state.device = Loadable::Loaded(device),
            DeviceDetailIntent::DeviceFailed(message) => state.device = Loadable::Failed(message),
            DeviceDetailIntent::MaintenanceLoaded(records) => state.maintenance = records,
            DeviceDetailIntent::DocumentsLoaded(documents) => state.documents = documents,
            DeviceDetailIntent::SelectTab(tab) => state.tab = tab,
            DeviceDetailIntent::NextTab => state.tab = state.tab.next(),
            DeviceDetailIntent::PrevTab => state.tab = state.tab.prev(),
            DeviceDetailIntent::RequestDelete => {
                // Only a loaded device can be deleted.
                state.confirm_delete = state.device.loaded().is_some();
            }
            DeviceDetailIntent::CancelDelete => state.confirm_delete = false,
        }
        state
    }
}
