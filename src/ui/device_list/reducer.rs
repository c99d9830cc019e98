use crate::domain::{DeviceStatus, DeviceType};
use crate::ui::device_list::intent::DeviceListIntent;
use crate::ui::device_list::state::DeviceListState;
use crate::ui::mvi::Reducer;

pub struct DeviceListReducer;

impl Reducer for DeviceListReducer {
    type State = DeviceListState;
    type Intent = DeviceListIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DeviceListIntent::FocusSearch => {
                state.search_focused = true;
                state
            }
            DeviceListIntent::BlurSearch => {
                state.search_focused = false;
                state
            }
            DeviceListIntent::SearchInput(ch) => {
                state.search.push(ch);
                reset_page(state)
            }
            DeviceListIntent::SearchBackspace => {
                state.search.pop();
                reset_page(state)
            }
            DeviceListIntent::CycleStatus => {
                state.status = cycle(state.status, &DeviceStatus::ALL);
                reset_page(state)
            }
            DeviceListIntent::CycleDeviceType => {
                state.device_type = cycle(state.device_type, &DeviceType::ALL);
                reset_page(state)
            }
            DeviceListIntent::ClearFilters => {
                state.search.clear();
                state.status = None;
                state.device_type = None;
                reset_page(state)
            }
            DeviceListIntent::GoToPage(page) => {
                state.current_page = page.clamp(1, state.total_pages.max(1));
                state
            }
            DeviceListIntent::NextPage => {
                if state.current_page < state.total_pages {
                    state.current_page += 1;
                }
                state
            }
            DeviceListIntent::PrevPage => {
                if state.current_page > 1 {
                    state.current_page -= 1;
                }
                state
            }
            DeviceListIntent::MoveSelection(delta) => {
                if state.devices.is_empty() {
                    state.selected = 0;
                    return state;
                }
                let last = state.devices.len() - 1;
                state.selected = if delta.is_negative() {
                    state.selected.saturating_sub(delta.unsigned_abs() as usize)
                } else {
                    state.selected.saturating_add(delta as usize).min(last)
                };
                state
            }
            DeviceListIntent::LoadStarted { seq } => {
                state.latest_request = seq;
                state.loading = true;
                state
            }
            DeviceListIntent::Loaded { seq, page } => {
                if seq != state.latest_request {
                    return state;
                }
                if let Some(total_pages) = page.total_pages() {
                    state.total_pages = total_pages;
                }
                state.devices = page.items;
                state.loading = false;
                // A confirmation is only valid while its row is on screen.
                if state.pending_delete_device().is_none() {
                    state.pending_delete = None;
                }
                state.selected = state.selected.min(state.devices.len().saturating_sub(1));
                state
            }
            DeviceListIntent::LoadFailed { seq } => {
                if seq == state.latest_request {
                    state.loading = false;
                }
                state
            }
            DeviceListIntent::RequestDelete => {
                state.pending_delete = state.selected_device().map(|device| device.id);
                state
            }
            DeviceListIntent::CancelDelete | DeviceListIntent::DeleteConfirmed => {
                state.pending_delete = None;
                state
            }
        }
    }
}

fn reset_page(mut state: DeviceListState) -> DeviceListState {
    state.current_page = 1;
    state
}

/// Advance an optional filter: all → first → ... → last → all.
fn cycle<T: Copy + PartialEq>(current: Option<T>, values: &[T]) -> Option<T> {
    match current {
        None => values.first().copied(),
        Some(value) => values
            .iter()
            .position(|candidate| *candidate == value)
            .and_then(|index| values.get(index + 1))
            .copied(),
    }
}
