use crate::ui::dashboard::intent::DashboardIntent;
use crate::ui::dashboard::state::DashboardState;
use crate::ui::loadable::Loadable;
use crate::ui::mvi::Reducer;

pub struct DashboardReducer;

impl Reducer for DashboardReducer {
    type State = DashboardState;
    type Intent = DashboardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DashboardIntent::Loaded(stats) => DashboardState {
                stats: Loadable::Loaded(stats),
                selected: 0,
            },
            DashboardIntent::Failed(message) => DashboardState {
                stats: Loadable::Failed(message),
                selected: 0,
            },
            DashboardIntent::MoveSelection(delta) => {
                let rows = state
                    .stats
                    .loaded()
                    .map(|stats| stats.recent_activity.len())
                    .unwrap_or(0);
                if rows == 0 {
                    return DashboardState { selected: 0, ..state };
                }
                let selected = if delta.is_negative() {
                    state.selected.saturating_sub(delta.unsigned_abs() as usize)
                } else {
                    state.selected.saturating_add(delta as usize).min(rows - 1)
                };
                DashboardState { selected, ..state }
            }
        }
    }
}
