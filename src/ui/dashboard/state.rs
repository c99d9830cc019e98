use crate::domain::{DeviceId, Statistics};
use crate::ui::loadable::Loadable;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub stats: Loadable<Statistics>,
    /// Selected row of the recent-activity table.
    pub selected: usize,
}

impl UiState for DashboardState {}

impl DashboardState {
    pub fn selected_activity(&self) -> Option<DeviceId> {
        self.stats
            .loaded()
            .and_then(|stats| stats.recent_activity.get(self.selected))
            .map(|activity| activity.id)
    }
}

/// Whole-number percentages for the status breakdown bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusShares {
    pub available: u32,
    pub in_use: u32,
    pub maintenance: u32,
}

/// Each share is `round(100 * part / total)` on its own, half rounding up.
///
/// A zero total counts as one. The three shares are not forced to sum to 100.
pub fn status_shares(stats: &Statistics) -> StatusShares {
    let total = u64::from(stats.total_devices.max(1));
    let share = |part: u32| -> u32 {
        let scaled = (200 * u64::from(part) + total) / (2 * total);
        u32::try_from(scaled).unwrap_or(u32::MAX)
    };
    StatusShares {
        available: share(stats.available_devices),
        in_use: share(stats.in_use_devices),
        maintenance: share(stats.maintenance_needed),
    }
}
