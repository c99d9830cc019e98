mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::DashboardIntent;
pub use reducer::DashboardReducer;
pub use state::{status_shares, DashboardState, StatusShares};
