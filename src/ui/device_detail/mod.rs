mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::DeviceDetailIntent;
pub use reducer::DeviceDetailReducer;
pub use state::{DetailTab, DeviceDetailState};
