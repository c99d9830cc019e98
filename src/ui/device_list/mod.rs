mod intent;
pub mod pagination;
mod reducer;
mod state;
pub mod view;

pub use intent::DeviceListIntent;
pub use reducer::DeviceListReducer;
pub use state::DeviceListState;
