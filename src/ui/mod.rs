pub mod app;
pub mod dashboard;
pub mod device_detail;
pub mod device_form;
pub mod device_list;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod loadable;
pub mod mvi;
pub mod popup;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use app::{App, Route};
pub use runtime::run;
