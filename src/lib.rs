pub mod api;
pub mod config;
pub mod domain;
pub mod format;
pub mod logging;
pub mod ui;
