//! HTTP access to the inventory service.

pub mod client;
pub mod error;
pub mod page;
pub mod query;
pub mod scope;
pub mod worker;

pub use client::ApiClient;
pub use error::ApiError;
pub use page::{Page, PAGE_SIZE};
pub use query::{DeviceQuery, RecordQuery};
pub use scope::ViewScope;
pub use worker::{ApiCommand, ApiEvent, ApiOutcome, ApiRequest, REQUEST_CHANNEL_CAPACITY};
