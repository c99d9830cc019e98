mod intent;
mod reducer;
mod state;
pub mod validation;
pub mod view;

pub use intent::DeviceFormIntent;
pub use reducer::DeviceFormReducer;
pub use state::{DeviceForm, DeviceFormState, FieldKind, FormField, FormMode, FormPhase};
pub use validation::{build_payload, summarize, validate, FormSummary};
