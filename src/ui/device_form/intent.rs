use crate::domain::{Device, FieldErrors};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DeviceFormIntent {
    /// Device being edited arrived; prefill and unlock the form.
    Loaded(Device),
    FocusNext,
    FocusPrev,
    /// Typed character for the focused text field.
    Input(char),
    Backspace,
    /// Next/previous option of the focused select field.
    CycleNext,
    CyclePrev,
    ValidationFailed(FieldErrors),
    SubmitStarted,
    /// Server rejected the payload with field-keyed messages.
    SubmitRejected(FieldErrors),
    /// Save failed without usable field errors.
    SubmitFailed,
}

impl Intent for DeviceFormIntent {}
