use crate::domain::{DeviceStatus, DeviceType};
use crate::ui::device_form::intent::DeviceFormIntent;
use crate::ui::device_form::state::{DeviceForm, DeviceFormState, FormField, FormPhase};
use crate::ui::mvi::Reducer;

pub struct DeviceFormReducer;

impl Reducer for DeviceFormReducer {
    type State = DeviceFormState;
    type Intent = DeviceFormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DeviceFormIntent::Loaded(device) => {
                state.form = DeviceForm::from_device(&device);
                state.errors.clear();
                state.phase = FormPhase::Editing;
                state
            }
            DeviceFormIntent::FocusNext => {
                state.focused = state.focused.next();
                state
            }
            DeviceFormIntent::FocusPrev => {
                state.focused = state.focused.prev();
                state
            }
            DeviceFormIntent::Input(ch) => {
                let field = state.focused;
                edit(state, field, |form| {
                    if let Some(text) = form.text_mut(field) {
                        text.push(ch);
                    }
                })
            }
            DeviceFormIntent::Backspace => {
                let field = state.focused;
                edit(state, field, |form| {
                    if let Some(text) = form.text_mut(field) {
                        text.pop();
                    }
                })
            }
            DeviceFormIntent::CycleNext | DeviceFormIntent::CyclePrev => {
                let forward = matches!(intent, DeviceFormIntent::CycleNext);
                let field = state.focused;
                edit(state, field, |form| match field {
                    FormField::DeviceType => {
                        form.device_type = Some(step(form.device_type, &DeviceType::ALL, forward));
                    }
                    FormField::Status => {
                        form.status = step(Some(form.status), &DeviceStatus::ALL, forward);
                    }
                    _ => {}
                })
            }
            DeviceFormIntent::ValidationFailed(errors) => {
                state.errors = errors;
                state
            }
            DeviceFormIntent::SubmitStarted => {
                state.errors.clear();
                state.phase = FormPhase::Submitting;
                state
            }
            DeviceFormIntent::SubmitRejected(errors) => {
                state.errors = errors;
                state.phase = FormPhase::Editing;
                state
            }
            DeviceFormIntent::SubmitFailed => {
                state.phase = FormPhase::Editing;
                state
            }
        }
    }
}

/// Apply a change to one field and clear that field's error.
///
/// Ignored unless the form is editable.
fn edit(
    mut state: DeviceFormState,
    field: FormField,
    change: impl FnOnce(&mut DeviceForm),
) -> DeviceFormState {
    if !state.is_editable() {
        return state;
    }
    change(&mut state.form);
    state.errors.remove(field.key());
    state
}

fn step<T: Copy + PartialEq>(current: Option<T>, values: &[T], forward: bool) -> T {
    let len = values.len();
    let index = match current.and_then(|value| values.iter().position(|v| *v == value)) {
        Some(index) if forward => (index + 1) % len,
        Some(index) => (index + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    values[index]
}
