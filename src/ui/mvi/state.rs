//! Base trait for screen state.

/// Marker trait for screen state objects.
///
/// `Default` is the state of a freshly entered screen; `PartialEq` lets the
/// app detect transitions that require a reload.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
