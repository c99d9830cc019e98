//! Base trait for screen intents.

/// Marker trait for intent objects.
///
/// Intents are key presses translated into screen actions, or API results
/// routed back to the screen that asked for them.
pub trait Intent: Send + 'static {}
