//! Model-View-Intent (MVI) primitives for the inventory screens.
//!
//! Every screen keeps its state in a plain value and changes it only by
//! feeding intents through a reducer. Network effects live in the `App`,
//! which compares state before and after a dispatch to decide what to load.
//!
//! ```text
//! Key / ApiEvent ──→ Intent ──→ Reducer ──→ State ──→ View
//!        ↑                                    │
//!        └──────────── App effects ←──────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
