//! Model-View-Intent primitives shared by every screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers never perform I/O. The [`App`](crate::ui::app::App) issues
//! network commands around the dispatch call and feeds the results back as
//! new intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
