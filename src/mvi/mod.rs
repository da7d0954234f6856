//! Model-View-Intent (MVI) architecture primitives.
//!
//! Base traits for the unidirectional data flow every feature in this
//! crate follows.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Renderer
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of presentation state
//! - **Intent**: user actions or collaborator notifications
//! - **Reducer**: pure function that transforms state based on intents
//!
//! Side effects (preference writes, sign-in attempts, one-shot events)
//! never live in reducers; the owning core runs them around the reduce
//! call on its serialized dispatch task.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ViewState;
