//! One-shot side-effect channel.
//!
//! State snapshots describe what the UI *is*; events describe what should
//! happen *once*: navigate somewhere, or flash a snackbar. Events are never
//! part of persisted state and are deliberately lossy: a bounded
//! single-slot channel with at most one pending delivery for the
//! currently attached consumer. Emitting with no consumer attached drops
//! the event; attaching later never replays it.

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use crate::nav::Screen;

/// A fire-and-forget notification for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Request navigation to a screen.
    Navigate(Screen),
    /// Show a transient message.
    ShowSnackbar(String),
}

/// Single-consumer, single-slot event bus.
///
/// `attach` hands out the receiving end and displaces any previous
/// consumer. `emit` never blocks and never fails: if the slot is full or
/// nobody is listening, the event is dropped and the drop is recorded at
/// debug level.
pub struct EventBus {
    consumer: Mutex<Option<mpsc::Sender<AppEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            consumer: Mutex::new(None),
        }
    }

    /// Attach the (single) consumer, replacing any existing one.
    ///
    /// Events emitted before this call are gone; there is no replay.
    pub fn attach(&self) -> mpsc::Receiver<AppEvent> {
        let (tx, rx) = mpsc::channel(1);
        *self.consumer.lock() = Some(tx);
        rx
    }

    /// Detach the current consumer, if any. Subsequent emissions drop.
    pub fn detach(&self) {
        *self.consumer.lock() = None;
    }

    /// Emit an event toward the attached consumer, dropping it if the
    /// slot is occupied or no consumer is attached.
    pub fn emit(&self, event: AppEvent) {
        let guard = self.consumer.lock();
        match guard.as_ref() {
            Some(tx) => match tx.try_send(event) {
                Ok(()) => {}
                Err(TrySendError::Full(event)) => {
                    tracing::debug!(?event, "event slot occupied, dropped");
                }
                Err(TrySendError::Closed(event)) => {
                    tracing::debug!(?event, "event consumer gone, dropped");
                }
            },
            None => {
                tracing::debug!(?event, "no event consumer attached, dropped");
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
