//! Event bus port for publishing progression events.

use ascent_domain::ProgressEvent;

/// Port for publishing progression events to the host game.
///
/// Publishing is best-effort: implementations log failures rather than
/// surface them, so event delivery never breaks level bookkeeping.
#[cfg_attr(test, mockall::automock)]
pub trait EventBus: Send + Sync {
    fn publish(&self, event: ProgressEvent);
}

/// Discards every event. Default for hosts that do not subscribe.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEventBus;

impl EventBus for NullEventBus {
    fn publish(&self, _event: ProgressEvent) {}
}
