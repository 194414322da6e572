//! Drag session: which destination card, if any, is being dragged.
//!
//! With a mouse the drag starts immediately. On touch screens a card has to be
//! held for [`TOUCH_HOLD_MS`] before it becomes draggable, so that scrolling or
//! tapping through the list never drops anything by accident. Timestamps are
//! plain milliseconds supplied by the caller (`Date.now()` in the browser).

use crate::model::destination::DestinationId;

/// How long a touch must be held before the drag becomes active.
pub const TOUCH_HOLD_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Touch is down but the hold threshold has not been reached yet.
    Pending {
        destination: DestinationId,
        pressed_at_ms: u64,
    },
    Dragging(DestinationId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// The destination being dragged, once the drag is active.
    pub fn active(&self) -> Option<&DestinationId> {
        match &self.state {
            DragState::Dragging(id) => Some(id),
            _ => None,
        }
    }

    /// The destination under a touch that has not been held long enough yet.
    pub fn pending(&self) -> Option<&DestinationId> {
        match &self.state {
            DragState::Pending { destination, .. } => Some(destination),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, DragState::Pending { .. })
    }

    /// Begins a gesture on a destination card. Ignored unless the session is idle.
    pub fn start(&mut self, destination: DestinationId, pointer: PointerKind, now_ms: u64) {
        if self.state != DragState::Idle {
            return;
        }
        self.state = match pointer {
            PointerKind::Mouse => DragState::Dragging(destination),
            PointerKind::Touch => DragState::Pending {
                destination,
                pressed_at_ms: now_ms,
            },
        };
    }

    /// Promotes a pending touch to an active drag once it has been held long enough.
    ///
    /// Returns `true` when the drag is active after the call.
    pub fn hold_elapsed(&mut self, now_ms: u64) -> bool {
        let held = match &self.state {
            DragState::Pending {
                destination,
                pressed_at_ms,
            } if now_ms.saturating_sub(*pressed_at_ms) >= TOUCH_HOLD_MS => Some(destination.clone()),
            _ => None,
        };
        if let Some(destination) = held {
            self.state = DragState::Dragging(destination);
        }
        self.active().is_some()
    }

    /// The finger was lifted. A touch released before the threshold is a tap:
    /// the session goes back to idle without effect. An active drag is kept so
    /// the caller can still `drop` it on the cell under the finger.
    pub fn release(&mut self, now_ms: u64) {
        if self.is_pending() && !self.hold_elapsed(now_ms) {
            self.state = DragState::Idle;
        }
    }

    /// Ends the gesture. Returns the dragged destination if the drag was active.
    pub fn drop_destination(&mut self) -> Option<DestinationId> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(id) => Some(id),
            _ => None,
        }
    }

    /// Cancels whatever gesture is in progress.
    pub fn end(&mut self) {
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_drag_starts_immediately_and_drop_returns_id() {
        let mut session = DragSession::new();
        session.start("2".into(), PointerKind::Mouse, 0);
        assert_eq!(session.active(), Some(&DestinationId::from("2")));
        assert_eq!(session.drop_destination(), Some(DestinationId::from("2")));
        assert_eq!(session.state(), &DragState::Idle);
    }

    #[test]
    fn pending_reports_only_the_held_destination() {
        let mut session = DragSession::new();
        session.start("3".into(), PointerKind::Touch, 0);
        assert_eq!(session.pending(), Some(&DestinationId::from("3")));
        assert_eq!(session.active(), None);

        session.hold_elapsed(TOUCH_HOLD_MS);
        assert_eq!(session.pending(), None);
        assert_eq!(session.active(), Some(&DestinationId::from("3")));
    }

    #[test]
    fn touch_released_before_threshold_is_cancelled() {
        let mut session = DragSession::new();
        session.start("2".into(), PointerKind::Touch, 1_000);
        assert!(session.is_pending());
        assert!(!session.hold_elapsed(1_499));

        session.release(1_200);
        assert_eq!(session.state(), &DragState::Idle);
        assert_eq!(session.drop_destination(), None);
    }

    #[test]
    fn touch_held_past_threshold_becomes_drag() {
        let mut session = DragSession::new();
        session.start("2".into(), PointerKind::Touch, 1_000);
        assert!(session.hold_elapsed(1_500));
        session.release(1_800);
        assert_eq!(session.drop_destination(), Some(DestinationId::from("2")));
    }

    #[test]
    fn release_after_threshold_without_timer_still_counts_as_hold() {
        let mut session = DragSession::new();
        session.start("7".into(), PointerKind::Touch, 0);
        session.release(600);
        assert_eq!(session.active(), Some(&DestinationId::from("7")));
    }

    #[test]
    fn only_one_drag_at_a_time() {
        let mut session = DragSession::new();
        session.start("1".into(), PointerKind::Mouse, 0);
        session.start("2".into(), PointerKind::Mouse, 0);
        assert_eq!(session.active(), Some(&DestinationId::from("1")));
        session.end();
        assert_eq!(session.active(), None);
    }
}
