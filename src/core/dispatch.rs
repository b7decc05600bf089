//=========================================================================
// Event Dispatcher
//
// Single delivery point for device events. The platform layer hands
// every translated event to the dispatcher, which forwards it to the
// user's receiver and synthesises multi-click events.
//
// Architecture:
// ```text
//  InputProcessor ──MouseInput──► post_mouse() ──► EventReceiver
//                                     │
//                                     └─ ClickTracker ─► Double/TripleClick
// ```
//
//=========================================================================

//=== External Crates =====================================================

use log::trace;

//=== Internal Imports ====================================================

use crate::core::click::ClickTracker;
use crate::core::event::{Event, EventReceiver, MouseInput};

//=== EventDispatcher =====================================================

/// Routes device events to the registered receiver.
#[derive(Default)]
pub struct EventDispatcher {
    receiver: Option<Box<dyn EventReceiver>>,
    clicks: ClickTracker,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current receiver.
    pub fn set_receiver(&mut self, receiver: Box<dyn EventReceiver>) {
        self.receiver = Some(receiver);
    }

    pub fn has_receiver(&self) -> bool {
        self.receiver.is_some()
    }

    pub fn click_tracker_mut(&mut self) -> &mut ClickTracker {
        &mut self.clicks
    }

    /// Delivers `event`; returns `true` if the receiver absorbed it.
    pub fn post(&mut self, event: &Event) -> bool {
        trace!(target: "device::input", "Posting {:?}", event);
        match self.receiver.as_mut() {
            Some(receiver) => receiver.on_event(event),
            None => false,
        }
    }

    /// Delivers a mouse event, followed by a double- or triple-click event
    /// when the press completes one.
    ///
    /// `now_ms` is the device's real time; it drives click detection.
    pub fn post_mouse(&mut self, input: MouseInput, now_ms: u32) {
        self.post(&Event::Mouse(input));

        if !input.kind.is_press() {
            return;
        }

        let clicks = self.clicks.check(input.x, input.y, input.kind, now_ms);
        let multi = match clicks {
            2 => input.kind.double_click(),
            3 => input.kind.triple_click(),
            _ => None,
        };

        if let Some(kind) = multi {
            self.post(&Event::Mouse(MouseInput { kind, ..input }));
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::{ButtonStates, MouseEventKind, UserEvent};
    use crossbeam_channel::{unbounded, Receiver};

    fn recording_dispatcher() -> (EventDispatcher, Receiver<Event>) {
        let (tx, rx) = unbounded();
        let mut dispatcher = EventDispatcher::new();
        dispatcher.set_receiver(Box::new(tx));
        (dispatcher, rx)
    }

    fn mouse(kind: MouseEventKind, x: i32, y: i32) -> MouseInput {
        MouseInput {
            kind,
            x,
            y,
            wheel: 0.0,
            shift: false,
            control: false,
            button_states: ButtonStates::LEFT,
        }
    }

    fn kinds(rx: &Receiver<Event>) -> Vec<MouseEventKind> {
        rx.try_iter()
            .filter_map(|e| match e {
                Event::Mouse(m) => Some(m.kind),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn post_without_receiver_is_not_absorbed() {
        let mut dispatcher = EventDispatcher::new();
        assert!(!dispatcher.has_receiver());
        assert!(!dispatcher.post(&Event::User(UserEvent::default())));
    }

    #[test]
    fn absorbing_receiver_reports_true() {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.set_receiver(Box::new(|_: &Event| true));
        assert!(dispatcher.post(&Event::User(UserEvent::default())));
    }

    #[test]
    fn second_press_emits_double_click() {
        let (mut dispatcher, rx) = recording_dispatcher();

        dispatcher.post_mouse(mouse(MouseEventKind::LeftPressedDown, 5, 5), 100);
        dispatcher.post_mouse(mouse(MouseEventKind::LeftUp, 5, 5), 150);
        dispatcher.post_mouse(mouse(MouseEventKind::LeftPressedDown, 5, 6), 200);

        assert_eq!(
            kinds(&rx),
            vec![
                MouseEventKind::LeftPressedDown,
                MouseEventKind::LeftUp,
                MouseEventKind::LeftPressedDown,
                MouseEventKind::LeftDoubleClick,
            ]
        );
    }

    #[test]
    fn third_press_emits_triple_click_with_same_position() {
        let (mut dispatcher, rx) = recording_dispatcher();

        for t in [0, 100, 200] {
            dispatcher.post_mouse(mouse(MouseEventKind::RightPressedDown, 40, 30), t);
        }

        let events: Vec<MouseInput> = rx
            .try_iter()
            .filter_map(|e| match e {
                Event::Mouse(m) => Some(m),
                _ => None,
            })
            .collect();

        let last = events.last().copied().expect("triple click event");
        assert_eq!(last.kind, MouseEventKind::RightTripleClick);
        assert_eq!((last.x, last.y), (40, 30));
        assert_eq!(events.len(), 5);
    }

    #[test]
    fn moves_do_not_touch_click_tracking() {
        let (mut dispatcher, rx) = recording_dispatcher();

        dispatcher.post_mouse(mouse(MouseEventKind::Moved, 1, 1), 0);
        dispatcher.post_mouse(mouse(MouseEventKind::Moved, 1, 1), 10);

        assert_eq!(kinds(&rx), vec![MouseEventKind::Moved, MouseEventKind::Moved]);
    }
}
