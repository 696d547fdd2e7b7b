// Queued press/release events, drained once per tick

use super::action::Action;
use std::collections::VecDeque;

/// Maximum number of queued events per player
const MAX_QUEUE_SIZE: usize = 64;

/// A single press or release of a logical action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub action: Action,
    pub pressed: bool,
}

impl InputEvent {
    pub fn press(action: Action) -> Self {
        Self {
            action,
            pressed: true,
        }
    }

    pub fn release(action: Action) -> Self {
        Self {
            action,
            pressed: false,
        }
    }
}

/// FIFO of events received between two ticks for one player
///
/// Events arrive from the window callback at arbitrary times; the match
/// drains the queue at the start of each tick so the physics step always sees
/// a consistent snapshot.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: VecDeque::with_capacity(MAX_QUEUE_SIZE),
        }
    }

    /// Append an event, dropping the oldest once the queue is full
    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
        if self.events.len() > MAX_QUEUE_SIZE {
            self.events.pop_front();
        }
    }

    /// Take every queued event in arrival order
    pub fn drain(&mut self) -> Vec<InputEvent> {
        self.events.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_creation() {
        let queue = InputQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_drain_preserves_order() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::press(Action::MoveLeft));
        queue.push(InputEvent::press(Action::MoveRight));
        queue.push(InputEvent::release(Action::MoveLeft));

        assert_eq!(
            queue.drain(),
            vec![
                InputEvent::press(Action::MoveLeft),
                InputEvent::press(Action::MoveRight),
                InputEvent::release(Action::MoveLeft),
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_max_size() {
        let mut queue = InputQueue::new();
        for _ in 0..MAX_QUEUE_SIZE + 10 {
            queue.push(InputEvent::press(Action::Jump));
        }
        queue.push(InputEvent::press(Action::Attack));

        assert_eq!(queue.len(), MAX_QUEUE_SIZE);
        assert_eq!(
            queue.drain().last(),
            Some(&InputEvent::press(Action::Attack))
        );
    }

    #[test]
    fn test_queue_clear() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::press(Action::Jump));
        queue.clear();
        assert!(queue.is_empty());
    }
}
