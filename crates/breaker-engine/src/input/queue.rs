/// Input events the engine understands.
/// Key codes are opaque; a [`KeyMap`](crate::input::controller::KeyMap) gives them meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
}

/// A queue of input events.
/// The platform layer writes events into the queue; the runner drains it once per frame.
#[derive(Debug, Clone)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key_code: 87 });
        q.push(InputEvent::KeyUp { key_code: 87 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn iter_preserves_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key_code: 65 });
        q.push(InputEvent::KeyDown { key_code: 68 });
        let codes: Vec<u32> = q
            .iter()
            .map(|e| match e {
                InputEvent::KeyDown { key_code } | InputEvent::KeyUp { key_code } => *key_code,
            })
            .collect();
        assert_eq!(codes, vec![65, 68]);
        assert_eq!(q.len(), 2);
    }
}
