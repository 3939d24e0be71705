/// Avatar commands the simulation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Jump,
}

/// Input event types the driver feeds in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// An avatar command was pressed (`pressed == true`) or released.
    Command { command: Command, pressed: bool },
    /// Session-level restart request. Handled by the driver, not the avatar.
    Restart,
}

impl InputEvent {
    pub fn press(command: Command) -> Self {
        InputEvent::Command { command, pressed: true }
    }

    pub fn release(command: Command) -> Self {
        InputEvent::Command { command, pressed: false }
    }
}

/// A queue of input events.
/// The platform layer pushes events as they arrive; the runner drains them once per frame.
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

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
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
        q.push(InputEvent::press(Command::MoveRight));
        q.push(InputEvent::press(Command::Jump));
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn drain_preserves_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::press(Command::MoveLeft));
        q.push(InputEvent::Restart);
        q.push(InputEvent::release(Command::MoveLeft));
        let events = q.drain();
        assert_eq!(
            events,
            vec![
                InputEvent::Command { command: Command::MoveLeft, pressed: true },
                InputEvent::Restart,
                InputEvent::Command { command: Command::MoveLeft, pressed: false },
            ]
        );
    }
}
