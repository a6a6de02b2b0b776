/// Input events and key bindings.
///
/// The host loop translates raw terminal input into `Event`s and the key
/// bindings below into `Command`s; the timer core never sees crossterm
/// types directly.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One incoming signal for the host dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// One-second time advance.
    Tick,
    /// A key press from the terminal.
    Key(KeyEvent),
}

/// A user command decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleStartStop,
    Quit,
}

/// An immutable binding from key chords to a command, with its help line.
pub struct KeyBinding {
    pub keys: &'static [(KeyCode, KeyModifiers)],
    pub help: &'static str,
}

impl KeyBinding {
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.keys
            .iter()
            .any(|(code, modifiers)| key.code == *code && key.modifiers == *modifiers)
    }
}

pub const START_STOP_KEYS: KeyBinding = KeyBinding {
    keys: &[(KeyCode::Char('s'), KeyModifiers::NONE)],
    help: "press s to start/stop timer",
};

pub const QUIT_KEYS: KeyBinding = KeyBinding {
    keys: &[
        (KeyCode::Char('q'), KeyModifiers::NONE),
        (KeyCode::Esc, KeyModifiers::NONE),
        (KeyCode::Char('c'), KeyModifiers::CONTROL),
    ],
    help: "press q to quit",
};

/// Decode a key press into a command; unbound keys are ignored.
pub fn command_for(key: &KeyEvent) -> Option<Command> {
    if QUIT_KEYS.matches(key) {
        Some(Command::Quit)
    } else if START_STOP_KEYS.matches(key) {
        Some(Command::ToggleStartStop)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_bindings() {
        assert_eq!(command_for(&key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for(&key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            command_for(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn start_stop_binding() {
        assert_eq!(
            command_for(&key(KeyCode::Char('s'))),
            Some(Command::ToggleStartStop)
        );
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(command_for(&key(KeyCode::Char('x'))), None);
        assert_eq!(command_for(&key(KeyCode::Enter)), None);
        // Plain 'c' is not the quit chord.
        assert_eq!(command_for(&key(KeyCode::Char('c'))), None);
    }
}
