//! Crossterm event conversion
//!
//! Maps key and mouse events to app commands. Which commands do anything
//! depends on the current route; that is decided in `App::apply`.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

/// A user action, independent of the input device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Leave the current screen (quits from Home)
    Back,
    /// Leave the current screen; does nothing on Home
    Pop,
    ToggleColorMode,
    Up,
    Down,
    PageUp,
    PageDown,
    First,
    Last,
    /// Open details for the selected card
    OpenSelected,
    /// Toggle favorite on the selected card
    ToggleSelected,
    /// Left click at a screen cell
    Click { x: u16, y: u16 },
}

/// Convert a terminal event to a command
pub fn command_for_event(event: &Event) -> Option<Command> {
    match event {
        Event::Key(key) => command_for_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Command::Click {
                x: mouse.column,
                y: mouse.row,
            }),
            MouseEventKind::ScrollUp => Some(Command::Up),
            MouseEventKind::ScrollDown => Some(Command::Down),
            _ => None,
        },
        _ => None,
    }
}

/// Convert a key press to a command
pub fn command_for_key(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    let command = match key.code {
        KeyCode::Char('q') => Command::Quit,
        KeyCode::Esc => Command::Back,
        KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => Command::Pop,
        KeyCode::Char('t') => Command::ToggleColorMode,
        KeyCode::Up | KeyCode::Char('k') => Command::Up,
        KeyCode::Down | KeyCode::Char('j') => Command::Down,
        KeyCode::PageUp => Command::PageUp,
        KeyCode::PageDown => Command::PageDown,
        KeyCode::Home | KeyCode::Char('g') => Command::First,
        KeyCode::End | KeyCode::Char('G') => Command::Last,
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => Command::OpenSelected,
        KeyCode::Char(' ') | KeyCode::Char('f') => Command::ToggleSelected,
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_keys() {
        assert_eq!(command_for_key(&press(KeyCode::Char('t'))), Some(Command::ToggleColorMode));
        assert_eq!(command_for_key(&press(KeyCode::Enter)), Some(Command::OpenSelected));
        assert_eq!(command_for_key(&press(KeyCode::Char(' '))), Some(Command::ToggleSelected));
        assert_eq!(command_for_key(&press(KeyCode::Esc)), Some(Command::Back));
        assert_eq!(command_for_key(&press(KeyCode::Left)), Some(Command::Pop));
        assert_eq!(command_for_key(&press(KeyCode::Char('j'))), Some(Command::Down));
        assert_eq!(command_for_key(&press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for_key(&key), Some(Command::Quit));
        let key = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert_eq!(command_for_key(&key), None);
    }

    #[test]
    fn test_release_ignored() {
        let key = KeyEvent {
            code: KeyCode::Char('t'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(command_for_key(&key), None);
    }

    #[test]
    fn test_left_click() {
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(command_for_event(&event), Some(Command::Click { x: 12, y: 4 }));

        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 12,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(command_for_event(&event), None);
    }
}
