//! The terminal as the console's window host.
//!
//! Translates crossterm input into console key strokes and pointer
//! positions, and answers the session's window queries for a full-screen
//! bordered console.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};

use crate::console::{Key, KeyStroke, Modifiers, Point, Rect, WindowHost};

/// Full-screen terminal window with a one-cell border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalHost {
    width: u16,
    height: u16,
    resizing: bool,
}

impl TerminalHost {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            resizing: false,
        }
    }

    /// Record a resize; the session sees `is_resizing` until the next tick.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.resizing = true;
    }

    /// Called after every session update.
    pub fn end_tick(&mut self) {
        self.resizing = false;
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}

impl WindowHost for TerminalHost {
    fn content_rect(&self) -> Rect {
        Rect::new(
            1.0,
            1.0,
            f32::from(self.width.saturating_sub(2)),
            f32::from(self.height.saturating_sub(2)),
        )
    }

    fn is_visible(&self) -> bool {
        true
    }

    fn is_topmost_under_pointer(&self, _point: Point) -> bool {
        true
    }

    fn is_resizing(&self) -> bool {
        self.resizing
    }
}

/// Whether `key` is the host's own quit shortcut (Ctrl+Q).
pub fn is_quit_key(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}

/// Map a crossterm key press to a console key stroke.
///
/// Releases and keys the console does not use give `None`.
pub fn to_keystroke(key: &KeyEvent) -> Option<KeyStroke> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let mapped = match key.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Tab => Key::Tab,
        KeyCode::Esc => Key::Escape,
        _ => return None,
    };
    let modifiers = Modifiers {
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
    };
    // Shifted letters already arrive upper-cased.
    let modifiers = match mapped {
        Key::Char(_) if !modifiers.ctrl => Modifiers::NONE,
        _ => modifiers,
    };
    Some(KeyStroke::new(mapped, modifiers))
}

/// Top-left corner of the cell under the mouse.
pub fn mouse_point(mouse: &MouseEvent) -> Point {
    Point::new(f32::from(mouse.column), f32::from(mouse.row))
}
