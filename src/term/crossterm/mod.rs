//! Crossterm-based terminal backend
//! Translates crossterm events into engine input

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton as CtMouseButton, MouseEvent, MouseEventKind,
    },
    execute, terminal,
};
use std::io::stdout;

use crate::constants::errors::TERMINAL_ERROR;
use crate::error::{ErrorType, Result, WalkError};
use crate::key::{Key, KeyInput, Modifiers, MouseButton, MouseInput};
use crate::term::{Size, TermEvent, TerminalBackend};

fn terminal_error(what: &str, err: impl std::fmt::Display) -> WalkError {
    WalkError::new(ErrorType::Terminal, TERMINAL_ERROR, format!("{what}: {err}"))
}

/// The host cannot run without raw mode and the alternate screen
fn setup_error(what: &str, err: impl std::fmt::Display) -> WalkError {
    WalkError::critical(ErrorType::Terminal, TERMINAL_ERROR, format!("{what}: {err}"))
}

/// Crossterm-based terminal backend implementation
#[derive(Debug, Default)]
pub struct CrosstermBackend {
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
    mouse_capture_enabled: bool,
}

impl CrosstermBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TerminalBackend for CrosstermBackend {
    fn init(&mut self) -> Result<()> {
        execute!(stdout(), terminal::EnterAlternateScreen)
            .map_err(|e| setup_error("Failed to enter alternate screen", e))?;
        self.alternate_screen_enabled = true;

        terminal::enable_raw_mode().map_err(|e| setup_error("Failed to enable raw mode", e))?;
        self.raw_mode_enabled = true;

        execute!(stdout(), EnableMouseCapture)
            .map_err(|e| setup_error("Failed to enable mouse capture", e))?;
        self.mouse_capture_enabled = true;

        execute!(stdout(), cursor::Hide).map_err(|e| setup_error("Failed to hide cursor", e))?;
        Ok(())
    }

    fn deinit(&mut self) {
        let _ = execute!(stdout(), cursor::Show);

        if self.mouse_capture_enabled {
            let _ = execute!(stdout(), DisableMouseCapture);
            self.mouse_capture_enabled = false;
        }

        if self.raw_mode_enabled {
            let _ = terminal::disable_raw_mode();
            self.raw_mode_enabled = false;
        }

        if self.alternate_screen_enabled {
            let _ = execute!(stdout(), terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
        }
    }

    fn read_event(&mut self) -> Result<TermEvent> {
        loop {
            let event = event::read().map_err(|e| terminal_error("Failed to read event", e))?;
            if let Some(event) = translate_event(event) {
                return Ok(event);
            }
        }
    }

    fn get_size(&self) -> Result<Size> {
        let (cols, rows) =
            terminal::size().map_err(|e| terminal_error("Failed to get terminal size", e))?;
        Ok(Size { rows, cols })
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        self.deinit();
    }
}

/// Translate any crossterm event; `None` for events the host ignores
pub(crate) fn translate_event(event: Event) -> Option<TermEvent> {
    match event {
        Event::Key(key_event) => translate_key_event(key_event).map(TermEvent::Key),
        Event::Mouse(mouse_event) => translate_mouse_event(mouse_event).map(TermEvent::MouseDown),
        Event::Resize(cols, rows) => Some(TermEvent::Resize(Size { rows, cols })),
        _ => None,
    }
}

/// Translate crossterm `KeyEvent` to a keydown
///
/// Releases are dropped; auto-repeat counts as a keydown. Shift is folded
/// into the character itself.
pub(crate) fn translate_key_event(key_event: KeyEvent) -> Option<KeyInput> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    let held = key_event.modifiers;
    let modifiers = Modifiers {
        ctrl: held.contains(KeyModifiers::CONTROL),
        alt: held.contains(KeyModifiers::ALT),
        meta: held.intersects(KeyModifiers::SUPER | KeyModifiers::META),
    };

    let key = match key_event.code {
        // Some terminals send Enter as a character
        KeyCode::Char('\r' | '\n') => Key::Enter,
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Esc => Key::Escape,
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::F(n) => Key::F(n),
        _ => Key::Other,
    };
    Some(KeyInput::new(key, modifiers))
}

/// Translate a crossterm mouse-down into viewport coordinates
///
/// One cell is one unit; the point is the centre of the clicked cell.
pub(crate) fn translate_mouse_event(mouse_event: MouseEvent) -> Option<MouseInput> {
    let MouseEventKind::Down(button) = mouse_event.kind else {
        return None;
    };
    let button = match button {
        CtMouseButton::Left => MouseButton::Primary,
        CtMouseButton::Right => MouseButton::Secondary,
        CtMouseButton::Middle => MouseButton::Middle,
    };
    Some(MouseInput::new(
        button,
        f64::from(mouse_event.column) + 0.5,
        f64::from(mouse_event.row) + 0.5,
    ))
}
