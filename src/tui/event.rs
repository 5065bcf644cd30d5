use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::app::Result;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
}

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    pub fn next(&self) -> Result<AppEvent> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(AppEvent::Key(key));
                }
            }
        }
        Ok(AppEvent::Tick)
    }
}

/// User actions the UI surface offers; key events map onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    NextPage,
    PrevPage,
    /// Open the selected item's full article.
    Read,
    /// Return from the article view to the list.
    Back,
    Refresh,
    OpenInBrowser,
    None,
}

impl From<KeyEvent> for Action {
    fn from(key: KeyEvent) -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
            KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
            KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => Action::NextPage,
            KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => Action::PrevPage,
            KeyCode::Enter => Action::Read,
            KeyCode::Esc | KeyCode::Backspace => Action::Back,
            KeyCode::Char('R') => Action::Refresh,
            KeyCode::Char('o') => Action::OpenInBrowser,
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn maps_core_bindings() {
        assert_eq!(Action::from(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(Action::from(key(KeyCode::Enter)), Action::Read);
        assert_eq!(Action::from(key(KeyCode::Esc)), Action::Back);
        assert_eq!(Action::from(key(KeyCode::Char('n'))), Action::NextPage);
        assert_eq!(Action::from(key(KeyCode::Char('p'))), Action::PrevPage);
        assert_eq!(Action::from(key(KeyCode::Char('R'))), Action::Refresh);
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Action::from(key), Action::Quit);
    }

    #[test]
    fn unbound_keys_do_nothing() {
        assert_eq!(Action::from(key(KeyCode::Char('z'))), Action::None);
    }
}
