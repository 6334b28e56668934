use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEventKind};

/// TUI-specific input events
pub enum TuiEvent {
    Quit,      // q
    ForceQuit, // Ctrl+C always quits
    Escape,
    Submit, // Enter (menu selection)

    // Deck navigation
    NextCard,
    PrevCard,

    // Menu navigation
    CursorUp,
    CursorDown,
    OpenMenu, // 'c' opens the category picker
    Refresh,  // 'r' re-fetches the current section

    // Drag gesture: button press and release positions (col, row).
    // The deck only cares about the horizontal component.
    MouseDown(u16, u16),
    MouseUp(u16, u16),

    Resize,
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                log::debug!(
                    "Key: {:?} (modifiers {:?})",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                    (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                    (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                    (_, KeyCode::Right) | (_, KeyCode::Char('l')) => Some(TuiEvent::NextCard),
                    (_, KeyCode::Left) | (_, KeyCode::Char('h')) => Some(TuiEvent::PrevCard),
                    (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
                    (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
                    (_, KeyCode::Char('c')) => Some(TuiEvent::OpenMenu),
                    (_, KeyCode::Char('r')) => Some(TuiEvent::Refresh),
                    _ => None,
                }
            }
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::Down(_) => {
                    Some(TuiEvent::MouseDown(mouse_event.column, mouse_event.row))
                }
                MouseEventKind::Up(_) => {
                    Some(TuiEvent::MouseUp(mouse_event.column, mouse_event.row))
                }
                _ => None,
            },
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
