//! # Category Menu Component
//!
//! Centered overlay for picking the news section. Opened with `c`,
//! dismissed with Esc.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CategoryMenuState` lives in `TuiState`
//! - `CategoryMenu` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::news::Category;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Persistent state for the category picker overlay.
pub struct CategoryMenuState {
    pub selected: usize,
    pub list_state: ListState,
}

impl CategoryMenuState {
    /// Opens the menu with the cursor on the currently active section.
    pub fn new(current: Category) -> Self {
        let selected = Category::ALL
            .iter()
            .position(|&c| c == current)
            .unwrap_or(0);
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            selected,
            list_state,
        }
    }
}

impl EventHandler for CategoryMenuState {
    type Event = MenuEvent;

    /// Handle a key event, returning a MenuEvent if the overlay should act.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<MenuEvent> {
        match event {
            TuiEvent::Escape => Some(MenuEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(Category::ALL.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => Some(MenuEvent::Select(Category::ALL[self.selected])),
            _ => None,
        }
    }
}

/// Events emitted by the category menu.
pub enum MenuEvent {
    Select(Category),
    Dismiss,
}

/// Transient render wrapper for the category picker.
pub struct CategoryMenu<'a> {
    state: &'a mut CategoryMenuState,
    current: Category,
}

impl<'a> CategoryMenu<'a> {
    pub fn new(state: &'a mut CategoryMenuState, current: Category) -> Self {
        Self { state, current }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let height = Category::ALL.len() as u16 + 2; // entries + borders
        let overlay = centered_rect(30, height, area);

        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Get news by ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = Category::ALL
            .iter()
            .enumerate()
            .map(|(i, &category)| {
                let marker = if category == self.current { "● " } else { "  " };
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::styled(
                    format!("{marker}{}", category.label()),
                    style,
                ))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Compute a centered rect of fixed height and percentage width.
fn centered_rect(percent_x: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(outer.height)),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_opens_on_current_category() {
        let state = CategoryMenuState::new(Category::Science);
        assert_eq!(Category::ALL[state.selected], Category::Science);
    }

    #[test]
    fn test_cursor_saturates_at_both_ends() {
        let mut state = CategoryMenuState::new(Category::World);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);
        for _ in 0..20 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.selected, Category::ALL.len() - 1);
    }

    #[test]
    fn test_submit_selects_highlighted_category() {
        let mut state = CategoryMenuState::new(Category::World);
        state.handle_event(&TuiEvent::CursorDown);
        match state.handle_event(&TuiEvent::Submit) {
            Some(MenuEvent::Select(category)) => assert_eq!(category, Category::ALL[1]),
            _ => panic!("expected a selection"),
        }
    }

    #[test]
    fn test_escape_dismisses() {
        let mut state = CategoryMenuState::new(Category::World);
        assert!(matches!(
            state.handle_event(&TuiEvent::Escape),
            Some(MenuEvent::Dismiss)
        ));
    }
}
