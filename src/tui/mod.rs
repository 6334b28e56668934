//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (shimmer while loading): draws every ~80ms so the
//!   highlight band sweeps smoothly.
//! - **Idle** (deck showing, no input): sleeps up to 500ms, only redraws on
//!   events or terminal resize.
//!
//! ## Gestures
//!
//! Mouse capture is enabled so a horizontal drag can drive the deck the way
//! a swipe does on a touch screen: button-down records the origin column,
//! button-up turns the column delta into gesture units and hands the net
//! displacement to the core. Arrow keys skip the gesture math and navigate
//! directly.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::news::{Category, NytProvider, StoryProvider};
use crate::tui::component::EventHandler;
use crate::tui::components::{CategoryMenuState, MenuEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Conversion between terminal columns and gesture units: dragging one cell
/// counts as ten units, so the 50-unit swipe threshold is a five-cell drag.
pub(crate) const UNITS_PER_CELL: f32 = 10.0;

/// Duration of one shimmer sweep, mirroring the 1.5s mobile animation.
const SHIMMER_SWEEP_SECS: f32 = 1.5;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Column where the current drag started (None = no drag in progress)
    pub drag_origin: Option<u16>,
    /// Category picker overlay (None = hidden)
    pub menu: Option<CategoryMenuState>,
    /// Shimmer sweep position in [0, 1)
    pub shimmer_phase: f32,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            drag_origin: None,
            menu: None,
            shimmer_phase: 0.0,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Build the story provider from the resolved config.
pub fn build_provider(config: &ResolvedConfig) -> Arc<dyn StoryProvider> {
    let api_key = config
        .api_key
        .clone()
        .expect("NYT API key must be set (config file [nytimes] api_key, or NYT_API_KEY env var)");
    Arc::new(NytProvider::new(api_key, Some(config.base_url.clone())))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let provider = build_provider(&config);
    let mut app = App::new(provider, config.category);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Fetch completions arrive as actions over this channel
    let (tx, rx) = mpsc::channel();

    let mut should_quit = false;

    // The mobile original fetches on appear; do the same.
    apply(&mut app, Action::FetchNews(config.category), &tx, &mut should_quit);

    // Shimmer clock
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // force the first frame

    loop {
        let animating = app.load_state.is_loading();
        if animating {
            needs_redraw = true;
        }

        // Skip drawing entirely when nothing changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            tui.shimmer_phase = (elapsed / SHIMMER_SWEEP_SECS).fract();
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Poll briefly (~12fps) while the shimmer runs, longer when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Drain every queued event before the next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // A resize only needs the redraw flagged above
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                apply(&mut app, Action::Quit, &tx, &mut should_quit);
                continue;
            }

            // When the category menu is open, route all events to it
            if let Some(ref mut menu) = tui.menu {
                if let Some(menu_event) = menu.handle_event(&event) {
                    match menu_event {
                        MenuEvent::Select(category) => {
                            tui.menu = None;
                            apply(&mut app, Action::FetchNews(category), &tx, &mut should_quit);
                        }
                        MenuEvent::Dismiss => {
                            tui.menu = None;
                        }
                    }
                }
                continue;
            }

            match event {
                TuiEvent::Quit | TuiEvent::Escape => {
                    apply(&mut app, Action::Quit, &tx, &mut should_quit);
                }
                TuiEvent::OpenMenu => {
                    tui.menu = Some(CategoryMenuState::new(app.category));
                }
                TuiEvent::Refresh => {
                    let category = app.category;
                    apply(&mut app, Action::FetchNews(category), &tx, &mut should_quit);
                }
                TuiEvent::NextCard => {
                    apply(&mut app, Action::NextCard, &tx, &mut should_quit);
                }
                TuiEvent::PrevCard => {
                    apply(&mut app, Action::PrevCard, &tx, &mut should_quit);
                }
                TuiEvent::MouseDown(column, _row) => {
                    tui.drag_origin = Some(column);
                }
                TuiEvent::MouseUp(column, _row) => {
                    if let Some(origin) = tui.drag_origin.take() {
                        // Net horizontal displacement; the vertical component
                        // of the drag is ignored.
                        let displacement =
                            (column as f32 - origin as f32) * UNITS_PER_CELL;
                        apply(
                            &mut app,
                            Action::SwipeReleased(displacement),
                            &tx,
                            &mut should_quit,
                        );
                    }
                }
                _ => {}
            }
        }

        // Handle background task actions (fetch completions)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            apply(&mut app, action, &tx, &mut should_quit);
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Run an action through the reducer and perform the resulting effect.
fn apply(app: &mut App, action: Action, tx: &mpsc::Sender<Action>, should_quit: &mut bool) {
    match update(app, action) {
        Effect::Quit => *should_quit = true,
        Effect::SpawnFetch { category, seq } => {
            spawn_fetch(app.provider.clone(), category, seq, tx.clone());
        }
        Effect::None => {}
    }
}

/// Spawn the network call for one fetch cycle. The completion comes back as
/// an `Action` over the channel, so only the event loop ever touches state.
fn spawn_fetch(
    provider: Arc<dyn StoryProvider>,
    category: Category,
    seq: u64,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning fetch: section={} seq={}", category, seq);
    tokio::spawn(async move {
        let result = provider.top_stories(category.as_str()).await;
        if tx.send(Action::FetchCompleted { seq, result }).is_err() {
            warn!(
                "Failed to deliver fetch completion (seq={}): receiver dropped",
                seq
            );
        }
    });
}
