//! Application state and input handling.
//!
//! The app owns the current [`GameState`] and replaces it with the
//! reducer's output for every action. Cursor, focus and list selection are
//! presentation state and never feed back into the game.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use timetoe::{Action, GameState, reduce, view};
use tracing::{debug, instrument};

use crate::input::{move_cursor, move_selection};
use crate::ui::HitMap;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: usize,
    focus: Focus,
    /// Row of the move list under the selection, in display order.
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates an app around a fresh game.
    pub fn new() -> Self {
        Self::with_game(GameState::new())
    }

    /// Creates an app around an existing game.
    pub fn with_game(game: GameState) -> Self {
        let mut app = Self {
            cursor: game.board().len() / 2,
            game,
            focus: Focus::Board,
            selected: 0,
            should_quit: false,
        };
        app.select_current();
        app
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board index under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Panel receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Runs `action` through the reducer.
    #[instrument(skip(self), fields(step = self.game.step()))]
    pub fn dispatch(&mut self, action: Action) {
        self.game = reduce(&self.game, action);
        self.select_current();
        debug!(status = %self.game.status(), "Dispatched");
    }

    /// Translates a key press into an action and dispatches it.
    ///
    /// Returns the dispatched action, if any.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let action = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
                None
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                None
            }
            KeyCode::Char('s') => Some(Action::ReverseHistory),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                (index < self.game.board().len()).then(|| {
                    self.cursor = index;
                    Action::Click(index)
                })
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(self.activate()),
            code => {
                match self.focus {
                    Focus::Board => {
                        self.cursor = move_cursor(self.cursor, self.game.board().side(), code);
                    }
                    Focus::History => {
                        let len = self.game.history().len();
                        self.selected = move_selection(self.selected, len, code);
                    }
                }
                None
            }
        };

        if let Some(action) = action {
            self.dispatch(action);
        }
        action
    }

    /// Dispatches the message under a left click, if any.
    #[instrument(skip(self, hits))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, hits: &HitMap) -> Option<Action> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let action = hits.hit(mouse.column, mouse.row)?;
        match action {
            Action::Click(index) => {
                self.focus = Focus::Board;
                self.cursor = index;
            }
            Action::JumpTo(_) => self.focus = Focus::History,
            Action::ReverseHistory => {}
        }
        self.dispatch(action);
        Some(action)
    }

    fn activate(&self) -> Action {
        match self.focus {
            Focus::Board => Action::Click(self.cursor),
            Focus::History => view::render_moves(&self.game)
                .get(self.selected)
                .map(|entry| entry.on_click)
                .unwrap_or(Action::JumpTo(self.game.step())),
        }
    }

    fn select_current(&mut self) {
        let step = self.game.step();
        if let Some(row) = self
            .game
            .history()
            .steps()
            .iter()
            .position(|entry| *entry.id() == step)
        {
            self.selected = row;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
