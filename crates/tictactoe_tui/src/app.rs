//! Application state and key handling.
//!
//! The app never performs I/O itself. Key handling returns [`Effect`]s that
//! the event loop carries out (bell, timers, quitting), and timer results
//! come back as [`AppEvent`]s.

use crate::announcement::{AnnouncementKind, Announcer};
use crate::config::TuiConfig;
use crate::input;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Duration;
use tictactoe_core::{GameState, GameStatus, Mark, MoveOutcome, Position};
use tracing::{debug, info, instrument};

/// Side effects requested by the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Play the click sound.
    Click,
    /// Play the victory sound.
    Victory,
    /// Send [`AppEvent::DismissAnnouncement`] for `generation` after `after`.
    ScheduleDismiss {
        /// Generation of the popup to dismiss.
        generation: u64,
        /// Delay before dismissal.
        after: Duration,
    },
    /// Leave the application.
    Quit,
}

/// Events delivered back to the app by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A popup timer fired.
    DismissAnnouncement {
        /// Generation the timer was scheduled for.
        generation: u64,
    },
}

/// Input mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Keys drive the board and history.
    Playing,
    /// Keys edit a player's name.
    EditingName {
        /// Whose name is being edited.
        mark: Mark,
        /// Text typed so far.
        buffer: String,
    },
}

/// Main application state.
pub struct App {
    game: GameState,
    cursor: Position,
    mode: Mode,
    announcer: Announcer,
    config: TuiConfig,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(config))]
    pub fn new(config: TuiConfig) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            mode: Mode::Playing,
            announcer: Announcer::new(),
            config,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current input mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Popup state.
    pub fn announcer(&self) -> &Announcer {
        &self.announcer
    }

    /// Name to show for `mark`, falling back to the configured label.
    pub fn player_name(&self, mark: Mark) -> &str {
        self.game
            .player_names()
            .display_name(mark, self.config.label(mark))
    }

    /// One-line game status.
    pub fn status_line(&self) -> String {
        match self.game.status() {
            GameStatus::Won(line) => format!("Winner: {}", self.player_name(line.mark())),
            GameStatus::Draw => "No Winners!".to_string(),
            GameStatus::InProgress => {
                format!("Next player: {}", self.player_name(self.game.current_turn()))
            }
        }
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        match &mut self.mode {
            Mode::EditingName { mark, buffer } => match key.code {
                KeyCode::Enter => {
                    let (mark, name) = (*mark, std::mem::take(buffer));
                    debug!(%mark, "Player name updated");
                    self.game.set_player_name(mark, name);
                    self.mode = Mode::Playing;
                    self.refresh_victory_message();
                }
                KeyCode::Esc => self.mode = Mode::Playing,
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Char(c) => buffer.push(c),
                _ => {}
            },
            Mode::Playing => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => effects.push(Effect::Quit),
                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                    self.cursor = input::move_cursor(self.cursor, key.code);
                }
                KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor, &mut effects),
                KeyCode::Char(c @ '1'..='9') => {
                    if let Some(pos) = input::digit_position(c) {
                        self.cursor = pos;
                        self.play(pos, &mut effects);
                    }
                }
                KeyCode::Char('[') => {
                    if let Some(target) = self.game.current_move().checked_sub(1) {
                        self.jump(target, &mut effects);
                    }
                }
                KeyCode::Char(']') => self.jump(self.game.current_move() + 1, &mut effects),
                KeyCode::Home => self.jump(0, &mut effects),
                KeyCode::End => self.jump(self.game.history().len() - 1, &mut effects),
                KeyCode::Char('x') | KeyCode::Char('X') => self.edit_name(Mark::X),
                KeyCode::Char('o') | KeyCode::Char('O') => self.edit_name(Mark::O),
                KeyCode::Char('r') => self.reset(),
                _ => {}
            },
        }
        effects
    }

    /// Handles an event from the event loop.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::DismissAnnouncement { generation } => {
                if self.announcer.dismiss(generation) {
                    debug!("Announcement dismissed");
                }
            }
        }
    }

    /// Starts a new game, dropping names, history and any popup.
    pub fn reset(&mut self) {
        info!("Game reset");
        self.game.reset();
        self.announcer.clear();
        self.mode = Mode::Playing;
    }

    fn play(&mut self, pos: Position, effects: &mut Vec<Effect>) {
        let was_won = self.game.win_result().is_some();
        match self.game.apply_move(pos) {
            MoveOutcome::Applied(action) => {
                debug!(%action, "Move played");
                effects.push(Effect::Click);
                self.observe_position(was_won, effects);
            }
            MoveOutcome::Ignored(reason) => debug!(%reason, "Move ignored"),
        }
    }

    fn jump(&mut self, target: usize, effects: &mut Vec<Effect>) {
        let was_won = self.game.win_result().is_some();
        match self.game.jump_to(target) {
            Ok(()) => self.observe_position(was_won, effects),
            Err(e) => debug!(error = %e, "History jump rejected"),
        }
    }

    fn edit_name(&mut self, mark: Mark) {
        self.mode = Mode::EditingName {
            mark,
            buffer: self.game.player_names().name(mark).to_string(),
        };
    }

    /// Keeps the victory popup in step with the winner's current name.
    fn refresh_victory_message(&mut self) {
        if !self.announcer.is_celebrating() {
            return;
        }
        if let Some(line) = self.game.win_result() {
            let message = format!("Congratulations {}!", self.player_name(line.mark()));
            self.announcer.rewrite(message);
        }
    }

    /// Raises or clears the popup after the displayed board changed.
    fn observe_position(&mut self, was_won: bool, effects: &mut Vec<Effect>) {
        match self.game.status() {
            GameStatus::Won(line) if !was_won => {
                let message = format!("Congratulations {}!", self.player_name(line.mark()));
                info!(%message, "Victory");
                let generation = self.announcer.announce(AnnouncementKind::Victory, message);
                effects.push(Effect::Victory);
                effects.push(Effect::ScheduleDismiss {
                    generation,
                    after: self.config.announcement_delay(),
                });
            }
            GameStatus::Won(_) => {}
            GameStatus::Draw => {
                let already_shown = self
                    .announcer
                    .current()
                    .is_some_and(|a| a.kind() == AnnouncementKind::Draw);
                if !already_shown {
                    self.announcer.announce(AnnouncementKind::Draw, "No Winners!");
                }
            }
            GameStatus::InProgress => self.announcer.clear(),
        }
    }
}
