use crate::ai::{HeuristicOpponent, Opponent};
use crate::config::GameMode;
use crate::game::{GameState, MatchStatus, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game_state: GameState,
    mode: GameMode,
    computer: HeuristicOpponent,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(mode: GameMode) -> Self {
        App {
            game_state: GameState::new(),
            mode,
            computer: HeuristicOpponent::new(Player::Two),
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < 6 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                // A new match is a fresh GameState; there is no in-place reset.
                self.game_state = GameState::new();
                self.selected_column = 3;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop a piece in the selected column for the human player, then let
    /// the computer respond when playing single-player.
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let player = self.game_state.current_player();
        match self.game_state.apply_move(self.selected_column, player) {
            Ok((_, status)) => {
                if status == MatchStatus::InProgress && self.mode == GameMode::SinglePlayer {
                    self.computer_turn();
                }
                self.announce_outcome();
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Ask the heuristic opponent for a column and apply it. The chooser
    /// only reads the state; the move goes through the same apply_move
    /// path as a human move, so its win check is authoritative.
    fn computer_turn(&mut self) {
        let column = match self.computer.choose_column(&self.game_state) {
            Ok(column) => column,
            Err(err) => {
                // Unreachable in practice: a full board is already Drawn.
                self.message = Some(err.to_string());
                return;
            }
        };

        if let Err(err) = self
            .game_state
            .apply_move(column, self.computer.player())
        {
            self.message = Some(err.to_string());
        }
    }

    fn announce_outcome(&mut self) {
        match self.game_state.status() {
            MatchStatus::Won { player, .. } => {
                self.message = Some(format!("{} wins!!", player.name()));
            }
            MatchStatus::Drawn => {
                self.message = Some("It's a draw!".to_string());
            }
            MatchStatus::InProgress => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            self.mode,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn test_single_player_drop_triggers_computer_reply() {
        let mut app = App::new(GameMode::SinglePlayer);
        press(&mut app, KeyCode::Enter);

        // One ply from the human and one from the computer.
        assert_eq!(app.game_state.ledger().len(), 2);
        assert_eq!(app.game_state.current_player(), Player::One);
    }

    #[test]
    fn test_multiplayer_drop_switches_turn() {
        let mut app = App::new(GameMode::Multiplayer);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game_state.ledger().len(), 1);
        assert_eq!(app.game_state.current_player(), Player::Two);
    }

    #[test]
    fn test_selection_clamps_at_edges() {
        let mut app = App::new(GameMode::Multiplayer);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, 6);
    }

    #[test]
    fn test_restart_builds_fresh_match() {
        let mut app = App::new(GameMode::Multiplayer);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game_state.board().get(5, 3), Cell::One);

        press(&mut app, KeyCode::Char('r'));
        assert!(app.game_state.ledger().is_empty());
        assert_eq!(app.game_state.board().get(5, 3), Cell::Empty);
        assert_eq!(app.game_state.current_player(), Player::One);
    }

    #[test]
    fn test_full_column_reports_message() {
        let mut app = App::new(GameMode::Multiplayer);
        app.selected_column = 0;
        for _ in 0..6 {
            press(&mut app, KeyCode::Enter);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message.as_deref(), Some("column 0 is full"));
    }
}
