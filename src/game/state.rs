use crate::error::MoveError;

use super::board::{Board, Coord, WIN_LENGTH};
use super::Player;

/// One applied ply, as appended to the move ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub column: usize,
    pub row: usize,
    pub player: Player,
    /// Position in the ledger, starting at 0.
    pub seq: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    /// The winner together with the cells of the winning run, ordered
    /// along its axis.
    Won { player: Player, cells: Vec<Coord> },
    Drawn,
}

impl MatchStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MatchStatus::InProgress)
    }
}

/// Authoritative match state: grid occupancy, turn order, move history,
/// and win condition. A terminal match accepts no further moves; start a
/// new match by constructing a fresh `GameState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    ledger: Vec<Move>,
    current_player: Player,
    status: MatchStatus,
}

impl GameState {
    /// Create initial game state
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            ledger: Vec::new(),
            current_player: Player::One, // Red starts
            status: MatchStatus::InProgress,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get match status
    pub fn status(&self) -> &MatchStatus {
        &self.status
    }

    /// All applied moves, in order
    pub fn ledger(&self) -> &[Move] {
        &self.ledger
    }

    /// Check if the match is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    /// Lowest empty row in `column`: `Ok(None)` when the column is full.
    pub fn available_row(&self, column: usize) -> Result<Option<usize>, MoveError> {
        if column >= super::board::COLS {
            return Err(MoveError::InvalidColumn(column));
        }
        Ok(self.board.available_row(column))
    }

    /// Hypothetical streak query: does a run of `required` cells belonging
    /// to `player` pass through `anchor`? The anchor is assumed to belong
    /// to `player` whether or not it is occupied, so callers can evaluate
    /// placements before committing them. Returns the run's cells, or an
    /// empty vec.
    pub fn detect_streak(&self, player: Player, required: usize, anchor: Coord) -> Vec<Coord> {
        self.board.streak_through(player.to_cell(), required, anchor)
    }

    /// Apply a move for `player` in `column`.
    ///
    /// Fails with `MatchAlreadyOver`, `NotCurrentPlayer`, `InvalidColumn`,
    /// or `ColumnFull`; any failure leaves the state untouched. On success
    /// the piece is placed, the ledger extended, and the status
    /// recomputed from a streak check anchored at the new cell. Returns
    /// the applied move and the resulting status.
    pub fn apply_move(
        &mut self,
        column: usize,
        player: Player,
    ) -> Result<(Move, MatchStatus), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::MatchAlreadyOver);
        }
        if player != self.current_player {
            return Err(MoveError::NotCurrentPlayer);
        }

        // drop_piece validates the column before touching the grid
        let row = self.board.drop_piece(column, player.to_cell())?;
        let mv = Move {
            column,
            row,
            player,
            seq: self.ledger.len(),
        };
        self.ledger.push(mv);

        let anchor = Coord { row, col: column };
        let run = self.detect_streak(player, WIN_LENGTH, anchor);
        if !run.is_empty() {
            self.status = MatchStatus::Won { player, cells: run };
        } else if self.board.is_full() {
            self.status = MatchStatus::Drawn;
        } else {
            self.current_player = self.current_player.other();
        }

        Ok((mv, self.status.clone()))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
