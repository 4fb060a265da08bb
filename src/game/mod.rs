//! Core drop-token game logic: board representation, player types, and the
//! game state machine with ledger-backed move application and streak
//! detection.

pub mod board;
mod player;
mod state;

pub use board::{Board, Cell, Coord, COLS, ROWS, WIN_LENGTH};
pub use player::Player;
pub use state::{GameState, MatchStatus, Move};
