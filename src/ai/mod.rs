//! Computer move selection. The [`Opponent`] trait is the seam between the
//! UI and a move chooser; [`HeuristicOpponent`] is the built-in
//! win/block/score policy.

mod heuristic;

pub use heuristic::HeuristicOpponent;

use crate::error::OpponentError;
use crate::game::GameState;

/// Interface for computer move choosers. Implementations get a read-only
/// view of the match and must not assume their choice has been applied;
/// the caller plays the returned column through `GameState::apply_move`.
pub trait Opponent {
    /// Choose a column to play. Fails only when no column has room, which
    /// callers should rule out by checking for a draw first.
    fn choose_column(&self, state: &GameState) -> Result<usize, OpponentError>;

    /// Display name of this opponent.
    fn name(&self) -> &str;
}
