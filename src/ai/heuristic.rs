use crate::error::OpponentError;
use crate::game::{Coord, GameState, Player, COLS, WIN_LENGTH};

use super::Opponent;

/// Three-tier column chooser: take an immediate win, otherwise block the
/// first immediate opponent win, otherwise pick the best-scoring column.
///
/// Columns are always scanned left to right, so ties and multiple threats
/// resolve to the lowest column index. A chosen block is not re-checked
/// for a simultaneous win here; the win check that `GameState::apply_move`
/// runs when the move lands is authoritative.
pub struct HeuristicOpponent {
    player: Player,
}

impl HeuristicOpponent {
    pub fn new(player: Player) -> Self {
        HeuristicOpponent { player }
    }

    /// The side this opponent plays.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Columns that still have room, with the row a piece would land in.
    fn open_cells(state: &GameState) -> Vec<Coord> {
        (0..COLS)
            .filter_map(|col| {
                state
                    .board()
                    .available_row(col)
                    .map(|row| Coord { row, col })
            })
            .collect()
    }

    /// Score a candidate placement for the scoring tier.
    fn score(&self, state: &GameState, cell: Coord, opening: bool) -> i32 {
        let mut value = 0;

        // Center preference only matters on the opening ply.
        if opening {
            match cell.col {
                3 => value += 2,
                2 | 4 => value += 1,
                _ => {}
            }
        }

        if !state.detect_streak(self.player, 3, cell).is_empty() {
            value += 2;
        }
        if !state.detect_streak(self.player, 2, cell).is_empty() {
            value += 1;
        }

        value
    }
}

impl Opponent for HeuristicOpponent {
    fn choose_column(&self, state: &GameState) -> Result<usize, OpponentError> {
        let candidates = Self::open_cells(state);
        if candidates.is_empty() {
            return Err(OpponentError::NoMovesAvailable);
        }

        // Tier 1: win now.
        for &cell in &candidates {
            if !state.detect_streak(self.player, WIN_LENGTH, cell).is_empty() {
                return Ok(cell.col);
            }
        }

        // Tier 2: deny the first cell where the opponent would win.
        let opponent = self.player.other();
        for &cell in &candidates {
            if !state.detect_streak(opponent, WIN_LENGTH, cell).is_empty() {
                return Ok(cell.col);
            }
        }

        // Tier 3: scored scan, first maximum wins.
        let opening = state.ledger().is_empty();
        let mut best = candidates[0];
        let mut best_value = self.score(state, best, opening);
        for &cell in &candidates[1..] {
            let value = self.score(state, cell, opening);
            if value > best_value {
                best = cell;
                best_value = value;
            }
        }

        Ok(best.col)
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MatchStatus;

    /// Apply a move for whoever's turn it is.
    fn play(state: &mut GameState, column: usize) {
        let player = state.current_player();
        state.apply_move(column, player).unwrap();
    }

    #[test]
    fn test_opening_move_prefers_center() {
        let state = GameState::new();
        let opponent = HeuristicOpponent::new(Player::One);
        assert_eq!(opponent.choose_column(&state).unwrap(), 3);
    }

    #[test]
    fn test_takes_immediate_win() {
        // Two has three stacked in column 5 and it is Two's turn.
        let mut state = GameState::new();
        play(&mut state, 0); // One
        play(&mut state, 5); // Two
        play(&mut state, 1); // One
        play(&mut state, 5); // Two
        play(&mut state, 6); // One
        play(&mut state, 5); // Two
        play(&mut state, 6); // One
        assert_eq!(state.current_player(), Player::Two);

        let opponent = HeuristicOpponent::new(Player::Two);
        assert_eq!(opponent.choose_column(&state).unwrap(), 5);
    }

    #[test]
    fn test_win_beats_block() {
        // Both sides have an open three; the chooser must complete its
        // own rather than block. One threatens at column 3 (row 5),
        // Two threatens in column 6.
        let mut state = GameState::new();
        play(&mut state, 0); // One (5,0)
        play(&mut state, 6); // Two
        play(&mut state, 1); // One (5,1)
        play(&mut state, 6); // Two
        play(&mut state, 2); // One (5,2)
        play(&mut state, 6); // Two
        assert_eq!(state.current_player(), Player::One);

        let opponent = HeuristicOpponent::new(Player::One);
        assert_eq!(opponent.choose_column(&state).unwrap(), 3);
    }

    #[test]
    fn test_blocks_horizontal_threat() {
        // Two holds (5,1), (5,2), (5,3); One, the computer, must block at
        // column 0 or 4. Left-to-right scan finds column 0 first.
        let mut state = GameState::new();
        play(&mut state, 0); // One (5,0)... occupied, so threat is 1..=3
        play(&mut state, 1); // Two
        play(&mut state, 0); // One (4,0)
        play(&mut state, 2); // Two
        play(&mut state, 6); // One
        play(&mut state, 3); // Two
        assert_eq!(state.current_player(), Player::One);

        let opponent = HeuristicOpponent::new(Player::One);
        // Column 0 is occupied at row 5, so the completing cell is (5,4).
        assert_eq!(opponent.choose_column(&state).unwrap(), 4);
    }

    #[test]
    fn test_blocks_open_three_at_first_column() {
        // Two holds (5,1), (5,2), (5,3) with both ends open; columns 0
        // and 4 both complete the four, and the left-to-right scan takes
        // column 0.
        let mut state = GameState::new();
        play(&mut state, 5); // One (5,5)
        play(&mut state, 1); // Two (5,1)
        play(&mut state, 5); // One (4,5)
        play(&mut state, 2); // Two (5,2)
        play(&mut state, 6); // One (5,6)
        play(&mut state, 3); // Two (5,3)
        assert_eq!(state.current_player(), Player::One);

        let opponent = HeuristicOpponent::new(Player::One);
        assert_eq!(opponent.choose_column(&state).unwrap(), 0);
    }

    #[test]
    fn test_block_move_is_playable() {
        // A threat completed only at row 4 must be blocked at that row's
        // column, not a coincidentally-open bottom cell.
        let mut state = GameState::new();
        play(&mut state, 2); // One (5,2)
        play(&mut state, 2); // Two (4,2)
        play(&mut state, 3); // One (5,3)
        play(&mut state, 3); // Two (4,3)
        play(&mut state, 6); // One
        play(&mut state, 4); // Two (5,4)
        play(&mut state, 6); // One
        play(&mut state, 4); // Two (4,4)
        assert_eq!(state.current_player(), Player::One);

        // Two threatens (4,2)-(4,3)-(4,4) completed at (4,1) or (4,5);
        // neither is reachable yet, so no tier-2 block fires and the
        // chooser falls through to scoring.
        let opponent = HeuristicOpponent::new(Player::One);
        let col = opponent.choose_column(&state).unwrap();
        assert!(col < COLS);
    }

    #[test]
    fn test_scoring_prefers_own_progress() {
        // One (the computer) holds (5,2) and (5,3); column 1 completes a
        // hypothetical three-in-a-row (+2 and +1), beating the columns
        // that only make a pair.
        let mut state = GameState::new();
        play(&mut state, 2); // One (5,2)
        play(&mut state, 6); // Two
        play(&mut state, 3); // One (5,3)
        play(&mut state, 6); // Two
        assert_eq!(state.current_player(), Player::One);

        let opponent = HeuristicOpponent::new(Player::One);
        assert_eq!(opponent.choose_column(&state).unwrap(), 1);
    }

    #[test]
    fn test_ties_resolve_to_first_column() {
        // Past the opening ply with no streak potential anywhere, every
        // column scores zero and the scan keeps column 0.
        let mut state = GameState::new();
        play(&mut state, 3); // One
        assert_eq!(state.current_player(), Player::Two);

        let opponent = HeuristicOpponent::new(Player::Two);
        assert_eq!(opponent.choose_column(&state).unwrap(), 0);
    }

    #[test]
    fn test_full_board_yields_no_moves() {
        let mut state = GameState::new();
        let columns = [
            0, 1, 2, 3, 4, 5, 0, 1, 2, 3, 4, 5, 0, 1, 2, 3, 4, 5, 1, 0, 3, 2, 5, 4, 1, 0, 3, 2,
            5, 4, 1, 0, 3, 2, 5, 4, 6, 6, 6, 6, 6, 6,
        ];
        for &col in &columns {
            play(&mut state, col);
        }
        assert_eq!(*state.status(), MatchStatus::Drawn);

        let opponent = HeuristicOpponent::new(Player::One);
        assert_eq!(
            opponent.choose_column(&state),
            Err(OpponentError::NoMovesAvailable)
        );
    }

    #[test]
    fn test_choose_does_not_mutate_state() {
        let mut state = GameState::new();
        play(&mut state, 3);
        let snapshot = state.clone();

        let opponent = HeuristicOpponent::new(Player::Two);
        opponent.choose_column(&state).unwrap();
        assert_eq!(state, snapshot);
    }
}
