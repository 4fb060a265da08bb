use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of same-player cells in a row required to win.
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

/// A board position. Row 0 is the top, row 5 the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

/// The four streak axes as (row, col) step vectors. Runs are reported
/// ordered along the step, so the vertical axis points up to keep runs
/// bottom-to-top.
const AXES: [(i32, i32); 4] = [(0, 1), (-1, 0), (-1, 1), (-1, -1)];

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Lowest empty row in a column, or None when the column is full
    /// (or out of range).
    pub fn available_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.available_row(col).is_none()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        let row = self
            .available_row(col)
            .ok_or(MoveError::ColumnFull(col))?;
        self.cells[row][col] = cell;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Find a contiguous run of at least `required` cells matching `target`
    /// that passes through `anchor`, scanning the four axes in turn.
    ///
    /// The anchor cell itself is never read: it is assumed to match,
    /// which lets callers probe placements that have not been made yet.
    /// Returns the cells of the first qualifying run, ordered along its
    /// axis, or an empty vec when no axis qualifies.
    pub fn streak_through(&self, target: Cell, required: usize, anchor: Coord) -> Vec<Coord> {
        for (dr, dc) in AXES {
            let mut run = self.half_ray(target, anchor, -dr, -dc);
            run.reverse();
            run.push(anchor);
            run.extend(self.half_ray(target, anchor, dr, dc));
            if run.len() >= required {
                return run;
            }
        }
        Vec::new()
    }

    /// Consecutive cells matching `target`, stepping (dr, dc) from the
    /// anchor (exclusive). Stops at the first mismatch or board edge.
    fn half_ray(&self, target: Cell, anchor: Coord, dr: i32, dc: i32) -> Vec<Coord> {
        let mut cells = Vec::new();
        let mut r = anchor.row as i32 + dr;
        let mut c = anchor.col as i32 + dc;

        while (0..ROWS as i32).contains(&r) && (0..COLS as i32).contains(&c) {
            if self.cells[r as usize][c as usize] != target {
                break;
            }
            cells.push(Coord {
                row: r as usize,
                col: c as usize,
            });
            r += dr;
            c += dc;
        }

        cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
