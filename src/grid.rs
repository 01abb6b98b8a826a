use thiserror::Error;

use crate::cell::{filled_runs, CellState};
use crate::layout;
use crate::puzzle::Puzzle;
use crate::utils::rc::ReadRc;

/// Contract violation: a cell coordinate outside the grid.
///
/// The presentation layer is expected to pre-validate coordinates derived
/// from pointer input, so this never fires in normal operation.
#[derive(Error, Debug, PartialEq, Eq, Copy, Clone)]
#[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
pub struct OutOfRange {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Mutable fill state of one editing session, bound to its [`Puzzle`].
///
/// Cells are stored row-major (`index = y * width + x`) and start out
/// all `Unknown`.
#[derive(Debug, Clone)]
pub struct FillGrid {
    puzzle: ReadRc<Puzzle>,
    cells: Vec<CellState>,
}

impl FillGrid {
    pub fn new(puzzle: ReadRc<Puzzle>) -> Self {
        let cells = vec![CellState::default(); puzzle.width() * puzzle.height()];
        Self { puzzle, cells }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn width(&self) -> usize {
        self.puzzle.width()
    }

    pub fn height(&self) -> usize {
        self.puzzle.height()
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, OutOfRange> {
        layout::cell_index(x, y, self.width(), self.height()).ok_or(OutOfRange {
            x,
            y,
            width: self.width(),
            height: self.height(),
        })
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Result<CellState, OutOfRange> {
        Ok(self.cells[self.index(x, y)?])
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, state: CellState) -> Result<(), OutOfRange> {
        let index = self.index(x, y)?;
        self.cells[index] = state;
        Ok(())
    }

    pub fn get_row(&self, y: usize) -> Result<Vec<CellState>, OutOfRange> {
        let start = self.index(0, y)?;
        Ok(self.cells[start..start + self.width()].to_vec())
    }

    pub fn get_column(&self, x: usize) -> Result<Vec<CellState>, OutOfRange> {
        let _ = self.index(x, 0)?;
        Ok((0..self.height())
            .map(|y| self.cells[y * self.width() + x])
            .collect())
    }

    /// Whether the current marking satisfies every declared clue.
    ///
    /// This compares the extracted `Filled` runs of every row and column
    /// against the clues, nothing more: `Unknown` cells merely act as run
    /// separators, so a grid may satisfy this predicate while still
    /// containing undecided cells. Use [`FillGrid::is_solved_full`] for
    /// the stricter "fully decided and correct" check.
    pub fn is_solved(&self) -> bool {
        let width = self.width();

        let rows_match = self
            .cells
            .chunks(width)
            .zip(self.puzzle.row_clues())
            .all(|(row, clue)| filled_runs(row) == clue.runs());

        rows_match
            && self.puzzle.col_clues().iter().enumerate().all(|(x, clue)| {
                let column: Vec<_> = (0..self.height())
                    .map(|y| self.cells[y * width + x])
                    .collect();
                filled_runs(&column) == clue.runs()
            })
    }

    /// [`FillGrid::is_solved`] plus the requirement that no cell is left
    /// `Unknown`.
    pub fn is_solved_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_known()) && self.is_solved()
    }
}
