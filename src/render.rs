//! Plain-text rendering of a puzzle and its fill state, for the CLI
//! front end. The on-screen editor surface is a separate concern and
//! lives outside this crate.

use crate::clue::Clue;
use crate::utils::{pad, pad_with, transpose};
use crate::RcGrid;

pub trait Renderer {
    fn with_grid(grid: RcGrid) -> Self;
    fn render(&self) -> String;
}

/// Renders column clues above the grid and row clues to its left,
/// one two-column cell per symbol.
#[derive(Debug)]
pub struct ShellRenderer {
    grid: RcGrid,
}

impl Renderer for ShellRenderer {
    fn with_grid(grid: RcGrid) -> Self {
        Self { grid }
    }

    fn render(&self) -> String {
        let grid = self.grid.read();
        let puzzle = grid.puzzle();

        let side = Self::clues_to_matrix(puzzle.row_clues());
        let side_width = Self::clues_width(puzzle.row_clues());
        let full_width = side_width + puzzle.width();

        let mut header =
            transpose(&Self::clues_to_matrix(puzzle.col_clues())).unwrap_or_default();
        for row in header.iter_mut() {
            pad_with(row, "#".to_string(), full_width, false);
        }

        let cells: Vec<Vec<String>> = (0..grid.height())
            .filter_map(|y| grid.get_row(y).ok())
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();

        let body = side.into_iter().zip(cells).map(|(mut line, row)| {
            line.extend(row);
            line
        });

        header
            .into_iter()
            .chain(body)
            .map(|line| {
                line.iter()
                    .map(|symbol| pad(symbol, 2, true))
                    .collect::<Vec<_>>()
                    .join("")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl ShellRenderer {
    fn clues_width(clues: &[Clue]) -> usize {
        clues.iter().map(|clue| clue.runs().len()).max().unwrap_or(0)
    }

    fn clues_to_matrix(clues: &[Clue]) -> Vec<Vec<String>> {
        let width = Self::clues_width(clues);
        clues
            .iter()
            .map(|clue| {
                let mut row: Vec<String> =
                    clue.runs().iter().map(ToString::to_string).collect();
                pad_with(&mut row, " ".to_string(), width, false);
                row
            })
            .collect()
    }
}
