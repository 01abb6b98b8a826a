use std::fmt;

use thiserror::Error;

use crate::clue::Clue;

/// Which of the two clue directions a line belongs to.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum LineKind {
    Row,
    Column,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Row => "row",
            Self::Column => "column",
        };
        write!(f, "{}", name)
    }
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum PuzzleError {
    #[error("{axis} must be positive")]
    InvalidDimension { axis: &'static str },

    #[error("expected {expected} {kind} clues, found {found}")]
    ClueCountMismatch {
        kind: LineKind,
        expected: usize,
        found: usize,
    },

    #[error("unsatisfiable {kind} clue #{index}: needs {need} cells, only {available} available")]
    UnsatisfiableClue {
        kind: LineKind,
        index: usize,
        need: usize,
        available: usize,
    },
}

/// Immutable definition of a puzzle: its dimensions and declared clues.
///
/// A row clue must fit into `width` cells, a column clue into `height`;
/// `with_clues` rejects definitions violating that, so every constructed
/// `Puzzle` is solvable line-by-line at least in principle.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Puzzle {
    name: String,
    width: usize,
    height: usize,
    row_clues: Vec<Clue>,
    col_clues: Vec<Clue>,
}

impl Puzzle {
    pub fn with_clues(
        name: &str,
        width: usize,
        height: usize,
        row_clues: Vec<Clue>,
        col_clues: Vec<Clue>,
    ) -> Result<Self, PuzzleError> {
        if width == 0 {
            return Err(PuzzleError::InvalidDimension { axis: "width" });
        }
        if height == 0 {
            return Err(PuzzleError::InvalidDimension { axis: "height" });
        }

        if row_clues.len() != height {
            return Err(PuzzleError::ClueCountMismatch {
                kind: LineKind::Row,
                expected: height,
                found: row_clues.len(),
            });
        }
        if col_clues.len() != width {
            return Err(PuzzleError::ClueCountMismatch {
                kind: LineKind::Column,
                expected: width,
                found: col_clues.len(),
            });
        }

        Self::check_satisfiable(LineKind::Row, &row_clues, width)?;
        Self::check_satisfiable(LineKind::Column, &col_clues, height)?;

        Ok(Self {
            name: name.to_string(),
            width,
            height,
            row_clues,
            col_clues,
        })
    }

    fn check_satisfiable(
        kind: LineKind,
        clues: &[Clue],
        available: usize,
    ) -> Result<(), PuzzleError> {
        for (index, clue) in clues.iter().enumerate() {
            let need = clue.min_span();
            if need > available {
                return Err(PuzzleError::UnsatisfiableClue {
                    kind,
                    index,
                    need,
                    available,
                });
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row_clues(&self) -> &[Clue] {
        &self.row_clues
    }

    pub fn col_clues(&self) -> &[Clue] {
        &self.col_clues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clue(runs: &[usize]) -> Clue {
        Clue::new(runs.to_vec())
    }

    #[test]
    fn u_letter() {
        // X   X
        // X   X
        // X X X
        let rows = vec![clue(&[1, 1]), clue(&[1, 1]), clue(&[3])];
        let columns = vec![clue(&[3]), clue(&[1]), clue(&[3])];

        let puzzle = Puzzle::with_clues("u", 3, 3, rows, columns).unwrap();
        assert_eq!(puzzle.width(), 3);
        assert_eq!(puzzle.height(), 3);
        assert_eq!(puzzle.row_clues()[2], clue(&[3]));
    }

    #[test]
    fn zero_width_rejected() {
        let err = Puzzle::with_clues("bad", 0, 1, vec![clue(&[])], vec![]).unwrap_err();
        assert_eq!(err, PuzzleError::InvalidDimension { axis: "width" });
    }

    #[test]
    fn clue_count_checked_against_height() {
        let err = Puzzle::with_clues(
            "bad",
            1,
            2,
            vec![clue(&[1])],
            vec![clue(&[1])],
        )
        .unwrap_err();
        assert_eq!(
            err,
            PuzzleError::ClueCountMismatch {
                kind: LineKind::Row,
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn overflowing_row_clue_rejected() {
        // 3 + 1 + 3 = 7 > 5
        let rows = vec![clue(&[3, 3])];
        let columns = vec![clue(&[]); 5];
        let err = Puzzle::with_clues("bad", 5, 1, rows, columns).unwrap_err();
        assert_eq!(
            err,
            PuzzleError::UnsatisfiableClue {
                kind: LineKind::Row,
                index: 0,
                need: 7,
                available: 5,
            }
        );
    }

    #[test]
    fn tight_fit_accepted() {
        let rows = vec![clue(&[3, 1])];
        let columns = vec![clue(&[1]), clue(&[1]), clue(&[1]), clue(&[]), clue(&[1])];
        assert!(Puzzle::with_clues("tight", 5, 1, rows, columns).is_ok());
    }

    #[test]
    fn empty_clues_always_fit() {
        let puzzle = Puzzle::with_clues(
            "blank",
            2,
            2,
            vec![clue(&[]), clue(&[])],
            vec![clue(&[]), clue(&[])],
        )
        .unwrap();
        assert!(puzzle.row_clues().iter().all(Clue::is_empty));
    }
}
