use std::fmt;

/// Marking of a single grid cell during an editing session.
///
/// Every cell starts out `Unknown`; the user decides it by painting it
/// `Filled` or explicitly ruling it out with `Cleared`.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum CellState {
    Unknown,
    Filled,
    Cleared,
}

impl Default for CellState {
    fn default() -> Self {
        Self::Unknown
    }
}

impl CellState {
    /// Whether the user has decided this cell one way or the other.
    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CellState::*;

        let symbol = match self {
            Unknown => '?',
            Filled => '\u{2b1b}',
            Cleared => '.',
        };
        write!(f, "{}", symbol)
    }
}

/// Lengths of the maximal runs of consecutive `Filled` cells, left to right.
///
/// Both `Unknown` and `Cleared` terminate a run without being counted,
/// so a line with no `Filled` cells yields an empty sequence.
///
/// ```
/// use nonoedit::{filled_runs, CellState};
///
/// let (f, c, u) = (CellState::Filled, CellState::Cleared, CellState::Unknown);
/// assert_eq!(filled_runs(&[]), Vec::<usize>::new());
/// assert_eq!(filled_runs(&[f, c, f, f]), vec![1, 2]);
/// assert_eq!(filled_runs(&[u, u]), Vec::<usize>::new());
/// ```
pub fn filled_runs(line: &[CellState]) -> Vec<usize> {
    let mut runs = Vec::new();
    let mut current = 0;

    for cell in line {
        match cell {
            CellState::Filled => current += 1,
            CellState::Unknown | CellState::Cleared => {
                if current > 0 {
                    runs.push(current);
                    current = 0;
                }
            }
        }
    }

    if current > 0 {
        runs.push(current);
    }
    runs
}
