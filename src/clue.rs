use std::fmt;

use crate::utils;

/// Ordered run lengths declared for a single row or column.
///
/// An empty clue is valid and means the line is entirely cleared.
#[derive(Debug, PartialEq, Eq, Hash, Default, Clone)]
pub struct Clue {
    vec: Vec<usize>,
}

impl Clue {
    pub fn new(mut vec: Vec<usize>) -> Self {
        // remove zero blocks
        utils::remove(&mut vec, &0);
        Self { vec }
    }

    pub fn runs(&self) -> &[usize] {
        &self.vec
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Positions of the last cell of every run when the runs are packed
    /// to the left with single-cell gaps.
    pub fn partial_sums(&self) -> Vec<usize> {
        self.vec
            .iter()
            .scan(None, |prev, &size| {
                let current = if let Some(prev_sum) = *prev {
                    prev_sum + size + 1
                } else {
                    size
                };
                *prev = Some(current);
                *prev
            })
            .collect()
    }

    /// The smallest line length this clue fits into.
    ///
    /// ```
    /// use nonoedit::Clue;
    ///
    /// assert_eq!(Clue::new(vec![3, 3]).min_span(), 7);
    /// assert_eq!(Clue::new(vec![]).min_span(), 0);
    /// ```
    pub fn min_span(&self) -> usize {
        self.partial_sums().last().copied().unwrap_or(0)
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let runs: Vec<_> = self.vec.iter().map(ToString::to_string).collect();
        write!(f, "{}", runs.join(" "))
    }
}
