//! The line-oriented puzzle text codec: comment stripping, parsing into a
//! [`Puzzle`] and serialization back to the canonical form.
//!
//! The format is a header declaring the dimensions, a `LEFT:` section with
//! one clue line per row and an `UP:` section with one clue line per
//! column:
//!
//! ```text
//! W = 2
//! H = 2
//!
//! LEFT:
//! 1
//!
//!
//! UP:
//! 1
//!
//! ```
//!
//! Anything from the first `#` or `-` to the end of a line is a comment.

use std::fs;
use std::io;
use std::path::Path;

use hashbrown::HashMap;
use log::{debug, info};
use thiserror::Error;

use crate::clue::Clue;
use crate::puzzle::{LineKind, Puzzle, PuzzleError};

const LEFT_MARKER: &str = "LEFT:";
const UP_MARKER: &str = "UP:";

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("cannot read puzzle file: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: expected 'W = <size>', 'H = <size>' or 'LEFT:', got {text:?}")]
    MalformedHeader { line: usize, text: String },

    #[error("line {line}: duplicate declaration of '{name}'")]
    DuplicateDimension { line: usize, name: &'static str },

    #[error("missing '{name} = <size>' declaration")]
    MissingDimension { name: &'static str },

    #[error("missing '{marker}' section")]
    MissingSection { marker: &'static str },

    #[error("line {line}: expected {expected}, got {text:?}")]
    UnexpectedLine {
        line: usize,
        expected: &'static str,
        text: String,
    },

    #[error("line {line}: bad {kind} clue token {token:?}: expected a positive integer")]
    ClueToken {
        kind: LineKind,
        line: usize,
        token: String,
    },

    #[error("expected {expected} {kind} clue lines, found only {found}")]
    TooFewClueLines {
        kind: LineKind,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Invalid(#[from] PuzzleError),
}

/// The prefix of the line up to the first `#` or `-`.
///
/// Both characters introduce a comment anywhere in a line, so a comment
/// may follow real content. No trimming is performed.
///
/// ```
/// use nonoedit::strip_comment;
///
/// assert_eq!(strip_comment("2 1 2 # eyes"), "2 1 2 ");
/// assert_eq!(strip_comment("----"), "");
/// assert_eq!(strip_comment("no comment here"), "no comment here");
/// ```
pub fn strip_comment(line: &str) -> &str {
    match line.find(|c| c == '#' || c == '-') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Scanner state: which part of the file the next content line belongs to.
#[derive(Debug)]
enum ParseState {
    Header,
    RowClues {
        width: usize,
        height: usize,
        remaining: usize,
    },
    AwaitUp {
        width: usize,
        height: usize,
    },
    ColClues {
        width: usize,
        height: usize,
        remaining: usize,
    },
    Done {
        width: usize,
        height: usize,
    },
}

/// A puzzle file held as raw lines, ready to be parsed.
///
/// The codec never opens files by itself (see [`TxtFormat::read_local`]
/// for the thin filesystem front end); any line source will do.
#[derive(Debug)]
pub struct TxtFormat {
    lines: Vec<String>,
}

impl TxtFormat {
    pub fn with_content(content: &str) -> Self {
        Self::with_lines(content.lines().map(String::from).collect())
    }

    pub fn with_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn read_local(file_name: &str) -> Result<Puzzle, ParseError> {
        info!("Reading puzzle from {}", file_name);
        let content = fs::read_to_string(file_name)?;
        let name = Path::new(file_name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("puzzle");
        Self::with_content(&content).parse(name)
    }

    /// Run the scanner over the stored lines and build a validated
    /// [`Puzzle`] with the given name.
    ///
    /// Inside a clue section every line counts, and a blank one is an
    /// empty clue; everywhere else blank lines are separators.
    pub fn parse(&self, name: &str) -> Result<Puzzle, ParseError> {
        let mut dims: HashMap<&'static str, usize> = HashMap::new();
        let mut row_clues = Vec::new();
        let mut col_clues = Vec::new();
        let mut state = ParseState::Header;

        for (index, raw) in self.lines.iter().enumerate() {
            let line_no = index + 1;
            let line = strip_comment(raw).trim();

            state = match state {
                ParseState::Header => {
                    if line.is_empty() {
                        ParseState::Header
                    } else if line == LEFT_MARKER {
                        let width = Self::dimension(&dims, "W")?;
                        let height = Self::dimension(&dims, "H")?;
                        ParseState::RowClues {
                            width,
                            height,
                            remaining: height,
                        }
                    } else if line == UP_MARKER {
                        return Err(ParseError::MissingSection {
                            marker: LEFT_MARKER,
                        });
                    } else {
                        Self::parse_dimension(line, line_no, &mut dims)?;
                        ParseState::Header
                    }
                }
                ParseState::RowClues {
                    width,
                    height,
                    remaining,
                } => {
                    row_clues.push(Self::parse_clue_line(line, LineKind::Row, line_no)?);
                    if remaining == 1 {
                        ParseState::AwaitUp { width, height }
                    } else {
                        ParseState::RowClues {
                            width,
                            height,
                            remaining: remaining - 1,
                        }
                    }
                }
                ParseState::AwaitUp { width, height } => {
                    if line.is_empty() {
                        ParseState::AwaitUp { width, height }
                    } else if line == UP_MARKER {
                        ParseState::ColClues {
                            width,
                            height,
                            remaining: width,
                        }
                    } else {
                        return Err(ParseError::UnexpectedLine {
                            line: line_no,
                            expected: "'UP:'",
                            text: line.to_string(),
                        });
                    }
                }
                ParseState::ColClues {
                    width,
                    height,
                    remaining,
                } => {
                    col_clues.push(Self::parse_clue_line(line, LineKind::Column, line_no)?);
                    if remaining == 1 {
                        ParseState::Done { width, height }
                    } else {
                        ParseState::ColClues {
                            width,
                            height,
                            remaining: remaining - 1,
                        }
                    }
                }
                ParseState::Done { width, height } => {
                    if line.is_empty() {
                        ParseState::Done { width, height }
                    } else {
                        return Err(ParseError::UnexpectedLine {
                            line: line_no,
                            expected: "end of input",
                            text: line.to_string(),
                        });
                    }
                }
            };
        }

        let (width, height) = match state {
            ParseState::Header => {
                return Err(ParseError::MissingSection {
                    marker: LEFT_MARKER,
                })
            }
            ParseState::RowClues {
                height, remaining, ..
            } => {
                return Err(ParseError::TooFewClueLines {
                    kind: LineKind::Row,
                    expected: height,
                    found: height - remaining,
                })
            }
            ParseState::AwaitUp { .. } => {
                return Err(ParseError::MissingSection { marker: UP_MARKER })
            }
            ParseState::ColClues {
                width, remaining, ..
            } => {
                return Err(ParseError::TooFewClueLines {
                    kind: LineKind::Column,
                    expected: width,
                    found: width - remaining,
                })
            }
            ParseState::Done { width, height } => (width, height),
        };

        let puzzle = Puzzle::with_clues(name, width, height, row_clues, col_clues)?;
        debug!(
            "Parsed puzzle {:?}: {}x{}",
            puzzle.name(),
            puzzle.width(),
            puzzle.height()
        );
        Ok(puzzle)
    }

    fn dimension(
        dims: &HashMap<&'static str, usize>,
        name: &'static str,
    ) -> Result<usize, ParseError> {
        dims.get(name)
            .copied()
            .ok_or(ParseError::MissingDimension { name })
    }

    fn parse_dimension(
        line: &str,
        line_no: usize,
        dims: &mut HashMap<&'static str, usize>,
    ) -> Result<(), ParseError> {
        let malformed = || ParseError::MalformedHeader {
            line: line_no,
            text: line.to_string(),
        };

        let eq = line.find('=').ok_or_else(malformed)?;
        let key = line[..eq].trim();
        let value = line[eq + 1..].trim();

        let name = match key {
            "W" => "W",
            "H" => "H",
            _ => return Err(malformed()),
        };
        let size: usize = value.parse().map_err(|_| malformed())?;
        if size == 0 {
            let axis = if name == "W" { "width" } else { "height" };
            return Err(PuzzleError::InvalidDimension { axis }.into());
        }

        if dims.insert(name, size).is_some() {
            return Err(ParseError::DuplicateDimension {
                line: line_no,
                name,
            });
        }
        Ok(())
    }

    fn parse_clue_line(line: &str, kind: LineKind, line_no: usize) -> Result<Clue, ParseError> {
        let mut blocks = Vec::new();
        for token in line.split_whitespace() {
            let size = token
                .parse::<usize>()
                .ok()
                .filter(|&size| size > 0)
                .ok_or_else(|| ParseError::ClueToken {
                    kind,
                    line: line_no,
                    token: token.to_string(),
                })?;
            blocks.push(size);
        }
        Ok(Clue::new(blocks))
    }

    /// The canonical textual form of a puzzle.
    ///
    /// The exact inverse of [`TxtFormat::parse`] modulo comments and
    /// incidental whitespace: `parse(serialize(d))` reproduces `d`.
    pub fn serialize(puzzle: &Puzzle) -> String {
        let clue_lines = |clues: &[Clue]| -> Vec<String> {
            clues.iter().map(ToString::to_string).collect()
        };

        let mut lines = Vec::with_capacity(puzzle.height() + puzzle.width() + 7);
        lines.push(format!("W = {}", puzzle.width()));
        lines.push(format!("H = {}", puzzle.height()));
        lines.push(String::new());
        lines.push(LEFT_MARKER.to_string());
        lines.extend(clue_lines(puzzle.row_clues()));
        lines.push(String::new());
        lines.push(UP_MARKER.to_string());
        lines.extend(clue_lines(puzzle.col_clues()));
        lines.push(String::new());

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_variants() {
        assert_eq!(strip_comment(" # this is comment ").trim(), "");
        assert_eq!(strip_comment(" - this is comment\t").trim(), "");
        assert_eq!(strip_comment("----").trim(), "");
        assert_eq!(strip_comment(" # --- foo\t").trim(), "");
        assert_eq!(strip_comment(" ## -#_ - --- # -- -# $ % hf\t").trim(), "");
        assert_eq!(strip_comment("# sizes (W: width, H: height)").trim(), "");
        assert_eq!(strip_comment("W = 8"), "W = 8");
    }

    fn clue(runs: &[usize]) -> Clue {
        Clue::new(runs.to_vec())
    }

    fn parse(content: &str) -> Result<Puzzle, ParseError> {
        TxtFormat::with_content(content).parse("test")
    }

    #[test]
    fn minimal_puzzle() {
        let p = parse("W = 1\nH = 1\nLEFT:\n1\nUP:\n1\n").unwrap();
        assert_eq!(p.width(), 1);
        assert_eq!(p.height(), 1);
        assert_eq!(p.row_clues(), &[clue(&[1])]);
        assert_eq!(p.col_clues(), &[clue(&[1])]);
    }

    #[test]
    fn header_order_does_not_matter() {
        let p = parse("H = 1\nW = 2\nLEFT:\n1 1\nUP:\n1\n1\n").unwrap();
        assert_eq!(p.width(), 2);
        assert_eq!(p.height(), 1);
    }

    #[test]
    fn whitespace_around_equals_ignored() {
        let p = parse("W=1\nH   =   1\nLEFT:\n1\nUP:\n1\n").unwrap();
        assert_eq!(p.width(), 1);
    }

    #[test]
    fn blank_clue_line_is_empty_clue() {
        let p = parse("W = 2\nH = 2\nLEFT:\n1\n\nUP:\n1\n\n").unwrap();
        assert_eq!(p.row_clues(), &[clue(&[1]), clue(&[])]);
        assert_eq!(p.col_clues(), &[clue(&[1]), clue(&[])]);
    }

    #[test]
    fn comments_dropped_anywhere() {
        let content = "\
# a 1x1 puzzle
W = 1 # one column
H = 1 - one row
LEFT:
1 # the only run
UP:
1
";
        let p = parse(content).unwrap();
        assert_eq!(p.row_clues(), &[clue(&[1])]);
    }

    #[test]
    fn duplicate_dimension_rejected() {
        let err = parse("W = 1\nW = 2\nH = 1\nLEFT:\n1\nUP:\n1\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::DuplicateDimension { line: 2, name: "W" }
        ));
    }

    #[test]
    fn missing_dimension_rejected() {
        let err = parse("W = 1\nLEFT:\n1\nUP:\n1\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingDimension { name: "H" }));
    }

    #[test]
    fn zero_dimension_rejected() {
        let err = parse("W = 0\nH = 1\nLEFT:\nUP:\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Invalid(PuzzleError::InvalidDimension { axis: "width" })
        ));
    }

    #[test]
    fn garbage_header_rejected() {
        let err = parse("WIDTH = 1\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedHeader { line: 1, .. }));
    }

    #[test]
    fn missing_left_section() {
        let err = parse("W = 1\nH = 1\nUP:\n1\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingSection { marker: "LEFT:" }
        ));
    }

    #[test]
    fn missing_up_section() {
        let err = parse("W = 1\nH = 1\nLEFT:\n1\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingSection { marker: "UP:" }));
    }

    #[test]
    fn non_integer_clue_token_rejected() {
        let err = parse("W = 1\nH = 1\nLEFT:\none\nUP:\n1\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::ClueToken {
                kind: LineKind::Row,
                line: 4,
                ..
            }
        ));
    }

    #[test]
    fn zero_clue_token_rejected() {
        let err = parse("W = 1\nH = 1\nLEFT:\n0\nUP:\n1\n").unwrap_err();
        assert!(matches!(err, ParseError::ClueToken { .. }));
    }

    #[test]
    fn truncated_clue_section() {
        let err = parse("W = 2\nH = 3\nLEFT:\n1\n1").unwrap_err();
        assert!(matches!(
            err,
            ParseError::TooFewClueLines {
                kind: LineKind::Row,
                expected: 3,
                found: 2,
            }
        ));
    }

    #[test]
    fn trailing_garbage_rejected() {
        let err = parse("W = 1\nH = 1\nLEFT:\n1\nUP:\n1\nstray\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedLine {
                expected: "end of input",
                ..
            }
        ));
    }

    #[test]
    fn unsatisfiable_clue_reported() {
        // 3 + 1 + 3 = 7 > 5
        let err = parse("W = 5\nH = 1\nLEFT:\n3 3\nUP:\n1\n1\n1\n1\n1\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Invalid(PuzzleError::UnsatisfiableClue {
                kind: LineKind::Row,
                index: 0,
                need: 7,
                available: 5,
            })
        ));
    }

    #[test]
    fn serialize_canonical_layout() {
        let p = parse("H = 2\n W = 2 # shuffled header\nLEFT:\n1\n\nUP:\n1\n\n").unwrap();
        assert_eq!(
            TxtFormat::serialize(&p),
            "W = 2\nH = 2\n\nLEFT:\n1\n\n\nUP:\n1\n\n\n"
        );
    }

    #[test]
    fn round_trip_with_empty_clues() {
        let p = parse("W = 2\nH = 2\nLEFT:\n1\n\nUP:\n1\n\n").unwrap();
        let reparsed = TxtFormat::with_content(&TxtFormat::serialize(&p))
            .parse("test")
            .unwrap();
        assert_eq!(reparsed, p);
    }
}
