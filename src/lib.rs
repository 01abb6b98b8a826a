//! The `nonoedit` crate contains the puzzle format codec and the
//! line-constraint validation engine for a nonogram (picross) editor.

// do not warn on older Rust versions
#![allow(unknown_lints)]
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
// some crates are only used in binary (see `main.rs`), not in the lib itself
#![allow(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]
//
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub use self::{
    cell::{filled_runs, CellState},
    clue::Clue,
    grid::{FillGrid, OutOfRange},
    parser::{strip_comment, ParseError, TxtFormat},
    puzzle::{LineKind, Puzzle, PuzzleError},
    render::{Renderer, ShellRenderer},
};

mod cell;
mod clue;
mod grid;
pub mod layout;
pub mod parser;
mod puzzle;
pub mod render;
mod utils;

pub type RcPuzzle = utils::rc::ReadRc<Puzzle>;
pub type RcGrid = utils::rc::MutRc<FillGrid>;
