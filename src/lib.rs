// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements a compact 9x9 Sudoku engine. It supports the
//! following key features:
//!
//! * Parsing, printing, and (de)serializing Sudoku grids
//! * Checking individual placements against the standard row, column and
//! block rules
//! * Enumerating every legal move of a position in a well-defined order
//! * Scoring moves with an entropy heuristic that measures how much freedom
//! the rest of the grid retains after the move
//! * Solving near-determined Sudoku with an entropy-guided greedy solver
//!
//! # Editing grids
//!
//! A [Grid] starts out blank and is edited through plain cell operations.
//! Cells are addressed by `(row, column)`, both starting at 0 in the
//! top-left corner.
//!
//! ```
//! use sudoku_entropy::Grid;
//!
//! let mut grid = Grid::new();
//! grid.set(0, 0, 5);
//!
//! assert_eq!(Some(5), grid.get(0, 0));
//! assert_eq!(None, grid.get(0, 1));
//! assert_eq!(1, grid.count_clues());
//! ```
//!
//! Grids can also be parsed from codes (see [Grid::parse] for the format),
//! loaded from files with [Grid::load], and pretty-printed via their
//! `Display` implementation.
//!
//! # Checking placements
//!
//! [can_place](constraint::can_place) decides whether a value may be
//! written into a cell without clashing with its row, column, or block. The
//! grid is never modified by the check.
//!
//! ```
//! use sudoku_entropy::Grid;
//! use sudoku_entropy::constraint;
//!
//! let mut grid = Grid::new();
//! grid.set(0, 0, 5);
//!
//! // 5 now clashes along row 0, column 0, and the top-left block.
//! assert!(!constraint::can_place(&grid, 0, 8, 5));
//! assert!(!constraint::can_place(&grid, 8, 0, 5));
//! assert!(!constraint::can_place(&grid, 1, 1, 5));
//! assert!(constraint::can_place(&grid, 8, 8, 5));
//! ```
//!
//! # Enumerating moves
//!
//! [valid_moves](moves::valid_moves) lists every legal placement of a
//! position as [Candidate]s, ordered by value first, then row, then column.
//! [valid_values](moves::valid_values) does the same for a single cell.
//!
//! ```
//! use sudoku_entropy::{Candidate, Grid};
//! use sudoku_entropy::moves;
//!
//! let grid = Grid::new();
//! let candidates = moves::valid_moves(&grid);
//!
//! // On a blank grid, every placement is legal.
//! assert_eq!(729, candidates.len());
//! assert_eq!(Candidate::new(0, 0, 1), candidates[0]);
//! ```
//!
//! # Solving
//!
//! [EntropySolver](solver::EntropySolver) tries every legal first move and
//! follows each with a greedy descent that always commits the candidate of
//! lowest entropy (see [move_entropy](entropy::move_entropy)). The descent
//! never backtracks, which makes the solver fast on near-determined
//! positions but *incomplete*: puzzles that require revising more than the
//! first move are reported as unsolvable. On failure, the grid is restored
//! to its input state.
//!
//! ```
//! use sudoku_entropy::Grid;
//! use sudoku_entropy::constraint;
//! use sudoku_entropy::solver::EntropySolver;
//!
//! // A solved grid with the last row blanked out. Every blank cell admits
//! // exactly one value, so the greedy descent cannot go wrong.
//! let mut grid = Grid::parse(
//!     "1,2,3,4,5,6,7,8,9,\
//!      4,5,6,7,8,9,1,2,3,\
//!      7,8,9,1,2,3,4,5,6,\
//!      2,3,4,5,6,7,8,9,1,\
//!      5,6,7,8,9,1,2,3,4,\
//!      8,9,1,2,3,4,5,6,7,\
//!      3,4,5,6,7,8,9,1,2,\
//!      6,7,8,9,1,2,3,4,5,\
//!      ,,,,,,,,").unwrap();
//!
//! assert!(EntropySolver.solve(&mut grid));
//! assert!(constraint::is_solved(&grid));
//! ```
//!
//! # Note regarding performance
//!
//! Scoring a single move is cheap (a few thousand cell inspections), but a
//! full descent scores every candidate at every step, and the solver may
//! run one descent per legal first move. Wide-open grids therefore get
//! expensive quickly. As usual for search-heavy code, it is strongly
//! recommended to use at least `opt-level = 2`, even in tests.

pub mod constraint;
pub mod entropy;
pub mod error;
pub mod moves;
pub mod solver;


#[cfg(test)]
mod random_tests;

use error::{ParseError, ParseResult};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::Path;

/// The number of rows and columns of a grid.
pub const SIZE: usize = 9;

/// The number of rows and columns of one of the nine blocks of a grid.
pub const BLOCK_SIZE: usize = 3;

/// The lowest value a cell can hold.
pub const MIN_VALUE: u8 = 1;

/// The highest value a cell can hold.
pub const MAX_VALUE: u8 = 9;

/// A candidate move, that is, the proposal to write a value into one
/// specific cell of a [Grid]. Candidates are produced by the [moves] module
/// and consumed by the [entropy] heuristic and the [solver]. A candidate
/// does not carry any statement about legality by itself.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Candidate {

    /// The row (y-coordinate) of the cell to be filled, in the range
    /// `[0, 9[`.
    pub row: usize,

    /// The column (x-coordinate) of the cell to be filled, in the range
    /// `[0, 9[`.
    pub column: usize,

    /// The value to write into the cell, in the range `[1, 9]`.
    pub value: u8
}

impl Candidate {

    /// Creates a new candidate proposing to write `value` into the cell at
    /// the given `row` and `column`.
    pub fn new(row: usize, column: usize, value: u8) -> Candidate {
        Candidate {
            row,
            column,
            value
        }
    }
}

/// A 9x9 Sudoku grid. Each of the 81 cells is either blank or holds a value
/// between 1 and 9. The cells are organized into nine 3x3 blocks, which
/// together with the rows and columns carry the Sudoku rules checked by the
/// [constraint] module.
///
/// A grid is a plain value: it implements `Copy`, and trial changes are
/// made on a copy that is kept or discarded wholesale. The grid itself does
/// not enforce any Sudoku rules - [Grid::set] happily writes clashing
/// values. Checking legality before a write is the business of
/// [can_place](constraint::can_place).
///
/// `Grid` implements `Display` and renders with box-drawing characters,
/// using `·` for blank cells:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║ · │ · │ · ║ · │ · │ · ║ · │ · │ · ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ · │ · │ · ║ · │ · │ · ║ · │ · │ · ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ · │ · │ · ║ · │ · │ · ║ · │ · │ · ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║ · │ · │ · ║ · │ · │ · ║ · │ · │ · ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ · │ · │ · ║ · │ · │ · ║ · │ · │ · ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ · │ · │ · ║ · │ · │ · ║ · │ · │ · ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║ · │ · │ · ║ · │ · │ · ║ · │ · │ · ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ · │ · │ · ║ · │ · │ · ║ · │ · │ · ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ · │ · │ · ║ · │ · │ · ║ · │ · │ · ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// When serialized with [serde](https://serde.rs/), a grid is represented
/// by its code as defined by [Grid::parse] and
/// [Grid::to_parseable_string], so deserialization validates the input.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct Grid {
    cells: [[Option<u8>; SIZE]; SIZE]
}

fn to_char(cell: Option<u8>) -> char {
    if let Some(value) = cell {
        (b'0' + value) as char
    }
    else {
        '·'
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for column in 0..SIZE {
        if column == 0 {
            result.push(start);
        }
        else if column % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(column));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &Grid, row: usize) -> String {
    line('║', '║', '│', |column| to_char(grid.get(row, column)), ' ', '║',
        true)
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let top_row = top_row();
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();
        let bottom_row = bottom_row();

        for row in 0..SIZE {
            if row == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if row % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, row).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

fn to_string(cell: &Option<u8>) -> String {
    if let Some(value) = cell {
        value.to_string()
    }
    else {
        String::from("")
    }
}

impl Grid {

    /// Creates a new, blank grid in which every cell is empty.
    pub fn new() -> Grid {
        Grid {
            cells: [[None; SIZE]; SIZE]
        }
    }

    /// Parses a code encoding a grid. The code is a comma-separated list of
    /// exactly 81 entries, which are either empty or a number between 1
    /// and 9. The entries are assigned left-to-right, top-to-bottom, where
    /// each row is completed before the next one is started. Whitespace in
    /// the entries is ignored to allow for more intuitive formatting.
    ///
    /// As an example, the code
    ///
    /// ```text
    /// 1,2,3,4,5,6,7,8,9,
    /// 4,5,6,7,8,9,1,2,3,
    /// 7,8,9,1,2,3,4,5,6,
    /// ,,,,,,,,,
    /// ,,,,,,,,,
    /// ,,,,,,,,,
    /// ,,,,,,,,,
    /// ,,,,,,,,,
    /// ,,,,,,,,
    /// ```
    ///
    /// will parse to the following grid:
    ///
    /// ```text
    /// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
    /// ║ 1 │ 2 │ 3 ║ 4 │ 5 │ 6 ║ 7 │ 8 │ 9 ║
    /// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
    /// ║ 4 │ 5 │ 6 ║ 7 │ 8 │ 9 ║ 1 │ 2 │ 3 ║
    /// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
    /// ║ 7 │ 8 │ 9 ║ 1 │ 2 │ 3 ║ 4 │ 5 │ 6 ║
    /// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
    /// ║ · │ · │ · ║ · │ · │ · ║ · │ · │ · ║
    /// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
    /// ║ · │ · │ · ║ · │ · │ · ║ · │ · │ · ║
    /// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
    /// ║ · │ · │ · ║ · │ · │ · ║ · │ · │ · ║
    /// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
    /// ║ · │ · │ · ║ · │ · │ · ║ · │ · │ · ║
    /// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
    /// ║ · │ · │ · ║ · │ · │ · ║ · │ · │ · ║
    /// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
    /// ║ · │ · │ · ║ · │ · │ · ║ · │ · │ · ║
    /// ╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝
    /// ```
    ///
    /// # Errors
    ///
    /// Any specialization of `ParseError` (see that documentation).
    pub fn parse(code: &str) -> ParseResult<Grid> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != SIZE * SIZE {
            return Err(ParseError::WrongNumberOfCells);
        }

        let mut grid = Grid::new();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let value = entry.parse::<u8>()?;

            if value < MIN_VALUE || value > MAX_VALUE {
                return Err(ParseError::InvalidNumber);
            }

            grid.cells[i / SIZE][i % SIZE] = Some(value);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [Grid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_entropy::Grid;
    ///
    /// let mut grid = Grid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set(1, 1, 4);
    /// grid.set(2, 1, 5);
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = Grid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .flatten()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Loads a grid from the file at the given path, which must contain a
    /// code as defined by [Grid::parse]. This function fails soft: if the
    /// file cannot be read or does not contain a valid code, a blank grid
    /// is returned instead of an error.
    pub fn load(path: impl AsRef<Path>) -> Grid {
        if let Ok(code) = fs::read_to_string(path) {
            if let Ok(grid) = Grid::parse(code.as_str()) {
                return grid;
            }
        }

        Grid::new()
    }

    /// Gets the content of the cell at the specified position, that is,
    /// `Some` value if the cell is filled and `None` if it is blank.
    ///
    /// Panics if `row` or `column` is 9 or greater.
    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        self.cells[row][column]
    }

    /// Indicates whether the cell at the specified position holds exactly
    /// the given value. This returns `false` if there is a different value
    /// in that cell or it is blank, for any `value` whatsoever.
    ///
    /// Panics if `row` or `column` is 9 or greater.
    pub fn has_value(&self, row: usize, column: usize, value: u8) -> bool {
        self.get(row, column) == Some(value)
    }

    /// Sets the content of the cell at the specified position to the given
    /// value. If the cell was not blank, the old value is overwritten. No
    /// Sudoku rules are checked here; use
    /// [can_place](constraint::can_place) beforehand if the write must be
    /// legal.
    ///
    /// `value` must be in the range `[1, 9]`; violations are caught by a
    /// debug assertion. Panics if `row` or `column` is 9 or greater.
    pub fn set(&mut self, row: usize, column: usize, value: u8) {
        debug_assert!(value >= MIN_VALUE && value <= MAX_VALUE);

        self.cells[row][column] = Some(value);
    }

    /// Clears the content of the cell at the specified position, that is,
    /// if it contains a value, that value is removed. If the cell is
    /// already blank, it is left that way.
    ///
    /// Panics if `row` or `column` is 9 or greater.
    pub fn clear(&mut self, row: usize, column: usize) {
        self.cells[row][column] = None;
    }

    /// Counts the number of clues given by this grid, that is, the number
    /// of filled cells. While on average Sudoku with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with
    /// a value. In this case, [Grid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().flatten().any(|cell| cell == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// value. In this case, [Grid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell == &None)
    }

    /// Indicates whether this grid configuration is a subset of another
    /// one. That is, all cells filled in this grid with some value must be
    /// filled in `other` with the same value. If this condition is met,
    /// `true` is returned, and `false` otherwise.
    pub fn is_subset(&self, other: &Grid) -> bool {
        self.cells.iter().flatten()
            .zip(other.cells.iter().flatten())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(value) => other_cell == &Some(*value),
                    None => true
                }
            })
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some value
    /// must be filled in this one with the same value. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    pub fn is_superset(&self, other: &Grid) -> bool {
        other.is_subset(self)
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new()
    }
}

impl From<Grid> for String {
    fn from(grid: Grid) -> String {
        grid.to_parseable_string()
    }
}

impl TryFrom<String> for Grid {
    type Error = ParseError;

    fn try_from(code: String) -> ParseResult<Grid> {
        Grid::parse(code.as_str())
    }
}
