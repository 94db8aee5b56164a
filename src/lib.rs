// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements an easy-to-understand engine for classic 9×9
//! Sudoku. It supports the following key features:
//!
//! * Parsing and printing Sudoku grids in the common 81-character line
//! format
//! * Validating that a puzzle is well-formed and that its given digits are
//! mutually consistent
//! * Checking a single candidate placement and naming each rule it violates
//! * Solving puzzles using a perfect backtracking algorithm
//!
//! # Parsing and printing Sudoku
//!
//! A grid is written as 81 characters in row-major order, each either a
//! digit `'1'` to `'9'` or the blank marker `'.'`. See [SudokuGrid::parse]
//! for details.
//!
//! ```
//! use sudoku_classic::SudokuGrid;
//!
//! let grid = SudokuGrid::parse(
//!     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1\
//!     ..16....926914.37.").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Validating puzzles
//!
//! [validate_puzzle] checks the encoding and the consistency of all given
//! digits in one call. Errors carry the exact message to show the user.
//!
//! ```
//! use sudoku_classic::{validate_puzzle, SudokuError};
//!
//! assert_eq!(Err(SudokuError::InvalidLength), validate_puzzle("123..."));
//! ```
//!
//! # Checking a placement
//!
//! [check_placement] probes one candidate digit at one cell and reports the
//! row, column, and region rules independently, so user feedback can name
//! every violated rule.
//!
//! ```
//! use sudoku_classic::{check_placement, Coordinate};
//! use sudoku_classic::constraint::Conflict;
//!
//! let puzzle =
//!     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1\
//!     ..16....926914.37.";
//! let coordinate = Coordinate::parse("A2").unwrap();
//!
//! let check = check_placement(puzzle, coordinate, 3).unwrap();
//! assert!(check.is_valid());
//!
//! let check = check_placement(puzzle, coordinate, 6).unwrap();
//! assert_eq!(vec![Conflict::Column, Conflict::Region], check.conflicts());
//! ```
//!
//! # Solving Sudoku
//!
//! [solve_puzzle] validates and then searches exhaustively, returning the
//! completed encoding. Cells are visited in row-major order and digits
//! tried in ascending order, so the answer for a given input never changes.
//!
//! ```
//! use sudoku_classic::solve_puzzle;
//!
//! let solution = solve_puzzle(
//!     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1\
//!     ..16....926914.37.").unwrap();
//! assert_eq!(
//!     "1357629849463812577284596136945178328129367453578241964732985615\
//!     81673429269145378", solution);
//! ```

pub mod constraint;
pub mod error;
pub mod solver;

#[cfg(test)]
mod fix_tests;

pub use crate::error::{SudokuError, SudokuResult};

use crate::constraint::{ClassicConstraint, Constraint, PlacementCheck};
use crate::solver::{BacktrackingSolver, Solution, Solver};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of rows and columns of a grid.
pub const SIZE: usize = 9;

/// The number of rows and columns of one region.
pub const REGION_SIZE: usize = 3;

/// The number of cells of a grid, which is also the length of a grid
/// encoding.
pub const CELL_COUNT: usize = SIZE * SIZE;

fn to_char(cell: Option<u8>) -> char {
    if let Some(digit) = cell {
        (b'0' + digit) as char
    }
    else {
        ' '
    }
}

fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

const TOP_ROW: &str =
    "╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗\n";
const THIN_SEPARATOR_LINE: &str =
    "╟───┼───┼───╫───┼───┼───╫───┼───┼───╢\n";
const THICK_SEPARATOR_LINE: &str =
    "╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣\n";
const BOTTOM_ROW: &str =
    "╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝";

/// A classic Sudoku grid: 9 rows of 9 cells, divided into nine 3×3 regions,
/// where each cell may or may not be occupied by a digit from 1 to 9.
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║           ⋮ and so on ⋮           ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// `SudokuGrid` implements `Display` in the manner drawn above, and
/// serializes as its 81-character encoding (see [SudokuGrid::parse]).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct SudokuGrid {
    cells: [Option<u8>; CELL_COUNT]
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            if row == 0 {
                f.write_str(TOP_ROW)?;
            }
            else if row % REGION_SIZE == 0 {
                f.write_str(THICK_SEPARATOR_LINE)?;
            }
            else {
                f.write_str(THIN_SEPARATOR_LINE)?;
            }

            for column in 0..SIZE {
                let separator = if column % REGION_SIZE == 0 {
                    '║'
                }
                else {
                    '│'
                };
                write!(f, "{} {} ", separator,
                    to_char(self.cells[index(column, row)]))?;
            }

            f.write_str("║\n")?;
        }

        f.write_str(BOTTOM_ROW)
    }
}

impl SudokuGrid {

    /// Creates a new, empty grid.
    ///
    /// ```
    /// use sudoku_classic::SudokuGrid;
    ///
    /// let grid = SudokuGrid::empty();
    /// assert_eq!(None, grid.get_cell(4, 4).unwrap());
    /// assert!(!grid.is_full());
    /// ```
    pub fn empty() -> SudokuGrid {
        SudokuGrid {
            cells: [None; CELL_COUNT]
        }
    }

    /// Parses an 81-character encoding of a grid. Each character is either
    /// a digit `'1'` to `'9'` or the blank marker `'.'`, and cells are
    /// listed in row-major order: the character at index `i` describes the
    /// cell in row `i / 9`, column `i % 9`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidCharacters` if the encoding contains any
    /// character outside the digit-or-blank alphabet. This is checked
    /// first, so a malformed string of the wrong length reports its bad
    /// characters.
    /// * `SudokuError::InvalidLength` if the encoding is not exactly 81
    /// characters long.
    ///
    /// # Example
    ///
    /// ```
    /// use sudoku_classic::SudokuGrid;
    ///
    /// let grid = SudokuGrid::parse(
    ///     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1\
    ///     ..16....926914.37.").unwrap();
    /// assert_eq!(Some(1), grid.get_cell(0, 0).unwrap());
    /// assert_eq!(None, grid.get_cell(1, 0).unwrap());
    /// assert_eq!(Some(4), grid.get_cell(8, 0).unwrap());
    /// ```
    pub fn parse(encoding: &str) -> SudokuResult<SudokuGrid> {
        for c in encoding.chars() {
            if c != '.' && !('1'..='9').contains(&c) {
                return Err(SudokuError::InvalidCharacters);
            }
        }

        if encoding.len() != CELL_COUNT {
            return Err(SudokuError::InvalidLength);
        }

        let mut cells = [None; CELL_COUNT];

        for (i, c) in encoding.bytes().enumerate() {
            if c != b'.' {
                cells[i] = Some(c - b'0');
            }
        }

        Ok(SudokuGrid { cells })
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string
    /// and parsed again will not change, and a well-formed encoding that is
    /// parsed and converted back is reproduced character for character.
    ///
    /// ```
    /// use sudoku_classic::SudokuGrid;
    ///
    /// let encoding =
    ///     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1\
    ///     ..16....926914.37.";
    /// let grid = SudokuGrid::parse(encoding).unwrap();
    /// assert_eq!(encoding, grid.to_parseable_string());
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(|&cell| match cell {
                Some(digit) => (b'0' + digit) as char,
                None => '.'
            })
            .collect()
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::InvalidCoordinate` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<u8>> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::InvalidCoordinate)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// digit. This will return `false` if there is a different digit in
    /// that cell or it is empty.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not less than 9. In that case,
    /// `SudokuError::InvalidCoordinate` is returned.
    pub fn has_number(&self, column: usize, row: usize, digit: u8)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(digit == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. If the cell was not empty, the old digit will be overwritten.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidCoordinate` if either `column` or `row` are
    /// not less than 9.
    /// * `SudokuError::InvalidValue` if `digit` is not in the range
    /// `[1, 9]`.
    pub fn set_cell(&mut self, column: usize, row: usize, digit: u8)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::InvalidCoordinate);
        }

        if digit == 0 || digit > 9 {
            return Err(SudokuError::InvalidValue);
        }

        self.cells[index(column, row)] = Some(digit);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is,
    /// if it contains a digit, that digit is removed. If the cell is
    /// already empty, it will be left that way.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not less than 9. In that case,
    /// `SudokuError::InvalidCoordinate` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::InvalidCoordinate);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with
    /// a digit.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }
}

impl From<SudokuGrid> for String {
    fn from(grid: SudokuGrid) -> String {
        grid.to_parseable_string()
    }
}

impl TryFrom<String> for SudokuGrid {
    type Error = SudokuError;

    fn try_from(encoding: String) -> SudokuResult<SudokuGrid> {
        SudokuGrid::parse(&encoding)
    }
}

/// The zero-based address of one cell of the grid.
///
/// Users address cells by a letter-plus-digit string such as `"A1"`: the
/// letter `'A'` to `'I'` names the row, the digit `'1'` to `'9'` the
/// column. [Coordinate::parse] accepts that form case-insensitively, while
/// the engine itself works only with the zero-based column and row held
/// here. `Display` writes the canonical uppercase form back out.
///
/// ```
/// use sudoku_classic::Coordinate;
///
/// let coordinate = Coordinate::parse("c7").unwrap();
/// assert_eq!(6, coordinate.column());
/// assert_eq!(2, coordinate.row());
/// assert_eq!("C7", coordinate.to_string());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Coordinate {
    column: usize,
    row: usize
}

impl Coordinate {

    /// Creates a coordinate from a zero-based column and row.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not less than 9. In that case,
    /// `SudokuError::InvalidCoordinate` is returned.
    pub fn new(column: usize, row: usize) -> SudokuResult<Coordinate> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::InvalidCoordinate);
        }

        Ok(Coordinate { column, row })
    }

    /// Parses a two-character coordinate string: a row letter `'A'` to
    /// `'I'` (lowercase is accepted as well) followed by a column digit
    /// `'1'` to `'9'`.
    ///
    /// # Errors
    ///
    /// If the input has any other length or either character is out of
    /// range. In that case, `SudokuError::InvalidCoordinate` is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use sudoku_classic::{Coordinate, SudokuError};
    ///
    /// assert_eq!(Ok(Coordinate::new(0, 0).unwrap()),
    ///     Coordinate::parse("A1"));
    /// assert_eq!(Err(SudokuError::InvalidCoordinate),
    ///     Coordinate::parse("J1"));
    /// assert_eq!(Err(SudokuError::InvalidCoordinate),
    ///     Coordinate::parse("A0"));
    /// assert_eq!(Err(SudokuError::InvalidCoordinate),
    ///     Coordinate::parse("A10"));
    /// ```
    pub fn parse(code: &str) -> SudokuResult<Coordinate> {
        let mut chars = code.chars();

        let row = match chars.next() {
            Some(c) if c.is_ascii_alphabetic() => {
                let letter = c.to_ascii_uppercase();

                if letter > 'I' {
                    return Err(SudokuError::InvalidCoordinate);
                }

                letter as usize - 'A' as usize
            },
            _ => return Err(SudokuError::InvalidCoordinate)
        };
        let column = match chars.next() {
            Some(c) if ('1'..='9').contains(&c) =>
                c as usize - '1' as usize,
            _ => return Err(SudokuError::InvalidCoordinate)
        };

        if chars.next().is_some() {
            return Err(SudokuError::InvalidCoordinate);
        }

        Ok(Coordinate { column, row })
    }

    /// Gets the zero-based column (x-coordinate) of the addressed cell.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Gets the zero-based row (y-coordinate) of the addressed cell.
    pub fn row(&self) -> usize {
        self.row
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.row as u8) as char, self.column + 1)
    }
}

/// A Sudoku represents a grid of digits with an associated constraint. The
/// digits may or may not fulfill the constraint, but there is a method to
/// check it.
///
/// The engine operations in this crate always pair a grid with
/// [ClassicConstraint]; the type is nevertheless generic so that the
/// individual rules in the [constraint] module can be applied on their own.
#[derive(Clone)]
pub struct Sudoku<C: Constraint + Clone> {
    grid: SudokuGrid,
    constraint: C
}

impl<C: Constraint + Clone> Sudoku<C> {

    /// Creates a new Sudoku with the provided constraint and a given grid,
    /// which may already contain some digits. Note that it is *not* checked
    /// whether the given grid fulfills the constraint - it is perfectly
    /// legal to create an invalid Sudoku here.
    pub fn new_with_grid(grid: SudokuGrid, constraint: C) -> Sudoku<C> {
        Sudoku {
            grid,
            constraint
        }
    }

    /// Parses the encoding into a [SudokuGrid] using [SudokuGrid::parse]
    /// and wraps the result in a Sudoku with the given constraint. Note
    /// that it is not required that the parsed grid matches the constraint.
    ///
    /// # Errors
    ///
    /// If the parsing fails. See [SudokuGrid::parse] for further
    /// information.
    pub fn parse(encoding: &str, constraint: C) -> SudokuResult<Sudoku<C>> {
        Ok(Sudoku::new_with_grid(SudokuGrid::parse(encoding)?, constraint))
    }

    /// Gets a reference to the `SudokuGrid` of this Sudoku.
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    /// Gets a mutable reference to the `SudokuGrid` of this Sudoku.
    pub fn grid_mut(&mut self) -> &mut SudokuGrid {
        &mut self.grid
    }

    /// Gets a reference to the `Constraint` of this Sudoku.
    pub fn constraint(&self) -> &C {
        &self.constraint
    }

    /// Indicates whether the entire grid matches the constraint, i.e.
    /// every filled cell is consistent with all others. Since each check
    /// excludes the checked cell itself, a fully valid solved grid passes
    /// too.
    pub fn is_valid(&self) -> bool {
        self.constraint.check(&self.grid)
    }

    /// Indicates whether the given digit would be valid in the cell at the
    /// given location. That is, if the digit violated the constraint,
    /// `false` is returned, and `true` otherwise. The cell's own current
    /// content is not considered.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidCoordinate` if either `column` or `row` are
    /// not less than 9.
    /// * `SudokuError::InvalidValue` if `digit` is not in the range
    /// `[1, 9]`.
    pub fn is_valid_number(&self, column: usize, row: usize, digit: u8)
            -> SudokuResult<bool> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::InvalidCoordinate)
        }
        else if digit == 0 || digit > 9 {
            Err(SudokuError::InvalidValue)
        }
        else {
            Ok(self.constraint.check_number(&self.grid, column, row, digit))
        }
    }
}

/// Checks that `encoding` is a well-formed puzzle whose given digits are
/// mutually consistent under classic rules. This performs no search; a
/// puzzle can pass validation and still turn out to have no solution.
///
/// # Errors
///
/// * `SudokuError::InvalidCharacters` or `SudokuError::InvalidLength` if
/// the encoding is malformed (see [SudokuGrid::parse]).
/// * `SudokuError::ConflictingGivens` if two given digits contradict each
/// other in a row, column, or region.
pub fn validate_puzzle(encoding: &str) -> SudokuResult<()> {
    let sudoku = Sudoku::parse(encoding, ClassicConstraint)?;

    if sudoku.is_valid() {
        Ok(())
    }
    else {
        Err(SudokuError::ConflictingGivens)
    }
}

/// Probes writing `digit` into the cell addressed by `coordinate`,
/// reporting each classic rule independently in the returned
/// [PlacementCheck]. The puzzle is fully validated first. If the addressed
/// cell already holds exactly the candidate digit, the placement is
/// reported valid with no conflicts, taking precedence over any scanning.
///
/// # Errors
///
/// * `SudokuError::InvalidCharacters` or `SudokuError::InvalidLength` if
/// the encoding is malformed (see [SudokuGrid::parse]).
/// * `SudokuError::ConflictingGivens` if the puzzle's given digits already
/// contradict each other.
/// * `SudokuError::InvalidValue` if `digit` is not in the range `[1, 9]`.
///
/// # Example
///
/// ```
/// use sudoku_classic::{check_placement, Coordinate};
///
/// let puzzle =
///     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1\
///     ..16....926914.37.";
///
/// // Cell A1 already holds a 1, so a 1 there is trivially fine.
/// let coordinate = Coordinate::parse("A1").unwrap();
/// let check = check_placement(puzzle, coordinate, 1).unwrap();
/// assert!(check.is_valid());
/// assert!(check.conflicts().is_empty());
/// ```
pub fn check_placement(encoding: &str, coordinate: Coordinate, digit: u8)
        -> SudokuResult<PlacementCheck> {
    let sudoku = Sudoku::parse(encoding, ClassicConstraint)?;

    if !sudoku.is_valid() {
        return Err(SudokuError::ConflictingGivens);
    }

    if digit == 0 || digit > 9 {
        return Err(SudokuError::InvalidValue);
    }

    let column = coordinate.column();
    let row = coordinate.row();

    // An existing equal digit wins over conflict scanning.
    if sudoku.grid().has_number(column, row, digit)? {
        return Ok(PlacementCheck {
            row: true,
            column: true,
            region: true
        });
    }

    Ok(ClassicConstraint.check_placement(sudoku.grid(), column, row, digit))
}

/// Solves the given puzzle by exhaustive backtracking search and returns
/// the encoding of the completed grid. The puzzle is fully validated
/// first; solving is never attempted on a malformed or inconsistent
/// puzzle. When a puzzle admits more than one solution, the one returned
/// is fixed by the search order: cells are visited in row-major order and
/// digits tried ascending.
///
/// # Errors
///
/// * `SudokuError::InvalidCharacters` or `SudokuError::InvalidLength` if
/// the encoding is malformed (see [SudokuGrid::parse]).
/// * `SudokuError::ConflictingGivens` if two given digits contradict each
/// other.
/// * `SudokuError::NoSolution` if the search space was exhausted without
/// finding a complete assignment.
pub fn solve_puzzle(encoding: &str) -> SudokuResult<String> {
    let sudoku = Sudoku::parse(encoding, ClassicConstraint)?;

    if !sudoku.is_valid() {
        return Err(SudokuError::ConflictingGivens);
    }

    match BacktrackingSolver.solve(&sudoku) {
        Solution::Solved(grid) => Ok(grid.to_parseable_string()),
        Solution::Impossible => Err(SudokuError::NoSolution)
    }
}

/// Parses a candidate value as supplied by a user: a single character
/// `'1'` to `'9'`.
///
/// # Errors
///
/// If the input has any other length or content. In that case,
/// `SudokuError::InvalidValue` is returned.
///
/// # Example
///
/// ```
/// use sudoku_classic::{parse_value, SudokuError};
///
/// assert_eq!(Ok(7), parse_value("7"));
/// assert_eq!(Err(SudokuError::InvalidValue), parse_value("0"));
/// assert_eq!(Err(SudokuError::InvalidValue), parse_value("10"));
/// assert_eq!(Err(SudokuError::InvalidValue), parse_value("a"));
/// ```
pub fn parse_value(value: &str) -> SudokuResult<u8> {
    let mut chars = value.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) if ('1'..='9').contains(&c) => Ok(c as u8 - b'0'),
        _ => Err(SudokuError::InvalidValue)
    }
}
