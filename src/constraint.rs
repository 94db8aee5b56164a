//! This module defines the rules a Sudoku grid is checked against.
//!
//! The rules of classic Sudoku are a conjunction of three uniqueness
//! predicates: no duplicate digit in a row ([RowConstraint]), in a column
//! ([ColumnConstraint]), or in one of the nine 3×3 regions
//! ([RegionConstraint]). [ClassicConstraint] combines all three and is what
//! the engine operations in the [crate root](../index.html) use.
//!
//! All predicates exclude the checked cell itself, so a filled cell never
//! conflicts with its own content. This is what allows
//! [Constraint::check] to validate a fully or partially filled grid without
//! temporarily clearing each cell first.
//!
//! Besides accept/reject, callers presenting feedback want to know *which*
//! rule a candidate breaks. [ClassicConstraint::check_placement] reports the
//! three verdicts independently as a [PlacementCheck], whose violated rules
//! are named by [Conflict] values.

use crate::{SudokuGrid, REGION_SIZE, SIZE};

use serde::{Deserialize, Serialize};

/// A rule which cells of a [SudokuGrid] must satisfy. For this engine the
/// grid is always checked against [ClassicConstraint], but the solver only
/// relies on this trait, so the row, column, and region rules can also be
/// applied individually.
///
/// Implementors only need to provide [Constraint::check_number], which
/// verifies a proposed digit for a specified cell. `check_cell` and `check`
/// are implemented by default based on it.
pub trait Constraint {

    /// Checks whether the given [SudokuGrid] matches this constraint, that
    /// is, every filled cell matches it. Empty cells never violate a
    /// constraint.
    fn check(&self, grid: &SudokuGrid) -> bool {
        for row in 0..SIZE {
            for column in 0..SIZE {
                if !self.check_cell(grid, column, row) {
                    return false;
                }
            }
        }

        true
    }

    /// Checks whether the cell at the given position fulfills this
    /// constraint. This is the same as calling `check_number` with the digit
    /// which is actually filled in that cell. If the cell is empty, this
    /// function always returns `true`.
    ///
    /// # Panics
    ///
    /// If `column` or `row` is not less than [SIZE].
    fn check_cell(&self, grid: &SudokuGrid, column: usize, row: usize)
            -> bool {
        if let Some(digit) = grid.get_cell(column, row).unwrap() {
            self.check_number(grid, column, row, digit)
        }
        else {
            true
        }
    }

    /// Checks whether the given `digit` could be written into the cell
    /// specified by `column` and `row` without violating this constraint.
    /// The checked cell's own current content is never considered, so a
    /// digit that is already present in the checked cell does not conflict
    /// with itself.
    ///
    /// This function does *not* have to check whether `digit` is in the
    /// range `[1, 9]`; use [Sudoku::is_valid_number](crate::Sudoku::is_valid_number)
    /// for that guarantee.
    ///
    /// # Panics
    ///
    /// If `column` or `row` is not less than [SIZE].
    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
        digit: u8) -> bool;
}

/// A `Constraint` that there are no duplicate digits in each row.
#[derive(Clone)]
pub struct RowConstraint;

impl Constraint for RowConstraint {
    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
            digit: u8) -> bool {
        for other_column in 0..SIZE {
            if other_column != column &&
                    grid.has_number(other_column, row, digit).unwrap() {
                return false;
            }
        }

        true
    }
}

/// A `Constraint` that there are no duplicate digits in each column.
#[derive(Clone)]
pub struct ColumnConstraint;

impl Constraint for ColumnConstraint {
    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
            digit: u8) -> bool {
        for other_row in 0..SIZE {
            if other_row != row &&
                    grid.has_number(column, other_row, digit).unwrap() {
                return false;
            }
        }

        true
    }
}

fn check_number_region(grid: &SudokuGrid, column: usize, row: usize,
        digit: u8, bop: impl Fn(bool, bool) -> bool) -> bool {
    let region_column = (column / REGION_SIZE) * REGION_SIZE;
    let region_row = (row / REGION_SIZE) * REGION_SIZE;

    for other_row in region_row..(region_row + REGION_SIZE) {
        for other_column in region_column..(region_column + REGION_SIZE) {
            if bop(other_row != row, other_column != column) &&
                    grid.has_number(other_column, other_row, digit).unwrap() {
                return false;
            }
        }
    }

    true
}

/// A `Constraint` that there are no duplicate digits in each 3×3 region.
#[derive(Clone)]
pub struct RegionConstraint;

impl Constraint for RegionConstraint {
    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
            digit: u8) -> bool {
        check_number_region(grid, column, row, digit, |a, b| a || b)
    }
}

/// Similar to `RegionConstraint`, but does not check cells in the same row
/// and column, since those are already covered by `RowConstraint` and
/// `ColumnConstraint`. For use in the `ClassicConstraint`.
#[derive(Clone)]
struct RegionConstraintNoRowColumn;

impl Constraint for RegionConstraintNoRowColumn {
    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
            digit: u8) -> bool {
        check_number_region(grid, column, row, digit, |a, b| a && b)
    }
}

/// The classic Sudoku `Constraint`, a logical conjunction of
/// [RowConstraint], [ColumnConstraint], and [RegionConstraint].
#[derive(Clone)]
pub struct ClassicConstraint;

impl Constraint for ClassicConstraint {
    fn check(&self, grid: &SudokuGrid) -> bool {
        RowConstraint.check(grid) &&
            ColumnConstraint.check(grid) &&
            RegionConstraintNoRowColumn.check(grid)
    }

    fn check_cell(&self, grid: &SudokuGrid, column: usize, row: usize)
            -> bool {
        RowConstraint.check_cell(grid, column, row) &&
            ColumnConstraint.check_cell(grid, column, row) &&
            RegionConstraintNoRowColumn.check_cell(grid, column, row)
    }

    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
            digit: u8) -> bool {
        RowConstraint.check_number(grid, column, row, digit) &&
            ColumnConstraint.check_number(grid, column, row, digit) &&
            RegionConstraintNoRowColumn.check_number(grid, column, row, digit)
    }
}

impl ClassicConstraint {

    /// Probes writing `digit` into the cell at the given position, reporting
    /// the verdict of every rule independently instead of a single combined
    /// boolean. A rule that holds for the placement is reported as satisfied
    /// even if another rule is violated.
    ///
    /// # Panics
    ///
    /// If `column` or `row` is not less than [SIZE].
    pub fn check_placement(&self, grid: &SudokuGrid, column: usize,
            row: usize, digit: u8) -> PlacementCheck {
        PlacementCheck {
            row: RowConstraint.check_number(grid, column, row, digit),
            column: ColumnConstraint.check_number(grid, column, row, digit),
            region: RegionConstraint.check_number(grid, column, row, digit)
        }
    }
}

/// The name of a classic Sudoku rule violated by a candidate placement.
/// Serializes to the lowercase rule name (`"row"`, `"column"`, or
/// `"region"`), which is the form callers present to users.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Conflict {

    /// The candidate digit already appears elsewhere in the target row.
    Row,

    /// The candidate digit already appears elsewhere in the target column.
    Column,

    /// The candidate digit already appears elsewhere in the 3×3 region
    /// containing the target cell.
    Region
}

/// The outcome of probing a single candidate placement with
/// [ClassicConstraint::check_placement]. Each rule's verdict is recorded
/// independently, so a placement violating two rules yields exactly two
/// conflicts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlacementCheck {

    /// Whether the placement satisfies the row rule.
    pub row: bool,

    /// Whether the placement satisfies the column rule.
    pub column: bool,

    /// Whether the placement satisfies the region rule.
    pub region: bool
}

impl PlacementCheck {

    /// Indicates whether the placement is acceptable, i.e. all three rules
    /// are satisfied.
    pub fn is_valid(&self) -> bool {
        self.row && self.column && self.region
    }

    /// The names of all violated rules, in row-column-region order. Empty if
    /// and only if [PlacementCheck::is_valid] returns `true`.
    pub fn conflicts(&self) -> Vec<Conflict> {
        let mut conflicts = Vec::new();

        if !self.row {
            conflicts.push(Conflict::Row);
        }

        if !self.column {
            conflicts.push(Conflict::Column);
        }

        if !self.region {
            conflicts.push(Conflict::Region);
        }

        conflicts
    }
}
