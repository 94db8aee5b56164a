//! This module contains the logic for solving Sudoku.
//!
//! Most importantly, this module contains the definition of the
//! [Solver](trait.Solver.html) trait and the
//! [BacktrackingSolver](struct.BacktrackingSolver.html) as a generally usable
//! implementation.

use crate::{Sudoku, SudokuGrid, SIZE};
use crate::constraint::Constraint;

/// The result of an exhaustive solve attempt.
///
/// Puzzles with more than one solution are not detected; the solver commits
/// to the first solution it reaches. Since cells are visited in row-major
/// order and digits are tried in ascending order, that solution is fixed
/// for any given input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the Sudoku is not solveable at all.
    Impossible,

    /// Indicates that a full, rule-satisfying assignment was found, which is
    /// wrapped in this instance.
    Solved(SudokuGrid)
}

/// A trait for structs which have the ability to solve Sudoku. The engine
/// always uses the [BacktrackingSolver], but solving only relies on this
/// trait, so callers can substitute their own search.
pub trait Solver {

    /// Solves, or attempts to solve, the provided Sudoku. Returns
    /// `Solution::Solved` wrapping a completed grid if one was found, and
    /// `Solution::Impossible` if the search space was exhausted without
    /// success. The provided Sudoku itself is not modified.
    fn solve(&self, sudoku: &Sudoku<impl Constraint + Clone>) -> Solution;
}

/// A perfect [Solver](trait.Solver.html) which solves Sudoku by recursively
/// testing all valid digits for each cell, in row-major cell order and
/// ascending digit order, undoing each tentative assignment whose subtree
/// fails. This means two things:
///
/// * Its worst-case runtime is exponential in the number of empty cells,
/// i.e. it may be slow if the Sudoku has many missing digits. Typical
/// puzzles prune quickly; callers wanting a latency bound must enforce it
/// themselves.
/// * It finds a solution whenever one exists, and proves impossibility
/// otherwise.
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    fn solve_rec(sudoku: &mut Sudoku<impl Constraint + Clone>, column: usize,
            row: usize) -> bool {
        // Scanning past the last row means every cell is validly assigned.
        if row == SIZE {
            return true;
        }

        let next_column = (column + 1) % SIZE;
        let next_row = if next_column == 0 { row + 1 } else { row };

        if sudoku.grid().get_cell(column, row).unwrap().is_some() {
            return BacktrackingSolver::solve_rec(sudoku, next_column,
                next_row);
        }

        for digit in 1..=9 {
            if sudoku.is_valid_number(column, row, digit).unwrap() {
                sudoku.grid_mut().set_cell(column, row, digit).unwrap();

                if BacktrackingSolver::solve_rec(sudoku, next_column,
                        next_row) {
                    return true;
                }

                sudoku.grid_mut().clear_cell(column, row).unwrap();
            }
        }

        false
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, sudoku: &Sudoku<impl Constraint + Clone>) -> Solution {
        let mut clone = sudoku.clone();

        if BacktrackingSolver::solve_rec(&mut clone, 0, 0) {
            let Sudoku { grid, .. } = clone;
            Solution::Solved(grid)
        }
        else {
            Solution::Impossible
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::constraint::ClassicConstraint;

    fn test_solves_correctly(puzzle: &str, solution: &str) {
        let sudoku = Sudoku::parse(puzzle, ClassicConstraint).unwrap();
        let solver = BacktrackingSolver;
        let found_solution = solver.solve(&sudoku);

        if let Solution::Solved(grid) = found_solution {
            let expected_grid = SudokuGrid::parse(solution).unwrap();
            assert_eq!(expected_grid, grid, "Solver gave wrong grid.");
        }
        else {
            panic!("Solveable sudoku marked as impossible.");
        }
    }

    #[test]
    fn backtracking_solves_classic_sudoku() {
        let puzzle =
            "..839.7.575.....964..1.......16.29846.9.312.7..754.....62..5\
            .78.8...3.2...492...1";
        let solution =
            "2183967457532841964961578325316729846498312578275496139624153\
            78185763429374928561";
        test_solves_correctly(puzzle, solution);
    }

    #[test]
    fn backtracking_fills_single_hole() {
        let puzzle =
            "1357629849463812577284596136945178328129.67453578241964732985\
            61581673429269145378";
        let solution =
            "1357629849463812577284596136945178328129367453578241964732985\
            61581673429269145378";
        test_solves_correctly(puzzle, solution);
    }

    #[test]
    fn backtracking_leaves_complete_grid_unchanged() {
        let solution =
            "1357629849463812577284596136945178328129367453578241964732985\
            61581673429269145378";
        test_solves_correctly(solution, solution);
    }

    #[test]
    fn backtracking_detects_impossible_sudoku() {
        // The givens are pairwise consistent, yet no complete assignment
        // exists.
        let puzzle =
            "1.5..2.84..63.12.7.23.5.....9..1....8.2.3674.3.7.2..9.47...8.\
            .1..16....926914.37.";
        let sudoku = Sudoku::parse(puzzle, ClassicConstraint).unwrap();

        assert!(sudoku.is_valid());
        assert_eq!(Solution::Impossible, BacktrackingSolver.solve(&sudoku));
    }

    #[test]
    fn backtracking_is_deterministic() {
        let puzzle =
            "5..91372.3...8.5.9.9.25..8.68.47.23...95..46.7.4.....5.2.....\
            ..4..8916..85.72...3";
        let sudoku = Sudoku::parse(puzzle, ClassicConstraint).unwrap();

        let first = BacktrackingSolver.solve(&sudoku);
        let second = BacktrackingSolver.solve(&sudoku);

        assert_eq!(first, second);
    }
}
