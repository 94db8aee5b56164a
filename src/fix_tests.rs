use crate::{
    check_placement,
    parse_value,
    solve_puzzle,
    validate_puzzle,
    Coordinate,
    SudokuError,
    SudokuGrid
};
use crate::constraint::Conflict;

// Known puzzles together with their unique solutions.

const PUZZLES_AND_SOLUTIONS: [(&str, &str); 5] = [
    ("1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1.\
        .16....926914.37.",
     "1357629849463812577284596136945178328129367453578241964732985615\
        81673429269145378"),
    ("5..91372.3...8.5.9.9.25..8.68.47.23...95..46.7.4.....5.2.......\
        4..8916..85.72...3",
     "5689137243426875191972543866854792312195384677341628959263451784\
        73891652851726943"),
    ("..839.7.575.....964..1.......16.29846.9.312.7..754.....62..5.78.\
        8...3.2...492...1",
     "2183967457532841964961578325316729846498312578275496139624153781\
        85763429374928561"),
    (".7.89.....5....3.4.2..4..1.5689..472...6.....1.7.5.63873.1.2.8.6\
        ..47.1..2.9.387.6",
     "4738912658517263949263458175689134723426879511972546387341625896\
        85479123219538746"),
    ("82..4..6...16..89...98315.749.157.............53..4...96.415..81\
        ..7632..3...28.51",
     "8275491635316728946498315274961573822183964757532849169624157381\
        85763249374928651")
];

#[test]
fn known_puzzles_validate() {
    for (puzzle, _) in &PUZZLES_AND_SOLUTIONS {
        assert_eq!(Ok(()), validate_puzzle(puzzle));
    }
}

#[test]
fn known_puzzles_solve_to_known_solutions() {
    for (puzzle, solution) in &PUZZLES_AND_SOLUTIONS {
        assert_eq!(Ok((*solution).to_owned()), solve_puzzle(puzzle));
    }
}

#[test]
fn solutions_are_full_and_round_trip() {
    for (_, solution) in &PUZZLES_AND_SOLUTIONS {
        let grid = SudokuGrid::parse(solution).unwrap();

        assert!(grid.is_full());
        assert_eq!(*solution, grid.to_parseable_string());
    }
}

#[test]
fn solving_twice_gives_identical_output() {
    let (puzzle, _) = PUZZLES_AND_SOLUTIONS[0];

    assert_eq!(solve_puzzle(puzzle), solve_puzzle(puzzle));
}

#[test]
fn empty_puzzle_solves_to_first_row_major_assignment() {
    let empty = ".".repeat(81);

    // Fixed by the row-major scan and ascending digit order.
    assert_eq!(
        Ok(String::from(
            "1234567894567891237891234562143658973658972148972143655316429\
            78642978531978531642")),
        solve_puzzle(&empty));
}

#[test]
fn malformed_puzzles_are_rejected_before_solving() {
    let invalid_characters =
        "a.b..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1.\
        .16....926914.37.";

    assert_eq!(Err(SudokuError::InvalidCharacters),
        solve_puzzle(invalid_characters));
    assert_eq!(Err(SudokuError::InvalidLength), solve_puzzle("123..."));
}

#[test]
fn conflicting_givens_are_rejected_before_solving() {
    // Each row repeats its leading digit within its first region.
    let conflicting =
        "111......222......333......444......555......666......777......\
        888......999......";

    assert_eq!(Err(SudokuError::ConflictingGivens),
        validate_puzzle(conflicting));
    assert_eq!(Err(SudokuError::ConflictingGivens),
        solve_puzzle(conflicting));
}

#[test]
fn duplicated_given_in_row_is_rejected() {
    let (puzzle, _) = PUZZLES_AND_SOLUTIONS[0];

    // Overwrite the blank at A2 with the 1 already present at A1.
    let mut chars: Vec<char> = puzzle.chars().collect();
    chars[1] = '1';
    let conflicting: String = chars.into_iter().collect();

    assert_eq!(Err(SudokuError::ConflictingGivens),
        validate_puzzle(&conflicting));
}

#[test]
fn consistent_but_unsolvable_puzzle_reports_no_solution() {
    let unsolvable =
        "1.5..2.84..63.12.7.23.5.....9..1....8.2.3674.3.7.2..9.47...8..1.\
        .16....926914.37.";

    assert_eq!(Ok(()), validate_puzzle(unsolvable));
    assert_eq!(Err(SudokuError::NoSolution), solve_puzzle(unsolvable));
}

#[test]
fn placement_with_no_conflict_is_valid() {
    let (puzzle, _) = PUZZLES_AND_SOLUTIONS[0];
    let coordinate = Coordinate::parse("A2").unwrap();

    let check = check_placement(puzzle, coordinate, 3).unwrap();

    assert!(check.is_valid());
    assert!(check.conflicts().is_empty());
}

#[test]
fn placement_with_single_conflict_names_it() {
    let (puzzle, _) = PUZZLES_AND_SOLUTIONS[0];
    let coordinate = Coordinate::parse("A2").unwrap();

    let check = check_placement(puzzle, coordinate, 4).unwrap();

    assert!(!check.is_valid());
    assert_eq!(vec![Conflict::Row], check.conflicts());
}

#[test]
fn placement_with_two_conflicts_names_both() {
    let (puzzle, _) = PUZZLES_AND_SOLUTIONS[0];
    let coordinate = Coordinate::parse("A2").unwrap();

    let check = check_placement(puzzle, coordinate, 6).unwrap();

    assert!(!check.is_valid());
    assert_eq!(vec![Conflict::Column, Conflict::Region],
        check.conflicts());
}

#[test]
fn placement_with_three_conflicts_names_all() {
    let (puzzle, _) = PUZZLES_AND_SOLUTIONS[0];
    let coordinate = Coordinate::parse("A2").unwrap();

    let check = check_placement(puzzle, coordinate, 2).unwrap();

    assert!(!check.is_valid());
    assert_eq!(vec![Conflict::Row, Conflict::Column, Conflict::Region],
        check.conflicts());
}

#[test]
fn placement_on_cell_already_holding_the_value_is_valid() {
    let (puzzle, _) = PUZZLES_AND_SOLUTIONS[0];

    // A1 holds a 1 as a given.
    let coordinate = Coordinate::parse("A1").unwrap();
    let check = check_placement(puzzle, coordinate, 1).unwrap();

    assert!(check.is_valid());
    assert!(check.conflicts().is_empty());
}

#[test]
fn placement_check_rejects_invalid_inputs() {
    let (puzzle, _) = PUZZLES_AND_SOLUTIONS[0];
    let coordinate = Coordinate::parse("A2").unwrap();

    assert_eq!(Err(SudokuError::InvalidValue),
        check_placement(puzzle, coordinate, 0));
    assert_eq!(Err(SudokuError::InvalidValue),
        check_placement(puzzle, coordinate, 10));
    assert_eq!(Err(SudokuError::InvalidLength),
        check_placement("123...", coordinate, 5));
}

#[test]
fn placement_check_flow_from_raw_request_fields() {
    // The way an embedding caller drives the engine: every field arrives
    // as a string.
    let (puzzle, _) = PUZZLES_AND_SOLUTIONS[0];
    let coordinate = Coordinate::parse("b1").unwrap();
    let value = parse_value("9").unwrap();

    let check = check_placement(puzzle, coordinate, value).unwrap();

    assert!(check.is_valid());
}
