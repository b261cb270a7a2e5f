use crate::{Candidate, Grid, MAX_VALUE, MIN_VALUE, SIZE};
use crate::constraint::{can_place, is_solved};
use crate::entropy::move_entropy;
use crate::moves::{valid_moves, valid_values};
use crate::solver::EntropySolver;

use rand::Rng;

const ITERATIONS_PER_RUN: usize = 30;

const SOLVED_CODE: &str =
    "1,2,3,4,5,6,7,8,9,\
     4,5,6,7,8,9,1,2,3,\
     7,8,9,1,2,3,4,5,6,\
     2,3,4,5,6,7,8,9,1,\
     5,6,7,8,9,1,2,3,4,\
     8,9,1,2,3,4,5,6,7,\
     3,4,5,6,7,8,9,1,2,\
     6,7,8,9,1,2,3,4,5,\
     9,1,2,3,4,5,6,7,8";

// Builds a random grid by committing random legal moves, so the result
// never violates the Sudoku rules.
fn random_partial_grid(rng: &mut impl Rng) -> Grid {
    let mut grid = Grid::new();
    let placements = rng.gen_range(0..=60);

    for _ in 0..placements {
        let candidates = valid_moves(&grid);

        if candidates.is_empty() {
            break;
        }

        let candidate = candidates[rng.gen_range(0..candidates.len())];
        grid.set(candidate.row, candidate.column, candidate.value);
    }

    grid
}

// Blanks up to `blanks` random cells of the reference solved grid.
fn random_depleted_grid(rng: &mut impl Rng, blanks: usize) -> Grid {
    let mut grid = Grid::parse(SOLVED_CODE).unwrap();

    for _ in 0..blanks {
        grid.clear(rng.gen_range(0..SIZE), rng.gen_range(0..SIZE));
    }

    grid
}

#[test]
fn enumeration_agrees_with_placement_checks() {
    let mut rng = rand::thread_rng();

    for _ in 0..ITERATIONS_PER_RUN {
        let grid = random_partial_grid(&mut rng);
        let candidates = valid_moves(&grid);

        for candidate in &candidates {
            assert!(
                can_place(&grid, candidate.row, candidate.column,
                    candidate.value),
                "Enumerated candidate is not placeable.");
        }

        let mut placeable = 0;

        for value in MIN_VALUE..=MAX_VALUE {
            for row in 0..SIZE {
                for column in 0..SIZE {
                    if can_place(&grid, row, column, value) {
                        assert!(
                            candidates.contains(
                                &Candidate::new(row, column, value)),
                            "Placeable candidate is not enumerated.");
                        placeable += 1;
                    }
                }
            }
        }

        assert_eq!(placeable, candidates.len(),
            "Enumeration has duplicates or extra candidates.");
    }
}

#[test]
fn enumeration_is_value_major() {
    let mut rng = rand::thread_rng();

    for _ in 0..ITERATIONS_PER_RUN {
        let grid = random_partial_grid(&mut rng);
        let candidates = valid_moves(&grid);

        for window in candidates.windows(2) {
            let earlier = (window[0].value, window[0].row, window[0].column);
            let later = (window[1].value, window[1].row, window[1].column);

            assert!(earlier < later,
                "Candidates are enumerated out of order.");
        }
    }
}

#[test]
fn cell_enumeration_agrees_with_placement_checks() {
    let mut rng = rand::thread_rng();

    for _ in 0..ITERATIONS_PER_RUN {
        let grid = random_partial_grid(&mut rng);

        for row in 0..SIZE {
            for column in 0..SIZE {
                let candidates = valid_values(&grid, row, column);
                let mut placeable = 0;

                for value in MIN_VALUE..=MAX_VALUE {
                    if can_place(&grid, row, column, value) {
                        assert!(
                            candidates.contains(
                                &Candidate::new(row, column, value)),
                            "Placeable value is not enumerated.");
                        placeable += 1;
                    }
                }

                assert_eq!(placeable, candidates.len(),
                    "Cell enumeration has extra candidates.");

                for window in candidates.windows(2) {
                    assert!(window[0].value < window[1].value,
                        "Cell candidates are enumerated out of order.");
                }
            }
        }
    }
}

#[test]
fn queries_do_not_modify_the_grid() {
    let mut rng = rand::thread_rng();

    for _ in 0..ITERATIONS_PER_RUN {
        let grid = random_partial_grid(&mut rng);
        let before = grid;

        for value in MIN_VALUE..=MAX_VALUE {
            for row in 0..SIZE {
                for column in 0..SIZE {
                    can_place(&grid, row, column, value);
                }
            }
        }

        for candidate in valid_moves(&grid) {
            move_entropy(&grid, candidate);
        }

        is_solved(&grid);

        assert_eq!(before, grid, "A query modified the grid.");
    }
}

#[test]
fn entropy_stays_in_unit_interval() {
    let mut rng = rand::thread_rng();

    for _ in 0..ITERATIONS_PER_RUN {
        let grid = random_partial_grid(&mut rng);

        for candidate in valid_moves(&grid) {
            let entropy = move_entropy(&grid, candidate);

            assert!(entropy >= 0.0 && entropy <= 1.0,
                "Entropy {} is outside the unit interval.", entropy);
        }
    }
}

#[test]
fn solver_outcome_is_consistent() {
    let mut rng = rand::thread_rng();

    for _ in 0..ITERATIONS_PER_RUN {
        let blanks = rng.gen_range(0..=8);
        let mut grid = random_depleted_grid(&mut rng, blanks);
        let before = grid;

        if EntropySolver.solve(&mut grid) {
            assert!(is_solved(&grid), "Solver succeeded on unsolved grid.");
            assert!(before.is_subset(&grid), "Solver changed a clue.");
        }
        else {
            assert_eq!(before, grid,
                "Solver failed but modified the grid.");
        }
    }
}

#[test]
fn solver_fills_one_or_two_blanks() {
    let mut rng = rand::thread_rng();

    for _ in 0..ITERATIONS_PER_RUN {
        let solved = Grid::parse(SOLVED_CODE).unwrap();
        let blanks = rng.gen_range(1..=2);
        let mut grid = random_depleted_grid(&mut rng, blanks);

        // Removing one or two cells from a solved grid always leaves
        // every blank cell with exactly one legal value.
        assert!(EntropySolver.solve(&mut grid),
            "Grid with at most two blanks marked as unsolvable.");
        assert_eq!(solved, grid, "Solver gave wrong grid.");
    }
}

#[test]
fn corrupted_solved_grid_is_rejected() {
    let mut rng = rand::thread_rng();

    for _ in 0..ITERATIONS_PER_RUN {
        let mut grid = Grid::parse(SOLVED_CODE).unwrap();
        let row = rng.gen_range(0..SIZE);
        let column = rng.gen_range(0..SIZE);
        let old_value = grid.get(row, column).unwrap();
        let delta = rng.gen_range(1..MAX_VALUE);
        let new_value = (old_value - 1 + delta) % MAX_VALUE + 1;

        grid.set(row, column, new_value);

        assert!(!is_solved(&grid), "Corrupted grid accepted as solved.");
    }
}
