//! This module implements the entropy heuristic that guides the
//! [solver](crate::solver).
//!
//! The entropy of a move measures how constrained the grid becomes once
//! the move is committed: a hypothetical copy of the grid receives the
//! move, the legal values of all remaining blank cells are counted, and
//! the count is normalized against the full candidate space of 729
//! conceivable placements. Lower entropy means more freedom is left, so a
//! greedy search that always commits the lowest-entropy candidate keeps
//! its options open as long as possible.

use crate::{Candidate, Grid, MAX_VALUE, SIZE};
use crate::constraint::can_place;
use crate::moves::valid_values;

/// The total number of conceivable placements on a grid: 81 cells times 9
/// values.
const CANDIDATE_SPACE: usize = SIZE * SIZE * MAX_VALUE as usize;

/// Computes the entropy of committing the given candidate to the given
/// grid, a value in `[0.0, 1.0]` where lower means that the move leaves
/// more freedom for the rest of the grid.
///
/// The candidate is committed to a copy of the grid and the lengths of
/// [valid_values](crate::moves::valid_values) of all blank cells of that
/// copy are summed up; the entropy is `1.0` minus the sum's share of the
/// full candidate space. A move that fills the last blank cell scores
/// exactly `1.0`. Note that a move that leaves blank cells behind which
/// admit no value at all also scores `1.0`; whether a grid actually is
/// solved is judged by [is_solved](crate::constraint::is_solved), not by
/// this score.
///
/// # Arguments
///
/// * `grid`: The grid on which the candidate is scored. It is never
/// modified.
/// * `candidate`: The move to score. Must be legal on `grid` as judged by
/// [can_place](crate::constraint::can_place); violations are caught by a
/// debug assertion.
pub fn move_entropy(grid: &Grid, candidate: Candidate) -> f64 {
    debug_assert!(
        can_place(grid, candidate.row, candidate.column, candidate.value));

    let mut next = *grid;
    next.set(candidate.row, candidate.column, candidate.value);

    if next.is_full() {
        return 1.0;
    }

    let mut remaining = 0;

    for row in 0..SIZE {
        for column in 0..SIZE {
            if next.get(row, column).is_none() {
                remaining += valid_values(&next, row, column).len();
            }
        }
    }

    1.0 - remaining as f64 / CANDIDATE_SPACE as f64
}
