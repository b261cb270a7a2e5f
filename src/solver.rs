//! This module contains the logic for solving Sudoku.
//!
//! The only solver of this crate is the [EntropySolver]. It is *not* a
//! perfect backtracking search: it commits to greedy decisions and
//! therefore only finds solutions that are reachable by always taking the
//! locally cheapest move. See the type documentation for the exact
//! contract.

use crate::Grid;
use crate::constraint::is_solved;
use crate::entropy::move_entropy;
use crate::moves::valid_moves;

/// A solver that tries every legal first move and completes each attempt
/// with a greedy, entropy-guided descent.
///
/// For each candidate enumerated by
/// [valid_moves](crate::moves::valid_moves) on the input grid, the solver
/// commits that candidate and then repeatedly commits whichever remaining
/// candidate has the lowest [entropy](crate::entropy::move_entropy), where
/// the first candidate in enumeration order wins ties. The descent never
/// revises a committed move; when it runs out of legal moves, the attempt
/// either produced a solved grid or is abandoned, and the next first move
/// is tried on a fresh copy of the input.
///
/// This makes the solver *incomplete*: a puzzle whose solution requires
/// revising more than the first move is reported as unsolvable even though
/// a solution exists. Near-determined grids, in which the lowest-entropy
/// move is correct at every step, are solved reliably and quickly. The
/// worst case runs one full descent per legal first move, which on
/// wide-open grids is expensive.
///
/// As it is a zero-sized struct, no instantiation is required:
///
/// ```
/// use sudoku_entropy::Grid;
/// use sudoku_entropy::solver::EntropySolver;
///
/// let mut grid = Grid::parse(
///     "1,2,3,4,5,6,7,8,9,\
///      4,5,6,7,8,9,1,2,3,\
///      7,8,9,1,2,3,4,5,6,\
///      2,3,4,5,6,7,8,9,1,\
///      5,6,7,8,9,1,2,3,4,\
///      8,9,1,2,3,4,5,6,7,\
///      3,4,5,6,7,8,9,1,2,\
///      6,7,8,9,1,2,3,4,5,\
///      9,1,2,3,4,5,6,7,").unwrap();
///
/// assert!(EntropySolver.solve(&mut grid));
/// assert!(grid.has_value(8, 8, 8));
/// ```
#[derive(Clone)]
pub struct EntropySolver;

impl EntropySolver {

    fn descend(grid: &mut Grid) {
        let candidates = valid_moves(grid);

        if candidates.is_empty() {
            return;
        }

        let mut best = candidates[0];
        let mut best_entropy = move_entropy(grid, best);

        for &candidate in &candidates[1..] {
            let candidate_entropy = move_entropy(grid, candidate);

            if candidate_entropy < best_entropy {
                best = candidate;
                best_entropy = candidate_entropy;
            }
        }

        grid.set(best.row, best.column, best.value);
        EntropySolver::descend(grid)
    }

    /// Attempts to solve the given grid in place and indicates success.
    ///
    /// If the grid is already solved, `true` is returned and the grid is
    /// not touched. Otherwise, every legal first move is tried in
    /// enumeration order, each followed by a greedy descent on a working
    /// copy. On success, `true` is returned and `grid` holds the solved
    /// state, of which the input's clues are a subset. On failure, `false`
    /// is returned and `grid` is restored to its exact input state.
    ///
    /// Clues are never overwritten or cleared during the search; only
    /// blank cells are filled.
    pub fn solve(&self, grid: &mut Grid) -> bool {
        if is_solved(grid) {
            return true;
        }

        let saved = *grid;

        for candidate in valid_moves(&saved) {
            grid.set(candidate.row, candidate.column, candidate.value);
            EntropySolver::descend(grid);

            if is_solved(grid) {
                return true;
            }

            *grid = saved;
        }

        false
    }
}
