//! Guidance signal for best-first search.
//!
//! The score is the number of facelets that differ from the goal. A single
//! turn moves many facelets at once, so this overestimates the remaining
//! move count and best-first search guided by it may return longer
//! solutions than breadth-first or iterative deepening.

use crate::puzzle::{PuzzleDef, State};

/// Number of positions where `state` and `goal` disagree.
pub fn misplaced_facelets(goal: &State, state: &State) -> usize {
    goal.facelets()
        .iter()
        .zip(state.facelets())
        .filter(|(expected, actual)| expected != actual)
        .count()
}

impl PuzzleDef {
    pub fn heuristic(&self, state: &State) -> usize {
        misplaced_facelets(self.goal_state(), state)
    }
}
