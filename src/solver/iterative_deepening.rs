use super::{candidate_moves, SearchStats};
use crate::puzzle::{Move, PuzzleDef, State};
use log::{debug, warn};

/// Depth-limited search with limits `0..=max_depth`. Only the current path
/// is kept; the sole guard against revisiting is never undoing the previous
/// move.
pub(super) fn search(
    def: &PuzzleDef,
    start: &State,
    max_depth: usize,
    stats: &mut SearchStats,
) -> Option<Vec<Move>> {
    let mut path = Vec::new();

    for limit in 0..=max_depth {
        stats.deepest_limit = Some(limit);
        if depth_limited_search(def, start, limit, &mut path, stats) {
            return Some(path);
        }
        debug_assert!(path.is_empty());
        debug!(
            "Depth limit {limit} exhausted after {} expansions",
            stats.expanded
        );
    }

    warn!("Iterative deepening reached its depth ceiling of {max_depth}");
    None
}

/// Returns `true` with the solution left in `path` if the goal is within
/// `remaining` moves of `state`. On `false`, `path` is restored.
fn depth_limited_search(
    def: &PuzzleDef,
    state: &State,
    remaining: usize,
    path: &mut Vec<Move>,
    stats: &mut SearchStats,
) -> bool {
    if def.is_goal(state) {
        return true;
    }
    if remaining == 0 {
        return false;
    }

    stats.expanded += 1;
    for move_ in candidate_moves(def, path.last().copied()) {
        let next = def.apply_move(state, move_);
        stats.generated += 1;

        path.push(move_);
        stats.peak_frontier = stats.peak_frontier.max(path.len());
        if depth_limited_search(def, &next, remaining - 1, path, stats) {
            return true;
        }
        path.pop();
    }

    false
}
