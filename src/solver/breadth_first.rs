use super::{candidate_moves, Node, SearchStats};
use crate::puzzle::{Move, PuzzleDef, State};
use fxhash::FxHashSet;
use log::debug;
use std::collections::VecDeque;

pub(super) fn search(def: &PuzzleDef, start: &State, stats: &mut SearchStats) -> Option<Vec<Move>> {
    let mut frontier = VecDeque::from([Node::root(start)]);
    let mut visited = FxHashSet::default();
    let mut depth = 0;

    while let Some(node) = frontier.pop_front() {
        if node.cost() > depth {
            debug!(
                "Depth {depth} exhausted: {} states visited, {} queued",
                visited.len(),
                frontier.len() + 1
            );
            depth = node.cost();
        }

        if def.is_goal(&node.state) {
            return Some(node.path);
        }

        if !visited.insert(node.state.clone()) {
            continue;
        }
        stats.expanded += 1;

        for move_ in candidate_moves(def, node.last_move) {
            let next = def.apply_move(&node.state, move_);
            stats.generated += 1;
            if !visited.contains(&next) {
                frontier.push_back(node.child(next, move_));
            }
        }
        stats.peak_frontier = stats.peak_frontier.max(frontier.len());
    }

    None
}
