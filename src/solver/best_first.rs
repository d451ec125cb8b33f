use super::{candidate_moves, Node, SearchStats};
use crate::puzzle::{Move, PuzzleDef, State};
use fxhash::FxHashSet;
use std::{cmp::Ordering, collections::BinaryHeap};

/// A node keyed by `f = g + h`. Equal scores pop in push order, so the
/// ordering never has to look at the state or the path.
#[derive(Debug)]
struct Entry {
    f: usize,
    seq: u64,
    node: Node,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Reversed so that `BinaryHeap` pops the smallest key.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    fn push(&mut self, f: usize, node: Node) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { f, seq, node });
    }

    fn pop(&mut self) -> Option<Node> {
        self.heap.pop().map(|entry| entry.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

pub(super) fn search(def: &PuzzleDef, start: &State, stats: &mut SearchStats) -> Option<Vec<Move>> {
    let mut frontier = Frontier::new();
    let mut visited = FxHashSet::default();
    frontier.push(def.heuristic(start), Node::root(start));

    while let Some(node) = frontier.pop() {
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
            if visited.contains(&next) {
                continue;
            }
            let f = node.cost() + 1 + def.heuristic(&next);
            frontier.push(f, node.child(next, move_));
        }
        stats.peak_frontier = stats.peak_frontier.max(frontier.len());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Variant;

    fn node() -> Node {
        Node::root(Variant::Cube2.def().goal_state())
    }

    #[test]
    fn pops_lowest_score_first() {
        let mut frontier = Frontier::new();
        frontier.push(5, node());
        frontier.push(2, node());
        frontier.push(9, node());
        let mut order = Vec::new();
        while let Some(entry) = frontier.heap.pop() {
            order.push(entry.f);
        }
        assert_eq!(order, vec![2, 5, 9]);
    }

    #[test]
    fn ties_pop_in_push_order() {
        let mut frontier = Frontier::new();
        for _ in 0..4 {
            frontier.push(3, node());
        }
        frontier.push(1, node());
        let mut order = Vec::new();
        while let Some(entry) = frontier.heap.pop() {
            order.push((entry.f, entry.seq));
        }
        assert_eq!(order, vec![(1, 4), (3, 0), (3, 1), (3, 2), (3, 3)]);
    }

    #[test]
    fn goal_needs_no_expansion() {
        let def = Variant::Cube3.def();
        let mut stats = SearchStats::default();
        assert_eq!(search(def, def.goal_state(), &mut stats), Some(vec![]));
        assert_eq!(stats.expanded, 0);
    }

    #[test]
    fn expands_each_state_once() {
        let def = Variant::Cube3.def();
        let start = def.apply_moves(def.goal_state(), &[Move::LeftDown, Move::RightUp]);
        let mut stats = SearchStats::default();
        let solution = search(def, &start, &mut stats).unwrap();
        assert_eq!(def.apply_moves(&start, &solution), *def.goal_state());
        assert!(stats.generated <= stats.expanded * Move::COUNT as u64);

        let mut stats = SearchStats::default();
        let start = def.apply_move(def.goal_state(), Move::FrontRight);
        assert_eq!(search(def, &start, &mut stats), Some(vec![Move::FrontLeft]));
        assert_eq!(stats.expanded, 1);
    }
}
