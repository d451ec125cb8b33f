mod best_first;
mod breadth_first;
mod iterative_deepening;

use crate::puzzle::{format_moves, Move, PuzzleDef, State};
use log::{info, warn};
use std::{
    fmt,
    str::FromStr,
    time::{Duration, Instant},
};
use thiserror::Error;

/// How the frontier is ordered. Every strategy solves the same problem and
/// reports through the same [`SolveReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    BestFirst,
    BreadthFirst,
    IterativeDeepening,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown search strategy {0:?}, expected astar, bfs or ids")]
pub struct ParseStrategyError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: usize,
}

impl SearchConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 20;

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded: u64,
    pub generated: u64,
    // For iterative deepening, the deepest path held on the stack.
    pub peak_frontier: usize,
    pub deepest_limit: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct SolveReport {
    pub strategy: Strategy,
    /// `None` when the search gave up without reaching the goal.
    pub solution: Option<Vec<Move>>,
    pub elapsed: Duration,
    pub stats: SearchStats,
}

impl SolveReport {
    /// Replays the solution from `start` and checks that it ends on the goal.
    pub fn verify(&self, def: &PuzzleDef, start: &State) -> bool {
        self.solution
            .as_deref()
            .is_some_and(|moves| def.is_goal(&def.apply_moves(start, moves)))
    }
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::BestFirst,
        Strategy::BreadthFirst,
        Strategy::IterativeDeepening,
    ];

    /// Blocks until the goal is found or the search space is exhausted.
    pub fn solve(self, def: &PuzzleDef, start: &State, config: &SearchConfig) -> SolveReport {
        info!("Solving {} puzzle with {self}", def.variant());
        let started = Instant::now();
        let mut stats = SearchStats::default();

        let solution = match self {
            Strategy::BestFirst => best_first::search(def, start, &mut stats),
            Strategy::BreadthFirst => breadth_first::search(def, start, &mut stats),
            Strategy::IterativeDeepening => {
                iterative_deepening::search(def, start, config.max_depth, &mut stats)
            }
        };

        let elapsed = started.elapsed();
        match &solution {
            Some(moves) => info!(
                "{self} found a {}-move solution [{}] in {elapsed:.2?} after expanding {} nodes",
                moves.len(),
                format_moves(moves),
                stats.expanded,
            ),
            None => warn!(
                "{self} found no solution in {elapsed:.2?} after expanding {} nodes",
                stats.expanded
            ),
        }

        SolveReport {
            strategy: self,
            solution,
            elapsed,
            stats,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Strategy::BestFirst => "A*",
            Strategy::BreadthFirst => "BFS",
            Strategy::IterativeDeepening => "IDS",
        };
        f.write_str(s)
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "astar" | "a*" | "best-first" => Ok(Strategy::BestFirst),
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "ids" | "iterative-deepening" => Ok(Strategy::IterativeDeepening),
            _ => Err(ParseStrategyError(s.to_owned())),
        }
    }
}

/// Runs every strategy on the same start state, in [`Strategy::ALL`] order.
pub fn compare(def: &PuzzleDef, start: &State, config: &SearchConfig) -> Vec<SolveReport> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| strategy.solve(def, start, config))
        .collect()
}

/// Moves worth trying after `last_move`: everything except its immediate
/// undo.
fn candidate_moves(def: &PuzzleDef, last_move: Option<Move>) -> impl Iterator<Item = Move> + '_ {
    def.moves().iter().copied().filter(move |&move_| {
        last_move.map_or(true, |last| move_ != def.inverse_of(last))
    })
}

#[derive(Debug, Clone)]
struct Node {
    state: State,
    path: Vec<Move>,
    last_move: Option<Move>,
}

impl Node {
    fn root(state: &State) -> Self {
        Self {
            state: state.clone(),
            path: Vec::new(),
            last_move: None,
        }
    }

    fn cost(&self) -> usize {
        self.path.len()
    }

    fn child(&self, state: State, move_: Move) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(move_);
        Self {
            state,
            path,
            last_move: Some(move_),
        }
    }
}
