use crate::puzzle::{Move, PuzzleDef, State};
use log::trace;
use rand::{seq::SliceRandom, thread_rng, Rng};

/// Random walk of `move_count` turns from the goal state. Every move is
/// equally likely at each step, including the one that undoes the previous
/// turn. Returns the final state and the moves applied, in order.
pub fn scramble<R: Rng + ?Sized>(
    def: &PuzzleDef,
    move_count: usize,
    rng: &mut R,
) -> (State, Vec<Move>) {
    let mut state = def.goal_state().clone();
    let mut moves = Vec::with_capacity(move_count);

    for _ in 0..move_count {
        let Some(&move_) = def.moves().choose(rng) else {
            break;
        };
        trace!("Scramble move {}: {move_}", moves.len() + 1);
        state = def.apply_move(&state, move_);
        moves.push(move_);
    }

    (state, moves)
}

pub fn scramble_with_thread_rng(def: &PuzzleDef, move_count: usize) -> (State, Vec<Move>) {
    scramble(def, move_count, &mut thread_rng())
}
