mod moves;
mod permutation;
mod state;
mod tables;

pub use moves::{format_moves, parse_moves, Move, ParseMoveError};
pub use permutation::Permutation;
pub use state::{Color, Face, State};

use std::{fmt, str::FromStr, sync::LazyLock};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Cube2,
    Cube3,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown puzzle variant {0:?}, expected 2x2 or 3x3")]
pub struct ParseVariantError(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleDefError {
    #[error("Table for {move_} has {actual} entries, expected {expected}")]
    WrongLength {
        move_: Move,
        expected: usize,
        actual: usize,
    },
    #[error("Table for {0} is not a permutation of the facelet positions")]
    NotAPermutation(Move),
    #[error("{move_} followed by {inverse} is not the identity")]
    InverseMismatch { move_: Move, inverse: Move },
    #[error("Goal state has {actual} facelets of color {color}, expected {expected}")]
    UnbalancedGoal {
        color: Color,
        expected: usize,
        actual: usize,
    },
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Cube2, Variant::Cube3];

    pub fn facelets_per_face(self) -> usize {
        match self {
            Variant::Cube2 => 4,
            Variant::Cube3 => 9,
        }
    }

    /// The process-wide definition for this variant. Built on first use and
    /// never mutated afterwards.
    pub fn def(self) -> &'static PuzzleDef {
        match self {
            Variant::Cube2 => &CUBE2_DEF,
            Variant::Cube3 => &CUBE3_DEF,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Cube2 => write!(f, "2x2"),
            Variant::Cube3 => write!(f, "3x3"),
        }
    }
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2" | "2x2" | "2x2x2" => Ok(Variant::Cube2),
            "3" | "3x3" | "3x3x3" => Ok(Variant::Cube3),
            _ => Err(ParseVariantError(s.to_owned())),
        }
    }
}

static CUBE2_DEF: LazyLock<PuzzleDef> =
    LazyLock::new(|| builtin(Variant::Cube2, &tables::CUBE2));
static CUBE3_DEF: LazyLock<PuzzleDef> =
    LazyLock::new(|| builtin(Variant::Cube3, &tables::CUBE3));

fn builtin<const N: usize>(variant: Variant, tables: &[[u8; N]; Move::COUNT]) -> PuzzleDef {
    let goal = State::solved(variant.facelets_per_face());
    let tables = tables.each_ref().map(|table| table.as_slice());
    PuzzleDef::new(variant, goal, tables)
        .unwrap_or_else(|err| panic!("Built-in {variant} tables are malformed: {err}"))
}

/// The constant data of one puzzle variant: its goal state and one
/// permutation per move.
#[derive(Debug)]
pub struct PuzzleDef {
    variant: Variant,
    goal: State,
    permutations: [Permutation; Move::COUNT],
}

impl PuzzleDef {
    /// Validates the tables (indexed by [`Move::index`]) against the goal
    /// state and against each other.
    pub fn new(
        variant: Variant,
        goal: State,
        tables: [&[u8]; Move::COUNT],
    ) -> Result<Self, PuzzleDefError> {
        let expected = goal.len() / Color::ALL.len();
        for color in Color::ALL {
            let actual = goal.count(color);
            if actual != expected {
                return Err(PuzzleDefError::UnbalancedGoal {
                    color,
                    expected,
                    actual,
                });
            }
        }

        let mut permutations = Vec::with_capacity(Move::COUNT);
        for (move_, table) in Move::ALL.into_iter().zip(tables) {
            if table.len() != goal.len() {
                return Err(PuzzleDefError::WrongLength {
                    move_,
                    expected: goal.len(),
                    actual: table.len(),
                });
            }
            permutations
                .push(Permutation::new(table).ok_or(PuzzleDefError::NotAPermutation(move_))?);
        }

        for move_ in Move::ALL {
            let inverse = move_.inverse();
            if !permutations[move_.index()]
                .then(&permutations[inverse.index()])
                .is_identity()
            {
                return Err(PuzzleDefError::InverseMismatch { move_, inverse });
            }
        }

        let permutations = permutations
            .try_into()
            .unwrap_or_else(|_| unreachable!("one permutation per move"));
        Ok(Self {
            variant,
            goal,
            permutations,
        })
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn goal_state(&self) -> &State {
        &self.goal
    }

    pub fn facelet_count(&self) -> usize {
        self.goal.len()
    }

    pub fn facelets_per_face(&self) -> usize {
        self.goal.facelets_per_face()
    }

    pub fn moves(&self) -> &'static [Move] {
        &Move::ALL
    }

    pub fn permutation(&self, move_: Move) -> &Permutation {
        &self.permutations[move_.index()]
    }

    pub fn inverse_of(&self, move_: Move) -> Move {
        move_.inverse()
    }

    pub fn is_goal(&self, state: &State) -> bool {
        *state == self.goal
    }

    /// Returns a new state with `move_` applied. The input is untouched.
    ///
    /// # Panics
    ///
    /// Panics if `state` belongs to a different variant.
    pub fn apply_move(&self, state: &State, move_: Move) -> State {
        assert_eq!(
            state.len(),
            self.facelet_count(),
            "{move_} applied to a {}-facelet state on the {} puzzle",
            state.len(),
            self.variant,
        );
        state.permuted(self.permutation(move_))
    }

    pub fn apply_moves(&self, state: &State, moves: &[Move]) -> State {
        moves
            .iter()
            .fold(state.clone(), |state, &move_| self.apply_move(&state, move_))
    }
}
