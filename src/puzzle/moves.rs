use itertools::Itertools;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// One of the ten named generator turns. The same vocabulary is shared by
/// every puzzle variant; each variant supplies its own permutation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Move {
    FrontRight,
    LeftDown,
    RightUp,
    UpperLeft,
    DownRight,
    FrontLeft,
    LeftUp,
    RightDown,
    UpperRight,
    DownLeft,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown move {0:?}, expected one of FR, LD, RU, UL, DR, FL, LU, RD, UR, DL")]
pub struct ParseMoveError(pub String);

impl Move {
    pub const COUNT: usize = 10;

    /// Every move, in expansion order.
    pub const ALL: [Move; Move::COUNT] = [
        Move::FrontRight,
        Move::LeftDown,
        Move::RightUp,
        Move::UpperLeft,
        Move::DownRight,
        Move::FrontLeft,
        Move::LeftUp,
        Move::RightDown,
        Move::UpperRight,
        Move::DownLeft,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The move that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Move::FrontRight => Move::FrontLeft,
            Move::FrontLeft => Move::FrontRight,
            Move::LeftDown => Move::LeftUp,
            Move::LeftUp => Move::LeftDown,
            Move::RightUp => Move::RightDown,
            Move::RightDown => Move::RightUp,
            Move::UpperLeft => Move::UpperRight,
            Move::UpperRight => Move::UpperLeft,
            Move::DownRight => Move::DownLeft,
            Move::DownLeft => Move::DownRight,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Move::FrontRight => "FR",
            Move::LeftDown => "LD",
            Move::RightUp => "RU",
            Move::UpperLeft => "UL",
            Move::DownRight => "DR",
            Move::FrontLeft => "FL",
            Move::LeftUp => "LU",
            Move::RightDown => "RD",
            Move::UpperRight => "UR",
            Move::DownLeft => "DL",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::ALL
            .into_iter()
            .find(|move_| move_.symbol().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseMoveError(s.to_owned()))
    }
}

/// Parses a sequence such as `"FR LD, ru"`. Names may be separated by
/// whitespace, commas, or both.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, ParseMoveError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

pub fn format_moves(moves: &[Move]) -> String {
    moves.iter().join(" ")
}
