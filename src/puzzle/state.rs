use super::permutation::Permutation;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    White,
    Blue,
    Green,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::White,
        Color::Blue,
        Color::Green,
    ];

    pub fn symbol(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Yellow => 'Y',
            Color::White => 'W',
            Color::Blue => 'B',
            Color::Green => 'G',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The six facelet blocks, in the order they are laid out in a [`State`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
    Up,
    Down,
    Left,
    Right,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Up,
        Face::Down,
        Face::Left,
        Face::Right,
    ];

    /// The color this face shows when solved.
    pub fn goal_color(self) -> Color {
        match self {
            Face::Front => Color::Red,
            Face::Back => Color::Orange,
            Face::Up => Color::Yellow,
            Face::Down => Color::White,
            Face::Left => Color::Blue,
            Face::Right => Color::Green,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Face::Front => "Front",
            Face::Back => "Back",
            Face::Up => "Up",
            Face::Down => "Down",
            Face::Left => "Left",
            Face::Right => "Right",
        }
    }
}

/// An immutable facelet sequence. Values only come from a puzzle's goal
/// state and from applying moves to another state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    facelets: Box<[Color]>,
}

impl State {
    pub(crate) fn solved(facelets_per_face: usize) -> Self {
        let facelets = Face::ALL
            .into_iter()
            .flat_map(|face| std::iter::repeat(face.goal_color()).take(facelets_per_face))
            .collect();
        Self { facelets }
    }

    #[cfg(test)]
    pub(crate) fn from_facelets(facelets: Vec<Color>) -> Self {
        Self {
            facelets: facelets.into_boxed_slice(),
        }
    }

    /// `new[i] = self[permutation[i]]`.
    pub(crate) fn permuted(&self, permutation: &Permutation) -> Self {
        let facelets = permutation
            .indices()
            .iter()
            .map(|&source| self.facelets[usize::from(source)])
            .collect();
        Self { facelets }
    }

    pub fn facelets(&self) -> &[Color] {
        &self.facelets
    }

    pub fn len(&self) -> usize {
        self.facelets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facelets.is_empty()
    }

    pub fn facelets_per_face(&self) -> usize {
        self.facelets.len() / Face::ALL.len()
    }

    /// Each face paired with its block of facelets, row-major.
    pub fn faces(&self) -> impl Iterator<Item = (Face, &[Color])> + '_ {
        Face::ALL
            .into_iter()
            .zip(self.facelets.chunks(self.facelets_per_face()))
    }

    pub fn count(&self, color: Color) -> usize {
        self.facelets.iter().filter(|&&c| c == color).count()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (face, block) in self.faces() {
            write!(f, "{:<7}", format!("{}:", face.label()))?;
            for color in block {
                write!(f, "{color} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_state_is_laid_out_face_by_face() {
        let state = State::solved(4);
        assert_eq!(state.len(), 24);
        for (face, block) in state.faces() {
            assert_eq!(block.len(), 4);
            assert!(block.iter().all(|&c| c == face.goal_color()));
        }
        for color in Color::ALL {
            assert_eq!(state.count(color), 4);
        }
    }

    #[test]
    fn display_prints_one_line_per_face() {
        let text = State::solved(4).to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Front: R R R R ");
        assert_eq!(lines[5], "Right: G G G G ");
    }
}
