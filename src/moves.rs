//! Move notation: face turns, whole-cube rotations, and algorithm strings.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::pieces::Face;

/// How far a face or the whole cube is turned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Clockwise,
    Half,
    CounterClockwise,
}

impl Turn {
    pub const ALL: [Turn; 3] = [Turn::Clockwise, Turn::Half, Turn::CounterClockwise];

    /// Number of clockwise quarter turns this amounts to.
    pub const fn quarter_turns(self) -> usize {
        match self {
            Turn::Clockwise => 1,
            Turn::Half => 2,
            Turn::CounterClockwise => 3,
        }
    }

    /// `None` for a multiple of four, which is no turn at all.
    pub const fn from_quarter_turns(quarter_turns: usize) -> Option<Self> {
        match quarter_turns % 4 {
            1 => Some(Turn::Clockwise),
            2 => Some(Turn::Half),
            3 => Some(Turn::CounterClockwise),
            _ => None,
        }
    }

    pub const fn inverse(self) -> Self {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::Half => Turn::Half,
            Turn::CounterClockwise => Turn::Clockwise,
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::Half => "2",
            Turn::CounterClockwise => "'",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "" => Some(Turn::Clockwise),
            "2" | "2'" => Some(Turn::Half),
            "'" => Some(Turn::CounterClockwise),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("empty move token")]
    Empty,
    #[error("unknown face or axis in move {0:?}")]
    UnknownLetter(String),
    #[error("unknown turn suffix in move {0:?}")]
    UnknownSuffix(String),
}

fn split_token(token: &str) -> Result<(char, &str), ParseMoveError> {
    let mut chars = token.chars();
    let letter = chars.next().ok_or(ParseMoveError::Empty)?;
    Ok((letter, chars.as_str()))
}

/// A single face turn such as `R`, `U'` or `F2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.turn.inverse())
    }

    /// All 18 face turns.
    pub fn all() -> impl Iterator<Item = Move> {
        Face::ALL
            .into_iter()
            .flat_map(|face| Turn::ALL.into_iter().map(move |turn| Move::new(face, turn)))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.turn.suffix())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (letter, suffix) = split_token(token)?;
        let face =
            Face::from_letter(letter).ok_or_else(|| ParseMoveError::UnknownLetter(token.into()))?;
        let turn =
            Turn::from_suffix(suffix).ok_or_else(|| ParseMoveError::UnknownSuffix(token.into()))?;
        Ok(Move::new(face, turn))
    }
}

impl Serialize for Move {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Axis of a whole-cube rotation, each following the face it is named after
/// (x follows R, y follows U, z follows F).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    const fn letter(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }
}

/// A whole-cube reorientation such as `y` or `z2`. Rotations never change
/// which pieces are solved, only which face the solver calls front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotation {
    pub axis: Axis,
    pub turn: Turn,
}

impl Rotation {
    pub const fn new(axis: Axis, turn: Turn) -> Self {
        Self { axis, turn }
    }

    pub const fn inverse(self) -> Self {
        Self::new(self.axis, self.turn.inverse())
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.axis.letter(), self.turn.suffix())
    }
}

impl FromStr for Rotation {
    type Err = ParseMoveError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (letter, suffix) = split_token(token)?;
        let axis = Axis::ALL
            .into_iter()
            .find(|axis| axis.letter() == letter)
            .ok_or_else(|| ParseMoveError::UnknownLetter(token.into()))?;
        let turn =
            Turn::from_suffix(suffix).ok_or_else(|| ParseMoveError::UnknownSuffix(token.into()))?;
        Ok(Rotation::new(axis, turn))
    }
}

/// Parses a whitespace separated sequence of face turns.
pub fn parse_algorithm(algorithm: &str) -> Result<Vec<Move>, ParseMoveError> {
    algorithm.split_whitespace().map(str::parse).collect()
}

/// Renders moves in standard notation, separated by single spaces.
pub fn render(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generates a scramble that never turns the same face twice in a row.
pub fn random_scramble(rng: &mut fastrand::Rng, length: usize) -> Vec<Move> {
    let mut scramble: Vec<Move> = Vec::with_capacity(length);
    while scramble.len() < length {
        let face = Face::ALL[rng.usize(..Face::ALL.len())];
        if scramble.last().is_some_and(|last| last.face == face) {
            continue;
        }
        let turn = Turn::ALL[rng.usize(..Turn::ALL.len())];
        scramble.push(Move::new(face, turn));
    }
    scramble
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_render() {
        let moves = parse_algorithm("R U R' U' F2 L D").unwrap();
        assert_eq!(moves.len(), 7);
        assert_eq!(moves[2], Move::new(Face::R, Turn::CounterClockwise));
        assert_eq!(moves[4], Move::new(Face::F, Turn::Half));
        assert_eq!(render(&moves), "R U R' U' F2 L D");
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let moves = parse_algorithm("  R   U2'\tB ").unwrap();
        assert_eq!(render(&moves), "R U2 B");
        assert!(parse_algorithm("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_algorithm("R Q"),
            Err(ParseMoveError::UnknownLetter("Q".into()))
        );
        assert_eq!(
            parse_algorithm("R3"),
            Err(ParseMoveError::UnknownSuffix("R3".into()))
        );
        assert_eq!("".parse::<Move>(), Err(ParseMoveError::Empty));
    }

    #[test]
    fn test_rotation_notation() {
        let rotation: Rotation = "y'".parse().unwrap();
        assert_eq!(rotation, Rotation::new(Axis::Y, Turn::CounterClockwise));
        assert_eq!(rotation.to_string(), "y'");
        assert_eq!(rotation.inverse().to_string(), "y");
        assert!("R".parse::<Rotation>().is_err());
    }

    #[test]
    fn test_all_moves_are_distinct() {
        let moves: Vec<Move> = Move::all().collect();
        assert_eq!(moves.len(), 18);
        for (i, a) in moves.iter().enumerate() {
            assert!(moves[i + 1..].iter().all(|b| a != b), "{a} listed twice");
        }
    }

    #[test]
    fn test_random_scramble_is_seeded() {
        let first = random_scramble(&mut fastrand::Rng::with_seed(7), 30);
        let second = random_scramble(&mut fastrand::Rng::with_seed(7), 30);
        assert_eq!(first, second);
        assert_eq!(first.len(), 30);
        assert!(first.windows(2).all(|pair| pair[0].face != pair[1].face));
    }
}
