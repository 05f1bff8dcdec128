//! Layer-by-layer Rubik's cube solver library.
//!
//! Takes a 3x3x3 sticker description, checks it, and returns a sequence of
//! face turns that solves it using the beginner's method: first-layer
//! cross, first-layer corners, middle layer, last-layer cross, last-layer
//! face, last-layer permutation.

pub mod geometry;
pub mod grid;
pub mod moves;
pub mod persistence;
pub mod phases;
pub mod pieces;
pub mod recorder;
pub mod solver;

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use grid::{CubeState, FaceGrid};
use moves::{render, Move};
use solver::{SolveError, Solver};

/// What an empty solution reads as.
pub const ALREADY_SOLVED: &str = "Cube is already solved!";

/// Face turns that take a cube from its given state to solved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    moves: Vec<Move>,
}

impl Solution {
    pub fn new(moves: Vec<Move>) -> Self {
        Self { moves }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The moves in standard notation, or [`ALREADY_SOLVED`] when there
    /// are none.
    pub fn sequence(&self) -> String {
        if self.is_empty() {
            ALREADY_SOLVED.to_string()
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.moves))
    }
}

impl Serialize for Solution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut response = serializer.serialize_struct("Solution", 2)?;
        response.serialize_field("solution", &self.moves)?;
        response.serialize_field("sequence", &self.sequence())?;
        response.end()
    }
}

/// Validates an external cube description and solves it.
pub fn solve(grid: &FaceGrid) -> Result<Solution, SolveError> {
    let state = CubeState::from_grid(grid)?;
    solve_state(&state)
}

/// Solves a cube state. Fails without a partial answer if the state cannot
/// be solved.
pub fn solve_state(state: &CubeState) -> Result<Solution, SolveError> {
    state.validate_counts()?;
    Solver::new(*state).solve()
}
