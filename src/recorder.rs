//! The log of everything the solver does to a cube.
//!
//! The solver freely reorients the cube so that the piece it is working on
//! sits at the front. Those reorientations are logged next to the face
//! turns, and [`MoveRecorder::solution`] replays them to express every
//! turn in the frame the cube was in when solving started.

use std::fmt;

use log::trace;

use crate::geometry::axis_cycle;
use crate::grid::CubeState;
use crate::moves::{Move, Rotation};
use crate::pieces::Face;

/// One entry in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Turn(Move),
    Rotate(Rotation),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Turn(mv) => write!(f, "{mv}"),
            Step::Rotate(rotation) => write!(f, "{rotation}"),
        }
    }
}

/// Which face of the starting frame sits at each position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame([Face; 6]);

impl Frame {
    pub const IDENTITY: Frame = Frame(Face::ALL);

    pub fn face_at(&self, position: Face) -> Face {
        self.0[position.index()]
    }

    pub fn rotate(&mut self, rotation: Rotation) {
        let cycle = axis_cycle(rotation.axis);
        for _ in 0..rotation.turn.quarter_turns() {
            let before = self.0;
            for (i, &source) in cycle.faces.iter().enumerate() {
                let target = cycle.faces[(i + 1) % cycle.faces.len()];
                self.0[target.index()] = before[source.index()];
            }
        }
    }

    /// Expresses a turn made in this frame as a turn of the starting frame.
    pub fn translate(&self, mv: Move) -> Move {
        Move::new(self.face_at(mv.face), mv.turn)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// An append-only log of turns and reorientations.
#[derive(Debug, Clone, Default)]
pub struct MoveRecorder {
    steps: Vec<Step>,
}

impl MoveRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_turn(&mut self, mv: Move) {
        self.steps.push(Step::Turn(mv));
    }

    pub fn record_rotation(&mut self, rotation: Rotation) {
        self.steps.push(Step::Rotate(rotation));
    }

    /// Everything recorded so far, reorientations included.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn turn_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, Step::Turn(_)))
            .count()
    }

    /// The face turns only, in recording order, each translated into the
    /// starting frame. Applying them to the starting state reproduces the
    /// recorded state up to orientation.
    pub fn solution(&self) -> Vec<Move> {
        let mut frame = Frame::IDENTITY;
        self.steps
            .iter()
            .filter_map(|step| match *step {
                Step::Turn(mv) => Some(frame.translate(mv)),
                Step::Rotate(rotation) => {
                    frame.rotate(rotation);
                    None
                }
            })
            .collect()
    }
}

/// A cube that records every change made to it.
#[derive(Debug, Clone)]
pub struct RecordedCube {
    state: CubeState,
    recorder: MoveRecorder,
}

impl RecordedCube {
    pub fn new(state: CubeState) -> Self {
        Self {
            state,
            recorder: MoveRecorder::new(),
        }
    }

    pub fn state(&self) -> &CubeState {
        &self.state
    }

    pub fn recorder(&self) -> &MoveRecorder {
        &self.recorder
    }

    pub fn apply(&mut self, mv: Move) {
        trace!("turn {mv}");
        self.state.apply(mv);
        self.recorder.record_turn(mv);
    }

    pub fn apply_all(&mut self, moves: &[Move]) {
        for &mv in moves {
            self.apply(mv);
        }
    }

    pub fn rotate(&mut self, rotation: Rotation) {
        trace!("rotate {rotation}");
        self.state.rotate(rotation);
        self.recorder.record_rotation(rotation);
    }

    pub fn into_parts(self) -> (CubeState, MoveRecorder) {
        (self.state, self.recorder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::{parse_algorithm, render, Axis, Turn};

    #[test]
    fn test_solution_skips_rotations() {
        let mut cube = RecordedCube::new(CubeState::solved());
        cube.apply("R".parse().unwrap());
        cube.rotate("y".parse().unwrap());
        cube.apply("U".parse().unwrap());

        assert_eq!(cube.recorder().steps().len(), 3);
        assert_eq!(cube.recorder().turn_count(), 2);
        assert_eq!(cube.recorder().solution().len(), 2);
    }

    #[test]
    fn test_frame_after_y() {
        let mut frame = Frame::IDENTITY;
        frame.rotate(Rotation::new(Axis::Y, Turn::Clockwise));
        assert_eq!(frame.face_at(Face::F), Face::R);
        assert_eq!(frame.face_at(Face::R), Face::B);
        assert_eq!(frame.face_at(Face::U), Face::U);

        frame.rotate(Rotation::new(Axis::Y, Turn::CounterClockwise));
        assert_eq!(frame, Frame::IDENTITY);
    }

    #[test]
    fn test_translated_solution_replays_on_start_state() {
        let mut start = CubeState::solved();
        start.apply_all(&parse_algorithm("D2 L' B U").unwrap());

        let mut cube = RecordedCube::new(start);
        for token in ["y", "x'", "z2", "y2"] {
            cube.rotate(token.parse().unwrap());
            cube.apply_all(&parse_algorithm("R U' F2").unwrap());
        }

        let mut replayed = start;
        replayed.apply_all(&cube.recorder().solution());

        // same pieces in the same places, only the viewpoint differs
        let (end, _) = cube.into_parts();
        let mut reoriented = end;
        for token in ["y2'", "z2'", "x", "y'"] {
            reoriented.rotate(token.parse().unwrap());
        }
        assert_eq!(replayed, reoriented);
    }

    #[test]
    fn test_solution_in_identity_frame_is_unchanged() {
        let mut cube = RecordedCube::new(CubeState::solved());
        cube.apply_all(&parse_algorithm("R U R' U'").unwrap());
        assert_eq!(render(&cube.recorder().solution()), "R U R' U'");
    }
}
