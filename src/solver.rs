//! The layer-by-layer solver.
//!
//! Six stages run in order, each reorienting the cube, classifying the
//! piece it works on, and applying a fixed algorithm until the stage goal
//! holds. Every stage loop has a small ceiling; running into one means the
//! input was not a reachable cube state, or the solver has a bug.

use std::fmt;

use log::{debug, info, warn};
use thiserror::Error;

use crate::grid::{CubeState, InputError};
use crate::moves::{parse_algorithm, Axis, Move, Rotation, Turn};
use crate::phases::{
    algorithms, cross_complete, first_corners_complete, last_cross_complete, last_face_complete,
    locate_cross_edge, locate_first_corner, locate_middle_edge, quarter_turns_between,
    second_layer_complete, CornerCase, CrossCase, CycleCase, Dead, Direction, LastCrossCase,
    LastFaceCase, MiddleCase, Palette,
};
use crate::pieces::{Color, Face, LocateError};
use crate::recorder::{MoveRecorder, RecordedCube};
use crate::Solution;

/// Algorithm applications allowed per first-layer edge.
const CROSS_CEILING: usize = 3;
/// Algorithm applications allowed per first-layer corner.
const CORNER_CEILING: usize = 3;
/// Algorithm applications allowed per middle edge.
const MIDDLE_CEILING: usize = 3;
const LAST_CROSS_CEILING: usize = 3;
const SUNE_CEILING: usize = 4;
/// Cycle applications allowed for each of corners and edges.
const CYCLE_CEILING: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    WhiteCross,
    WhiteCorners,
    SecondLayer,
    YellowCross,
    YellowFace,
    LastLayer,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::WhiteCross,
        Stage::WhiteCorners,
        Stage::SecondLayer,
        Stage::YellowCross,
        Stage::YellowFace,
        Stage::LastLayer,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Stage::WhiteCross => "white cross",
            Stage::WhiteCorners => "white corners",
            Stage::SecondLayer => "second layer",
            Stage::YellowCross => "yellow cross",
            Stage::YellowFace => "yellow face",
            Stage::LastLayer => "last layer",
        }
    }

    /// Whether this stage's goal holds. Later goals assume earlier ones.
    pub fn is_complete(self, state: &CubeState, palette: &Palette) -> bool {
        match self {
            Stage::WhiteCross => cross_complete(state, palette),
            Stage::WhiteCorners => first_corners_complete(state, palette),
            Stage::SecondLayer => second_layer_complete(state, palette),
            Stage::YellowCross => last_cross_complete(state, palette),
            Stage::YellowFace => last_face_complete(state, palette),
            Stage::LastLayer => state.is_solved(),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("malformed cube: {0}")]
    Input(#[from] InputError),
    #[error("cube cannot be solved ({stage}): {reason}")]
    Unsolvable { stage: Stage, reason: String },
    #[error("solver invariant broken: {0}")]
    Internal(String),
}

/// Drives one cube through the six stages, recording every step.
pub struct Solver {
    cube: RecordedCube,
    palette: Palette,
    stage: Stage,
}

impl Solver {
    pub fn new(state: CubeState) -> Self {
        Self {
            palette: Palette::of(&state),
            cube: RecordedCube::new(state),
            stage: Stage::WhiteCross,
        }
    }

    pub fn state(&self) -> &CubeState {
        self.cube.state()
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn recorder(&self) -> &MoveRecorder {
        self.cube.recorder()
    }

    /// Runs every stage and returns the face turns, in the frame the cube
    /// was given in.
    pub fn solve(mut self) -> Result<Solution, SolveError> {
        if self.state().is_solved() {
            info!("cube is already solved");
            return Ok(Solution::default());
        }
        for stage in Stage::ALL {
            self.run_stage(stage)?;
        }
        let (_, recorder) = self.cube.into_parts();
        info!(
            "solved in {} turns ({} steps recorded)",
            recorder.turn_count(),
            recorder.steps().len()
        );
        Ok(Solution::new(recorder.solution()))
    }

    /// Runs one stage, checking its goal afterwards.
    pub fn run_stage(&mut self, stage: Stage) -> Result<(), SolveError> {
        self.stage = stage;
        let before = self.recorder().turn_count();
        debug!("{stage}: starting");

        match stage {
            Stage::WhiteCross => self.white_cross()?,
            Stage::WhiteCorners => self.white_corners()?,
            Stage::SecondLayer => self.second_layer()?,
            Stage::YellowCross => self.yellow_cross()?,
            Stage::YellowFace => self.yellow_face()?,
            Stage::LastLayer => self.last_layer()?,
        }

        if !stage.is_complete(self.state(), &self.palette) {
            return Err(self.unsolvable("stage goal not reached"));
        }
        debug!(
            "{stage}: done in {} turns",
            self.recorder().turn_count() - before
        );
        Ok(())
    }

    fn unsolvable(&self, reason: impl Into<String>) -> SolveError {
        let reason = reason.into();
        warn!("{}: {reason}", self.stage);
        SolveError::Unsolvable {
            stage: self.stage,
            reason,
        }
    }

    fn dead(&self, dead: Dead) -> SolveError {
        match dead {
            Dead::Unsolvable(reason) => self.unsolvable(reason),
            Dead::Internal(reason) => SolveError::Internal(format!("{}: {reason}", self.stage)),
        }
    }

    fn lost(&self, err: LocateError) -> SolveError {
        match err {
            LocateError::UnknownColor(_) => SolveError::Internal(err.to_string()),
            _ => self.unsolvable(err.to_string()),
        }
    }

    fn run(&mut self, algorithm: &str) -> Result<(), SolveError> {
        let moves = parse_algorithm(algorithm)
            .map_err(|err| SolveError::Internal(format!("algorithm {algorithm:?}: {err}")))?;
        self.cube.apply_all(&moves);
        Ok(())
    }

    fn turn(&mut self, face: Face, quarter_turns: usize) {
        if let Some(turn) = Turn::from_quarter_turns(quarter_turns) {
            self.cube.apply(Move::new(face, turn));
        }
    }

    fn rotate(&mut self, axis: Axis, quarter_turns: usize) {
        if let Some(turn) = Turn::from_quarter_turns(quarter_turns) {
            self.cube.rotate(Rotation::new(axis, turn));
        }
    }

    /// Reorients the cube so the face with `color` at its center is up.
    fn face_up(&mut self, color: Color) -> Result<(), SolveError> {
        let (axis, quarter_turns) = match self.state().face_of(color) {
            Some(Face::U) => return Ok(()),
            Some(Face::D) => (Axis::X, 2),
            Some(Face::F) => (Axis::X, 1),
            Some(Face::B) => (Axis::X, 3),
            Some(Face::L) => (Axis::Z, 1),
            Some(Face::R) => (Axis::Z, 3),
            None => return Err(SolveError::Internal(format!("no center shows {color}"))),
        };
        self.rotate(axis, quarter_turns);
        Ok(())
    }

    /// Spins the cube about the vertical axis until `color` is the front
    /// center.
    fn face_front(&mut self, color: Color) -> Result<(), SolveError> {
        let quarter_turns = match self.state().face_of(color) {
            Some(Face::F) => 0,
            Some(Face::R) => 1,
            Some(Face::B) => 2,
            Some(Face::L) => 3,
            _ => {
                return Err(SolveError::Internal(format!(
                    "{color} is not a side center"
                )))
            }
        };
        self.rotate(Axis::Y, quarter_turns);
        Ok(())
    }

    /// Side center colors in the order the stages visit them.
    fn side_colors(&self) -> [Color; 4] {
        [Face::F, Face::R, Face::B, Face::L].map(|face| self.state().center(face))
    }

    fn white_cross(&mut self) -> Result<(), SolveError> {
        self.face_up(self.palette.first)?;

        for color in self.side_colors() {
            self.face_front(color)?;
            let mut applied = 0;
            loop {
                let edge =
                    locate_cross_edge(self.state(), &self.palette).map_err(|err| self.lost(err))?;
                let case = CrossCase::classify(&edge);
                if case == CrossCase::Solved {
                    break;
                }
                if applied == CROSS_CEILING {
                    return Err(self.unsolvable(format!("cross edge {color} did not settle")));
                }
                applied += 1;
                debug!("cross edge {color}: {case:?}");

                match case {
                    CrossCase::Solved => {}
                    CrossCase::Top(face) => self.turn(face, 2),
                    CrossCase::Middle(index) => self.run(algorithms::CROSS_EJECT[index])?,
                    CrossCase::BottomDown(index) => {
                        self.turn(Face::D, quarter_turns_between(index, 0));
                        self.run(algorithms::CROSS_FROM_DOWN)?;
                    }
                    CrossCase::BottomSide(index) => {
                        self.turn(Face::D, quarter_turns_between(index, 1));
                        self.run(algorithms::CROSS_FROM_SIDE)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn white_corners(&mut self) -> Result<(), SolveError> {
        self.face_up(self.palette.first)?;

        for color in self.side_colors() {
            self.face_front(color)?;
            let mut applied = 0;
            loop {
                let corner = locate_first_corner(self.state(), &self.palette)
                    .map_err(|err| self.lost(err))?;
                let case = CornerCase::classify(&corner);
                if case == CornerCase::Solved {
                    break;
                }
                if applied == CORNER_CEILING {
                    return Err(self.unsolvable(format!("corner at {color} did not settle")));
                }
                applied += 1;
                debug!("corner at {color}: {case:?}");

                match case {
                    CornerCase::Solved => {}
                    CornerCase::Top(index) => self.run(algorithms::CORNER_EJECT[index])?,
                    CornerCase::Bottom { index, twist } => {
                        self.turn(Face::D, quarter_turns_between(index, 0));
                        self.run(algorithms::CORNER_INSERT[twist])?;
                    }
                }
            }
        }
        Ok(())
    }

    fn second_layer(&mut self) -> Result<(), SolveError> {
        self.face_up(self.palette.last)?;

        for color in self.side_colors() {
            let mut applied = 0;
            loop {
                self.face_front(color)?;
                let edge = locate_middle_edge(self.state()).map_err(|err| self.lost(err))?;
                let case = MiddleCase::classify(&edge).map_err(|dead| self.dead(dead))?;
                if case == MiddleCase::Solved {
                    break;
                }
                if applied == MIDDLE_CEILING {
                    return Err(self.unsolvable(format!("middle edge at {color} did not settle")));
                }
                applied += 1;
                debug!("middle edge at {color}: {case:?}");

                match case {
                    MiddleCase::Solved => {}
                    MiddleCase::Stuck(face) => {
                        self.face_front(self.state().center(face))?;
                        self.run(algorithms::MIDDLE_RIGHT)?;
                    }
                    MiddleCase::TopFront(index) => {
                        self.turn(Face::U, quarter_turns_between(index, 0));
                        self.run(algorithms::MIDDLE_RIGHT)?;
                    }
                    MiddleCase::TopRight(index) => {
                        self.turn(Face::U, quarter_turns_between(index, 3));
                        self.run(algorithms::MIDDLE_LEFT)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn yellow_cross(&mut self) -> Result<(), SolveError> {
        self.face_up(self.palette.last)?;

        let mut applied = 0;
        loop {
            let case =
                LastCrossCase::classify(self.state(), &self.palette).map_err(|d| self.dead(d))?;
            if case == LastCrossCase::Cross {
                return Ok(());
            }
            if applied == LAST_CROSS_CEILING {
                return Err(self.unsolvable("last-layer edges did not orient"));
            }
            applied += 1;
            debug!("last cross: {case:?}");

            match case {
                LastCrossCase::Line { rotations } | LastCrossCase::Ell { rotations } => {
                    self.rotate(Axis::Y, rotations)
                }
                LastCrossCase::Cross | LastCrossCase::Dot => {}
            }
            self.run(algorithms::YELLOW_CROSS)?;
        }
    }

    fn yellow_face(&mut self) -> Result<(), SolveError> {
        self.face_up(self.palette.last)?;

        let mut applied = 0;
        loop {
            let case =
                LastFaceCase::classify(self.state(), &self.palette).map_err(|d| self.dead(d))?;
            let LastFaceCase::Sune { rotations } = case else {
                return Ok(());
            };
            if applied == SUNE_CEILING {
                return Err(self.unsolvable("last-layer corners did not orient"));
            }
            applied += 1;
            debug!("last face: {case:?}");

            self.rotate(Axis::Y, rotations);
            self.run(algorithms::SUNE)?;
        }
    }

    fn last_layer(&mut self) -> Result<(), SolveError> {
        self.face_up(self.palette.last)?;
        self.align_last_layer()?;

        self.cycle_pieces(
            "corners",
            CycleCase::classify_corners,
            [algorithms::CORNER_CYCLE, algorithms::CORNER_CYCLE_INVERSE],
        )?;
        self.cycle_pieces(
            "edges",
            CycleCase::classify_edges,
            [algorithms::EDGE_CYCLE_INVERSE, algorithms::EDGE_CYCLE],
        )?;

        if !self.state().is_solved() {
            return Err(self.unsolvable("last layer placed but the cube is not solved"));
        }
        Ok(())
    }

    /// Turns U to the position that leaves the fewest corner cycles.
    fn align_last_layer(&mut self) -> Result<(), SolveError> {
        let mut best: Option<(usize, usize)> = None;
        for quarter_turns in 0..4 {
            let mut trial = *self.state();
            if let Some(turn) = Turn::from_quarter_turns(quarter_turns) {
                trial.apply(Move::new(Face::U, turn));
            }
            let case = CycleCase::classify_corners(&trial).map_err(|d| self.dead(d))?;
            if let Some(applications) = case.applications() {
                if best.map_or(true, |(_, fewest)| applications < fewest) {
                    best = Some((quarter_turns, applications));
                }
            }
        }

        let Some((quarter_turns, applications)) = best else {
            return Err(self.unsolvable("last-layer corners stay in an odd arrangement"));
        };
        debug!("last layer: U x{quarter_turns} leaves {applications} corner cycles");
        self.turn(Face::U, quarter_turns);
        Ok(())
    }

    /// Places one kind of last-layer piece with three-cycles. `cycles` holds
    /// the forward and backward algorithm, in that order.
    fn cycle_pieces(
        &mut self,
        pieces: &str,
        classify: fn(&CubeState) -> Result<CycleCase, Dead>,
        cycles: [&str; 2],
    ) -> Result<(), SolveError> {
        let [forward, backward] = cycles;
        let mut applied = 0;
        loop {
            let case = classify(self.state()).map_err(|d| self.dead(d))?;
            debug!("last-layer {pieces}: {case:?}");
            let algorithm = match case {
                CycleCase::Placed => return Ok(()),
                CycleCase::Odd => {
                    return Err(self.unsolvable(format!(
                        "last-layer {pieces} need a single swap, which no move sequence makes"
                    )))
                }
                _ if applied == CYCLE_CEILING => {
                    return Err(self.unsolvable(format!("last-layer {pieces} did not settle")))
                }
                CycleCase::OneHome {
                    rotations,
                    direction,
                } => {
                    self.rotate(Axis::Y, rotations);
                    match direction {
                        Direction::Forward => forward,
                        Direction::Backward => backward,
                    }
                }
                CycleCase::NoneHome => forward,
            };
            applied += 1;
            self.run(algorithm)?;
        }
    }
}
