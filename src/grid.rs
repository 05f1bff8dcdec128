//! The sticker grid of a 3x3x3 cube and the moves that permute it.
//!
//! A `CubeState` is six 3x3 grids of colors, one per face position, laid
//! out as described in [`crate::geometry`]. Every mutation goes through
//! [`CubeState::apply`] or [`CubeState::rotate`], so the 54 stickers are
//! only ever permuted, never created or destroyed.

use std::collections::BTreeMap;
use std::fmt;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::geometry::{axis_cycle, GridTurn, ADJACENT_STRIPS, RING};
use crate::moves::{Move, Rotation};
use crate::pieces::{Color, Face, Facelet};

/// The external cube description: each face mapped to three rows of three
/// color codes.
pub type FaceGrid = BTreeMap<Face, Vec<Vec<char>>>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("face {0} is missing")]
    MissingFace(Face),
    #[error("face {face} must have 3 rows, found {rows}")]
    RowCount { face: Face, rows: usize },
    #[error("row {row} of face {face} must have 3 stickers, found {len}")]
    RowLength { face: Face, row: usize, len: usize },
    #[error("unknown color code {code:?} on face {face}")]
    UnknownColor { face: Face, code: char },
    #[error("faces {0} and {1} both have a {2} center")]
    DuplicateCenter(Face, Face, Color),
    #[error("color {color} appears {count} times, expected 9")]
    ColorCount { color: Color, count: usize },
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubeState {
    faces: [[[Color; 3]; 3]; 6],
}

/// Center colors of the solved cube, indexed by `Face::index`.
const SOLVED_CENTERS: [Color; 6] = [
    Color::White,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Orange,
    Color::Red,
];

impl CubeState {
    /// White up, yellow down, green front, blue back, orange left, red right.
    pub fn solved() -> Self {
        Self {
            faces: SOLVED_CENTERS.map(|color| [[color; 3]; 3]),
        }
    }

    /// Builds a state from an external description, checking its shape, its
    /// color codes, and that the six centers differ.
    ///
    /// Color counts are left to [`CubeState::validate_counts`].
    pub fn from_grid(grid: &FaceGrid) -> Result<Self, InputError> {
        let mut faces = [[[Color::White; 3]; 3]; 6];

        for face in Face::ALL {
            let rows = grid.get(&face).ok_or(InputError::MissingFace(face))?;
            if rows.len() != 3 {
                return Err(InputError::RowCount {
                    face,
                    rows: rows.len(),
                });
            }
            for (r, row) in rows.iter().enumerate() {
                if row.len() != 3 {
                    return Err(InputError::RowLength {
                        face,
                        row: r,
                        len: row.len(),
                    });
                }
                for (c, &code) in row.iter().enumerate() {
                    faces[face.index()][r][c] =
                        Color::from_code(code).ok_or(InputError::UnknownColor { face, code })?;
                }
            }
        }

        let state = Self { faces };
        state.validate_centers()?;
        Ok(state)
    }

    pub fn to_grid(&self) -> FaceGrid {
        Face::ALL
            .into_iter()
            .map(|face| {
                let rows = self.faces[face.index()]
                    .iter()
                    .map(|row| row.iter().map(|color| color.code()).collect())
                    .collect();
                (face, rows)
            })
            .collect()
    }

    fn validate_centers(&self) -> Result<(), InputError> {
        for (i, &first) in Face::ALL.iter().enumerate() {
            for &second in &Face::ALL[i + 1..] {
                if self.center(first) == self.center(second) {
                    return Err(InputError::DuplicateCenter(first, second, self.center(first)));
                }
            }
        }
        Ok(())
    }

    /// Checks that every color shows on exactly nine stickers.
    pub fn validate_counts(&self) -> Result<(), InputError> {
        let counts = self.color_counts();
        for color in Color::ALL {
            let count = counts.get(&color).copied().unwrap_or(0);
            if count != 9 {
                return Err(InputError::ColorCount { color, count });
            }
        }
        Ok(())
    }

    pub fn color_counts(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for &color in self.faces.iter().flatten().flatten() {
            *counts.entry(color).or_insert(0) += 1;
        }
        counts
    }

    #[inline]
    pub fn sticker(&self, facelet: Facelet) -> Color {
        self.faces[facelet.face.index()][facelet.row][facelet.col]
    }

    #[inline]
    pub fn get(&self, face: Face, row: usize, col: usize) -> Color {
        self.faces[face.index()][row][col]
    }

    #[inline]
    pub fn center(&self, face: Face) -> Color {
        self.faces[face.index()][1][1]
    }

    /// The face whose center shows `color`, if any.
    pub fn face_of(&self, color: Color) -> Option<Face> {
        Face::ALL.into_iter().find(|&face| self.center(face) == color)
    }

    pub fn face_grid(&self, face: Face) -> &[[Color; 3]; 3] {
        &self.faces[face.index()]
    }

    /// True when every face is a single color.
    pub fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|grid| grid.iter().flatten().all(|&color| color == grid[1][1]))
    }

    /// Applies a face turn in the current frame.
    pub fn apply(&mut self, mv: Move) {
        let quarter_turns = mv.turn.quarter_turns();
        let face = mv.face.index();
        let before = self.faces;

        for (i, &(r, c)) in RING.iter().enumerate() {
            let (tr, tc) = RING[(i + 2 * quarter_turns) % RING.len()];
            self.faces[face][tr][tc] = before[face][r][c];
        }

        let strips = &ADJACENT_STRIPS[face];
        for (i, &(source_face, source_cells)) in strips.iter().enumerate() {
            let (target_face, target_cells) = strips[(i + quarter_turns) % strips.len()];
            for (&(sr, sc), &(tr, tc)) in source_cells.iter().zip(&target_cells) {
                self.faces[target_face.index()][tr][tc] = before[source_face.index()][sr][sc];
            }
        }
    }

    pub fn apply_all(&mut self, moves: &[Move]) {
        for &mv in moves {
            self.apply(mv);
        }
    }

    /// Reorients the whole cube. Which pieces are solved never changes.
    pub fn rotate(&mut self, rotation: Rotation) {
        let cycle = axis_cycle(rotation.axis);

        for _ in 0..rotation.turn.quarter_turns() {
            let before = self.faces;
            for (i, &source) in cycle.faces.iter().enumerate() {
                let target = cycle.faces[(i + 1) % cycle.faces.len()];
                self.faces[target.index()] = cycle.carry[i].apply(&before[source.index()]);
            }
            self.faces[cycle.pole.index()] = GridTurn::Clockwise.apply(&before[cycle.pole.index()]);
            self.faces[cycle.antipole.index()] =
                GridTurn::CounterClockwise.apply(&before[cycle.antipole.index()]);
        }
    }

    /// Renders the cube as an unfolded net: U above, then L F R B, then D.
    pub fn format_net(&self) -> String {
        let mut output = String::new();
        let indent = " ".repeat(7);

        for row in 0..3 {
            output.push_str(&indent);
            push_row(&mut output, &self.faces[Face::U.index()][row]);
            output.push('\n');
        }
        for row in 0..3 {
            for (i, face) in [Face::L, Face::F, Face::R, Face::B].into_iter().enumerate() {
                if i > 0 {
                    output.push_str("  ");
                }
                push_row(&mut output, &self.faces[face.index()][row]);
            }
            output.push('\n');
        }
        for row in 0..3 {
            output.push_str(&indent);
            push_row(&mut output, &self.faces[Face::D.index()][row]);
            output.push('\n');
        }

        output
    }
}

fn push_row(output: &mut String, row: &[Color; 3]) {
    for (i, color) in row.iter().enumerate() {
        if i > 0 {
            output.push(' ');
        }
        output.push(color.code());
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl fmt::Debug for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CubeState")?;
        f.write_str(&self.format_net())
    }
}

impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_net())
    }
}
