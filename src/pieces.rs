//! Cube colors, faces, and the piece slots that tie stickers together.
//!
//! An edge piece is two facelets that always travel together, a corner piece
//! three. Pieces are never stored: they are found on demand by scanning the
//! slot tables below against the live sticker grid, since any move may
//! invalidate every earlier answer.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::CubeState;

/// A sticker color, written as a single-character code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Red,
    Orange,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Red,
        Color::Orange,
    ];

    /// The single-character code used in cube state files.
    pub const fn code(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Orange => 'O',
        }
    }

    /// Parses a color code. Lowercase codes are accepted.
    pub fn from_code(code: char) -> Option<Self> {
        Color::ALL
            .into_iter()
            .find(|color| color.code() == code.to_ascii_uppercase())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A face position on the cube, named from the solver's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Face {
    U,
    D,
    F,
    B,
    L,
    R,
}

impl Face {
    pub const ALL: [Face; 6] = [Face::U, Face::D, Face::F, Face::B, Face::L, Face::R];

    /// Index into per-face arrays.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
            Face::L => 'L',
            Face::R => 'R',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Face::ALL.into_iter().find(|face| face.letter() == letter)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One sticker position: a face and a row/column within its 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Facelet {
    pub face: Face,
    pub row: usize,
    pub col: usize,
}

impl Facelet {
    pub const fn new(face: Face, row: usize, col: usize) -> Self {
        Self { face, row, col }
    }
}

const fn fl(face: Face, row: usize, col: usize) -> Facelet {
    Facelet::new(face, row, col)
}

/// Which horizontal layer a slot belongs to, with U on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Top,
    Middle,
    Bottom,
}

/// The twelve places an edge piece can sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeSlot {
    UF,
    UL,
    UB,
    UR,
    FR,
    FL,
    BL,
    BR,
    DF,
    DR,
    DB,
    DL,
}

/// Facelets of each edge slot. Top and bottom slots list their U/D sticker
/// first, middle slots their F/B sticker.
const EDGE_FACELETS: [[Facelet; 2]; 12] = [
    [fl(Face::U, 2, 1), fl(Face::F, 0, 1)],
    [fl(Face::U, 1, 0), fl(Face::L, 0, 1)],
    [fl(Face::U, 0, 1), fl(Face::B, 0, 1)],
    [fl(Face::U, 1, 2), fl(Face::R, 0, 1)],
    [fl(Face::F, 1, 2), fl(Face::R, 1, 0)],
    [fl(Face::F, 1, 0), fl(Face::L, 1, 2)],
    [fl(Face::B, 1, 2), fl(Face::L, 1, 0)],
    [fl(Face::B, 1, 0), fl(Face::R, 1, 2)],
    [fl(Face::D, 0, 1), fl(Face::F, 2, 1)],
    [fl(Face::D, 1, 2), fl(Face::R, 2, 1)],
    [fl(Face::D, 2, 1), fl(Face::B, 2, 1)],
    [fl(Face::D, 1, 0), fl(Face::L, 2, 1)],
];

impl EdgeSlot {
    pub const ALL: [EdgeSlot; 12] = [
        EdgeSlot::UF,
        EdgeSlot::UL,
        EdgeSlot::UB,
        EdgeSlot::UR,
        EdgeSlot::FR,
        EdgeSlot::FL,
        EdgeSlot::BL,
        EdgeSlot::BR,
        EdgeSlot::DF,
        EdgeSlot::DR,
        EdgeSlot::DB,
        EdgeSlot::DL,
    ];

    /// Top-layer slots in the order a clockwise U turn carries them.
    pub const TOP: [EdgeSlot; 4] = [EdgeSlot::UF, EdgeSlot::UL, EdgeSlot::UB, EdgeSlot::UR];

    /// Bottom-layer slots in the order a clockwise D turn carries them.
    pub const BOTTOM: [EdgeSlot; 4] = [EdgeSlot::DF, EdgeSlot::DR, EdgeSlot::DB, EdgeSlot::DL];

    #[inline]
    pub const fn facelets(self) -> [Facelet; 2] {
        EDGE_FACELETS[self as usize]
    }

    pub const fn layer(self) -> Layer {
        match self {
            EdgeSlot::UF | EdgeSlot::UL | EdgeSlot::UB | EdgeSlot::UR => Layer::Top,
            EdgeSlot::FR | EdgeSlot::FL | EdgeSlot::BL | EdgeSlot::BR => Layer::Middle,
            EdgeSlot::DF | EdgeSlot::DR | EdgeSlot::DB | EdgeSlot::DL => Layer::Bottom,
        }
    }
}

/// The eight places a corner piece can sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerSlot {
    UFR,
    UFL,
    UBL,
    UBR,
    DFR,
    DBR,
    DBL,
    DFL,
}

/// Facelets of each corner slot, U/D sticker first, then clockwise as seen
/// from outside the corner.
const CORNER_FACELETS: [[Facelet; 3]; 8] = [
    [fl(Face::U, 2, 2), fl(Face::R, 0, 0), fl(Face::F, 0, 2)],
    [fl(Face::U, 2, 0), fl(Face::F, 0, 0), fl(Face::L, 0, 2)],
    [fl(Face::U, 0, 0), fl(Face::L, 0, 0), fl(Face::B, 0, 2)],
    [fl(Face::U, 0, 2), fl(Face::B, 0, 0), fl(Face::R, 0, 2)],
    [fl(Face::D, 0, 2), fl(Face::F, 2, 2), fl(Face::R, 2, 0)],
    [fl(Face::D, 2, 2), fl(Face::R, 2, 2), fl(Face::B, 2, 0)],
    [fl(Face::D, 2, 0), fl(Face::B, 2, 2), fl(Face::L, 2, 0)],
    [fl(Face::D, 0, 0), fl(Face::L, 2, 2), fl(Face::F, 2, 0)],
];

impl CornerSlot {
    pub const ALL: [CornerSlot; 8] = [
        CornerSlot::UFR,
        CornerSlot::UFL,
        CornerSlot::UBL,
        CornerSlot::UBR,
        CornerSlot::DFR,
        CornerSlot::DBR,
        CornerSlot::DBL,
        CornerSlot::DFL,
    ];

    /// Top-layer slots in the order a clockwise U turn carries them.
    pub const TOP: [CornerSlot; 4] = [
        CornerSlot::UFR,
        CornerSlot::UFL,
        CornerSlot::UBL,
        CornerSlot::UBR,
    ];

    /// Bottom-layer slots in the order a clockwise D turn carries them.
    pub const BOTTOM: [CornerSlot; 4] = [
        CornerSlot::DFR,
        CornerSlot::DBR,
        CornerSlot::DBL,
        CornerSlot::DFL,
    ];

    #[inline]
    pub const fn facelets(self) -> [Facelet; 3] {
        CORNER_FACELETS[self as usize]
    }

    pub const fn layer(self) -> Layer {
        match self {
            CornerSlot::UFR | CornerSlot::UFL | CornerSlot::UBL | CornerSlot::UBR => Layer::Top,
            _ => Layer::Bottom,
        }
    }
}

/// Where an edge piece currently sits.
///
/// `facelets[i]` is the facelet showing the `i`-th color passed to
/// [`find_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeLocation {
    pub slot: EdgeSlot,
    pub facelets: [Facelet; 2],
}

impl EdgeLocation {
    /// 0 when the first requested color sits on the slot's primary facelet.
    pub fn orientation(&self) -> usize {
        usize::from(self.facelets[0] != self.slot.facelets()[0])
    }
}

/// Where a corner piece currently sits.
///
/// `facelets[i]` is the facelet showing the `i`-th color passed to
/// [`find_corner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerLocation {
    pub slot: CornerSlot,
    pub facelets: [Facelet; 3],
}

impl CornerLocation {
    /// How far the first requested color is twisted clockwise from the
    /// slot's U/D facelet (0, 1 or 2).
    pub fn twist(&self) -> usize {
        self.slot
            .facelets()
            .iter()
            .position(|&facelet| facelet == self.facelets[0])
            .unwrap_or(0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocateError {
    #[error("{0} is not the color of any center")]
    UnknownColor(Color),
    #[error("no edge shows the colors {0} and {1}")]
    MissingEdge(Color, Color),
    #[error("no corner shows the colors {0}, {1} and {2}")]
    MissingCorner(Color, Color, Color),
}

fn check_known(cube: &CubeState, colors: &[Color]) -> Result<(), LocateError> {
    match colors.iter().find(|&&color| cube.face_of(color).is_none()) {
        Some(&unknown) => Err(LocateError::UnknownColor(unknown)),
        None => Ok(()),
    }
}

/// Finds the slot holding the edge with colors `a` and `b`.
pub fn find_edge(cube: &CubeState, a: Color, b: Color) -> Result<EdgeLocation, LocateError> {
    check_known(cube, &[a, b])?;

    for slot in EdgeSlot::ALL {
        let [first, second] = slot.facelets();
        let stickers = (cube.sticker(first), cube.sticker(second));

        if stickers == (a, b) {
            return Ok(EdgeLocation {
                slot,
                facelets: [first, second],
            });
        }
        if stickers == (b, a) {
            return Ok(EdgeLocation {
                slot,
                facelets: [second, first],
            });
        }
    }

    Err(LocateError::MissingEdge(a, b))
}

/// Finds the slot holding the corner with colors `a`, `b` and `c`.
pub fn find_corner(
    cube: &CubeState,
    a: Color,
    b: Color,
    c: Color,
) -> Result<CornerLocation, LocateError> {
    check_known(cube, &[a, b, c])?;

    for slot in CornerSlot::ALL {
        let slot_facelets = slot.facelets();
        let mut matched = [slot_facelets[0]; 3];
        let mut used = [false; 3];

        let all_found = [a, b, c].iter().enumerate().all(|(i, &color)| {
            let hit = (0..3).find(|&k| !used[k] && cube.sticker(slot_facelets[k]) == color);
            if let Some(k) = hit {
                used[k] = true;
                matched[i] = slot_facelets[k];
            }
            hit.is_some()
        });

        if all_found {
            return Ok(CornerLocation {
                slot,
                facelets: matched,
            });
        }
    }

    Err(LocateError::MissingCorner(a, b, c))
}
