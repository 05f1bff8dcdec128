//! Sticker permutation tables for face turns and whole-cube rotations.
//!
//! Faces are laid out as in the usual unfolded net. U is viewed from above
//! with B along its top edge, D from below with F along its top edge, and
//! each side face from outside with U along its top edge.
//!
//! Every move in the crate is derived from these tables: a face turn spins
//! one face grid and hands three-sticker strips around its four neighbours,
//! a rotation carries whole face grids around an axis.

use crate::moves::Axis;
use crate::pieces::Face;

/// A row/column position within a face grid.
pub type Cell = (usize, usize);

/// One face's 3x3 grid of values.
pub type Grid<T> = [[T; 3]; 3];

/// The eight non-center cells of a face in clockwise order.
///
/// A clockwise quarter turn moves the sticker at `RING[i]` to `RING[i + 2]`.
pub const RING: [Cell; 8] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 2),
    (2, 2),
    (2, 1),
    (2, 0),
    (1, 0),
];

/// Three stickers along the edge of a neighbouring face.
pub type Strip = (Face, [Cell; 3]);

/// The four neighbour strips of each face, indexed by `Face::index`.
///
/// A clockwise quarter turn carries strip `i` onto strip `i + 1`, cell `k`
/// landing on cell `k`.
pub const ADJACENT_STRIPS: [[Strip; 4]; 6] = [
    // U: F -> L -> B -> R
    [
        (Face::F, [(0, 0), (0, 1), (0, 2)]),
        (Face::L, [(0, 0), (0, 1), (0, 2)]),
        (Face::B, [(0, 0), (0, 1), (0, 2)]),
        (Face::R, [(0, 0), (0, 1), (0, 2)]),
    ],
    // D: F -> R -> B -> L
    [
        (Face::F, [(2, 0), (2, 1), (2, 2)]),
        (Face::R, [(2, 0), (2, 1), (2, 2)]),
        (Face::B, [(2, 0), (2, 1), (2, 2)]),
        (Face::L, [(2, 0), (2, 1), (2, 2)]),
    ],
    // F: U -> R -> D -> L
    [
        (Face::U, [(2, 0), (2, 1), (2, 2)]),
        (Face::R, [(0, 0), (1, 0), (2, 0)]),
        (Face::D, [(0, 2), (0, 1), (0, 0)]),
        (Face::L, [(2, 2), (1, 2), (0, 2)]),
    ],
    // B: U -> L -> D -> R
    [
        (Face::U, [(0, 2), (0, 1), (0, 0)]),
        (Face::L, [(0, 0), (1, 0), (2, 0)]),
        (Face::D, [(2, 0), (2, 1), (2, 2)]),
        (Face::R, [(2, 2), (1, 2), (0, 2)]),
    ],
    // L: U -> F -> D -> B
    [
        (Face::U, [(0, 0), (1, 0), (2, 0)]),
        (Face::F, [(0, 0), (1, 0), (2, 0)]),
        (Face::D, [(0, 0), (1, 0), (2, 0)]),
        (Face::B, [(2, 2), (1, 2), (0, 2)]),
    ],
    // R: U -> B -> D -> F
    [
        (Face::U, [(2, 2), (1, 2), (0, 2)]),
        (Face::B, [(0, 0), (1, 0), (2, 0)]),
        (Face::D, [(2, 2), (1, 2), (0, 2)]),
        (Face::F, [(2, 2), (1, 2), (0, 2)]),
    ],
];

/// How a face grid is re-read when it is carried to another position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridTurn {
    Identity,
    Clockwise,
    Half,
    CounterClockwise,
}

/// For each `GridTurn`, the source cell that lands on a given target cell.
const SOURCE_CELL: [fn(Cell) -> Cell; 4] = [
    |(r, c)| (r, c),
    |(r, c)| (2 - c, r),
    |(r, c)| (2 - r, 2 - c),
    |(r, c)| (c, 2 - r),
];

impl GridTurn {
    pub fn apply<T: Copy>(self, grid: &Grid<T>) -> Grid<T> {
        let source = SOURCE_CELL[self as usize];
        std::array::from_fn(|r| {
            std::array::from_fn(|c| {
                let (sr, sc) = source((r, c));
                grid[sr][sc]
            })
        })
    }
}

/// The effect of a clockwise quarter rotation about one axis.
///
/// Side `faces[i]` is carried to `faces[i + 1]` with its grid re-read by
/// `carry[i]`. `pole` spins clockwise in place and `antipole`
/// counter-clockwise.
#[derive(Debug, Clone, Copy)]
pub struct AxisCycle {
    pub faces: [Face; 4],
    pub carry: [GridTurn; 4],
    pub pole: Face,
    pub antipole: Face,
}

/// Indexed by `Axis::index`.
pub const AXIS_CYCLES: [AxisCycle; 3] = [
    // x follows R
    AxisCycle {
        faces: [Face::U, Face::B, Face::D, Face::F],
        carry: [
            GridTurn::Half,
            GridTurn::Half,
            GridTurn::Identity,
            GridTurn::Identity,
        ],
        pole: Face::R,
        antipole: Face::L,
    },
    // y follows U
    AxisCycle {
        faces: [Face::F, Face::L, Face::B, Face::R],
        carry: [GridTurn::Identity; 4],
        pole: Face::U,
        antipole: Face::D,
    },
    // z follows F
    AxisCycle {
        faces: [Face::U, Face::R, Face::D, Face::L],
        carry: [GridTurn::Clockwise; 4],
        pole: Face::F,
        antipole: Face::B,
    },
];

pub fn axis_cycle(axis: Axis) -> &'static AxisCycle {
    &AXIS_CYCLES[axis.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered() -> Grid<usize> {
        [[0, 1, 2], [3, 4, 5], [6, 7, 8]]
    }

    #[test]
    fn test_grid_turns() {
        let grid = numbered();
        assert_eq!(
            GridTurn::Clockwise.apply(&grid),
            [[6, 3, 0], [7, 4, 1], [8, 5, 2]]
        );
        assert_eq!(
            GridTurn::CounterClockwise.apply(&grid),
            [[2, 5, 8], [1, 4, 7], [0, 3, 6]]
        );
        assert_eq!(GridTurn::Half.apply(&grid), [[8, 7, 6], [5, 4, 3], [2, 1, 0]]);
        assert_eq!(GridTurn::Identity.apply(&grid), grid);
    }

    #[test]
    fn test_clockwise_grid_turn_follows_ring() {
        let grid = numbered();
        let turned = GridTurn::Clockwise.apply(&grid);
        for (i, &(r, c)) in RING.iter().enumerate() {
            let (tr, tc) = RING[(i + 2) % 8];
            assert_eq!(turned[tr][tc], grid[r][c]);
        }
    }

    #[test]
    fn test_strips_never_touch_their_own_face() {
        for face in Face::ALL {
            for (neighbour, cells) in ADJACENT_STRIPS[face.index()] {
                assert_ne!(neighbour, face);
                assert!(cells.iter().all(|&cell| cell != (1, 1)));
            }
        }
    }

    #[test]
    fn test_axis_cycles_cover_all_faces() {
        for axis in Axis::ALL {
            let cycle = axis_cycle(axis);
            let mut faces: Vec<Face> = cycle.faces.to_vec();
            faces.push(cycle.pole);
            faces.push(cycle.antipole);
            faces.sort();
            assert_eq!(faces, Face::ALL.to_vec(), "axis {axis:?}");
        }
    }
}
