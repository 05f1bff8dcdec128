//! Case analysis for each stage of the layer-by-layer method.
//!
//! Everything here is a pure function of the cube state: goal predicates
//! that say whether a stage is finished, and classifiers that say which
//! algorithm the solver should run next. The solver in [`crate::solver`]
//! owns the loop that reorients, applies and re-classifies.
//!
//! Classifiers assume the stage's working orientation: the first-layer
//! color on U for the first two stages, the last-layer color on U after.

use crate::grid::CubeState;
use crate::pieces::{
    find_corner, find_edge, Color, CornerLocation, CornerSlot, EdgeLocation, EdgeSlot, Face,
    Facelet, Layer, LocateError,
};

/// The two colors the whole method is organised around, read from the
/// starting state: the first layer is built on the U center's color, the
/// last layer finished on the D center's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub first: Color,
    pub last: Color,
}

impl Palette {
    pub fn of(state: &CubeState) -> Self {
        Self {
            first: state.center(Face::U),
            last: state.center(Face::D),
        }
    }
}

/// The fixed algorithm table, in standard notation.
pub mod algorithms {
    /// Drops a middle-layer edge into the bottom layer, one entry per slot
    /// in `EdgeSlot::ALL` middle order (FR, FL, BL, BR).
    pub const CROSS_EJECT: [&str; 4] = ["R' D' R", "L D L'", "L' D L", "R D R'"];
    pub const CROSS_FROM_DOWN: &str = "F2";
    pub const CROSS_FROM_SIDE: &str = "R F' R'";

    /// Drops a top-layer corner into the bottom layer, one entry per slot
    /// in `CornerSlot::TOP` order (UFR, UFL, UBL, UBR).
    pub const CORNER_EJECT: [&str; 4] = ["R' D' R", "L D L'", "L' D' L", "R D R'"];
    /// Lifts a DFR corner into UFR, one entry per twist: first-layer color
    /// facing down, front, right.
    pub const CORNER_INSERT: [&str; 3] = ["R' D2 R D R' D' R", "F D F'", "R' D' R"];

    pub const MIDDLE_RIGHT: &str = "U R U' R' U' F' U F";
    pub const MIDDLE_LEFT: &str = "U' F' U F U R U' R'";

    pub const YELLOW_CROSS: &str = "F R U R' U' F'";
    pub const SUNE: &str = "R U R' U R U2 R'";

    /// Cycles UFR -> UBL -> UBR, keeping UFL.
    pub const CORNER_CYCLE: &str = "R' F R' B2 R F' R' B2 R2";
    /// Cycles UFR -> UBR -> UBL, keeping UFL.
    pub const CORNER_CYCLE_INVERSE: &str = "R2 B2 R F R' B2 R F' R";
    /// Cycles UF -> UR -> UL, keeping UB.
    pub const EDGE_CYCLE: &str = "R U' R U R U R U' R' U' R2";
    /// Cycles UF -> UL -> UR, keeping UB.
    pub const EDGE_CYCLE_INVERSE: &str = "R2 U R U R' U' R' U' R' U R'";

    /// The single algorithms; the per-slot tables are listed separately.
    pub const ALL: [&str; 10] = [
        CROSS_FROM_DOWN,
        CROSS_FROM_SIDE,
        MIDDLE_RIGHT,
        MIDDLE_LEFT,
        YELLOW_CROSS,
        SUNE,
        CORNER_CYCLE,
        CORNER_CYCLE_INVERSE,
        EDGE_CYCLE,
        EDGE_CYCLE_INVERSE,
    ];
}

/// Quarter turns that carry position `from` to position `to` in a layer
/// listed in turning order.
pub fn quarter_turns_between(from: usize, to: usize) -> usize {
    (to + 4 - from) % 4
}

fn top_index<T: PartialEq>(layer: &[T; 4], slot: T) -> Option<usize> {
    layer.iter().position(|candidate| *candidate == slot)
}

fn matches_centers(state: &CubeState, facelets: &[Facelet]) -> bool {
    facelets
        .iter()
        .all(|&facelet| state.sticker(facelet) == state.center(facelet.face))
}

fn touches(facelets: &[Facelet], face: Face) -> bool {
    facelets.iter().any(|facelet| facelet.face == face)
}

fn edges_touching(face: Face) -> impl Iterator<Item = [Facelet; 2]> {
    EdgeSlot::ALL
        .into_iter()
        .map(EdgeSlot::facelets)
        .filter(move |facelets| touches(facelets, face))
}

fn corners_touching(face: Face) -> impl Iterator<Item = [Facelet; 3]> {
    CornerSlot::ALL
        .into_iter()
        .map(CornerSlot::facelets)
        .filter(move |facelets| touches(facelets, face))
}

// Goal predicates. These hold in any orientation.

/// The four edges around the first-layer face are solved.
pub fn cross_complete(state: &CubeState, palette: &Palette) -> bool {
    state
        .face_of(palette.first)
        .is_some_and(|face| edges_touching(face).all(|edge| matches_centers(state, &edge)))
}

/// The four corners around the first-layer face are solved.
pub fn first_corners_complete(state: &CubeState, palette: &Palette) -> bool {
    state
        .face_of(palette.first)
        .is_some_and(|face| corners_touching(face).all(|corner| matches_centers(state, &corner)))
}

/// The four edges between the two outer layers are solved.
pub fn second_layer_complete(state: &CubeState, palette: &Palette) -> bool {
    let (Some(first), Some(last)) = (state.face_of(palette.first), state.face_of(palette.last))
    else {
        return false;
    };
    EdgeSlot::ALL
        .into_iter()
        .map(EdgeSlot::facelets)
        .filter(|edge| !touches(edge, first) && !touches(edge, last))
        .all(|edge| matches_centers(state, &edge))
}

/// The four last-layer edges show the last-layer color on its face.
pub fn last_cross_complete(state: &CubeState, palette: &Palette) -> bool {
    state.face_of(palette.last).is_some_and(|face| {
        edges_touching(face)
            .flatten()
            .filter(|facelet| facelet.face == face)
            .all(|facelet| state.sticker(facelet) == palette.last)
    })
}

/// The whole last-layer face is one color.
pub fn last_face_complete(state: &CubeState, palette: &Palette) -> bool {
    state.face_of(palette.last).is_some_and(|face| {
        state
            .face_grid(face)
            .iter()
            .flatten()
            .all(|&color| color == palette.last)
    })
}

/// Outcome of a classifier that found the cube outside every solvable case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dead {
    /// No legal cube can be in this position.
    Unsolvable(String),
    /// The stage's own precondition does not hold.
    Internal(String),
}

/// Where a first-layer edge sits relative to its home at UF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossCase {
    Solved,
    /// In the top layer but misplaced or flipped: half-turn this face.
    Top(Face),
    /// In the middle layer: run `CROSS_EJECT[index]`.
    Middle(usize),
    /// In the bottom layer at this `EdgeSlot::BOTTOM` index, first-layer
    /// color facing down.
    BottomDown(usize),
    /// In the bottom layer, first-layer color facing a side.
    BottomSide(usize),
}

impl CrossCase {
    /// `edge.facelets[0]` must hold the first-layer color.
    pub fn classify(edge: &EdgeLocation) -> Self {
        let slot = edge.slot;
        match slot.layer() {
            Layer::Top => {
                if slot == EdgeSlot::UF && edge.orientation() == 0 {
                    CrossCase::Solved
                } else {
                    CrossCase::Top(slot.facelets()[1].face)
                }
            }
            Layer::Middle => {
                let index = match slot {
                    EdgeSlot::FR => 0,
                    EdgeSlot::FL => 1,
                    EdgeSlot::BL => 2,
                    _ => 3,
                };
                CrossCase::Middle(index)
            }
            Layer::Bottom => {
                let index = top_index(&EdgeSlot::BOTTOM, slot).unwrap_or(0);
                if edge.facelets[0].face == Face::D {
                    CrossCase::BottomDown(index)
                } else {
                    CrossCase::BottomSide(index)
                }
            }
        }
    }
}

/// Where a first-layer corner sits relative to its home at UFR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerCase {
    Solved,
    /// In the top layer at this `CornerSlot::TOP` index, misplaced or
    /// twisted: run `CORNER_EJECT[index]`.
    Top(usize),
    /// In the bottom layer at this `CornerSlot::BOTTOM` index. `twist` is
    /// where the first-layer color points once the corner has been brought
    /// to DFR, and picks the entry of `CORNER_INSERT`.
    Bottom { index: usize, twist: usize },
}

impl CornerCase {
    /// `corner.facelets[0]` must hold the first-layer color.
    pub fn classify(corner: &CornerLocation) -> Self {
        let slot = corner.slot;
        match slot.layer() {
            Layer::Bottom => CornerCase::Bottom {
                index: top_index(&CornerSlot::BOTTOM, slot).unwrap_or(0),
                twist: corner.twist(),
            },
            _ if slot == CornerSlot::UFR && corner.twist() == 0 => CornerCase::Solved,
            _ => CornerCase::Top(top_index(&CornerSlot::TOP, slot).unwrap_or(0)),
        }
    }
}

/// Where a middle-layer edge sits relative to its home at FR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiddleCase {
    Solved,
    /// Stuck in a middle slot: face the slot's left face front and insert
    /// an arbitrary top edge to push it out.
    Stuck(Face),
    /// In the top layer at this `EdgeSlot::TOP` index with its front color
    /// on the side: bring it to UF and insert to the right.
    TopFront(usize),
    /// In the top layer with its right color on the side: bring it to UR
    /// and insert to the left.
    TopRight(usize),
}

impl MiddleCase {
    /// `edge.facelets` hold the front and right colors, in that order.
    pub fn classify(edge: &EdgeLocation) -> Result<Self, Dead> {
        let slot = edge.slot;
        match slot.layer() {
            Layer::Middle => {
                if slot == EdgeSlot::FR && edge.facelets[0].face == Face::F {
                    Ok(MiddleCase::Solved)
                } else {
                    let left_face = match slot {
                        EdgeSlot::FR => Face::F,
                        EdgeSlot::FL => Face::L,
                        EdgeSlot::BL => Face::B,
                        _ => Face::R,
                    };
                    Ok(MiddleCase::Stuck(left_face))
                }
            }
            Layer::Top => {
                let index = top_index(&EdgeSlot::TOP, slot).unwrap_or(0);
                if edge.facelets[0].face == Face::U {
                    Ok(MiddleCase::TopRight(index))
                } else {
                    Ok(MiddleCase::TopFront(index))
                }
            }
            Layer::Bottom => Err(Dead::Internal(format!(
                "middle edge found in the finished layer at {slot:?}"
            ))),
        }
    }
}

/// Which last-layer edges show the last-layer color on U, in
/// `EdgeSlot::TOP` order.
fn top_edge_flags(state: &CubeState, color: Color) -> [bool; 4] {
    EdgeSlot::TOP.map(|slot| state.sticker(slot.facelets()[0]) == color)
}

/// Shape the last-layer color makes among the top edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastCrossCase {
    Cross,
    Dot,
    /// A straight line; `rotations` quarter `y` turns make it horizontal.
    Line { rotations: usize },
    /// Two adjacent edges; `rotations` quarter `y` turns bring them to
    /// back and left.
    Ell { rotations: usize },
}

impl LastCrossCase {
    pub fn classify(state: &CubeState, palette: &Palette) -> Result<Self, Dead> {
        let flags = top_edge_flags(state, palette.last);
        let count = flags.iter().filter(|&&up| up).count();

        match count {
            4 => Ok(LastCrossCase::Cross),
            0 => Ok(LastCrossCase::Dot),
            2 if flags[0] == flags[2] => Ok(LastCrossCase::Line {
                rotations: usize::from(flags[0]),
            }),
            2 => {
                // the first index i with flags i and i + 1 both set
                let start = (0..4)
                    .find(|&i| flags[i] && flags[(i + 1) % 4])
                    .unwrap_or(0);
                Ok(LastCrossCase::Ell {
                    rotations: quarter_turns_between(start, 1),
                })
            }
            _ => Err(Dead::Unsolvable(format!(
                "{count} last-layer edges are oriented, an odd number"
            ))),
        }
    }
}

/// Twist of each top corner's last-layer sticker, in `CornerSlot::TOP`
/// order. 0 means it points up.
fn top_corner_twists(state: &CubeState, color: Color) -> Result<[usize; 4], Dead> {
    let mut twists = [0; 4];
    for (twist, slot) in twists.iter_mut().zip(CornerSlot::TOP) {
        *twist = slot
            .facelets()
            .iter()
            .position(|&facelet| state.sticker(facelet) == color)
            .ok_or_else(|| {
                Dead::Unsolvable(format!("top corner at {slot:?} lacks the last-layer color"))
            })?;
    }
    Ok(twists)
}

/// Orientation of the last-layer corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastFaceCase {
    Done,
    /// Run Sune after `rotations` quarter `y` turns.
    Sune { rotations: usize },
}

impl LastFaceCase {
    pub fn classify(state: &CubeState, palette: &Palette) -> Result<Self, Dead> {
        let twists = top_corner_twists(state, palette.last)?;
        let total: usize = twists.iter().sum();
        if total % 3 != 0 {
            return Err(Dead::Unsolvable(format!(
                "last-layer corner twists {twists:?} do not sum to a whole turn"
            )));
        }

        // the twist Sune wants at UFL for each number of oriented corners
        let wanted = match twists.iter().filter(|&&t| t == 0).count() {
            4 => return Ok(LastFaceCase::Done),
            0 => 2,
            1 => 0,
            2 => 1,
            _ => {
                return Err(Dead::Unsolvable(
                    "a single last-layer corner is twisted".to_string(),
                ))
            }
        };

        let index = twists
            .iter()
            .position(|&t| t == wanted)
            .ok_or_else(|| Dead::Internal(format!("no corner with twist {wanted} in {twists:?}")))?;
        Ok(LastFaceCase::Sune {
            rotations: quarter_turns_between(index, 1),
        })
    }
}

/// Which way a three-cycle carries its pieces around the top layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Each piece belongs one slot further along in `y` turning order.
    Forward,
    Backward,
}

/// Arrangement of pieces within the last layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleCase {
    Placed,
    /// The arrangement is an odd permutation; a U turn is needed first.
    Odd,
    /// Exactly one piece is home; `rotations` quarter `y` turns bring it to
    /// the slot the cycle algorithms keep, and one cycle in `direction`
    /// finishes the layer.
    OneHome {
        rotations: usize,
        direction: Direction,
    },
    /// No piece is home; any application of a cycle leaves one home.
    NoneHome,
}

impl CycleCase {
    fn from_homes(homes: [usize; 4], keeper: usize) -> Self {
        let home_count = (0..4).filter(|&i| homes[i] == i).count();
        if home_count == 4 {
            return CycleCase::Placed;
        }
        if !is_even(homes) {
            return CycleCase::Odd;
        }
        let Some(home) = (0..4).find(|&i| homes[i] == i) else {
            return CycleCase::NoneHome;
        };

        // the slot after `from` in turning order, stepping over the home piece
        let next = |from: usize| {
            let slot = (from + 1) % 4;
            if slot == home {
                (slot + 1) % 4
            } else {
                slot
            }
        };
        let first = next(home);
        let direction = if homes[first] == next(first) {
            Direction::Forward
        } else {
            Direction::Backward
        };
        CycleCase::OneHome {
            rotations: quarter_turns_between(home, keeper),
            direction,
        }
    }

    /// Cycle applications still needed, or `None` for an odd arrangement.
    pub fn applications(&self) -> Option<usize> {
        match self {
            CycleCase::Placed => Some(0),
            CycleCase::OneHome { .. } => Some(1),
            CycleCase::NoneHome => Some(2),
            CycleCase::Odd => None,
        }
    }

    /// Last-layer corners; the cycle algorithm keeps UFL.
    pub fn classify_corners(state: &CubeState) -> Result<Self, Dead> {
        let mut homes = [0; 4];
        for (home, slot) in homes.iter_mut().zip(CornerSlot::TOP) {
            let mut colors = slot.facelets().map(|facelet| state.sticker(facelet));
            colors.sort();
            *home = CornerSlot::TOP
                .iter()
                .position(|target| {
                    let mut centers = target.facelets().map(|facelet| state.center(facelet.face));
                    centers.sort();
                    centers == colors
                })
                .ok_or_else(|| {
                    Dead::Unsolvable(format!("corner at {slot:?} does not belong in the top layer"))
                })?;
        }
        Ok(Self::from_homes(homes, 1))
    }

    /// Last-layer edges; the cycle algorithm keeps UB.
    pub fn classify_edges(state: &CubeState) -> Result<Self, Dead> {
        let mut homes = [0; 4];
        for (home, slot) in homes.iter_mut().zip(EdgeSlot::TOP) {
            let side = state.sticker(slot.facelets()[1]);
            *home = EdgeSlot::TOP
                .iter()
                .position(|target| state.center(target.facelets()[1].face) == side)
                .ok_or_else(|| {
                    Dead::Unsolvable(format!("edge at {slot:?} does not belong in the top layer"))
                })?;
        }
        Ok(Self::from_homes(homes, 2))
    }
}

/// Parity of a permutation of four, given as image indices.
fn is_even(permutation: [usize; 4]) -> bool {
    let mut seen = [false; 4];
    let mut cycles = 0;
    for start in 0..4 {
        if seen[start] {
            continue;
        }
        cycles += 1;
        let mut i = start;
        while !seen[i] {
            seen[i] = true;
            i = permutation[i];
        }
    }
    (4 - cycles) % 2 == 0
}

/// Locates the first-layer edge that belongs above the current front.
pub fn locate_cross_edge(
    state: &CubeState,
    palette: &Palette,
) -> Result<EdgeLocation, LocateError> {
    find_edge(state, palette.first, state.center(Face::F))
}

/// Locates the first-layer corner between the current front and right.
pub fn locate_first_corner(
    state: &CubeState,
    palette: &Palette,
) -> Result<CornerLocation, LocateError> {
    find_corner(
        state,
        palette.first,
        state.center(Face::F),
        state.center(Face::R),
    )
}

/// Locates the middle edge between the current front and right.
pub fn locate_middle_edge(state: &CubeState) -> Result<EdgeLocation, LocateError> {
    find_edge(state, state.center(Face::F), state.center(Face::R))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::{parse_algorithm, Move};

    fn scrambled(algorithm: &str) -> CubeState {
        let mut cube = CubeState::solved();
        cube.apply_all(&parse_algorithm(algorithm).unwrap());
        cube
    }

    #[test]
    fn test_every_algorithm_parses() {
        let tables = algorithms::CROSS_EJECT
            .iter()
            .chain(&algorithms::CORNER_EJECT);
        for algorithm in algorithms::ALL.iter().chain(tables) {
            assert!(
                parse_algorithm(algorithm).is_ok(),
                "algorithm {algorithm:?} does not parse"
            );
        }
    }

    #[test]
    fn test_goals_hold_on_solved_cube() {
        let cube = CubeState::solved();
        let palette = Palette::of(&cube);
        assert!(cross_complete(&cube, &palette));
        assert!(first_corners_complete(&cube, &palette));
        assert!(second_layer_complete(&cube, &palette));
        assert!(last_cross_complete(&cube, &palette));
        assert!(last_face_complete(&cube, &palette));
    }

    fn undo(algorithm: &str) -> Vec<Move> {
        parse_algorithm(algorithm)
            .unwrap()
            .iter()
            .rev()
            .map(|mv| mv.inverse())
            .collect()
    }

    #[test]
    fn test_last_layer_turn_keeps_first_two_layers() {
        // the first layer is on U, so D only disturbs the last layer
        let cube = scrambled("D");
        let palette = Palette::of(&cube);
        assert!(cross_complete(&cube, &palette));
        assert!(first_corners_complete(&cube, &palette));
        assert!(second_layer_complete(&cube, &palette));
        assert!(last_face_complete(&cube, &palette));

        let cube = scrambled("U");
        assert!(!cross_complete(&cube, &palette));
        assert!(!first_corners_complete(&cube, &palette));
        assert!(last_face_complete(&cube, &palette));
    }

    #[test]
    fn test_cross_cases() {
        let cube = CubeState::solved();
        let palette = Palette::of(&cube);
        let edge = locate_cross_edge(&cube, &palette).unwrap();
        assert_eq!(CrossCase::classify(&edge), CrossCase::Solved);

        // F carries UF to FR
        let cube = scrambled("F");
        let edge = locate_cross_edge(&cube, &palette).unwrap();
        assert_eq!(CrossCase::classify(&edge), CrossCase::Middle(0));

        // F2 carries UF to DF with white facing down
        let cube = scrambled("F2");
        let edge = locate_cross_edge(&cube, &palette).unwrap();
        assert_eq!(CrossCase::classify(&edge), CrossCase::BottomDown(0));

        let cube = scrambled("U");
        let edge = locate_cross_edge(&cube, &palette).unwrap();
        assert_eq!(CrossCase::classify(&edge), CrossCase::Top(Face::L));
    }

    #[test]
    fn test_corner_cases() {
        let cube = CubeState::solved();
        let palette = Palette::of(&cube);
        let corner = locate_first_corner(&cube, &palette).unwrap();
        assert_eq!(CornerCase::classify(&corner), CornerCase::Solved);

        // R' carries UFR to DFR with white facing front
        let cube = scrambled("R'");
        let corner = locate_first_corner(&cube, &palette).unwrap();
        assert_eq!(
            CornerCase::classify(&corner),
            CornerCase::Bottom { index: 0, twist: 1 }
        );

        let cube = scrambled("U2");
        let corner = locate_first_corner(&cube, &palette).unwrap();
        assert_eq!(CornerCase::classify(&corner), CornerCase::Top(2));
    }

    #[test]
    fn test_corner_insert_matches_its_twist() {
        let palette = Palette::of(&CubeState::solved());
        for (twist, insert) in algorithms::CORNER_INSERT.into_iter().enumerate() {
            let mut cube = CubeState::solved();
            cube.apply_all(&undo(insert));
            let corner = locate_first_corner(&cube, &palette).unwrap();
            assert_eq!(
                CornerCase::classify(&corner),
                CornerCase::Bottom { index: 0, twist },
                "undoing {insert}"
            );
        }
    }

    #[test]
    fn test_corner_insert_keeps_the_first_layer() {
        // a scrambled bottom layer under a finished top, corner waiting at DFR
        let palette = Palette::of(&CubeState::solved());
        for insert in algorithms::CORNER_INSERT {
            let mut cube = scrambled("D' L' D L D2");
            cube.apply_all(&undo(insert));
            assert!(cross_complete(&cube, &palette), "{insert}");

            cube.apply_all(&parse_algorithm(insert).unwrap());
            assert!(cross_complete(&cube, &palette), "{insert} broke the cross");
            let corner = locate_first_corner(&cube, &palette).unwrap();
            assert_eq!(CornerCase::classify(&corner), CornerCase::Solved, "{insert}");
        }
    }

    #[test]
    fn test_last_cross_shapes() {
        let palette = Palette::of(&CubeState::solved());

        let mut cube = CubeState::solved();
        cube.rotate("x2".parse().unwrap());
        assert_eq!(
            LastCrossCase::classify(&cube, &palette),
            Ok(LastCrossCase::Cross)
        );

        // undoing the algorithm from a solved cross leaves a horizontal line
        cube.apply_all(&undo(algorithms::YELLOW_CROSS));
        assert_eq!(
            LastCrossCase::classify(&cube, &palette),
            Ok(LastCrossCase::Line { rotations: 0 })
        );

        cube.rotate("y".parse().unwrap());
        assert_eq!(
            LastCrossCase::classify(&cube, &palette),
            Ok(LastCrossCase::Line { rotations: 1 })
        );
    }

    #[test]
    fn test_permutation_parity() {
        assert!(is_even([0, 1, 2, 3]));
        assert!(!is_even([1, 0, 2, 3]));
        assert!(is_even([1, 2, 0, 3]));
        assert!(is_even([1, 0, 3, 2]));
        assert!(!is_even([1, 2, 3, 0]));
    }

    #[test]
    fn test_cycle_cases() {
        assert_eq!(CycleCase::from_homes([0, 1, 2, 3], 1), CycleCase::Placed);
        assert_eq!(CycleCase::from_homes([1, 2, 3, 0], 1), CycleCase::Odd);
        assert_eq!(
            CycleCase::from_homes([3, 1, 0, 2], 1),
            CycleCase::OneHome {
                rotations: 0,
                direction: Direction::Backward
            }
        );
        assert_eq!(
            CycleCase::from_homes([0, 2, 3, 1], 2),
            CycleCase::OneHome {
                rotations: 2,
                direction: Direction::Forward
            }
        );
        assert_eq!(CycleCase::from_homes([1, 0, 3, 2], 1), CycleCase::NoneHome);
        assert_eq!(CycleCase::NoneHome.applications(), Some(2));
        assert_eq!(CycleCase::Odd.applications(), None);
    }

    #[test]
    fn test_cycle_direction_picks_the_undoing_algorithm() {
        let forward = CycleCase::OneHome {
            rotations: 0,
            direction: Direction::Forward,
        };

        let mut cube = CubeState::solved();
        cube.apply_all(&parse_algorithm(algorithms::CORNER_CYCLE_INVERSE).unwrap());
        assert_eq!(CycleCase::classify_corners(&cube), Ok(forward));

        let mut cube = CubeState::solved();
        cube.apply_all(&parse_algorithm(algorithms::EDGE_CYCLE).unwrap());
        assert_eq!(CycleCase::classify_edges(&cube), Ok(forward));

        cube.rotate("y".parse().unwrap());
        assert_eq!(
            CycleCase::classify_edges(&cube),
            Ok(CycleCase::OneHome {
                rotations: 3,
                direction: Direction::Forward
            })
        );
    }

    #[test]
    fn test_foreign_top_corner_is_unsolvable() {
        // a first-layer corner sticker swapped onto a last-layer edge
        let mut grid = CubeState::solved().to_grid();
        grid.get_mut(&Face::D).unwrap()[0][1] = 'G';
        grid.get_mut(&Face::F).unwrap()[2][2] = 'Y';
        let mut cube = CubeState::from_grid(&grid).unwrap();
        cube.rotate("x2".parse().unwrap());
        assert!(matches!(
            CycleCase::classify_corners(&cube),
            Err(Dead::Unsolvable(_))
        ));
    }

    #[test]
    fn test_last_layer_turn_is_an_odd_corner_arrangement() {
        let mut cube = scrambled("D");
        cube.rotate("x2".parse().unwrap());
        assert_eq!(CycleCase::classify_corners(&cube), Ok(CycleCase::Odd));
    }
}
