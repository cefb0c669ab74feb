//! Shape deduction: from the hits landed on one ship, work out where its
//! remaining cells must be.
//!
//! Every rule is pure. It looks at the shape and the confirmed hits and
//! returns a [`Proposal`] describing how the target candidates should change.
//! The caller applies it against its coordinate pools, which filters out
//! anything already fired.
//!
//! | shape | hits | rule |
//! |-------|------|------|
//! | O, I  | 1 | surround the hit |
//! | O     | 2 | the pair's two sideways cells, or the two missing corners of a diagonal pair |
//! | O     | 3 | the corner whose x and y each occur once |
//! | I     | 2, 3 | extend along the line while it stays four long |
//! | T     | 3 | beside the middle of a line, or around the pivot of a corner |
//! | L, J  | 3 | the foot at the matching end of a line, or the 2×2 rotation table |
//! | S, Z  | 3 | the 2×2 rotation table |
//! | any   | otherwise | surround every hit |

use alloc::vec::Vec;

use crate::common::{Coord, ShapeKind};
use crate::config::SHIP_CELLS;
use crate::geometry::{self, match_rotation, shared_axis, value_with_count, Axis, Edge, Extents, Rotation};

/// How the target candidates should change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Proposal {
    /// Add the 4-neighborhoods of these cells to the current candidates.
    Surround(Vec<Coord>),
    /// Drop the current candidates and use exactly these cells.
    Replace(Vec<Coord>),
}

/// Shapes whose three-cell bends are told apart by rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bent {
    L,
    J,
    S,
    Z,
}

impl Bent {
    pub fn of(shape: ShapeKind) -> Option<Bent> {
        match shape {
            ShapeKind::L => Some(Bent::L),
            ShapeKind::J => Some(Bent::J),
            ShapeKind::S => Some(Bent::S),
            ShapeKind::Z => Some(Bent::Z),
            _ => None,
        }
    }
}

/// Where the fourth cell sits relative to the bounding box of a bent
/// three-cell pattern: `(x edge, dx, y edge, dy)`.
pub const fn missing_cell(family: Bent, rotation: Rotation) -> (Edge, i8, Edge, i8) {
    use Edge::{Max, Min};
    match (family, rotation) {
        (Bent::L, Rotation::R0) => (Max, 1, Min, 0),
        (Bent::L, Rotation::R1) => (Max, 0, Max, 1),
        (Bent::L, Rotation::R2) => (Min, -1, Max, 0),
        (Bent::L, Rotation::R3) => (Min, 0, Min, -1),
        (Bent::J, Rotation::R0) => (Min, 0, Max, 1),
        (Bent::J, Rotation::R1) => (Min, -1, Min, 0),
        (Bent::J, Rotation::R2) => (Max, 0, Min, -1),
        (Bent::J, Rotation::R3) => (Max, 1, Max, 0),
        (Bent::S, Rotation::R0) => (Min, -1, Max, 0),
        (Bent::S, Rotation::R1) => (Min, 0, Min, -1),
        (Bent::S, Rotation::R2) => (Max, 1, Min, 0),
        (Bent::S, Rotation::R3) => (Max, 0, Max, 1),
        (Bent::Z, Rotation::R0) => (Max, 0, Min, -1),
        (Bent::Z, Rotation::R1) => (Max, 1, Max, 0),
        (Bent::Z, Rotation::R2) => (Min, 0, Max, 1),
        (Bent::Z, Rotation::R3) => (Min, -1, Min, 0),
    }
}

/// Fourth cell of a bent `family` ship given three hits in a 2×2 box.
/// `None` when the hits match no rotation.
pub fn complete_bent(family: Bent, hits: &[Coord]) -> Option<Coord> {
    let rotation = match_rotation(hits)?;
    let ext = Extents::of(hits)?;
    let (x_edge, dx, y_edge, dy) = missing_cell(family, rotation);
    ext.corner(x_edge, dx, y_edge, dy)
}

/// Propose the next candidates for the ship of `shape` given its `hits`.
///
/// `last_touched` is used only when no hit has been recorded for the shape.
pub fn deduce(shape: ShapeKind, hits: &[Coord], last_touched: Option<Coord>) -> Proposal {
    let specific = match (shape, hits.len()) {
        (ShapeKind::O | ShapeKind::I, 1) => Some(Proposal::Surround(hits.to_vec())),
        (ShapeKind::O, 2) => Some(square_pair(hits[0], hits[1])),
        (ShapeKind::O, 3) => square_corner(hits).map(|c| Proposal::Replace(alloc::vec![c])),
        (ShapeKind::I, 2 | 3) => extend_line(hits),
        (ShapeKind::T, 3) => tee(hits),
        (ShapeKind::L | ShapeKind::J, n) if n > 2 => hook(shape, hits),
        (ShapeKind::S | ShapeKind::Z, 3) => Bent::of(shape)
            .and_then(|family| complete_bent(family, hits))
            .map(|c| Proposal::Replace(alloc::vec![c])),
        _ => None,
    };
    specific.unwrap_or_else(|| surround_all(hits, last_touched))
}

fn surround_all(hits: &[Coord], last_touched: Option<Coord>) -> Proposal {
    if hits.is_empty() {
        Proposal::Surround(last_touched.into_iter().collect())
    } else {
        Proposal::Surround(hits.to_vec())
    }
}

/// Two cells of a 2×2 square.
fn square_pair(a: Coord, b: Coord) -> Proposal {
    let cells = if a.x == b.x {
        geometry::horizontal_neighbors(a).collect()
    } else if a.y == b.y {
        geometry::vertical_neighbors(a).collect()
    } else {
        [Coord::new(a.x, b.y), Coord::new(b.x, a.y)].to_vec()
    };
    Proposal::Replace(cells)
}

/// Three cells of a 2×2 square: the missing corner takes the x and the y
/// that occur only once.
fn square_corner(hits: &[Coord]) -> Option<Coord> {
    let x = value_with_count(hits.iter().map(|c| c.x), 1)?;
    let y = value_with_count(hits.iter().map(|c| c.y), 1)?;
    Some(Coord::new(x, y))
}

/// Cells on the hits' line, one past each end or in a gap, that keep the
/// line within a ship's length.
fn extend_line(hits: &[Coord]) -> Option<Proposal> {
    let axis = shared_axis(hits)?;
    let ext = Extents::of(hits)?;
    let (lo, hi) = match axis {
        Axis::Column(_) => (ext.min_y as i16, ext.max_y as i16),
        Axis::Row(_) => (ext.min_x as i16, ext.max_x as i16),
    };
    let reach = SHIP_CELLS as i16 - 1;
    let cells = (lo - 1..=hi + 1)
        .filter(|&v| hi.max(v) - lo.min(v) <= reach)
        .filter_map(|v| match axis {
            Axis::Column(x) => Coord::checked(x as i16, v),
            Axis::Row(y) => Coord::checked(v, y as i16),
        })
        .filter(|c| !hits.contains(c))
        .collect();
    Some(Proposal::Replace(cells))
}

/// Three cells of a T: a straight bar means the stem hangs off its middle,
/// a corner means the cell shared by both arms is the pivot.
fn tee(hits: &[Coord]) -> Option<Proposal> {
    let cells = match shared_axis(hits) {
        Some(Axis::Column(x)) => {
            let mut ys: Vec<u8> = hits.iter().map(|c| c.y).collect();
            ys.sort_unstable();
            geometry::horizontal_neighbors(Coord::new(x, ys[1])).collect()
        }
        Some(Axis::Row(y)) => {
            let mut xs: Vec<u8> = hits.iter().map(|c| c.x).collect();
            xs.sort_unstable();
            geometry::vertical_neighbors(Coord::new(xs[1], y)).collect()
        }
        None => {
            let x = value_with_count(hits.iter().map(|c| c.x), 2)?;
            let y = value_with_count(hits.iter().map(|c| c.y), 2)?;
            geometry::neighbors(Coord::new(x, y)).collect()
        }
    };
    Some(Proposal::Replace(cells))
}

/// Three or more cells of an L or J. On a straight bar the foot is at one end,
/// on opposite sides for L and J.
fn hook(shape: ShapeKind, hits: &[Coord]) -> Option<Proposal> {
    use Edge::{Max, Min};
    let ext = Extents::of(hits)?;
    let feet = match (shape, shared_axis(hits)) {
        (ShapeKind::L, Some(Axis::Column(_))) => [(Min, -1, Min, 0), (Max, 1, Max, 0)],
        (ShapeKind::J, Some(Axis::Column(_))) => [(Min, -1, Max, 0), (Max, 1, Min, 0)],
        (ShapeKind::L, Some(Axis::Row(_))) => [(Max, 0, Min, -1), (Min, 0, Max, 1)],
        (ShapeKind::J, Some(Axis::Row(_))) => [(Min, 0, Min, -1), (Max, 0, Max, 1)],
        _ => {
            let c = complete_bent(Bent::of(shape)?, hits)?;
            return Some(Proposal::Replace(alloc::vec![c]));
        }
    };
    let cells = feet
        .into_iter()
        .filter_map(|(xe, dx, ye, dy)| ext.corner(xe, dx, ye, dy))
        .collect();
    Some(Proposal::Replace(cells))
}
