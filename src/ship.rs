//! Tetromino ship footprints and placement on the grid.

use core::fmt;

use crate::common::{BoardError, Coord, ShapeKind};
use crate::config::SHIP_CELLS;
use crate::geometry::Extents;
use crate::grid::CoordSet;

type Footprint = [(u8, u8); SHIP_CELLS];

/// Unrotated footprint of each shape as `(x, y)` offsets.
///
/// ```text
/// I ####   O ##   T ###   S .##   Z ##.   J #..   L ..#
///            ##     .#.     ##.     .##     ###     ###
/// ```
const fn base(shape: ShapeKind) -> Footprint {
    match shape {
        ShapeKind::I => [(0, 0), (1, 0), (2, 0), (3, 0)],
        ShapeKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        ShapeKind::T => [(0, 0), (1, 0), (2, 0), (1, 1)],
        ShapeKind::S => [(1, 0), (2, 0), (0, 1), (1, 1)],
        ShapeKind::Z => [(0, 0), (1, 0), (1, 1), (2, 1)],
        ShapeKind::J => [(0, 0), (0, 1), (1, 1), (2, 1)],
        ShapeKind::L => [(2, 0), (0, 1), (1, 1), (2, 1)],
    }
}

/// Footprint of `shape` after `quarter_turns` clockwise rotations, shifted to
/// the origin and sorted.
pub fn footprint(shape: ShapeKind, quarter_turns: u8) -> Footprint {
    let mut cells = base(shape).map(|(x, y)| (x as i8, y as i8));
    for _ in 0..quarter_turns % 4 {
        cells = cells.map(|(x, y)| (-y, x));
    }
    let min_x = cells.iter().map(|c| c.0).min().unwrap_or(0);
    let min_y = cells.iter().map(|c| c.1).min().unwrap_or(0);
    let mut out = cells.map(|(x, y)| ((x - min_x) as u8, (y - min_y) as u8));
    out.sort_unstable();
    out
}

/// Returns `true` when `cells` are exactly one `shape` tetromino in some
/// rotation.
pub fn matches_shape(shape: ShapeKind, cells: &[Coord]) -> bool {
    if cells.len() != SHIP_CELLS {
        return false;
    }
    let Some(ext) = Extents::of(cells) else {
        return false;
    };
    let mut normalized = [(0u8, 0u8); SHIP_CELLS];
    for (slot, c) in normalized.iter_mut().zip(cells) {
        *slot = (c.x - ext.min_x, c.y - ext.min_y);
    }
    normalized.sort_unstable();
    (0..4).any(|turns| footprint(shape, turns) == normalized)
}

/// A ship placed on the grid.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    shape: ShapeKind,
    quarter_turns: u8,
    origin: Coord,
    mask: CoordSet,
}

impl Tetromino {
    /// Place `shape` rotated by `quarter_turns` with its bounding box at
    /// `origin`.
    pub fn new(shape: ShapeKind, quarter_turns: u8, origin: Coord) -> Result<Self, BoardError> {
        let mut mask = CoordSet::new();
        for (dx, dy) in footprint(shape, quarter_turns) {
            let cell = origin
                .shifted(dx as i8, dy as i8)
                .ok_or(BoardError::OutOfBounds)?;
            mask.try_insert(cell)?;
        }
        Ok(Tetromino {
            shape,
            quarter_turns: quarter_turns % 4,
            origin,
            mask,
        })
    }

    /// Ship built from explicit cells, which must form `shape`.
    pub fn from_cells(shape: ShapeKind, cells: &[Coord]) -> Result<Self, BoardError> {
        if !matches_shape(shape, cells) {
            return Err(BoardError::InvalidShape(shape));
        }
        let ext = Extents::of(cells).ok_or(BoardError::InvalidShape(shape))?;
        let origin = Coord::new(ext.min_x, ext.min_y);
        let mask: CoordSet = cells.iter().copied().collect();
        let quarter_turns = (0..4)
            .find(|&t| {
                Tetromino::new(shape, t, origin)
                    .map(|s| s.mask == mask)
                    .unwrap_or(false)
            })
            .ok_or(BoardError::InvalidShape(shape))?;
        Ok(Tetromino {
            shape,
            quarter_turns,
            origin,
            mask,
        })
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn quarter_turns(&self) -> u8 {
        self.quarter_turns
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    /// Cells covered by the ship.
    pub fn mask(&self) -> CoordSet {
        self.mask
    }
}

impl fmt::Debug for Tetromino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tetromino {{ shape: {}, origin: {}, turns: {}, cells: {:?} }}",
            self.shape, self.origin, self.quarter_turns, self.mask,
        )
    }
}
