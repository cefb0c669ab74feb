//! Pure helpers over small coordinate collections: neighborhoods, bounding
//! extents, axis alignment and 2×2 rotation patterns.

use crate::common::Coord;

const ORTHOGONAL: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// In-grid 4-neighbors of `c`, north, south, west, east.
pub fn neighbors(c: Coord) -> impl Iterator<Item = Coord> {
    ORTHOGONAL
        .into_iter()
        .filter_map(move |(dx, dy)| c.shifted(dx, dy))
}

/// West and east neighbors of `c`.
pub fn horizontal_neighbors(c: Coord) -> impl Iterator<Item = Coord> {
    [c.shifted(-1, 0), c.shifted(1, 0)].into_iter().flatten()
}

/// North and south neighbors of `c`.
pub fn vertical_neighbors(c: Coord) -> impl Iterator<Item = Coord> {
    [c.shifted(0, -1), c.shifted(0, 1)].into_iter().flatten()
}

/// The 3×3 block centred on `c`, clipped to the grid, `c` included.
pub fn block(c: Coord) -> impl Iterator<Item = Coord> {
    (-1i8..=1).flat_map(move |dy| (-1i8..=1).filter_map(move |dx| c.shifted(dx, dy)))
}

/// Which side of a bounding box a coordinate component is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Min,
    Max,
}

/// Bounding box of a set of coordinates, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extents {
    pub min_x: u8,
    pub max_x: u8,
    pub min_y: u8,
    pub max_y: u8,
}

impl Extents {
    /// `None` for an empty slice.
    pub fn of(cells: &[Coord]) -> Option<Self> {
        let first = cells.first()?;
        let init = Extents {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        Some(cells.iter().fold(init, |e, c| Extents {
            min_x: e.min_x.min(c.x),
            max_x: e.max_x.max(c.x),
            min_y: e.min_y.min(c.y),
            max_y: e.max_y.max(c.y),
        }))
    }

    pub fn width(&self) -> u8 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u8 {
        self.max_y - self.min_y + 1
    }

    pub fn x(&self, edge: Edge) -> u8 {
        match edge {
            Edge::Min => self.min_x,
            Edge::Max => self.max_x,
        }
    }

    pub fn y(&self, edge: Edge) -> u8 {
        match edge {
            Edge::Min => self.min_y,
            Edge::Max => self.max_y,
        }
    }

    /// Corner picked by `(x_edge, y_edge)`, shifted by `(dx, dy)` if that
    /// stays on the grid.
    pub fn corner(&self, x_edge: Edge, dx: i8, y_edge: Edge, dy: i8) -> Option<Coord> {
        Coord::new(self.x(x_edge), self.y(y_edge)).shifted(dx, dy)
    }
}

/// Line shared by every coordinate of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// All coordinates have this `x`: a vertical line.
    Column(u8),
    /// All coordinates have this `y`: a horizontal line.
    Row(u8),
}

/// The line through all of `cells`, if there are at least two and they are
/// collinear along a grid axis.
pub fn shared_axis(cells: &[Coord]) -> Option<Axis> {
    let (first, rest) = cells.split_first()?;
    if rest.is_empty() {
        return None;
    }
    if rest.iter().all(|c| c.x == first.x) {
        Some(Axis::Column(first.x))
    } else if rest.iter().all(|c| c.y == first.y) {
        Some(Axis::Row(first.y))
    } else {
        None
    }
}

/// First value occurring exactly `count` times.
pub fn value_with_count<I>(values: I, count: usize) -> Option<u8>
where
    I: IntoIterator<Item = u8>,
    I::IntoIter: Clone,
{
    let values = values.into_iter();
    values
        .clone()
        .find(|&v| values.clone().filter(|&w| w == v).count() == count)
}

/// Orientation of three cells inside a 2×2 box, named by the empty corner.
///
/// Patterns are indexed `[row][column]` after shifting the cells to the
/// origin:
///
/// ```text
/// R0  ##   R1  ##   R2  .#   R3  #.
///     #.       .#       ##       ##
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    R0,
    R1,
    R2,
    R3,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R1, Rotation::R2, Rotation::R3];

    pub const fn pattern(self) -> [[bool; 2]; 2] {
        match self {
            Rotation::R0 => [[true, true], [true, false]],
            Rotation::R1 => [[true, true], [false, true]],
            Rotation::R2 => [[false, true], [true, true]],
            Rotation::R3 => [[true, false], [true, true]],
        }
    }
}

/// Match `cells` against the four 2×2 rotation patterns. Anything that does
/// not fit in a 2×2 box, or fills it differently, has no rotation.
pub fn match_rotation(cells: &[Coord]) -> Option<Rotation> {
    let ext = Extents::of(cells)?;
    if ext.width() > 2 || ext.height() > 2 {
        return None;
    }
    let mut matrix = [[false; 2]; 2];
    for c in cells {
        matrix[(c.y - ext.min_y) as usize][(c.x - ext.min_x) as usize] = true;
    }
    Rotation::ALL.into_iter().find(|r| r.pattern() == matrix)
}
