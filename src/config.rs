use crate::common::ShapeKind;

/// Width and height of the firing grid.
pub const GRID_SIZE: u8 = 10;
/// Every tetromino covers four cells.
pub const SHIP_CELLS: usize = 4;
pub const NUM_SHAPES: usize = 7;
/// One ship per shape, in the order the engine resolves ties.
pub const FLEET: [ShapeKind; NUM_SHAPES] = [
    ShapeKind::I,
    ShapeKind::O,
    ShapeKind::T,
    ShapeKind::S,
    ShapeKind::Z,
    ShapeKind::J,
    ShapeKind::L,
];

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = SHIP_CELLS * NUM_SHAPES;

/// Minimum unfired cells in the clipped 3×3 block around a coordinate for it
/// to count as a probable ship location.
pub const DENSE_NEIGHBORHOOD_MIN: usize = 6;
/// Fallback threshold on unfired 4-neighbors once the board is mostly explored.
pub const SPARSE_NEIGHBORHOOD_MIN: usize = 3;

/// Upper bound on shots in a game: every cell once.
pub const MAX_SHOTS: usize = GRID_SIZE as usize * GRID_SIZE as usize;
