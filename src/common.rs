//! Common types for the targeting engine: coordinates, shot outcomes and errors.

use core::fmt;

use crate::config::GRID_SIZE;
use crate::geometry;
use crate::grid::GridError;

/// A cell on the firing grid, `x` is the column and `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Build a coordinate from signed components, `None` when off the grid.
    pub fn checked(x: i16, y: i16) -> Option<Self> {
        let size = GRID_SIZE as i16;
        if (0..size).contains(&x) && (0..size).contains(&y) {
            Some(Self::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// The coordinate `dx` columns and `dy` rows away, if it is on the grid.
    pub fn shifted(self, dx: i8, dy: i8) -> Option<Self> {
        Self::checked(self.x as i16 + dx as i16, self.y as i16 + dy as i16)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Tetromino class of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// Dense index into per-shape tables, follows `config::FLEET`.
    pub const fn index(self) -> usize {
        match self {
            ShapeKind::I => 0,
            ShapeKind::O => 1,
            ShapeKind::T => 2,
            ShapeKind::S => 3,
            ShapeKind::Z => 4,
            ShapeKind::J => 5,
            ShapeKind::L => 6,
        }
    }

    /// Letter used for this shape in map layouts.
    pub const fn symbol(self) -> char {
        match self {
            ShapeKind::I => 'I',
            ShapeKind::O => 'O',
            ShapeKind::T => 'T',
            ShapeKind::S => 'S',
            ShapeKind::Z => 'Z',
            ShapeKind::J => 'J',
            ShapeKind::L => 'L',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'I' => Some(ShapeKind::I),
            'O' => Some(ShapeKind::O),
            'T' => Some(ShapeKind::T),
            'S' => Some(ShapeKind::S),
            'Z' => Some(ShapeKind::Z),
            'J' => Some(ShapeKind::J),
            'L' => Some(ShapeKind::L),
            _ => None,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Bonus granted when a bonus cell is hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum BonusKind {
    /// Shoot again without ending the turn.
    Replay,
    /// Strike the chosen cell and its 4-neighborhood at once.
    CrossFire,
    /// Relocate a ship. Never used by the engine.
    Move,
}

impl BonusKind {
    pub const fn symbol(self) -> char {
        match self {
            BonusKind::Replay => '+',
            BonusKind::CrossFire => '*',
            BonusKind::Move => '=',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(BonusKind::Replay),
            '*' => Some(BonusKind::CrossFire),
            '=' => Some(BonusKind::Move),
            _ => None,
        }
    }
}

/// What happened when a cell was fired upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum OutcomeKind {
    Missed,
    Touched,
    Sunk,
    /// The last ship sank.
    Victory,
    BonusGranted,
}

/// Resolution of a single shot, produced by the board authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotOutcome {
    pub coord: Coord,
    /// Shape of the ship that was hit, `None` on water and bonus cells.
    pub shape: Option<ShapeKind>,
    pub kind: OutcomeKind,
    pub bonus: Option<BonusKind>,
}

impl ShotOutcome {
    pub const fn missed(coord: Coord) -> Self {
        Self { coord, shape: None, kind: OutcomeKind::Missed, bonus: None }
    }

    pub const fn touched(coord: Coord, shape: ShapeKind) -> Self {
        Self { coord, shape: Some(shape), kind: OutcomeKind::Touched, bonus: None }
    }

    pub const fn sunk(coord: Coord, shape: ShapeKind) -> Self {
        Self { coord, shape: Some(shape), kind: OutcomeKind::Sunk, bonus: None }
    }

    pub const fn victory(coord: Coord, shape: ShapeKind) -> Self {
        Self { coord, shape: Some(shape), kind: OutcomeKind::Victory, bonus: None }
    }

    pub const fn bonus(coord: Coord, bonus: BonusKind) -> Self {
        Self { coord, shape: None, kind: OutcomeKind::BonusGranted, bonus: Some(bonus) }
    }

    /// Returns `true` when this shot finished off a ship.
    pub fn is_sink(&self) -> bool {
        matches!(self.kind, OutcomeKind::Sunk | OutcomeKind::Victory)
    }
}

/// A move chosen by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub coord: Coord,
    /// Bonus spent on this shot, if any.
    pub bonus: Option<BonusKind>,
}

impl Move {
    pub const fn plain(coord: Coord) -> Self {
        Self { coord, bonus: None }
    }

    /// A replayed shot leaves the turn with the engine.
    pub fn ends_turn(&self) -> bool {
        self.bonus != Some(BonusKind::Replay)
    }
}

/// Read access to which cells have been shot at.
pub trait ShotLedger {
    fn already_fired(&self, coord: Coord) -> bool;

    /// Number of in-grid 4-neighbors of `coord` not fired upon yet.
    fn free_neighbor_count(&self, coord: Coord) -> usize {
        geometry::neighbors(coord)
            .filter(|&c| !self.already_fired(c))
            .count()
    }
}

/// Errors returned by the reference board authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying coordinate set error.
    Grid(GridError),
    /// Coordinate lies outside the grid.
    OutOfBounds,
    /// The cell was already fired upon.
    AlreadyFired,
    /// A ship of this shape is already on the board.
    ShapeAlreadyPlaced(ShapeKind),
    /// Ship placement overlaps another ship or a bonus cell.
    ShipOverlaps,
    /// The cells given for a shape do not form that tetromino.
    InvalidShape(ShapeKind),
    /// Layout symbol not recognised.
    UnknownSymbol(char),
    /// Layout does not have `GRID_SIZE` rows of `GRID_SIZE` symbols.
    BadDimensions,
    /// Random placement gave up.
    UnableToPlaceShip,
    /// No map with this index in the catalogue.
    UnknownMap(usize),
}

impl From<GridError> for BoardError {
    fn from(err: GridError) -> Self {
        BoardError::Grid(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Grid(e) => write!(f, "grid error: {}", e),
            BoardError::OutOfBounds => write!(f, "coordinate is outside the grid"),
            BoardError::AlreadyFired => write!(f, "cell was already fired upon"),
            BoardError::ShapeAlreadyPlaced(s) => write!(f, "a {} ship is already placed", s),
            BoardError::ShipOverlaps => write!(f, "ship placement overlaps an occupied cell"),
            BoardError::InvalidShape(s) => write!(f, "cells do not form a {} tetromino", s),
            BoardError::UnknownSymbol(c) => write!(f, "unknown layout symbol {:?}", c),
            BoardError::BadDimensions => write!(f, "layout must be {0}x{0}", GRID_SIZE),
            BoardError::UnableToPlaceShip => write!(f, "unable to place ship"),
            BoardError::UnknownMap(i) => write!(f, "no map with index {}", i),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned by the targeting engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A move was requested before a difficulty tier was set.
    NotInitialized,
    /// Tier III and IV need the opponent's true board.
    MissingTrueBoard,
    /// Every coordinate set is exhausted without a victory.
    NoLegalMoves,
    /// The game already ended in victory.
    GameOver,
    /// An outcome for this coordinate was applied before.
    OutcomeAlreadyApplied(Coord),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NotInitialized => write!(f, "engine not initialized: no difficulty set"),
            EngineError::MissingTrueBoard => {
                write!(f, "difficulty requires the opponent's true board")
            }
            EngineError::NoLegalMoves => write!(f, "no legal moves left"),
            EngineError::GameOver => write!(f, "game is over"),
            EngineError::OutcomeAlreadyApplied(c) => {
                write!(f, "outcome for {} was already applied", c)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
