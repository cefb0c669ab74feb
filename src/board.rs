//! Reference board authority: ship and bonus layout, shot resolution.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{
    BoardError, BonusKind, Coord, OutcomeKind, ShapeKind, ShotLedger, ShotOutcome,
};
use crate::config::{FLEET, GRID_SIZE, NUM_SHAPES};
use crate::geometry;
use crate::grid::CoordSet;
use crate::ship::Tetromino;

const G: usize = GRID_SIZE as usize;

/// Content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Water,
    Ship(ShapeKind),
    Bonus(BonusKind),
}

/// A player's board: where the ships and bonuses are and what was fired at.
#[derive(Clone)]
pub struct Board {
    cells: [[Cell; G]; G],
    ships: [Option<Tetromino>; NUM_SHAPES],
    occupied: CoordSet,
    fired: CoordSet,
}

impl Board {
    /// An empty board: all water, nothing fired.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Water; G]; G],
            ships: [None; NUM_SHAPES],
            occupied: CoordSet::new(),
            fired: CoordSet::new(),
        }
    }

    /// Parse a text layout of `GRID_SIZE` rows. `.` is water, shape letters
    /// mark ship cells and `+`, `*`, `=` are REPLAY, CROSS_FIRE and MOVE
    /// bonuses. Each letter must form one tetromino of its shape.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        if rows.len() != G {
            return Err(BoardError::BadDimensions);
        }
        let mut board = Board::new();
        let mut shape_cells = [CoordSet::new(); NUM_SHAPES];
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != G {
                return Err(BoardError::BadDimensions);
            }
            for (x, symbol) in row.chars().enumerate() {
                let coord = Coord::new(x as u8, y as u8);
                if symbol == '.' {
                    continue;
                }
                if let Some(shape) = ShapeKind::from_symbol(symbol) {
                    shape_cells[shape.index()].insert(coord);
                } else if let Some(bonus) = BonusKind::from_symbol(symbol) {
                    board.place_bonus(coord, bonus)?;
                } else {
                    return Err(BoardError::UnknownSymbol(symbol));
                }
            }
        }
        for shape in FLEET {
            let cells: Vec<Coord> = shape_cells[shape.index()].iter().collect();
            if cells.is_empty() {
                continue;
            }
            board.place(Tetromino::from_cells(shape, &cells)?)?;
        }
        Ok(board)
    }

    /// A random board holding the whole fleet plus the given bonus cells.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bonuses: &[BonusKind]) -> Result<Self, BoardError> {
        let mut board = Board::new();
        for shape in FLEET {
            let ship = board.random_placement(rng, shape)?;
            board.place(ship)?;
        }
        for &bonus in bonuses {
            let free = !board.occupied;
            let count = free.len();
            if count == 0 {
                return Err(BoardError::UnableToPlaceShip);
            }
            let coord = free
                .nth(rng.random_range(0..count))
                .ok_or(BoardError::UnableToPlaceShip)?;
            board.place_bonus(coord, bonus)?;
        }
        Ok(board)
    }

    /// Returns a random non-overlapping placement for `shape`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        shape: ShapeKind,
    ) -> Result<Tetromino, BoardError> {
        for _ in 0..100 {
            let turns = rng.random_range(0..4u8);
            let origin = Coord::new(rng.random_range(0..GRID_SIZE), rng.random_range(0..GRID_SIZE));
            if let Ok(ship) = Tetromino::new(shape, turns, origin) {
                if ship.mask().is_disjoint(&self.occupied) {
                    return Ok(ship);
                }
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Put a ship on the board. One ship per shape.
    pub fn place(&mut self, ship: Tetromino) -> Result<(), BoardError> {
        let slot = &mut self.ships[ship.shape().index()];
        if slot.is_some() {
            return Err(BoardError::ShapeAlreadyPlaced(ship.shape()));
        }
        if !ship.mask().is_disjoint(&self.occupied) {
            return Err(BoardError::ShipOverlaps);
        }
        *slot = Some(ship);
        self.occupied |= ship.mask();
        for c in ship.mask().iter() {
            self.cells[c.y as usize][c.x as usize] = Cell::Ship(ship.shape());
        }
        Ok(())
    }

    /// Put a bonus on a free cell.
    pub fn place_bonus(&mut self, coord: Coord, bonus: BonusKind) -> Result<(), BoardError> {
        if !self.occupied.try_insert(coord)? {
            return Err(BoardError::ShipOverlaps);
        }
        self.cells[coord.y as usize][coord.x as usize] = Cell::Bonus(bonus);
        Ok(())
    }

    pub fn cell(&self, coord: Coord) -> Result<Cell, BoardError> {
        if coord.x >= GRID_SIZE || coord.y >= GRID_SIZE {
            return Err(BoardError::OutOfBounds);
        }
        Ok(self.cells[coord.y as usize][coord.x as usize])
    }

    /// Every coordinate a shot may target.
    pub fn playable_coordinates(&self) -> CoordSet {
        CoordSet::full()
    }

    /// Cells fired upon so far.
    pub fn fired(&self) -> CoordSet {
        self.fired
    }

    pub fn ships(&self) -> impl Iterator<Item = &Tetromino> {
        self.ships.iter().flatten()
    }

    /// True positions of every ship cell, by shape.
    pub fn ship_cells(&self) -> impl Iterator<Item = (ShapeKind, Coord)> + '_ {
        self.ships()
            .flat_map(|ship| ship.mask().iter().map(move |c| (ship.shape(), c)))
    }

    pub fn is_sunk(&self, shape: ShapeKind) -> bool {
        self.ships[shape.index()]
            .map(|ship| ship.mask().is_subset(&self.fired))
            .unwrap_or(false)
    }

    /// Returns `true` when every placed ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships().all(|ship| ship.mask().is_subset(&self.fired))
    }

    /// Resolve a shot at `coord`.
    pub fn fire(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        let cell = self.cell(coord)?;
        if !self.fired.insert(coord) {
            return Err(BoardError::AlreadyFired);
        }
        Ok(match cell {
            Cell::Water => ShotOutcome::missed(coord),
            Cell::Bonus(bonus) => ShotOutcome::bonus(coord, bonus),
            Cell::Ship(shape) if !self.is_sunk(shape) => ShotOutcome::touched(coord, shape),
            Cell::Ship(shape) if self.all_sunk() => ShotOutcome::victory(coord, shape),
            Cell::Ship(shape) => ShotOutcome::sunk(coord, shape),
        })
    }

    /// Resolve a CROSS_FIRE shot: `coord` and each of its 4-neighbors not
    /// fired yet, stopping at victory.
    pub fn cross_fire(&mut self, coord: Coord) -> Result<Vec<ShotOutcome>, BoardError> {
        let first = self.fire(coord)?;
        let mut outcomes = alloc::vec![first];
        if first.kind == OutcomeKind::Victory {
            return Ok(outcomes);
        }
        for n in geometry::neighbors(coord) {
            if self.fired.contains(n) {
                continue;
            }
            let outcome = self.fire(n)?;
            outcomes.push(outcome);
            if outcome.kind == OutcomeKind::Victory {
                break;
            }
        }
        Ok(outcomes)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl ShotLedger for Board {
    fn already_fired(&self, coord: Coord) -> bool {
        self.fired.contains(coord)
    }
}

impl fmt::Display for Board {
    /// Layout symbols; fired ship cells show as `x`, other fired cells as `~`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let fired = self.fired.contains(Coord::new(x as u8, y as u8));
                let symbol = match (cell, fired) {
                    (Cell::Ship(_), true) => 'x',
                    (_, true) => '~',
                    (Cell::Water, false) => '.',
                    (Cell::Ship(shape), false) => shape.symbol(),
                    (Cell::Bonus(bonus), false) => bonus.symbol(),
                };
                write!(f, "{}", symbol)?;
            }
            if y + 1 < G {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        writeln!(f, "{}", self)?;
        write!(f, "}}")
    }
}
