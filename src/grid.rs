//! Fixed-size coordinate sets packed into an unsigned integer.
//!
//! A `CellSet<T, N>` holds any subset of an `N×N` grid in the bits of `T`,
//! indexed row-major (`y * N + x`). Sets are `Copy`, allocation free and
//! combine with the usual bit operators, so invariants between several sets
//! (disjointness, subset) are single `&`/`|` checks.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Coord;
use crate::config::GRID_SIZE;

/// Set over the engine's firing grid.
pub type CoordSet = CellSet<u128, { GRID_SIZE as usize }>;

/// Errors returned by coordinate set operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// `N*N` exceeds the capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Coordinate lies outside `[0..N)`.
    OutOfBounds { x: u8, y: u8 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N*N={} exceeds T::BITS={}", n * n, capacity)
            }
            GridError::OutOfBounds { x, y } => write!(f, "OutOfBounds: x={}, y={}", x, y),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellSet<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::CELLS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    #[inline]
    fn index(coord: Coord) -> Option<usize> {
        let (x, y) = (coord.x as usize, coord.y as usize);
        if x < N && y < N {
            Some(y * N + x)
        } else {
            None
        }
    }

    /// Empty set, without size check.
    #[inline]
    pub fn new() -> Self {
        CellSet { bits: T::zero() }
    }

    /// Fallible constructor: `Err(SizeTooLarge)` if `N*N > T::BITS`.
    pub fn try_new() -> Result<Self, GridError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::CELLS > capacity {
            Err(GridError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    /// Every cell of the grid.
    #[inline]
    pub fn full() -> Self {
        CellSet { bits: Self::mask() }
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test; coordinates off the grid are never members.
    pub fn contains(&self, coord: Coord) -> bool {
        match Self::index(coord) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Adds `coord`, returning `true` if it was not present. Off-grid
    /// coordinates are ignored.
    pub fn insert(&mut self, coord: Coord) -> bool {
        match Self::index(coord) {
            Some(idx) => {
                let before = self.bits;
                self.bits = self.bits | (T::one() << idx);
                before != self.bits
            }
            None => false,
        }
    }

    /// Like `insert`, but off-grid coordinates are an error.
    pub fn try_insert(&mut self, coord: Coord) -> Result<bool, GridError> {
        if Self::index(coord).is_none() {
            return Err(GridError::OutOfBounds { x: coord.x, y: coord.y });
        }
        Ok(self.insert(coord))
    }

    /// Removes `coord`, returning `true` if it was present.
    pub fn remove(&mut self, coord: Coord) -> bool {
        match Self::index(coord) {
            Some(idx) => {
                let before = self.bits;
                self.bits = self.bits & !(T::one() << idx);
                before != self.bits
            }
            None => false,
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.bits = T::zero();
    }

    /// Members in row-major order.
    #[inline]
    pub fn iter(&self) -> Cells<T, N> {
        Cells { bits: self.bits, idx: 0 }
    }

    /// First member in row-major order.
    pub fn first(&self) -> Option<Coord> {
        self.iter().next()
    }

    /// The `n`-th member in row-major order.
    pub fn nth(&self, n: usize) -> Option<Coord> {
        self.iter().nth(n)
    }

    pub fn is_disjoint(&self, other: &Self) -> bool {
        (self.bits & other.bits).is_zero()
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        (self.bits & !other.bits).is_zero()
    }

    #[inline]
    pub fn into_raw(self) -> T {
        self.bits
    }

    /// Creates a set from the raw integer, masking out bits past `N*N`.
    #[inline]
    pub fn from_raw(raw: T) -> Self {
        CellSet { bits: raw & Self::mask() }
    }
}

impl<T, const N: usize> Default for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> FromIterator<Coord> for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T, const N: usize> Extend<Coord> for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        for coord in iter {
            self.insert(coord);
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coord;
    type IntoIter = Cells<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, const N: usize> fmt::Debug for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, const N: usize> fmt::Display for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..N {
            for x in 0..N {
                let cell = if self.contains(Coord::new(x as u8, y as u8)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", cell)?;
            }
            if y + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the members of a set.
#[derive(Clone, Copy)]
pub struct Cells<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Cells<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some(Coord::new((idx % N) as u8, (idx / N) as u8));
            }
        }
        None
    }
}

/// Intersection.
impl<T, const N: usize> BitAnd for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellSet { bits: self.bits & rhs.bits }
    }
}

/// Union.
impl<T, const N: usize> BitOr for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellSet { bits: self.bits | rhs.bits }
    }
}

/// Difference.
impl<T, const N: usize> Sub for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        CellSet { bits: self.bits & !rhs.bits }
    }
}

/// Complement within the grid.
impl<T, const N: usize> Not for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}

impl<T, const N: usize> BitAndAssign for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits = self.bits & rhs.bits;
    }
}

impl<T, const N: usize> BitOrAssign for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
