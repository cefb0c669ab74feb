// Neighborhood-density search heuristic for the hunt phase.
// Uses no_std and avoids heap allocations.

use crate::{
    common::{Coord, ShotLedger},
    config::{DENSE_NEIGHBORHOOD_MIN, SPARSE_NEIGHBORHOOD_MIN},
    geometry,
    grid::CoordSet,
};

/// Unfired cells in the clipped 3×3 block around `p`, `p` included.
pub fn free_cells_around<L: ShotLedger + ?Sized>(p: Coord, ledger: &L) -> usize {
    geometry::block(p)
        .filter(|&c| !ledger.already_fired(c))
        .count()
}

/// Select the remaining coordinates with the most room left for an
/// undiscovered tetromino.
///
/// A coordinate is probable when at least `DENSE_NEIGHBORHOOD_MIN` cells of
/// its 3×3 block are unfired. Once the board is too explored for any cell to
/// qualify, fall back to coordinates with at least `SPARSE_NEIGHBORHOOD_MIN`
/// unfired 4-neighbors. The result is a subset of `remaining` and may be
/// empty.
pub fn compute_search_candidates<L: ShotLedger + ?Sized>(
    remaining: &CoordSet,
    ledger: &L,
) -> CoordSet {
    let dense: CoordSet = remaining
        .iter()
        .filter(|&p| free_cells_around(p, ledger) >= DENSE_NEIGHBORHOOD_MIN)
        .collect();
    if !dense.is_empty() {
        return dense;
    }
    remaining
        .iter()
        .filter(|&p| ledger.free_neighbor_count(p) >= SPARSE_NEIGHBORHOOD_MIN)
        .collect()
}
