//! The engine's belief state: which cells are still open, which are being
//! chased, what has been hit and which bonuses are waiting.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use log::debug;
use rand::Rng;

use crate::common::{BonusKind, Coord, EngineError, OutcomeKind, ShapeKind, ShotLedger, ShotOutcome};
use crate::config::{FLEET, NUM_SHAPES};
use crate::geometry;
use crate::grid::CoordSet;
use crate::heuristic;

/// Uniform draw from `set`, without removing anything.
fn pick<R: Rng + ?Sized>(set: &CoordSet, rng: &mut R) -> Option<Coord> {
    match set.len() {
        0 => None,
        n => set.nth(rng.random_range(0..n)),
    }
}

/// The three mutually disjoint pools every coordinate lives in once the game
/// starts: not yet considered (`remaining`), queued as a follow-up on a hit
/// ship (`targets`), or spent (`fired`). Coordinates only change pool through
/// the methods below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordPools {
    remaining: CoordSet,
    targets: CoordSet,
    fired: CoordSet,
}

impl CoordPools {
    pub fn new(playable: CoordSet) -> Self {
        CoordPools {
            remaining: playable,
            targets: CoordSet::new(),
            fired: CoordSet::new(),
        }
    }

    pub fn remaining(&self) -> CoordSet {
        self.remaining
    }

    pub fn targets(&self) -> CoordSet {
        self.targets
    }

    pub fn fired(&self) -> CoordSet {
        self.fired
    }

    /// Move `c` from `remaining` into `targets`. Returns `true` when `c` is a
    /// target afterwards, `false` when it was already spent or never playable.
    pub fn claim(&mut self, c: Coord) -> bool {
        if self.remaining.remove(c) {
            self.targets.insert(c);
        }
        self.targets.contains(c)
    }

    /// Claim every 4-neighbor of `c`.
    pub fn claim_neighbors(&mut self, c: Coord) {
        for n in geometry::neighbors(c) {
            self.claim(n);
        }
    }

    /// Hand every unused target back to `remaining`.
    pub fn release_targets(&mut self) {
        self.remaining |= self.targets;
        self.targets.clear();
    }

    /// Mark `c` as spent, wherever it was.
    pub fn commit(&mut self, c: Coord) {
        self.remaining.remove(c);
        self.targets.remove(c);
        self.fired.insert(c);
        self.debug_check();
    }

    /// Spend a random target.
    pub fn draw_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coord> {
        let c = pick(&self.targets, rng)?;
        self.commit(c);
        Some(c)
    }

    /// Spend a random coordinate of `pool` that is still remaining.
    pub fn draw_remaining<R: Rng + ?Sized>(&mut self, pool: &CoordSet, rng: &mut R) -> Option<Coord> {
        let c = pick(&(*pool & self.remaining), rng)?;
        self.commit(c);
        Some(c)
    }

    /// Spend every unfired 4-neighbor of `c` at once.
    pub fn strike_around(&mut self, c: Coord) {
        for n in geometry::neighbors(c) {
            self.commit(n);
        }
    }

    fn debug_check(&self) {
        debug_assert!(self.remaining.is_disjoint(&self.targets));
        debug_assert!(self.remaining.is_disjoint(&self.fired));
        debug_assert!(self.targets.is_disjoint(&self.fired));
    }
}

impl ShotLedger for CoordPools {
    fn already_fired(&self, coord: Coord) -> bool {
        self.fired.contains(coord)
    }
}

/// True ship positions, handed out one coordinate at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheatMap {
    cells: [CoordSet; NUM_SHAPES],
}

impl CheatMap {
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (ShapeKind, Coord)>,
    {
        let mut map = CheatMap::default();
        for (shape, c) in cells {
            map.cells[shape.index()].insert(c);
        }
        map
    }

    pub fn cells(&self, shape: ShapeKind) -> CoordSet {
        self.cells[shape.index()]
    }

    pub fn len(&self) -> usize {
        self.cells.iter().map(CoordSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(CoordSet::is_empty)
    }

    /// Remove and return the first coordinate of the first shape that still
    /// has any.
    pub fn pop_first(&mut self) -> Option<(ShapeKind, Coord)> {
        FLEET.into_iter().find_map(|shape| {
            let set = &mut self.cells[shape.index()];
            let c = set.first()?;
            set.remove(c);
            Some((shape, c))
        })
    }
}

/// Everything one engine instance knows about the opponent board.
#[derive(Debug, Clone)]
pub struct BeliefState {
    pools: CoordPools,
    search: CoordSet,
    hits: [CoordSet; NUM_SHAPES],
    active: Option<ShapeKind>,
    pending: VecDeque<BonusKind>,
    cheat_map: Option<CheatMap>,
    resolved: CoordSet,
    last: Option<ShotOutcome>,
}

impl BeliefState {
    /// Fresh state seeded with the playable coordinates of the board.
    pub fn new(playable: CoordSet) -> Self {
        BeliefState {
            pools: CoordPools::new(playable),
            search: CoordSet::new(),
            hits: [CoordSet::new(); NUM_SHAPES],
            active: None,
            pending: VecDeque::new(),
            cheat_map: None,
            resolved: CoordSet::new(),
            last: None,
        }
    }

    pub fn pools(&self) -> &CoordPools {
        &self.pools
    }

    pub fn pools_mut(&mut self) -> &mut CoordPools {
        &mut self.pools
    }

    pub fn remaining(&self) -> CoordSet {
        self.pools.remaining()
    }

    pub fn targets(&self) -> CoordSet {
        self.pools.targets()
    }

    pub fn fired(&self) -> CoordSet {
        self.pools.fired()
    }

    pub fn search_candidates(&self) -> CoordSet {
        self.search
    }

    /// Confirmed hits on the not yet sunk ship of `shape`.
    pub fn hits(&self, shape: ShapeKind) -> CoordSet {
        self.hits[shape.index()]
    }

    pub fn hit_list(&self, shape: ShapeKind) -> Vec<Coord> {
        self.hits[shape.index()].iter().collect()
    }

    /// Shape currently being hunted down.
    pub fn active_shape(&self) -> Option<ShapeKind> {
        self.active
    }

    pub fn pending_bonuses(&self) -> &VecDeque<BonusKind> {
        &self.pending
    }

    pub fn cheat_map(&self) -> Option<&CheatMap> {
        self.cheat_map.as_ref()
    }

    pub fn cheat_map_mut(&mut self) -> Option<&mut CheatMap> {
        self.cheat_map.as_mut()
    }

    pub fn set_cheat_map(&mut self, map: CheatMap) {
        self.cheat_map = Some(map);
    }

    pub fn last_outcome(&self) -> Option<&ShotOutcome> {
        self.last.as_ref()
    }

    /// Coordinate of the last shot if it touched a ship.
    pub fn last_touched(&self) -> Option<Coord> {
        self.last
            .filter(|o| o.kind == OutcomeKind::Touched)
            .map(|o| o.coord)
    }

    /// Remove one queued bonus of `kind`, returning whether there was one.
    pub fn take_bonus(&mut self, kind: BonusKind) -> bool {
        match self.pending.iter().position(|&b| b == kind) {
            Some(i) => {
                self.pending.remove(i);
                debug!("using {:?} bonus", kind);
                true
            }
            None => false,
        }
    }

    /// Recompute the search candidates from the remaining coordinates.
    pub fn refresh_search(&mut self) {
        self.search = heuristic::compute_search_candidates(&self.pools.remaining(), &self.pools);
    }

    /// Spend a search move: a random search candidate, or any remaining
    /// coordinate once the candidates run out.
    pub fn draw_search<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coord> {
        self.search &= self.pools.remaining();
        let pool = if self.search.is_empty() {
            self.pools.remaining()
        } else {
            self.search
        };
        let c = self.pools.draw_remaining(&pool, rng)?;
        self.search.remove(c);
        Some(c)
    }

    /// Queue the 4-neighborhoods of every hit on `shape` as targets.
    pub fn widen(&mut self, shape: ShapeKind) {
        for h in self.hits[shape.index()].iter() {
            self.pools.claim_neighbors(h);
        }
    }

    /// First shape, in fleet order, with hits on a ship not yet sunk.
    fn next_unresolved(&self) -> Option<ShapeKind> {
        FLEET
            .into_iter()
            .find(|shape| !self.hits[shape.index()].is_empty())
    }

    /// Fold the board authority's verdict on one cell into the state.
    pub fn apply(&mut self, outcome: &ShotOutcome) -> Result<(), EngineError> {
        let c = outcome.coord;
        if !self.resolved.insert(c) {
            return Err(EngineError::OutcomeAlreadyApplied(c));
        }
        self.pools.commit(c);
        self.search.remove(c);
        match outcome.kind {
            OutcomeKind::Missed => {}
            OutcomeKind::Touched => {
                if let Some(shape) = outcome.shape {
                    self.hits[shape.index()].insert(c);
                    if self.active.is_none() {
                        debug!("target mode on {} after hit at {}", shape, c);
                        self.active = Some(shape);
                    }
                }
            }
            OutcomeKind::Sunk | OutcomeKind::Victory => {
                if let Some(shape) = outcome.shape {
                    self.sink(shape);
                }
            }
            OutcomeKind::BonusGranted => match outcome.bonus {
                Some(BonusKind::Move) => debug!("discarding MOVE bonus"),
                Some(bonus) => self.pending.push_back(bonus),
                None => {}
            },
        }
        self.last = Some(*outcome);
        Ok(())
    }

    fn sink(&mut self, shape: ShapeKind) {
        self.hits[shape.index()].clear();
        if self.active.is_none() || self.active == Some(shape) {
            self.pools.release_targets();
            self.active = self.next_unresolved();
            match self.active {
                Some(next) => debug!("{} sunk, moving on to {}", shape, next),
                None => debug!("{} sunk, back to search", shape),
            }
        }
    }
}
