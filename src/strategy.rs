//! Per-tier move selection.
//!
//! Every tier is a [`MoveSupplier`]: given the belief state it picks the next
//! coordinate and spends it. The engine holds one supplier, chosen from the
//! tier, and never branches on the tier itself.

use log::{debug, trace};
use rand::rngs::SmallRng;

use crate::belief::BeliefState;
use crate::common::{BonusKind, Coord, EngineError, Move, ShapeKind};
use crate::deduction::{self, Proposal};

/// Source of the engine's next shot.
pub trait MoveSupplier {
    /// Choose a coordinate and mark it fired in `belief`.
    fn next_move(&mut self, belief: &mut BeliefState, rng: &mut SmallRng) -> Result<Move, EngineError>;
}

fn with_replay(coord: Coord, replay: bool) -> Move {
    Move {
        coord,
        bonus: replay.then_some(BonusKind::Replay),
    }
}

/// Hunt-mode shot. A queued CROSS_FIRE is spent here unless the shot
/// already uses REPLAY; its 4-neighborhood is struck along with it.
fn search_move(belief: &mut BeliefState, rng: &mut SmallRng, replay: bool) -> Result<Move, EngineError> {
    let coord = belief.draw_search(rng).ok_or(EngineError::NoLegalMoves)?;
    if !replay && belief.take_bonus(BonusKind::CrossFire) {
        belief.pools_mut().strike_around(coord);
        trace!("cross fire at {}", coord);
        return Ok(Move {
            coord,
            bonus: Some(BonusKind::CrossFire),
        });
    }
    trace!("search shot at {}", coord);
    Ok(with_replay(coord, replay))
}

/// Tier I: random search, then random shots around every hit.
#[derive(Debug, Default)]
pub struct SurroundSupplier;

impl MoveSupplier for SurroundSupplier {
    fn next_move(&mut self, belief: &mut BeliefState, rng: &mut SmallRng) -> Result<Move, EngineError> {
        let replay = belief.take_bonus(BonusKind::Replay);
        let last = belief.last_outcome().copied();
        let active = belief.active_shape();
        match (last, active) {
            (Some(o), Some(shape)) if o.is_sink() => belief.widen(shape),
            (Some(o), None) if o.is_sink() => belief.refresh_search(),
            _ => {}
        }
        if let Some(c) = belief.last_touched() {
            belief.pools_mut().claim_neighbors(c);
        }
        if let Some(shape) = active {
            if belief.targets().is_empty() {
                belief.widen(shape);
            }
            if let Some(coord) = belief.pools_mut().draw_target(rng) {
                trace!("surround shot at {} for {}", coord, shape);
                return Ok(with_replay(coord, replay));
            }
        }
        search_move(belief, rng, replay)
    }
}

/// Tiers II and III: density search, then shape deduction on the hunted ship.
#[derive(Debug, Default)]
pub struct DeductiveSupplier;

impl DeductiveSupplier {
    fn pursue(belief: &mut BeliefState, shape: ShapeKind, rng: &mut SmallRng) -> Option<Coord> {
        let hits = belief.hit_list(shape);
        let proposal = deduction::deduce(shape, &hits, belief.last_touched());
        trace!("{} with {} hits: {:?}", shape, hits.len(), proposal);
        let pools = belief.pools_mut();
        match proposal {
            Proposal::Surround(cells) => {
                for c in cells {
                    pools.claim_neighbors(c);
                }
            }
            Proposal::Replace(cells) => {
                pools.release_targets();
                for c in cells {
                    pools.claim(c);
                }
            }
        }
        if let Some(c) = pools.draw_target(rng) {
            return Some(c);
        }
        debug!("no deduced cell left for {}, widening", shape);
        belief.widen(shape);
        belief.pools_mut().draw_target(rng)
    }
}

impl MoveSupplier for DeductiveSupplier {
    fn next_move(&mut self, belief: &mut BeliefState, rng: &mut SmallRng) -> Result<Move, EngineError> {
        let replay = belief.take_bonus(BonusKind::Replay);
        belief.refresh_search();
        if let Some(shape) = belief.active_shape() {
            if let Some(coord) = Self::pursue(belief, shape, rng) {
                trace!("target shot at {} for {}", coord, shape);
                return Ok(with_replay(coord, replay));
            }
        }
        search_move(belief, rng, replay)
    }
}

/// Tier IV: fires straight at the cells of the cheat map.
#[derive(Debug, Default)]
pub struct OracleSupplier;

impl MoveSupplier for OracleSupplier {
    fn next_move(&mut self, belief: &mut BeliefState, _rng: &mut SmallRng) -> Result<Move, EngineError> {
        let fired = belief.fired();
        let map = belief.cheat_map_mut().ok_or(EngineError::MissingTrueBoard)?;
        let (shape, coord) = loop {
            let (shape, c) = map.pop_first().ok_or(EngineError::NoLegalMoves)?;
            if !fired.contains(c) {
                break (shape, c);
            }
        };
        belief.pools_mut().commit(coord);
        trace!("oracle shot at {} for {}", coord, shape);
        Ok(Move::plain(coord))
    }
}
