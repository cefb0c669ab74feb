#![cfg(feature = "std")]
//! Plays an engine against a reference board until victory.

use anyhow::{anyhow, bail, Context};
use log::info;
use rand::rngs::SmallRng;
use serde::Serialize;

use crate::board::Board;
use crate::common::{BonusKind, Move, OutcomeKind};
use crate::config::NUM_SHAPES;
use crate::engine::{Engine, Tier};

/// Summary of one simulated game.
#[derive(Debug, Clone, Serialize)]
pub struct GameReport {
    pub tier: Tier,
    /// Moves chosen by the engine.
    pub shots: usize,
    /// Cells resolved by the board, cross fire cells included.
    pub cells_fired: usize,
    pub sink_events: usize,
    /// Shot number, starting at 1, on which the last ship went down.
    pub final_sink_shot: Option<usize>,
    /// Ship cells hit, indexed like `config::FLEET`.
    pub cells_hit_by_shape: [usize; NUM_SHAPES],
    /// Resolved cells that held no ship.
    pub wasted_shots: usize,
    pub moves: Vec<Move>,
}

/// Engine set up for `tier` against `board`, with the true board recorded
/// when the tier needs it.
pub fn engine_for(tier: Tier, board: &Board) -> Engine {
    let mut engine = Engine::new(board.playable_coordinates());
    if tier.needs_true_board() {
        engine.set_opponent_true_board(board.ship_cells());
    }
    engine.set_difficulty(tier);
    engine
}

/// Run the choose/resolve/apply loop for at most `max_shots` moves.
pub fn play_out(
    engine: &mut Engine,
    board: &mut Board,
    rng: &mut SmallRng,
    max_shots: usize,
) -> anyhow::Result<GameReport> {
    let tier = engine.tier().ok_or_else(|| anyhow!("engine has no difficulty"))?;
    let mut report = GameReport {
        tier,
        shots: 0,
        cells_fired: 0,
        sink_events: 0,
        final_sink_shot: None,
        cells_hit_by_shape: [0; NUM_SHAPES],
        wasted_shots: 0,
        moves: Vec::new(),
    };
    while !engine.is_finished() {
        if report.shots >= max_shots {
            bail!("no victory after {} shots", max_shots);
        }
        let mv = engine.choose_move(rng).map_err(|e| anyhow!(e))?;
        report.shots += 1;
        report.moves.push(mv);
        let resolved = if mv.bonus == Some(BonusKind::CrossFire) {
            board.cross_fire(mv.coord)
        } else {
            board.fire(mv.coord).map(|o| vec![o])
        };
        let outcomes = resolved
            .map_err(|e| anyhow!(e))
            .with_context(|| format!("resolving shot {} at {}", report.shots, mv.coord))?;
        for outcome in outcomes {
            report.cells_fired += 1;
            match outcome.shape {
                Some(shape) => report.cells_hit_by_shape[shape.index()] += 1,
                None => report.wasted_shots += 1,
            }
            if outcome.is_sink() {
                report.sink_events += 1;
            }
            if outcome.kind == OutcomeKind::Victory {
                report.final_sink_shot = Some(report.shots);
            }
            engine.apply_outcome(&outcome).map_err(|e| anyhow!(e))?;
        }
    }
    info!(
        "{} won in {} shots ({} wasted)",
        tier, report.shots, report.wasted_shots
    );
    Ok(report)
}
