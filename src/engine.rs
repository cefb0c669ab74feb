//! The opponent engine: difficulty tier, belief state and the move loop
//! surface used by the game.

use alloc::boxed::Box;
use core::fmt;
use log::{debug, trace};
use rand::rngs::SmallRng;

use crate::belief::{BeliefState, CheatMap};
use crate::common::{Coord, EngineError, Move, OutcomeKind, ShapeKind, ShotOutcome};
use crate::grid::CoordSet;
use crate::strategy::{DeductiveSupplier, MoveSupplier, OracleSupplier, SurroundSupplier};

/// Difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize, clap::ValueEnum))]
pub enum Tier {
    /// Random search, then random shots around hits.
    One,
    /// Density search and shape deduction.
    Two,
    /// Same moves as `Two`, played with the opponent's board on record.
    Three,
    /// Fires only at known ship cells.
    Impossible,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::One, Tier::Two, Tier::Three, Tier::Impossible];

    /// Tiers that cannot be played without `Engine::set_opponent_true_board`.
    pub const fn needs_true_board(self) -> bool {
        matches!(self, Tier::Three | Tier::Impossible)
    }

    fn supplier(self) -> Box<dyn MoveSupplier> {
        match self {
            Tier::One => Box::new(SurroundSupplier),
            Tier::Two | Tier::Three => Box::new(DeductiveSupplier),
            Tier::Impossible => Box::new(OracleSupplier),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::One => "Level I",
            Tier::Two => "Level II",
            Tier::Three => "Level III",
            Tier::Impossible => "Level Impossible",
        };
        f.write_str(name)
    }
}

/// One engine per game. Call [`Engine::choose_move`], resolve the shot on the
/// opponent board, then feed every resulting outcome to
/// [`Engine::apply_outcome`] before asking for the next move.
pub struct Engine {
    belief: BeliefState,
    tier: Option<Tier>,
    supplier: Option<Box<dyn MoveSupplier>>,
    true_board: Option<CheatMap>,
    finished: bool,
}

impl Engine {
    /// Engine for a board whose shootable cells are `playable`.
    pub fn new(playable: CoordSet) -> Self {
        Engine {
            belief: BeliefState::new(playable),
            tier: None,
            supplier: None,
            true_board: None,
            finished: false,
        }
    }

    pub fn set_difficulty(&mut self, tier: Tier) {
        debug!("difficulty set to {}", tier);
        self.tier = Some(tier);
        self.supplier = Some(tier.supplier());
        if tier != Tier::Impossible {
            self.belief.refresh_search();
        }
        self.install_true_board();
    }

    /// Record where the opponent's ships really are.
    pub fn set_opponent_true_board<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = (ShapeKind, Coord)>,
    {
        let map = CheatMap::from_cells(cells);
        debug!("true board received: {} ship cells", map.len());
        self.true_board = Some(map);
        self.install_true_board();
    }

    fn install_true_board(&mut self) {
        let wanted = self.tier.map(Tier::needs_true_board).unwrap_or(false);
        if wanted && self.belief.cheat_map().is_none() {
            if let Some(map) = self.true_board.take() {
                self.belief.set_cheat_map(map);
            }
        }
    }

    /// Pick the next shot. The returned coordinate counts as fired from now on.
    pub fn choose_move(&mut self, rng: &mut SmallRng) -> Result<Move, EngineError> {
        if self.finished {
            return Err(EngineError::GameOver);
        }
        let tier = self.tier.ok_or(EngineError::NotInitialized)?;
        if tier.needs_true_board() && self.belief.cheat_map().is_none() {
            return Err(EngineError::MissingTrueBoard);
        }
        let supplier = self.supplier.as_mut().ok_or(EngineError::NotInitialized)?;
        let mv = supplier.next_move(&mut self.belief, rng)?;
        trace!("{} chose {:?}", tier, mv);
        Ok(mv)
    }

    /// Feed back the board's verdict on one cell.
    pub fn apply_outcome(&mut self, outcome: &ShotOutcome) -> Result<(), EngineError> {
        if self.finished {
            return Err(EngineError::GameOver);
        }
        self.belief.apply(outcome)?;
        if outcome.kind == OutcomeKind::Victory {
            debug!("victory at {}", outcome.coord);
            self.finished = true;
        }
        Ok(())
    }

    pub fn belief(&self) -> &BeliefState {
        &self.belief
    }

    pub fn tier(&self) -> Option<Tier> {
        self.tier
    }

    /// Returns `true` once a VICTORY outcome was applied.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(CoordSet::full())
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("tier", &self.tier)
            .field("finished", &self.finished)
            .field("belief", &self.belief)
            .finish()
    }
}
