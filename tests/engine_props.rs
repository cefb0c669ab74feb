use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tetroship::{
    Board, BonusKind, CoordSet, Engine, OutcomeKind, Tier, MAX_SHOTS, NUM_SHAPES, SHIP_CELLS,
};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    Board::random(
        &mut rng,
        &[BonusKind::Replay, BonusKind::CrossFire, BonusKind::Move, BonusKind::Replay],
    )
    .unwrap()
}

fn pools_disjoint(engine: &Engine) -> bool {
    let b = engine.belief();
    b.remaining().is_disjoint(&b.targets())
        && b.remaining().is_disjoint(&b.fired())
        && b.targets().is_disjoint(&b.fired())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every tier wins without firing a cell twice, and the pools stay
    /// disjoint after every step.
    #[test]
    fn engine_never_repeats_and_wins(seed in any::<u64>(), tier_index in 0usize..4) {
        let tier = Tier::ALL[tier_index];
        let mut board = random_board(seed);
        let mut engine = Engine::new(board.playable_coordinates());
        engine.set_opponent_true_board(board.ship_cells());
        engine.set_difficulty(tier);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);

        let mut chosen = CoordSet::new();
        let mut shots = 0;
        while !engine.is_finished() {
            prop_assert!(shots < MAX_SHOTS);
            let mv = engine.choose_move(&mut rng).unwrap();
            prop_assert!(chosen.insert(mv.coord), "{} chosen twice", mv.coord);
            prop_assert!(pools_disjoint(&engine));
            shots += 1;

            let outcomes = if mv.bonus == Some(BonusKind::CrossFire) {
                board.cross_fire(mv.coord).unwrap()
            } else {
                vec![board.fire(mv.coord).unwrap()]
            };
            for outcome in outcomes {
                engine.apply_outcome(&outcome).unwrap();
                prop_assert!(pools_disjoint(&engine));
                prop_assert!(engine.belief().pending_bonuses().iter().all(|&b| b != BonusKind::Move));
            }
        }
        prop_assert!(board.all_sunk());
        prop_assert!(board.fired().is_subset(&engine.belief().fired()));
        if tier == Tier::Impossible {
            prop_assert_eq!(shots, NUM_SHAPES * SHIP_CELLS);
        }
    }

    /// Sinking hands unused targets back and leaves no hits behind once the
    /// fleet is gone.
    #[test]
    fn victory_clears_hits(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let mut engine = Engine::new(board.playable_coordinates());
        engine.set_difficulty(Tier::Two);
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut last = None;
        while !engine.is_finished() {
            let mv = engine.choose_move(&mut rng).unwrap();
            let outcomes = if mv.bonus == Some(BonusKind::CrossFire) {
                board.cross_fire(mv.coord).unwrap()
            } else {
                vec![board.fire(mv.coord).unwrap()]
            };
            for outcome in outcomes {
                engine.apply_outcome(&outcome).unwrap();
                last = Some(outcome.kind);
            }
        }
        prop_assert_eq!(last, Some(OutcomeKind::Victory));
        let belief = engine.belief();
        prop_assert_eq!(belief.active_shape(), None);
        prop_assert!(belief.targets().is_empty());
        for shape in tetroship::FLEET {
            prop_assert!(belief.hits(shape).is_empty());
        }
    }
}
