use tetroship::maps::{self, map, map_count};
use tetroship::{
    Board, BoardError, BonusKind, Cell, Coord, OutcomeKind, ShapeKind, ShotLedger, ShotOutcome,
    FLEET, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const SMALL: [&str; 10] = [
    "OO........",
    "OO.+......",
    "..........",
    ".....*....",
    "..........",
    "..........",
    ".........I",
    "......=..I",
    ".........I",
    ".........I",
];

fn small_board() -> Board {
    Board::from_rows(&SMALL).unwrap()
}

#[test]
fn test_catalogue_maps_parse() {
    assert_eq!(map_count(), maps::MAPS.len());
    for i in 0..map_count() {
        let board = map(i).unwrap();
        let shapes: Vec<ShapeKind> = board.ships().map(|s| s.shape()).collect();
        assert_eq!(shapes, FLEET.to_vec(), "map {}", i);
        assert_eq!(board.ship_cells().count(), TOTAL_SHIP_CELLS);
        assert!(board.fired().is_empty());
    }
    assert_eq!(map(map_count()).unwrap_err(), BoardError::UnknownMap(map_count()));
}

#[test]
fn test_catalogue_maps_render_back() {
    for (i, rows) in maps::MAPS.iter().enumerate() {
        let board = map(i).unwrap();
        assert_eq!(board.to_string(), rows.join("\n"));
    }
}

#[test]
fn test_cells_from_layout() {
    let board = small_board();
    assert_eq!(board.cell(Coord::new(0, 0)).unwrap(), Cell::Ship(ShapeKind::O));
    assert_eq!(board.cell(Coord::new(3, 1)).unwrap(), Cell::Bonus(BonusKind::Replay));
    assert_eq!(board.cell(Coord::new(5, 3)).unwrap(), Cell::Bonus(BonusKind::CrossFire));
    assert_eq!(board.cell(Coord::new(6, 7)).unwrap(), Cell::Bonus(BonusKind::Move));
    assert_eq!(board.cell(Coord::new(4, 4)).unwrap(), Cell::Water);
    assert_eq!(board.cell(Coord::new(10, 0)).unwrap_err(), BoardError::OutOfBounds);
}

#[test]
fn test_fire_outcomes_through_victory() {
    let mut board = small_board();
    assert_eq!(board.fire(Coord::new(4, 4)).unwrap(), ShotOutcome::missed(Coord::new(4, 4)));
    assert_eq!(
        board.fire(Coord::new(3, 1)).unwrap(),
        ShotOutcome::bonus(Coord::new(3, 1), BonusKind::Replay)
    );

    for c in [Coord::new(0, 0), Coord::new(1, 0), Coord::new(0, 1)] {
        assert_eq!(board.fire(c).unwrap().kind, OutcomeKind::Touched);
    }
    let sunk = board.fire(Coord::new(1, 1)).unwrap();
    assert_eq!(sunk, ShotOutcome::sunk(Coord::new(1, 1), ShapeKind::O));
    assert!(board.is_sunk(ShapeKind::O));
    assert!(!board.all_sunk());

    for y in 6..9 {
        assert_eq!(board.fire(Coord::new(9, y)).unwrap().kind, OutcomeKind::Touched);
    }
    let last = board.fire(Coord::new(9, 9)).unwrap();
    assert_eq!(last, ShotOutcome::victory(Coord::new(9, 9), ShapeKind::I));
    assert!(last.is_sink());
    assert!(board.all_sunk());
}

#[test]
fn test_fire_twice_is_an_error() {
    let mut board = small_board();
    board.fire(Coord::new(0, 0)).unwrap();
    assert_eq!(board.fire(Coord::new(0, 0)).unwrap_err(), BoardError::AlreadyFired);
    assert!(board.already_fired(Coord::new(0, 0)));
}

#[test]
fn test_cross_fire_skips_fired_neighbors() {
    let mut board = small_board();
    board.fire(Coord::new(1, 0)).unwrap();
    let outcomes = board.cross_fire(Coord::new(1, 1)).unwrap();
    let coords: Vec<Coord> = outcomes.iter().map(|o| o.coord).collect();
    assert_eq!(coords, vec![Coord::new(1, 1), Coord::new(1, 2), Coord::new(0, 1), Coord::new(2, 1)]);
    assert_eq!(outcomes[0].kind, OutcomeKind::Touched);
    assert_eq!(outcomes[1].kind, OutcomeKind::Missed);
    assert_eq!(outcomes[2].kind, OutcomeKind::Touched);
    assert_eq!(outcomes[3].kind, OutcomeKind::Missed);
    assert_eq!(board.free_neighbor_count(Coord::new(1, 1)), 0);
}

#[test]
fn test_cross_fire_stops_at_victory() {
    let rows = [
        "O.........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
    ];
    // A lone cell is not a ship, so build the board by hand
    assert!(Board::from_rows(&rows).is_err());

    let mut board = Board::new();
    board
        .place(tetroship::Tetromino::new(ShapeKind::O, 0, Coord::new(4, 4)).unwrap())
        .unwrap();
    for c in [Coord::new(4, 4), Coord::new(5, 4), Coord::new(4, 5)] {
        board.fire(c).unwrap();
    }
    let outcomes = board.cross_fire(Coord::new(5, 5)).unwrap();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].kind, OutcomeKind::Victory);
}

#[test]
fn test_layout_errors() {
    let mut rows = SMALL;
    rows[0] = "OO......";
    assert_eq!(Board::from_rows(&rows).unwrap_err(), BoardError::BadDimensions);
    assert_eq!(Board::from_rows(&SMALL[..9]).unwrap_err(), BoardError::BadDimensions);

    let mut rows = SMALL;
    rows[4] = "....?.....";
    assert_eq!(Board::from_rows(&rows).unwrap_err(), BoardError::UnknownSymbol('?'));

    // S cells drawn as a Z
    let mut rows = SMALL;
    rows[4] = "SS........";
    rows[5] = ".SS.......";
    assert_eq!(
        Board::from_rows(&rows).unwrap_err(),
        BoardError::InvalidShape(ShapeKind::S)
    );
}

#[test]
fn test_place_rejects_overlap_and_duplicates() {
    let mut board = small_board();
    let overlapping = tetroship::Tetromino::new(ShapeKind::T, 0, Coord::new(0, 0)).unwrap();
    assert_eq!(board.place(overlapping).unwrap_err(), BoardError::ShipOverlaps);
    let second_o = tetroship::Tetromino::new(ShapeKind::O, 0, Coord::new(5, 5)).unwrap();
    assert_eq!(
        board.place(second_o).unwrap_err(),
        BoardError::ShapeAlreadyPlaced(ShapeKind::O)
    );
    assert_eq!(
        board.place_bonus(Coord::new(0, 0), BonusKind::Replay).unwrap_err(),
        BoardError::ShipOverlaps
    );
}

#[test]
fn test_random_board_places_fleet_and_bonuses() {
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let bonuses = [BonusKind::Replay, BonusKind::CrossFire, BonusKind::Move];
        let board = Board::random(&mut rng, &bonuses).unwrap();
        assert_eq!(board.ships().count(), FLEET.len());
        assert_eq!(board.ship_cells().count(), TOTAL_SHIP_CELLS);

        let mut bonus_cells = 0;
        for y in 0..10 {
            for x in 0..10 {
                if let Cell::Bonus(_) = board.cell(Coord::new(x, y)).unwrap() {
                    bonus_cells += 1;
                }
            }
        }
        assert_eq!(bonus_cells, bonuses.len());
    }
}

#[test]
fn test_playable_coordinates_cover_grid() {
    let board = Board::new();
    assert_eq!(board.playable_coordinates().len(), 100);
    assert!(board.all_sunk());
}
