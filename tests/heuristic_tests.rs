use tetroship::{compute_search_candidates, free_cells_around, Board, Coord, CoordSet, ShotLedger};

fn board_with_fired(fired: impl IntoIterator<Item = Coord>) -> Board {
    let mut board = Board::new();
    for c in fired {
        board.fire(c).unwrap();
    }
    board
}

#[test]
fn test_free_cells_around_counts_block() {
    let board = board_with_fired([Coord::new(4, 4), Coord::new(5, 5), Coord::new(8, 8)]);
    assert_eq!(free_cells_around(Coord::new(4, 5), &board), 7);
    assert_eq!(free_cells_around(Coord::new(0, 0), &board), 4);
    assert_eq!(free_cells_around(Coord::new(9, 9), &board), 3);
}

#[test]
fn test_fresh_board_skips_corners() {
    let board = Board::new();
    let candidates = compute_search_candidates(&board.playable_coordinates(), &board);
    assert_eq!(candidates.len(), 96);
    for corner in [Coord::new(0, 0), Coord::new(9, 0), Coord::new(0, 9), Coord::new(9, 9)] {
        assert!(!candidates.contains(corner));
    }
}

#[test]
fn test_candidates_stay_inside_remaining() {
    let board = board_with_fired([Coord::new(2, 2)]);
    let remaining: CoordSet = [Coord::new(2, 3), Coord::new(7, 7), Coord::new(0, 0)]
        .into_iter()
        .collect();
    let candidates = compute_search_candidates(&remaining, &board);
    assert!(candidates.is_subset(&remaining));
    assert_eq!(candidates.len(), 2);
    assert!(!candidates.contains(Coord::new(0, 0)));
}

#[test]
fn test_sparse_fallback() {
    // Everything fired except a plus shape around (5, 5) and a lone cell
    let open: CoordSet = [
        Coord::new(5, 5),
        Coord::new(5, 4),
        Coord::new(5, 6),
        Coord::new(4, 5),
        Coord::new(6, 5),
        Coord::new(0, 9),
    ]
    .into_iter()
    .collect();
    let board = board_with_fired((!open).iter());
    assert_eq!(board.free_neighbor_count(Coord::new(5, 5)), 4);

    let candidates = compute_search_candidates(&open, &board);
    assert_eq!(candidates.iter().collect::<Vec<_>>(), vec![Coord::new(5, 5)]);
}

#[test]
fn test_no_candidates_when_exhausted() {
    let open: CoordSet = [Coord::new(1, 1), Coord::new(8, 8)].into_iter().collect();
    let board = board_with_fired((!open).iter());
    assert!(compute_search_candidates(&open, &board).is_empty());
}
