use seabattle::{Board, Cell, Coord, Orientation, Ship, ShotError, ShotOutcome, WrongPlacement};

fn board_with_cruiser() -> Board<6> {
    let mut board = Board::<6>::new();
    board
        .place_ship(Ship::new(Coord::new(0, 0), 3, Orientation::Horizontal))
        .unwrap();
    board
}

#[test]
fn test_hits_then_sink_defeats_single_ship_board() {
    let mut board = board_with_cruiser();

    let first = board.resolve_shot(Coord::new(0, 0)).unwrap();
    assert_eq!(first, ShotOutcome::Hit);
    assert!(first.repeats_turn());
    let second = board.resolve_shot(Coord::new(0, 1)).unwrap();
    assert_eq!(second, ShotOutcome::Hit);
    assert!(second.repeats_turn());
    assert!(!board.is_defeated());

    let last = board.resolve_shot(Coord::new(0, 2)).unwrap();
    assert_eq!(last, ShotOutcome::Sunk);
    assert!(!last.repeats_turn());
    assert_eq!(board.sunk_count(), 1);
    assert_eq!(board.ships()[0].hits_remaining(), 0);
    assert!(board.is_defeated());
}

#[test]
fn test_untouched_water_is_a_miss() {
    let mut board = board_with_cruiser();
    let outcome = board.resolve_shot(Coord::new(5, 5)).unwrap();
    assert_eq!(outcome, ShotOutcome::Miss);
    assert!(!outcome.repeats_turn());
    assert_eq!(board.cell(Coord::new(5, 5)), Some(Cell::Miss));
}

#[test]
fn test_second_shot_at_same_cell_is_rejected() {
    let mut board = board_with_cruiser();
    board.resolve_shot(Coord::new(0, 0)).unwrap();
    assert_eq!(
        board.resolve_shot(Coord::new(0, 0)),
        Err(ShotError::AlreadyTargeted(Coord::new(0, 0)))
    );
    // the rejected shot did no extra damage
    assert_eq!(board.ships()[0].hits_remaining(), 2);
}

#[test]
fn test_shot_off_the_board() {
    let mut board = board_with_cruiser();
    assert_eq!(
        board.resolve_shot(Coord::new(6, 0)),
        Err(ShotError::OutOfBounds(Coord::new(6, 0)))
    );
    assert_eq!(
        board.resolve_shot(Coord::new(-1, 3)),
        Err(ShotError::OutOfBounds(Coord::new(-1, 3)))
    );
    assert!(board.targeted().is_empty());
}

#[test]
fn test_adjacent_placement_is_wrong() {
    let mut board = Board::<6>::new();
    board
        .place_ship(Ship::new(Coord::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    assert_eq!(
        board.place_ship(Ship::new(Coord::new(0, 1), 1, Orientation::Horizontal)),
        Err(WrongPlacement {
            cell: Coord::new(0, 1)
        })
    );
    assert_eq!(board.ships().len(), 1);
}

#[test]
fn test_diagonal_neighbour_is_wrong_but_gap_is_fine() {
    let mut board = Board::<6>::new();
    board
        .place_ship(Ship::new(Coord::new(2, 2), 1, Orientation::Horizontal))
        .unwrap();
    assert!(board
        .place_ship(Ship::new(Coord::new(3, 3), 2, Orientation::Vertical))
        .is_err());
    assert!(board
        .place_ship(Ship::new(Coord::new(4, 2), 2, Orientation::Horizontal))
        .is_ok());
    assert_eq!(board.ships().len(), 2);
}

#[test]
fn test_ship_hanging_off_the_edge_is_wrong() {
    let mut board = Board::<6>::new();
    let err = board
        .place_ship(Ship::new(Coord::new(4, 0), 3, Orientation::Vertical))
        .unwrap_err();
    assert_eq!(err.cell, Coord::new(6, 0));
    assert!(board.ships().is_empty());
    assert!(board.reserved().is_empty());
    assert_eq!(board.cell(Coord::new(4, 0)), Some(Cell::Empty));
}

#[test]
fn test_sinking_reveals_contour_and_blocks_it() {
    let mut board = board_with_cruiser();
    for c in 0..3 {
        board.resolve_shot(Coord::new(0, c)).unwrap();
    }
    for c in 0..4 {
        assert_eq!(board.cell(Coord::new(1, c)), Some(Cell::SunkContour));
    }
    assert_eq!(board.cell(Coord::new(0, 3)), Some(Cell::SunkContour));
    assert_eq!(board.cell(Coord::new(0, 1)), Some(Cell::Hit));
    assert_eq!(board.cell(Coord::new(2, 0)), Some(Cell::Empty));
    assert_eq!(
        board.resolve_shot(Coord::new(1, 1)),
        Err(ShotError::AlreadyTargeted(Coord::new(1, 1)))
    );
}

#[test]
fn test_hidden_board_conceals_ships_only() {
    let mut board = board_with_cruiser();
    board.resolve_shot(Coord::new(0, 0)).unwrap();
    board.resolve_shot(Coord::new(4, 4)).unwrap();

    let visible = board.render_rows();
    assert_eq!(visible[0][1], Cell::Occupied);

    board.set_hidden(true);
    let rows = board.render_rows();
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|r| r.len() == 6));
    assert_eq!(rows[0][0], Cell::Hit);
    assert_eq!(rows[0][1], Cell::Empty);
    assert_eq!(rows[4][4], Cell::Miss);
    assert!(rows.iter().flatten().all(|&c| c != Cell::Occupied));
}

#[test]
fn test_reset_targeting_memory_keeps_reservations() {
    let mut board = board_with_cruiser();
    let reserved = *board.reserved();
    board.resolve_shot(Coord::new(5, 5)).unwrap();
    board.reset_targeting_memory();
    assert!(board.targeted().is_empty());
    assert_eq!(*board.reserved(), reserved);
    assert!(board
        .place_ship(Ship::new(Coord::new(1, 1), 1, Orientation::Horizontal))
        .is_err());
}

#[test]
fn test_empty_board_is_never_defeated() {
    let board = Board::<6>::new();
    assert!(!board.is_defeated());
    assert!(!board.is_out_of_bounds(Coord::new(5, 0)));
    assert!(board.is_out_of_bounds(Coord::new(0, 6)));
    assert_eq!(board.size(), 6);
}

#[test]
fn test_zero_length_ship_is_wrong() {
    let mut board = Board::<6>::new();
    let before = board.clone();
    assert_eq!(
        board.place_ship(Ship::new(Coord::new(2, 2), 0, Orientation::Horizontal)),
        Err(WrongPlacement {
            cell: Coord::new(2, 2)
        })
    );
    assert_eq!(board, before);
    assert!(!board.is_defeated());
}

#[test]
fn test_ship_longer_than_the_board_is_wrong() {
    let mut board = Board::<6>::new();
    let before = board.clone();
    for length in [7, 1 << 32, usize::MAX] {
        let err = board
            .place_ship(Ship::new(Coord::new(0, 0), length, Orientation::Horizontal))
            .unwrap_err();
        assert_eq!(err.cell, Coord::new(0, 0));
    }
    assert_eq!(board, before);
    assert!(board
        .place_ship(Ship::new(Coord::new(0, 0), 6, Orientation::Horizontal))
        .is_ok());
}
