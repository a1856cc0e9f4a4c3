#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use seabattle::{
        take_turn, Board, Coord, InteractivePlayer, Orientation, Player, PlayerError, Ship,
        ShotOutcome,
    };

    fn target_board() -> Board<6> {
        let mut board = Board::new();
        board
            .place_ship(Ship::new(Coord::new(0, 0), 2, Orientation::Horizontal))
            .unwrap();
        board
    }

    #[test]
    fn test_reprompts_until_valid_shot() {
        let input = Cursor::new("hello\n1\nx 2\n7 1\n1 1\n");
        let mut player = InteractivePlayer::new(input, Vec::new());
        let mut rng = SmallRng::seed_from_u64(1);
        let mut board = target_board();

        let shot = take_turn(&mut player, &mut rng, &mut board).unwrap();
        assert_eq!(shot.target, Coord::new(0, 0));
        assert_eq!(shot.outcome, ShotOutcome::Hit);
        assert!(shot.repeat());

        let text = String::from_utf8(player.into_output()).unwrap();
        assert_eq!(text.matches("Your shot (row col): ").count(), 5);
        assert!(text.contains("got 1"));
        assert!(text.contains("row and column must be numbers"));
        assert!(text.contains("7 1 is off the board, try again."));
    }

    #[test]
    fn test_already_targeted_is_reported() {
        let input = Cursor::new("2 2\n2 2\n1 2\n");
        let mut player = InteractivePlayer::new(input, Vec::new());
        let mut rng = SmallRng::seed_from_u64(1);
        let mut board = target_board();

        let miss = take_turn(&mut player, &mut rng, &mut board).unwrap();
        assert_eq!(miss.outcome, ShotOutcome::Miss);
        let hit = take_turn(&mut player, &mut rng, &mut board).unwrap();
        assert_eq!(hit.target, Coord::new(0, 1));

        let text = String::from_utf8(player.into_output()).unwrap();
        assert!(text.contains("2 2 has already been fired at"));
    }

    #[test]
    fn test_end_of_input_stops_the_player() {
        let mut player = InteractivePlayer::new(Cursor::new("oops\n"), Vec::new());
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(
            player.choose_target(&mut rng, 6),
            Err(PlayerError::InputClosed)
        );
    }
}
