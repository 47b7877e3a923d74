#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use broadside::ui::{render_ocean, render_tracking};
    use broadside::{
        parse_coord, parse_orientation, validate_placement, Board, CliPlayer, Console,
        Coordinate, GameConfig, Orientation, Player, PlayerId, Session, Shot, ShipId,
    };
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        let (_, out) = console.into_inner();
        String::from_utf8(out).expect("non utf8 output")
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("A1", 10), Some(Coordinate::new(0, 0)));
        assert_eq!(parse_coord(" j10 ", 10), Some(Coordinate::new(9, 9)));
        assert_eq!(parse_coord("c7", 10), Some(Coordinate::new(2, 6)));
        assert_eq!(parse_coord("K1", 10), None);
        assert_eq!(parse_coord("A11", 10), None);
        assert_eq!(parse_coord("A0", 10), None);
        assert_eq!(parse_coord("A", 10), None);
        assert_eq!(parse_coord("5A", 10), None);
        assert_eq!(parse_coord("A+5", 10), None);
        assert_eq!(parse_coord("", 10), None);
        assert_eq!(parse_coord("L12", 12), Some(Coordinate::new(11, 11)));
    }

    #[test]
    fn test_parse_orientation() {
        assert_eq!(parse_orientation("h"), Some(Orientation::Horizontal));
        assert_eq!(parse_orientation("V"), Some(Orientation::Vertical));
        assert_eq!(parse_orientation("vertical"), Some(Orientation::Vertical));
        assert_eq!(parse_orientation("d"), None);
    }

    #[test]
    fn test_ship_count_prompt() {
        let mut c = console("0\nseven\n3\n");
        assert_eq!(c.ship_count().unwrap(), 3);
        let out = output_of(c);
        assert_eq!(out.matches("Invalid number. Try again.").count(), 2);
        assert!(out.contains("Enter number of ships (1-5): "));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut c = console("");
        assert!(c.ship_count().is_err());
    }

    #[test]
    fn test_render_boards() {
        let mut board = Board::new(5);
        board.place_ship(ShipId(2), &[Coordinate::new(0, 0), Coordinate::new(1, 0)]);
        board.attack(Coordinate::new(1, 0)).unwrap();
        board.attack(Coordinate::new(4, 4)).unwrap();
        assert_eq!(
            render_ocean(&board),
            "   A B C D E\n 1 2 X ~ ~ ~\n 2 ~ ~ ~ ~ ~\n 3 ~ ~ ~ ~ ~\n 4 ~ ~ ~ ~ ~\n 5 ~ ~ ~ ~ O\n"
        );
        let mut tracking = Board::new(5);
        tracking.record(Coordinate::new(1, 0), Shot::Hit(ShipId(2)));
        assert!(render_tracking(&tracking).contains(" 1 ~ X ~ ~ ~\n"));
        // ship positions stay hidden in the tracking view
        assert!(render_tracking(&board).contains(" 1 ~ X ~ ~ ~\n"));
    }

    #[test]
    fn test_random_placement_on_empty_line() {
        let mut rng = SmallRng::seed_from_u64(12345);
        let (mut one, _two) = CliPlayer::pair(console("\n"));
        let board = Board::new(10);
        let p = one.choose_placement(&mut rng, &board, ShipId(4), 4).unwrap();
        assert!(validate_placement(&board, p.origin, 4, p.orientation).is_ok());
    }

    #[test]
    fn test_hot_seat_game() {
        let input = [
            // player one: S1, then S2 with a bad coordinate and a bad orientation
            "A1", "Z9 H", "A2", "X", "V",
            // player two
            "c3 h", "E5 v",
            // play; player one repeats C3 once
            "C3", "J10", "C3", "E5", "J9", "E6",
        ]
        .join("\n")
            + "\n";
        let mut rng = SmallRng::seed_from_u64(1);
        let (mut one, mut two) = CliPlayer::pair(console(&input));
        assert_eq!(one.seat(), PlayerId::One);
        assert_eq!(two.seat(), PlayerId::Two);

        let mut session = Session::new(GameConfig::with_ships(2).unwrap());
        let winner = session.run(&mut rng, &mut one, &mut two).unwrap();
        assert_eq!(winner, PlayerId::One);

        drop(two);
        let out = output_of(one.into_console().expect("console still shared"));
        assert!(out.contains("Player 1, place your ships."));
        assert!(out.contains("Player 2, place your ships."));
        assert!(out.contains("Invalid coordinates. Try again."));
        assert!(out.contains("Invalid orientation. Try again."));
        assert!(out.contains("You sunk the opponent's S1!"));
        assert!(out.contains("You've already fired at this location. Try again."));
        assert_eq!(out.matches("It's a miss.").count(), 2);
        assert_eq!(out.matches("It's a hit!").count(), 3);
        assert!(out.contains("You sunk the opponent's S2!"));
        assert_eq!(out.matches("Player 1 wins!").count(), 1);
        assert!(!out.contains("Player 2 wins!"));
    }
}
