use plum_xiangqi::errors::MoveError;
use plum_xiangqi::game::xiangqi_game::XiangqiGame;
use plum_xiangqi::game_state::board_state::Placement;
use plum_xiangqi::game_state::xiangqi_types::{Color, GameState, Move, PieceKind, Position};

fn game(side_to_move: Color, placements: &[Placement]) -> XiangqiGame {
    XiangqiGame::from_placements(side_to_move, placements).expect("fixture should validate")
}

fn with_generals(extra: &[Placement]) -> Vec<Placement> {
    let mut placements = vec![
        (PieceKind::General, Color::Red, Position::new(0, 4)),
        (PieceKind::General, Color::Black, Position::new(9, 3)),
    ];
    placements.extend_from_slice(extra);
    placements
}

fn destinations_from(game: &XiangqiGame, from: Position) -> Vec<Position> {
    game.legal_moves()
        .into_iter()
        .filter(|mv| mv.from == from)
        .map(|mv| mv.to)
        .collect()
}

#[test]
fn soldier_never_moves_backward() {
    let red_home = Position::new(3, 2);
    let red_crossed = Position::new(6, 6);
    let black_home = Position::new(6, 0);
    let black_crossed = Position::new(2, 8);
    let placements = with_generals(&[
        (PieceKind::Soldier, Color::Red, red_home),
        (PieceKind::Soldier, Color::Red, red_crossed),
        (PieceKind::Soldier, Color::Black, black_home),
        (PieceKind::Soldier, Color::Black, black_crossed),
    ]);

    let red_game = game(Color::Red, &placements);
    assert_eq!(destinations_from(&red_game, red_home), vec![Position::new(4, 2)]);
    let crossed = destinations_from(&red_game, red_crossed);
    assert_eq!(crossed.len(), 3);
    assert!(crossed.iter().all(|to| to.row() >= red_crossed.row()));

    let black_game = game(Color::Black, &placements);
    assert_eq!(destinations_from(&black_game, black_home), vec![Position::new(5, 0)]);
    let crossed = destinations_from(&black_game, black_crossed);
    assert_eq!(crossed.len(), 2);
    assert!(crossed.iter().all(|to| to.row() <= black_crossed.row()));

    let mut red_game = red_game;
    assert_eq!(
        red_game.make_move(red_crossed, Position::new(5, 6)),
        Err(MoveError::ShapeViolation)
    );
    assert_eq!(
        red_game.make_move(red_home, Position::new(3, 3)),
        Err(MoveError::ShapeViolation)
    );
}

#[test]
fn elephant_eye_blocks_even_a_capture() {
    let elephant = Position::new(0, 2);
    let target = Position::new(2, 4);
    let eye = Position::new(1, 3);
    let free = with_generals(&[
        (PieceKind::Elephant, Color::Red, elephant),
        (PieceKind::Horse, Color::Black, target),
    ]);
    let mut blocked = free.clone();
    blocked.push((PieceKind::Horse, Color::Red, eye));

    let mut blocked_game = game(Color::Red, &blocked);
    assert_eq!(blocked_game.make_move(elephant, target), Err(MoveError::ShapeViolation));

    let mut free_game = game(Color::Red, &free);
    assert_eq!(free_game.make_move(elephant, target), Ok(GameState::InProgress));
    assert_eq!(free_game.captured(Color::Black), vec![PieceKind::Horse]);
}

#[test]
fn elephant_cannot_cross_the_river() {
    let elephant = Position::new(4, 2);
    let mut g = game(Color::Red, &with_generals(&[(PieceKind::Elephant, Color::Red, elephant)]));
    assert_eq!(g.make_move(elephant, Position::new(6, 4)), Err(MoveError::ShapeViolation));
    assert!(destinations_from(&g, elephant).iter().all(|to| to.row() <= 4));
}

#[test]
fn cannon_capture_needs_exactly_one_screen() {
    let cannon = Position::new(4, 0);
    let target = Position::new(4, 8);
    let base = with_generals(&[
        (PieceKind::Cannon, Color::Red, cannon),
        (PieceKind::Chariot, Color::Black, target),
    ]);

    let mut no_screen = game(Color::Red, &base);
    assert_eq!(no_screen.make_move(cannon, target), Err(MoveError::ShapeViolation));

    let mut one = base.clone();
    one.push((PieceKind::Soldier, Color::Red, Position::new(4, 4)));
    let mut one_screen = game(Color::Red, &one);
    assert_eq!(
        one_screen.make_move(cannon, Position::new(4, 6)),
        Err(MoveError::ShapeViolation),
        "a non-capturing slide may not pass a piece"
    );
    assert_eq!(one_screen.make_move(cannon, target), Ok(GameState::InProgress));

    let mut two = one.clone();
    two.push((PieceKind::Soldier, Color::Red, Position::new(4, 6)));
    let mut two_screens = game(Color::Red, &two);
    assert_eq!(two_screens.make_move(cannon, target), Err(MoveError::ShapeViolation));
}

#[test]
fn general_and_advisor_stay_in_the_palace() {
    let general = Position::new(2, 3);
    let advisor = Position::new(1, 4);
    let placements = vec![
        (PieceKind::General, Color::Red, general),
        (PieceKind::Advisor, Color::Red, advisor),
        (PieceKind::General, Color::Black, Position::new(9, 5)),
    ];
    let mut g = game(Color::Red, &placements);

    assert_eq!(g.make_move(general, Position::new(3, 3)), Err(MoveError::ShapeViolation));
    assert_eq!(g.make_move(general, Position::new(2, 2)), Err(MoveError::ShapeViolation));
    assert_eq!(g.make_move(general, Position::new(1, 4)), Err(MoveError::FriendlyCapture));

    let advisor_moves = destinations_from(&g, advisor);
    assert_eq!(advisor_moves.len(), 3);
    assert!(advisor_moves.iter().all(|to| to.row() <= 2 && (3..=5).contains(&to.col())));
}

#[test]
fn horse_leg_blocks_the_jump() {
    let horse = Position::new(0, 1);
    let g = game(Color::Red, &{
        let mut p = with_generals(&[(PieceKind::Horse, Color::Red, horse)]);
        p.push((PieceKind::Soldier, Color::Red, Position::new(3, 0)));
        p
    });
    let open = destinations_from(&g, horse);
    assert!(open.contains(&Position::new(2, 2)));
    assert!(open.contains(&Position::new(2, 0)));

    let mut placements = with_generals(&[(PieceKind::Horse, Color::Red, horse)]);
    placements.push((PieceKind::Advisor, Color::Red, Position::new(1, 3)));
    placements.push((PieceKind::Elephant, Color::Red, Position::new(2, 0)));
    placements.push((PieceKind::Chariot, Color::Red, Position::new(1, 1)));
    let mut blocked = game(Color::Red, &placements);
    assert_eq!(blocked.make_move(horse, Position::new(2, 2)), Err(MoveError::ShapeViolation));
    assert_eq!(blocked.make_move(horse, Position::new(1, 3)), Err(MoveError::FriendlyCapture));
}

#[test]
fn rejection_leaves_snapshot_flags_and_turn_untouched() {
    // Black is in check from the red chariot and can only answer by blocking
    // on (7,3) with the horse from (6,5); every bad request must leave that
    // state exactly as it was.
    let placements = with_generals(&[
        (PieceKind::Chariot, Color::Red, Position::new(6, 3)),
        (PieceKind::Horse, Color::Black, Position::new(7, 7)),
        (PieceKind::Horse, Color::Black, Position::new(6, 5)),
    ]);
    let mut g = game(Color::Black, &placements);
    assert_eq!(g.game_state(), GameState::InProgress);
    assert!(g.is_in_check(Color::Black));
    assert!(g.legal_moves().contains(&Move::new(Position::new(6, 5), Position::new(7, 3))));

    let snapshot = g.board_snapshot();
    let requests = [
        (Position::new(10, 0), Position::new(0, 0), MoveError::OutOfBounds),
        (Position::new(5, 5), Position::new(4, 5), MoveError::EmptySource),
        (Position::new(9, 3), Position::new(9, 3), MoveError::NoOpMove),
        (Position::new(6, 3), Position::new(5, 3), MoveError::WrongOwner),
        (Position::new(7, 7), Position::new(5, 5), MoveError::ShapeViolation),
        (Position::new(7, 7), Position::new(5, 6), MoveError::SelfCheckExposure),
        (Position::new(9, 3), Position::new(9, 4), MoveError::IllegalGeneralsSight),
    ];
    for (from, to, expected) in requests {
        assert_eq!(g.make_move(from, to), Err(expected), "{from} -> {to}");
        assert_eq!(g.board_snapshot(), snapshot);
        assert!(g.is_in_check(Color::Black));
        assert!(!g.is_in_check(Color::Red));
        assert_eq!(g.side_to_move(), Color::Black);
        assert_eq!(g.game_state(), GameState::InProgress);
    }
}

#[test]
fn turn_flips_once_per_accepted_move() {
    let mut g = XiangqiGame::new();
    let plies = [("h3", "e3"), ("h10", "g8"), ("h1", "g3"), ("i10", "h10")];
    let mut expected = Color::Red;
    for (from, to) in plies {
        assert_eq!(g.side_to_move(), expected);
        assert_eq!(g.make_move_str(from, to), Ok(GameState::InProgress), "{from}{to}");
        expected = expected.opposite();
        assert_eq!(g.side_to_move(), expected);

        assert!(g.make_move_str(from, to).is_err());
        assert_eq!(g.side_to_move(), expected);
    }
}
