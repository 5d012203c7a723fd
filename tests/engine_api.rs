//! End-to-end checks of the public engine surface
//!
//! Drives whole games through the same calls an external caller would make:
//! - every generated move is legal and round-trips through `is_move_valid`
//! - piece counts never grow and crowning only happens on the far row
//! - each variant reaches a decision or keeps playing without panicking

use checkers_engine::game_repr::{
    all_valid_moves, check_game_status, count_kings, count_pieces, create_initial_board, execute_move,
    is_move_valid, valid_moves_for_piece, Board, GameStatus, Player, Position, RuleSet, Variant,
};
use checkers_engine::{get_ai_move, Difficulty};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const MAX_PLIES: usize = 300;

fn random_game(rules: &RuleSet, seed: u64) -> (Board, Player, GameStatus, usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = create_initial_board();
    let mut to_move = Player::Red;
    let mut plies = 0;

    loop {
        let status = check_game_status(&board, to_move, rules);
        if status.is_over() || plies == MAX_PLIES {
            return (board, to_move, status, plies);
        }

        let moves = all_valid_moves(&board, to_move, rules);
        let mv = moves.choose(&mut rng).cloned().expect("playing side has moves");

        assert_eq!(
            is_move_valid(&board, mv.from, mv.to, to_move, rules).map(|m| (m.from, m.to)),
            Some((mv.from, mv.to))
        );

        let before = count_pieces(&board);
        let next = execute_move(&board, &mv);
        let after = count_pieces(&next);

        assert_eq!(after.of(to_move), before.of(to_move));
        assert_eq!(after.of(to_move.opposite()), before.of(to_move.opposite()) - mv.captures.len());
        assert!(next.is_empty_at(mv.from) || mv.from == mv.to);

        let moved = next.piece_at(mv.to).expect("piece lands on destination");
        let was = board.piece_at(mv.from).expect("piece starts on origin");
        if moved.is_king() && !was.is_king() {
            assert_eq!(mv.to.row, to_move.promotion_row());
        }

        board = next;
        to_move = to_move.opposite();
        plies += 1;
    }
}

#[test]
fn test_random_games_stay_legal_in_every_variant() {
    for variant in Variant::ALL {
        let rules = variant.rules();
        for seed in 0..8 {
            let (board, to_move, status, plies) = random_game(&rules, seed);
            assert_ne!(status, GameStatus::Draw);
            if status.is_over() {
                let stuck = all_valid_moves(&board, to_move, &rules).is_empty();
                let wiped = count_pieces(&board).of(to_move) == 0;
                assert!(stuck || wiped, "{variant} seed {seed} ended with moves left");
            } else {
                assert_eq!(plies, MAX_PLIES);
            }
        }
    }
}

#[test]
fn test_piece_moves_are_subset_of_side_moves() {
    for variant in Variant::ALL {
        let rules = variant.rules();
        let (board, to_move, status, _) = random_game(&rules, 3);
        if status.is_over() {
            continue;
        }
        let all = all_valid_moves(&board, to_move, &rules);
        for (pos, _) in board.pieces_of(to_move) {
            for mv in valid_moves_for_piece(&board, pos, &rules) {
                assert!(all.contains(&mv), "{variant}: {mv} missing from side moves");
            }
        }
    }
}

#[test]
fn test_ai_plays_only_legal_moves() {
    let rules = RuleSet::brazilian();
    let mut board = Board::initial();
    let mut to_move = Player::Red;

    for _ in 0..10 {
        if check_game_status(&board, to_move, &rules).is_over() {
            break;
        }
        let legal = all_valid_moves(&board, to_move, &rules);
        let mv = get_ai_move(&board, to_move, Difficulty::Medium, &rules).expect("side has moves");
        assert!(legal.contains(&mv));
        board = board.execute_move(&mv);
        to_move = to_move.opposite();
    }
}

#[test]
fn test_opening_position_through_public_api() {
    let board = create_initial_board();
    let counts = count_pieces(&board);
    assert_eq!((counts.red, counts.black), (12, 12));
    assert_eq!(count_kings(&board).red, 0);
    assert_eq!(check_game_status(&board, Player::Red, &RuleSet::suicide()), GameStatus::Playing);

    let from = Position::new(5, 0);
    assert!(is_move_valid(&board, from, Position::new(4, 1), Player::Red, &RuleSet::american()).is_some());
    assert!(is_move_valid(&board, from, Position::new(4, 1), Player::Black, &RuleSet::american()).is_none());
    assert!(is_move_valid(&board, from, Position::new(3, 2), Player::Red, &RuleSet::american()).is_none());
}
