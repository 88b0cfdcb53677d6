use super::*;
use chess_core::{generate, Piece, Square};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn board(fen: &str) -> Board {
    Board::from_fen(fen).unwrap()
}

#[test]
fn test_startpos_is_balanced() {
    let b = Board::startpos();
    assert_eq!(evaluate(&b), 0);
    assert_eq!(phase_material(&b), 6200);
    assert!(!is_endgame(&b));
}

#[test]
fn test_material_and_positional_terms() {
    // Lone queen on a1; both kings on their home squares.
    let detail = evaluate_detailed(&board("4k3/8/8/8/8/8/8/Q3K3"));
    assert_eq!(detail.material, 900);
    assert!(detail.endgame);
    // Queen a1 is -20; the two kings cancel out.
    assert_eq!(detail.positional, -20);
    assert_eq!(detail.total(), 880);
}

#[test]
fn test_endgame_threshold_is_inclusive() {
    // Six rooks are exactly 3000.
    assert!(is_endgame(&board("rrr1k3/8/8/8/8/8/8/RRR1K3")));
    assert!(!is_endgame(&board("rrr1k3/8/8/8/8/8/8/RRRNK3")));
}

#[test]
fn test_king_centralizes_in_endgame() {
    // White king d4 (+40) against black king e8 (mirrored e1, -30).
    let b = board("4k3/8/8/8/3K4/8/8/8");
    assert_eq!(evaluate(&b), 70);
}

#[test]
fn test_king_stays_home_in_middlegame() {
    // Same kings, but enough material on the board to be a middlegame.
    let home = board("r2qk2r/8/8/8/8/8/8/R2QK1R1");
    let center = board("r2qk2r/8/8/8/3K4/8/8/R2Q2R1");
    assert!(!is_endgame(&home));
    assert!(evaluate(&home) > evaluate(&center));
}

#[test]
fn test_evaluation_is_color_symmetric() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..200 {
        let mut b = Board::startpos();
        let mut side = Color::White;
        for _ in 0..rng.gen_range(0..50) {
            let moves = generate(&b, side);
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };
            b = b.apply(mv);
            side = side.other();
        }
        assert_eq!(evaluate(&b.flipped()), -evaluate(&b), "asymmetric on {}", b.to_fen());
    }
}

#[test]
fn test_king_value_is_decisive_but_finite() {
    let without_black_king = board("8/8/8/8/8/8/8/4K3");
    let score = evaluate(&without_black_king);
    assert!(score > 19_000);
    assert!(score < i32::MAX / 2);
}

#[test]
fn test_piece_values_rise_with_kind() {
    for pair in PieceKind::ALL.windows(2) {
        assert!(piece_value(pair[0]) < piece_value(pair[1]), "{pair:?}");
    }
}

#[test]
fn test_lone_pieces_score_symmetrically() {
    let d4 = Square::parse("d4").unwrap();
    for kind in PieceKind::ALL {
        let mut white = Board::empty();
        white.set(d4, Some(Piece::new(Color::White, kind)));
        let mut black = Board::empty();
        black.set(d4.mirrored(), Some(Piece::new(Color::Black, kind)));

        assert!(evaluate(&white) > 0, "{kind:?}");
        assert_eq!(evaluate(&white), -evaluate(&black), "{kind:?}");
    }
}
