//! Edge case tests: board borders, promotions and unassigned piece codes.

use super::moves_from;
use crate::board::{Board, BoardBuilder, Color, MoveList, Piece, PieceKind, Promotion, Square};

#[test]
fn test_promotion_emits_all_four_pieces() {
    let board = BoardBuilder::new()
        .piece(Square::at(0, 6), PieceKind::Pawn, Color::White)
        .build();
    let moves = moves_from(&board, Square::at(0, 6));

    let promotions: Vec<Option<Promotion>> = moves.iter().map(|m| m.promotion()).collect();
    assert_eq!(
        promotions,
        vec![
            Some(Promotion::Queen),
            Some(Promotion::Rook),
            Some(Promotion::Bishop),
            Some(Promotion::Knight),
        ]
    );
    assert!(moves.iter().all(|m| m.destination() == Square::at(0, 7)));
}

#[test]
fn test_black_promotion_rank() {
    let board = BoardBuilder::new()
        .piece(Square::at(3, 1), PieceKind::Pawn, Color::Black)
        .piece(Square::at(4, 0), PieceKind::Knight, Color::White)
        .build();
    let moves = moves_from(&board, Square::at(3, 1));
    assert_eq!(moves.len(), 8);
    assert!(moves.iter().all(|m| m.is_promotion()));
    assert_eq!(moves.iter().filter(|m| m.is_capture()).count(), 4);
}

#[test]
fn test_pawn_on_last_rank_has_no_moves() {
    let mut board = Board::new();
    board.set(Square::at(2, 7), Piece::new(PieceKind::Pawn, Color::White));
    board.set(Square::at(5, 0), Piece::new(PieceKind::Pawn, Color::Black));
    let mut moves = MoveList::new();
    board.generate_moves(&mut moves);
    assert!(moves.is_empty());
}

#[test]
fn test_edge_pawn_captures_do_not_wrap() {
    let board = BoardBuilder::new()
        .piece(Square::at(7, 2), PieceKind::Pawn, Color::White)
        .piece(Square::at(0, 4), PieceKind::Rook, Color::Black)
        .piece(Square::at(6, 3), PieceKind::Rook, Color::Black)
        .build();
    let moves = moves_from(&board, Square::at(7, 2));
    assert_eq!(moves.len(), 2);
    assert!(moves.find(Square::at(7, 2), Square::at(6, 3)).is_some());
    assert!(moves.find(Square::at(7, 2), Square::at(7, 3)).is_some());
}

#[test]
fn test_knight_on_h_file_does_not_wrap() {
    let board = BoardBuilder::new()
        .piece(Square::at(7, 3), PieceKind::Knight, Color::Black)
        .build();
    let moves = moves_from(&board, Square::at(7, 3));
    assert_eq!(moves.len(), 4);
    assert!(moves.iter().all(|m| m.destination().file() >= 5));
}

#[test]
fn test_king_in_corner() {
    let board = BoardBuilder::new()
        .piece(Square::at(7, 7), PieceKind::King, Color::Black)
        .build();
    assert_eq!(moves_from(&board, Square::at(7, 7)).len(), 3);
}

#[test]
fn test_empty_and_unknown_pieces_generate_nothing() {
    let mut board = Board::new();
    let mut moves = MoveList::new();
    board.generate_moves(&mut moves);
    assert!(moves.is_empty());

    // Type code 111 is unassigned.
    let unknown = Piece::from_codes(7, 1).expect("in range codes");
    assert!(unknown.kind().is_none());
    board.set(Square::at(3, 3), unknown);
    board.generate_moves(&mut moves);
    assert!(moves.is_empty());

    board.generate_piece_moves(Square::at(4, 4), Piece::EMPTY, &mut moves);
    assert!(moves.is_empty());
}

#[test]
fn test_blocked_starting_position_sliders() {
    let board = Board::starting_position();
    for file in [0, 2, 3, 5, 7] {
        assert!(moves_from(&board, Square::at(file, 0)).is_empty());
        assert!(moves_from(&board, Square::at(file, 7)).is_empty());
    }
}

#[test]
fn test_ray_includes_adjacent_enemy_only() {
    let board = BoardBuilder::new()
        .piece(Square::at(3, 3), PieceKind::Queen, Color::White)
        .piece(Square::at(4, 4), PieceKind::Pawn, Color::Black)
        .piece(Square::at(5, 5), PieceKind::Pawn, Color::Black)
        .build();
    let moves = moves_from(&board, Square::at(3, 3));
    assert!(moves.find(Square::at(3, 3), Square::at(4, 4)).is_some());
    assert!(moves.find(Square::at(3, 3), Square::at(5, 5)).is_none());
}
