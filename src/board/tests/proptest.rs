//! Property-based tests using proptest.

use crate::board::{
    Board, MoveList, Piece, Promotion, SimpleMove, Square, UnmakeInfo, WideMove,
};
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Strategy for any square on the board
fn square_strategy() -> impl Strategy<Value = Square> {
    (0u8..64).prop_map(|idx| Square::try_from(idx).expect("index below 64"))
}

/// Strategy for the captured field: empty, or any in-range type and color code
fn captured_strategy() -> impl Strategy<Value = Piece> {
    prop_oneof![
        Just(Piece::EMPTY),
        (0u8..8, 0u8..2).prop_map(|(kind, color)| {
            Piece::from_codes(kind, color).expect("codes within field width")
        }),
    ]
}

/// Play up to `num_moves` random side-to-move moves, returning the history.
fn random_playout(
    board: &mut Board,
    rng: &mut StdRng,
    num_moves: usize,
) -> Vec<(WideMove, UnmakeInfo)> {
    let mut history = Vec::new();
    let mut moves = MoveList::new();
    for _ in 0..num_moves {
        moves.clear();
        board.generate_side_moves(&mut moves);
        if moves.is_empty() {
            break;
        }
        let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
        let info = board.make_move(mv);
        history.push((mv, info));
    }
    history
}

proptest! {
    /// Property: make_move followed by unmake_move restores board state exactly
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::starting_position();
        let mut rng = StdRng::seed_from_u64(seed);

        let initial = board.fork();
        let initial_hash = board.hash_position();

        let mut history = random_playout(&mut board, &mut rng, num_moves);

        while let Some((mv, info)) = history.pop() {
            board.unmake_move(mv, info);
        }

        prop_assert_eq!(&board, &initial);
        prop_assert_eq!(board.turn(), initial.turn());
        prop_assert_eq!(board.hash_position(), initial_hash);
        prop_assert!(board.occupancy_consistent());
    }

    /// Property: the occupancy index matches the square array after every move
    #[test]
    fn prop_occupancy_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::starting_position();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut moves = MoveList::new();

        for _ in 0..num_moves {
            moves.clear();
            board.generate_side_moves(&mut moves);
            if moves.is_empty() {
                break;
            }
            let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
            board.make_move(mv);
            prop_assert!(board.occupancy_consistent());
            prop_assert!(board.piece_count() <= 32);
        }
    }

    /// Property: every generated move starts on an occupied square and never
    /// lands on a piece of its own color
    #[test]
    fn prop_generated_moves_well_formed(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::starting_position();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, &mut rng, num_moves);

        let mut moves = MoveList::new();
        board.generate_moves(&mut moves);
        for mv in &moves {
            let piece = board.get(mv.source());
            prop_assert!(!piece.is_empty());
            prop_assert!(!board.is_piece_of_color(mv.destination(), piece.color()));
            if !mv.is_en_passant() {
                prop_assert_eq!(mv.captured(), board.get(mv.destination()));
            }
        }
    }

    /// Property: square index, file and rank agree
    #[test]
    fn prop_square_coordinates_round_trip(file in 0u8..8, rank in 0u8..8) {
        let sq = Square::at(file, rank);
        prop_assert_eq!(sq.file(), file);
        prop_assert_eq!(sq.rank(), rank);
        prop_assert_eq!(Square::from_index(sq.index()), Some(sq));
    }

    /// Property: every wide move field reads back what was packed
    #[test]
    fn prop_wide_move_fields_round_trip(
        from in square_strategy(),
        to in square_strategy(),
        promotion in prop::option::of(prop::sample::select(Promotion::ALL.to_vec())),
        captured in captured_strategy(),
        en_passant in any::<bool>(),
    ) {
        let mut mv = WideMove::new(from, to).with_capture(captured);
        if let Some(promotion) = promotion {
            mv = mv.with_promotion(promotion);
        }
        if en_passant {
            mv = mv.with_en_passant();
        }

        let decoded = WideMove::from_u64(mv.as_u64());
        prop_assert_eq!(decoded, mv);
        prop_assert_eq!(decoded.source(), from);
        prop_assert_eq!(decoded.destination(), to);
        prop_assert_eq!(decoded.promotion(), promotion);
        prop_assert_eq!(decoded.is_promotion(), promotion.is_some());
        prop_assert_eq!(decoded.captured(), captured);
        prop_assert_eq!(decoded.is_en_passant(), en_passant);
        prop_assert_eq!(decoded.as_u64() & ((1u64 << 37) - 1), 0);
        prop_assert_eq!(decoded.simple(), SimpleMove::new(from, to));
    }
}
