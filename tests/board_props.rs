use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use tictactoe::{Board, BoardError, Cell, BOARD_SIZE};

/// Decode `n` in `0..3^9` as a base-3 grid, first digit at (0, 0).
fn board_from_index(mut n: u32) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
    let mut rows = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for row in rows.iter_mut() {
        for cell in row.iter_mut() {
            *cell = Cell::try_from((n % 3) as u8).unwrap();
            n /= 3;
        }
    }
    rows
}

/// Straightforward cell-by-cell reading of the two validity rules.
fn reference_valid(rows: &[[Cell; BOARD_SIZE]; BOARD_SIZE]) -> bool {
    let count = |p: Cell| rows.iter().flatten().filter(|&&c| c == p).count();
    let wins = |p: Cell| {
        let row = (0..3).any(|r| (0..3).all(|c| rows[r][c] == p));
        let col = (0..3).any(|c| (0..3).all(|r| rows[r][c] == p));
        let diag = (0..3).all(|i| rows[i][i] == p);
        let anti = (0..3).all(|i| rows[i][2 - i] == p);
        row || col || diag || anti
    };
    let (xs, os) = (count(Cell::X), count(Cell::O));
    (xs == os || xs == os + 1) && !(wins(Cell::X) && wins(Cell::O))
}

#[test]
fn every_filling_matches_reference() {
    let mut valid = 0;
    for n in 0..3u32.pow(9) {
        let rows = board_from_index(n);
        let board = Board::from_rows(rows);
        assert_eq!(board.rows(), rows);
        let ok = board.is_valid_board();
        assert_eq!(ok, reference_valid(&rows), "board {:?}", board);
        if ok {
            valid += 1;
        }
        if let Some(winner) = board.winning_player() {
            assert!(winner.is_player());
        }
    }
    assert!(valid > 0 && valid < 3u32.pow(9));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn randomized_board_is_deterministic(seed in any::<u64>()) {
        let a = Board::randomized(&mut SmallRng::seed_from_u64(seed));
        let b = Board::randomized(&mut SmallRng::seed_from_u64(seed));
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.render(), b.render());
        let (xs, os) = a.counts();
        prop_assert!(xs + os <= 9);
        prop_assert_eq!(a.empty_positions().count(), 9 - xs - os);
    }

    #[test]
    fn place_roundtrip(row in 0..3isize, col in 0..3isize, is_x in any::<bool>()) {
        let player = if is_x { Cell::X } else { Cell::O };
        let mut board = Board::new();
        board.place(row, col, player).unwrap();
        prop_assert_eq!(board.position(row, col).unwrap(), player);
        let after = board;
        let err = board.place(row, col, player.opponent()).unwrap_err();
        prop_assert_eq!(err, BoardError::CellOccupied { row: row as usize, col: col as usize });
        prop_assert_eq!(board, after);
    }

    #[test]
    fn failed_place_leaves_board_unchanged(seed in any::<u64>(), row in -5..8isize, col in -5..8isize) {
        let mut board = Board::randomized(&mut SmallRng::seed_from_u64(seed));
        let before = board;
        if board.place(row, col, Cell::X).is_err() {
            prop_assert_eq!(board, before);
        } else {
            prop_assert_eq!(before.position(row, col).unwrap(), Cell::Empty);
        }
    }

    #[test]
    fn out_of_range_rejected(row in any::<isize>(), col in any::<isize>()) {
        prop_assume!(!(0..3).contains(&row) || !(0..3).contains(&col));
        let mut board = Board::new();
        prop_assert_eq!(board.position(row, col).unwrap_err(), BoardError::OutOfRange { row, col });
        prop_assert_eq!(board.place(row, col, Cell::O).unwrap_err(), BoardError::OutOfRange { row, col });
    }
}
