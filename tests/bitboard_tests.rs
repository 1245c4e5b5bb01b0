use tictactoe::{BitBoard, BitBoardError, BOARD_SIZE, WIN_LINES};

type BB = BitBoard<u16, BOARD_SIZE>;

#[test]
fn test_get_set() {
    let mut bb = BB::new();
    assert!(bb.is_empty());

    bb.set(1, 2).unwrap();
    assert!(bb.get(1, 2).unwrap());
    assert!(!bb.get(2, 1).unwrap());
    assert_eq!(bb.count_ones(), 1);
}

#[test]
fn test_index_out_of_bounds() {
    let mut bb = BB::new();
    assert_eq!(
        bb.set(3, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 3, col: 0 }
    );
    assert!(bb.get(0, 3).is_err());
}

#[test]
fn test_covers_lines() {
    let mut bb = BB::new();
    for &(r, c) in &WIN_LINES[4] {
        bb.set(r, c).unwrap();
    }
    assert!(bb.covers(&WIN_LINES[4]));
    assert!(!bb.covers(&WIN_LINES[0]));
    // off-board coordinates never count as covered
    assert!(!bb.covers(&[(1, 1), (3, 3)]));
}

#[test]
fn test_not_stays_within_board() {
    let full = !BB::new();
    assert!(full.is_full());
    assert_eq!(full.count_ones(), 9);
    assert_eq!(full.into_raw(), 0b1_1111_1111);
}

#[test]
fn test_iter_set_bits_row_major() {
    let bb = BB::from_raw(0b1_0001_0010);
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (1, 1), (2, 2)]);
}

#[test]
fn test_and_or() {
    let a = BB::from_raw(0b011);
    let b = BB::from_raw(0b110);
    assert_eq!((a & b).into_raw(), 0b010);
    assert_eq!((a | b).into_raw(), 0b111);
}
