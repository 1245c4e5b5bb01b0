/// Side length of the grid.
pub const BOARD_SIZE: usize = 3;
/// Total number of cells.
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;
/// Number of winning lines: three rows, three columns, two diagonals.
pub const NUM_LINES: usize = 8;

/// Every winning line as `(row, col)` triples, scanned in this order by
/// winner detection: rows top to bottom, columns left to right, then the
/// main diagonal and the anti-diagonal.
pub const WIN_LINES: [[(usize, usize); BOARD_SIZE]; NUM_LINES] = [
    // rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Environment variable holding the log level for the binaries.
pub const LOG_ENV_VAR: &str = "TICTACTOE_LOG";
