pub const BOARD_SIZE: usize = 3;

/// Every Nth computer move ignores win/block opportunities and plays a
/// uniformly random empty cell.
pub const RANDOM_MOVE_INTERVAL: u32 = 5;

/// Pause the interactive driver takes before each computer move.
pub const DEFAULT_AI_DELAY_MS: u64 = 2000;

/// Environment variable read by `init_logging`.
pub const LOG_ENV_VAR: &str = "TICTACTOE_LOG";

/// The eight winning lines as row-major bit masks over a 3×3 board
/// (bit index `row * 3 + col`): three rows, three columns, two diagonals.
pub const WIN_LINE_MASKS: [u16; 8] = [
    0b000_000_111,
    0b000_111_000,
    0b111_000_000,
    0b001_001_001,
    0b010_010_010,
    0b100_100_100,
    0b100_010_001,
    0b001_010_100,
];
