/// Game of Life grid dimensions (50x95 = 4750 cells)
pub const LIFE_ROWS: usize = 50;
pub const LIFE_COLS: usize = 95;

/// Rule 30 grid dimensions (45 generations of 85 cells)
pub const RULE30_ROWS: usize = 45;
pub const RULE30_COLS: usize = 85;

/// Probability that a cell starts alive when the Life grid is randomized
pub const LIFE_ALIVE_PROBABILITY: f64 = 0.3;

/// Probability that a cell of the Rule 30 seed row is alive in random mode
pub const RULE30_ALIVE_PROBABILITY: f64 = 0.5;

// ============================================
// Terminal front-end
// ============================================

/// Delay between generations while the Life session is running
pub const TICK_INTERVAL_MS: u64 = 100;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Character printed for a live cell
pub const ALIVE_GLYPH: char = '#';

/// Character printed for a dead cell
pub const DEAD_GLYPH: char = '.';

/// How often the generation rate is logged while Life runs
pub const RATE_LOG_INTERVAL_MS: u64 = 1000;
