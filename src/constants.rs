//! Default tuning for the tube field.
//!
//! The defaults describe an 84x48 monochrome panel driven at 20 frames per
//! second. Every value can be overridden through `GameConfig`.

// Frame timing
pub const TICK_INTERVAL_MS: u64 = 50;
pub const GAME_OVER_HOLD_MS: u64 = 2000;
pub const TITLE_POLL_MS: u64 = 100;

// Field bounds
pub const FIELD_WIDTH: i32 = 84;
pub const FIELD_HEIGHT: i32 = 48;
/// Entity positions stay in `[EDGE_MIN, size - EDGE_INSET]` on both axes.
pub const EDGE_MIN: f64 = 1.0;
pub const EDGE_INSET: f64 = 3.0;

// Tubes
pub const TUBE_WIDTH: f64 = 5.0;
pub const TUBE_SPEED: f64 = 1.5;
/// Distance the rightmost tube must travel into the field before the next spawn.
pub const TUBE_INTERVAL: f64 = 20.0;
/// Spawn distance beyond the right edge of the field.
pub const TUBE_LEAD_IN: f64 = 10.0;
/// Rows between the top of the lower pillar and the bottom of the upper pillar, plus one.
pub const GAP_MARGIN: i32 = 16;
pub const MIN_GAP_HEIGHT: i32 = 10;
pub const INITIAL_GAP_HEIGHTS: [i32; 4] = [20, 25, 15, 30];
/// Offsets past the right edge for the tubes present when a round starts.
pub const INITIAL_TUBE_OFFSETS: [f64; 3] = [10.0, 30.0, 50.0];

// Entity
pub const START_X: f64 = 42.0;
pub const START_Y: f64 = 24.0;

// Score box drawn over the top-left corner
pub const SCORE_BOX_WIDTH: i32 = 48;
pub const SCORE_BOX_HEIGHT: i32 = 9;
pub const SCORE_LABEL: &str = "Score: ";
pub const SCORE_DIGITS_X: i32 = 36;

// Files under ~/.tubes/
pub const DATA_DIR_NAME: &str = ".tubes";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "tubes.log";
pub const LOG_ENV_VAR: &str = "TUBES_LOG";
