//! Scoring module - line-clear rewards and the gravity curve
//!
//! The line-clear reward is quadratic in the number of rows cleared at once
//! (100 * n * n), so a Tetris pays 4x what four singles would. Drop bonuses
//! are per cell: +1 soft, +2 hard. The drop interval is a pure function of
//! cumulative lines cleared.

use crate::types::{
    BASE_DROP_MS, DROP_MS_FLOOR, DROP_MS_PER_LINE, HARD_DROP_POINTS_PER_CELL,
    LINE_CLEAR_BASE_POINTS, SOFT_DROP_POINTS,
};

/// Points for clearing `lines` rows in a single lock.
///
/// 1 -> 100, 2 -> 400, 3 -> 900, 4 -> 1600.
pub fn line_clear_score(lines: usize) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    let n = lines as u32;
    LINE_CLEAR_BASE_POINTS * n * n
}

/// Points for dropped cells: +1 per soft-drop cell, +2 per hard-drop cell.
pub fn drop_score(cells: u32, hard: bool) -> u32 {
    if hard {
        cells * HARD_DROP_POINTS_PER_CELL
    } else {
        cells * SOFT_DROP_POINTS
    }
}

/// Automatic drop interval after `total_lines` cumulative clears.
///
/// Starts at 1000ms, loses 10ms per line, floored at 100ms. Recomputed after
/// every lock so the interval never depends on anything but the line count.
pub fn drop_interval_ms(total_lines: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(total_lines.saturating_mul(DROP_MS_PER_LINE))
        .max(DROP_MS_FLOOR)
}
