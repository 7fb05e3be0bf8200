//! Tick cadence for the counting animation.
//!
//! A round always counts up to the cycle number, so big cycle numbers mean
//! long rounds. The tick interval shrinks by one step for every full
//! bracket of 20 the cycle number sits above 1, floored so the highlight
//! stays readable. Total round duration stays bounded as a result.

use std::time::Duration;

/// Base tick interval: 1 second.
const BASE_TICK_MS: u64 = 1000;
/// Reduction per cycle-number bracket.
const TICK_DECREASE_MS: u64 = 300;
/// Bracket width: every 20 above 1.
const CYCLE_BRACKET: u32 = 20;
/// Fastest allowed tick.
const MIN_TICK_MS: u64 = 150;

/// Pause between the highlight landing and the elimination being applied,
/// so the landing can be perceived before the board changes. Cosmetic;
/// headless drivers may skip it.
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Milliseconds-per-tick for a given cycle number.
///
/// `max(1000 - 300 * floor((cycle_number - 1) / 20), 150)` as a
/// [`Duration`]. Purely deterministic.
#[must_use]
pub fn tick_interval(cycle_number: u32) -> Duration {
    let brackets = u64::from(cycle_number.saturating_sub(1) / CYCLE_BRACKET);
    let ms = BASE_TICK_MS
        .saturating_sub(brackets * TICK_DECREASE_MS)
        .max(MIN_TICK_MS);
    Duration::from_millis(ms)
}
