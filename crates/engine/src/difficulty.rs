//! Difficulty curve: a decreasing function of game level with a positive
//! floor, so later rounds demand finer discrimination but a perceptible
//! difference always remains.

/// Difficulty of the first level.
pub const MAX_DIFFICULTY: f64 = 1.0;
/// Floor the curve settles on; never zero.
pub const MIN_DIFFICULTY: f64 = 0.1;
/// Difficulty lost per level.
const STEP: f64 = 0.1;

/// Difficulty for a 1-based game level: 1.0 at level 1, down 0.1 per
/// level, floored at 0.1 from level 10 on. Computed fresh per round,
/// never persisted.
pub fn difficulty_for_level(level: u32) -> f64 {
    (MAX_DIFFICULTY - level.saturating_sub(1) as f64 * STEP).max(MIN_DIFFICULTY)
}
