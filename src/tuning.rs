//! Data-driven game balance for the runner
//!
//! Every knob that shapes the difficulty curve lives here. The dark theme
//! intentionally plays harder: taller obstacles, faster speed ramp, and a
//! lower spawn-interval floor. These are tunable parameters, not contracts,
//! except where the collision/scoring semantics depend on them.

use crate::palette::Theme;

/// Downward acceleration per tick (fixed-step, display-refresh scale)
pub const GRAVITY: f32 = 0.6;
/// Jump impulse (negative = up, screen coordinates)
pub const JUMP_VELOCITY: f32 = -12.0;

/// Player sprite footprint (px)
pub const PLAYER_WIDTH: f32 = 44.0;
pub const PLAYER_HEIGHT: f32 = 36.0;
/// Fixed horizontal position of the player's left edge
pub const PLAYER_X: f32 = 60.0;
/// Ground band height at the bottom of the canvas
pub const GROUND_HEIGHT: f32 = 40.0;

/// Forgiving player hitbox: inset on every side (px)
pub const PLAYER_HITBOX_INSET: f32 = 5.0;
/// Obstacle hitbox inset on leading/trailing/bottom edges (px)
pub const OBSTACLE_HITBOX_INSET: f32 = 2.0;

/// Horizontal scroll speed at session start (px/tick)
pub const START_SPEED: f32 = 6.0;
/// Spawn countdown at session start (ms)
pub const START_INTERVAL_MS: f64 = 1500.0;

/// Score points per difficulty step
pub const POINTS_PER_STEP: u32 = 5;
/// Difficulty added per step
pub const DIFFICULTY_STEP: f32 = 0.5;

/// Trash can width range (px)
pub const OBSTACLE_WIDTH_MIN: f32 = 22.0;
pub const OBSTACLE_WIDTH_MAX: f32 = 40.0;
/// Trash can base height and random spread (px)
pub const OBSTACLE_HEIGHT_BASE: f32 = 26.0;
pub const OBSTACLE_HEIGHT_JITTER: f32 = 14.0;
/// Extra height per difficulty level (px)
pub const OBSTACLE_HEIGHT_PER_DIFFICULTY: f32 = 4.0;

/// Skyline scroll speed as a fraction of game speed
pub const BACKGROUND_SCROLL_FACTOR: f32 = 0.15;
/// Building dimension ranges (px)
pub const BUILDING_WIDTH_MIN: f32 = 40.0;
pub const BUILDING_WIDTH_MAX: f32 = 110.0;
pub const BUILDING_HEIGHT_MIN: f32 = 50.0;
pub const BUILDING_HEIGHT_MAX: f32 = 180.0;
/// Gap between recycled buildings (px)
pub const BUILDING_GAP_MIN: f32 = 10.0;
pub const BUILDING_GAP_MAX: f32 = 60.0;
/// Window lattice pitch inside a building (px)
pub const WINDOW_PITCH: f32 = 14.0;
/// Chance a window cell is lit
pub const WINDOW_LIT_CHANCE: f32 = 0.55;

/// Speed gained per difficulty step
pub fn speed_increment(theme: Theme) -> f32 {
    match theme {
        Theme::Light => 0.4,
        Theme::Dark => 0.6,
    }
}

/// Lower bound on the spawn interval (ms)
pub fn min_interval_ms(theme: Theme) -> f64 {
    match theme {
        Theme::Light => 600.0,
        Theme::Dark => 450.0,
    }
}

/// Flat obstacle height bonus; night raccoons face taller cans
pub fn obstacle_height_bonus(theme: Theme) -> f32 {
    match theme {
        Theme::Light => 0.0,
        Theme::Dark => 18.0,
    }
}

/// Recompute the spawn countdown after a spawn.
///
/// Shrinks with difficulty, floored at the theme minimum, with a jitter
/// term that itself tightens as difficulty rises.
pub fn next_interval_ms(current: f64, difficulty: f32, jitter: f64, theme: Theme) -> f64 {
    let shrink = difficulty as f64 * 10.0;
    (current - shrink + jitter).max(min_interval_ms(theme))
}

/// Upper bound of the spawn jitter term for a given difficulty (ms).
/// Tightens toward zero as difficulty climbs.
pub fn jitter_range_ms(difficulty: f32) -> f64 {
    (400.0 - difficulty as f64 * 20.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_never_below_floor() {
        for theme in [Theme::Light, Theme::Dark] {
            let next = next_interval_ms(min_interval_ms(theme), 30.0, 0.0, theme);
            assert!(next >= min_interval_ms(theme));
        }
    }

    #[test]
    fn test_dark_mode_is_harder() {
        assert!(speed_increment(Theme::Dark) > speed_increment(Theme::Light));
        assert!(min_interval_ms(Theme::Dark) < min_interval_ms(Theme::Light));
        assert!(obstacle_height_bonus(Theme::Dark) > obstacle_height_bonus(Theme::Light));
    }

    #[test]
    fn test_jitter_range_clamped_at_high_difficulty() {
        assert_eq!(jitter_range_ms(50.0), 0.0);
        assert!(jitter_range_ms(0.0) > 0.0);
    }
}
