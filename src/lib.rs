//! Raccoon Dash - portfolio canvas effects and mini-game
//!
//! Core modules:
//! - `field`: Wave Field simulation (dot grid, parallax, wave interference)
//! - `runner`: Runner Game simulation (physics, obstacles, skyline, scoring)
//! - `render`: Canvas2D drawing of simulation frames (wasm32 only)
//! - `highscore`: Persisted best score
//! - `tuning`: Data-driven game balance
//!
//! Both simulations are pure and platform-free: they take timestamps and
//! input snapshots, mutate their own state, and hand back plain data for
//! the renderer. All randomness flows through a seeded `Pcg32`.

pub mod field;
pub mod highscore;
pub mod palette;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod runner;
pub mod tuning;

pub use highscore::HighScore;
pub use palette::{Rgb, Theme};

use glam::Vec2;

/// Simulation constants shared by both components
pub mod consts {
    /// Dot lattice spacing (px)
    pub const DOT_SPACING: f32 = 20.0;
    /// Resting dot radius (px)
    pub const DOT_BASE_RADIUS: f32 = 0.75;
    /// Probability a grid point gets an accent color
    pub const ACCENT_CHANCE: f32 = 0.04;

    /// Pointer parallax reach (px)
    pub const PARALLAX_RANGE: f32 = 200.0;
    /// Maximum parallax displacement (px)
    pub const PARALLAX_STRENGTH: f32 = 12.0;
    /// Hover opacity boost at zero pointer distance
    pub const HOVER_ALPHA_BOOST: f32 = 0.15;

    /// Wave front expansion speed (px/s)
    pub const WAVE_SPEED: f32 = 300.0;
    /// Radial extent of the wave band (px)
    pub const WAVE_THICKNESS: f32 = 120.0;
    /// Delay before the automatic page-load wave (ms)
    pub const AUTO_WAVE_DELAY_MS: i32 = 400;

    /// Pointer position used when the pointer is off-canvas; far enough
    /// out that no parallax or hover term can reach any grid point.
    pub const POINTER_OFFSCREEN: (f32, f32) = (-1000.0, -1000.0);
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Displacement direction from `from` toward `to`, zero-length safe.
///
/// A point exactly coincident with the pointer or a wave origin must not
/// divide by zero; it simply gets no directional push.
#[inline]
pub fn direction_or_zero(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
    }

    #[test]
    fn test_direction_coincident_points_is_zero() {
        let p = Vec2::new(40.0, 60.0);
        assert_eq!(direction_or_zero(p, p), Vec2::ZERO);
    }
}
