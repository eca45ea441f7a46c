//! Wave Field state: the dot lattice and the live wave set

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::palette::{ACCENTS, AMBIENT_WHITE, Rgb};

/// One lattice point. The base position and color never change after
/// grid build; the displayed position/color/opacity/radius are derived
/// fresh every frame from the current input state.
#[derive(Debug, Clone)]
pub struct GridPoint {
    /// Fixed lattice coordinate
    pub base: Vec2,
    /// Resting color
    pub color: Rgb,
    /// Resting opacity
    pub alpha: f32,
    /// Rare accent dot (colored even at rest)
    pub accent: bool,
}

/// An expanding circular wave. The current radius is derived from the
/// elapsed time, never stored.
#[derive(Debug, Clone)]
pub struct Wave {
    pub origin: Vec2,
    /// Timestamp at creation (ms, frame-clock domain)
    pub start_ms: f64,
    /// Viewport diagonal at creation; the wave dies past this
    pub max_radius: f32,
}

impl Wave {
    /// Front radius at time `now_ms`
    pub fn radius_at(&self, now_ms: f64) -> f32 {
        let elapsed_s = ((now_ms - self.start_ms) / 1000.0).max(0.0) as f32;
        elapsed_s * WAVE_SPEED
    }

    /// True once the trailing edge has left the viewport
    pub fn expired(&self, now_ms: f64) -> bool {
        self.radius_at(now_ms) > self.max_radius + WAVE_THICKNESS
    }
}

/// Complete Wave Field state for one canvas
#[derive(Debug, Clone)]
pub struct FieldState {
    pub width: f32,
    pub height: f32,
    pub points: Vec<GridPoint>,
    /// Live waves in insertion order; pruned on expiry, no other bound
    pub waves: Vec<Wave>,
    /// Current pointer position, or far off-canvas when absent
    pub pointer: Vec2,
}

impl FieldState {
    pub fn new(width: f32, height: f32, rng: &mut impl Rng) -> Self {
        Self {
            width,
            height,
            points: build_grid(width, height, rng),
            waves: Vec::new(),
            pointer: Vec2::from(POINTER_OFFSCREEN),
        }
    }

    /// Viewport changed: rebuild the grid from scratch. Live waves are
    /// kept; their max radius was fixed at creation.
    pub fn resize(&mut self, width: f32, height: f32, rng: &mut impl Rng) {
        self.width = width;
        self.height = height;
        self.points = build_grid(width, height, rng);
    }

    /// Spawn a wave at `origin`
    pub fn trigger_wave(&mut self, origin: Vec2, now_ms: f64) {
        let max_radius = (self.width * self.width + self.height * self.height).sqrt();
        self.waves.push(Wave {
            origin,
            start_ms: now_ms,
            max_radius,
        });
    }

    /// The automatic page-load wave origin: 15% across, 30% down
    pub fn auto_wave_origin(&self) -> Vec2 {
        Vec2::new(self.width * 0.15, self.height * 0.3)
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    /// Pointer left the canvas: park it where nothing can react to it
    pub fn pointer_left(&mut self) {
        self.pointer = Vec2::from(POINTER_OFFSCREEN);
    }
}

/// Build the dot lattice for a `width` x `height` viewport.
///
/// `(ceil(W/s)+1)` columns by `(ceil(H/s)+1)` rows at spacing `s`. Each
/// point rolls once for rarity: accents get one of the three palette
/// colors and a stronger opacity, the rest are faint white.
pub fn build_grid(width: f32, height: f32, rng: &mut impl Rng) -> Vec<GridPoint> {
    let cols = (width / DOT_SPACING).ceil() as usize + 1;
    let rows = (height / DOT_SPACING).ceil() as usize + 1;

    let mut points = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            let accent = rng.random::<f32>() < ACCENT_CHANCE;
            let (color, alpha) = if accent {
                let color = ACCENTS[rng.random_range(0..ACCENTS.len())];
                (color, rng.random_range(0.25..0.45))
            } else {
                (AMBIENT_WHITE, rng.random_range(0.06..0.12))
            };
            points.push(GridPoint {
                base: Vec2::new(col as f32 * DOT_SPACING, row as f32 * DOT_SPACING),
                color,
                alpha,
                accent,
            });
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn test_grid_point_count() {
        // ceil(800/20)+1 = 41 cols, ceil(600/20)+1 = 31 rows
        let grid = build_grid(800.0, 600.0, &mut rng());
        assert_eq!(grid.len(), 41 * 31);

        // Non-multiple viewport rounds up
        let grid = build_grid(810.0, 605.0, &mut rng());
        assert_eq!(grid.len(), (41 + 1) * (31 + 1));
    }

    #[test]
    fn test_grid_alpha_ranges() {
        let grid = build_grid(1000.0, 1000.0, &mut rng());
        for p in &grid {
            if p.accent {
                assert!((0.25..0.45).contains(&p.alpha));
                assert!(ACCENTS.contains(&p.color));
            } else {
                assert!((0.06..0.12).contains(&p.alpha));
                assert_eq!(p.color, AMBIENT_WHITE);
            }
        }
        // With 0.04 rarity a 51x51 grid should have some accents but far
        // from a majority.
        let accents = grid.iter().filter(|p| p.accent).count();
        assert!(accents > 0);
        assert!(accents < grid.len() / 10);
    }

    #[test]
    fn test_wave_lifetime_window() {
        let mut field = FieldState::new(300.0, 400.0, &mut rng());
        field.trigger_wave(Vec2::new(10.0, 10.0), 1000.0);
        let wave = &field.waves[0];
        // max_radius = 500 (3-4-5 triangle); dies once radius > 620
        assert_eq!(wave.max_radius, 500.0);

        let lifetime_ms = ((wave.max_radius + WAVE_THICKNESS) / WAVE_SPEED * 1000.0) as f64;
        assert!(!wave.expired(1000.0));
        assert!(!wave.expired(1000.0 + lifetime_ms - 1.0));
        assert!(wave.expired(1000.0 + lifetime_ms + 1.0));
    }

    #[test]
    fn test_wave_triggered_late_on_the_clock_is_fresh() {
        // Waves are stamped with the frame clock, which is far from zero
        // by the time a click arrives. A wave must be born at radius 0
        // and alive at its own creation timestamp.
        let mut field = FieldState::new(300.0, 400.0, &mut rng());
        let clock = 123_456.0;
        field.trigger_wave(Vec2::new(10.0, 10.0), clock);
        let wave = &field.waves[0];
        assert_eq!(wave.radius_at(clock), 0.0);
        assert!(!wave.expired(clock));
    }

    #[test]
    fn test_wave_radius_grows_at_wave_speed() {
        let wave = Wave {
            origin: Vec2::ZERO,
            start_ms: 0.0,
            max_radius: 1000.0,
        };
        assert_eq!(wave.radius_at(0.0), 0.0);
        assert_eq!(wave.radius_at(1000.0), WAVE_SPEED);
        assert_eq!(wave.radius_at(500.0), WAVE_SPEED / 2.0);
    }

    #[test]
    fn test_resize_rebuilds_grid_keeps_waves() {
        let mut r = rng();
        let mut field = FieldState::new(400.0, 400.0, &mut r);
        field.trigger_wave(Vec2::new(50.0, 50.0), 0.0);
        let before = field.points.len();
        field.resize(800.0, 400.0, &mut r);
        assert!(field.points.len() > before);
        assert_eq!(field.waves.len(), 1);
    }
}
