//! Runner Game state and core entity types
//!
//! Entities are plain data records; the systems in `tick` operate over
//! them. The session state machine is `Idle -> Running -> GameOver`, with
//! explicit start/reset actions driving the transitions.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::palette::{Rgb, Theme};
use crate::tuning::*;

use super::background::Skyline;

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not yet started, or after an explicit reset
    Idle,
    /// Active session
    Running,
    /// Collision ended the session; start begins a fresh one
    GameOver,
}

/// The raccoon. Single instance, integrated every tick.
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner (px, screen coordinates)
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (px/tick, positive = down)
    pub vel_y: f32,
    /// Airborne flag; blocks double jumps
    pub jumping: bool,
}

impl Player {
    /// New player resting on the ground
    pub fn new(ground: f32) -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, ground - PLAYER_HEIGHT),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vel_y: 0.0,
            jumping: false,
        }
    }

    /// Jump request; a no-op while airborne
    pub fn jump(&mut self) {
        if !self.jumping {
            self.vel_y = JUMP_VELOCITY;
            self.jumping = true;
        }
    }

    /// One fixed-step gravity integration, clamped at the ground
    pub fn integrate(&mut self, ground: f32) {
        self.vel_y += GRAVITY;
        self.pos.y += self.vel_y;
        if self.pos.y + self.size.y > ground {
            self.pos.y = ground - self.size.y;
            self.vel_y = 0.0;
            self.jumping = false;
        }
    }
}

/// A trash can. Spawned at the right edge, scrolled left each tick,
/// destroyed off the left edge.
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Left edge (px)
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// Set exactly once, when the trailing edge crosses the player
    pub passed: bool,
    /// Can body color, from a random hue at creation
    pub body: Rgb,
    /// Lid color, a darker shade of the same hue
    pub lid: Rgb,
}

impl Obstacle {
    /// Spawn a can at `right_edge` sized for the current difficulty.
    /// Dark mode adds a flat height bonus on top of the difficulty scaling.
    pub fn spawn(right_edge: f32, difficulty: f32, theme: Theme, rng: &mut impl Rng) -> Self {
        let width = rng.random_range(OBSTACLE_WIDTH_MIN..OBSTACLE_WIDTH_MAX);
        let height = OBSTACLE_HEIGHT_BASE
            + rng.random_range(0.0..OBSTACLE_HEIGHT_JITTER)
            + difficulty * OBSTACLE_HEIGHT_PER_DIFFICULTY
            + obstacle_height_bonus(theme);
        let hue = rng.random_range(0.0..360.0);
        Self {
            x: right_edge,
            width,
            height,
            passed: false,
            body: Rgb::from_hsl(hue, 0.35, 0.45),
            lid: Rgb::from_hsl(hue, 0.35, 0.30),
        }
    }

    /// Top edge given the ground level
    pub fn top(&self, ground: f32) -> f32 {
        ground - self.height
    }

    /// True once fully past the left edge
    pub fn offscreen(&self) -> bool {
        self.x + self.width < 0.0
    }
}

/// Complete Runner Game state for one canvas
#[derive(Debug)]
pub struct GameState {
    pub phase: Phase,
    /// Monotonic while running; reset at session start
    pub score: u32,
    /// Horizontal world scroll per tick (px)
    pub speed: f32,
    /// Real-valued difficulty level, steps by 0.5 every 5 points
    pub difficulty: f32,
    /// Current spawn countdown (ms)
    pub spawn_interval_ms: f64,
    /// Timestamp of the last spawn (ms)
    pub last_spawn_ms: f64,
    pub obstacles: Vec<Obstacle>,
    pub player: Player,
    /// Scrolling skyline; persists across sessions so restarting does not
    /// flicker the backdrop
    pub skyline: Skyline,
    pub width: f32,
    pub height: f32,
    /// Ground level (y of the ground line)
    pub ground: f32,
    /// Session seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let ground = height - GROUND_HEIGHT;
        let mut rng = Pcg32::seed_from_u64(seed);
        let skyline = Skyline::generate(width, ground, &mut rng);
        Self {
            phase: Phase::Idle,
            score: 0,
            speed: START_SPEED,
            difficulty: 0.0,
            spawn_interval_ms: START_INTERVAL_MS,
            last_spawn_ms: 0.0,
            obstacles: Vec::new(),
            player: Player::new(ground),
            skyline,
            width,
            height,
            ground,
            seed,
            rng,
        }
    }

    /// Begin a session: resets score, speed, difficulty, obstacles and the
    /// player, then transitions to `Running`. Valid from `Idle` and
    /// `GameOver`; a no-op while already running.
    pub fn start(&mut self, now_ms: f64) {
        if self.phase == Phase::Running {
            return;
        }
        self.score = 0;
        self.speed = START_SPEED;
        self.difficulty = 0.0;
        self.spawn_interval_ms = START_INTERVAL_MS;
        self.last_spawn_ms = now_ms;
        self.obstacles.clear();
        self.player = Player::new(self.ground);
        self.phase = Phase::Running;
        log::info!("session started (seed {})", self.seed);
    }

    /// Explicit reset back to `Idle`; clears the session like `start` but
    /// leaves the loop stopped.
    pub fn reset(&mut self) {
        self.score = 0;
        self.speed = START_SPEED;
        self.difficulty = 0.0;
        self.spawn_interval_ms = START_INTERVAL_MS;
        self.obstacles.clear();
        self.player = Player::new(self.ground);
        self.phase = Phase::Idle;
    }
}
