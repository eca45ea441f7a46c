//! Fixed-step Runner Game tick
//!
//! One tick per display frame: integrate the player, scroll obstacles and
//! skyline, score passes, spawn on the difficulty-tightened cadence, then
//! test collisions. The theme arrives as an argument because dark mode
//! changes the difficulty constants, not just the palette.

use rand::Rng;

use crate::palette::Theme;
use crate::tuning::{
    BACKGROUND_SCROLL_FACTOR, DIFFICULTY_STEP, POINTS_PER_STEP, jitter_range_ms, next_interval_ms,
    speed_increment,
};

use super::collision::player_hits_obstacle;
use super::state::{GameState, Obstacle, Phase};

/// Input snapshot for a single tick. One-shot flags are cleared by the
/// caller after each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Start a session (from Idle or GameOver)
    pub start: bool,
    /// Tear the session down to Idle
    pub reset: bool,
    /// Jump request (space / tap)
    pub jump: bool,
}

/// Advance the game by one frame at timestamp `now_ms`.
pub fn tick(state: &mut GameState, input: &TickInput, theme: Theme, now_ms: f64) {
    if input.reset {
        state.reset();
        return;
    }

    match state.phase {
        Phase::Idle | Phase::GameOver => {
            if input.start {
                state.start(now_ms);
            }
            return;
        }
        Phase::Running => {}
    }

    if input.jump {
        state.player.jump();
    }
    state.player.integrate(state.ground);

    // Scroll obstacles and score the ones whose trailing edge just
    // crossed the player. The passed flag guarantees exactly one
    // increment per can.
    let player_x = state.player.pos.x;
    let mut steps = 0u32;
    for obstacle in &mut state.obstacles {
        obstacle.x -= state.speed;
        if !obstacle.passed && obstacle.x + obstacle.width < player_x {
            obstacle.passed = true;
            state.score += 1;
            if state.score % POINTS_PER_STEP == 0 {
                steps += 1;
            }
        }
    }
    for _ in 0..steps {
        state.difficulty += DIFFICULTY_STEP;
        state.speed += speed_increment(theme);
        log::debug!(
            "difficulty {} speed {:.1} at score {}",
            state.difficulty,
            state.speed,
            state.score
        );
    }

    state.obstacles.retain(|o| !o.offscreen());

    // Spawn cadence: countdown since the last spawn, then re-randomize
    // the interval, tightened by difficulty and floored per theme
    if now_ms - state.last_spawn_ms > state.spawn_interval_ms {
        let obstacle = Obstacle::spawn(state.width, state.difficulty, theme, &mut state.rng);
        state.obstacles.push(obstacle);
        state.last_spawn_ms = now_ms;

        let range = jitter_range_ms(state.difficulty);
        let jitter = if range > 0.0 {
            state.rng.random_range(0.0..range)
        } else {
            0.0
        };
        state.spawn_interval_ms =
            next_interval_ms(state.spawn_interval_ms, state.difficulty, jitter, theme);
    }

    // Parallax skyline trails the world scroll
    let scroll = state.speed * BACKGROUND_SCROLL_FACTOR;
    state.skyline.advance(scroll, &mut state.rng);

    // Any collision ends the session immediately
    for obstacle in &state.obstacles {
        if player_hits_obstacle(&state.player, obstacle, state.ground) {
            state.phase = Phase::GameOver;
            log::info!("game over at score {}", state.score);
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::*;

    const W: f32 = 800.0;
    const H: f32 = 400.0;

    fn running_state(seed: u64) -> GameState {
        let mut state = GameState::new(W, H, seed);
        state.start(0.0);
        state
    }

    fn quiet() -> TickInput {
        TickInput::default()
    }

    /// Tick with spawning effectively disabled by keeping now_ms at 0
    fn tick_no_spawn(state: &mut GameState, input: &TickInput, theme: Theme) {
        tick(state, input, theme, 0.0);
    }

    #[test]
    fn test_idle_ignores_everything_but_start() {
        let mut state = GameState::new(W, H, 1);
        tick(&mut state, &quiet(), Theme::Light, 100.0);
        assert_eq!(state.phase, Phase::Idle);

        let start = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &start, Theme::Light, 200.0);
        assert_eq!(state.phase, Phase::Running);
    }

    #[test]
    fn test_reset_cancels_running_session() {
        let mut state = running_state(1);
        let reset = TickInput {
            reset: true,
            ..Default::default()
        };
        tick(&mut state, &reset, Theme::Light, 100.0);
        assert_eq!(state.phase, Phase::Idle);
    }

    #[test]
    fn test_game_over_to_running_on_start() {
        let mut state = running_state(1);
        state.phase = Phase::GameOver;
        state.score = 7;
        let start = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &start, Theme::Light, 9000.0);
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_score_increments_exactly_once_per_obstacle() {
        let mut state = running_state(2);
        // One can just ahead of the player's trailing edge
        let mut can = Obstacle::spawn(W, 0.0, Theme::Light, &mut state.rng);
        can.x = state.player.pos.x + 10.0;
        // Keep the player clear of it vertically
        state.player.pos.y = 0.0;
        state.player.jumping = true;
        state.obstacles.push(can);

        let mut increments = 0;
        for _ in 0..40 {
            let before = state.score;
            state.player.pos.y = 0.0; // hold clear of the can
            state.player.vel_y = 0.0;
            tick_no_spawn(&mut state, &quiet(), Theme::Light);
            if state.score > before {
                increments += 1;
            }
        }
        assert_eq!(increments, 1);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_collision_ends_session() {
        let mut state = running_state(3);
        // Park a can directly on the player
        let mut can = Obstacle::spawn(W, 0.0, Theme::Light, &mut state.rng);
        can.x = state.player.pos.x;
        can.height = 60.0;
        state.obstacles.push(can);

        tick_no_spawn(&mut state, &quiet(), Theme::Light);
        assert_eq!(state.phase, Phase::GameOver);
    }

    #[test]
    fn test_spawn_after_interval_elapses() {
        let mut state = running_state(4);
        assert!(state.obstacles.is_empty());

        // Before the interval: nothing
        tick(&mut state, &quiet(), Theme::Light, START_INTERVAL_MS - 1.0);
        assert!(state.obstacles.is_empty());

        // Past it: one can at the right edge
        tick(&mut state, &quiet(), Theme::Light, START_INTERVAL_MS + 1.0);
        assert_eq!(state.obstacles.len(), 1);
        assert!(state.obstacles[0].x <= W);
        assert!(state.obstacles[0].x > W - state.speed - 0.5);
    }

    #[test]
    fn test_interval_respects_theme_floor() {
        for theme in [Theme::Light, Theme::Dark] {
            let mut state = running_state(5);
            state.difficulty = 40.0; // extreme shrink, zero jitter range
            let mut now = 0.0;
            for _ in 0..50 {
                now += state.spawn_interval_ms + 1.0;
                tick(&mut state, &quiet(), theme, now);
                if state.phase != Phase::Running {
                    break;
                }
                assert!(state.spawn_interval_ms >= min_interval_ms(theme));
            }
        }
    }

    #[test]
    fn test_difficulty_steps_every_five_points() {
        let mut state = running_state(6);
        let base_speed = state.speed;

        // Feed 5 passed obstacles through, one at a time. Each can starts
        // with its hitbox already clear of the player's trailing edge, so
        // it passes without ever colliding.
        for i in 0..5 {
            let mut can = Obstacle::spawn(W, 0.0, Theme::Light, &mut state.rng);
            can.x = state.player.pos.x - can.width + OBSTACLE_HITBOX_INSET;
            state.obstacles.push(can);
            // Scroll until it passes
            while state.score == i {
                tick_no_spawn(&mut state, &quiet(), Theme::Light);
                assert_eq!(state.phase, Phase::Running);
            }
        }

        assert_eq!(state.score, 5);
        assert_eq!(state.difficulty, DIFFICULTY_STEP);
        assert_eq!(state.speed, base_speed + speed_increment(Theme::Light));
    }

    #[test]
    fn test_difficulty_and_speed_monotone() {
        let mut state = running_state(7);
        let mut last_difficulty = state.difficulty;
        let mut last_speed = state.speed;
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };

        let mut now = 0.0;
        for _ in 0..2000 {
            now += 16.0;
            tick(&mut state, &jump, Theme::Dark, now);
            if state.phase != Phase::Running {
                break;
            }
            assert!(state.difficulty >= last_difficulty);
            assert!(state.speed >= last_speed);
            last_difficulty = state.difficulty;
            last_speed = state.speed;
        }
    }

    #[test]
    fn test_offscreen_obstacles_are_dropped() {
        let mut state = running_state(8);
        let mut can = Obstacle::spawn(W, 0.0, Theme::Light, &mut state.rng);
        can.x = -can.width - 1.0;
        can.passed = true;
        state.obstacles.push(can);

        tick_no_spawn(&mut state, &quiet(), Theme::Light);
        assert!(state.obstacles.is_empty());
    }
}
