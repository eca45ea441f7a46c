//! Runner Game: the trash-can obstacle arcade mini-game
//!
//! A raccoon runs right (the world scrolls left), jumping over procedurally
//! sized trash cans. Speed and spawn cadence tighten as the score climbs,
//! harder still in dark mode. All gameplay logic lives here and is pure:
//! fixed timestep, seeded RNG, no rendering or platform dependencies.

pub mod background;
pub mod collision;
pub mod state;
pub mod tick;

pub use background::{Building, Skyline};
pub use collision::{Aabb, obstacle_hitbox, player_hitbox};
pub use state::{GameState, Obstacle, Phase, Player};
pub use tick::{TickInput, tick};
