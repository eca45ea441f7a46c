//! Axis-aligned collision between the player and obstacles
//!
//! Both boxes are inset before testing: the player by 5 px on every side
//! (forgiving hitbox), the obstacle by 2 px on its leading, trailing and
//! bottom edges. Overlap uses strict inequalities, so boxes that merely
//! touch do not collide.

use glam::Vec2;

use crate::tuning::{OBSTACLE_HITBOX_INSET, PLAYER_HITBOX_INSET};

use super::state::{Obstacle, Player};

/// An axis-aligned box in screen coordinates
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Strict-overlap test: touching edges do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// The player's forgiving hitbox
pub fn player_hitbox(player: &Player) -> Aabb {
    Aabb::new(
        player.pos + Vec2::splat(PLAYER_HITBOX_INSET),
        player.pos + player.size - Vec2::splat(PLAYER_HITBOX_INSET),
    )
}

/// An obstacle's hitbox: leading/trailing/bottom edges pulled in, the top
/// (lid) edge left exact
pub fn obstacle_hitbox(obstacle: &Obstacle, ground: f32) -> Aabb {
    Aabb::new(
        Vec2::new(obstacle.x + OBSTACLE_HITBOX_INSET, obstacle.top(ground)),
        Vec2::new(
            obstacle.x + obstacle.width - OBSTACLE_HITBOX_INSET,
            ground - OBSTACLE_HITBOX_INSET,
        ),
    )
}

/// Full player-vs-obstacle test
pub fn player_hits_obstacle(player: &Player, obstacle: &Obstacle, ground: f32) -> bool {
    player_hitbox(player).overlaps(&obstacle_hitbox(obstacle, ground))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Rgb;

    fn obstacle(x: f32, width: f32, height: f32) -> Obstacle {
        Obstacle {
            x,
            width,
            height,
            passed: false,
            body: Rgb::new(100, 100, 100),
            lid: Rgb::new(80, 80, 80),
        }
    }

    fn grounded_player(x: f32, ground: f32) -> Player {
        let mut p = Player::new(ground);
        p.pos.x = x;
        p
    }

    #[test]
    fn test_touching_edges_is_not_collision() {
        let ground = 300.0;
        let player = grounded_player(50.0, ground);
        let hb = player_hitbox(&player);
        // Place the can so its inset leading edge exactly touches the
        // player's inset trailing edge
        let can = obstacle(hb.max.x - OBSTACLE_HITBOX_INSET, 30.0, 40.0);
        let ob = obstacle_hitbox(&can, ground);
        assert_eq!(ob.min.x, hb.max.x);
        assert!(!player_hits_obstacle(&player, &can, ground));
    }

    #[test]
    fn test_overlap_is_collision() {
        let ground = 300.0;
        let player = grounded_player(50.0, ground);
        let can = obstacle(60.0, 30.0, 40.0);
        assert!(player_hits_obstacle(&player, &can, ground));
    }

    #[test]
    fn test_insets_forgive_near_misses() {
        let ground = 300.0;
        let player = grounded_player(50.0, ground);
        // Raw sprites overlap by 6 px, but 5 + 2 px of insets absorb it
        let raw_right = player.pos.x + player.size.x;
        let can = obstacle(raw_right - 6.0, 30.0, 40.0);
        assert!(!player_hits_obstacle(&player, &can, ground));
    }

    #[test]
    fn test_player_above_can_clears_it() {
        let ground = 300.0;
        let mut player = grounded_player(100.0, ground);
        let can = obstacle(100.0, 30.0, 40.0);
        assert!(player_hits_obstacle(&player, &can, ground));

        // Lift the player above the lid
        player.pos.y = can.top(ground) - player.size.y - 1.0;
        assert!(!player_hits_obstacle(&player, &can, ground));
    }

    #[test]
    fn test_aabb_strict_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(!a.overlaps(&b));
        let c = Aabb::new(Vec2::new(9.9, 0.0), Vec2::new(20.0, 10.0));
        assert!(a.overlaps(&c));
    }
}
