//! Procedural scrolling skyline behind the runner
//!
//! Buildings are generated once to fill twice the viewport width, then
//! scrolled left at a fraction of game speed. A building that leaves the
//! left edge is respawned past the current rightmost building with fresh
//! dimensions and a fresh window pattern. Window cells are fixed at
//! generation time; regenerating them per frame would flicker.

use rand::Rng;

use crate::tuning::*;

/// One background building
#[derive(Debug, Clone)]
pub struct Building {
    /// Left edge (px)
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// Lit window cells as (col, row) lattice coordinates, fixed for the
    /// lifetime of this building instance
    pub windows: Vec<(u8, u8)>,
}

impl Building {
    /// Generate a building at `x` with randomized dimensions and windows
    pub fn generate(x: f32, rng: &mut impl Rng) -> Self {
        let width = rng.random_range(BUILDING_WIDTH_MIN..BUILDING_WIDTH_MAX);
        let height = rng.random_range(BUILDING_HEIGHT_MIN..BUILDING_HEIGHT_MAX);

        let cols = (width / WINDOW_PITCH) as u8;
        let rows = (height / WINDOW_PITCH) as u8;
        let mut windows = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                if rng.random::<f32>() < WINDOW_LIT_CHANCE {
                    windows.push((col, row));
                }
            }
        }

        Self {
            x,
            width,
            height,
            windows,
        }
    }

    /// True once fully past the left edge
    pub fn offscreen(&self) -> bool {
        self.x + self.width < 0.0
    }
}

/// The rolling set of buildings
#[derive(Debug, Clone)]
pub struct Skyline {
    pub buildings: Vec<Building>,
    /// Ground level the buildings stand on
    pub ground: f32,
}

impl Skyline {
    /// Fill twice the viewport width with buildings
    pub fn generate(view_width: f32, ground: f32, rng: &mut impl Rng) -> Self {
        let mut buildings = Vec::new();
        let mut x = 0.0;
        while x < view_width * 2.0 {
            let building = Building::generate(x, rng);
            x += building.width + rng.random_range(BUILDING_GAP_MIN..BUILDING_GAP_MAX);
            buildings.push(building);
        }
        Self { buildings, ground }
    }

    /// Right edge of the rightmost building
    pub fn rightmost_edge(&self) -> f32 {
        self.buildings
            .iter()
            .map(|b| b.x + b.width)
            .fold(0.0, f32::max)
    }

    /// Scroll left by `scroll` px and recycle anything that left the
    /// viewport. Recycled buildings get fresh dimensions and windows.
    pub fn advance(&mut self, scroll: f32, rng: &mut impl Rng) {
        for building in &mut self.buildings {
            building.x -= scroll;
        }

        // Recycle one at a time so each respawn sees the updated rightmost
        // edge
        for i in 0..self.buildings.len() {
            if self.buildings[i].offscreen() {
                let edge = self.rightmost_edge();
                let gap = rng.random_range(BUILDING_GAP_MIN..BUILDING_GAP_MAX);
                self.buildings[i] = Building::generate(edge + gap, rng);
            }
        }
    }
}
