//! Per-frame Wave Field evaluation
//!
//! Turns the current state plus a timestamp into a list of dot sprites.
//! Nothing here touches a canvas; the renderer consumes the output.

use glam::Vec2;

use crate::consts::*;
use crate::direction_or_zero;
use crate::palette::{Rgb, band_color};

use super::state::FieldState;

/// One renderable dot: displayed position, radius, color, opacity
#[derive(Debug, Clone, Copy)]
pub struct DotSprite {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub alpha: f32,
}

/// Parallax displacement for a point at `base` given the pointer.
///
/// Inside the 200 px range the point is pushed opposite the direction to
/// the pointer, scaled by `(1 - dist/range) * strength`. The sign is
/// deliberate: combined with the per-frame re-derivation it reads as dots
/// being pulled toward the cursor. Zero at exact coincidence.
pub fn parallax_offset(base: Vec2, pointer: Vec2) -> Vec2 {
    let dist = base.distance(pointer);
    if dist >= PARALLAX_RANGE {
        return Vec2::ZERO;
    }
    let force = 1.0 - dist / PARALLAX_RANGE;
    -direction_or_zero(base, pointer) * force * PARALLAX_STRENGTH
}

/// Signed amplitude of a wave band at `front_distance` behind the front.
///
/// One full sine cycle across the band: crest in the front half, trough
/// in the back half, zero at both edges. `None` outside the band.
pub fn band_amplitude(front_distance: f32) -> Option<(f32, f32)> {
    if front_distance > 0.0 && front_distance < WAVE_THICKNESS {
        let t = front_distance / WAVE_THICKNESS;
        Some(((t * std::f32::consts::TAU).sin(), t))
    } else {
        None
    }
}

/// Combined intensity from a signed amplitude sum.
///
/// Constructive interference can push past 1.0; that is the point. The
/// sum is capped at 2.0 and the excess above 1.0 pays out at half rate.
pub fn combined_intensity(sum_amplitude: f32) -> f32 {
    let abs_sum = sum_amplitude.abs().min(2.0);
    if abs_sum > 1.0 {
        1.0 + (abs_sum - 1.0) * 0.5
    } else {
        abs_sum
    }
}

/// Evaluate one frame at `now_ms`: prune dead waves, then derive every
/// dot's displayed position, color, opacity and radius.
pub fn frame(state: &mut FieldState, now_ms: f64) -> Vec<DotSprite> {
    state.waves.retain(|w| !w.expired(now_ms));

    // Snapshot wave fronts once instead of per point
    let fronts: Vec<(Vec2, f32)> = state
        .waves
        .iter()
        .map(|w| (w.origin, w.radius_at(now_ms)))
        .collect();

    let pointer = state.pointer;
    let mut sprites = Vec::with_capacity(state.points.len());

    for point in &state.points {
        let pointer_dist = point.base.distance(pointer);
        let pos = point.base + parallax_offset(point.base, pointer);

        // Interference summation across all live waves
        let mut sum_amplitude = 0.0f32;
        let mut color_rgb = [0.0f32; 3];
        let mut color_weight = 0.0f32;
        for &(origin, radius) in &fronts {
            let front_distance = radius - point.base.distance(origin);
            if let Some((amplitude, t)) = band_amplitude(front_distance) {
                sum_amplitude += amplitude;
                let w = amplitude.abs();
                let band = band_color(t);
                color_rgb[0] += band.r as f32 * w;
                color_rgb[1] += band.g as f32 * w;
                color_rgb[2] += band.b as f32 * w;
                color_weight += w;
            }
        }
        let mut color = point.color;
        let mut alpha = point.alpha;
        let mut radius = DOT_BASE_RADIUS;

        if color_weight > 0.0 {
            let intensity = combined_intensity(sum_amplitude);
            let wave_color = Rgb {
                r: (color_rgb[0] / color_weight).round() as u8,
                g: (color_rgb[1] / color_weight).round() as u8,
                b: (color_rgb[2] / color_weight).round() as u8,
            };
            color = point.color.blend(wave_color, intensity.min(1.0));
            alpha += intensity * 0.4;
            radius += intensity * 0.8;
        }

        // Pointer proximity boost, independent of wave contribution
        if pointer_dist < PARALLAX_RANGE {
            alpha += (1.0 - pointer_dist / PARALLAX_RANGE) * HOVER_ALPHA_BOOST;
        }

        sprites.push(DotSprite {
            pos,
            radius,
            color,
            alpha,
        });
    }

    sprites
}
