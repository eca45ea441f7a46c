//! Runner Game renderer: sky, skyline, ground, trash cans, raccoon
//!
//! Day and night palettes follow the theme flag; the same flag hardens
//! gameplay over in `tuning`, but here it only picks colors and the
//! sun/moon glyph.

use web_sys::CanvasRenderingContext2d;

use crate::palette::{Rgb, Theme};
use crate::runner::{GameState, Obstacle, Phase, Player, Skyline};

/// Draw one game frame
pub fn draw_game(ctx: &CanvasRenderingContext2d, state: &GameState, theme: Theme) {
    let w = state.width as f64;
    let h = state.height as f64;
    ctx.clear_rect(0.0, 0.0, w, h);

    draw_sky(ctx, w, h, theme);
    draw_skyline(ctx, &state.skyline, theme);
    draw_ground(ctx, w, h, state.ground as f64, theme);

    for obstacle in &state.obstacles {
        draw_trash_can(ctx, obstacle, state.ground);
    }
    draw_raccoon(ctx, &state.player, theme);

    match state.phase {
        Phase::Idle => draw_banner(ctx, w, h, "tap or press space to run"),
        Phase::GameOver => draw_banner(ctx, w, h, "game over - tap to retry"),
        Phase::Running => {}
    }
}

fn draw_sky(ctx: &CanvasRenderingContext2d, w: f64, h: f64, theme: Theme) {
    let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
    if theme.is_dark() {
        let _ = gradient.add_color_stop(0.0, "#0b1026");
        let _ = gradient.add_color_stop(1.0, "#2b2d42");
    } else {
        let _ = gradient.add_color_stop(0.0, "#aee3f5");
        let _ = gradient.add_color_stop(1.0, "#fdeedc");
    }
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, w, h);

    // Sun or moon, top-right
    ctx.begin_path();
    let _ = ctx.arc(w - 70.0, 60.0, 24.0, 0.0, std::f64::consts::TAU);
    if theme.is_dark() {
        ctx.set_fill_style_str("rgba(235, 235, 210, 0.9)");
    } else {
        ctx.set_fill_style_str("rgba(255, 205, 60, 0.95)");
    }
    ctx.fill();
    if theme.is_dark() {
        // Crescent bite
        ctx.begin_path();
        let _ = ctx.arc(w - 60.0, 52.0, 20.0, 0.0, std::f64::consts::TAU);
        ctx.set_fill_style_str("#0b1026");
        ctx.fill();
    }
}

fn draw_skyline(ctx: &CanvasRenderingContext2d, skyline: &Skyline, theme: Theme) {
    use crate::tuning::WINDOW_PITCH;

    let (body, window) = if theme.is_dark() {
        ("rgba(20, 24, 48, 0.9)", "rgba(255, 220, 120, 0.8)")
    } else {
        ("rgba(120, 130, 160, 0.45)", "rgba(255, 255, 255, 0.6)")
    };

    let ground = skyline.ground as f64;
    for building in &skyline.buildings {
        let x = building.x as f64;
        let bw = building.width as f64;
        let bh = building.height as f64;
        ctx.set_fill_style_str(body);
        ctx.fill_rect(x, ground - bh, bw, bh);

        ctx.set_fill_style_str(window);
        for &(col, row) in &building.windows {
            let wx = x + col as f64 * WINDOW_PITCH as f64 + 3.0;
            let wy = ground - bh + row as f64 * WINDOW_PITCH as f64 + 3.0;
            ctx.fill_rect(wx, wy, 5.0, 7.0);
        }
    }
}

fn draw_ground(ctx: &CanvasRenderingContext2d, w: f64, h: f64, ground: f64, theme: Theme) {
    if theme.is_dark() {
        ctx.set_fill_style_str("#1a1a2e");
    } else {
        ctx.set_fill_style_str("#7a6f5d");
    }
    ctx.fill_rect(0.0, ground, w, h - ground);
}

fn draw_trash_can(ctx: &CanvasRenderingContext2d, obstacle: &Obstacle, ground: f32) {
    let x = obstacle.x as f64;
    let w = obstacle.width as f64;
    let h = obstacle.height as f64;
    let top = obstacle.top(ground) as f64;

    // Body, slightly tapered
    ctx.set_fill_style_str(&obstacle.body.css(1.0));
    ctx.begin_path();
    ctx.move_to(x + 2.0, top + 6.0);
    ctx.line_to(x + w - 2.0, top + 6.0);
    ctx.line_to(x + w - 4.0, top + h);
    ctx.line_to(x + 4.0, top + h);
    ctx.close_path();
    ctx.fill();

    // Lid with handle
    ctx.set_fill_style_str(&obstacle.lid.css(1.0));
    ctx.fill_rect(x, top, w, 7.0);
    ctx.fill_rect(x + w / 2.0 - 5.0, top - 4.0, 10.0, 4.0);
}

fn draw_raccoon(ctx: &CanvasRenderingContext2d, player: &Player, theme: Theme) {
    let x = player.pos.x as f64;
    let y = player.pos.y as f64;
    let w = player.size.x as f64;
    let h = player.size.y as f64;

    let fur = if theme.is_dark() { "#9aa0b5" } else { "#6b6f7e" };
    let mask = "#2e2e38";

    // Body
    ctx.set_fill_style_str(fur);
    ctx.begin_path();
    let _ = ctx.ellipse(
        x + w * 0.45,
        y + h * 0.6,
        w * 0.42,
        h * 0.38,
        0.0,
        0.0,
        std::f64::consts::TAU,
    );
    ctx.fill();

    // Head
    ctx.begin_path();
    let _ = ctx.arc(x + w * 0.8, y + h * 0.3, h * 0.28, 0.0, std::f64::consts::TAU);
    ctx.fill();

    // Mask band and nose
    ctx.set_fill_style_str(mask);
    ctx.fill_rect(x + w * 0.66, y + h * 0.22, w * 0.3, h * 0.12);
    ctx.begin_path();
    let _ = ctx.arc(x + w * 0.94, y + h * 0.32, 2.5, 0.0, std::f64::consts::TAU);
    ctx.fill();

    // Striped tail
    for (i, color) in [fur, mask, fur, mask].iter().enumerate() {
        ctx.set_fill_style_str(color);
        ctx.fill_rect(x - w * 0.28 + i as f64 * w * 0.07, y + h * 0.45, w * 0.07, h * 0.2);
    }
}

fn draw_banner(ctx: &CanvasRenderingContext2d, w: f64, h: f64, text: &str) {
    ctx.set_fill_style_str("rgba(0, 0, 0, 0.45)");
    ctx.fill_rect(0.0, h / 2.0 - 28.0, w, 56.0);
    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("16px monospace");
    ctx.set_text_align("center");
    let _ = ctx.fill_text(text, w / 2.0, h / 2.0 + 5.0);
}
