//! Wave Field renderer: filled discs on a cleared canvas

use web_sys::CanvasRenderingContext2d;

use crate::field::DotSprite;

/// Draw one field frame. The context is expected to already carry the
/// device-pixel-ratio transform.
pub fn draw_field(ctx: &CanvasRenderingContext2d, width: f32, height: f32, dots: &[DotSprite]) {
    ctx.clear_rect(0.0, 0.0, width as f64, height as f64);

    for dot in dots {
        ctx.begin_path();
        let _ = ctx.arc(
            dot.pos.x as f64,
            dot.pos.y as f64,
            dot.radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.set_fill_style_str(&dot.color.css(dot.alpha));
        ctx.fill();
    }
}
