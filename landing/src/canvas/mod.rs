//! Canvas components. State lives in `folio`; these only paint.

mod algorithms;
mod background;
mod particles;
mod signal;
mod wireless;

pub use algorithms::AlgorithmVisualizer;
pub use background::CodeBackground;
pub use particles::ParticleCanvas;
pub use signal::SignalDemo;
pub use wireless::WirelessSimulator;

use std::f64::consts::TAU;

use folio::Bounds;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// 2D context of `canvas`, or `None` when the browser refuses one.
pub(crate) fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

/// Match the backing store to the laid-out size and report it.
pub(crate) fn fit(canvas: &HtmlCanvasElement) -> Bounds {
    let (w, h) = (canvas.offset_width().max(0), canvas.offset_height().max(0));
    if canvas.width() != w as u32 {
        canvas.set_width(w as u32);
    }
    if canvas.height() != h as u32 {
        canvas.set_height(h as u32);
    }
    Bounds::new(w as f64, h as f64)
}

/// Per-component RNG.
pub(crate) fn rng() -> StdRng {
    StdRng::from_entropy()
}

pub(crate) fn dot(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64, fill: &str) {
    ctx.begin_path();
    let _ = ctx.arc(x, y, radius, 0.0, TAU);
    ctx.set_fill_style_str(fill);
    ctx.fill();
}

pub(crate) fn line(ctx: &CanvasRenderingContext2d, from: (f64, f64), to: (f64, f64)) {
    ctx.begin_path();
    ctx.move_to(from.0, from.1);
    ctx.line_to(to.0, to.1);
    ctx.stroke();
}

/// `cols` by `rows` cell grid over the whole surface.
pub(crate) fn grid(ctx: &CanvasRenderingContext2d, bounds: Bounds, cols: u32, rows: u32, color: &str) {
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(1.0);
    for c in 0..=cols {
        let x = bounds.width / cols.max(1) as f64 * c as f64;
        line(ctx, (x, 0.0), (x, bounds.height));
    }
    for r in 0..=rows {
        let y = bounds.height / rows.max(1) as f64 * r as f64;
        line(ctx, (0.0, y), (bounds.width, y));
    }
}

pub(crate) fn polyline(ctx: &CanvasRenderingContext2d, points: impl IntoIterator<Item = (f64, f64)>) {
    ctx.begin_path();
    for (i, (x, y)) in points.into_iter().enumerate() {
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();
}
