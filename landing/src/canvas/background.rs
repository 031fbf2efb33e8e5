//! Full-viewport background canvas behind every page.

use std::cell::RefCell;
use std::rc::Rc;

use folio::network::{self, NeuralNetwork, NODE_RADIUS};
use folio::particles::{BackgroundMode, CodeRain};
use folio::{Bounds, FolioConfig};
use leptos::prelude::*;
use rand::rngs::StdRng;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{context_2d, dot, fit, line, polyline, rng};
use crate::frame::{AnimationLoop, ListenerGuard};

const TRAIL: &str = "rgba(15, 23, 42, 0.15)";
const GLYPH_FONT: &str = "16px Monaco, monospace";
const GLOW_BLUR: f64 = 8.0;

struct Scene {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    mode: BackgroundMode,
    speed: f64,
    opacity: f64,
    rain: CodeRain,
    network: NeuralNetwork,
    rng: StdRng,
}

impl Scene {
    fn resize(&mut self) {
        let bounds = fit(&self.canvas);
        self.rain.resize(bounds, &mut self.rng);
        self.network = NeuralNetwork::background(bounds);
    }

    fn bounds(&self) -> Bounds {
        self.rain.bounds()
    }

    fn paint(&mut self, now: f64) {
        let bounds = self.bounds();
        let ctx = &self.ctx;
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(TRAIL);
        ctx.fill_rect(0.0, 0.0, bounds.width, bounds.height);

        match self.mode {
            BackgroundMode::CodeRain => {
                self.rain.step(self.speed, &mut self.rng);
                paint_rain(ctx, &self.rain, self.opacity);
            }
            BackgroundMode::NeuralNetwork => paint_network(ctx, &self.network, now, self.opacity),
            BackgroundMode::DataFlow => paint_flow(ctx, bounds, now, self.opacity),
        }
        ctx.set_global_alpha(1.0);
    }
}

fn paint_rain(ctx: &CanvasRenderingContext2d, rain: &CodeRain, opacity: f64) {
    ctx.set_font(GLYPH_FONT);
    for glyph in rain.glyphs() {
        let color = glyph.kind.color();
        ctx.set_fill_style_str(color);
        ctx.set_global_alpha(glyph.opacity * opacity);
        let _ = ctx.fill_text(glyph.text, glyph.x, glyph.y);

        ctx.set_shadow_color(color);
        ctx.set_shadow_blur(GLOW_BLUR);
        let _ = ctx.fill_text(glyph.text, glyph.x, glyph.y);
        ctx.set_shadow_blur(0.0);
    }
}

fn paint_network(ctx: &CanvasRenderingContext2d, net: &NeuralNetwork, now: f64, opacity: f64) {
    for (from, to) in net.edges() {
        let w = network::weight(from.id, now);
        ctx.set_stroke_style_str(&format!("rgba(59, 130, 246, {})", w * 0.3 * opacity));
        ctx.set_line_width(w * 2.0);
        line(ctx, (from.position.x, from.position.y), (to.position.x, to.position.y));
    }

    for node in net.nodes() {
        let color = node.role.color();
        ctx.set_global_alpha((0.2 + network::activation(node.id, now) * 0.4) * opacity);
        dot(ctx, node.position.x, node.position.y, NODE_RADIUS, color);
        ctx.set_stroke_style_str(color);
        ctx.set_line_width(1.0);
        ctx.set_global_alpha(opacity);
        ctx.stroke();
    }
}

fn paint_flow(ctx: &CanvasRenderingContext2d, bounds: Bounds, now: f64, opacity: f64) {
    for lane in network::data_flow_lanes(bounds, now) {
        ctx.set_stroke_style_str(&format!("hsla({}, 70%, 60%, {})", lane.hue, opacity * 0.8));
        ctx.set_line_width(1.0);
        polyline(ctx, lane.path.iter().map(|p| (p.x, p.y)));

        let fill = format!("hsla({}, 70%, 60%, {opacity})", lane.hue);
        dot(ctx, lane.packet.x, lane.packet.y, 4.0, &fill);
    }
}

/// Animated background. `mode` overrides the configured one.
#[component]
pub fn CodeBackground(#[prop(optional)] mode: Option<BackgroundMode>) -> impl IntoView {
    let config = use_context::<FolioConfig>().unwrap_or_default();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let running = StoredValue::new_local(None::<(AnimationLoop, Option<ListenerGuard>)>);

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let Some(ctx) = context_2d(&canvas) else {
            return;
        };
        let settings = &config.background;
        let mut rng = rng();
        let bounds = fit(&canvas);
        let scene = Rc::new(RefCell::new(Scene {
            rain: CodeRain::new(bounds, settings.glyph_count, &mut rng),
            network: NeuralNetwork::background(bounds),
            canvas,
            ctx,
            mode: mode.unwrap_or(settings.mode),
            speed: settings.speed,
            opacity: settings.opacity,
            rng,
        }));

        let on_resize = {
            let scene = Rc::clone(&scene);
            ListenerGuard::window("resize", move |_| scene.borrow_mut().resize())
        };
        let animation = AnimationLoop::start(move |now| scene.borrow_mut().paint(now));
        running.set_value(animation.map(|a| (a, on_resize)));
    });

    on_cleanup(move || running.set_value(None));

    view! { <canvas node_ref=canvas_ref class="code-background" aria-hidden="true"></canvas> }
}
