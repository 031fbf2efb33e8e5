//! Pointer-reactive particle layer for the hero section.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use folio::particles::ParticleField;
use folio::{FolioConfig, Point};
use leptos::prelude::*;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{context_2d, fit, line, rng};
use crate::frame::{AnimationLoop, ListenerGuard};

struct Field {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    field: ParticleField,
    pointer: Option<Point>,
    rng: StdRng,
}

impl Field {
    fn paint(&mut self) {
        let bounds = self.field.bounds();
        self.ctx.clear_rect(0.0, 0.0, bounds.width, bounds.height);
        self.field.step(self.pointer);

        let ctx = &self.ctx;
        let particles = self.field.particles();
        for p in particles {
            let reach = p.size * 3.0;
            let Ok(glow) = ctx.create_radial_gradient(p.x, p.y, 0.0, p.x, p.y, reach) else {
                continue;
            };
            let _ = glow.add_color_stop(0.0, &format!("hsla({}, 80%, 60%, {})", p.hue, p.opacity));
            let _ = glow.add_color_stop(0.5, &format!("hsla({}, 80%, 60%, {})", p.hue, p.opacity * 0.3));
            let _ = glow.add_color_stop(1.0, "transparent");
            ctx.begin_path();
            let _ = ctx.arc(p.x, p.y, reach, 0.0, TAU);
            ctx.set_fill_style_canvas_gradient(&glow);
            ctx.fill();
        }

        ctx.set_line_width(0.5);
        for link in self.field.links() {
            let (a, b) = (&particles[link.a], &particles[link.b]);
            ctx.set_stroke_style_str(&format!("hsla({}, 70%, 50%, {})", (a.hue + b.hue) / 2.0, link.alpha));
            line(ctx, (a.x, a.y), (b.x, b.y));
        }

        if let Some(pointer) = self.pointer {
            ctx.set_line_width(1.0);
            for link in self.field.pointer_links(pointer) {
                let p = &particles[link.index];
                ctx.set_stroke_style_str(&format!("hsla({}, 100%, 70%, {})", p.hue, link.alpha));
                line(ctx, (p.x, p.y), (pointer.x, pointer.y));
            }
        }
    }

    fn resize(&mut self) {
        let bounds = fit(&self.canvas);
        self.field.resize(bounds, &mut self.rng);
    }

    /// Window-level pointer, so content layered over the canvas does not
    /// hide it from the field.
    fn track(&mut self, event: &web_sys::MouseEvent) {
        let rect = self.canvas.get_bounding_client_rect();
        self.pointer = self.field.bounds().localize(
            Point::new(rect.left(), rect.top()),
            Point::new(event.client_x() as f64, event.client_y() as f64),
        );
    }
}

/// Canvas that fills its parent with linked, drifting particles.
#[component]
pub fn ParticleCanvas() -> impl IntoView {
    let config = use_context::<FolioConfig>().unwrap_or_default();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let running = StoredValue::new_local(None::<(AnimationLoop, Vec<ListenerGuard>)>);

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let Some(ctx) = context_2d(&canvas) else {
            return;
        };
        let mut rng = rng();
        let field = ParticleField::new(fit(&canvas), config.field.clone(), &mut rng);
        let state = Rc::new(RefCell::new(Field {
            canvas,
            ctx,
            field,
            pointer: None,
            rng,
        }));

        let mut guards = Vec::new();
        let s = Rc::clone(&state);
        guards.extend(ListenerGuard::window("resize", move |_| s.borrow_mut().resize()));
        let s = Rc::clone(&state);
        guards.extend(ListenerGuard::window("mousemove", move |event| {
            if let Ok(mouse) = event.dyn_into::<web_sys::MouseEvent>() {
                s.borrow_mut().track(&mouse);
            }
        }));
        let s = Rc::clone(&state);
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            guards.extend(ListenerGuard::new(root.as_ref(), "mouseleave", move |_| {
                s.borrow_mut().pointer = None;
            }));
        }

        let animation = AnimationLoop::start(move |_| state.borrow_mut().paint());
        running.set_value(animation.map(|a| (a, guards)));
    });

    on_cleanup(move || running.set_value(None));

    view! { <canvas node_ref=canvas_ref class="particle-canvas" aria-hidden="true"></canvas> }
}
