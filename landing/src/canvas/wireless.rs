//! Wireless channel and constellation simulator.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use folio::wireless::{self, Channel, Modulation, Scenario, SYMBOLS_PER_FRAME, TX_X};
use folio::Bounds;
use leptos::prelude::*;
use rand::Rng;
use rand::rngs::StdRng;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{context_2d, dot, fit, line, polyline, rng};
use crate::frame::AnimationLoop;

const TX_COLOR: &str = "#3B82F6";
const RX_COLOR: &str = "#10B981";
const SCENARIOS: [(&str, &str); 4] = [
    ("line-of-sight", "Line of Sight"),
    ("multipath", "Multipath"),
    ("fading", "Rayleigh Fading"),
    ("mimo", "MIMO"),
];

fn describe(scenario: Scenario) -> String {
    match scenario {
        Scenario::LineOfSight => {
            "Clear line of sight with minimal interference. Ideal conditions for a wireless link.".into()
        }
        Scenario::Multipath => {
            "Reflections and scattering create several delayed copies of the signal, causing intersymbol interference."
                .into()
        }
        Scenario::Fading => {
            "Rayleigh fading: the received amplitude varies randomly, as it does for mobile receivers.".into()
        }
        Scenario::Mimo { antennas } => format!(
            "Multiple-input multiple-output link with {antennas} antennas per side for extra capacity and diversity."
        ),
    }
}

struct Sim {
    scene: HtmlCanvasElement,
    constellation: HtmlCanvasElement,
    channel: Channel,
    rng: StdRng,
}

impl Sim {
    fn new(scene: HtmlCanvasElement, constellation: HtmlCanvasElement, scenario: Scenario, snr_db: f64) -> Self {
        let mut rng = rng();
        let channel = Channel::new(scenario, snr_db, fit(&scene), &mut rng);
        Self {
            scene,
            constellation,
            channel,
            rng,
        }
    }

    fn step(&mut self) {
        let bounds = fit(&self.scene);
        if bounds != self.channel.bounds() {
            self.channel.resize(bounds, &mut self.rng);
        }
        self.channel.step(&mut self.rng);
    }

    fn draw(&mut self, modulation: Modulation, doppler_hz: f64) {
        if let Some(ctx) = context_2d(&self.scene) {
            paint_channel(&ctx, &self.channel, modulation, doppler_hz);
        }
        if let Some(ctx) = context_2d(&self.constellation) {
            let bounds = fit(&self.constellation);
            paint_constellation(&ctx, bounds, &self.channel, modulation, &mut self.rng);
        }
    }
}

fn station(ctx: &CanvasRenderingContext2d, x: f64, y: f64, color: &str, label: &str) {
    dot(ctx, x, y, 15.0, color);
    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("12px Arial");
    ctx.set_text_align("center");
    let _ = ctx.fill_text(label, x, y + 4.0);
}

fn paint_channel(ctx: &CanvasRenderingContext2d, channel: &Channel, modulation: Modulation, doppler_hz: f64) {
    let bounds = channel.bounds();
    let (w, h) = (bounds.width, bounds.height);
    ctx.clear_rect(0.0, 0.0, w, h);

    ctx.set_stroke_style_str("rgba(100, 100, 100, 0.2)");
    ctx.set_line_width(1.0);
    let mut x = 0.0;
    while x < w {
        line(ctx, (x, 0.0), (x, h));
        x += 50.0;
    }
    let mut y = 0.0;
    while y < h {
        line(ctx, (0.0, y), (w, y));
        y += 50.0;
    }

    let rx_x = w - 50.0;
    station(ctx, TX_X, h / 2.0, TX_COLOR, "TX");
    station(ctx, rx_x, h / 2.0, RX_COLOR, "RX");
    let scenario = channel.scenario();
    if matches!(scenario, Scenario::Mimo { .. }) {
        for offset in scenario.antenna_offsets() {
            dot(ctx, TX_X, h / 2.0 + offset, 8.0, TX_COLOR);
            dot(ctx, rx_x, h / 2.0 + offset, 8.0, RX_COLOR);
        }
    }

    for speck in channel.noise() {
        let fill = format!("rgba(255, 100, 100, {})", (speck.amplitude.abs() * 2.0).min(1.0));
        dot(ctx, speck.x, speck.y, 2.0, &fill);
    }

    for wave in channel.waves() {
        ctx.set_stroke_style_str(&format!("rgba(59, 130, 246, {})", wave.amplitude));
        ctx.set_line_width(2.0);
        polyline(ctx, channel.trace(wave, 0.0).into_iter().map(|p| (p.x, p.y)));

        if doppler_hz > 0.0 {
            ctx.set_stroke_style_str(&format!("rgba(255, 165, 0, {})", wave.amplitude * 0.5));
            ctx.set_line_width(1.0);
            let dash = js_sys::Array::of2(&5.0.into(), &5.0.into());
            let _ = ctx.set_line_dash(&dash);
            polyline(ctx, channel.trace(wave, doppler_hz).into_iter().map(|p| (p.x, p.y)));
            let _ = ctx.set_line_dash(&js_sys::Array::new());
        }
    }

    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("14px Arial");
    ctx.set_text_align("left");
    let _ = ctx.fill_text(&format!("Scenario: {}", scenario.to_string().to_uppercase()), 10.0, 30.0);
    let _ = ctx.fill_text(&format!("SNR: {} dB", channel.snr_db()), 10.0, 50.0);
    let _ = ctx.fill_text(&format!("Modulation: {}", modulation.label()), 10.0, 70.0);
    if doppler_hz > 0.0 {
        let _ = ctx.fill_text(&format!("Doppler: {doppler_hz} Hz"), 10.0, 90.0);
    }
}

fn paint_constellation<R: Rng + ?Sized>(
    ctx: &CanvasRenderingContext2d,
    bounds: Bounds,
    channel: &Channel,
    modulation: Modulation,
    rng: &mut R,
) {
    let (w, h) = (bounds.width, bounds.height);
    ctx.clear_rect(0.0, 0.0, w, h);
    let center = bounds.center();
    let scale = w.min(h) * 0.3;

    ctx.set_stroke_style_str("rgba(255, 255, 255, 0.3)");
    ctx.set_line_width(1.0);
    line(ctx, (0.0, center.y), (w, center.y));
    line(ctx, (center.x, 0.0), (center.x, h));
    for ring in [0.5, 1.0, 1.5] {
        ctx.begin_path();
        let _ = ctx.arc(center.x, center.y, ring * scale, 0.0, TAU);
        ctx.stroke();
    }

    for point in modulation.constellation() {
        dot(ctx, center.x + point.i * scale, center.y - point.q * scale, 4.0, TX_COLOR);
    }

    let received = wireless::received_symbols(
        modulation,
        channel.scenario(),
        channel.snr_db(),
        SYMBOLS_PER_FRAME,
        rng,
    );
    for symbol in received {
        let fill = format!("rgba(16, 185, 129, {})", rng.gen_range(0.3..0.7));
        dot(ctx, center.x + symbol.i * scale, center.y - symbol.q * scale, 2.0, &fill);
    }

    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("12px Arial");
    ctx.set_text_align("center");
    let _ = ctx.fill_text("I", w - 15.0, center.y - 10.0);
    let _ = ctx.fill_text("Q", center.x + 10.0, 15.0);
}

/// Channel propagation and constellation views with scenario controls.
#[component]
pub fn WirelessSimulator() -> impl IntoView {
    let scene_ref = NodeRef::<leptos::html::Canvas>::new();
    let constellation_ref = NodeRef::<leptos::html::Canvas>::new();
    let scenario = RwSignal::new(Scenario::default());
    let modulation = RwSignal::new(Modulation::default());
    let snr = RwSignal::new(20.0_f64);
    let doppler = RwSignal::new(0.0_f64);
    let playing = RwSignal::new(false);
    let sim = StoredValue::new_local(None::<Rc<RefCell<Sim>>>);
    let ticker = StoredValue::new_local(None::<AnimationLoop>);

    let redraw = move || {
        if let Some(sim) = sim.get_value() {
            sim.borrow_mut().draw(modulation.get_untracked(), doppler.get_untracked());
        }
    };

    // Scenario and SNR changes rebuild the channel; play state does not.
    Effect::new(move |_| {
        let (Some(scene), Some(constellation)) = (scene_ref.get(), constellation_ref.get()) else {
            return;
        };
        let fresh = Sim::new(scene, constellation, scenario.get(), snr.get());
        sim.set_value(Some(Rc::new(RefCell::new(fresh))));
        if !playing.get_untracked() {
            redraw();
        }
    });

    Effect::new(move |_| {
        ticker.set_value(None);
        if playing.get() {
            ticker.set_value(AnimationLoop::start(move |_| {
                let Some(current) = sim.get_value() else {
                    return;
                };
                let mut current = current.borrow_mut();
                current.step();
                current.draw(modulation.get_untracked(), doppler.get_untracked());
            }));
        }
    });

    Effect::new(move |_| {
        modulation.track();
        doppler.track();
        if !playing.get_untracked() {
            redraw();
        }
    });

    on_cleanup(move || {
        ticker.set_value(None);
        sim.set_value(None);
    });

    let antennas = move || match scenario.get() {
        Scenario::Mimo { antennas } => antennas,
        _ => 2,
    };
    let number_input = |ev: leptos::ev::Event| event_target_value(&ev).parse::<f64>().ok();

    view! {
        <div class="demo-card wireless-demo">
            <div class="demo-controls">
                {SCENARIOS
                    .iter()
                    .map(|&(key, label)| {
                        view! {
                            <button
                                class="chip"
                                class:active=move || scenario.get().as_str() == key
                                on:click=move |_| {
                                    if let Ok(choice) = key.parse::<Scenario>() {
                                        scenario.set(choice);
                                    }
                                }
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="demo-controls">
                {Modulation::ALL
                    .iter()
                    .map(|&choice| {
                        view! {
                            <button
                                class="chip"
                                class:active=move || modulation.get() == choice
                                on:click=move |_| modulation.set(choice)
                            >
                                {choice.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="demo-controls">
                <button class="btn" on:click=move |_| playing.update(|p| *p = !*p)>
                    {move || if playing.get() { "Pause" } else { "Play" }}
                </button>
                <button
                    class="btn"
                    on:click=move |_| {
                        playing.set(false);
                        scenario.notify();
                    }
                >
                    "Reset"
                </button>
                <label class="demo-slider">
                    "SNR"
                    <input
                        type="range"
                        min="0"
                        max="30"
                        prop:value=move || snr.get().to_string()
                        on:input=move |ev| {
                            if let Some(v) = number_input(ev) {
                                snr.set(v.clamp(0.0, 30.0));
                            }
                        }
                    />
                    <span class="demo-value">{move || format!("{} dB", snr.get())}</span>
                </label>
                <label class="demo-slider">
                    "Doppler"
                    <input
                        type="range"
                        min="0"
                        max="100"
                        prop:value=move || doppler.get().to_string()
                        on:input=move |ev| {
                            if let Some(v) = number_input(ev) {
                                doppler.set(v.clamp(0.0, 100.0));
                            }
                        }
                    />
                    <span class="demo-value">{move || format!("{} Hz", doppler.get())}</span>
                </label>
                <Show when=move || matches!(scenario.get(), Scenario::Mimo { .. })>
                    <label class="demo-slider">
                        "Antennas"
                        <input
                            type="range"
                            min="1"
                            max="4"
                            prop:value=move || antennas().to_string()
                            on:input=move |ev| {
                                if let Ok(n) = event_target_value(&ev).parse::<u8>() {
                                    scenario.set(Scenario::mimo(n));
                                }
                            }
                        />
                        <span class="demo-value">{move || format!("{0}x{0}", antennas())}</span>
                    </label>
                </Show>
            </div>
            <div class="demo-canvases">
                <canvas node_ref=scene_ref class="demo-canvas scope"></canvas>
                <canvas node_ref=constellation_ref class="demo-canvas scope"></canvas>
            </div>
            <div class="demo-info">
                <h4>{move || format!("Current scenario: {}", scenario.get().to_string().to_uppercase())}</h4>
                <p>{move || describe(scenario.get())}</p>
                <p class="demo-value">
                    {move || {
                        let m = modulation.get();
                        format!(
                            "{} carries {} bits per symbol; noise level {:.3}",
                            m.label(),
                            m.bits_per_symbol(),
                            wireless::noise_level(snr.get()),
                        )
                    }}
                </p>
            </div>
        </div>
    }
}
