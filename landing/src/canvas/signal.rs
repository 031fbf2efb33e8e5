//! Time- and frequency-domain signal demo.

use folio::signal::{self, SignalFrame, SignalKind, SignalParams, TIME_STEP};
use folio::Bounds;
use leptos::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{context_2d, fit, grid, polyline};
use crate::frame::AnimationLoop;

const GRID: &str = "rgba(100, 100, 100, 0.3)";

fn describe(kind: SignalKind) -> &'static str {
    match kind {
        SignalKind::Sine => "Pure sine wave at the selected frequency.",
        SignalKind::Am => {
            "Amplitude modulation: the carrier's amplitude follows a slower modulating tone. Used in AM broadcasting."
        }
        SignalKind::Fm => {
            "Frequency modulation: the carrier's frequency follows the modulating tone, trading bandwidth for noise immunity."
        }
        SignalKind::Filter => {
            "A moving-average low-pass filter strips high-frequency noise and keeps the fundamental."
        }
    }
}

fn surface(canvas: &HtmlCanvasElement) -> Option<(CanvasRenderingContext2d, Bounds)> {
    let ctx = context_2d(canvas)?;
    Some((ctx, fit(canvas)))
}

fn labels(ctx: &CanvasRenderingContext2d, bounds: Bounds, title: &str, x_axis: &str, y_axis: &str) {
    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("12px Arial");
    ctx.set_text_align("left");
    let _ = ctx.fill_text(title, 10.0, 20.0);
    let _ = ctx.fill_text(x_axis, bounds.width - 100.0, bounds.height - 10.0);
    let _ = ctx.fill_text(y_axis, 10.0, bounds.height - 10.0);
}

fn paint_time(canvas: &HtmlCanvasElement, frame: &SignalFrame) {
    let Some((ctx, bounds)) = surface(canvas) else {
        return;
    };
    ctx.clear_rect(0.0, 0.0, bounds.width, bounds.height);
    grid(&ctx, bounds, 8, 4, GRID);

    let center = bounds.height / 2.0;
    let scale_y = bounds.height / 4.0;
    let scale_x = bounds.width / frame.time.len().max(1) as f64;
    ctx.set_stroke_style_str("#3B82F6");
    ctx.set_line_width(2.0);
    polyline(
        &ctx,
        frame
            .amplitude
            .iter()
            .enumerate()
            .map(|(i, amp)| (i as f64 * scale_x, center - amp * scale_y)),
    );
    labels(&ctx, bounds, "Time Domain", "Time (s)", "Amplitude");
}

fn paint_spectrum(canvas: &HtmlCanvasElement, frame: &SignalFrame) {
    let Some((ctx, bounds)) = surface(canvas) else {
        return;
    };
    ctx.clear_rect(0.0, 0.0, bounds.width, bounds.height);
    grid(&ctx, bounds, 1, 4, GRID);

    let bins = frame.spectrum.len().max(1) as f64;
    let bar_width = bounds.width / bins;
    let max = frame.spectrum.iter().copied().fold(0.0_f64, f64::max);
    if max > 0.0 {
        for (i, magnitude) in frame.spectrum.iter().enumerate() {
            let height = magnitude / max * bounds.height * 0.8;
            let hue = i as f64 / bins * 240.0;
            ctx.set_fill_style_str(&format!("hsl({hue}, 70%, 60%)"));
            ctx.fill_rect(i as f64 * bar_width, bounds.height - height, (bar_width - 1.0).max(1.0), height);
        }
    }
    labels(&ctx, bounds, "Frequency Domain (FFT)", "Frequency (Hz)", "Magnitude");
}

#[component]
fn Slider(
    label: &'static str,
    min: f64,
    max: f64,
    step: f64,
    value: Signal<f64>,
    unit: &'static str,
    on_change: impl Fn(f64) + 'static,
) -> impl IntoView {
    view! {
        <label class="demo-slider">
            {label}
            <input
                type="range"
                min=min.to_string()
                max=max.to_string()
                step=step.to_string()
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                        on_change(v);
                    }
                }
            />
            <span class="demo-value">{move || format!("{:.1}{unit}", value.get())}</span>
        </label>
    }
}

/// Sine, AM, FM and low-pass demos drawn in both domains.
#[component]
pub fn SignalDemo() -> impl IntoView {
    let time_ref = NodeRef::<leptos::html::Canvas>::new();
    let spectrum_ref = NodeRef::<leptos::html::Canvas>::new();
    let params = RwSignal::new(SignalParams::default());
    let playing = RwSignal::new(false);
    let clock = StoredValue::new(0.0_f64);
    let ticker = StoredValue::new_local(None::<AnimationLoop>);

    let draw = move || {
        let (Some(time_canvas), Some(spectrum_canvas)) = (time_ref.get_untracked(), spectrum_ref.get_untracked())
        else {
            return;
        };
        let frame = signal::generate(&params.get_untracked(), clock.get_value());
        paint_time(&time_canvas, &frame);
        paint_spectrum(&spectrum_canvas, &frame);
    };

    Effect::new(move |_| {
        time_ref.track();
        spectrum_ref.track();
        params.track();
        ticker.set_value(None);
        if playing.get() {
            ticker.set_value(AnimationLoop::start(move |_| {
                clock.update_value(|t| *t += TIME_STEP);
                draw();
            }));
        } else {
            draw();
        }
    });
    on_cleanup(move || ticker.set_value(None));

    let set = move |apply: fn(&mut SignalParams, f64)| {
        move |v: f64| {
            params.update(|p| {
                apply(p, v);
                *p = p.clamped();
            })
        }
    };
    let kind = move || params.with(|p| p.kind);

    view! {
        <div class="demo-card signal-demo">
            <div class="demo-controls">
                {SignalKind::ALL
                    .iter()
                    .map(|&choice| {
                        view! {
                            <button
                                class="chip"
                                class:active=move || kind() == choice
                                on:click=move |_| params.update(|p| p.kind = choice)
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
                        clock.set_value(0.0);
                        draw();
                    }
                >
                    "Reset"
                </button>
                <Slider
                    label="Frequency"
                    min=1.0
                    max=20.0
                    step=1.0
                    value=Signal::derive(move || params.with(|p| p.frequency))
                    unit="Hz"
                    on_change=set(|p, v| p.frequency = v)
                />
                <Slider
                    label="Amplitude"
                    min=0.1
                    max=2.0
                    step=0.1
                    value=Signal::derive(move || params.with(|p| p.amplitude))
                    unit=""
                    on_change=set(|p, v| p.amplitude = v)
                />
                <Show when=move || kind() == SignalKind::Filter>
                    <Slider
                        label="Cutoff"
                        min=5.0
                        max=50.0
                        step=1.0
                        value=Signal::derive(move || params.with(|p| p.cutoff))
                        unit="Hz"
                        on_change=set(|p, v| p.cutoff = v)
                    />
                </Show>
            </div>
            <div class="demo-canvases">
                <canvas node_ref=time_ref class="demo-canvas scope"></canvas>
                <canvas node_ref=spectrum_ref class="demo-canvas scope"></canvas>
            </div>
            <div class="demo-info">
                <h4>{move || kind().label()}</h4>
                <p>{move || describe(kind())}</p>
                <Show when=move || kind() == SignalKind::Filter>
                    <p class="demo-value">
                        {move || format!("Moving average over {} samples", params.with(|p| p.filter_window()))}
                    </p>
                </Show>
            </div>
        </div>
    }
}
