//! Step-through sorting and searching visualizer.

use folio::algorithms::{self, Algorithm, BarState, Frame};
use folio::playback::{Playback, SPEED_RANGE};
use leptos::prelude::*;
use web_sys::CanvasRenderingContext2d;

use super::{context_2d, fit, rng};
use crate::frame::IntervalLoop;

const DEFAULT_TARGET: u32 = 42;
const LABEL_BAND: f64 = 20.0;

const LEGEND: [(BarState, &str); 6] = [
    (BarState::Default, "Default"),
    (BarState::Comparing, "Comparing"),
    (BarState::Swapping, "Swapping"),
    (BarState::Sorted, "Sorted"),
    (BarState::Pivot, "Pivot"),
    (BarState::Found, "Found"),
];

fn paint(ctx: &CanvasRenderingContext2d, width: f64, height: f64, frame: &Frame) {
    ctx.clear_rect(0.0, 0.0, width, height);
    if frame.bars.is_empty() {
        return;
    }
    let bar_width = width / frame.bars.len() as f64;
    let max = frame.bars.iter().map(|b| b.value).max().unwrap_or(1).max(1) as f64;

    ctx.set_font("12px Arial");
    ctx.set_text_align("center");
    for (index, bar) in frame.bars.iter().enumerate() {
        let bar_height = bar.value as f64 / max * (height - 2.0 * LABEL_BAND);
        let x = index as f64 * bar_width;
        let y = height - bar_height - LABEL_BAND;
        ctx.set_fill_style_str(bar.state.color());
        ctx.fill_rect(x + 2.0, y, (bar_width - 4.0).max(1.0), bar_height);

        ctx.set_fill_style_str("#94a3b8");
        let _ = ctx.fill_text(&bar.value.to_string(), x + bar_width / 2.0, height - 5.0);
    }

    if let Some(bounds) = frame.bounds {
        ctx.set_fill_style_str("#e2e8f0");
        for (index, mark) in [(bounds.left, "L"), (bounds.mid, "M"), (bounds.right, "R")] {
            let _ = ctx.fill_text(mark, (index as f64 + 0.5) * bar_width, 14.0);
        }
    }
}

/// Sorting and search demo with play, pause, reset, speed and target.
#[component]
pub fn AlgorithmVisualizer() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let algorithm = RwSignal::new(Algorithm::Bubble);
    let target = RwSignal::new(DEFAULT_TARGET);
    let frames = RwSignal::new(Vec::<Frame>::new());
    let playback = RwSignal::new(Playback::new(0));
    let ticker = StoredValue::new_local(None::<IntervalLoop>);

    let regenerate = move || {
        let (algorithm, target) = (algorithm.get_untracked(), target.get_untracked());
        let values = algorithms::values_for(algorithm, target, &mut rng());
        let recorded = algorithms::record(algorithm, &values, target);
        playback.update(|p| p.load(recorded.len()));
        frames.set(recorded);
    };

    Effect::new(move |_| {
        algorithm.track();
        target.track();
        regenerate();
    });

    // Only restart the timer when play state or speed change, not on every tick.
    let cadence = Memo::new(move |_| playback.with(|p| p.is_playing().then(|| p.interval_ms())));
    Effect::new(move |_| {
        ticker.set_value(None);
        if let Some(period) = cadence.get() {
            ticker.set_value(IntervalLoop::start(period, move || {
                playback.update(|p| {
                    p.tick();
                });
            }));
        }
    });
    on_cleanup(move || ticker.set_value(None));

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let Some(ctx) = context_2d(&canvas) else {
            return;
        };
        let bounds = fit(&canvas);
        let position = playback.with(|p| p.position());
        frames.with(|frames| {
            if let Some(frame) = frames.get(position) {
                paint(&ctx, bounds.width, bounds.height, frame);
            }
        });
    });

    let progress = move || playback.with(|p| format!("width: {:.1}%", p.progress() * 100.0));
    let step_label = move || {
        playback.with(|p| {
            let shown = if p.is_empty() { 0 } else { p.position() + 1 };
            format!("Step {shown} of {}", p.len())
        })
    };
    let outcome = move || {
        let algorithm = algorithm.get();
        if !algorithm.is_search() {
            return String::new();
        }
        frames.with(|frames| match frames.last().and_then(Frame::found) {
            Some(index) => format!("{} found at index {index}", target.get()),
            None => format!("{} not in array", target.get()),
        })
    };

    view! {
        <div class="demo-card algorithm-visualizer">
            <div class="demo-controls">
                {Algorithm::ALL
                    .iter()
                    .map(|&choice| {
                        view! {
                            <button
                                class="chip"
                                class:active=move || algorithm.get() == choice
                                title=choice.complexity()
                                on:click=move |_| algorithm.set(choice)
                            >
                                {choice.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="demo-controls">
                <button class="btn" on:click=move |_| playback.update(|p| p.toggle())>
                    {move || if playback.with(|p| p.is_playing()) { "Pause" } else { "Play" }}
                </button>
                <button class="btn" on:click=move |_| playback.update(|p| p.reset())>"Reset"</button>
                <button class="btn" on:click=move |_| regenerate()>"New Array"</button>
                <label class="demo-slider">
                    "Speed"
                    <input
                        type="range"
                        min=SPEED_RANGE.start().to_string()
                        max=SPEED_RANGE.end().to_string()
                        prop:value=move || playback.with(|p| p.speed().to_string())
                        on:input=move |ev| {
                            if let Ok(speed) = event_target_value(&ev).parse::<u32>() {
                                playback.update(|p| p.set_speed(speed));
                            }
                        }
                    />
                </label>
                <Show when=move || algorithm.get().is_search()>
                    <label class="demo-slider">
                        "Target"
                        <input
                            type="number"
                            min="1"
                            max=algorithms::MAX_VALUE.to_string()
                            prop:value=move || target.get().to_string()
                            on:change=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                    target.set(value.clamp(1, algorithms::MAX_VALUE));
                                }
                            }
                        />
                    </label>
                </Show>
            </div>
            <div class="demo-progress">
                <div class="demo-progress-label">
                    <span>{step_label}</span>
                    <span>{move || algorithm.get().complexity()}</span>
                </div>
                <div class="demo-progress-track">
                    <div class="demo-progress-fill" style=progress></div>
                </div>
            </div>
            <canvas node_ref=canvas_ref class="demo-canvas"></canvas>
            <p class="demo-outcome">{outcome}</p>
            <div class="demo-legend">
                {LEGEND
                    .iter()
                    .map(|&(state, name)| {
                        view! {
                            <span class="legend-item">
                                <span class="legend-swatch" style=format!("background: {}", state.color())></span>
                                {name}
                            </span>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
