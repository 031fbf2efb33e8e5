use leptos::prelude::*;

use crate::canvas::{AlgorithmVisualizer, SignalDemo, WirelessSimulator};

#[component]
pub fn Demos() -> impl IntoView {
    let (tab, set_tab) = signal("algorithms");
    let tabs = [
        ("algorithms", "Algorithms"),
        ("signal", "Signal Processing"),
        ("wireless", "Wireless"),
    ];

    view! {
        <section id="demos" class="demos">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Interactive Demos"</h2>
                    <p class="section-description">
                        "Sorting and search step by step, waveforms in time and frequency, and a toy radio channel."
                    </p>
                </div>
                <div class="demo-tabs">
                    {tabs
                        .iter()
                        .map(|&(key, label)| {
                            view! {
                                <button
                                    class="drawer-tab"
                                    class:active=move || tab.get() == key
                                    on:click=move |_| set_tab.set(key)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                // Only the visible demo is mounted, so only one loop runs.
                {move || match tab.get() {
                    "signal" => view! { <SignalDemo /> }.into_any(),
                    "wireless" => view! { <WirelessSimulator /> }.into_any(),
                    _ => view! { <AlgorithmVisualizer /> }.into_any(),
                }}
            </div>
        </section>
    }
}
