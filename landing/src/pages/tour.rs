// Tour page - the same sections, one at a time in depth
use crate::perspective::PerspectiveScroll;
use crate::sections::{About, Contact, Demos, Hero, Projects};
use leptos::prelude::*;

#[component]
pub fn TourPage() -> impl IntoView {
    let sections = vec![
        ("home", view! { <Hero /> }.into_any()),
        ("projects", view! { <Projects /> }.into_any()),
        ("about", view! { <About /> }.into_any()),
        ("demos", view! { <Demos /> }.into_any()),
        ("contact", view! { <Contact /> }.into_any()),
    ];

    view! {
        <main class="tour">
            <PerspectiveScroll sections=sections />
        </main>
    }
}
