// Home page - every section in one scrolling document
use crate::sections::{About, Blog, Contact, Demos, Footer, Hero, Projects};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main>
            <Hero />
            <Projects />
            <About />
            <Demos />
            <Blog />
            <Contact />
        </main>
        <Footer />
    }
}
