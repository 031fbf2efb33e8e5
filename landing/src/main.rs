// Axel Sundqvist portfolio - Leptos 0.8 edition
// Built by Axel Sundqvist (c)2025

mod browser;
mod canvas;
mod config;
mod frame;
mod pages;
mod perspective;
mod sections;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use canvas::CodeBackground;
use pages::{HomePage, NotFound, PostPage, TourPage};
use perspective::ActiveNavigator;
use sections::{ConsoleBanner, Nav};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    provide_context(config::site_config());
    provide_context(ActiveNavigator::default());

    view! {
        <Router>
            <ConsoleBanner />
            <CodeBackground />
            <Nav />
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/tour") view=TourPage />
                <Route path=path!("/blog/:slug") view=PostPage />
            </Routes>
        </Router>
    }
}
