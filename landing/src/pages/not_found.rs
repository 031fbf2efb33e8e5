use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main class="page-header">
            <div class="container">
                <h1 class="page-title">"404"</h1>
                <p class="page-description">"Nothing lives at this address."</p>
                <A href="/" attr:class="btn btn-primary">"Back home"</A>
            </div>
        </main>
    }
}
