use folio::content::{CONTACT_LINKS, PROFILE};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-logo">{PROFILE.initials}</span>
                    <span class="footer-title">{PROFILE.name}</span>
                </div>
                <div class="footer-links">
                    {CONTACT_LINKS
                        .iter()
                        .map(|link| {
                            view! { <a href=link.href target="_blank" rel="noopener" class="footer-link">{link.label}</a> }
                        })
                        .collect::<Vec<_>>()}
                    <a href=PROFILE.mailto() class="footer-link">"Email"</a>
                </div>
                <p class="footer-copyright">"Built with Rust + Leptos by " {PROFILE.name} " (c)2025"</p>
            </div>
        </footer>
    }
}
