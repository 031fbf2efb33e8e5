use folio::content::{Icon, PROFILE};
use folio::FolioConfig;
use leptos::prelude::*;

use crate::browser;
use crate::canvas::ParticleCanvas;

#[component]
pub fn Hero() -> impl IntoView {
    let resume = use_context::<FolioConfig>().unwrap_or_default().resume;

    view! {
        <section id="home" class="hero">
            <ParticleCanvas />
            <div class="container hero-inner">
                <div class="hero-avatar">{PROFILE.initials}</div>
                <h1 class="hero-title">
                    <span class="gradient-text">{PROFILE.name}</span>
                </h1>
                <h2 class="hero-subtitle">{PROFILE.title}</h2>
                <div class="hero-chips">
                    {PROFILE
                        .specializations
                        .iter()
                        .map(|skill| view! { <span class="chip">{*skill}</span> })
                        .collect::<Vec<_>>()}
                </div>
                <p class="hero-description">{PROFILE.description}</p>
                <div class="hero-actions">
                    <a href="/#contact" class="btn btn-primary">
                        {Icon::Mail.glyph()}
                        " Get In Touch"
                    </a>
                    <button class="btn btn-outline" on:click=move |_| browser::download_resume(&resume)>
                        {Icon::Download.glyph()}
                        " Download CV"
                    </button>
                </div>
                <div class="hero-socials">
                    <a href=PROFILE.github target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                        {Icon::Github.glyph()}
                    </a>
                    <a href=PROFILE.linkedin target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                        {Icon::Linkedin.glyph()}
                    </a>
                    <a href=PROFILE.mailto() aria-label="Email">{Icon::Mail.glyph()}</a>
                </div>
            </div>
            <div class="hero-scroll" aria-hidden="true">
                <span></span>
            </div>
        </section>
    }
}
