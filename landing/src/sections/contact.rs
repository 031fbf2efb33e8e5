use folio::content::{CONTACT_LINKS, Icon, PROFILE, TOPICS};
use folio::FolioConfig;
use leptos::prelude::*;

use crate::browser;
use crate::frame::Timeout;

const COPIED_FOR_MS: u32 = 2000;

#[component]
pub fn Contact() -> impl IntoView {
    let resume = use_context::<FolioConfig>().unwrap_or_default().resume;
    let preview = resume.clone();
    let (status, availability) = PROFILE.availability;

    let (copied, set_copied) = signal(false);
    let reset = StoredValue::new_local(None::<Timeout>);
    on_cleanup(move || reset.set_value(None));
    let copy_email = move |_| {
        leptos::task::spawn_local(async move {
            match browser::copy_text(PROFILE.email).await {
                // the section may be gone by the time the promise settles
                Ok(()) => {
                    if set_copied.try_set(true).is_none() {
                        let _ = reset.try_set_value(Timeout::start(COPIED_FOR_MS, move || {
                            set_copied.set(false)
                        }));
                    }
                }
                Err(err) => browser::report("copy email", Err(err)),
            }
        });
    };

    view! {
        <section id="contact" class="contact">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Get In Touch"</h2>
                    <p class="section-description">"Let's discuss opportunities and collaborations"</p>
                </div>
                <div class="bento">
                    <a href=PROFILE.mailto() class="card bento-wide contact-email">
                        <span class="contact-icon">{Icon::Mail.glyph()}</span>
                        <h3>"Send me an email"</h3>
                        <p class="muted">"The best way to reach me for opportunities and collaborations."</p>
                        <span class="accent">{PROFILE.email}</span>
                    </a>
                    <button class="btn btn-outline btn-sm contact-copy" on:click=copy_email>
                        {move || if copied.get() { "copied" } else { "copy email" }}
                    </button>
                    {CONTACT_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="card contact-link"
                                    target=link.external.then_some("_blank")
                                    rel=link.external.then_some("noopener noreferrer")
                                >
                                    <span class="contact-icon">{link.icon.glyph()}</span>
                                    <h4>{link.label}</h4>
                                    <p class="muted small">{link.detail}</p>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <div class="card">
                        <span class="contact-icon">{Icon::MapPin.glyph()}</span>
                        <p class="muted small">"Location"</p>
                        <p>{PROFILE.location}</p>
                    </div>
                    <div class="card availability">
                        <span class="pulse" aria-hidden="true"></span>
                        <p>{status}</p>
                        <p class="muted small">{availability}</p>
                    </div>
                    <div class="card resume-card">
                        <button class="resume-download" on:click=move |_| browser::download_resume(&resume)>
                            <span class="contact-icon">{Icon::Download.glyph()}</span>
                            <h4>"Download Resume"</h4>
                            <p class="muted small">"Get my full CV in PDF"</p>
                        </button>
                        <button class="btn btn-outline btn-sm" on:click=move |_| browser::preview_resume(&preview)>
                            "Preview"
                        </button>
                    </div>
                    <div class="card bento-wide topics">
                        <span class="muted small">{Icon::Message.glyph()}" Good topics to discuss"</span>
                        <div class="tags">
                            {TOPICS.iter().map(|t| view! { <span class="tag">{*t}</span> }).collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
