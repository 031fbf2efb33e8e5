use folio::content::{ACHIEVEMENTS, BIO, DRIVE, EDUCATION, Icon, SKILLS, STATS};
use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about section-muted">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"About Me"</h2>
                    <p class="section-description">
                        "Get to know me more"
                    </p>
                </div>
                <div class="bento">
                    <article class="card bento-wide">
                        <h3>{Icon::Activity.glyph()}" Who I Am"</h3>
                        {BIO.iter().map(|para| view! { <p class="muted">{*para}</p> }).collect::<Vec<_>>()}
                    </article>
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class=format!("card stat {}", stat.accent)>
                                    <span class="stat-value">{stat.value}{stat.suffix}</span>
                                    <span class="stat-label">{stat.label}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <article class="card">
                        <h3>{Icon::Brain.glyph()}" What Drives Me"</h3>
                        <p class="muted">{DRIVE}</p>
                    </article>
                    <article class="card">
                        <h3>{Icon::Code.glyph()}" Skills"</h3>
                        <ul class="skill-list">
                            {SKILLS
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <li class=format!("skill {}", skill.accent)>
                                            <span class="skill-icon">{skill.icon.glyph()}</span>
                                            {skill.name}
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </article>
                    <article class="card">
                        <h3>{Icon::GraduationCap.glyph()}" Education"</h3>
                        {EDUCATION
                            .iter()
                            .map(|edu| {
                                view! {
                                    <div class="education">
                                        <div class="education-head">
                                            <h4>{edu.degree}</h4>
                                            <span class="chip">{edu.years}</span>
                                        </div>
                                        <p class="accent">{edu.school}</p>
                                        <p class="muted small">{edu.note}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </article>
                    {ACHIEVEMENTS
                        .iter()
                        .map(|a| {
                            view! {
                                <div class=format!("card achievement {}", a.accent)>
                                    <span class="achievement-icon">{a.icon.glyph()}</span>
                                    <h4>{a.title}</h4>
                                    <p class="muted small">{a.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
