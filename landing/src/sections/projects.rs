use folio::content::{self, Icon, Project};
use leptos::prelude::*;

#[component]
fn ProjectCard(project: &'static Project, featured: bool) -> impl IntoView {
    view! {
        <article class="card project-card" class:featured=featured>
            <header class="project-head">
                <span class=format!("project-icon {}", project.accent)>{project.icon.glyph()}</span>
                <h3>{project.title}</h3>
            </header>
            <p class="muted">{project.description}</p>
            <div class="tags">
                {project.technologies.iter().map(|tech| view! { <span class="tag">{*tech}</span> }).collect::<Vec<_>>()}
            </div>
            <div class="project-links">
                <a href=project.github target="_blank" rel="noopener noreferrer" class="btn btn-outline btn-sm">
                    {Icon::Github.glyph()}" Code"
                </a>
                {project.demo.map(|demo| {
                    view! {
                        <a href=demo target="_blank" rel="noopener noreferrer" class="btn btn-primary btn-sm">
                            "Demo ↗"
                        </a>
                    }
                })}
            </div>
        </article>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="projects section-muted">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Projects"</h2>
                </div>
                <div class="project-grid featured">
                    {content::featured_projects()
                        .map(|project| view! { <ProjectCard project=project featured=true /> })
                        .collect::<Vec<_>>()}
                </div>
                <div class="project-grid">
                    {content::other_projects()
                        .map(|project| view! { <ProjectCard project=project featured=false /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
