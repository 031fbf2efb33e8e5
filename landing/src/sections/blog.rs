use folio::content::{self, BlogPost};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
fn PostCard(post: &'static BlogPost) -> impl IntoView {
    view! {
        <A href=post.href() attr:class="card blog-card">
            <div class="blog-card-header">
                <span class="blog-meta">{post.date}" · "{post.read_time}</span>
            </div>
            <h3 class="blog-title">{post.title}</h3>
            <p class="blog-subtitle">{post.excerpt}</p>
            <div class="tags">
                {post.tags.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect::<Vec<_>>()}
            </div>
            <div class="blog-cta">"Read more" <span class="arrow">"→"</span></div>
        </A>
    }
}

#[component]
pub fn Blog() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let split = Signal::derive(move || query.with(|q| content::split_featured(&content::search_posts(q))));

    let grid = move |posts: Vec<&'static BlogPost>| {
        posts
            .into_iter()
            .map(|post| view! { <PostCard post=post /> })
            .collect::<Vec<_>>()
    };

    view! {
        <section id="blog" class="blog">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Blog"</h2>
                    <p class="section-description">
                        "Notes on signal processing, machine learning and the maths behind them."
                    </p>
                </div>
                <input
                    type="search"
                    class="blog-search"
                    placeholder="Search posts, tags..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <Show
                    when=move || split.with(|(featured, other)| !featured.is_empty() || !other.is_empty())
                    fallback=|| view! { <p class="muted">"No posts match your search."</p> }
                >
                    <Show when=move || split.with(|(featured, _)| !featured.is_empty())>
                        <h3 class="blog-group">"Featured"</h3>
                        <div class="blog-grid featured">{move || grid(split.get().0)}</div>
                    </Show>
                    <Show when=move || split.with(|(_, other)| !other.is_empty())>
                        <h3 class="blog-group">"More posts"</h3>
                        <div class="blog-grid">{move || grid(split.get().1)}</div>
                    </Show>
                </Show>
            </div>
        </section>
    }
}
