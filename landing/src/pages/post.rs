// Blog post page
use folio::content::{self, Block, BlogPost, Icon, LinkKind};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::NotFound;
use crate::sections::Footer;

fn block(block: &Block) -> AnyView {
    match *block {
        Block::Heading(text) => view! { <h2>{text}</h2> }.into_any(),
        Block::Subheading(text) => view! { <h3>{text}</h3> }.into_any(),
        Block::Paragraph(text) => view! { <p>{text}</p> }.into_any(),
        Block::Bullets(items) => view! {
            <ul>{items.iter().map(|item| view! { <li>{*item}</li> }).collect::<Vec<_>>()}</ul>
        }
        .into_any(),
        Block::Code(code) => view! {
            <pre class="code-block"><code>{code}</code></pre>
        }
        .into_any(),
    }
}

#[component]
fn Article(post: &'static BlogPost) -> impl IntoView {
    view! {
        <article class="post">
            <A href="/#blog" attr:class="post-back">"← Back to blog"</A>
            <header class="post-header">
                <h1 class="page-title">{post.title}</h1>
                <p class="blog-meta">{post.date}" · "{post.read_time}</p>
                <div class="tags">
                    {post.tags.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect::<Vec<_>>()}
                </div>
            </header>
            <div class="post-body">{post.body.iter().map(block).collect::<Vec<_>>()}</div>
            <footer class="post-links">
                {post
                    .links
                    .iter()
                    .map(|link| {
                        let icon = match link.kind {
                            LinkKind::Github => Icon::Github.glyph(),
                            LinkKind::External => "↗",
                        };
                        view! {
                            <a href=link.url target="_blank" rel="noopener noreferrer" class="btn btn-outline btn-sm">
                                {icon}" "{link.label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </footer>
        </article>
    }
}

#[component]
pub fn PostPage() -> impl IntoView {
    let params = use_params_map();
    let post = move || params.with(|p| p.get("slug").and_then(|slug| content::post_by_slug(&slug)));

    view! {
        {move || match post() {
            Some(post) => view! {
                <main class="container">
                    <Article post=post />
                </main>
                <Footer />
            }
            .into_any(),
            None => view! { <NotFound /> }.into_any(),
        }}
    }
}
