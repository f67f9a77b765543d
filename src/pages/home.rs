//! Public landing page listing published posts.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::util::datetime::format_timestamp;

/// Public blog list, fetched from `/posts/` on mount.
#[component]
pub fn HomePage() -> impl IntoView {
    let posts = LocalResource::new(|| crate::net::api::fetch_posts());

    view! {
        <Layout>
            <section class="blog-list">
                <h1>"Latest posts"</h1>
                <Suspense fallback=move || view! { <p>"Loading posts..."</p> }>
                    {move || {
                        posts
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! { <p class="muted">"No posts yet."</p> }.into_any()
                                } else {
                                    view! {
                                        <div class="blog-list__cards">
                                            {list
                                                .into_iter()
                                                .map(|post| {
                                                    view! {
                                                        <article class="card post-card">
                                                            <h2 class="post-card__title">{post.title}</h2>
                                                            <p class="post-card__meta muted">
                                                                {format_timestamp(post.created_at.as_deref())}
                                                            </p>
                                                            <p class="post-card__body">{post.content}</p>
                                                        </article>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>
        </Layout>
    }
}
