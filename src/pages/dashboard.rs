//! Author dashboard: manage your own posts. Protected route.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::components::protected::Protected;
use crate::net::types::Post;
use crate::util::datetime::format_timestamp;

/// `/dashboard` route: the my-posts manager behind the route gate.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Layout>
            <Protected redirect_url="/dashboard">
                <MyPosts/>
            </Protected>
        </Layout>
    }
}

/// The signed-in author's post list with create and edit forms.
///
/// Mutations are one-shot requests followed by a full list refetch; a
/// failure surfaces the server's message and leaves the list untouched.
#[component]
fn MyPosts() -> impl IntoView {
    let posts = LocalResource::new(|| crate::net::api::fetch_my_posts());

    let create_mode = RwSignal::new(false);
    let editing = RwSignal::new(None::<Post>);
    let error = RwSignal::new(None::<String>);

    let new_title = RwSignal::new(String::new());
    let new_content = RwSignal::new(String::new());

    let edit_title = RwSignal::new(String::new());
    let edit_content = RwSignal::new(String::new());
    let edit_published = RwSignal::new(false);

    let submit_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        if title.trim().is_empty() {
            return;
        }
        error.set(None);
        let content = new_content.get();
        let posts = posts.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::create_post(title.trim(), &content, false).await {
                Ok(_) => {
                    create_mode.set(false);
                    new_title.set(String::new());
                    new_content.set(String::new());
                    posts.refetch();
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    let submit_update = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(post) = editing.get() else { return };
        error.set(None);
        let title = edit_title.get();
        let content = edit_content.get();
        let published = edit_published.get();
        let posts = posts.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::update_post(post.id, title.trim(), &content, published).await
            {
                Ok(_) => {
                    editing.set(None);
                    posts.refetch();
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    view! {
        <section class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"My posts"</h1>
                <button
                    class="btn-primary btn-small"
                    on:click=move |_| {
                        create_mode.set(true);
                        error.set(None);
                    }
                >
                    "New post"
                </button>
            </header>

            <Show when=move || create_mode.get()>
                <div class="card post-form-card">
                    <h3>"Create post"</h3>
                    <form class="stack" on:submit=submit_create>
                        <label class="field">
                            <span>"Title"</span>
                            <input
                                required
                                prop:value=move || new_title.get()
                                on:input=move |ev| new_title.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span>"Content"</span>
                            <textarea
                                prop:value=move || new_content.get()
                                on:input=move |ev| new_content.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        {move || error.get().map(|message| view! { <div class="error">{message}</div> })}
                        <div class="post-form-actions">
                            <button type="submit" class="btn-primary">"Create"</button>
                            <button
                                type="button"
                                class="btn-outline"
                                on:click=move |_| create_mode.set(false)
                            >
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </div>
            </Show>

            {move || {
                editing
                    .get()
                    .map(|post| {
                        view! {
                            <div class="card post-form-card">
                                <h3>{format!("Edit post: {}", post.title)}</h3>
                                <form class="stack" on:submit=submit_update>
                                    <label class="field">
                                        <span>"Title"</span>
                                        <input
                                            required
                                            prop:value=move || edit_title.get()
                                            on:input=move |ev| edit_title.set(event_target_value(&ev))
                                        />
                                    </label>
                                    <label class="field">
                                        <span>"Content"</span>
                                        <textarea
                                            prop:value=move || edit_content.get()
                                            on:input=move |ev| edit_content.set(event_target_value(&ev))
                                        ></textarea>
                                    </label>
                                    <label class="checkbox">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || edit_published.get()
                                            on:change=move |ev| edit_published.set(event_target_checked(&ev))
                                        />
                                        <span>"Published"</span>
                                    </label>
                                    {move || error.get().map(|message| view! { <div class="error">{message}</div> })}
                                    <div class="post-form-actions">
                                        <button type="submit" class="btn-primary">"Save"</button>
                                        <button
                                            type="button"
                                            class="btn-outline"
                                            on:click=move |_| editing.set(None)
                                        >
                                            "Cancel"
                                        </button>
                                    </div>
                                </form>
                            </div>
                        }
                    })
            }}

            <div class="admin-table-wrap">
                <Suspense fallback=move || {
                    view! { <div class="admin-loading"><div class="spinner"></div></div> }
                }>
                    {move || {
                        posts
                            .get()
                            .map(|list| {
                                view! {
                                    <table class="admin-table">
                                        <thead>
                                            <tr>
                                                <th>"Title"</th>
                                                <th>"Status"</th>
                                                <th>"Created"</th>
                                                <th>"Updated"</th>
                                                <th>"Actions"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|post| {
                                                    let edit_post = post.clone();
                                                    let toggle_post = post.clone();
                                                    let posts = posts.clone();
                                                    view! {
                                                        <tr>
                                                            <td>{post.title.clone()}</td>
                                                            <td>{if post.published { "Published" } else { "Draft" }}</td>
                                                            <td>{format_timestamp(post.created_at.as_deref())}</td>
                                                            <td>{format_timestamp(post.updated_at.as_deref())}</td>
                                                            <td>
                                                                <button
                                                                    class="btn-small"
                                                                    on:click=move |_| {
                                                                        edit_title.set(edit_post.title.clone());
                                                                        edit_content.set(edit_post.content.clone());
                                                                        edit_published.set(edit_post.published);
                                                                        error.set(None);
                                                                        editing.set(Some(edit_post.clone()));
                                                                    }
                                                                >
                                                                    "Edit"
                                                                </button>
                                                                <button
                                                                    class="btn-small"
                                                                    on:click=move |_| {
                                                                        let post = toggle_post.clone();
                                                                        let posts = posts.clone();
                                                                        leptos::task::spawn_local(async move {
                                                                            let _ = crate::net::api::update_post(
                                                                                post.id,
                                                                                &post.title,
                                                                                &post.content,
                                                                                !post.published,
                                                                            )
                                                                            .await;
                                                                            posts.refetch();
                                                                        });
                                                                    }
                                                                >
                                                                    {if post.published { "Unpublish" } else { "Publish" }}
                                                                </button>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                            })
                    }}
                </Suspense>
            </div>
        </section>
    }
}
