//! Shared page chrome: top navigation with session-aware controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Page shell with the top navigation bar.
///
/// Shows the username and a logout button when signed in, a sign-in link
/// otherwise. Logout fires the server request, clears the local identity
/// synchronously, and navigates home.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_: leptos::ev::MouseEvent| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.update(AuthState::signed_out);
            navigate("/", NavigateOptions::default());
        });
    };

    view! {
        <div class="layout">
            <header class="layout__header">
                <a href="/" class="layout__brand">"Blog"</a>
                <nav class="layout__nav">
                    <a href="/">"Home"</a>
                    <Show
                        when=move || auth.get().user.is_some()
                        fallback=|| view! { <a href="/auth">"Sign in"</a> }
                    >
                        <a href="/dashboard">"Dashboard"</a>
                    </Show>
                </nav>
                <Show when=move || auth.get().user.is_some()>
                    <div class="layout__session">
                        <span class="layout__username">
                            {move || auth.get().user.map(|u| u.username).unwrap_or_default()}
                        </span>
                        <button class="btn-outline btn-small" on:click=on_logout.clone()>
                            "Logout"
                        </button>
                    </div>
                </Show>
            </header>
            <main class="layout__main">{children()}</main>
        </div>
    }
}
