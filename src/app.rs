//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    admin::AdminPage, auth::AuthPage, dashboard::DashboardPage, home::HomePage,
    not_found::NotFoundPage, unauthorized::UnauthorizedPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the user session context, runs the one-shot identity
/// resolution, and sets up client-side routing. A loading placeholder is
/// shown until resolution completes so gated routes never flash the wrong
/// branch.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::resolving());
    provide_context(auth);

    // One-shot current-session resolution; any failure resolves to
    // anonymous without surfacing an error.
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.set(AuthState::resolved(user));
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/blog-client.css"/>
        <Title text="Blog"/>

        <Router>
            <Show
                when=move || !auth.get().loading
                fallback=|| view! { <div class="app-loading"><div class="spinner"></div></div> }
            >
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("auth") view=AuthPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                    <Route path=StaticSegment("404") view=NotFoundPage/>
                </Routes>
            </Show>
        </Router>
    }
}
