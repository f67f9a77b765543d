//! Unauthorized screen, shown standalone and in place of gated content.

use leptos::prelude::*;

use crate::components::layout::Layout;

/// Body of the unauthorized screen, reused by the route gate.
#[component]
pub fn UnauthorizedNotice() -> impl IntoView {
    view! {
        <section class="unauthorized-page">
            <div class="unauthorized-content">
                <div class="unauthorized-code">"401"</div>
                <h1 class="unauthorized-title">"Unauthorized"</h1>
                <p class="unauthorized-message">
                    "You need to sign in to view this page."
                </p>
                <a href="/auth" class="btn-primary unauthorized-link">
                    "Sign in"
                </a>
            </div>
        </section>
    }
}

/// Standalone `/unauthorized` route.
#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <Layout>
            <UnauthorizedNotice/>
        </Layout>
    }
}
