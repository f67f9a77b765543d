//! 404 page, also used as the router's catch-all.

use leptos::prelude::*;

use crate::components::layout::Layout;

/// Not-found page for `/404` and unmatched routes.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Layout>
            <section class="notfound-page">
                <div class="notfound-content">
                    <div class="notfound-code">"404"</div>
                    <h1 class="notfound-title">"Page not found"</h1>
                    <p class="notfound-message">
                        "The page you're looking for doesn't exist or has been moved."
                    </p>
                    <a href="/" class="btn-primary notfound-link">
                        "Go to homepage"
                    </a>
                </div>
            </section>
        </Layout>
    }
}
