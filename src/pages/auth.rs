//! Sign-in / registration page for the regular user session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::layout::Layout;
use crate::state::auth::AuthState;
use crate::util::redirect;

/// Login and registration forms behind a toggle.
///
/// A successful submission adopts the identity synchronously (no second
/// session round trip) and navigates to the remembered redirect target,
/// defaulting to the dashboard. Visiting while already signed in skips
/// straight to the dashboard.
#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Already signed in: nothing to do here.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if auth.get_untracked().user.is_some() {
                navigate("/dashboard", NavigateOptions::default());
            }
        });
    }

    let register_mode = RwSignal::new(false);
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = username.get();
        let pass = password.get();
        if name.trim().is_empty() || pass.is_empty() {
            return;
        }
        error.set(None);
        pending.set(true);
        let mail = email.get();
        let registering = register_mode.get();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = if registering {
                // Registration does not open a session; sign in with the
                // same credentials right after.
                match crate::net::api::register(name.trim(), mail.trim(), &pass).await {
                    Ok(_) => crate::net::api::login(name.trim(), &pass).await,
                    Err(message) => Err(message),
                }
            } else {
                crate::net::api::login(name.trim(), &pass).await
            };
            pending.set(false);
            match outcome {
                Ok(user) => {
                    auth.update(|state| state.signed_in(user));
                    let target =
                        redirect::take().unwrap_or_else(|| "/dashboard".to_owned());
                    navigate(&target, NavigateOptions::default());
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    view! {
        <Layout>
            <section class="auth-page">
                <div class="card auth-card">
                    <h1 class="auth-title">
                        {move || if register_mode.get() { "Create account" } else { "Sign in" }}
                    </h1>
                    <form class="stack" on:submit=submit>
                        <label class="field">
                            <span>"Username"</span>
                            <input
                                required
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                                autocomplete="username"
                            />
                        </label>
                        <Show when=move || register_mode.get()>
                            <label class="field">
                                <span>"Email"</span>
                                <input
                                    type="email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                    autocomplete="email"
                                />
                            </label>
                        </Show>
                        <label class="field">
                            <span>"Password"</span>
                            <input
                                type="password"
                                required
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                                autocomplete=move || {
                                    if register_mode.get() { "new-password" } else { "current-password" }
                                }
                            />
                        </label>
                        {move || error.get().map(|message| view! { <div class="error">{message}</div> })}
                        <button class="btn-primary" type="submit" disabled=move || pending.get()>
                            {move || match (register_mode.get(), pending.get()) {
                                (_, true) => "Working...",
                                (true, false) => "Register",
                                (false, false) => "Sign in",
                            }}
                        </button>
                    </form>
                    <button
                        type="button"
                        class="btn-link auth-toggle"
                        on:click=move |_| {
                            register_mode.update(|mode| *mode = !*mode);
                            error.set(None);
                        }
                    >
                        {move || {
                            if register_mode.get() {
                                "Already have an account? Sign in"
                            } else {
                                "Need an account? Register"
                            }
                        }}
                    </button>
                </div>
            </section>
        </Layout>
    }
}
