//! Admin sign-in form.

use leptos::prelude::*;

use crate::net::types::AdminUser;

/// Admin login; a successful submission hands the identity to the caller.
#[component]
pub fn AdminLogin(on_success: Callback<AdminUser>) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        pending.set(true);
        let name = username.get();
        let pass = password.get();
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::admin_login(&name, &pass).await;
            pending.set(false);
            match outcome {
                Ok(identity) => on_success.run(identity),
                Err(message) => error.set(Some(message)),
            }
        });
    };

    view! {
        <div class="admin-portal">
            <div class="admin-card">
                <h1 class="admin-title">"Admin login"</h1>
                <form class="admin-form" on:submit=submit>
                    <label class="field">
                        <span>"Username"</span>
                        <input
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            autocomplete="username"
                        />
                    </label>
                    <label class="field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            autocomplete="current-password"
                        />
                    </label>
                    {move || error.get().map(|message| view! { <div class="error">{message}</div> })}
                    <button class="btn-primary" type="submit" disabled=move || pending.get()>
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
