//! One-time admin bootstrap form.

use leptos::prelude::*;

use crate::net::types::AdminUser;

/// Create the first and only admin account.
///
/// Client-side checks (password match, minimum length) run before the
/// request; a server rejection surfaces its `detail` message.
#[component]
pub fn AdminSetup(on_success: Callback<AdminUser>) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        let pass = password.get();
        if pass != confirm.get() {
            error.set(Some("Passwords do not match".to_owned()));
            return;
        }
        if pass.len() < 8 {
            error.set(Some("Password must be at least 8 characters".to_owned()));
            return;
        }
        pending.set(true);
        let name = username.get();
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::admin_setup(name.trim(), &pass).await;
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
                <h1 class="admin-title">"Admin setup"</h1>
                <p class="admin-subtitle">
                    "Set your admin credentials once. This cannot be undone."
                </p>
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
                            minlength="8"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            autocomplete="new-password"
                        />
                    </label>
                    <label class="field">
                        <span>"Confirm password"</span>
                        <input
                            type="password"
                            required
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                            autocomplete="new-password"
                        />
                    </label>
                    {move || error.get().map(|message| view! { <div class="error">{message}</div> })}
                    <button class="btn-primary" type="submit" disabled=move || pending.get()>
                        {move || if pending.get() { "Setting up..." } else { "Create admin" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
