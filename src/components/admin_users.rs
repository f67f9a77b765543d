//! Admin user management: list, create, edit, ban/unban, remove.

use leptos::prelude::*;

use crate::net::types::ManagedUser;
use crate::util::datetime::format_timestamp;

/// User table with create and edit forms.
///
/// Every mutation is a one-shot request followed by a full list refetch.
/// Create/update failures surface the server's `detail` message; ban,
/// unban, and delete ignore errors and simply refetch.
#[component]
pub fn AdminUsers() -> impl IntoView {
    let users = LocalResource::new(|| crate::net::api::fetch_admin_users());

    let create_mode = RwSignal::new(false);
    let editing = RwSignal::new(None::<ManagedUser>);
    let error = RwSignal::new(None::<String>);

    let new_username = RwSignal::new(String::new());
    let new_email = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());

    let edit_email = RwSignal::new(String::new());
    let edit_password = RwSignal::new(String::new());
    let edit_active = RwSignal::new(true);

    let submit_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        let username = new_username.get();
        let email = new_email.get();
        let password = new_password.get();
        let users = users.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::create_admin_user(&username, &email, &password).await {
                Ok(_) => {
                    create_mode.set(false);
                    new_username.set(String::new());
                    new_email.set(String::new());
                    new_password.set(String::new());
                    users.refetch();
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    let submit_update = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user) = editing.get() else { return };
        error.set(None);
        let email = edit_email.get();
        let password = edit_password.get();
        let active = edit_active.get();
        let users = users.clone();
        leptos::task::spawn_local(async move {
            // Blank password keeps the current one.
            let password = (!password.is_empty()).then_some(password.as_str());
            match crate::net::api::update_admin_user(user.id, &email, password, active).await {
                Ok(_) => {
                    editing.set(None);
                    users.refetch();
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    let delete_editing = move |_: leptos::ev::MouseEvent| {
        let Some(user) = editing.get() else { return };
        if !confirm_remove(&user.username) {
            return;
        }
        let users = users.clone();
        leptos::task::spawn_local(async move {
            crate::net::api::delete_admin_user(user.id).await;
            editing.set(None);
            users.refetch();
        });
    };

    view! {
        <div class="admin-section">
            <div class="admin-section-header">
                <h2>"Users"</h2>
                <button
                    class="btn-primary btn-small"
                    on:click=move |_| {
                        create_mode.set(true);
                        error.set(None);
                    }
                >
                    "Add user"
                </button>
            </div>

            <Show when=move || create_mode.get()>
                <div class="card admin-form-card">
                    <h3>"Create user"</h3>
                    <form class="stack" on:submit=submit_create>
                        <label class="field">
                            <span>"Username"</span>
                            <input
                                required
                                prop:value=move || new_username.get()
                                on:input=move |ev| new_username.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span>"Email"</span>
                            <input
                                type="email"
                                prop:value=move || new_email.get()
                                on:input=move |ev| new_email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span>"Password"</span>
                            <input
                                type="password"
                                required
                                prop:value=move || new_password.get()
                                on:input=move |ev| new_password.set(event_target_value(&ev))
                            />
                        </label>
                        {move || error.get().map(|message| view! { <div class="error">{message}</div> })}
                        <div class="admin-form-actions">
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
                    .map(|user| {
                        view! {
                            <div class="card admin-form-card">
                                <h3>{format!("Edit user: {}", user.username)}</h3>
                                <form class="stack" on:submit=submit_update>
                                    <label class="field">
                                        <span>"Email"</span>
                                        <input
                                            type="email"
                                            prop:value=move || edit_email.get()
                                            on:input=move |ev| edit_email.set(event_target_value(&ev))
                                        />
                                    </label>
                                    <label class="field">
                                        <span>"New password (leave blank to keep)"</span>
                                        <input
                                            type="password"
                                            prop:value=move || edit_password.get()
                                            on:input=move |ev| edit_password.set(event_target_value(&ev))
                                        />
                                    </label>
                                    <label class="checkbox">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || edit_active.get()
                                            on:change=move |ev| edit_active.set(event_target_checked(&ev))
                                        />
                                        <span>"Active"</span>
                                    </label>
                                    {move || error.get().map(|message| view! { <div class="error">{message}</div> })}
                                    <div class="admin-form-actions">
                                        <button type="submit" class="btn-primary">"Save"</button>
                                        <button
                                            type="button"
                                            class="btn-outline"
                                            on:click=move |_| editing.set(None)
                                        >
                                            "Cancel"
                                        </button>
                                        <button
                                            type="button"
                                            class="btn-small admin-remove"
                                            on:click=delete_editing
                                        >
                                            "Remove user"
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
                        users
                            .get()
                            .map(|list| {
                                view! {
                                    <table class="admin-table">
                                        <thead>
                                            <tr>
                                                <th>"ID"</th>
                                                <th>"Username"</th>
                                                <th>"Email"</th>
                                                <th>"Active"</th>
                                                <th>"Joined"</th>
                                                <th>"Actions"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|user| {
                                                    let edit_user = user.clone();
                                                    let toggle_id = user.id;
                                                    let active = user.is_active;
                                                    let users = users.clone();
                                                    view! {
                                                        <tr>
                                                            <td>{user.id}</td>
                                                            <td>{user.username.clone()}</td>
                                                            <td>
                                                                {if user.email.is_empty() {
                                                                    "—".to_owned()
                                                                } else {
                                                                    user.email.clone()
                                                                }}
                                                            </td>
                                                            <td>{if active { "Yes" } else { "No" }}</td>
                                                            <td>{format_timestamp(user.date_joined.as_deref())}</td>
                                                            <td>
                                                                <button
                                                                    class="btn-small"
                                                                    on:click=move |_| {
                                                                        edit_email.set(edit_user.email.clone());
                                                                        edit_password.set(String::new());
                                                                        edit_active.set(edit_user.is_active);
                                                                        error.set(None);
                                                                        editing.set(Some(edit_user.clone()));
                                                                    }
                                                                >
                                                                    "Edit"
                                                                </button>
                                                                <button
                                                                    class="btn-small"
                                                                    on:click=move |_| {
                                                                        let users = users.clone();
                                                                        leptos::task::spawn_local(async move {
                                                                            if active {
                                                                                crate::net::api::ban_user(toggle_id).await;
                                                                            } else {
                                                                                crate::net::api::unban_user(toggle_id).await;
                                                                            }
                                                                            users.refetch();
                                                                        });
                                                                    }
                                                                >
                                                                    {if active { "Ban" } else { "Unban" }}
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
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn confirm_remove(username: &str) -> bool {
    web_sys::window().is_some_and(|window| {
        window
            .confirm_with_message(&format!("Remove user \"{username}\"?"))
            .unwrap_or(false)
    })
}

#[cfg(not(feature = "hydrate"))]
fn confirm_remove(_username: &str) -> bool {
    false
}
