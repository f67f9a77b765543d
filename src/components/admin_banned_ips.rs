//! Banned-IP management: list, add, remove.

use leptos::prelude::*;

use crate::util::datetime::format_timestamp;

/// Banned-IP table with an add form.
///
/// Adding surfaces the server's `detail` on rejection; removal ignores
/// errors. Both refetch the full list afterwards.
#[component]
pub fn AdminBannedIps() -> impl IntoView {
    let bans = LocalResource::new(|| crate::net::api::fetch_banned_ips());

    let ip = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        let address = ip.get();
        let why = reason.get();
        let bans = bans.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::create_banned_ip(address.trim(), why.trim()).await {
                Ok(_) => {
                    ip.set(String::new());
                    reason.set(String::new());
                    bans.refetch();
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    view! {
        <div class="admin-section">
            <h2>"Banned IPs"</h2>
            <div class="card admin-form-card">
                <form class="stack" on:submit=submit_add>
                    <label class="field">
                        <span>"IP address"</span>
                        <input
                            required
                            prop:value=move || ip.get()
                            on:input=move |ev| ip.set(event_target_value(&ev))
                            placeholder="e.g. 192.168.1.1"
                        />
                    </label>
                    <label class="field">
                        <span>"Reason (optional)"</span>
                        <input
                            prop:value=move || reason.get()
                            on:input=move |ev| reason.set(event_target_value(&ev))
                        />
                    </label>
                    {move || error.get().map(|message| view! { <div class="error">{message}</div> })}
                    <button type="submit" class="btn-primary">"Block IP"</button>
                </form>
            </div>
            <div class="admin-table-wrap">
                <Suspense fallback=move || {
                    view! { <div class="admin-loading"><div class="spinner"></div></div> }
                }>
                    {move || {
                        bans.get()
                            .map(|rows| {
                                view! {
                                    <table class="admin-table">
                                        <thead>
                                            <tr>
                                                <th>"IP"</th>
                                                <th>"Reason"</th>
                                                <th>"Added"</th>
                                                <th>"Action"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {rows
                                                .into_iter()
                                                .map(|ban| {
                                                    let bans = bans.clone();
                                                    let ban_id = ban.id;
                                                    view! {
                                                        <tr>
                                                            <td><code>{ban.ip_address.clone()}</code></td>
                                                            <td>
                                                                {if ban.reason.is_empty() {
                                                                    "—".to_owned()
                                                                } else {
                                                                    ban.reason.clone()
                                                                }}
                                                            </td>
                                                            <td>{format_timestamp(ban.created_at.as_deref())}</td>
                                                            <td>
                                                                <button
                                                                    class="btn-small"
                                                                    on:click=move |_| {
                                                                        let bans = bans.clone();
                                                                        leptos::task::spawn_local(async move {
                                                                            crate::net::api::delete_banned_ip(ban_id).await;
                                                                            bans.refetch();
                                                                        });
                                                                    }
                                                                >
                                                                    "Unblock"
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
