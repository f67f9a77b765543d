//! Attack-attempt log table: unauthorized and suspicious requests.

use leptos::prelude::*;

use crate::util::datetime::format_timestamp;

/// Read-only attack log view, newest first, capped at 100 rows.
#[component]
pub fn AdminAttacks() -> impl IntoView {
    let logs = LocalResource::new(|| crate::net::api::fetch_attack_logs(100));

    view! {
        <div class="admin-section">
            <h2>"Unauthorized / attack attempts"</h2>
            <div class="admin-table-wrap">
                <Suspense fallback=move || {
                    view! { <div class="admin-loading"><div class="spinner"></div></div> }
                }>
                    {move || {
                        logs.get()
                            .map(|rows| {
                                view! {
                                    <table class="admin-table">
                                        <thead>
                                            <tr>
                                                <th>"Time"</th>
                                                <th>"IP"</th>
                                                <th>"Method"</th>
                                                <th>"Path"</th>
                                                <th>"Details"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {rows
                                                .into_iter()
                                                .map(|row| {
                                                    let agent = row
                                                        .user_agent_snippet()
                                                        .unwrap_or_else(|| "—".to_owned());
                                                    view! {
                                                        <tr>
                                                            <td>{format_timestamp(row.created_at.as_deref())}</td>
                                                            <td>
                                                                {row.ip_address.clone().unwrap_or_else(|| "—".to_owned())}
                                                            </td>
                                                            <td>{row.method.clone()}</td>
                                                            <td><code>{row.path.clone()}</code></td>
                                                            <td class="muted">{agent}</td>
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
