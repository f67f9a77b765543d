//! Audit log table: user actions and security events.

use leptos::prelude::*;

use crate::util::datetime::format_timestamp;

/// Read-only audit log view, newest first, capped at 100 rows.
#[component]
pub fn AdminAudit() -> impl IntoView {
    let logs = LocalResource::new(|| crate::net::api::fetch_audit_logs(100));

    view! {
        <div class="admin-section">
            <h2>"Audit log (user actions & events)"</h2>
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
                                                <th>"User"</th>
                                                <th>"IP"</th>
                                                <th>"Action"</th>
                                                <th>"Path"</th>
                                                <th>"Details"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {rows
                                                .into_iter()
                                                .map(|row| {
                                                    let details = row
                                                        .details_summary()
                                                        .unwrap_or_else(|| "—".to_owned());
                                                    view! {
                                                        <tr>
                                                            <td>{format_timestamp(row.created_at.as_deref())}</td>
                                                            <td>
                                                                {row.username.clone().unwrap_or_else(|| "—".to_owned())}
                                                            </td>
                                                            <td>
                                                                {row.ip_address.clone().unwrap_or_else(|| "—".to_owned())}
                                                            </td>
                                                            <td>{row.action.clone()}</td>
                                                            <td>
                                                                <code>{format!("{} {}", row.method, row.path)}</code>
                                                            </td>
                                                            <td>{details}</td>
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
