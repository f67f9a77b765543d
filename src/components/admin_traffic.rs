//! Traffic log table: raw API requests.

use leptos::prelude::*;

use crate::util::datetime::format_timestamp;

/// Read-only traffic view, newest first, capped at 100 rows.
#[component]
pub fn AdminTraffic() -> impl IntoView {
    let logs = LocalResource::new(|| crate::net::api::fetch_traffic_logs(100));

    view! {
        <div class="admin-section">
            <h2>"Traffic (API requests)"</h2>
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
                                                <th>"Status"</th>
                                                <th>"User-Agent"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {rows
                                                .into_iter()
                                                .map(|row| {
                                                    view! {
                                                        <tr>
                                                            <td>{format_timestamp(row.created_at.as_deref())}</td>
                                                            <td>
                                                                {row.ip_address.clone().unwrap_or_else(|| "—".to_owned())}
                                                            </td>
                                                            <td>{row.method.clone()}</td>
                                                            <td><code>{row.path.clone()}</code></td>
                                                            <td>
                                                                {row
                                                                    .status_code
                                                                    .map_or_else(|| "—".to_owned(), |code| code.to_string())}
                                                            </td>
                                                            <td class="muted">
                                                                {if row.user_agent.is_empty() {
                                                                    "—".to_owned()
                                                                } else {
                                                                    row.user_agent.clone()
                                                                }}
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
