//! Admin console: resolution-driven switch between setup, login, and the
//! dashboard. Lives outside the regular page chrome.

use leptos::prelude::*;

use crate::components::admin_attacks::AdminAttacks;
use crate::components::admin_audit::AdminAudit;
use crate::components::admin_banned_ips::AdminBannedIps;
use crate::components::admin_login::AdminLogin;
use crate::components::admin_setup::AdminSetup;
use crate::components::admin_traffic::AdminTraffic;
use crate::components::admin_users::AdminUsers;
use crate::net::types::AdminUser;
use crate::state::admin::AdminSession;

/// Admin console entry.
///
/// Resolves the admin identity once on mount: configuration status first,
/// then, only when configured, the admin session. Renders the screen for
/// the resolved phase; submissions and logout drive later transitions.
#[component]
pub fn AdminPage() -> impl IntoView {
    let session = RwSignal::new(AdminSession::default());

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match crate::net::api::admin_status().await {
                // Unconfigured: setup is the only way forward; the session
                // endpoint is never queried.
                Some(false) => session.update(AdminSession::resolved_unconfigured),
                Some(true) => match crate::net::api::admin_me().await {
                    Some(identity) => session.update(|s| s.resolved_session(identity)),
                    None => session.update(AdminSession::resolved_no_session),
                },
                None => session.update(AdminSession::resolution_failed),
            }
        });
    });

    let on_setup = Callback::new(move |identity: AdminUser| {
        session.update(|s| s.setup_succeeded(identity));
    });
    let on_login = Callback::new(move |identity: AdminUser| {
        session.update(|s| s.login_succeeded(identity));
    });
    let on_logout = Callback::new(move |()| {
        session.update(AdminSession::logged_out);
    });

    view! {
        {move || match session.get() {
            AdminSession::Loading => {
                view! { <div class="admin-loading"><div class="spinner"></div></div> }.into_any()
            }
            AdminSession::Setup => view! { <AdminSetup on_success=on_setup/> }.into_any(),
            AdminSession::Login => view! { <AdminLogin on_success=on_login/> }.into_any(),
            AdminSession::Dashboard(identity) => {
                view! { <AdminDashboard identity=identity on_logout=on_logout/> }.into_any()
            }
        }}
    }
}

/// Tabs of the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum AdminTab {
    #[default]
    Users,
    Audit,
    Traffic,
    Attacks,
    Banned,
}

impl AdminTab {
    const ALL: [Self; 5] = [
        Self::Users,
        Self::Audit,
        Self::Traffic,
        Self::Attacks,
        Self::Banned,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Audit => "Audit",
            Self::Traffic => "Traffic",
            Self::Attacks => "Attacks",
            Self::Banned => "Banned IPs",
        }
    }
}

/// Dashboard shell: header with identity and logout, tab bar, active tab.
#[component]
fn AdminDashboard(identity: AdminUser, on_logout: Callback<()>) -> impl IntoView {
    let tab = RwSignal::new(AdminTab::default());

    let logout = move |_: leptos::ev::MouseEvent| {
        leptos::task::spawn_local(async move {
            crate::net::api::admin_logout().await;
            on_logout.run(());
        });
    };

    view! {
        <div class="admin-portal admin-dashboard">
            <header class="admin-header">
                <h1 class="admin-brand">"Admin"</h1>
                <div class="admin-header-right">
                    <span class="admin-user-name">{identity.username.clone()}</span>
                    <button class="btn-outline btn-small" on:click=logout>
                        "Logout"
                    </button>
                </div>
            </header>
            <nav class="admin-tabs">
                {AdminTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if tab.get() == t { "admin-tab active" } else { "admin-tab" }
                                }
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <main class="admin-main">
                {move || match tab.get() {
                    AdminTab::Users => view! { <AdminUsers/> }.into_any(),
                    AdminTab::Audit => view! { <AdminAudit/> }.into_any(),
                    AdminTab::Traffic => view! { <AdminTraffic/> }.into_any(),
                    AdminTab::Attacks => view! { <AdminAttacks/> }.into_any(),
                    AdminTab::Banned => view! { <AdminBannedIps/> }.into_any(),
                }}
            </main>
        </div>
    }
}
