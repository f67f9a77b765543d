//! Route gate: renders protected content only for a resolved identity.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::pages::unauthorized::UnauthorizedNotice;
use crate::state::auth::AuthState;
use crate::util::redirect;

/// Gate protected children on the resolved user identity.
///
/// With no identity, the attempted path (an explicit `redirect_url` wins
/// over the current location) is written to the session-storage redirect
/// slot and the unauthorized placeholder is rendered instead. One storage
/// side effect, no network call.
#[component]
pub fn Protected(
    #[prop(optional)] redirect_url: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();

    view! {
        <Show
            when=move || auth.get().user.is_some()
            fallback=move || {
                let target = redirect::gate_target(redirect_url, &location.pathname.get());
                redirect::remember(&target);
                view! { <UnauthorizedNotice/> }
            }
        >
            {children()}
        </Show>
    }
}
