//! Authentication Gate
//!
//! [`ProtectedRoute`] checks the session once per mount, then either renders
//! its children, sends the browser to the hosted login, or redirects inside
//! the app (onboarding first, then subscription).

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{AuthApi, Base44Backend};
use crate::components::reload_page;
use crate::config::AppConfig;
use crate::context::use_app_context;
use crate::error::AppResult;
use crate::models::User;
use crate::router::{use_navigator, Route};
use crate::transition::DelayedSpinner;

/// Outcome of a session check
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Anonymous,
    SignedIn(User),
}

/// What the gate does for a given session and route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Hand over to the external login flow
    Login,
    /// Go to another page inside the app
    Redirect(Route),
    Allow,
}

/// Query the session. Any failure counts as signed out.
pub async fn check_session<A: AuthApi + ?Sized>(api: &A) -> Session {
    match api.is_authenticated().await {
        Ok(true) => match api.current_user().await {
            Ok(user) => Session::SignedIn(user),
            Err(err) => {
                log::warn!("[AUTH] session looked valid but user lookup failed: {}", err);
                Session::Anonymous
            }
        },
        Ok(false) => Session::Anonymous,
        Err(err) => {
            log::warn!("[AUTH] session check failed: {}", err);
            Session::Anonymous
        }
    }
}

pub fn decide(session: &Session, route: Route) -> GateDecision {
    let Session::SignedIn(user) = session else {
        return GateDecision::Login;
    };
    if route.requires_onboarding() && !user.onboarding_completed {
        return GateDecision::Redirect(Route::Onboarding);
    }
    if route.requires_subscription() && !user.has_active_subscription() {
        return GateDecision::Redirect(Route::Subscribe);
    }
    GateDecision::Allow
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Checking,
    Allowed,
    Denied,
    /// The login flow could not be started (SDK missing or broken)
    Unavailable,
}

fn after_login_redirect(redirected: AppResult<()>) -> GateState {
    match redirected {
        Ok(()) => GateState::Denied,
        Err(err) => {
            log::error!("[AUTH] login redirect failed: {}", err);
            GateState::Unavailable
        }
    }
}

/// Renders `children` only for a signed-in user who meets `route`'s requirements
#[component]
pub fn ProtectedRoute(route: Route, children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();
    let navigator = use_navigator();
    let config = use_context::<AppConfig>().unwrap_or_default();
    let (state, set_state) = signal(GateState::Checking);

    Effect::new(move |_| {
        spawn_local(async move {
            let api = Base44Backend;
            let session = check_session(&api).await;
            let decision = decide(&session, route);
            log::debug!("[AUTH] {} -> {:?}", route.path(), decision);

            if let Session::SignedIn(user) = session {
                ctx.set_user(Some(user));
            }
            match decision {
                GateDecision::Login => {
                    ctx.set_user(None);
                    set_state.set(after_login_redirect(api.redirect_to_login(config.login_redirect)));
                }
                GateDecision::Redirect(target) => {
                    set_state.set(GateState::Denied);
                    navigator.navigate(target);
                }
                GateDecision::Allow => set_state.set(GateState::Allowed),
            }
        });
    });

    move || match state.get() {
        GateState::Checking => view! { <DelayedSpinner label="Checking your session..." /> }.into_any(),
        GateState::Allowed => children().into_any(),
        GateState::Denied => ().into_any(),
        GateState::Unavailable => view! {
            <div class="gate-unavailable" role="alert">
                <p>"Evyma can't reach its sign-in service right now."</p>
                <button class="btn" on:click=|_| reload_page()>"Reload"</button>
            </div>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{user, FakeBackend};

    fn signed_in(onboarded: bool, subscription: Option<&str>) -> Session {
        let mut user = user("me@evyma.app");
        user.onboarding_completed = onboarded;
        user.subscription_status = subscription.map(str::to_string);
        Session::SignedIn(user)
    }

    #[test]
    fn anonymous_goes_to_login_everywhere() {
        assert_eq!(decide(&Session::Anonymous, Route::Dashboard), GateDecision::Login);
        assert_eq!(decide(&Session::Anonymous, Route::Onboarding), GateDecision::Login);
    }

    #[test]
    fn onboarding_comes_before_anything_else() {
        let session = signed_in(false, None);
        assert_eq!(decide(&session, Route::Goals), GateDecision::Redirect(Route::Onboarding));
        assert_eq!(decide(&session, Route::Insights), GateDecision::Redirect(Route::Onboarding));
        assert_eq!(decide(&session, Route::Onboarding), GateDecision::Allow);
    }

    #[test]
    fn subscription_only_gates_paid_pages() {
        let session = signed_in(true, Some("canceled"));
        assert_eq!(decide(&session, Route::Insights), GateDecision::Redirect(Route::Subscribe));
        assert_eq!(decide(&session, Route::Goals), GateDecision::Allow);
        assert_eq!(decide(&session, Route::Subscribe), GateDecision::Allow);

        let paying = signed_in(true, Some("active"));
        assert_eq!(decide(&paying, Route::Insights), GateDecision::Allow);
    }

    #[test]
    fn failed_login_redirect_is_shown_not_blank() {
        let broken = FakeBackend::signed_out();
        broken.fail_requests(true);
        assert_eq!(after_login_redirect(broken.redirect_to_login(None)), GateState::Unavailable);

        let working = FakeBackend::signed_out();
        assert_eq!(after_login_redirect(working.redirect_to_login(Some("/goals"))), GateState::Denied);
    }

    #[tokio::test]
    async fn check_session_reports_user() {
        let api = FakeBackend::signed_in("me@evyma.app");
        match check_session(&api).await {
            Session::SignedIn(user) => assert_eq!(user.email, "me@evyma.app"),
            Session::Anonymous => panic!("expected a signed-in session"),
        }
    }

    #[tokio::test]
    async fn check_session_treats_errors_as_signed_out() {
        let api = FakeBackend::signed_in("me@evyma.app");
        api.fail_requests(true);
        assert_eq!(check_session(&api).await, Session::Anonymous);

        let signed_out = FakeBackend::signed_out();
        assert_eq!(check_session(&signed_out).await, Session::Anonymous);
    }
}
