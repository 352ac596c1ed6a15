//! Evyma Frontend App
//!
//! Provides every context, then renders the navigation shell and the gated page.

use leptos::prelude::*;

use crate::auth::ProtectedRoute;
use crate::components::{AppErrorBoundary, NavBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::User;
use crate::network::{NetworkStatus, OfflineBanner};
use crate::pages::{DashboardPage, GoalsPage, InsightsPage, OnboardingPage, SettingsPage, SubscribePage};
use crate::router::{Navigator, Route};
use crate::storage::ClientStorage;
use crate::stores::{GoalsStore, SettingsStore};
use crate::theme::ThemeContext;
use crate::toast::{ToastViewport, Toaster};
use crate::transition::PageTransition;

fn page(route: Route) -> AnyView {
    match route {
        Route::Dashboard => view! { <DashboardPage /> }.into_any(),
        Route::Goals => view! { <GoalsPage /> }.into_any(),
        Route::Insights => view! { <InsightsPage /> }.into_any(),
        Route::Settings => view! { <SettingsPage /> }.into_any(),
        Route::Onboarding => view! { <OnboardingPage /> }.into_any(),
        Route::Subscribe => view! { <SubscribePage /> }.into_any(),
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let storage = ClientStorage::detect();
    let toaster = Toaster::new();
    let (user, set_user) = signal::<Option<User>>(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let navigator = Navigator::from_location();
    navigator.listen_history();

    // Provide context to all children
    provide_context(config);
    provide_context(toaster);
    provide_context(AppContext::new((user, set_user), (reload_trigger, set_reload_trigger)));
    provide_context(navigator);
    let settings = SettingsStore::new(storage);
    provide_context(settings);
    provide_context(ThemeContext::new(storage, settings));
    provide_context(GoalsStore::new(toaster));
    provide_context(NetworkStatus::detect());

    view! {
        <div class="app-layout">
            <OfflineBanner />
            <NavBar />
            <main class="main-content">
                <AppErrorBoundary>
                    {move || {
                        let route = navigator.current();
                        view! {
                            <ProtectedRoute route=route>
                                <PageTransition>{page(route)}</PageTransition>
                            </ProtectedRoute>
                        }
                    }}
                </AppErrorBoundary>
            </main>
            <ToastViewport />
        </div>
    }
}
