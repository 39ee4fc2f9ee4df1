//! Application root: service contexts, the route table, the auth guard, and
//! the authenticated shell layout.

use connectpro_app::GuardState;
use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::{MobileNavigation, Navbar, RightSidebar, Sidebar};
use crate::pages::{
    CampaignSimulatorPage, ExplorePage, HomePage, LoginPage, MessagesPage, NotificationsPage,
    ProfilePage, RegisterPage,
};
use crate::services::{use_session, CommunityService, PricingService, SessionService};

/// Root component: constructs every service once and provides it in
/// context, then mounts the router.
///
/// Login and registration live outside the shell; everything else nests
/// under [`Shell`], which owns the guard.
#[component]
pub fn App() -> impl IntoView {
    provide_context(SessionService::new());
    provide_context(CommunityService::new());
    provide_context(PricingService::new());

    view! {
        <Router>
            <Routes fallback=|| view! { <RouteFallback /> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
                <ParentRoute path=path!("") view=Shell>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/explore") view=ExplorePage />
                    <Route path=path!("/messages") view=MessagesPage />
                    <Route path=path!("/notifications") view=NotificationsPage />
                    <Route path=path!("/campaign-simulator") view=CampaignSimulatorPage />
                    <Route path=path!("/profile/:id") view=ProfilePage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Route guard plus the authenticated application layout.
///
/// The render branch is decided by [`GuardState`]: a centered pulse while an
/// authentication call is in flight, a redirect to the login page when
/// signed out, and the shell (navbar, side rails, routed page, mobile tab
/// bar) when signed in. Rehydration happens synchronously during service
/// construction, so the first router pass already sees the restored session.
#[component]
fn Shell() -> impl IntoView {
    let session = use_session();
    let user = session.user();
    let loading = session.loading();

    view! {
        {move || {
            match GuardState::resolve(loading.get(), user.get().is_some()) {
                GuardState::Loading => view! { <ShellLoading /> }.into_any(),
                GuardState::SignedOut => view! { <Redirect path="/login" /> }.into_any(),
                GuardState::SignedIn => view! {
                    <div class="min-h-screen bg-gray-100">
                        <Navbar />
                        <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-6">
                            <div class="flex gap-6">
                                <aside class="hidden lg:block w-64 flex-shrink-0">
                                    <Sidebar />
                                </aside>
                                <main class="flex-1 min-w-0">
                                    <Outlet />
                                </main>
                                <aside class="hidden xl:block w-80 flex-shrink-0">
                                    <RightSidebar />
                                </aside>
                            </div>
                        </div>
                        <div class="lg:hidden">
                            <MobileNavigation />
                        </div>
                    </div>
                }
                    .into_any(),
            }
        }}
    }
}

/// Centered pulse placeholder for [`GuardState::Loading`].
///
/// Rehydration is synchronous, so this only renders when a pending login or
/// registration call overlaps navigation into the shell.
#[component]
fn ShellLoading() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <p class="animate-pulse text-2xl font-display font-bold text-primary-600">
                "ConnectPro"
            </p>
        </div>
    }
}

/// Unknown paths resolve through the guard: home when signed in, login
/// otherwise.
#[component]
fn RouteFallback() -> impl IntoView {
    let session = use_session();
    let user = session.user();

    view! {
        {move || {
            match GuardState::resolve(false, user.get().is_some()) {
                GuardState::SignedIn => view! { <Redirect path="/" /> }.into_any(),
                _ => view! { <Redirect path="/login" /> }.into_any(),
            }
        }}
    }
}
