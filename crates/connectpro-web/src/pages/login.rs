//! Login page.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::{Redirect, A};
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::services::use_session;

/// Email/password sign-in with an inline error banner.
///
/// Already-authenticated visitors are bounced straight to the feed.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let user = session.user();
    let loading = session.loading();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);

    let navigate = use_navigate();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        set_error.set(None);
        spawn_local(async move {
            match session
                .login(email.get_untracked(), password.get_untracked())
                .await
            {
                Ok(_) => navigate("/", Default::default()),
                Err(err) => set_error.set(Some(err.banner_text().to_string())),
            }
        });
    };

    view! {
        {move || user.get().map(|_| view! { <Redirect path="/" /> })}
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <div class="w-full max-w-md">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-display font-bold text-primary-700">"ConnectPro"</h1>
                    <p class="mt-2 text-gray-600">"The network for marketing professionals"</p>
                </div>
                <div class="bg-white rounded-lg shadow p-6">
                    <h2 class="text-xl font-semibold text-gray-900 mb-4">"Sign in"</h2>
                    {move || {
                        error
                            .get()
                            .map(|message| {
                                view! {
                                    <div class="mb-4 rounded-md bg-red-50 text-red-700 text-sm px-4 py-3">
                                        {message}
                                    </div>
                                }
                            })
                    }}
                    <form on:submit=on_submit class="space-y-4">
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">
                                "Email"
                            </label>
                            <input
                                type="email"
                                class="w-full border border-gray-300 rounded-md px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-primary-500"
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">
                                "Password"
                            </label>
                            <input
                                type="password"
                                class="w-full border border-gray-300 rounded-md px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-primary-500"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>
                        <button
                            type="submit"
                            class="w-full bg-primary-600 text-white py-2 rounded-md font-medium hover:bg-primary-700 disabled:opacity-50"
                            disabled=move || loading.get()
                        >
                            {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </form>
                    <p class="mt-4 text-center text-sm text-gray-600">
                        "Don't have an account? "
                        <A
                            href="/register"
                            attr:class="text-primary-600 font-medium hover:underline"
                        >
                            "Join now"
                        </A>
                    </p>
                </div>
            </div>
        </div>
    }
}
