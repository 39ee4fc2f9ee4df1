//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use phosphor_leptos::{Icon, BELL, CHAT_TEXT, LIST, MAGNIFYING_GLASS, MOON, SUN, X};

use crate::components::Avatar;
use crate::services::use_session;

/// Sticky top bar with the wordmark, primary links, search, message and
/// notification shortcuts, and the account menu.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let user = session.user();
    let (menu_open, set_menu_open) = signal(false);
    let (mobile_open, set_mobile_open) = signal(false);

    // Display-local preference: flips a `dark` class on the document root,
    // never persisted.
    let (dark, set_dark) = signal(false);
    let toggle_dark = move |_| {
        let enabled = !dark.get_untracked();
        set_dark.set(enabled);
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let result = if enabled {
                root.class_list().add_1("dark")
            } else {
                root.class_list().remove_1("dark")
            };
            if let Err(err) = result {
                log::warn!("failed to toggle dark mode class: {err:?}");
            }
        }
    };

    let sign_out = {
        let navigate = use_navigate();
        move |_| {
            set_menu_open.set(false);
            set_mobile_open.set(false);
            session.logout();
            navigate("/login", Default::default());
        }
    };
    let sign_out_mobile = {
        let navigate = use_navigate();
        move |_| {
            set_mobile_open.set(false);
            session.logout();
            navigate("/login", Default::default());
        }
    };

    view! {
        <header class="bg-white shadow-sm sticky top-0 z-10">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16">
                    <div class="flex items-center">
                        <A href="/" attr:class="text-2xl font-display font-bold text-primary-700">
                            "ConnectPro"
                        </A>
                        <nav class="hidden md:ml-8 md:flex md:space-x-6">
                            <A
                                href="/"
                                attr:class="px-1 py-2 text-sm font-medium text-gray-600 hover:text-primary-600"
                            >
                                "Home"
                            </A>
                            <A
                                href="/explore"
                                attr:class="px-1 py-2 text-sm font-medium text-gray-600 hover:text-primary-600"
                            >
                                "Explore"
                            </A>
                        </nav>
                    </div>

                    <div class="hidden md:flex items-center flex-1 max-w-md mx-8">
                        <div class="relative w-full">
                            <div class="absolute inset-y-0 left-3 flex items-center text-gray-400">
                                <Icon icon=MAGNIFYING_GLASS size="16px" />
                            </div>
                            <input
                                type="text"
                                placeholder="Search..."
                                class="w-full pl-10 pr-4 py-2 bg-gray-100 border-0 rounded-full text-sm focus:outline-none focus:ring-2 focus:ring-primary-500"
                            />
                        </div>
                    </div>

                    <div class="hidden md:flex items-center space-x-4">
                        <button
                            class="p-2 text-gray-500 hover:text-primary-600"
                            title="Toggle dark mode"
                            on:click=toggle_dark
                        >
                            {move || {
                                if dark.get() {
                                    view! { <Icon icon=SUN size="24px" /> }.into_any()
                                } else {
                                    view! { <Icon icon=MOON size="24px" /> }.into_any()
                                }
                            }}
                        </button>
                        <A
                            href="/notifications"
                            attr:class="relative p-2 text-gray-500 hover:text-primary-600"
                        >
                            <Icon icon=BELL size="24px" />
                            <span class="absolute top-1 right-1 h-2 w-2 rounded-full bg-accent-500"></span>
                        </A>
                        <A
                            href="/messages"
                            attr:class="relative p-2 text-gray-500 hover:text-primary-600"
                        >
                            <Icon icon=CHAT_TEXT size="24px" />
                            <span class="absolute top-1 right-1 h-2 w-2 rounded-full bg-accent-500"></span>
                        </A>

                        <div class="relative">
                            <button
                                class="flex items-center"
                                on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            >
                                {move || {
                                    view! {
                                        <Avatar
                                            avatar=user.get().and_then(|u| u.avatar)
                                            alt="Your profile"
                                            size="h-8 w-8"
                                        />
                                    }
                                }}
                            </button>
                            {move || {
                                menu_open
                                    .get()
                                    .then(|| {
                                        view! {
                                            <div class="absolute right-0 mt-2 w-48 bg-white rounded-md shadow-lg py-1 z-20">
                                                <A
                                                    href="/profile/me"
                                                    attr:class="block px-4 py-2 text-sm text-gray-700 hover:bg-gray-100"
                                                    on:click=move |_| set_menu_open.set(false)
                                                >
                                                    "Your Profile"
                                                </A>
                                                <A
                                                    href="/settings"
                                                    attr:class="block px-4 py-2 text-sm text-gray-700 hover:bg-gray-100"
                                                    on:click=move |_| set_menu_open.set(false)
                                                >
                                                    "Settings"
                                                </A>
                                                <button
                                                    class="block w-full text-left px-4 py-2 text-sm text-gray-700 hover:bg-gray-100"
                                                    on:click=sign_out.clone()
                                                >
                                                    "Sign out"
                                                </button>
                                            </div>
                                        }
                                    })
                            }}
                        </div>
                    </div>

                    <div class="flex md:hidden items-center">
                        <button
                            class="p-2 text-gray-500 hover:text-primary-600"
                            on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                        >
                            {move || {
                                if mobile_open.get() {
                                    view! { <Icon icon=X size="24px" /> }.into_any()
                                } else {
                                    view! { <Icon icon=LIST size="24px" /> }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>

            {move || {
                mobile_open
                    .get()
                    .then(|| {
                        view! {
                            <div class="md:hidden border-t border-gray-200 bg-white">
                                <A
                                    href="/"
                                    attr:class="block px-4 py-2 text-base font-medium text-gray-700 hover:bg-gray-50"
                                    on:click=move |_| set_mobile_open.set(false)
                                >
                                    "Home"
                                </A>
                                <A
                                    href="/explore"
                                    attr:class="block px-4 py-2 text-base font-medium text-gray-700 hover:bg-gray-50"
                                    on:click=move |_| set_mobile_open.set(false)
                                >
                                    "Explore"
                                </A>
                                <A
                                    href="/notifications"
                                    attr:class="block px-4 py-2 text-base font-medium text-gray-700 hover:bg-gray-50"
                                    on:click=move |_| set_mobile_open.set(false)
                                >
                                    "Notifications"
                                </A>
                                <A
                                    href="/messages"
                                    attr:class="block px-4 py-2 text-base font-medium text-gray-700 hover:bg-gray-50"
                                    on:click=move |_| set_mobile_open.set(false)
                                >
                                    "Messages"
                                </A>
                                <A
                                    href="/profile/me"
                                    attr:class="block px-4 py-2 text-base font-medium text-gray-700 hover:bg-gray-50"
                                    on:click=move |_| set_mobile_open.set(false)
                                >
                                    "Profile"
                                </A>
                                <button
                                    class="block w-full text-left px-4 py-2 text-base font-medium text-gray-700 hover:bg-gray-50"
                                    on:click=sign_out_mobile.clone()
                                >
                                    "Sign out"
                                </button>
                            </div>
                        }
                    })
            }}
        </header>
    }
}
