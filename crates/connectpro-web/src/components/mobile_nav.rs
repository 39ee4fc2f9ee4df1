//! Bottom tab bar for small screens.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use phosphor_leptos::{Icon, IconData, BELL, CHAT_TEXT, COMPASS, HOUSE, USER};

/// Fixed bottom navigation, visible only below the desktop breakpoint.
#[component]
pub fn MobileNavigation() -> impl IntoView {
    let items: [(&str, &str, IconData); 5] = [
        ("Home", "/", HOUSE),
        ("Explore", "/explore", COMPASS),
        ("Messages", "/messages", CHAT_TEXT),
        ("Notifications", "/notifications", BELL),
        ("Profile", "/profile/me", USER),
    ];

    view! {
        <nav class="fixed bottom-0 inset-x-0 bg-white border-t border-gray-200 z-10 grid grid-cols-5">
            {items
                .into_iter()
                .map(|(label, href, icon)| view! { <MobileTab label=label href=href icon=icon /> })
                .collect_view()}
        </nav>
    }
}

/// One bottom tab, tinted when its route is active.
#[component]
fn MobileTab(label: &'static str, href: &'static str, icon: IconData) -> impl IntoView {
    let location = use_location();
    let class = move || {
        let base = "flex flex-col items-center justify-center py-2 text-xs";
        if location.pathname.get() == href {
            format!("{base} text-primary-600")
        } else {
            format!("{base} text-gray-500")
        }
    };

    view! {
        <A href=href attr:class=class>
            <Icon icon=icon size="22px" />
            <span class="mt-1">{label}</span>
        </A>
    }
}
