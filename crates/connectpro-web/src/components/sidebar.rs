//! Left navigation rail.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use phosphor_leptos::{
    Icon, IconData, BRIEFCASE, CALCULATOR, CHART_BAR, COMPASS, GEAR, HOUSE, TREND_UP, TROPHY,
    USERS,
};

use crate::components::Avatar;
use crate::services::use_session;

/// Desktop sidebar: user snapshot, primary navigation, and the professional
/// tools section.
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let user = session.user();

    let main_items: [(&str, &str, IconData); 4] = [
        ("Home", "/", HOUSE),
        ("Explore", "/explore", COMPASS),
        ("Network", "/network", USERS),
        ("Analytics", "/analytics", CHART_BAR),
    ];
    let tool_items: [(&str, &str, IconData); 4] = [
        ("Campaign Simulator", "/campaign-simulator", CALCULATOR),
        ("Campaigns", "/campaigns", BRIEFCASE),
        ("Agency Hub", "/agency-hub", TREND_UP),
        ("Influencer Zone", "/influencer", TROPHY),
    ];

    view! {
        <div class="bg-white rounded-lg shadow overflow-hidden">
            <div class="p-4 border-b border-gray-200 flex items-center space-x-3">
                {move || {
                    let user = user.get();
                    let name = user
                        .as_ref()
                        .map(|u| u.name.clone())
                        .unwrap_or_else(|| "User Name".to_string());
                    let role = user
                        .as_ref()
                        .map(|u| u.role.label().to_string())
                        .unwrap_or_else(|| "Affiliate".to_string());
                    let connections = user.as_ref().and_then(|u| u.connections).unwrap_or(0);
                    let avatar = user.and_then(|u| u.avatar);
                    view! {
                        <Avatar avatar=avatar alt=name.clone() size="h-12 w-12" />
                        <div class="min-w-0">
                            <p class="font-medium text-gray-900 truncate">{name}</p>
                            <p class="text-xs text-gray-500">
                                {format!("{role} \u{2022} {connections} connections")}
                            </p>
                        </div>
                    }
                }}
            </div>

            <nav class="p-2 space-y-1">
                {main_items
                    .into_iter()
                    .map(|(label, href, icon)| {
                        view! { <SidebarLink label=label href=href icon=icon /> }
                    })
                    .collect_view()}
            </nav>

            <div class="px-4 pt-4 pb-1">
                <h3 class="text-xs font-semibold text-gray-500 uppercase tracking-wider">
                    "Professional Tools"
                </h3>
            </div>
            <nav class="p-2 space-y-1">
                {tool_items
                    .into_iter()
                    .map(|(label, href, icon)| {
                        view! { <SidebarLink label=label href=href icon=icon /> }
                    })
                    .collect_view()}
            </nav>

            <div class="p-2 border-t border-gray-200 mt-2">
                <SidebarLink label="Settings" href="/settings" icon=GEAR />
            </div>
        </div>
    }
}

/// One navigation row, highlighted when its route is active.
#[component]
fn SidebarLink(label: &'static str, href: &'static str, icon: IconData) -> impl IntoView {
    let location = use_location();
    let class = move || {
        let base = "flex items-center px-3 py-2 rounded-md text-sm font-medium";
        if location.pathname.get() == href {
            format!("{base} bg-primary-50 text-primary-700")
        } else {
            format!("{base} text-gray-700 hover:bg-gray-50")
        }
    };

    view! {
        <A href=href attr:class=class>
            <span class="mr-3">
                <Icon icon=icon size="20px" />
            </span>
            {label}
        </A>
    }
}
