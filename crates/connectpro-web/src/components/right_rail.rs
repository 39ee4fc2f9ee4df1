//! Right rail: suggested connections, trending topics, upcoming events.

use leptos::prelude::*;
use leptos_router::components::A;
use phosphor_leptos::{Icon, BELL, TREND_UP, USERS};

use crate::components::Avatar;
use crate::services::use_community;

/// Connection suggestions with mutual-connection counts.
const SUGGESTED: [(&str, &str, u32, &str); 3] = [
    (
        "Sarah Johnson",
        "Traffic Manager",
        12,
        "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg",
    ),
    (
        "Miguel Lopez",
        "Agency Owner",
        8,
        "https://images.pexels.com/photos/2379005/pexels-photo-2379005.jpeg",
    ),
    (
        "Priya Patel",
        "Affiliate",
        5,
        "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg",
    ),
];

/// Desktop right rail with discovery shortcuts.
#[component]
pub fn RightSidebar() -> impl IntoView {
    let community = use_community();
    let topics = community.trending_topics();

    view! {
        <div class="space-y-6">
            <div class="bg-white rounded-lg shadow overflow-hidden">
                <div class="p-4 border-b border-gray-200">
                    <h2 class="font-medium text-gray-900">"Suggested Connections"</h2>
                </div>
                <ul class="divide-y divide-gray-100">
                    {SUGGESTED
                        .into_iter()
                        .map(|(name, role, mutual, avatar)| {
                            view! {
                                <li class="p-4 flex items-center justify-between">
                                    <div class="flex items-center space-x-3 min-w-0">
                                        <Avatar
                                            avatar=Some(avatar.to_string())
                                            alt=name
                                            size="h-10 w-10"
                                        />
                                        <div class="min-w-0">
                                            <p class="font-medium text-sm text-gray-900 truncate">
                                                {name}
                                            </p>
                                            <p class="text-xs text-gray-500">
                                                {format!("{role} \u{2022} {mutual} mutual connections")}
                                            </p>
                                        </div>
                                    </div>
                                    <button class="p-2 bg-primary-50 text-primary-600 rounded-full hover:bg-primary-100">
                                        <Icon icon=USERS size="16px" />
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="p-3 border-t border-gray-100 text-center">
                    <A
                        href="/network"
                        attr:class="text-sm font-medium text-primary-600 hover:text-primary-700"
                    >
                        "View all suggestions"
                    </A>
                </div>
            </div>

            <div class="bg-white rounded-lg shadow overflow-hidden">
                <div class="p-4 border-b border-gray-200">
                    <h2 class="font-medium text-gray-900">"Trending in Marketing"</h2>
                </div>
                <div class="divide-y divide-gray-100">
                    {topics
                        .into_iter()
                        .take(3)
                        .map(|topic| {
                            view! {
                                <A
                                    href=format!("/explore?topic={}", topic.id)
                                    attr:class="block p-4 hover:bg-gray-50"
                                >
                                    <div class="flex items-center justify-between">
                                        <div>
                                            <p class="font-medium text-sm text-gray-900">
                                                {format!("#{}", topic.name)}
                                            </p>
                                            <p class="text-xs text-gray-500">
                                                {format!("{} posts", topic.post_count)}
                                            </p>
                                        </div>
                                        <span class="text-gray-400">
                                            <Icon icon=TREND_UP size="16px" />
                                        </span>
                                    </div>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="p-3 border-t border-gray-100 text-center">
                    <A
                        href="/explore"
                        attr:class="text-sm font-medium text-primary-600 hover:text-primary-700"
                    >
                        "Explore more topics"
                    </A>
                </div>
            </div>

            <div class="bg-white rounded-lg shadow overflow-hidden">
                <div class="p-4 border-b border-gray-200">
                    <h2 class="font-medium text-gray-900">"Upcoming Events"</h2>
                </div>
                <div class="p-4">
                    <div class="flex items-center">
                        <span class="text-xs font-semibold bg-accent-50 text-accent-600 rounded px-2 py-0.5">
                            "WEBINAR"
                        </span>
                        <span class="text-xs text-gray-500 ml-2">"Tomorrow, 2:00 PM"</span>
                    </div>
                    <h3 class="font-medium text-sm text-gray-900 mt-2">
                        "Advanced Affiliate Strategies for 2025"
                    </h3>
                    <div class="mt-2 flex items-center text-xs text-gray-500">
                        <span class="mr-1">
                            <Icon icon=BELL size="14px" />
                        </span>
                        "165 attending"
                    </div>
                </div>
                <div class="p-3 border-t border-gray-100 text-center">
                    <A
                        href="/events"
                        attr:class="text-sm font-medium text-primary-600 hover:text-primary-700"
                    >
                        "View all events"
                    </A>
                </div>
            </div>
        </div>
    }
}
