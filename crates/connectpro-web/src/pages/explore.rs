//! Explore / discovery page.

use connectpro_app::views::{ExploreState, Post, SuggestedPerson, Topic, CATEGORIES};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use phosphor_leptos::{Icon, HASH, MAGNIFYING_GLASS};
use wasm_bindgen_futures::spawn_local;

use crate::components::{Avatar, PostCard};
use crate::services::use_community;

/// Discovery surface: search, category chips, trending posts, trending
/// topics, and suggested people.
#[component]
pub fn ExplorePage() -> impl IntoView {
    let community = use_community();
    let state = RwSignal::new(ExploreState::default());
    let (loading, set_loading) = signal(true);
    let (query, set_query) = signal(String::new());

    spawn_local(async move {
        let (posts, topics, people) = community.fetch_explore().await;
        state.set(ExploreState::new(posts, topics, people));
        set_loading.set(false);
    });

    // Search execution is out of scope; the submit only logs the query.
    let on_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        log::info!("explore search submitted: {}", query.get_untracked());
    };

    view! {
        <div class="space-y-4 pb-16 lg:pb-0">
            <div class="bg-white rounded-lg shadow p-4 space-y-4">
                <form on:submit=on_search class="relative">
                    <div class="absolute inset-y-0 left-3 flex items-center text-gray-400">
                        <Icon icon=MAGNIFYING_GLASS size="16px" />
                    </div>
                    <input
                        type="text"
                        placeholder="Search posts, people, topics..."
                        class="w-full pl-10 pr-4 py-2 bg-gray-100 border-0 rounded-full text-sm focus:outline-none focus:ring-2 focus:ring-primary-500"
                        prop:value=query
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                </form>

                <div class="flex flex-wrap gap-2">
                    {CATEGORIES
                        .into_iter()
                        .map(|category| {
                            let chip_class = move || {
                                let base = "px-3 py-1.5 rounded-full text-sm font-medium";
                                let active = state
                                    .with(|s| {
                                        s.selected_category.as_deref() == Some(category.id)
                                    });
                                if active {
                                    format!("{base} bg-primary-600 text-white")
                                } else {
                                    format!("{base} bg-gray-100 text-gray-700 hover:bg-gray-200")
                                }
                            };
                            view! {
                                <button
                                    class=chip_class
                                    on:click=move |_| {
                                        state.update(|s| s.toggle_category(category.id));
                                    }
                                >
                                    {category.name}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex gap-3">
                    <select class="border border-gray-300 rounded-md px-3 py-1.5 text-sm text-gray-700 focus:outline-none focus:ring-2 focus:ring-primary-500">
                        <option>"All members"</option>
                        <option>"Affiliates"</option>
                        <option>"Agencies"</option>
                        <option>"Influencers"</option>
                    </select>
                    <select class="border border-gray-300 rounded-md px-3 py-1.5 text-sm text-gray-700 focus:outline-none focus:ring-2 focus:ring-primary-500">
                        <option>"Most recent"</option>
                        <option>"Most popular"</option>
                    </select>
                </div>
            </div>

            {move || {
                if loading.get() {
                    view! { <ExploreSkeleton /> }.into_any()
                } else {
                    let posts: Vec<Post> = state
                        .with(|s| s.visible_posts().into_iter().cloned().collect());
                    let topics = state.with(|s| s.topics.clone());
                    let people = state.with(|s| s.people.clone());
                    view! {
                        <div class="grid grid-cols-1 xl:grid-cols-3 gap-4">
                            <div class="xl:col-span-2 space-y-4">
                                <h2 class="text-lg font-semibold text-gray-900">
                                    "Trending Posts"
                                </h2>
                                {if posts.is_empty() {
                                    view! {
                                        <div class="bg-white rounded-lg shadow p-8 text-center text-sm text-gray-500">
                                            "No trending posts match this category."
                                        </div>
                                    }
                                        .into_any()
                                } else {
                                    posts
                                        .into_iter()
                                        .map(|post| view! { <PostCard post=post /> })
                                        .collect_view()
                                        .into_any()
                                }}
                            </div>
                            <div class="space-y-4">
                                <TrendingTopics topics=topics />
                                <SuggestedPeople people=people />
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// Trending topic cards with post counts.
#[component]
fn TrendingTopics(topics: Vec<Topic>) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow overflow-hidden">
            <div class="p-4 border-b border-gray-200">
                <h3 class="font-semibold text-gray-900">"Trending Topics"</h3>
            </div>
            <ul class="divide-y divide-gray-100">
                {topics
                    .into_iter()
                    .map(|topic| {
                        view! {
                            <li class="p-4 flex items-center space-x-3 hover:bg-gray-50 cursor-pointer">
                                <div class="h-9 w-9 rounded-md bg-primary-100 text-primary-600 flex items-center justify-center flex-shrink-0">
                                    <Icon icon=HASH size="16px" />
                                </div>
                                <div class="min-w-0">
                                    <p class="font-medium text-gray-900 truncate">{topic.name}</p>
                                    <p class="text-xs text-gray-500">
                                        {format!("{} posts", topic.post_count)}
                                    </p>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Suggested-people cards with a local follow toggle.
#[component]
fn SuggestedPeople(people: Vec<SuggestedPerson>) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow overflow-hidden">
            <div class="p-4 border-b border-gray-200">
                <h3 class="font-semibold text-gray-900">"People to Follow"</h3>
            </div>
            <ul class="divide-y divide-gray-100">
                {people
                    .into_iter()
                    .map(|person| view! { <PersonRow person=person /> })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// One suggested person. Following is display-local state; nothing is sent
/// anywhere.
#[component]
fn PersonRow(person: SuggestedPerson) -> impl IntoView {
    let (following, set_following) = signal(false);
    let button_class = move || {
        if following.get() {
            "px-3 py-1 rounded-full text-sm font-medium bg-gray-100 text-gray-700"
        } else {
            "px-3 py-1 rounded-full text-sm font-medium bg-primary-600 text-white hover:bg-primary-700"
        }
    };

    view! {
        <li class="p-4 flex items-center space-x-3">
            <Avatar avatar=person.avatar alt=person.name.clone() size="h-10 w-10" />
            <div class="flex-1 min-w-0">
                <p class="font-medium text-gray-900 truncate">{person.name}</p>
                <p class="text-xs text-gray-500 truncate">{person.role}</p>
                <p class="text-xs text-gray-400">{format!("{} followers", person.followers)}</p>
            </div>
            <button
                class=button_class
                on:click=move |_| set_following.update(|f| *f = !*f)
            >
                {move || if following.get() { "Following" } else { "Follow" }}
            </button>
        </li>
    }
}

/// Loading placeholder for the discovery grid.
#[component]
fn ExploreSkeleton() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 xl:grid-cols-3 gap-4 animate-pulse">
            <div class="xl:col-span-2 space-y-4">
                {(0..3)
                    .map(|_| {
                        view! {
                            <div class="bg-white rounded-lg shadow p-4 space-y-3">
                                <div class="flex items-center space-x-3">
                                    <div class="h-10 w-10 rounded-full bg-gray-200"></div>
                                    <div class="space-y-2">
                                        <div class="h-4 bg-gray-200 rounded w-32"></div>
                                        <div class="h-3 bg-gray-200 rounded w-24"></div>
                                    </div>
                                </div>
                                <div class="h-4 bg-gray-200 rounded w-full"></div>
                                <div class="h-4 bg-gray-200 rounded w-2/3"></div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="space-y-4">
                <div class="bg-white rounded-lg shadow h-48"></div>
                <div class="bg-white rounded-lg shadow h-48"></div>
            </div>
        </div>
    }
}
