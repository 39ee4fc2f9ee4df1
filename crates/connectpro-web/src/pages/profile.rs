//! Profile page.

use connectpro_app::data::{CONNECTION_PREVIEW, PROFILE_SKILLS};
use connectpro_app::views::{is_own_profile, Post, Profile, ProfileTab};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use phosphor_leptos::{Icon, BUILDINGS, CALENDAR_BLANK, GLOBE, MAP_PIN};
use wasm_bindgen_futures::spawn_local;

use crate::components::{Avatar, PostCard};
use crate::services::{use_community, use_session};

/// Profile page: header card, skills, connections preview, and tabbed
/// content. The `me` parameter (or the viewer's own id) resolves to the
/// session-backed profile; any other id shows fixture content.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let community = use_community();
    let params = use_params_map();

    let data = RwSignal::new(Option::<(Profile, Vec<Post>)>::None);
    let (tab, set_tab) = signal(ProfileTab::Posts);

    // Refetches whenever the route parameter changes; the stale page keeps
    // its skeleton until the new load resolves.
    Effect::new(move |_| {
        let param = params.with(|p| p.get("id")).unwrap_or_default();
        data.set(None);
        set_tab.set(ProfileTab::Posts);
        let viewer = session.user().get_untracked();
        spawn_local(async move {
            let loaded = community.fetch_profile(&param, viewer.as_ref()).await;
            data.set(Some(loaded));
        });
    });

    let own_profile = move || {
        let param = params.with(|p| p.get("id")).unwrap_or_default();
        let current = session.user().get();
        is_own_profile(&param, current.as_ref().map(|u| u.id.as_str()))
    };

    view! {
        <div class="space-y-4 pb-16 lg:pb-0">
            {move || {
                match data.get() {
                    None => view! { <ProfileSkeleton /> }.into_any(),
                    Some((profile, posts)) => {
                        view! {
                            <ProfileHeader profile=profile.clone() own=own_profile() />
                            <div class="grid grid-cols-1 xl:grid-cols-3 gap-4">
                                <div class="space-y-4">
                                    <SkillsCard />
                                    <ConnectionsCard connections=profile.connections />
                                </div>
                                <div class="xl:col-span-2 space-y-4">
                                    <div class="bg-white rounded-lg shadow">
                                        <nav class="flex border-b border-gray-200">
                                            {ProfileTab::ALL
                                                .into_iter()
                                                .map(|item| {
                                                    let tab_class = move || {
                                                        let base = "flex-1 py-3 text-sm font-medium text-center border-b-2";
                                                        if tab.get() == item {
                                                            format!("{base} border-primary-600 text-primary-600")
                                                        } else {
                                                            format!(
                                                                "{base} border-transparent text-gray-500 hover:text-gray-700"
                                                            )
                                                        }
                                                    };
                                                    view! {
                                                        <button
                                                            class=tab_class
                                                            on:click=move |_| set_tab.set(item)
                                                        >
                                                            {item.label()}
                                                        </button>
                                                    }
                                                })
                                                .collect_view()}
                                        </nav>
                                    </div>
                                    <TabContent tab=tab posts=posts />
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}

/// Cover image, avatar, identity lines, stats, and the Edit/Connect button.
#[component]
fn ProfileHeader(profile: Profile, own: bool) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow overflow-hidden">
            <div class="h-40 sm:h-56 bg-gray-200">
                <img src=profile.cover alt="Cover" class="h-full w-full object-cover" />
            </div>
            <div class="px-4 sm:px-6 pb-6">
                <div class="flex flex-col sm:flex-row sm:items-end sm:justify-between -mt-10 sm:-mt-12">
                    <div class="flex items-end space-x-4">
                        <div class="ring-4 ring-white rounded-full">
                            <Avatar
                                avatar=profile.avatar
                                alt=profile.name.clone()
                                size="h-24 w-24"
                            />
                        </div>
                        <div class="pb-1">
                            <h1 class="text-xl font-bold text-gray-900">{profile.name.clone()}</h1>
                            <p class="text-sm text-gray-600">{profile.role.clone()}</p>
                        </div>
                    </div>
                    <div class="mt-4 sm:mt-0">
                        {if own {
                            view! {
                                <button class="px-4 py-2 rounded-md border border-gray-300 text-sm font-medium text-gray-700 hover:bg-gray-50">
                                    "Edit Profile"
                                </button>
                            }
                                .into_any()
                        } else {
                            view! {
                                <button class="px-4 py-2 rounded-md bg-primary-600 text-sm font-medium text-white hover:bg-primary-700">
                                    "Connect"
                                </button>
                            }
                                .into_any()
                        }}
                    </div>
                </div>

                <p class="mt-4 text-sm text-gray-700">{profile.bio}</p>

                <div class="mt-4 flex flex-wrap gap-x-6 gap-y-2 text-sm text-gray-500">
                    <span class="flex items-center space-x-1.5">
                        <Icon icon=MAP_PIN size="16px" />
                        <span>{profile.location}</span>
                    </span>
                    <span class="flex items-center space-x-1.5">
                        <Icon icon=BUILDINGS size="16px" />
                        <span>{profile.company}</span>
                    </span>
                    <span class="flex items-center space-x-1.5">
                        <Icon icon=GLOBE size="16px" />
                        <a
                            href=profile.website.clone()
                            class="text-primary-600 hover:underline"
                        >
                            {profile.website.clone()}
                        </a>
                    </span>
                    <span class="flex items-center space-x-1.5">
                        <Icon icon=CALENDAR_BLANK size="16px" />
                        <span>{format!("Joined {}", profile.joined)}</span>
                    </span>
                </div>

                <div class="mt-4 flex space-x-6 text-sm">
                    <span>
                        <span class="font-semibold text-gray-900">{profile.connections}</span>
                        <span class="text-gray-500">" connections"</span>
                    </span>
                    <span>
                        <span class="font-semibold text-gray-900">{profile.followers}</span>
                        <span class="text-gray-500">" followers"</span>
                    </span>
                    <span>
                        <span class="font-semibold text-gray-900">{profile.following}</span>
                        <span class="text-gray-500">" following"</span>
                    </span>
                </div>
            </div>
        </div>
    }
}

/// Skill chips, the same fixture set on every profile.
#[component]
fn SkillsCard() -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-4">
            <h3 class="font-semibold text-gray-900 mb-3">"Skills"</h3>
            <div class="flex flex-wrap gap-2">
                {PROFILE_SKILLS
                    .into_iter()
                    .map(|skill| {
                        view! {
                            <span class="px-3 py-1 rounded-full bg-primary-50 text-primary-700 text-xs font-medium">
                                {skill}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Connections preview grid.
#[component]
fn ConnectionsCard(connections: u32) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-4">
            <div class="flex items-center justify-between mb-3">
                <h3 class="font-semibold text-gray-900">"Connections"</h3>
                <span class="text-xs text-gray-500">{format!("{connections} total")}</span>
            </div>
            <div class="grid grid-cols-5 gap-2">
                {CONNECTION_PREVIEW
                    .into_iter()
                    .map(|(name, avatar)| {
                        view! {
                            <div class="text-center">
                                <Avatar
                                    avatar=Some(avatar.to_string())
                                    alt=name
                                    size="h-12 w-12 mx-auto"
                                />
                                <p class="mt-1 text-[10px] text-gray-600 truncate">{name}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// The selected tab's content pane.
#[component]
fn TabContent(tab: ReadSignal<ProfileTab>, posts: Vec<Post>) -> impl IntoView {
    view! {
        {move || {
            match tab.get() {
                ProfileTab::Posts => {
                    if posts.is_empty() {
                        view! {
                            <div class="bg-white rounded-lg shadow p-8 text-center text-sm text-gray-500">
                                "No posts yet."
                            </div>
                        }
                            .into_any()
                    } else {
                        posts
                            .clone()
                            .into_iter()
                            .map(|post| view! { <PostCard post=post /> })
                            .collect_view()
                            .into_any()
                    }
                }
                ProfileTab::Articles => {
                    view! {
                        <div class="bg-white rounded-lg shadow p-8 text-center text-sm text-gray-500">
                            "No articles published yet"
                        </div>
                    }
                        .into_any()
                }
                ProfileTab::Activity => {
                    view! {
                        <div class="bg-white rounded-lg shadow p-8 text-center text-sm text-gray-500">
                            "Recent activity will appear here"
                        </div>
                    }
                        .into_any()
                }
            }
        }}
    }
}

/// Loading placeholder for the whole page.
#[component]
fn ProfileSkeleton() -> impl IntoView {
    view! {
        <div class="space-y-4 animate-pulse">
            <div class="bg-white rounded-lg shadow overflow-hidden">
                <div class="h-40 sm:h-56 bg-gray-200"></div>
                <div class="px-6 pb-6">
                    <div class="-mt-12 h-24 w-24 rounded-full bg-gray-300 ring-4 ring-white"></div>
                    <div class="mt-4 space-y-2">
                        <div class="h-5 bg-gray-200 rounded w-48"></div>
                        <div class="h-4 bg-gray-200 rounded w-32"></div>
                        <div class="h-4 bg-gray-200 rounded w-full"></div>
                    </div>
                </div>
            </div>
            <div class="grid grid-cols-1 xl:grid-cols-3 gap-4">
                <div class="bg-white rounded-lg shadow h-40"></div>
                <div class="xl:col-span-2 bg-white rounded-lg shadow h-64"></div>
            </div>
        </div>
    }
}
