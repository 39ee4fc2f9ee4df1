//! Notifications page.

use connectpro_app::format::post_timestamp;
use connectpro_app::views::{
    Notification, NotificationFilter, NotificationKind, NotificationsState,
};
use leptos::prelude::*;
use phosphor_leptos::{
    Icon, IconData, AT, BELL, BRIEFCASE, CHAT_TEXT, ENVELOPE, LINK, THUMBS_UP, TROPHY, USERS,
};
use wasm_bindgen_futures::spawn_local;

use crate::components::Avatar;
use crate::services::{now_ms, use_community};

/// Icon and tint for a notification category.
fn kind_badge(kind: NotificationKind) -> (IconData, &'static str) {
    match kind {
        NotificationKind::Like => (THUMBS_UP, "bg-primary-100 text-primary-500"),
        NotificationKind::Comment => (CHAT_TEXT, "bg-secondary-100 text-secondary-500"),
        NotificationKind::Connection => (USERS, "bg-success-100 text-success-500"),
        NotificationKind::Mention => (AT, "bg-warning-100 text-warning-500"),
        NotificationKind::Achievement => (TROPHY, "bg-accent-100 text-accent-500"),
        NotificationKind::Message => (ENVELOPE, "bg-primary-100 text-primary-500"),
        NotificationKind::Share => (LINK, "bg-secondary-100 text-secondary-500"),
        NotificationKind::Opportunity => (BRIEFCASE, "bg-success-100 text-success-500"),
    }
}

/// Notification list with filter chips and explicit read-state controls.
#[component]
pub fn NotificationsPage() -> impl IntoView {
    let community = use_community();
    let state = RwSignal::new(NotificationsState::default());
    let (loading, set_loading) = signal(true);
    let (filter, set_filter) = signal(NotificationFilter::All);

    spawn_local(async move {
        let items = community.fetch_notifications().await;
        state.set(NotificationsState::new(items));
        set_loading.set(false);
    });

    view! {
        <div class="space-y-4 pb-16 lg:pb-0">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">"Notifications"</h1>
                    {move || {
                        let unread = state.with(NotificationsState::unread_count);
                        (unread > 0)
                            .then(|| {
                                let plural = if unread == 1 { "" } else { "s" };
                                view! {
                                    <p class="text-sm text-gray-500">
                                        {format!("You have {unread} unread notification{plural}")}
                                    </p>
                                }
                            })
                    }}
                </div>
                <button
                    class="text-sm font-medium text-primary-600 hover:underline"
                    on:click=move |_| state.update(NotificationsState::mark_all_read)
                >
                    "Mark all as read"
                </button>
            </div>

            <div class="flex flex-wrap gap-2">
                {NotificationFilter::BAR
                    .into_iter()
                    .map(|chip| {
                        let chip_class = move || {
                            let base = "px-3 py-1.5 rounded-full text-sm font-medium";
                            if filter.get() == chip {
                                format!("{base} bg-primary-50 text-primary-700")
                            } else {
                                format!("{base} text-gray-600 hover:bg-gray-100")
                            }
                        };
                        view! {
                            <button class=chip_class on:click=move |_| set_filter.set(chip)>
                                {chip.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                if loading.get() {
                    view! { <NotificationsSkeleton /> }.into_any()
                } else {
                    let visible: Vec<Notification> = state
                        .with(|s| s.filtered(filter.get()).into_iter().cloned().collect());
                    if visible.is_empty() {
                        let message = match filter.get() {
                            NotificationFilter::All => {
                                "You don't have any notifications yet.".to_string()
                            }
                            other => {
                                format!(
                                    "You don't have any {} notifications.",
                                    other.label().to_lowercase(),
                                )
                            }
                        };
                        view! {
                            <div class="bg-white rounded-lg shadow p-12 text-center">
                                <span class="inline-block text-gray-300">
                                    <Icon icon=BELL size="48px" />
                                </span>
                                <h3 class="mt-4 font-medium text-gray-900">"No notifications"</h3>
                                <p class="mt-1 text-sm text-gray-500">{message}</p>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <ul class="bg-white rounded-lg shadow divide-y divide-gray-100 overflow-hidden">
                                {visible
                                    .into_iter()
                                    .map(|notification| {
                                        view! { <NotificationRow notification=notification state=state /> }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}

/// One notification row; clicking marks it read.
#[component]
fn NotificationRow(
    notification: Notification,
    state: RwSignal<NotificationsState>,
) -> impl IntoView {
    let id = notification.id.clone();
    let (icon, tint) = kind_badge(notification.kind);
    let row_class = if notification.read {
        "p-4 flex space-x-3 cursor-pointer hover:bg-gray-50"
    } else {
        "p-4 flex space-x-3 cursor-pointer bg-primary-50 hover:bg-primary-100"
    };

    view! {
        <li
            class=row_class
            on:click=move |_| {
                state
                    .update(|s| {
                        s.mark_read(&id);
                    });
            }
        >
            {match notification.actor {
                Some(actor) => {
                    view! { <Avatar avatar=actor.avatar alt=actor.name size="h-10 w-10" /> }
                        .into_any()
                }
                None => {
                    view! {
                        <div class=format!(
                            "h-10 w-10 rounded-full flex items-center justify-center flex-shrink-0 {tint}"
                        )>
                            <Icon icon=icon size="18px" />
                        </div>
                    }
                        .into_any()
                }
            }}
            <div class="flex-1 min-w-0">
                <p class="text-sm font-medium text-gray-800">{notification.title}</p>
                {notification
                    .description
                    .map(|description| {
                        view! { <p class="text-sm text-gray-500 truncate">{description}</p> }
                    })}
                <p class="mt-1 text-xs text-gray-400">
                    {post_timestamp(now_ms(), notification.timestamp)}
                </p>
            </div>
            {(!notification.read)
                .then(|| {
                    view! {
                        <span class="h-2 w-2 rounded-full bg-primary-600 flex-shrink-0 mt-2"></span>
                    }
                })}
        </li>
    }
}

/// Loading placeholder for the notification list.
#[component]
fn NotificationsSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow divide-y divide-gray-100 animate-pulse">
            {(0..5)
                .map(|_| {
                    view! {
                        <div class="p-4 flex space-x-3">
                            <div class="h-10 w-10 rounded-full bg-gray-200 flex-shrink-0"></div>
                            <div class="flex-1 space-y-2 py-1">
                                <div class="h-4 bg-gray-200 rounded w-3/4"></div>
                                <div class="h-3 bg-gray-200 rounded w-1/2"></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
