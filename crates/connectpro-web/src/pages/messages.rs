//! Messaging page: contact rail plus conversation pane.

use connectpro_app::format::message_timestamp;
use connectpro_app::views::{Contact, MessagesState};
use leptos::prelude::*;
use phosphor_leptos::{
    Icon, CARET_LEFT, CHAT_TEXT, DOTS_THREE_VERTICAL, MAGNIFYING_GLASS, PAPER_PLANE_TILT, PHONE,
    VIDEO_CAMERA,
};

use crate::components::Avatar;
use crate::services::{now_ms, use_community, use_session};

/// Split-view messaging: searchable contacts on the left, the selected
/// conversation on the right. On small screens the two panes swap based on
/// the mobile-conversation flag.
#[component]
pub fn MessagesPage() -> impl IntoView {
    let session = use_session();
    let community = use_community();

    let state = RwSignal::new(MessagesState::new(community.contacts()));
    let (query, set_query) = signal(String::new());
    let (draft, set_draft) = signal(String::new());

    let viewer_id = move || {
        session
            .user()
            .get_untracked()
            .map(|u| u.id)
            .unwrap_or_default()
    };

    let select_contact = move |id: String| {
        let messages = community.conversation(&id, &viewer_id());
        state.update(|s| {
            s.open_conversation(&id, messages);
        });
    };

    let send = move || {
        let text = draft.get_untracked();
        let sender = viewer_id();
        let mut sent = false;
        state.update(|s| sent = s.send_message(&sender, &text, now_ms()));
        if sent {
            set_draft.set(String::new());
        }
    };

    let visible_contacts = move || {
        let needle = query.get();
        state.with(|s| {
            s.filtered_contacts(&needle)
                .into_iter()
                .cloned()
                .collect::<Vec<Contact>>()
        })
    };

    let list_class = move || {
        let visibility = if state.with(|s| s.mobile_conversation) {
            "hidden md:flex"
        } else {
            "flex"
        };
        format!("{visibility} w-full md:w-80 lg:w-96 border-r border-gray-200 flex-col")
    };
    let pane_class = move || {
        let visibility = if state.with(|s| s.mobile_conversation) {
            "flex"
        } else {
            "hidden md:flex"
        };
        format!("{visibility} flex-1 flex-col min-w-0")
    };

    view! {
        <div class="bg-white rounded-lg shadow overflow-hidden flex h-[calc(100vh-9rem)] mb-16 lg:mb-0">
            <div class=list_class>
                <div class="p-4 border-b border-gray-200">
                    <h2 class="text-lg font-semibold text-gray-900">"Messages"</h2>
                    <div class="relative mt-2">
                        <div class="absolute inset-y-0 left-3 flex items-center text-gray-400">
                            <Icon icon=MAGNIFYING_GLASS size="14px" />
                        </div>
                        <input
                            type="text"
                            placeholder="Search messages"
                            class="w-full pl-9 pr-3 py-2 bg-gray-100 border-0 rounded-md text-sm focus:outline-none focus:ring-2 focus:ring-primary-500"
                            prop:value=query
                            on:input=move |ev| set_query.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="flex-1 overflow-y-auto">
                    {move || {
                        let contacts = visible_contacts();
                        let selected = state.with(|s| s.selected.clone());
                        if contacts.is_empty() {
                            view! {
                                <p class="p-4 text-center text-sm text-gray-500">
                                    "No contacts found"
                                </p>
                            }
                                .into_any()
                        } else {
                            contacts
                                .into_iter()
                                .map(|contact| {
                                    let id = contact.id.clone();
                                    let row_class = if selected.as_deref() == Some(contact.id.as_str()) {
                                        "w-full p-4 flex items-center space-x-3 text-left bg-primary-50"
                                    } else {
                                        "w-full p-4 flex items-center space-x-3 text-left hover:bg-gray-50"
                                    };
                                    view! {
                                        <button
                                            class=row_class
                                            on:click=move |_| select_contact(id.clone())
                                        >
                                            <div class="relative flex-shrink-0">
                                                <Avatar
                                                    avatar=contact.avatar.clone()
                                                    alt=contact.name.clone()
                                                    size="h-12 w-12"
                                                />
                                                <span class=format!(
                                                    "absolute bottom-0 right-0 h-3 w-3 rounded-full border-2 border-white {}",
                                                    if contact.online { "bg-success-500" } else { "bg-gray-300" },
                                                )></span>
                                            </div>
                                            <div class="flex-1 min-w-0">
                                                <div class="flex items-center justify-between">
                                                    <p class="font-medium text-gray-900 truncate">
                                                        {contact.name.clone()}
                                                    </p>
                                                    {contact
                                                        .last_message_time
                                                        .map(|ts| {
                                                            view! {
                                                                <span class="text-xs text-gray-500 ml-2 flex-shrink-0">
                                                                    {message_timestamp(now_ms(), ts)}
                                                                </span>
                                                            }
                                                        })}
                                                </div>
                                                <div class="flex items-center justify-between">
                                                    <p class="text-sm text-gray-500 truncate">
                                                        {contact.last_message.clone().unwrap_or_default()}
                                                    </p>
                                                    {(contact.unread > 0)
                                                        .then(|| {
                                                            view! {
                                                                <span class="ml-2 flex-shrink-0 h-5 w-5 rounded-full bg-primary-600 text-white text-xs flex items-center justify-center">
                                                                    {contact.unread}
                                                                </span>
                                                            }
                                                        })}
                                                </div>
                                            </div>
                                        </button>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </div>

            <div class=pane_class>
                {move || {
                    let snapshot = state.get();
                    match snapshot.selected_contact().cloned() {
                        Some(contact) => {
                            let messages = snapshot.messages.clone();
                            let viewer = viewer_id();
                            view! {
                                <div class="p-4 border-b border-gray-200 flex items-center justify-between">
                                    <div class="flex items-center space-x-3 min-w-0">
                                        <button
                                            class="md:hidden p-1 text-gray-500 hover:text-gray-700"
                                            on:click=move |_| state.update(MessagesState::close_conversation)
                                        >
                                            <Icon icon=CARET_LEFT size="20px" />
                                        </button>
                                        <div class="relative flex-shrink-0">
                                            <Avatar
                                                avatar=contact.avatar.clone()
                                                alt=contact.name.clone()
                                                size="h-10 w-10"
                                            />
                                            <span class=format!(
                                                "absolute bottom-0 right-0 h-2.5 w-2.5 rounded-full border-2 border-white {}",
                                                if contact.online { "bg-success-500" } else { "bg-gray-300" },
                                            )></span>
                                        </div>
                                        <div class="min-w-0">
                                            <p class="font-medium text-gray-900 truncate">
                                                {contact.name.clone()}
                                            </p>
                                            <p class=if contact.online {
                                                "text-xs text-success-600"
                                            } else {
                                                "text-xs text-gray-500"
                                            }>
                                                {if contact.online { "Online" } else { "Offline" }}
                                            </p>
                                        </div>
                                    </div>
                                    <div class="flex items-center space-x-1 text-gray-400">
                                        <button class="p-2 rounded-full hover:bg-gray-100">
                                            <Icon icon=PHONE size="18px" />
                                        </button>
                                        <button class="p-2 rounded-full hover:bg-gray-100">
                                            <Icon icon=VIDEO_CAMERA size="18px" />
                                        </button>
                                        <button class="p-2 rounded-full hover:bg-gray-100">
                                            <Icon icon=DOTS_THREE_VERTICAL size="18px" />
                                        </button>
                                    </div>
                                </div>

                                <div class="flex-1 overflow-y-auto p-4 space-y-3">
                                    {messages
                                        .into_iter()
                                        .map(|message| {
                                            let own = message.sender_id == viewer;
                                            let wrapper = if own {
                                                "flex justify-end"
                                            } else {
                                                "flex justify-start"
                                            };
                                            let bubble = if own {
                                                "max-w-xs lg:max-w-md bg-primary-500 text-white rounded-lg rounded-br-none px-4 py-2"
                                            } else {
                                                "max-w-xs lg:max-w-md bg-gray-100 text-gray-800 rounded-lg rounded-bl-none px-4 py-2"
                                            };
                                            let stamp = if own {
                                                "text-xs mt-1 text-primary-100"
                                            } else {
                                                "text-xs mt-1 text-gray-500"
                                            };
                                            view! {
                                                <div class=wrapper>
                                                    <div class=bubble>
                                                        <p class="text-sm">{message.text}</p>
                                                        <p class=stamp>
                                                            {message_timestamp(now_ms(), message.timestamp)}
                                                        </p>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>

                                <div class="p-4 border-t border-gray-200 flex items-center space-x-2">
                                    <input
                                        type="text"
                                        placeholder="Type a message..."
                                        class="flex-1 border border-gray-300 rounded-full px-4 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-primary-500"
                                        prop:value=draft
                                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                                        on:keydown=move |ev| {
                                            if ev.key() == "Enter" && !ev.shift_key() {
                                                ev.prevent_default();
                                                send();
                                            }
                                        }
                                    />
                                    <button
                                        class="bg-primary-600 text-white p-2.5 rounded-full hover:bg-primary-700 disabled:opacity-50"
                                        disabled=move || draft.get().trim().is_empty()
                                        on:click=move |_| send()
                                    >
                                        <Icon icon=PAPER_PLANE_TILT size="16px" />
                                    </button>
                                </div>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <div class="flex-1 flex flex-col items-center justify-center text-center p-8">
                                    <div class="h-16 w-16 bg-primary-100 text-primary-600 rounded-full flex items-center justify-center">
                                        <Icon icon=CHAT_TEXT size="28px" />
                                    </div>
                                    <h3 class="mt-4 text-lg font-medium text-gray-900">
                                        "Your Messages"
                                    </h3>
                                    <p class="mt-1 text-sm text-gray-500">
                                        "Select a conversation or start a new one"
                                    </p>
                                </div>
                            }
                                .into_any()
                        }
                    }
                }}
            </div>
        </div>
    }
}
