//! Post composer card.

use connectpro_app::views::{MediaItem, MediaKind, PostDraft};
use leptos::prelude::*;
use phosphor_leptos::{Icon, IMAGE, LINK, VIDEO_CAMERA, X};

use crate::components::Avatar;
use crate::services::use_session;

/// Composer: text area, optional single media attachment behind a hidden
/// file picker, and the submit button.
///
/// Picked files become object URLs for preview. Submitting hands the URL to
/// the new post, so it is only revoked when the attachment is replaced or
/// removed without posting.
#[component]
pub fn PostComposer(#[prop(into)] on_post: Callback<PostDraft>) -> impl IntoView {
    let session = use_session();
    let (text, set_text) = signal(String::new());
    let (preview, set_preview) = signal(Option::<MediaItem>::None);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let viewer_avatar = move || session.user().get().and_then(|u| u.avatar);

    let revoke_preview = move || {
        if let Some(media) = preview.get_untracked() {
            if let Err(err) = web_sys::Url::revoke_object_url(&media.url) {
                log::warn!("failed to revoke media preview URL: {err:?}");
            }
        }
    };

    let open_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        input.set_value("");
        match MediaKind::from_mime(&file.type_()) {
            Some(kind) => match web_sys::Url::create_object_url_with_blob(&file) {
                Ok(url) => {
                    revoke_preview();
                    set_preview.set(Some(MediaItem {
                        kind,
                        url,
                        alt: Some("Post media".to_string()),
                        poster: None,
                    }));
                }
                Err(err) => log::warn!("failed to create media preview URL: {err:?}"),
            },
            None => {
                log::warn!("unsupported attachment type {}", file.type_());
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message("Unsupported file type");
                }
            }
        }
    };

    let clear_media = move |_| {
        revoke_preview();
        set_preview.set(None);
    };

    let can_post = move || !text.get().trim().is_empty() || preview.get().is_some();

    let submit = move |_| {
        let draft = PostDraft {
            text: text.get_untracked(),
            media: preview.get_untracked(),
        };
        if draft.is_empty() {
            return;
        }
        on_post.run(draft);
        set_text.set(String::new());
        // The object URL now belongs to the submitted post
        set_preview.set(None);
    };

    view! {
        <div class="bg-white rounded-lg shadow p-4">
            <div class="flex space-x-3">
                {move || {
                    view! { <Avatar avatar=viewer_avatar() alt="Your profile" size="h-10 w-10" /> }
                }}
                <div class="flex-1">
                    <textarea
                        placeholder="What's on your mind?"
                        class="w-full border-0 bg-gray-50 rounded-lg p-3 text-sm resize-none focus:outline-none focus:ring-2 focus:ring-primary-500"
                        style="min-height: 60px"
                        prop:value=text
                        on:input=move |ev| set_text.set(event_target_value(&ev))
                    ></textarea>

                    {move || {
                        preview
                            .get()
                            .map(|media| {
                                view! {
                                    <div class="relative mt-2">
                                        {match media.kind {
                                            MediaKind::Image => {
                                                view! {
                                                    <img
                                                        src=media.url
                                                        alt="Post preview"
                                                        class="w-full max-h-60 object-cover rounded-lg"
                                                    />
                                                }
                                                    .into_any()
                                            }
                                            MediaKind::Video => {
                                                view! {
                                                    <video
                                                        src=media.url
                                                        controls=true
                                                        class="w-full max-h-60 rounded-lg"
                                                    ></video>
                                                }
                                                    .into_any()
                                            }
                                        }}
                                        <button
                                            class="absolute top-2 right-2 bg-gray-900/60 text-white rounded-full p-1 hover:bg-gray-900/80"
                                            on:click=clear_media
                                        >
                                            <Icon icon=X size="16px" />
                                        </button>
                                    </div>
                                }
                            })
                    }}

                    <div class="flex items-center justify-between mt-3 pt-3 border-t border-gray-100">
                        <div class="flex items-center space-x-1">
                            <button
                                class="flex items-center space-x-1 px-2 py-1 rounded-md text-sm text-gray-500 hover:bg-gray-100"
                                on:click=open_picker
                            >
                                <Icon icon=IMAGE size="18px" />
                                <span>"Photo"</span>
                            </button>
                            <button
                                class="flex items-center space-x-1 px-2 py-1 rounded-md text-sm text-gray-500 hover:bg-gray-100"
                                on:click=open_picker
                            >
                                <Icon icon=VIDEO_CAMERA size="18px" />
                                <span>"Video"</span>
                            </button>
                            <button class="flex items-center space-x-1 px-2 py-1 rounded-md text-sm text-gray-500 hover:bg-gray-100">
                                <Icon icon=LINK size="18px" />
                                <span>"Link"</span>
                            </button>
                        </div>
                        <button
                            class="bg-primary-600 text-white px-4 py-1.5 rounded-full text-sm font-medium hover:bg-primary-700 disabled:opacity-50 disabled:cursor-not-allowed"
                            disabled=move || !can_post()
                            on:click=submit
                        >
                            "Post"
                        </button>
                    </div>

                    <input
                        type="file"
                        accept="image/*,video/*"
                        class="hidden"
                        node_ref=file_input
                        on:change=on_file_change
                    />
                </div>
            </div>
        </div>
    }
}
