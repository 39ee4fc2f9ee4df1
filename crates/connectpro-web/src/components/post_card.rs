//! Feed post card.

use connectpro_app::format::post_timestamp;
use connectpro_app::views::{LikeState, MediaKind, Post};
use leptos::prelude::*;
use phosphor_leptos::{Icon, CHAT_TEXT, DOTS_THREE, SHARE, THUMBS_UP};

use crate::components::Avatar;
use crate::services::{now_ms, use_community, use_session};

/// One post: author header, body, optional media, counters, action row, and
/// an expandable comment panel.
///
/// Likes are card-local state seeded from the stored count; toggling never
/// writes back to the feed.
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let session = use_session();
    let community = use_community();

    let like = RwSignal::new(LikeState::seeded(post.likes));
    let (show_comments, set_show_comments) = signal(false);

    let viewer_avatar = move || session.user().get().and_then(|u| u.avatar);
    let comments = community.post_comments();
    let rendered_at = now_ms();

    let author = post.author;
    let media = post.media.into_iter().next();
    let comment_count = post.comments;
    let share_count = post.shares;

    let like_class = move || {
        let base =
            "flex-1 flex items-center justify-center space-x-2 py-2 text-sm font-medium hover:bg-gray-50";
        if like.get().liked {
            format!("{base} text-primary-600")
        } else {
            format!("{base} text-gray-500")
        }
    };

    view! {
        <div class="bg-white rounded-lg shadow">
            <div class="p-4">
                <div class="flex justify-between">
                    <div class="flex items-center space-x-3">
                        <Avatar
                            avatar=author.avatar.clone()
                            alt=author.name.clone()
                            size="h-10 w-10"
                        />
                        <div>
                            <p class="font-medium text-gray-900">{author.name.clone()}</p>
                            <p class="text-xs text-gray-500">
                                {format!(
                                    "{} \u{2022} {}",
                                    author.role,
                                    post_timestamp(rendered_at, post.timestamp),
                                )}
                            </p>
                        </div>
                    </div>
                    <button class="self-start text-gray-400 hover:text-gray-600">
                        <Icon icon=DOTS_THREE size="20px" />
                    </button>
                </div>
                <p class="mt-3 text-gray-800 whitespace-pre-line">{post.content}</p>
            </div>

            {media
                .map(|item| match item.kind {
                    MediaKind::Image => {
                        view! {
                            <img
                                src=item.url
                                alt=item.alt
                                class="w-full max-h-96 object-cover"
                            />
                        }
                            .into_any()
                    }
                    MediaKind::Video => {
                        view! {
                            <video
                                src=item.url
                                poster=item.poster
                                controls=true
                                class="w-full max-h-96"
                            ></video>
                        }
                            .into_any()
                    }
                })}

            <div class="px-4 py-2 flex items-center justify-between text-sm text-gray-500">
                <div>
                    {move || {
                        let state = like.get();
                        (state.count > 0)
                            .then(|| {
                                view! {
                                    <span class="flex items-center">
                                        <span class="bg-primary-100 text-primary-600 p-1 rounded-full mr-1.5">
                                            <Icon icon=THUMBS_UP size="12px" />
                                        </span>
                                        {state.count}
                                    </span>
                                }
                            })
                    }}
                </div>
                <div class="flex items-center space-x-4">
                    {(comment_count > 0)
                        .then(|| {
                            view! {
                                <button
                                    class="hover:underline"
                                    on:click=move |_| set_show_comments.update(|open| *open = !*open)
                                >
                                    {format!("{comment_count} comments")}
                                </button>
                            }
                        })}
                    {(share_count > 0)
                        .then(|| view! { <span>{format!("{share_count} shares")}</span> })}
                </div>
            </div>

            <div class="border-t border-gray-100 flex">
                <button class=like_class on:click=move |_| like.update(LikeState::toggle)>
                    <Icon icon=THUMBS_UP size="18px" />
                    <span>"Like"</span>
                </button>
                <button
                    class="flex-1 flex items-center justify-center space-x-2 py-2 text-sm font-medium text-gray-500 hover:bg-gray-50"
                    on:click=move |_| set_show_comments.update(|open| *open = !*open)
                >
                    <Icon icon=CHAT_TEXT size="18px" />
                    <span>"Comment"</span>
                </button>
                <button class="flex-1 flex items-center justify-center space-x-2 py-2 text-sm font-medium text-gray-500 hover:bg-gray-50">
                    <Icon icon=SHARE size="18px" />
                    <span>"Share"</span>
                </button>
            </div>

            {move || {
                show_comments
                    .get()
                    .then(|| {
                        view! {
                            <div class="bg-gray-50 p-4 border-t border-gray-100 space-y-3">
                                <div class="flex items-center space-x-2">
                                    <Avatar
                                        avatar=viewer_avatar()
                                        alt="Your profile"
                                        size="h-8 w-8"
                                    />
                                    <input
                                        type="text"
                                        placeholder="Write a comment..."
                                        class="flex-1 bg-white border border-gray-200 rounded-full px-4 py-2 text-sm focus:outline-none focus:ring-1 focus:ring-primary-500"
                                    />
                                </div>
                                {comments
                                    .clone()
                                    .into_iter()
                                    .map(|comment| {
                                        view! {
                                            <div class="flex space-x-2">
                                                <Avatar
                                                    avatar=comment.avatar
                                                    alt=comment.author_name.clone()
                                                    size="h-8 w-8"
                                                />
                                                <div class="flex-1">
                                                    <div class="bg-white rounded-lg p-3">
                                                        <p class="font-medium text-sm text-gray-900">
                                                            {comment.author_name}
                                                        </p>
                                                        <p class="text-sm text-gray-800">{comment.text}</p>
                                                    </div>
                                                    <div class="flex items-center space-x-3 mt-1 px-3 text-xs text-gray-500">
                                                        <button class="hover:underline">"Like"</button>
                                                        <button class="hover:underline">"Reply"</button>
                                                        <span>
                                                            {post_timestamp(rendered_at, comment.timestamp)}
                                                        </span>
                                                    </div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                                {(comment_count > 2)
                                    .then(|| {
                                        view! {
                                            <button class="text-sm text-primary-600 hover:underline">
                                                {format!("View all {comment_count} comments")}
                                            </button>
                                        }
                                    })}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
