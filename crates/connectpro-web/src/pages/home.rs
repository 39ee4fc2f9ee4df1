//! Home feed page.

use connectpro_app::views::{FeedState, PostAuthor, PostDraft};
use leptos::prelude::*;

use crate::components::{PostCard, PostComposer};
use crate::services::{now_ms, use_community, use_session};

/// Home feed: composer on top, posts below, newest first.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let community = use_community();
    let feed = RwSignal::new(FeedState::new(community.feed_posts()));

    let on_post = move |draft: PostDraft| {
        let Some(user) = session.user().get_untracked() else {
            return;
        };
        let author = PostAuthor {
            id: user.id,
            name: user.name,
            role: user.role.label().to_string(),
            avatar: user.avatar,
        };
        feed.update(|state| {
            state.submit_post(&author, &draft, now_ms());
        });
    };

    view! {
        <div class="space-y-4 pb-16 lg:pb-0">
            <PostComposer on_post=on_post />
            <For
                each=move || feed.get().posts
                key=|post| post.id.clone()
                children=|post| view! { <PostCard post=post /> }
            />
        </div>
    }
}
