//! Circular avatar with a person-glyph fallback.

use leptos::prelude::*;
use phosphor_leptos::{Icon, USER};

/// Avatar image in a circle, falling back to a glyph when no URL is set.
#[component]
pub fn Avatar(
    avatar: Option<String>,
    #[prop(into)] alt: String,
    /// Tailwind sizing classes, e.g. `h-10 w-10`.
    #[prop(into)] size: String,
) -> impl IntoView {
    view! {
        <div class=format!(
            "{size} rounded-full bg-primary-100 text-primary-600 overflow-hidden flex-shrink-0 flex items-center justify-center"
        )>
            {match avatar {
                Some(url) => {
                    view! { <img src=url alt=alt class="h-full w-full object-cover" /> }
                        .into_any()
                }
                None => view! { <Icon icon=USER size="60%" /> }.into_any(),
            }}
        </div>
    }
}
