//! Stateless renderer for a single transcript entry.

use leptos::prelude::*;

use super::transcript::{ChatEntry, Sender};
use crate::shared::components::TypewriterText;
use crate::shared::icons::icon;

/// One message bubble: author icon plus text.
///
/// Settled bot entries get the typewriter reveal; user entries and the
/// in-flight placeholder render their text verbatim.
#[component]
#[allow(non_snake_case)]
pub fn ChatMessage(entry: ChatEntry) -> impl IntoView {
    let is_user = entry.sender == Sender::User;

    let (align, bubble) = if is_user {
        (
            "align-self: flex-end; flex-direction: row-reverse;",
            "background: var(--colorBrandBackground2);",
        )
    } else {
        ("align-self: flex-start;", "background: var(--colorNeutralBackground2);")
    };
    let opacity = if entry.thinking { "opacity: 0.6;" } else { "" };

    view! {
        <div style=format!("display: flex; gap: 8px; max-width: 70%; {align}")>
            <span style="flex-shrink: 0; color: var(--colorNeutralForeground3); padding-top: 8px;">
                {icon(if is_user { "user" } else { "bot" })}
            </span>
            <div style=format!("padding: 10px 14px; border-radius: 12px; {bubble} {opacity}")>
                {if !is_user && !entry.thinking {
                    view! { <TypewriterText text=entry.text /> }.into_any()
                } else {
                    view! {
                        <p style="margin: 0; white-space: pre-wrap;">{entry.text}</p>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}
