//! TypewriterText — progressive reveal for settled bot answers.
//!
//! Cosmetic only: the full text is already in memory, the component just
//! shows one more character per tick. Replaces nothing functional; the
//! placeholder entry renders verbatim without it.

use leptos::prelude::*;

/// Interval between revealed characters, in milliseconds.
const TICK_MS: u32 = 16;

/// Reveals `text` one character per fixed tick.
///
/// The reveal loop stops on its own when the component is disposed
/// (e.g. New Chat mid-reveal).
#[component]
#[allow(non_snake_case)]
pub fn TypewriterText(text: String) -> impl IntoView {
    let len = text.chars().count();
    let full = StoredValue::new(text);
    let (shown, set_shown) = signal(0usize);

    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(TICK_MS).await;
            let done = set_shown.try_update(|n| {
                *n += 1;
                *n >= len
            });
            match done {
                Some(false) => {}
                // Finished, or the signal was disposed with the component
                Some(true) | None => break,
            }
        }
    });

    view! {
        <p style="margin: 0; white-space: pre-wrap;">
            {move || full.with_value(|t| t.chars().take(shown.get()).collect::<String>())}
        </p>
    }
}
