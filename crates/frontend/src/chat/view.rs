//! PDF chat - View Components

use leptos::prelude::*;
use thaw::*;

use super::message::ChatMessage;
use super::model::{submit_query, upload_document};
use super::transcript::{self, ChatEntry};
use super::view_model::ChatVm;
use crate::shared::icons::icon;

/// Single-page switch between the upload hero and the chat panel.
///
/// Session presence is the only thing that decides which screen is shown.
#[component]
#[allow(non_snake_case)]
pub fn PdfChat() -> impl IntoView {
    let vm = ChatVm::new();

    view! {
        <main style="flex: 1; display: flex; flex-direction: column; overflow: hidden;">
            {move || {
                if vm.session.get().is_none() {
                    view! { <UploadHero vm=vm /> }.into_any()
                } else {
                    view! { <ChatPanel vm=vm /> }.into_any()
                }
            }}
        </main>
    }
}

/// Upload screen: one file picker that uploads on selection.
#[component]
#[allow(non_snake_case)]
fn UploadHero(vm: ChatVm) -> impl IntoView {
    let handle_upload = move |file: web_sys::File| {
        vm.file_name.set(Some(file.name()));
        vm.is_loading.set(true);
        vm.session.set(None);
        vm.transcript.set(Vec::new());

        wasm_bindgen_futures::spawn_local(async move {
            match upload_document(file).await {
                Ok(resp) => {
                    // Transcript before session: the chat screen must never
                    // appear empty.
                    vm.transcript
                        .set(transcript::summary_transcript(&resp.summary));
                    vm.session.set(Some(resp.session_id));
                }
                Err(e) => {
                    log::error!("upload failed: {e}");
                    vm.transcript.set(transcript::error_transcript(&e));
                }
            }
            vm.is_loading.set(false);
        });
    };

    view! {
        <div style="flex: 1; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; padding: 40px; gap: 16px;">
            <h1 style="font-size: 32px; margin: 0;">
                "Unlock Insights from your " <span style="color: var(--colorBrandForeground1);">"Documents"</span>
            </h1>
            <p style="max-width: 560px; color: var(--colorNeutralForeground3); margin: 0;">
                "Upload a PDF and start a conversation. Get summaries, find key information, and ask complex questions instantly."
            </p>

            <label style="display: inline-flex; align-items: center; gap: 8px; padding: 12px 24px; border-radius: 8px; cursor: pointer; background: var(--colorBrandBackground); color: var(--colorNeutralForegroundOnBrand);">
                {icon("pdf")}
                <span>
                    {move || {
                        if vm.is_loading.get() { "Processing..." } else { "Upload PDF & Start Chat" }
                    }}
                </span>
                <input
                    type="file"
                    accept=".pdf"
                    style="display: none;"
                    prop:disabled=move || vm.is_loading.get()
                    on:change=move |ev| {
                        use wasm_bindgen::JsCast;
                        let input: web_sys::HtmlInputElement =
                            ev.target().unwrap().dyn_into().unwrap();
                        if let Some(file) = input.files().and_then(|files| files.get(0)) {
                            handle_upload(file);
                        }
                        // Allow re-selecting the same file after a failure
                        input.set_value("");
                    }
                />
            </label>

            // The hero is only shown while session is empty, so a non-empty
            // transcript here can only be a failed upload.
            {move || {
                vm.transcript
                    .get()
                    .first()
                    .map(|entry| {
                        view! {
                            <p style="color: var(--colorPaletteRedForeground1); margin: 0;">
                                {entry.text.clone()}
                            </p>
                        }
                    })
            }}
        </div>
    }
}

/// Chat screen: header with the document name, the transcript, the query form.
#[component]
#[allow(non_snake_case)]
fn ChatPanel(vm: ChatVm) -> impl IntoView {
    let chat_box_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the latest entry visible
    Effect::new(move |_| {
        vm.transcript.track();
        if let Some(container) = chat_box_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let handle_send = move || {
        let text = vm.query.get().trim().to_string();
        let Some(session_id) = vm.session.get() else {
            return;
        };
        if text.is_empty() || vm.is_loading.get() {
            return;
        }

        vm.is_loading.set(true);
        vm.query.set(String::new());

        let mut entries = vm.transcript.get();
        let pending_id = transcript::push_exchange(&mut entries, &text);
        vm.transcript.set(entries);

        wasm_bindgen_futures::spawn_local(async move {
            let settled = match submit_query(&session_id, &text).await {
                Ok(resp) => ChatEntry::bot(resp.answer),
                Err(e) => {
                    log::error!("query failed: {e}");
                    ChatEntry::error(&e)
                }
            };
            let mut entries = vm.transcript.get();
            transcript::resolve_pending(&mut entries, pending_id, settled);
            vm.transcript.set(entries);
            vm.is_loading.set(false);
        });
    };

    view! {
        <div style="flex: 1; display: flex; flex-direction: column; height: 100%; padding: 20px; gap: 12px;">
            // Header
            <Flex
                justify=FlexJustify::SpaceBetween
                align=FlexAlign::Center
                style="padding-bottom: 12px; border-bottom: 1px solid var(--colorNeutralStroke2);"
            >
                <Flex align=FlexAlign::Center style="gap: 8px;">
                    {icon("pdf")}
                    <span>{move || vm.file_name.get().unwrap_or_default()}</span>
                </Flex>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.reset()
                >
                    {icon("plus")}
                    " New Chat"
                </Button>
            </Flex>

            // Transcript
            <div
                node_ref=chat_box_ref
                style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 12px; padding: 12px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;"
            >
                <For
                    each=move || vm.transcript.get()
                    key=|entry| entry.id
                    let:entry
                >
                    <ChatMessage entry=entry />
                </For>
            </div>

            // Query form
            <Flex style="gap: 8px;" align=FlexAlign::Center>
                <div style="flex: 1;">
                    <Input
                        value=vm.query
                        placeholder="Ask your document anything..."
                        disabled=vm.is_loading
                        attr:style="width: 100%;"
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                handle_send();
                            }
                        }
                    />
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=vm.is_loading
                    on_click=move |_| handle_send()
                >
                    {icon("send")}
                </Button>
            </Flex>
        </div>
    }
}
