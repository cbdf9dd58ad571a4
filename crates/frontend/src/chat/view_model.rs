//! PDF chat - View Model

use contracts::chat::SessionId;
use leptos::prelude::*;

use super::transcript::ChatEntry;

/// Reactive state for the whole page.
///
/// `session` is the sole discriminator between the upload screen
/// (`None`) and the chat screen (`Some`).
#[derive(Clone, Copy)]
pub struct ChatVm {
    pub file_name: RwSignal<Option<String>>,
    pub session: RwSignal<Option<SessionId>>,
    pub transcript: RwSignal<Vec<ChatEntry>>,
    pub query: RwSignal<String>,
    pub is_loading: RwSignal<bool>,
}

impl ChatVm {
    pub fn new() -> Self {
        Self {
            file_name: RwSignal::new(None),
            session: RwSignal::new(None),
            transcript: RwSignal::new(Vec::new()),
            query: RwSignal::new(String::new()),
            is_loading: RwSignal::new(false),
        }
    }

    /// Back to the upload screen. No network call; the backend session is
    /// simply abandoned.
    pub fn reset(&self) {
        self.session.set(None);
        self.transcript.set(Vec::new());
        self.file_name.set(None);
        self.query.set(String::new());
    }
}
