//! Transcript state for the chat screen.
//!
//! The handlers in `view.rs` only ever touch the message list through these
//! functions, which keeps the shape rules (single pending placeholder,
//! replace-not-append resolution) out of the reactive code and unit-testable.

use uuid::Uuid;

/// Placeholder text shown while a query is in flight.
pub const THINKING_TEXT: &str = "Thinking...";

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One displayed conversation entry.
///
/// Entries are immutable once created; the only mutation the transcript
/// allows is [`resolve_pending`] swapping the single in-flight placeholder
/// for a settled entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub thinking: bool,
}

impl ChatEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: Sender::User,
            text: text.into(),
            thinking: false,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: Sender::Bot,
            text: text.into(),
            thinking: false,
        }
    }

    /// Bot entry carrying a failure message, in the same wording for upload
    /// rejections, query rejections and transport errors.
    pub fn error(message: &str) -> Self {
        Self::bot(format!("Error: {message}"))
    }

    fn pending() -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: Sender::Bot,
            text: THINKING_TEXT.to_string(),
            thinking: true,
        }
    }
}

/// Transcript right after a successful upload: the document summary alone.
pub fn summary_transcript(summary: &str) -> Vec<ChatEntry> {
    vec![ChatEntry::bot(summary)]
}

/// Transcript right after a failed upload: the error message alone.
pub fn error_transcript(message: &str) -> Vec<ChatEntry> {
    vec![ChatEntry::error(message)]
}

/// Append the user's query together with the bot placeholder that will hold
/// its answer. Returns the placeholder id for [`resolve_pending`].
pub fn push_exchange(entries: &mut Vec<ChatEntry>, query: &str) -> Uuid {
    entries.push(ChatEntry::user(query));
    let pending = ChatEntry::pending();
    let id = pending.id;
    entries.push(pending);
    id
}

/// Replace the placeholder with the settled entry, in place.
///
/// Entries before the placeholder are untouched. If the placeholder is gone
/// (the user reset the chat while the request was in flight) nothing happens.
pub fn resolve_pending(entries: &mut [ChatEntry], pending_id: Uuid, settled: ChatEntry) {
    if let Some(slot) = entries
        .iter_mut()
        .find(|e| e.id == pending_id && e.thinking)
    {
        *slot = settled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_upload_yields_single_summary_entry() {
        let transcript = summary_transcript("A short summary");
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].sender, Sender::Bot);
        assert_eq!(transcript[0].text, "A short summary");
        assert!(!transcript[0].thinking);
    }

    #[test]
    fn failed_upload_yields_single_error_entry() {
        let transcript = error_transcript("unsupported file");
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].sender, Sender::Bot);
        assert_eq!(transcript[0].text, "Error: unsupported file");
    }

    #[test]
    fn push_exchange_appends_user_entry_and_placeholder() {
        let mut transcript = summary_transcript("A short summary");
        let pending_id = push_exchange(&mut transcript, "What is the total?");

        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[1].sender, Sender::User);
        assert_eq!(transcript[1].text, "What is the total?");
        assert_eq!(transcript[2].id, pending_id);
        assert_eq!(transcript[2].text, THINKING_TEXT);
        assert!(transcript[2].thinking);
    }

    #[test]
    fn resolve_replaces_placeholder_without_appending() {
        let mut transcript = summary_transcript("A short summary");
        let before = transcript.clone();
        let pending_id = push_exchange(&mut transcript, "What is the total?");

        resolve_pending(&mut transcript, pending_id, ChatEntry::bot("$42"));

        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[0], before[0]);
        let last = transcript.last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(last.text, "$42");
        assert!(!last.thinking);
        assert!(transcript.iter().all(|e| !e.thinking));
    }

    #[test]
    fn resolve_with_error_keeps_prior_entries() {
        let mut transcript = summary_transcript("A short summary");
        let pending_id = push_exchange(&mut transcript, "What is the total?");

        resolve_pending(&mut transcript, pending_id, ChatEntry::error("Query failed"));

        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[1].text, "What is the total?");
        assert_eq!(transcript[2].text, "Error: Query failed");
    }

    #[test]
    fn at_most_one_placeholder_per_exchange() {
        let mut transcript = Vec::new();
        let first = push_exchange(&mut transcript, "first");
        resolve_pending(&mut transcript, first, ChatEntry::bot("one"));
        push_exchange(&mut transcript, "second");

        let pending = transcript.iter().filter(|e| e.thinking).count();
        assert_eq!(pending, 1);
    }

    #[test]
    fn resolve_is_noop_after_reset() {
        let mut transcript = summary_transcript("A short summary");
        let pending_id = push_exchange(&mut transcript, "What is the total?");

        // NewChat emptied the transcript before the response arrived.
        let mut fresh: Vec<ChatEntry> = Vec::new();
        resolve_pending(&mut fresh, pending_id, ChatEntry::bot("$42"));
        assert!(fresh.is_empty());

        // And a placeholder is only replaced once.
        resolve_pending(&mut transcript, pending_id, ChatEntry::bot("$42"));
        resolve_pending(&mut transcript, pending_id, ChatEntry::bot("stale"));
        assert_eq!(transcript.last().unwrap().text, "$42");
    }
}
