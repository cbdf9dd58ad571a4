//! PDF chat UI module (MVVM Standard)
//!
//! Structure:
//! - transcript.rs: transcript entries and their transitions
//! - model.rs: API functions for the two backend endpoints
//! - view_model.rs: ChatVm with RwSignals
//! - view.rs: main component PdfChat (upload hero + chat panel)
//! - message.rs: renderer for a single transcript entry

mod message;
mod model;
pub mod transcript;
mod view;
mod view_model;

pub use view::PdfChat;
pub use view_model::ChatVm;
