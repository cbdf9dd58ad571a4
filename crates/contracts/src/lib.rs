//! Wire contracts shared between the AskPDF frontend and the
//! document-processing backend.
//!
//! The backend itself lives in a separate repository; this crate only pins
//! down the JSON shapes of its two endpoints so the frontend and backend
//! teams cannot drift apart silently.

pub mod chat;
