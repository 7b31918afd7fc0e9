//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`document`, `busy`, `deployment`, etc.) so
//! individual components can depend on small focused models. Everything here
//! is a plain struct; the page-level controller wraps each in an `RwSignal`
//! and provides it via context, so no module-level globals exist and multiple
//! editing sessions never interfere.

pub mod assets;
pub mod busy;
pub mod chat;
pub mod deployment;
pub mod document;
pub mod notices;
pub mod ui;
