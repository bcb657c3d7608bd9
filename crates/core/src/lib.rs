//! Functional core for the M² Calendar mini app.
//!
//! Everything in this crate is pure data and pure functions: the event model,
//! the date-bucketed [`store::EventStore`], navigation arithmetic and the
//! month/week/day projections. The async seams ([`host::NotificationHost`],
//! [`backend::EventBackend`]) are declared here and implemented by the shell.

pub mod backend;
pub mod calendar;
pub mod host;
pub mod serde;
pub mod store;
