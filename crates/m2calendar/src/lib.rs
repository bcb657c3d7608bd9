//! m2calendar - the imperative shell around `m2calendar_core`.
//!
//! Wires the event store, navigation and lifecycle controllers to a
//! notification host and an event backend, and publishes a fresh projection
//! after every operation.

pub mod app;
pub mod backend;
pub mod cli;
pub mod clock;
pub mod config;
pub mod controllers;
pub mod error;
pub mod host;
pub mod interactive;
pub mod output;

pub use app::CalendarApp;
pub use config::Config;
pub use error::{LifecycleError, Result};
