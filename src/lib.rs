//! A terminal todo list driven by a single store.
//!
//! Key presses become [`app::Action`]s, the store reduces them into a new
//! [`app::TodoState`] and notifies its subscribers, and the view redraws from
//! the latest snapshot.

pub mod redux;

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod logging;
pub mod ui;

pub use error::{AppError, Result};
