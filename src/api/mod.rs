//! AI text-generation client module.
//!
//! This module provides the `AiClient` for the optional Gemini-backed
//! features: goal suggestions on the dimension pages and the insights pass
//! on the reflections page. Everything else in the application works with
//! no network at all.

pub mod client;
pub mod error;

pub use client::{AiClient, API_KEY_ENV};
pub use error::AiError;
