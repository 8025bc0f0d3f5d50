//! Chat module.
//!
//! Thin pass-through to the external completion collaborator; the only
//! logic here is building the default conversation and the error envelope.

pub mod client;
pub mod routes;

pub use client::{ChatMessage, CompletionProvider, HttpCompletionClient};
