//! Search module.
//!
//! Composes a unified result list from two sources: a substring filter
//! over the platform catalog and a one-shot call to an external web-search
//! collaborator, whose free-text snippets go through the extraction
//! heuristics in `extract`. The collaborator is injected behind
//! `SearchProvider` and its failures never surface to the caller.

pub mod client;
pub mod composer;
pub mod extract;
pub mod requests;
pub mod responses;
pub mod routes;

pub use client::{fallback_snippets, ExternalSnippet, HttpSearchClient, SearchProvider};
pub use responses::SearchResult;
