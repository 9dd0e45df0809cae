//! HTTP client for the external text-summarization service.

pub mod client;

pub use client::{SummarizerClient, SummarizerError};
