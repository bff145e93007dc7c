//! Chat gateway for the Daad marketing assistant
//!
//! Accepts chat requests from the web client, injects the consultancy's
//! Arabic system prompt, forwards the conversation to Google's
//! generative-language API and returns the reply as JSON. Failures are
//! reported back to the client as chat text, never as HTTP error codes.

pub mod ai;
pub mod error;
pub mod handler;
pub mod models;
pub mod prompts;
pub mod server;

pub use error::{Error, Result};
