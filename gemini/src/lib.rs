//! Minimal client for the Google Generative Language API
//! (`models/{model}:generateContent`). Only the non-streaming surface is
//! exposed; callers treat the response as a single advisory string.

pub mod client;
pub mod config;
pub mod error;
pub mod prelude;
pub mod types;
