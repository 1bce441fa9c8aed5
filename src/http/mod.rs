//! HTTP client layer — `VeritasHttp`.

pub mod client;

pub use client::{HttpReply, VeritasHttp};
