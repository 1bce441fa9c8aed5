//! Polling — request tokens, polled state, and scoped refresh tasks.

pub mod state;
pub mod task;

pub use state::{Polled, RequestToken, Resolution, TokenGate};
pub use task::Poller;
