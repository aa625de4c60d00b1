//! HTTP transport module
//!
//! A thin GET transport over reqwest: composes the API query string
//! (`s_login`, `s_pw`, `command` plus command arguments) against
//! `/api/call` and returns the raw response body for decoding.
//! Retry, rate limiting, and connection tuning are deliberately not
//! part of this layer.

mod transport;

pub use transport::Transport;
