//! API command module
//!
//! `RrpClient` ties the transport and the decoder together and adds the
//! named API commands. Command semantics live here, not in the decoder:
//! the decoder always returns a best-effort value tree, and this layer
//! decides what an envelope code means for a given command.

mod client;

pub use client::RrpClient;
