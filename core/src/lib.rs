// Copyright (c) Velocity BPA, LLC. Licensed under the Business Source License 1.1.
// Commercial use requires a separate commercial license.

//! # Aztec Privacy — Core Library
//!
//! The deterministic half of the Aztec automation plugin. Everything that
//! touches key material or note contents lives here; everything that talks
//! to the network is someone else's problem (the hosting shell and its HTTP
//! transport).
//!
//! ## Architecture
//!
//! - **crypto** — Hex codec, key hierarchy, address derivation, note
//!   commitments/nullifiers and the note cipher. Pure functions over bytes.
//! - **types** — Closed enums for every "type"/"status" string the remote
//!   API speaks, so a typo is a compile error instead of a 400.
//! - **client** — The REST contract: credentials, endpoint resolution,
//!   request shaping, response envelopes and pagination. No transport.
//! - **config** — Constants. Every magic number lives here.
//!
//! ## Wire format
//!
//! Every value that leaves this crate is a `0x`-prefixed lowercase hex
//! string. Every value that enters it may be upper or lower case, with or
//! without the prefix, and is rejected with a [`FormatError`] when it is not
//! hex or not the expected width.

pub mod client;
pub mod config;
pub mod crypto;
pub mod types;

pub use crypto::hex::FormatError;
