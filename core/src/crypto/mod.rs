//! # Cryptographic Primitives
//!
//! Every key, address, commitment, nullifier and encrypted note produced by
//! this crate flows through here. The layout follows the data dependencies:
//!
//! - **hash** — SHA-256, the only one-way function in the subsystem.
//! - **hex** — Canonical `0x` hex encoding; the wire format of everything.
//! - **keys** — Master secret → spending/viewing/nullifier key pairs.
//! - **address** — Two public keys plus a salt → account address.
//! - **note** — Note commitments, nullifiers and shield secrets.
//! - **encryption** — The ephemeral-key XOR note cipher.
//!
//! ## Scope of the guarantees
//!
//! The key hierarchy is a hash chain, not an elliptic-curve key pair, and
//! the note cipher is an unauthenticated XOR stream. Both are kept exactly
//! as the remote network expects them, which is a compatibility guarantee
//! and nothing more. See the `encryption` module docs before relying on it
//! for confidentiality.

pub mod address;
pub mod encryption;
pub mod hash;
pub mod hex;
pub mod keys;
pub mod note;

pub use address::derive_address;
pub use encryption::{decrypt, encrypt, EncryptedNote};
pub use hash::sha256;
pub use self::hex::FormatError;
pub use keys::{derive_keys, generate_master_secret, AccountKeys, KeyPair};
pub use note::{compute_commitment, compute_nullifier};
