//! # Hashing
//!
//! SHA-256 is the single hash primitive of the key/note subsystem. Every
//! derivation in the sibling modules is `sha256(a || b || ...)` over raw
//! bytes, so the helpers here come in two flavours: one-shot over a slice
//! and streaming over several parts without building the concatenation.
//!
//! Changing the hash function changes every key, address, commitment and
//! nullifier the remote network has ever seen from us. Don't.

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::config::HASH_OUTPUT_LENGTH;

/// Compute the SHA-256 digest of `data`.
///
/// # Example
///
/// ```
/// use aztec_privacy_core::crypto::sha256;
///
/// let digest = sha256(b"aztec");
/// assert_eq!(digest.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> [u8; HASH_OUTPUT_LENGTH] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash several byte slices as if they were concatenated.
///
/// `sha256_multi(&[a, b])` equals `sha256(&[a, b].concat())`; the parts are
/// fed to the hasher one after another instead of being copied into a
/// temporary buffer.
pub fn sha256_multi(parts: &[&[u8]]) -> [u8; HASH_OUTPUT_LENGTH] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Fill an `N`-byte array from the OS CSPRNG.
///
/// Each call pulls fresh bytes from the operating system, so concurrent
/// callers never share generator state.
pub fn random_bytes<const N: usize>() -> [u8; N] {
    let mut out = [0u8; N];
    OsRng.fill_bytes(&mut out);
    out
}
