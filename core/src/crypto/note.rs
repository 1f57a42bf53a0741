//! # Note Commitments and Nullifiers
//!
//! A note is a private record of value ownership. On-chain it is visible
//! only as its commitment:
//!
//! ```text
//! commitment = sha256(pad32(value) || token || owner || randomness)
//! nullifier  = sha256(commitment || nullifier_key || le64(position))
//! ```
//!
//! `value` is any hex integer up to 32 bytes and is left-padded; the other
//! commitment operands are exactly 32 bytes. `randomness` must be fresh per
//! note: two notes with the same value, token and owner are only
//! distinguishable by it.
//!
//! The position is encoded as eight little-endian bytes, so the same
//! commitment referenced at two ordinal positions produces two nullifiers.

use serde::{Deserialize, Serialize};

use super::hash::{random_bytes, sha256, sha256_multi};
use super::hex::{decode_fixed, encode, pad_hex, FormatError};
use crate::config::{KEY_HEX_DIGITS, KEY_LENGTH};
use crate::types::NoteStatus;

/// Compute the commitment for a note.
///
/// Pure and deterministic; see the module docs for the layout.
pub fn compute_commitment(
    value: &str,
    token_address: &str,
    owner: &str,
    randomness: &str,
) -> Result<String, FormatError> {
    let value: [u8; KEY_LENGTH] = decode_fixed(&pad_hex(value, KEY_HEX_DIGITS)?)?;
    let token: [u8; KEY_LENGTH] = decode_fixed(token_address)?;
    let owner: [u8; KEY_LENGTH] = decode_fixed(owner)?;
    let randomness: [u8; KEY_LENGTH] = decode_fixed(randomness)?;

    Ok(encode(sha256_multi(&[
        value.as_slice(),
        token.as_slice(),
        owner.as_slice(),
        randomness.as_slice(),
    ])))
}

/// Compute the nullifier that marks `commitment` as spent at `position`.
pub fn compute_nullifier(
    commitment: &str,
    nullifier_key: &str,
    position: u64,
) -> Result<String, FormatError> {
    let commitment: [u8; KEY_LENGTH] = decode_fixed(commitment)?;
    let key: [u8; KEY_LENGTH] = decode_fixed(nullifier_key)?;

    Ok(encode(sha256_multi(&[
        commitment.as_slice(),
        key.as_slice(),
        position.to_le_bytes().as_slice(),
    ])))
}

/// Fresh 32-byte blinding value for a new note.
pub fn generate_note_randomness() -> String {
    encode(random_bytes::<KEY_LENGTH>())
}

/// Fresh 32-byte secret for a shield request.
pub fn generate_shield_secret() -> String {
    encode(random_bytes::<KEY_LENGTH>())
}

/// Hash of a shield secret, which is what the shield request carries.
///
/// The secret itself stays with the caller until the note is redeemed.
pub fn compute_secret_hash(secret: &str) -> Result<String, FormatError> {
    let secret: [u8; KEY_LENGTH] = decode_fixed(secret)?;
    Ok(encode(sha256(&secret)))
}

/// A private note as the notes API returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub commitment: String,
    pub owner: String,
    pub value: String,
    pub token_address: String,
    pub randomness: String,
    pub status: NoteStatus,
}

impl Note {
    /// Create a pending note with fresh randomness and its commitment.
    pub fn new(value: &str, token_address: &str, owner: &str) -> Result<Self, FormatError> {
        let randomness = generate_note_randomness();
        let commitment = compute_commitment(value, token_address, owner, &randomness)?;
        Ok(Self {
            commitment,
            owner: owner.to_string(),
            value: value.to_string(),
            token_address: token_address.to_string(),
            randomness,
            status: NoteStatus::Pending,
        })
    }

    /// Recompute the commitment from the note's fields and compare.
    pub fn verify_commitment(&self) -> Result<bool, FormatError> {
        let expected =
            compute_commitment(&self.value, &self.token_address, &self.owner, &self.randomness)?;
        Ok(expected.eq_ignore_ascii_case(&self.commitment))
    }

    /// Nullifier for spending this note at `position`.
    pub fn nullifier(&self, nullifier_key: &str, position: u64) -> Result<String, FormatError> {
        compute_nullifier(&self.commitment, nullifier_key, position)
    }
}
