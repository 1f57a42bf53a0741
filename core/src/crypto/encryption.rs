//! # Note Cipher
//!
//! The note encryption format the remote network and the workflow host
//! exchange. It is an XOR stream keyed by a hashed "shared secret":
//!
//! ```text
//! encrypt:  ephemeral, nonce  <- CSPRNG (32 and 12 bytes)
//!           shared = sha256(ephemeral || recipient_viewing_public)
//!           ciphertext[i] = plaintext[i] ^ shared[i % 32]
//!           ephemeral_public = sha256(ephemeral)
//!
//! decrypt:  shared = sha256(ephemeral_public || viewing_private)
//!           plaintext[i] = ciphertext[i] ^ shared[i % 32]
//! ```
//!
//! ## Known limitations
//!
//! This is a compatibility format, not a secure cipher. Read this before
//! using it for anything that matters:
//!
//! - **The two sides don't agree on the shared secret.** The encryptor
//!   hashes `ephemeral || viewing_public`; the decryptor hashes
//!   `sha256(ephemeral) || viewing_private`. Nothing relates those two
//!   inputs, so a note encrypted here does not decrypt back to its
//!   plaintext under the recipient's private viewing key. Both halves are
//!   kept byte-for-byte as the network defines them so that existing
//!   ciphertexts and test vectors stay valid.
//! - **No authentication.** There is no tag; a flipped ciphertext bit is a
//!   flipped plaintext bit and nobody finds out.
//! - **The nonce is decorative.** It is generated, shipped and validated
//!   for width, but never mixed into the keystream.
//! - **The keystream repeats every 32 bytes.** Long plaintexts leak the XOR
//!   of their 32-byte blocks.
//!
//! What *is* guaranteed: each `encrypt` call draws a fresh ephemeral key and
//! nonce from the OS CSPRNG, so encrypting the same note twice never yields
//! the same ciphertext.

use serde::{Deserialize, Serialize};

use super::hash::{random_bytes, sha256, sha256_multi};
use super::hex::{decode, decode_fixed, encode, FormatError};
use crate::config::{HASH_OUTPUT_LENGTH, KEY_LENGTH, NONCE_LENGTH};

/// An encrypted note as it travels over the wire.
///
/// Produced once per [`encrypt`] call and consumed by [`decrypt`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedNote {
    /// Variable-length hex; same byte length as the plaintext.
    pub ciphertext: String,
    /// 32-byte hex: the hash of the ephemeral key, never the key itself.
    pub ephemeral_public_key: String,
    /// 12-byte hex.
    pub nonce: String,
}

/// Encrypt UTF-8 note data for the holder of `recipient_viewing_public_key`.
pub fn encrypt(
    plaintext: &str,
    recipient_viewing_public_key: &str,
) -> Result<EncryptedNote, FormatError> {
    encrypt_bytes(plaintext.as_bytes(), recipient_viewing_public_key)
}

/// Byte-level variant of [`encrypt`].
pub fn encrypt_bytes(
    plaintext: &[u8],
    recipient_viewing_public_key: &str,
) -> Result<EncryptedNote, FormatError> {
    let recipient: [u8; KEY_LENGTH] = decode_fixed(recipient_viewing_public_key)?;

    let ephemeral: [u8; KEY_LENGTH] = random_bytes();
    let nonce: [u8; NONCE_LENGTH] = random_bytes();

    let shared = sha256_multi(&[ephemeral.as_slice(), recipient.as_slice()]);
    let ciphertext = apply_keystream(plaintext, &shared);

    Ok(EncryptedNote {
        ciphertext: encode(ciphertext),
        ephemeral_public_key: encode(sha256(&ephemeral)),
        nonce: encode(nonce),
    })
}

/// Decrypt a note with the recipient's private viewing key.
///
/// Invalid UTF-8 in the recovered bytes is replaced with U+FFFD rather than
/// rejected; use [`decrypt_bytes`] for the raw output.
pub fn decrypt(note: &EncryptedNote, viewing_private_key: &str) -> Result<String, FormatError> {
    let plaintext = decrypt_bytes(note, viewing_private_key)?;
    Ok(String::from_utf8_lossy(&plaintext).into_owned())
}

/// Byte-level variant of [`decrypt`].
pub fn decrypt_bytes(
    note: &EncryptedNote,
    viewing_private_key: &str,
) -> Result<Vec<u8>, FormatError> {
    let ephemeral_public: [u8; KEY_LENGTH] = decode_fixed(&note.ephemeral_public_key)?;
    let _nonce: [u8; NONCE_LENGTH] = decode_fixed(&note.nonce)?;
    let private: [u8; KEY_LENGTH] = decode_fixed(viewing_private_key)?;
    let ciphertext = decode(&note.ciphertext)?;

    let shared = sha256_multi(&[ephemeral_public.as_slice(), private.as_slice()]);
    Ok(apply_keystream(&ciphertext, &shared))
}

/// XOR `data` with the secret repeated end to end. Its own inverse.
fn apply_keystream(data: &[u8], secret: &[u8; HASH_OUTPUT_LENGTH]) -> Vec<u8> {
    data.iter()
        .zip(secret.iter().cycle())
        .map(|(byte, key)| byte ^ key)
        .collect()
}
