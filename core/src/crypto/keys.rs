//! # Key Hierarchy
//!
//! One 32-byte master secret yields three role-specific key pairs:
//!
//! ```text
//! private = sha256(master || "spending")    public = sha256(private)
//! private = sha256(master || "viewing")     public = sha256(private)
//! private = sha256(master || "nullifier")   public = sha256(private)
//! ```
//!
//! "Public" and "private" name the *role* of each half. There is no curve
//! here: the public key is a hash of the private key, nothing more, and it
//! cannot verify anything. What the construction does guarantee is
//! determinism (same master, same triple, on every platform) and domain
//! separation (the three private keys never coincide).
//!
//! The triple is always derived together and never regenerated piecemeal.
//! Key bytes are never logged.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::hash::{random_bytes, sha256, sha256_multi};
use super::hex::{decode_fixed, encode, FormatError};
use crate::config::{KEY_LENGTH, NULLIFIER_DOMAIN, SPENDING_DOMAIN, VIEWING_DOMAIN};
use crate::types::KeyKind;

/// A role-tagged pair of 32-byte keys, hex-encoded for the wire.
///
/// Serializes as `{ "publicKey", "privateKey", "type" }`, the shape the
/// remote API and the workflow host both expect.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPair {
    pub public_key: String,
    pub private_key: String,
    #[serde(rename = "type")]
    pub kind: KeyKind,
}

/// The spending/viewing/nullifier triple derived from one master secret.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountKeys {
    pub spending_key: KeyPair,
    pub viewing_key: KeyPair,
    pub nullifier_key: KeyPair,
}

impl KeyPair {
    /// Derive one key pair from raw master-secret bytes and a domain tag.
    fn derive(master: &[u8; KEY_LENGTH], kind: KeyKind) -> Self {
        let private = sha256_multi(&[master.as_slice(), domain_tag(kind).as_bytes()]);
        let public = sha256(&private);
        Self {
            public_key: encode(public),
            private_key: encode(private),
            kind,
        }
    }

    /// Raw bytes of the public half.
    pub fn public_key_bytes(&self) -> Result<[u8; KEY_LENGTH], FormatError> {
        decode_fixed(&self.public_key)
    }

    /// Raw bytes of the private half. Handle with care.
    pub fn private_key_bytes(&self) -> Result<[u8; KEY_LENGTH], FormatError> {
        decode_fixed(&self.private_key)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Private half stays out of debug output entirely.
        write!(f, "KeyPair({}, pub={})", self.kind, self.public_key)
    }
}

impl fmt::Debug for AccountKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountKeys")
            .field("spending_key", &self.spending_key)
            .field("viewing_key", &self.viewing_key)
            .field("nullifier_key", &self.nullifier_key)
            .finish()
    }
}

impl AccountKeys {
    /// Look up a pair by role.
    pub fn get(&self, kind: KeyKind) -> &KeyPair {
        match kind {
            KeyKind::Spending => &self.spending_key,
            KeyKind::Viewing => &self.viewing_key,
            KeyKind::Nullifier => &self.nullifier_key,
        }
    }
}

/// The domain tag mixed into the master secret for each role.
pub fn domain_tag(kind: KeyKind) -> &'static str {
    match kind {
        KeyKind::Spending => SPENDING_DOMAIN,
        KeyKind::Viewing => VIEWING_DOMAIN,
        KeyKind::Nullifier => NULLIFIER_DOMAIN,
    }
}

/// Derive the three key pairs for an account from its master secret.
///
/// Pure: the same secret always yields the same triple. Fails with
/// [`FormatError`] unless `master_secret` is exactly 32 bytes of hex.
///
/// # Example
///
/// ```
/// use aztec_privacy_core::crypto::keys::derive_keys;
///
/// let secret = format!("0x{}", "1".repeat(64));
/// let keys = derive_keys(&secret).unwrap();
/// assert_eq!(keys, derive_keys(&secret).unwrap());
/// assert_ne!(keys.spending_key.private_key, keys.viewing_key.private_key);
/// ```
pub fn derive_keys(master_secret: &str) -> Result<AccountKeys, FormatError> {
    let master: [u8; KEY_LENGTH] = decode_fixed(master_secret)?;
    Ok(AccountKeys {
        spending_key: KeyPair::derive(&master, KeyKind::Spending),
        viewing_key: KeyPair::derive(&master, KeyKind::Viewing),
        nullifier_key: KeyPair::derive(&master, KeyKind::Nullifier),
    })
}

/// Generate a fresh master secret from the OS CSPRNG.
pub fn generate_master_secret() -> String {
    encode(random_bytes::<KEY_LENGTH>())
}
