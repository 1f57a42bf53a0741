//! Account address derivation.
//!
//! `address = sha256(spending_pub || viewing_pub || partial_address)`
//!
//! All three operands are 32-byte values decoded from hex and hashed as raw
//! bytes. The order is fixed: swapping the two public keys yields a
//! different address. The partial address is a salt, so one key set can
//! back many addresses.

use super::hash::sha256_multi;
use super::hex::{decode_fixed, encode, FormatError};
use crate::config::KEY_LENGTH;

/// Bind two public keys and a partial-address salt into an account address.
///
/// ```
/// use aztec_privacy_core::crypto::derive_address;
///
/// let spend = format!("0x{}", "a".repeat(64));
/// let view = format!("0x{}", "b".repeat(64));
/// let salt = format!("0x{}", "c".repeat(64));
/// let address = derive_address(&spend, &view, &salt).unwrap();
/// assert_eq!(address.len(), 66);
/// ```
pub fn derive_address(
    spending_public_key: &str,
    viewing_public_key: &str,
    partial_address: &str,
) -> Result<String, FormatError> {
    let spending: [u8; KEY_LENGTH] = decode_fixed(spending_public_key)?;
    let viewing: [u8; KEY_LENGTH] = decode_fixed(viewing_public_key)?;
    let partial: [u8; KEY_LENGTH] = decode_fixed(partial_address)?;

    Ok(encode(sha256_multi(&[
        spending.as_slice(),
        viewing.as_slice(),
        partial.as_slice(),
    ])))
}
