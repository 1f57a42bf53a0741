//! # Hex Codec
//!
//! The wire format of the whole subsystem: `0x` followed by lowercase hex
//! digits. Output is always canonical; input is accepted with or without the
//! prefix and in either case.
//!
//! Two families of helpers live here:
//!
//! - **byte codecs** (`encode`, `decode`, `decode_fixed`): even digit
//!   counts only, since each byte is two digits.
//! - **digit helpers** (`is_valid_hex`, `pad_hex`, `number_to_hex`, ...):
//!   these count hex *digits*, not bytes, and tolerate odd digit counts.
//!   `pad_hex("0x1", 4)` is `"0x0001"`.
//!
//! Numeric conversions use arbitrary-precision integers. Token balances are
//! routinely 18-decimal values that blow straight through `u64`.

use num_bigint::BigUint;
use thiserror::Error;

/// The single error kind of the crypto core: an input string that is not
/// hex, or not the width its field requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("hex string has no digits")]
    MissingDigits,

    #[error("invalid hex character {character:?} at position {index}")]
    InvalidCharacter { index: usize, character: char },

    #[error("hex string has an odd number of digits")]
    OddLength,

    #[error("expected {expected} bytes, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("value has {actual} hex digits, at most {max} allowed")]
    TooLong { max: usize, actual: usize },

    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

impl From<hex::FromHexError> for FormatError {
    fn from(err: hex::FromHexError) -> Self {
        match err {
            hex::FromHexError::InvalidHexCharacter { c, index } => FormatError::InvalidCharacter {
                index,
                character: c,
            },
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                FormatError::OddLength
            }
        }
    }
}

const PREFIX: &str = "0x";

/// Number of decimals between wei and ether.
const ETH_DECIMALS: usize = 18;

// ---------------------------------------------------------------------------
// Prefix handling
// ---------------------------------------------------------------------------

/// Remove a leading `0x` (or `0X`) if there is one.
pub fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix(PREFIX)
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

/// Ensure a value carries the `0x` prefix. Empty input stays empty.
pub fn format_hex(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    format!("{PREFIX}{}", strip_hex_prefix(value))
}

fn check_digits(digits: &str) -> Result<(), FormatError> {
    match digits.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        Some((index, character)) => Err(FormatError::InvalidCharacter { index, character }),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Byte codecs
// ---------------------------------------------------------------------------

/// Encode bytes as `0x` + lowercase hex.
///
/// ```
/// use aztec_privacy_core::crypto::hex::encode;
///
/// assert_eq!(encode([0xde, 0xad]), "0xdead");
/// assert_eq!(encode(b""), "0x");
/// ```
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    format!("{PREFIX}{}", hex::encode(bytes))
}

/// Decode a hex string (prefix optional) into bytes.
///
/// An empty digit string decodes to an empty vector, mirroring `encode(&[])`.
pub fn decode(value: &str) -> Result<Vec<u8>, FormatError> {
    Ok(hex::decode(strip_hex_prefix(value))?)
}

/// Decode a hex string that must be exactly `N` bytes wide.
pub fn decode_fixed<const N: usize>(value: &str) -> Result<[u8; N], FormatError> {
    let bytes = decode(value)?;
    let actual = bytes.len();
    bytes.try_into().map_err(|_| FormatError::WrongLength {
        expected: N,
        actual,
    })
}

// ---------------------------------------------------------------------------
// Digit helpers
// ---------------------------------------------------------------------------

/// Check whether `value` is `0x` followed by at least one hex digit.
///
/// `expected_digits`, when given, is the exact number of hex digits after
/// the prefix (64 for a 32-byte key). Never fails; malformed input is simply
/// `false`.
pub fn is_valid_hex(value: &str, expected_digits: Option<usize>) -> bool {
    let Some(digits) = value.strip_prefix(PREFIX) else {
        return false;
    };
    if digits.is_empty() || check_digits(digits).is_err() {
        return false;
    }
    expected_digits.map_or(true, |expected| digits.len() == expected)
}

/// Left-pad a hex value with zeros to `width` digits.
///
/// The prefix is optional on input and always present on output. Fails if
/// the value already has more than `width` digits.
pub fn pad_hex(value: &str, width: usize) -> Result<String, FormatError> {
    let digits = strip_hex_prefix(value);
    check_digits(digits)?;
    if digits.len() > width {
        return Err(FormatError::TooLong {
            max: width,
            actual: digits.len(),
        });
    }
    Ok(format!(
        "{PREFIX}{:0>width$}",
        digits.to_ascii_lowercase(),
        width = width
    ))
}

/// Convert an arbitrary-precision integer to minimal `0x` hex.
///
/// ```
/// use aztec_privacy_core::crypto::hex::number_to_hex;
/// use num_bigint::BigUint;
///
/// assert_eq!(number_to_hex(&BigUint::from(255u32)), "0xff");
/// ```
pub fn number_to_hex(value: &BigUint) -> String {
    format!("{PREFIX}{}", value.to_str_radix(16))
}

/// Parse a hex string (prefix optional) into an arbitrary-precision integer.
pub fn hex_to_number(value: &str) -> Result<BigUint, FormatError> {
    let digits = strip_hex_prefix(value);
    if digits.is_empty() {
        return Err(FormatError::MissingDigits);
    }
    check_digits(digits)?;
    BigUint::parse_bytes(digits.as_bytes(), 16).ok_or(FormatError::MissingDigits)
}

/// True iff `value` looks like an account address: `0x` + 64 hex digits.
pub fn validate_address(value: &str) -> bool {
    is_valid_hex(value, Some(64))
}

/// True iff `value` looks like a 32-byte key: `0x` + 64 hex digits.
pub fn validate_key(value: &str) -> bool {
    is_valid_hex(value, Some(64))
}

// ---------------------------------------------------------------------------
// Amounts
// ---------------------------------------------------------------------------

/// Render a wei amount as a decimal ether string with no trailing zeros.
///
/// `1_500_000_000_000_000_000` wei is `"1.5"`; whole amounts have no
/// decimal point at all.
pub fn wei_to_eth(wei: &BigUint) -> String {
    let digits = format!("{:0>width$}", wei.to_str_radix(10), width = ETH_DECIMALS + 1);
    let (integer, fraction) = digits.split_at(digits.len() - ETH_DECIMALS);

    let integer = match integer.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{integer}.{fraction}")
    }
}

/// Parse a decimal ether string into wei, exactly.
///
/// Accepts `"2"`, `"0.5"`, `".5"` and `"1."`. Rejects signs, exponents,
/// more than 18 fractional digits, and anything that isn't ASCII digits
/// around at most one decimal point.
pub fn eth_to_wei(eth: &str) -> Result<BigUint, FormatError> {
    let eth = eth.trim();
    let (integer, fraction) = eth.split_once('.').unwrap_or((eth, ""));

    if integer.is_empty() && fraction.is_empty() {
        return Err(FormatError::InvalidAmount(eth.to_string()));
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(integer) || !all_digits(fraction) {
        return Err(FormatError::InvalidAmount(eth.to_string()));
    }
    if fraction.len() > ETH_DECIMALS {
        return Err(FormatError::InvalidAmount(format!(
            "{eth}: more than {ETH_DECIMALS} decimal places"
        )));
    }

    let scaled = format!(
        "{integer}{fraction:0<width$}",
        width = ETH_DECIMALS
    );
    BigUint::parse_bytes(scaled.as_bytes(), 10)
        .ok_or_else(|| FormatError::InvalidAmount(eth.to_string()))
}
