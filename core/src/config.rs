//! # Constants
//!
//! Every fixed width, domain tag, endpoint and token address the plugin relies
//! on. Changing a domain tag or a width here silently changes every key the
//! crate derives, so treat the crypto section as frozen.

// ---------------------------------------------------------------------------
// Cryptographic Parameters
// ---------------------------------------------------------------------------

/// Width of keys, addresses, commitments, nullifiers and master secrets.
pub const KEY_LENGTH: usize = 32;

/// SHA-256 digest width.
pub const HASH_OUTPUT_LENGTH: usize = 32;

/// Width of the note-cipher nonce. Twelve bytes, same as a GCM nonce.
pub const NONCE_LENGTH: usize = 12;

/// Width of the little-endian position suffix mixed into a nullifier.
pub const NULLIFIER_POSITION_LENGTH: usize = 8;

/// Hex digits in a 32-byte value.
pub const KEY_HEX_DIGITS: usize = KEY_LENGTH * 2;

/// Domain tag appended to the master secret for the spending key.
pub const SPENDING_DOMAIN: &str = "spending";

/// Domain tag appended to the master secret for the viewing key.
pub const VIEWING_DOMAIN: &str = "viewing";

/// Domain tag appended to the master secret for the nullifier key.
pub const NULLIFIER_DOMAIN: &str = "nullifier";

// ---------------------------------------------------------------------------
// Remote API
// ---------------------------------------------------------------------------

pub const MAINNET_ENDPOINT: &str = "https://aztec-mainnet.example.com";
pub const TESTNET_ENDPOINT: &str = "https://aztec-testnet.example.com";

/// Page size used when collecting every item of a paginated listing.
pub const PAGE_SIZE: u32 = 100;

pub const HEADER_ACCOUNT: &str = "X-Aztec-Account";
pub const HEADER_KEY_TYPE: &str = "X-Aztec-Key-Type";

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

/// Well-known token addresses on the rollup.
pub const DEFAULT_TOKENS: [(&str, &str); 5] = [
    (
        "ETH",
        "0x0000000000000000000000000000000000000000000000000000000000000000",
    ),
    (
        "DAI",
        "0x0000000000000000000000000000000000000000000000000000000000000001",
    ),
    (
        "WBTC",
        "0x0000000000000000000000000000000000000000000000000000000000000002",
    ),
    (
        "USDC",
        "0x0000000000000000000000000000000000000000000000000000000000000003",
    ),
    (
        "USDT",
        "0x0000000000000000000000000000000000000000000000000000000000000004",
    ),
];

/// Look up a default token address by its symbol (case-insensitive).
pub fn token_address(symbol: &str) -> Option<&'static str> {
    DEFAULT_TOKENS
        .iter()
        .find(|(sym, _)| sym.eq_ignore_ascii_case(symbol))
        .map(|(_, address)| *address)
}

// ---------------------------------------------------------------------------
// Licensing
// ---------------------------------------------------------------------------

/// Printed once per process by the hosting shell.
pub const LICENSING_NOTICE: &str = "[Velocity BPA Licensing Notice]

This node is licensed under the Business Source License 1.1 (BSL 1.1).

Use of this node by for-profit organizations in production environments requires a commercial license from Velocity BPA.

For licensing information, visit https://velobpa.com/licensing or contact licensing@velobpa.com.";
