//! Closed vocabularies of the remote API.
//!
//! The REST API speaks in strings: `"pending"`, `"contractCall"`,
//! `"nullifier"`. Each family of strings is modelled here as an enum so
//! that every match over it is checked for exhaustiveness, and an unknown
//! value is rejected at the boundary instead of flowing through as free
//! text. The wire spelling is camelCase in both serde and `as_str()`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A string that doesn't name any variant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire spelling of this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok(Self::$variant), )+
                    other => Err(UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

wire_enum! {
    /// Role of a derived key pair.
    KeyKind as "key kind" {
        /// Authorizes spends.
        Spending => "spending",
        /// Decrypts incoming notes.
        Viewing => "viewing",
        /// Computes nullifiers.
        Nullifier => "nullifier",
    }
}

wire_enum! {
    /// Lifecycle of a private note.
    NoteStatus as "note status" {
        /// Created but not yet included in a rollup.
        Pending => "pending",
        /// Commitment is in the note tree and spendable.
        Committed => "committed",
        /// Spent; its nullifier has been published.
        Nullified => "nullified",
    }
}

wire_enum! {
    /// Lifecycle of a submitted transaction.
    TransactionStatus as "transaction status" {
        Pending => "pending",
        Confirmed => "confirmed",
        Failed => "failed",
    }
}

wire_enum! {
    /// What a zero-knowledge proof attests to.
    ProofType as "proof type" {
        Transfer => "transfer",
        Shield => "shield",
        Unshield => "unshield",
        Swap => "swap",
        Bridge => "bridge",
        ContractCall => "contractCall",
        Custom => "custom",
    }
}

wire_enum! {
    /// Where the remote prover is with a proof request.
    ProofStatus as "proof status" {
        Generating => "generating",
        Ready => "ready",
        Failed => "failed",
    }
}

wire_enum! {
    /// Direction and visibility of a token movement.
    TransferKind as "transfer kind" {
        Public => "public",
        Private => "private",
        /// Public balance into a private note.
        Shield => "shield",
        /// Private note back into a public balance.
        Unshield => "unshield",
    }
}

wire_enum! {
    /// Events the polling trigger can watch for.
    TriggerEvent as "trigger event" {
        NewPrivateTransaction => "newPrivateTransaction",
        ShieldUnshieldEvent => "shieldUnshieldEvent",
        NoteReceived => "noteReceived",
        RollupPublished => "rollupPublished",
        BridgeCompletion => "bridgeCompletion",
    }
}

wire_enum! {
    /// Resource groups the plugin exposes operations for.
    Resource as "resource" {
        Accounts => "accounts",
        PrivateTokens => "privateTokens",
        PublicTokens => "publicTokens",
        Notes => "notes",
        Transactions => "transactions",
        PrivateDeFi => "privateDeFi",
        Proofs => "proofs",
        Network => "network",
        Bridges => "bridges",
        NoirContracts => "noirContracts",
        Utility => "utility",
    }
}

wire_enum! {
    /// Which network the credentials point at.
    Network as "network" {
        Mainnet => "mainnet",
        /// The public sandbox.
        Testnet => "testnet",
        /// A caller-supplied RPC endpoint.
        Custom => "custom",
    }
}

wire_enum! {
    /// Level of access the configured account grants.
    AccountType as "account type" {
        /// Full access; can authorize spends.
        Spending => "spending",
        /// Read-only; can decrypt notes.
        Viewing => "viewing",
    }
}
