//! # CLI Interface
//!
//! Command-line structure for `aztec-privacy`, built with `clap` derive.
//! Each subcommand maps one-to-one onto a [`UtilityOperation`]; the
//! conversion happens in [`Commands::into_operation`] so that argument
//! parsing and execution never share a stringly-typed parameter bag.

use clap::{Args, Parser, Subcommand};

use aztec_privacy_core::client::ApiCredentials;
use aztec_privacy_core::types::{AccountType, Network};

use crate::logging::LogFormat;
use crate::ops::UtilityOperation;

/// Key, address, note and encryption utilities for Aztec privacy workflows.
///
/// Every command prints a single JSON object on stdout. Logs go to stderr.
#[derive(Parser, Debug)]
#[command(
    name = "aztec-privacy",
    about = "Aztec privacy utility operations",
    version,
    propagate_version = true
)]
pub struct AztecPrivacyCli {
    /// Log output format.
    #[arg(long, global = true, env = "AZTEC_LOG_FORMAT", value_enum, default_value = "pretty")]
    pub log_format: LogFormat,

    /// Default log level when `RUST_LOG` is unset.
    #[arg(long, global = true, env = "AZTEC_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Suppress the licensing notice on stderr.
    #[arg(long, global = true, env = "AZTEC_QUIET")]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive the spending, viewing and nullifier key pairs.
    ///
    /// A fresh master secret is generated and echoed back when none is given.
    DeriveKeys {
        /// 32-byte hex master secret.
        #[arg(long, env = "AZTEC_MASTER_SECRET")]
        master_secret: Option<String>,
    },
    /// Print a fresh random master secret.
    GenerateMasterSecret,
    /// Bind two public keys and a partial address into an account address.
    DeriveAddress {
        #[arg(long)]
        spending_public_key: String,
        #[arg(long)]
        viewing_public_key: String,
        #[arg(long)]
        partial_address: String,
    },
    /// Compute a note commitment.
    ComputeCommitment {
        /// Note value as hex, at most 32 bytes.
        #[arg(long)]
        value: String,
        /// Token contract address, or a known symbol such as `ETH`.
        #[arg(long)]
        token: String,
        /// Owner address.
        #[arg(long)]
        owner: String,
        /// Blinding value; generated when omitted.
        #[arg(long)]
        randomness: Option<String>,
    },
    /// Compute the nullifier that spends a committed note.
    ComputeNullifier {
        #[arg(long)]
        commitment: String,
        /// Private nullifier key.
        #[arg(long, env = "AZTEC_NULLIFIER_KEY")]
        nullifier_key: String,
        /// Position of the note in the note tree.
        #[arg(long, default_value_t = 0)]
        position: u64,
    },
    /// Encrypt note data for a recipient's viewing key.
    EncryptNote {
        /// UTF-8 note data.
        #[arg(long)]
        note_data: String,
        /// Recipient's public viewing key.
        #[arg(long)]
        viewing_public_key: String,
    },
    /// Decrypt note data with a private viewing key.
    DecryptNote {
        #[arg(long)]
        ciphertext: String,
        #[arg(long)]
        ephemeral_public_key: String,
        #[arg(long)]
        nonce: String,
        #[arg(long, env = "AZTEC_VIEWING_PRIVATE_KEY")]
        viewing_private_key: String,
    },
    /// Hash a shield secret; a fresh secret is generated when none is given.
    SecretHash {
        #[arg(long)]
        secret: Option<String>,
    },
    /// Query the API's health endpoint.
    Health(CredentialArgs),
}

/// Connection settings, mirrored from the `AZTEC_*` environment.
#[derive(Args, Debug, Clone)]
pub struct CredentialArgs {
    #[arg(long, env = "AZTEC_NETWORK", default_value = "testnet")]
    pub network: Network,

    /// Base URL used when `--network custom`.
    #[arg(long, env = "AZTEC_RPC_ENDPOINT")]
    pub rpc_endpoint: Option<String>,

    #[arg(long, env = "AZTEC_ACCOUNT_TYPE", default_value = "spending")]
    pub account_type: AccountType,

    #[arg(long, env = "AZTEC_SPENDING_KEY", hide_env_values = true)]
    pub spending_key: Option<String>,

    #[arg(long, env = "AZTEC_VIEWING_KEY", hide_env_values = true)]
    pub viewing_key: Option<String>,

    #[arg(long, env = "AZTEC_ACCOUNT_ADDRESS")]
    pub account_address: Option<String>,
}

impl From<CredentialArgs> for ApiCredentials {
    fn from(args: CredentialArgs) -> Self {
        ApiCredentials {
            network: args.network,
            rpc_endpoint: args.rpc_endpoint,
            account_type: args.account_type,
            spending_key: args.spending_key,
            viewing_key: args.viewing_key,
            account_address: args.account_address,
        }
    }
}

impl Commands {
    /// Lower parsed arguments into the typed operation they request.
    pub fn into_operation(self) -> UtilityOperation {
        match self {
            Commands::DeriveKeys { master_secret } => UtilityOperation::DeriveKeys { master_secret },
            Commands::GenerateMasterSecret => UtilityOperation::GenerateMasterSecret,
            Commands::DeriveAddress {
                spending_public_key,
                viewing_public_key,
                partial_address,
            } => UtilityOperation::DeriveAddress {
                spending_public_key,
                viewing_public_key,
                partial_address,
            },
            Commands::ComputeCommitment {
                value,
                token,
                owner,
                randomness,
            } => UtilityOperation::ComputeCommitment {
                value,
                token,
                owner,
                randomness,
            },
            Commands::ComputeNullifier {
                commitment,
                nullifier_key,
                position,
            } => UtilityOperation::ComputeNullifier {
                commitment,
                nullifier_key,
                position,
            },
            Commands::EncryptNote {
                note_data,
                viewing_public_key,
            } => UtilityOperation::EncryptNote {
                note_data,
                viewing_public_key,
            },
            Commands::DecryptNote {
                ciphertext,
                ephemeral_public_key,
                nonce,
                viewing_private_key,
            } => UtilityOperation::DecryptNote {
                ciphertext,
                ephemeral_public_key,
                nonce,
                viewing_private_key,
            },
            Commands::SecretHash { secret } => UtilityOperation::SecretHash { secret },
            Commands::Health(args) => UtilityOperation::ApiHealth {
                credentials: args.into(),
            },
        }
    }
}
