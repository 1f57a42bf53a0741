//! # Utility Operations
//!
//! The operations the shell exposes, as a closed enum. Each variant owns
//! exactly the inputs it needs, and [`UtilityOperation::execute`] turns it
//! into the JSON object printed on stdout. Field names in the output follow
//! the API's camelCase wire convention.

use anyhow::{Context, Result};
use serde_json::{json, Value};

use aztec_privacy_core::client::{ApiCredentials, ApiRequest};
use aztec_privacy_core::config::token_address;
use aztec_privacy_core::crypto::note::{
    compute_secret_hash, generate_note_randomness, generate_shield_secret,
};
use aztec_privacy_core::crypto::{
    compute_commitment, compute_nullifier, decrypt, derive_address, derive_keys, encrypt,
    generate_master_secret, EncryptedNote,
};

use crate::transport::ApiClient;

/// One invocation's worth of work.
#[derive(Debug, Clone)]
pub enum UtilityOperation {
    DeriveKeys {
        master_secret: Option<String>,
    },
    GenerateMasterSecret,
    DeriveAddress {
        spending_public_key: String,
        viewing_public_key: String,
        partial_address: String,
    },
    ComputeCommitment {
        value: String,
        /// Address or known symbol.
        token: String,
        owner: String,
        randomness: Option<String>,
    },
    ComputeNullifier {
        commitment: String,
        nullifier_key: String,
        position: u64,
    },
    EncryptNote {
        note_data: String,
        viewing_public_key: String,
    },
    DecryptNote {
        ciphertext: String,
        ephemeral_public_key: String,
        nonce: String,
        viewing_private_key: String,
    },
    SecretHash {
        secret: Option<String>,
    },
    ApiHealth {
        credentials: ApiCredentials,
    },
}

impl UtilityOperation {
    /// Operation name as the workflow host spells it.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DeriveKeys { .. } => "deriveKeys",
            Self::GenerateMasterSecret => "generateMasterSecret",
            Self::DeriveAddress { .. } => "deriveAddress",
            Self::ComputeCommitment { .. } => "computeCommitment",
            Self::ComputeNullifier { .. } => "computeNullifier",
            Self::EncryptNote { .. } => "encryptNote",
            Self::DecryptNote { .. } => "decryptNote",
            Self::SecretHash { .. } => "secretHash",
            Self::ApiHealth { .. } => "getApiHealth",
        }
    }

    pub async fn execute(self) -> Result<Value> {
        tracing::debug!(operation = self.name(), "executing");

        let output = match self {
            Self::DeriveKeys { master_secret } => {
                let master_secret = master_secret
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(generate_master_secret);
                let keys = derive_keys(&master_secret).context("invalid master secret")?;
                json!({
                    "masterSecret": master_secret,
                    "spendingKey": keys.spending_key,
                    "viewingKey": keys.viewing_key,
                    "nullifierKey": keys.nullifier_key,
                })
            }
            Self::GenerateMasterSecret => json!({ "masterSecret": generate_master_secret() }),
            Self::DeriveAddress {
                spending_public_key,
                viewing_public_key,
                partial_address,
            } => {
                let address =
                    derive_address(&spending_public_key, &viewing_public_key, &partial_address)?;
                json!({ "address": address })
            }
            Self::ComputeCommitment {
                value,
                token,
                owner,
                randomness,
            } => {
                let token_address = resolve_token(&token);
                let randomness = randomness.unwrap_or_else(generate_note_randomness);
                let commitment = compute_commitment(&value, &token_address, &owner, &randomness)?;
                json!({
                    "commitment": commitment,
                    "tokenAddress": token_address,
                    "randomness": randomness,
                })
            }
            Self::ComputeNullifier {
                commitment,
                nullifier_key,
                position,
            } => {
                let nullifier = compute_nullifier(&commitment, &nullifier_key, position)?;
                json!({ "nullifier": nullifier, "position": position })
            }
            Self::EncryptNote {
                note_data,
                viewing_public_key,
            } => serde_json::to_value(encrypt(&note_data, &viewing_public_key)?)?,
            Self::DecryptNote {
                ciphertext,
                ephemeral_public_key,
                nonce,
                viewing_private_key,
            } => {
                let note = EncryptedNote {
                    ciphertext,
                    ephemeral_public_key,
                    nonce,
                };
                json!({ "noteData": decrypt(&note, &viewing_private_key)? })
            }
            Self::SecretHash { secret } => {
                let secret = secret
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(generate_shield_secret);
                let secret_hash = compute_secret_hash(&secret)?;
                json!({ "secret": secret, "secretHash": secret_hash })
            }
            Self::ApiHealth { credentials } => api_health(credentials).await?,
        };

        Ok(output)
    }
}

/// Map a known token symbol to its address; anything else passes through.
fn resolve_token(token: &str) -> String {
    token_address(token)
        .map(str::to_string)
        .unwrap_or_else(|| token.to_string())
}

async fn api_health(credentials: ApiCredentials) -> Result<Value> {
    let client = ApiClient::new(credentials)?;
    let health = client
        .send(&ApiRequest::get("/health"))
        .await
        .context("Aztec API request failed")?;
    Ok(health)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aztec_privacy_core::crypto::hex::is_valid_hex;

    fn repeat(c: char) -> String {
        format!("0x{}", c.to_string().repeat(64))
    }

    #[tokio::test]
    async fn derive_keys_echoes_generated_secret() {
        let output = UtilityOperation::DeriveKeys { master_secret: None }
            .execute()
            .await
            .unwrap();

        let secret = output["masterSecret"].as_str().unwrap();
        assert!(is_valid_hex(secret, Some(64)));

        let keys = derive_keys(secret).unwrap();
        assert_eq!(output["viewingKey"]["publicKey"], keys.viewing_key.public_key);
        assert_eq!(output["nullifierKey"]["type"], "nullifier");
    }

    #[tokio::test]
    async fn derive_keys_known_secret() {
        let output = UtilityOperation::DeriveKeys {
            master_secret: Some(repeat('1')),
        }
        .execute()
        .await
        .unwrap();
        assert_eq!(
            output["spendingKey"]["privateKey"],
            "0x2954e54871fa9f15aae76aa462ce5d087b57d75032f1f594b02237d4bb11c377"
        );
    }

    #[tokio::test]
    async fn bad_secret_is_an_error() {
        let result = UtilityOperation::DeriveKeys {
            master_secret: Some("0x1234".to_string()),
        }
        .execute()
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn commitment_resolves_token_symbols() {
        let output = UtilityOperation::ComputeCommitment {
            value: "0x100".to_string(),
            token: "ETH".to_string(),
            owner: repeat('3'),
            randomness: Some(repeat('4')),
        }
        .execute()
        .await
        .unwrap();

        let token = token_address("ETH").unwrap();
        assert_eq!(output["tokenAddress"], token);
        assert_eq!(
            output["commitment"],
            compute_commitment("0x100", token, &repeat('3'), &repeat('4')).unwrap()
        );
    }

    #[tokio::test]
    async fn commitment_with_explicit_address() {
        let output = UtilityOperation::ComputeCommitment {
            value: "0x100".to_string(),
            token: repeat('2'),
            owner: repeat('3'),
            randomness: Some(repeat('4')),
        }
        .execute()
        .await
        .unwrap();
        assert_eq!(
            output["commitment"],
            "0x2ea9d8def3263827c2b5c8d1b8007b989cf3a06ef76aa2dbe878cf4b96245251"
        );
    }

    #[tokio::test]
    async fn nullifier_output() {
        let output = UtilityOperation::ComputeNullifier {
            commitment: repeat('1'),
            nullifier_key: repeat('2'),
            position: 1,
        }
        .execute()
        .await
        .unwrap();
        assert_eq!(
            output["nullifier"],
            "0xa17cb8789749b7af8fd1014a41a64963af4602023adec73381dcfbccc2553836"
        );
        assert_eq!(output["position"], 1);
    }

    #[tokio::test]
    async fn encrypt_output_feeds_decrypt() {
        let keys = derive_keys(&repeat('7')).unwrap();
        let sealed = UtilityOperation::EncryptNote {
            note_data: "hello".to_string(),
            viewing_public_key: keys.viewing_key.public_key.clone(),
        }
        .execute()
        .await
        .unwrap();

        let opened = UtilityOperation::DecryptNote {
            ciphertext: sealed["ciphertext"].as_str().unwrap().to_string(),
            ephemeral_public_key: sealed["ephemeralPublicKey"].as_str().unwrap().to_string(),
            nonce: sealed["nonce"].as_str().unwrap().to_string(),
            viewing_private_key: keys.viewing_key.private_key,
        }
        .execute()
        .await
        .unwrap();
        assert!(opened["noteData"].is_string());
    }

    #[tokio::test]
    async fn secret_hash_known_vector() {
        let output = UtilityOperation::SecretHash {
            secret: Some(repeat('1')),
        }
        .execute()
        .await
        .unwrap();
        assert_eq!(
            output["secretHash"],
            "0x02d449a31fbb267c8f352e9968a79e3e5fc95c1bbeaa502fd6454ebde5a4bedc"
        );
    }

    #[tokio::test]
    async fn health_returns_server_json() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await.unwrap();
            socket
                .write_all(
                    b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\n\
                      Content-Length: 16\r\nConnection: close\r\n\r\n{\"healthy\":true}",
                )
                .await
                .unwrap();
        });

        let credentials = ApiCredentials {
            network: aztec_privacy_core::types::Network::Custom,
            rpc_endpoint: Some(base),
            ..ApiCredentials::default()
        };
        let output = UtilityOperation::ApiHealth { credentials }
            .execute()
            .await
            .unwrap();
        assert_eq!(output, json!({ "healthy": true }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn health_rejects_malformed_account_address() {
        let credentials = ApiCredentials {
            account_address: Some("0xabc\r\nX-Injected: yes".to_string()),
            ..ApiCredentials::default()
        };
        let result = UtilityOperation::ApiHealth { credentials }.execute().await;
        assert!(result.is_err());
    }

    #[test]
    fn names_follow_wire_spelling() {
        assert_eq!(UtilityOperation::GenerateMasterSecret.name(), "generateMasterSecret");
        assert_eq!(
            UtilityOperation::ApiHealth {
                credentials: ApiCredentials::default()
            }
            .name(),
            "getApiHealth"
        );
    }
}
