//! End-to-end tests for the privacy utility surface.
//!
//! Each test walks a complete account or note lifecycle through the public
//! API only: key derivation, address binding, note creation, spending and
//! the REST envelope a host would wrap around them.

use serde_json::json;

use aztec_privacy_core::client::{collect_all_items, unwrap_envelope, ApiCredentials, ApiRequest};
use aztec_privacy_core::crypto::hex::{eth_to_wei, is_valid_hex, number_to_hex, validate_address};
use aztec_privacy_core::crypto::note::{compute_secret_hash, generate_shield_secret, Note};
use aztec_privacy_core::crypto::{
    compute_commitment, compute_nullifier, decrypt, derive_address, derive_keys, encrypt,
    generate_master_secret, EncryptedNote,
};
use aztec_privacy_core::types::{KeyKind, Network, NoteStatus};
use aztec_privacy_core::FormatError;

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

fn salt() -> String {
    format!("0x{}", "c".repeat(64))
}

/// A fresh account: master secret, its keys and its address.
fn new_account() -> (String, aztec_privacy_core::crypto::AccountKeys, String) {
    let master = generate_master_secret();
    let keys = derive_keys(&master).unwrap();
    let address = derive_address(
        &keys.spending_key.public_key,
        &keys.viewing_key.public_key,
        &salt(),
    )
    .unwrap();
    (master, keys, address)
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

#[test]
fn account_is_recoverable_from_master_secret() {
    let (master, keys, address) = new_account();

    let restored = derive_keys(&master).unwrap();
    assert_eq!(restored, keys);

    let restored_address = derive_address(
        &restored.spending_key.public_key,
        &restored.viewing_key.public_key,
        &salt(),
    )
    .unwrap();
    assert_eq!(restored_address, address);
    assert!(validate_address(&address));
}

#[test]
fn unrelated_accounts_share_nothing() {
    let (_, alice, alice_address) = new_account();
    let (_, bob, bob_address) = new_account();

    assert_ne!(alice_address, bob_address);
    for kind in KeyKind::ALL {
        assert_ne!(alice.get(*kind).public_key, bob.get(*kind).public_key);
    }
}

#[test]
fn known_account_vector() {
    let keys = derive_keys(&format!("0x{}", "1".repeat(64))).unwrap();
    assert_eq!(
        keys.spending_key.public_key,
        "0xbf66379e541b798dd6f417edc51b968ba6b98390a81130427407bf67a2529ca7"
    );
    assert_eq!(
        keys.nullifier_key.private_key,
        "0xe048e5b3d5ec838c57db5f8f9c2d97910bb3dcf13a6329a49e8331f36248efe5"
    );
}

// ---------------------------------------------------------------------------
// Notes
// ---------------------------------------------------------------------------

#[test]
fn note_lifecycle_from_amount_to_nullifier() {
    let (_, keys, owner) = new_account();
    let token = format!("0x{}", "2".repeat(64));

    let amount = eth_to_wei("1.5").unwrap();
    let value = number_to_hex(&amount);
    assert_eq!(value, "0x14d1120d7b160000");

    let mut note = Note::new(&value, &token, &owner).unwrap();
    assert_eq!(note.status, NoteStatus::Pending);
    assert!(note.verify_commitment().unwrap());
    assert_eq!(
        note.commitment,
        compute_commitment(&value, &token, &owner, &note.randomness).unwrap()
    );

    note.status = NoteStatus::Committed;
    let nullifier = note.nullifier(&keys.nullifier_key.private_key, 42).unwrap();
    assert!(is_valid_hex(&nullifier, Some(64)));
    assert_eq!(
        nullifier,
        compute_nullifier(&note.commitment, &keys.nullifier_key.private_key, 42).unwrap()
    );
    assert_ne!(
        nullifier,
        note.nullifier(&keys.nullifier_key.private_key, 43).unwrap()
    );
}

#[test]
fn note_survives_the_wire() {
    let (_, _, owner) = new_account();
    let note = Note::new("0x3e8", &format!("0x{}", "2".repeat(64)), &owner).unwrap();

    let response = json!({ "success": true, "data": note });
    let received: Note = unwrap_envelope(response).unwrap();
    assert_eq!(received, note);
    assert!(received.verify_commitment().unwrap());
}

#[test]
fn shield_secret_hash_is_stable() {
    let secret = generate_shield_secret();
    assert_eq!(
        compute_secret_hash(&secret).unwrap(),
        compute_secret_hash(&secret).unwrap()
    );
    assert_ne!(compute_secret_hash(&secret).unwrap(), secret);
}

// ---------------------------------------------------------------------------
// Encrypted notes
// ---------------------------------------------------------------------------

#[test]
fn encrypted_note_round_trips_through_json() {
    let (_, keys, _) = new_account();
    let sealed = encrypt("memo: rent", &keys.viewing_key.public_key).unwrap();

    let wire = serde_json::to_string(&sealed).unwrap();
    let parsed: EncryptedNote = serde_json::from_str(&wire).unwrap();
    assert_eq!(parsed, sealed);

    // Decryption is well-formed even though it doesn't recover the text.
    let opened = decrypt(&parsed, &keys.viewing_key.private_key).unwrap();
    assert!(opened.chars().count() <= "memo: rent".len());
}

#[test]
fn known_ciphertext_decrypts() {
    let note = EncryptedNote {
        ciphertext: "0x948210b77fd7c1115b07bce873bd5a69d1321b49cddaae5bb1579d37e8e2bfb5\
                     b28243a126cdcb161e53b7a970ae1b28c3605d1398d5a4"
            .to_string(),
        ephemeral_public_key: format!("0x{}", "55".repeat(32)),
        nonce: format!("0x{}", "00".repeat(12)),
    };
    let plaintext = decrypt(&note, &format!("0x{}", "66".repeat(32))).unwrap();
    assert_eq!(
        plaintext,
        "Test note data 12345 and some more bytes to wrap around"
    );
}

// ---------------------------------------------------------------------------
// Errors and the REST contract
// ---------------------------------------------------------------------------

#[test]
fn malformed_input_surfaces_as_format_error() {
    let err: FormatError = derive_keys("0xnot-a-key").unwrap_err();
    assert!(!err.to_string().is_empty());

    assert!(derive_address("0x12", "0x34", "0x56").is_err());
    assert!(compute_nullifier("", "", 0).is_err());
}

#[test]
fn paginated_listing_of_notes() {
    let (_, _, owner) = new_account();
    let credentials = ApiCredentials {
        network: Network::Mainnet,
        account_address: Some(owner.clone()),
        ..ApiCredentials::default()
    };

    let request = ApiRequest::get("/notes").with_query(&json!({ "owner": owner, "status": "" }));
    let base = credentials.endpoint();
    let headers = credentials.auth_headers().unwrap();
    assert_eq!(headers.len(), 2);

    let mut urls = Vec::new();
    let notes = collect_all_items(&request, "notes", |req| {
        urls.push(req.url(&base)?.to_string());
        let page = urls.len();
        Ok(json!({
            "notes": vec![json!({ "page": page }); 100],
            "hasMore": page < 2
        }))
    })
    .unwrap();

    assert_eq!(notes.len(), 200);
    assert_eq!(urls.len(), 2);
    assert!(urls[0].starts_with("https://aztec-mainnet.example.com/notes?owner=0x"));
    assert!(urls[1].ends_with("page=2&pageSize=100"));
}
