// Hashing benchmarks for the privacy primitives.
//
// Covers key derivation, address binding, commitments, nullifiers and the
// note cipher at a range of plaintext sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use aztec_privacy_core::crypto::encryption::{decrypt_bytes, encrypt_bytes};
use aztec_privacy_core::crypto::{
    compute_commitment, compute_nullifier, derive_address, derive_keys, generate_master_secret,
};

fn repeat(c: char) -> String {
    format!("0x{}", c.to_string().repeat(64))
}

fn bench_derive_keys(c: &mut Criterion) {
    let master = generate_master_secret();

    c.bench_function("keys/derive_keys", |b| {
        b.iter(|| derive_keys(&master).unwrap());
    });
}

fn bench_derive_address(c: &mut Criterion) {
    let keys = derive_keys(&generate_master_secret()).unwrap();
    let salt = repeat('c');

    c.bench_function("address/derive_address", |b| {
        b.iter(|| {
            derive_address(
                &keys.spending_key.public_key,
                &keys.viewing_key.public_key,
                &salt,
            )
            .unwrap()
        });
    });
}

fn bench_commitment(c: &mut Criterion) {
    let (token, owner, randomness) = (repeat('2'), repeat('3'), repeat('4'));

    c.bench_function("note/compute_commitment", |b| {
        b.iter(|| compute_commitment("0xde0b6b3a7640000", &token, &owner, &randomness).unwrap());
    });
}

fn bench_nullifier(c: &mut Criterion) {
    let (commitment, key) = (repeat('1'), repeat('2'));

    c.bench_function("note/compute_nullifier", |b| {
        b.iter(|| compute_nullifier(&commitment, &key, 1_024).unwrap());
    });
}

fn bench_note_cipher(c: &mut Criterion) {
    let keys = derive_keys(&generate_master_secret()).unwrap();
    let mut group = c.benchmark_group("encryption/note_cipher");

    for size in [32usize, 256, 4_096] {
        let plaintext = vec![0x5au8; size];
        let sealed = encrypt_bytes(&plaintext, &keys.viewing_key.public_key).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("encrypt", size), &plaintext, |b, data| {
            b.iter(|| encrypt_bytes(data, &keys.viewing_key.public_key).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("decrypt", size), &sealed, |b, note| {
            b.iter(|| decrypt_bytes(note, &keys.viewing_key.private_key).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_derive_keys,
    bench_derive_address,
    bench_commitment,
    bench_nullifier,
    bench_note_cipher,
);
criterion_main!(benches);
