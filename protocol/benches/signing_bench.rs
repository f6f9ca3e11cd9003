// Signing & verification benchmarks for stellar-wire.
//
// Covers Ed25519 keypair generation, raw signing and verification, envelope
// hashing and signing, and multi-signer verification at various sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stellar_wire::crypto::Keypair;
use stellar_wire::network::Network;
use stellar_wire::transaction::{operation, Account, Envelope, TransactionBuilder, TxEnvelope};
use stellar_wire::xdr::Asset;

const DESTINATION: &str = "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ";

fn envelope(source: &Keypair) -> TxEnvelope {
    let mut account = Account::new(&source.public_key(), 1_000).unwrap();
    TransactionBuilder::new(&mut account, Network::testnet())
        .add_operation(operation::payment(DESTINATION, Asset::Native, "12.5").unwrap())
        .set_timeout(0)
        .build()
        .unwrap()
}

fn bench_keypair_generation(c: &mut Criterion) {
    c.bench_function("ed25519/keypair_generate", |b| {
        b.iter(Keypair::random);
    });
}

fn bench_sign_message(c: &mut Criterion) {
    let keypair = Keypair::random();
    let message = [7u8; 32];

    c.bench_function("ed25519/sign_hash", |b| {
        b.iter(|| keypair.sign(&message).unwrap());
    });
}

fn bench_verify_signature(c: &mut Criterion) {
    let keypair = Keypair::random();
    let message = [7u8; 32];
    let signature = keypair.sign(&message).unwrap();

    c.bench_function("ed25519/verify_hash", |b| {
        b.iter(|| keypair.verify(&message, &signature));
    });
}

fn bench_envelope_hash(c: &mut Criterion) {
    let env = envelope(&Keypair::random());

    c.bench_function("envelope/hash", |b| {
        b.iter(|| env.hash().unwrap());
    });
}

fn bench_sign_envelope(c: &mut Criterion) {
    let keypair = Keypair::random();
    let env = envelope(&keypair);

    c.bench_function("envelope/sign", |b| {
        b.iter(|| {
            let mut env = env.clone();
            env.sign(&keypair).unwrap();
            env
        });
    });
}

fn bench_verify_signers(c: &mut Criterion) {
    let mut group = c.benchmark_group("envelope/verify_signatures");

    for size in [1usize, 5, 10, 20] {
        let source = Keypair::random();
        let mut env = envelope(&source);
        let signers: Vec<Keypair> = (0..size).map(|_| Keypair::random()).collect();
        for kp in &signers {
            env.sign(kp).unwrap();
        }
        let keys: Vec<String> = signers.iter().map(Keypair::public_key).collect();
        let keys: Vec<&str> = keys.iter().map(String::as_str).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.iter(|| stellar_wire::transaction::verify_signatures(&env, keys).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_keypair_generation,
    bench_sign_message,
    bench_verify_signature,
    bench_envelope_hash,
    bench_sign_envelope,
    bench_verify_signers,
);
criterion_main!(benches);
