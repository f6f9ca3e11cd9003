// XDR codec benchmarks for stellar-wire.
//
// Covers envelope encode/decode, base64 wrapping, strkey encoding and
// decoding, and decode cost as operation count grows.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stellar_wire::crypto::Keypair;
use stellar_wire::identity::Strkey;
use stellar_wire::network::Network;
use stellar_wire::transaction::{operation, Account, Envelope, TransactionBuilder};
use stellar_wire::xdr::{Asset, TransactionEnvelope, XdrCodec};

const DESTINATION: &str = "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ";

fn signed_envelope(ops: usize) -> TransactionEnvelope {
    let keypair = Keypair::random();
    let mut account = Account::new(&keypair.public_key(), 1).unwrap();
    let mut builder = TransactionBuilder::new(&mut account, Network::testnet()).set_timeout(0);
    for _ in 0..ops {
        builder =
            builder.add_operation(operation::payment(DESTINATION, Asset::Native, "1").unwrap());
    }
    let mut env = builder.build().unwrap();
    env.sign(&keypair).unwrap();
    env.to_xdr_envelope().unwrap()
}

fn bench_encode(c: &mut Criterion) {
    let env = signed_envelope(1);

    c.bench_function("xdr/encode_envelope", |b| {
        b.iter(|| env.to_xdr_bytes().unwrap());
    });
}

fn bench_decode(c: &mut Criterion) {
    let bytes = signed_envelope(1).to_xdr_bytes().unwrap();

    c.bench_function("xdr/decode_envelope", |b| {
        b.iter(|| TransactionEnvelope::from_xdr_bytes(&bytes).unwrap());
    });
}

fn bench_base64_roundtrip(c: &mut Criterion) {
    let b64 = signed_envelope(1).to_xdr_base64().unwrap();

    c.bench_function("xdr/base64_decode_encode", |b| {
        b.iter(|| {
            TransactionEnvelope::from_xdr_base64(&b64)
                .unwrap()
                .to_xdr_base64()
                .unwrap()
        });
    });
}

fn bench_strkey(c: &mut Criterion) {
    let text = Keypair::random().public_key();

    c.bench_function("strkey/decode_account", |b| {
        b.iter(|| Strkey::from_string(&text).unwrap());
    });
    let key = Strkey::from_string(&text).unwrap();
    c.bench_function("strkey/encode_account", |b| {
        b.iter(|| key.to_string());
    });
}

fn bench_decode_by_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("xdr/decode_by_ops");

    for ops in [1usize, 10, 50, 100] {
        let bytes = signed_envelope(ops).to_xdr_bytes().unwrap();
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(ops), &bytes, |b, bytes| {
            b.iter(|| TransactionEnvelope::from_xdr_bytes(bytes).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encode,
    bench_decode,
    bench_base64_roundtrip,
    bench_strkey,
    bench_decode_by_ops,
);
criterion_main!(benches);
