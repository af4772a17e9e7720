#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, Criterion};
use polkadex_keygen_crypto::{
    ed25519,
    mnemonic::{Mnemonic, DEFAULT_WORD_COUNT},
    sr25519,
};

fn bench_derivation(c: &mut Criterion) {
    let mnemonic = Mnemonic::generate(DEFAULT_WORD_COUNT).unwrap();
    let mut group = c.benchmark_group("derivation");
    group.bench_function("mini secret", |b| b.iter(|| mnemonic.mini_secret()));
    let secret = mnemonic.mini_secret();
    group.bench_function("sr25519", |b| {
        b.iter(|| sr25519::SecretKey::from_mini_secret(&secret).unwrap().public())
    });
    group.bench_function("ed25519", |b| {
        b.iter(|| ed25519::SecretKey::from_mini_secret(&secret).public())
    });
    group.finish();
}

criterion_group!(benches, bench_derivation);
criterion_main!(benches);
