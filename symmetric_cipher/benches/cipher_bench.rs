use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::RngCore;
use std::hint::black_box;
use symmetric_cipher::crypto::des::DES;
use symmetric_cipher::crypto::triple_des::TripleDES;
use symmetric_cipher::{CipherAlgorithm, CipherContext, CipherMode, SymmetricCipher};

/// Measures chaining overhead without any cipher work.
struct IdentityCipher;

impl CipherAlgorithm for IdentityCipher {
    type Block = [u8; 8];

    const BLOCK_SIZE: usize = 8;

    fn encrypt_block(&self, block: &[u8; 8]) -> [u8; 8] {
        *block
    }

    fn decrypt_block(&self, block: &[u8; 8]) -> [u8; 8] {
        *block
    }
}

fn bench_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("Single block");
    let block: [u8; 8] = rand::random();

    let des = DES::with_key(&rand::random::<[u8; 7]>()).unwrap();
    group.bench_function("DES encrypt", |b| b.iter(|| des.encrypt(black_box(&block))));
    group.bench_function("DES decrypt", |b| b.iter(|| des.decrypt(black_box(&block))));

    let tdes = TripleDES::with_key(&rand::random::<[u8; 21]>()).unwrap();
    group.bench_function("3DES encrypt", |b| b.iter(|| tdes.encrypt(black_box(&block))));

    group.bench_function("DES key schedule", |b| {
        b.iter(|| DES::with_key(black_box(b"7bytes!")).unwrap())
    });

    group.finish();
}

fn bench_modes(c: &mut Criterion) {
    let mut data = vec![0u8; 64 * 1024];
    rand::rng().fill_bytes(&mut data);
    let iv = [0u8; 8];

    let mut group = c.benchmark_group("Buffer 64KiB");
    group.throughput(Throughput::Bytes(data.len() as u64));

    for mode in [CipherMode::ECB, CipherMode::CBC] {
        let identity = CipherContext::new(IdentityCipher, mode, Some(&iv)).unwrap();
        group.bench_with_input(BenchmarkId::new("Identity", mode), &data, |b, data| {
            b.iter(|| identity.encrypt(data))
        });

        let des = DES::with_key(&rand::random::<[u8; 7]>()).unwrap();
        let ctx = CipherContext::new(des, mode, Some(&iv)).unwrap();
        group.bench_with_input(BenchmarkId::new("DES", mode), &data, |b, data| {
            b.iter(|| ctx.encrypt(data))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_block, bench_modes);
criterion_main!(benches);
