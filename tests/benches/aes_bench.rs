use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rijndael_algorithms::{Aes128, Aes192, Aes256, BlockCipher, BlockMode, Cbc, Ecb};
use rijndael_api::{Mode, SymmetricCipher};
use rijndael_symmetric::{AnyAesContext, ContextConfig};

fn bench_key_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("AES-key-expansion");

    group.bench_function("AES-128", |b| b.iter(|| Aes128::with_key(black_box(&[0u8; 16]))));
    group.bench_function("AES-192", |b| b.iter(|| Aes192::with_key(black_box(&[0u8; 24]))));
    group.bench_function("AES-256", |b| b.iter(|| Aes256::with_key(black_box(&[0u8; 32]))));

    group.finish();
}

fn bench_block<B: BlockCipher>(c: &mut Criterion, key: &[u8]) {
    let cipher = B::new(key).unwrap();
    let mut block = [0u8; 16];
    c.bench_function(&format!("{}-block", B::name()), |b| {
        b.iter(|| cipher.encrypt_block(black_box(&mut block)))
    });
}

fn bench_single_block(c: &mut Criterion) {
    bench_block::<Aes128>(c, &[0u8; 16]);
    bench_block::<Aes192>(c, &[0u8; 24]);
    bench_block::<Aes256>(c, &[0u8; 32]);
}

fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("AES-128-modes");
    let cipher = Aes128::with_key(&[0u8; 16]).unwrap();

    // Test different data sizes
    for size in [16usize, 256, 1024, 16384].iter() {
        let data = vec![0u8; *size];
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("ECB", size), size, |b, _| {
            let mut buf = data.clone();
            b.iter(|| Ecb::new(&cipher).encrypt_blocks(black_box(&mut buf)))
        });

        group.bench_with_input(BenchmarkId::new("CBC", size), size, |b, _| {
            let mut buf = data.clone();
            let mut iv = [0u8; 16];
            b.iter(|| Cbc::new(&cipher, &mut iv).encrypt_blocks(black_box(&mut buf)))
        });
    }

    group.finish();
}

fn bench_context(c: &mut Criterion) {
    let mut group = c.benchmark_group("AES-context");
    let config = ContextConfig::default().with_capacity(1024);

    for (len, name) in [(16usize, "AES-128"), (24, "AES-192"), (32, "AES-256")] {
        let key = vec![0u8; len];
        let mut ctx = AnyAesContext::with_config(&key, &[0u8; 16], config).unwrap();
        let data = vec![0u8; 1000];
        let mut out = vec![0u8; 1024];

        group.bench_function(BenchmarkId::new(name, "CBC-padded-1000"), |b| {
            b.iter(|| {
                ctx.reset_iv();
                ctx.encrypt(Mode::Cbc, black_box(&data), &mut out, true)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_key_expansion, bench_single_block, bench_modes, bench_context);
criterion_main!(benches);
