use stark_crypto::field::Felt;
use stark_crypto::hash::{poseidon_hash, poseidon_hash_many, poseidon_permute};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_poseidon(c: &mut Criterion) {
    let state = [Felt::from(9u64), Felt::from(0xbu64), Felt::from(2u64)];
    let values: Vec<Felt> = (0..16u64).map(Felt::from).collect();

    c.bench_function("poseidon permute", |b| {
        b.iter(|| poseidon_permute(black_box(state)))
    });

    c.bench_function("poseidon hash", |b| {
        b.iter(|| poseidon_hash(black_box(&state[0]), black_box(&state[1])))
    });

    c.bench_function("poseidon hash_many 16 elements", |b| {
        b.iter(|| poseidon_hash_many(black_box(&values)))
    });
}

criterion_group!(benches, bench_poseidon);
criterion_main!(benches);
