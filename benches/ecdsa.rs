use stark_crypto::curve::GENERATOR;
use stark_crypto::field::Felt;
use stark_crypto::signatures::ecdsa::{verify, verify_signature};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_ecdsa(c: &mut Criterion) {
    let msg = Felt::TWO;
    let r = Felt::from_hex_unchecked("0x411494b501a98abd8262b0da1351e17899a0c4ef23dd2f96fec5ba847310b20");
    let s = Felt::from_hex_unchecked("0x405c3191ab3883ef2b763af35bc5f5d15b3b4e99461d70e84c654a351a7c81b");
    let public_key_x = Felt::from_hex_unchecked(
        "0x1ef15c18599971b7beced415a40f0c7deacfd9b0d1819e03d723d8bc943cfca",
    );

    c.bench_function("ecdsa verify point", |b| {
        b.iter(|| verify_signature(black_box(&msg), black_box(&r), black_box(&s), &GENERATOR))
    });

    c.bench_function("ecdsa verify x-only", |b| {
        b.iter(|| verify(black_box(&public_key_x), black_box(&msg), black_box(&r), black_box(&s)))
    });
}

criterion_group!(benches, bench_ecdsa);
criterion_main!(benches);
