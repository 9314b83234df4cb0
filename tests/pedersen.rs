use stark_crypto::curve::{CurvePoint, GENERATOR};
use stark_crypto::field::Felt;
use stark_crypto::hash::pedersen::params::{P1, P2, P3, P4, SHIFT_POINT};
use stark_crypto::hash::{pedersen_hash, pedersen_hash_array};

fn felt(hex: &str) -> Felt {
    Felt::from_hex(hex).unwrap()
}

#[test]
fn pedersen_reference_vector() {
    let a = felt("0x3d937c035c878245caf64531a5756109c53068da139362728feb561405371cb");
    let b = felt("0x208a0a10250e382e1e4bbe2880906c2791bf6275695e02fbbc6aeff9cd8b31a");

    assert_eq!(
        pedersen_hash(&a, &b),
        felt("0x30e480bed5fe53fa909cc0f8c4d99b8f9f2c016be4c41e13a4848797979c662")
    );
}

#[test]
fn pedersen_of_zeros_is_shift_point_x() {
    assert_eq!(
        pedersen_hash(&Felt::ZERO, &Felt::ZERO),
        SHIFT_POINT.x().unwrap()
    );
}

#[test]
fn pedersen_is_not_commutative() {
    let one_two = pedersen_hash(&Felt::ONE, &Felt::TWO);
    let two_one = pedersen_hash(&Felt::TWO, &Felt::ONE);

    assert_eq!(
        one_two,
        felt("0x5bb9440e27889a364bcb678b1f679ecd1347acdedcbf36e83494f857cc58026")
    );
    assert_eq!(
        two_one,
        felt("0x2ab889bd35e684623df9b4ea4a4a1f6d9e0ef39b67c1293b8a89dd17e351235")
    );
}

#[test]
fn pedersen_constant_points_are_on_curve() {
    for point in [SHIFT_POINT, P1, P2, P3, P4] {
        assert!(point.is_on_curve());
        assert!(!point.is_identity());
        assert_ne!(point, GENERATOR);
    }
}

#[test]
fn pedersen_small_input_uses_low_point_only() {
    // With y = 0 and x < 2²⁴⁸ only the first base point contributes.
    let x = Felt::from(7u64);
    let expected = SHIFT_POINT + P1.multiply(&x.to_u256());

    assert_eq!(pedersen_hash(&x, &Felt::ZERO), expected.x().unwrap());
}

#[test]
fn pedersen_high_bits_use_second_point() {
    let x = Felt::MAX;
    let raw = x.to_u256();
    let expected = SHIFT_POINT + P1.multiply(&raw.low_bits(248)) + P2.multiply(&(raw >> 248));

    assert_eq!(pedersen_hash(&x, &Felt::ZERO), expected.x().unwrap());
    assert_ne!(expected, CurvePoint::Identity);
}

#[test]
fn pedersen_hash_array_chains_with_length() {
    assert_eq!(
        pedersen_hash_array(&[]),
        pedersen_hash(&Felt::ZERO, &Felt::ZERO)
    );

    let values = [Felt::ONE, Felt::TWO, Felt::THREE];
    assert_eq!(
        pedersen_hash_array(&values),
        felt("0xf9d95fbf356fbeda26538c92f7040abe51bf142350f73c9ee5ba7c660bae71")
    );

    let manual = pedersen_hash(
        &pedersen_hash(
            &pedersen_hash(&pedersen_hash(&Felt::ZERO, &Felt::ONE), &Felt::TWO),
            &Felt::THREE,
        ),
        &Felt::THREE,
    );
    assert_eq!(pedersen_hash_array(&values), manual);
}
