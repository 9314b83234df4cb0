use stark_crypto::CryptoError;
use stark_crypto::curve::{ALPHA, BETA, CurvePoint, GENERATOR, Scalar};
use stark_crypto::field::Felt;
use stark_crypto::primitives::U256;

fn felt(hex: &str) -> Felt {
    Felt::from_hex(hex).unwrap()
}

fn two_g() -> CurvePoint {
    CurvePoint::new(
        felt("0x759ca09377679ecd535a81e83039658bf40959283187c654c5416f439403cf5"),
        felt("0x6f524a3400e7708d5c01a28598ad272e7455aa88778b19f93b562d7a9646c41"),
    )
    .unwrap()
}

#[test]
fn curve_parameters() {
    assert_eq!(ALPHA, Felt::ONE);
    assert_eq!(
        BETA,
        felt("0x6f21413efbe40de150e596d72f7a8c5609ad26c15c915c1f4cdfcb99cee9e89")
    );
    assert!(GENERATOR.is_on_curve());
    assert_eq!(
        GENERATOR.x(),
        Some(felt(
            "0x1ef15c18599971b7beced415a40f0c7deacfd9b0d1819e03d723d8bc943cfca"
        ))
    );
}

#[test]
fn curve_new_checks_the_equation() {
    assert_eq!(
        CurvePoint::new(Felt::ZERO, Felt::ZERO),
        Err(CryptoError::PointNotOnCurve)
    );

    let (x, y) = (GENERATOR.x().unwrap(), GENERATOR.y().unwrap());
    assert_eq!(
        CurvePoint::new(x, y + Felt::ONE),
        Err(CryptoError::PointNotOnCurve)
    );
    assert_eq!(CurvePoint::new(x, y).unwrap(), GENERATOR);
}

#[test]
fn curve_identity_laws() {
    let id = CurvePoint::Identity;

    assert!(id.is_identity());
    assert!(id.is_on_curve());
    assert_eq!(id.x(), None);
    assert_eq!(GENERATOR + id, GENERATOR);
    assert_eq!(id + GENERATOR, GENERATOR);
    assert_eq!(GENERATOR - GENERATOR, id);
    assert_eq!(GENERATOR + (-GENERATOR), id);
    assert_eq!(-id, id);
    assert_eq!(id.double(), id);
}

#[test]
fn curve_doubling_matches_known_point() {
    assert_eq!(GENERATOR.double(), two_g());
    assert_eq!(GENERATOR + GENERATOR, two_g());
    assert_eq!(GENERATOR.multiply(&U256::from(2u64)), two_g());
}

#[test]
fn curve_addition_is_commutative_and_associative() {
    let g2 = two_g();
    let g3 = g2 + GENERATOR;

    assert_eq!(g2 + GENERATOR, GENERATOR + g2);
    assert_eq!((g2 + GENERATOR) + g3, g2 + (GENERATOR + g3));
    assert_eq!(g3, GENERATOR.multiply(&U256::from(3u64)));
    assert!(g3.is_on_curve());
}

#[test]
fn curve_add_assign() {
    let mut acc = CurvePoint::Identity;
    for _ in 0..5 {
        acc += GENERATOR;
    }

    assert_eq!(acc, GENERATOR.multiply(&U256::from(5u64)));
}

#[test]
fn curve_scalar_multiplication_by_order() {
    let n = Scalar::ORDER;

    assert_eq!(GENERATOR.multiply(&U256::ZERO), CurvePoint::Identity);
    assert_eq!(GENERATOR.multiply(&U256::ONE), GENERATOR);
    assert_eq!(GENERATOR.multiply(&n), CurvePoint::Identity);
    assert_eq!(GENERATOR.multiply(&(n - U256::ONE)), -GENERATOR);
    assert_eq!(GENERATOR.multiply(&(n + U256::ONE)), GENERATOR);
    assert_eq!(
        CurvePoint::Identity.multiply(&U256::from(7u64)),
        CurvePoint::Identity
    );
}

#[test]
fn curve_scalar_multiplication_distributes() {
    let a = U256::from_hex_unchecked("0x1234567890abcdef1234567890abcdef");
    let b = U256::from_hex_unchecked("0x7777777777777777fedcba9876543210");

    let lhs = GENERATOR.multiply(&(a + b));
    let rhs = GENERATOR.multiply(&a) + GENERATOR.multiply(&b);

    assert_eq!(lhs, rhs);
}

#[test]
fn curve_from_x_recovers_a_point() {
    let g_x = GENERATOR.x().unwrap();
    let recovered = CurvePoint::from_x(g_x).unwrap();

    assert!(recovered == GENERATOR || recovered == -GENERATOR);
    assert!(recovered.is_on_curve());

    // x = 5 has no point on the curve.
    assert_eq!(
        CurvePoint::from_x(Felt::from(5u64)),
        Err(CryptoError::PointNotOnCurve)
    );
    assert!(CurvePoint::from_x(Felt::ONE).is_ok());
}

#[test]
fn curve_byte_encoding() {
    let bytes = GENERATOR.to_bytes();
    assert_eq!(CurvePoint::from_bytes(&bytes).unwrap(), GENERATOR);

    assert_eq!(CurvePoint::Identity.to_bytes(), [0u8; 64]);
    assert_eq!(
        CurvePoint::from_bytes(&[0u8; 64]).unwrap(),
        CurvePoint::Identity
    );

    let mut bad = bytes;
    bad[63] ^= 1;
    assert_eq!(
        CurvePoint::from_bytes(&bad),
        Err(CryptoError::PointNotOnCurve)
    );

    let mut non_canonical = bytes;
    non_canonical[..32].copy_from_slice(&[0xff; 32]);
    assert_eq!(
        CurvePoint::from_bytes(&non_canonical),
        Err(CryptoError::InvalidEncoding)
    );
}

#[test]
fn scalar_arithmetic_modulo_order() {
    let n_minus_one = Scalar::from_u256(&(Scalar::ORDER - U256::ONE)).unwrap();

    assert_eq!(n_minus_one + Scalar::ONE, Scalar::ZERO);
    assert_eq!(n_minus_one * n_minus_one, Scalar::ONE);
    assert_eq!(n_minus_one.inverse().unwrap(), n_minus_one);
    assert_eq!(
        Scalar::from_u256(&Scalar::ORDER),
        Err(CryptoError::ScalarOutOfRange)
    );
}

#[test]
fn curve_from_x_accepts_every_residue_abscissa() {
    // x = 1..=4 all have points on the curve.
    for x in 1..=4u64 {
        let point = CurvePoint::from_x(Felt::from(x)).unwrap();

        assert_eq!(point.x(), Some(Felt::from(x)));
        assert!(point.is_on_curve());
    }
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "off-curve point")]
fn curve_multiply_rejects_unchecked_points_in_debug_builds() {
    let off_curve = CurvePoint::Affine {
        x: GENERATOR.x().unwrap(),
        y: GENERATOR.y().unwrap() + Felt::ONE,
    };

    let _ = off_curve.multiply(&U256::from(3u64));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "off-curve point")]
fn curve_add_rejects_unchecked_points_in_debug_builds() {
    let off_curve = CurvePoint::Affine {
        x: Felt::ZERO,
        y: Felt::ZERO,
    };

    let _ = GENERATOR + off_curve;
}
