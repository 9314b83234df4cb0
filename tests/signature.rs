use stark_crypto::CryptoError;
use stark_crypto::curve::{CurvePoint, GENERATOR, Scalar};
use stark_crypto::field::Felt;
use stark_crypto::primitives::U256;
use stark_crypto::signatures::ecdsa::{
    ELEMENT_UPPER_BOUND, Signature, get_public_key, sign, try_verify, try_verify_signature, verify,
    verify_signature,
};

fn felt(hex: &str) -> Felt {
    Felt::from_hex(hex).unwrap()
}

fn reference_signature() -> (Felt, Signature) {
    let msg = Felt::TWO;
    let sig = Signature::new(
        felt("0x411494b501a98abd8262b0da1351e17899a0c4ef23dd2f96fec5ba847310b20"),
        felt("0x405c3191ab3883ef2b763af35bc5f5d15b3b4e99461d70e84c654a351a7c81b"),
    );

    (msg, sig)
}

#[test]
fn ecdsa_reference_vector_verifies() {
    let (msg, sig) = reference_signature();
    let pk_x = GENERATOR.x().unwrap();

    assert!(verify(&pk_x, &msg, &sig.r, &sig.s));
    assert!(verify_signature(&msg, &sig.r, &sig.s, &GENERATOR));
    assert_eq!(try_verify(&pk_x, &msg, &sig.r, &sig.s), Ok(true));
}

#[test]
fn ecdsa_sign_reproduces_reference_vector() {
    let (msg, expected) = reference_signature();
    let sig = sign(&Felt::ONE, &msg, &Felt::THREE).unwrap();

    assert_eq!(sig, expected);
}

#[test]
fn ecdsa_public_key_derivation() {
    assert_eq!(get_public_key(&Felt::ONE), GENERATOR);
    assert_eq!(
        get_public_key(&Felt::TWO).x(),
        Some(felt(
            "0x759ca09377679ecd535a81e83039658bf40959283187c654c5416f439403cf5"
        ))
    );
}

#[test]
fn ecdsa_sign_and_verify_with_fixed_key() {
    let private_key = felt("0x3c1e9550e66958296d11b60f8e8e7a7ad990d07fa65d5f7652c4a6c87d4e3cc");
    let msg = felt("0x1e542e2da71b3f5d7b4e9d329b4d30ac0b5d6f266ebef7364bf61c39aac35d0");
    let k = felt("0x4e66eb2fd4b5b6e8bbb0b3d8dd5a4bb5f5da0e0e3bf2ccb0b6bb9c16a9e3d2a");

    let public_key = get_public_key(&private_key);
    assert_eq!(
        public_key,
        CurvePoint::new(
            felt("0x77a3b314db07c45076d11f62b6f9e748a39790441823307743cf00d6597ea43"),
            felt("0x54d7beec5ec728223671c627557efc5c9a6508425dc6c900b7741bf60afec06"),
        )
        .unwrap()
    );

    let sig = sign(&private_key, &msg, &k).unwrap();
    assert_eq!(
        sig.r,
        felt("0x1ceb65d86cc7dd0f7eb49fe09cbc8fe7c1c54e3ee5ba921a682eb898bad4fe1")
    );
    assert_eq!(
        sig.s,
        felt("0x28dd35e8353cbedc568cf94423553167697243a4b8112228c03a35f2fde43b6")
    );

    assert!(verify_signature(&msg, &sig.r, &sig.s, &public_key));
    assert!(verify(&public_key.x().unwrap(), &msg, &sig.r, &sig.s));
}

#[test]
fn ecdsa_tampering_is_detected() {
    let (msg, sig) = reference_signature();

    let flipped_r = Felt::try_from(sig.r.to_u256() ^ U256::ONE).unwrap();
    let flipped_s = Felt::try_from(sig.s.to_u256() ^ U256::ONE).unwrap();

    assert!(!verify_signature(&msg, &flipped_r, &sig.s, &GENERATOR));
    assert!(!verify_signature(&msg, &sig.r, &flipped_s, &GENERATOR));
    assert!(!verify_signature(&Felt::THREE, &sig.r, &sig.s, &GENERATOR));
    assert!(!verify_signature(&msg, &sig.r, &sig.s, &GENERATOR.double()));

    assert_eq!(
        try_verify_signature(&Felt::THREE, &sig.r, &sig.s, &GENERATOR),
        Ok(false)
    );
}

#[test]
fn ecdsa_point_form_checks_the_given_y_only() {
    let (msg, sig) = reference_signature();

    assert!(!verify_signature(&msg, &sig.r, &sig.s, &-GENERATOR));

    // The x-coordinate form accepts regardless of which root from_x picks.
    let other = CurvePoint::from_x(GENERATOR.x().unwrap()).unwrap();
    assert!(other == GENERATOR || other == -GENERATOR);
    assert!(verify(&GENERATOR.x().unwrap(), &msg, &sig.r, &sig.s));
}

#[test]
fn ecdsa_component_ranges() {
    let (msg, sig) = reference_signature();
    let bound = Felt::try_from(ELEMENT_UPPER_BOUND).unwrap();
    let order = Felt::try_from(Scalar::ORDER).unwrap();

    assert_eq!(
        try_verify_signature(&msg, &Felt::ZERO, &sig.s, &GENERATOR),
        Err(CryptoError::ScalarOutOfRange)
    );
    assert_eq!(
        try_verify_signature(&msg, &bound, &sig.s, &GENERATOR),
        Err(CryptoError::ScalarOutOfRange)
    );
    assert_eq!(
        try_verify_signature(&msg, &sig.r, &Felt::ZERO, &GENERATOR),
        Err(CryptoError::ScalarOutOfRange)
    );
    assert_eq!(
        try_verify_signature(&msg, &sig.r, &order, &GENERATOR),
        Err(CryptoError::ScalarOutOfRange)
    );
    assert_eq!(
        try_verify_signature(&bound, &sig.r, &sig.s, &GENERATOR),
        Err(CryptoError::ScalarOutOfRange)
    );
    assert_eq!(
        try_verify_signature(&Felt::MAX, &sig.r, &sig.s, &GENERATOR),
        Err(CryptoError::ScalarOutOfRange)
    );

    assert!(!verify_signature(&msg, &Felt::ZERO, &sig.s, &GENERATOR));
    assert!(!verify(&GENERATOR.x().unwrap(), &msg, &sig.r, &order));
}

#[test]
fn ecdsa_checked_signature_construction() {
    let (_, sig) = reference_signature();
    let bound = Felt::try_from(ELEMENT_UPPER_BOUND).unwrap();
    let order = Felt::try_from(Scalar::ORDER).unwrap();
    let largest_s = Felt::try_from(Scalar::ORDER - U256::ONE).unwrap();

    assert_eq!(Signature::try_new(sig.r, sig.s), Ok(sig));
    assert_eq!(Signature::try_new(sig.r, largest_s), Ok(Signature::new(sig.r, largest_s)));

    for (r, s) in [
        (Felt::ZERO, sig.s),
        (bound, sig.s),
        (sig.r, Felt::ZERO),
        (sig.r, order),
    ] {
        assert_eq!(Signature::try_new(r, s), Err(CryptoError::ScalarOutOfRange));
    }
}

#[test]
fn ecdsa_inverse_of_s_must_be_bounded() {
    let (msg, sig) = reference_signature();

    // (n − 1)⁻¹ = n − 1, which is not below 2²⁵¹.
    let s = Felt::try_from(Scalar::ORDER - U256::ONE).unwrap();

    assert_eq!(
        try_verify_signature(&msg, &sig.r, &s, &GENERATOR),
        Err(CryptoError::ScalarOutOfRange)
    );
}

#[test]
fn ecdsa_public_key_validation() {
    let (msg, sig) = reference_signature();
    let off_curve = CurvePoint::Affine {
        x: GENERATOR.x().unwrap(),
        y: GENERATOR.y().unwrap() + Felt::ONE,
    };

    assert_eq!(
        try_verify_signature(&msg, &sig.r, &sig.s, &CurvePoint::Identity),
        Err(CryptoError::PointNotOnCurve)
    );
    assert_eq!(
        try_verify_signature(&msg, &sig.r, &sig.s, &off_curve),
        Err(CryptoError::PointNotOnCurve)
    );
    assert_eq!(
        try_verify(&Felt::from(5u64), &msg, &sig.r, &sig.s),
        Err(CryptoError::PointNotOnCurve)
    );
    assert!(!verify(&Felt::from(5u64), &msg, &sig.r, &sig.s));
}

#[test]
fn ecdsa_ranges_are_checked_before_the_key() {
    let (msg, sig) = reference_signature();

    assert_eq!(
        try_verify_signature(&msg, &Felt::ZERO, &sig.s, &CurvePoint::Identity),
        Err(CryptoError::ScalarOutOfRange)
    );
    assert_eq!(
        try_verify(&Felt::from(5u64), &msg, &sig.r, &Felt::ZERO),
        Err(CryptoError::ScalarOutOfRange)
    );
}

#[test]
fn ecdsa_sign_rejects_bad_nonces() {
    let msg = Felt::TWO;

    assert_eq!(
        sign(&Felt::ONE, &msg, &Felt::ZERO),
        Err(CryptoError::ScalarOutOfRange)
    );
    assert_eq!(
        sign(
            &Felt::ONE,
            &msg,
            &Felt::try_from(Scalar::ORDER).unwrap()
        ),
        Err(CryptoError::ScalarOutOfRange)
    );
    assert_eq!(
        sign(&Felt::ONE, &Felt::MAX, &Felt::THREE),
        Err(CryptoError::ScalarOutOfRange)
    );
}

fn flip(value: &Felt, bit: u32) -> Felt {
    Felt::try_from(value.to_u256() ^ (U256::ONE << bit)).unwrap()
}

#[test]
fn ecdsa_single_bit_flips_are_rejected() {
    let (msg, sig) = reference_signature();
    let (g_x, g_y) = (GENERATOR.x().unwrap(), GENERATOR.y().unwrap());

    for bit in (0..251).step_by(10) {
        assert!(!verify_signature(&msg, &flip(&sig.r, bit), &sig.s, &GENERATOR), "r bit {bit}");
        assert!(!verify_signature(&msg, &sig.r, &flip(&sig.s, bit), &GENERATOR), "s bit {bit}");
        assert!(!verify_signature(&flip(&msg, bit), &sig.r, &sig.s, &GENERATOR), "msg bit {bit}");
        assert!(!verify(&flip(&g_x, bit), &msg, &sig.r, &sig.s), "key x bit {bit}");

        let tampered_key = CurvePoint::Affine { x: g_x, y: flip(&g_y, bit) };
        assert!(!verify_signature(&msg, &sig.r, &sig.s, &tampered_key), "key y bit {bit}");
    }
}
