//! Montgomery modular arithmetic over 256-bit moduli.
//!
//! Both the base field (the Stark prime `p`) and the scalar field (the
//! curve order `n`) are odd moduli below 2²⁵², so they share one
//! implementation. A residue `a` is held as `a·R mod m` with `R = 2²⁵⁶`;
//! that value is itself a unique representative in `[0, m)`, so equality of
//! Montgomery forms is equality of residues.
//!
//! Multiplication uses the CIOS (coarsely integrated operand scanning)
//! method with a single conditional subtraction. Everything here is a
//! `const fn` so that curve points and hash constants can be evaluated at
//! compile time.
//!
//! None of these routines are constant time with respect to their inputs.

use super::U256;

/// Parameters of an odd modulus `m < 2²⁵⁵` in Montgomery representation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Modulus {
    /// The modulus itself.
    pub(crate) value: U256,
    /// `R mod m`, the Montgomery form of one.
    pub(crate) r: U256,
    /// `R² mod m`, used to enter the Montgomery domain.
    pub(crate) r2: U256,
    /// `−m⁻¹ mod 2⁶⁴`.
    pub(crate) inv: u64,
}

/// `a + b·c + carry`, split into (low, high) words.
#[inline(always)]
const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let wide = a as u128 + (b as u128) * (c as u128) + carry as u128;
    (wide as u64, (wide >> 64) as u64)
}

/// `a + b + carry`, split into (low, high) words.
#[inline(always)]
const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let wide = a as u128 + b as u128 + carry as u128;
    (wide as u64, (wide >> 64) as u64)
}

/// `(a + b) mod m` for `a, b < m`.
pub(crate) const fn add(a: &U256, b: &U256, m: &Modulus) -> U256 {
    let (sum, carry) = a.overflowing_add(b);

    if carry || !sum.const_lt(&m.value) {
        sum.overflowing_sub(&m.value).0
    } else {
        sum
    }
}

/// `(a − b) mod m` for `a, b < m`.
pub(crate) const fn sub(a: &U256, b: &U256, m: &Modulus) -> U256 {
    let (diff, borrow) = a.overflowing_sub(b);

    if borrow {
        diff.overflowing_add(&m.value).0
    } else {
        diff
    }
}

/// `−a mod m` for `a < m`.
pub(crate) const fn neg(a: &U256, m: &Modulus) -> U256 {
    if a.is_zero() {
        U256::ZERO
    } else {
        m.value.overflowing_sub(a).0
    }
}

/// Montgomery product `a·b·R⁻¹ mod m`.
///
/// Requires `a·b < m·R`, which holds whenever one operand is below `m` and
/// the other is any 256-bit value. The result is fully reduced.
pub(crate) const fn mul(a: &U256, b: &U256, m: &Modulus) -> U256 {
    let a = a.0;
    let b = b.0;
    let n = m.value.0;
    let mut t = [0u64; 6];
    let mut i = 0;

    while i < 4 {
        let mut carry = 0u64;
        let mut j = 0;

        while j < 4 {
            let (lo, hi) = mac(t[j], a[j], b[i], carry);
            t[j] = lo;
            carry = hi;
            j += 1;
        }

        let (lo, hi) = adc(t[4], carry, 0);
        t[4] = lo;
        t[5] = hi;

        let k = t[0].wrapping_mul(m.inv);
        let (_, mut carry) = mac(t[0], k, n[0], 0);
        let mut j = 1;

        while j < 4 {
            let (lo, hi) = mac(t[j], k, n[j], carry);
            t[j - 1] = lo;
            carry = hi;
            j += 1;
        }

        let (lo, hi) = adc(t[4], carry, 0);
        t[3] = lo;
        t[4] = t[5] + hi;
        t[5] = 0;

        i += 1;
    }

    let result = U256([t[0], t[1], t[2], t[3]]);

    if t[4] != 0 || !result.const_lt(&m.value) {
        result.overflowing_sub(&m.value).0
    } else {
        result
    }
}

/// Maps any 256-bit integer to the Montgomery form of `value mod m`.
pub(crate) const fn to_montgomery(value: &U256, m: &Modulus) -> U256 {
    mul(value, &m.r2, m)
}

/// Maps a Montgomery form back to the canonical integer in `[0, m)`.
pub(crate) const fn from_montgomery(value: &U256, m: &Modulus) -> U256 {
    mul(value, &U256::ONE, m)
}

/// Square-and-multiply exponentiation of a Montgomery form by a plain
/// integer exponent, scanning from the most significant bit.
pub(crate) const fn pow(base: &U256, exponent: &U256, m: &Modulus) -> U256 {
    let mut acc = m.r;
    let mut i = exponent.bits() as usize;

    while i > 0 {
        i -= 1;
        acc = mul(&acc, &acc, m);

        if exponent.bit(i) {
            acc = mul(&acc, base, m);
        }
    }

    acc
}

/// Fermat inverse `a^(m−2)` of a Montgomery form; maps zero to zero.
///
/// Only valid for prime moduli, which both moduli of this crate are.
pub(crate) const fn invert(a: &U256, m: &Modulus) -> U256 {
    let exponent = m.value.overflowing_sub(&U256([2, 0, 0, 0])).0;
    pow(a, &exponent, m)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2^61 - 1 is a Mersenne prime; its Montgomery constants are easy to
    // check by hand: R = 2^256 ≡ 2^(256 mod 61) = 2^12.
    const M61: Modulus = Modulus {
        value: U256([0x1fff_ffff_ffff_ffff, 0, 0, 0]),
        r: U256([1 << 12, 0, 0, 0]),
        r2: U256([1 << 24, 0, 0, 0]),
        inv: 0x2000_0000_0000_0001,
    };

    #[test]
    fn round_trip_through_montgomery_domain() {
        let a = U256::from(123_456_789u64);
        let mont = to_montgomery(&a, &M61);

        assert_eq!(from_montgomery(&mont, &M61), a);
    }

    #[test]
    fn small_modulus_products_match_native() {
        let p = 0x1fff_ffff_ffff_ffffu128;
        let a = 0x1234_5678_9abc_def0u128 % p;
        let b = 0x0fed_cba9_8765_4321u128 % p;

        let ma = to_montgomery(&U256::from(a), &M61);
        let mb = to_montgomery(&U256::from(b), &M61);
        let product = from_montgomery(&mul(&ma, &mb, &M61), &M61);

        assert_eq!(product, U256::from(a * b % p));
    }

    #[test]
    fn add_sub_neg_wrap_around_modulus() {
        let max = to_montgomery(&U256::from(0x1fff_ffff_ffff_fffeu64), &M61);
        let one = M61.r;

        assert_eq!(add(&max, &one, &M61), U256::ZERO);
        assert_eq!(sub(&U256::ZERO, &one, &M61), max);
        assert_eq!(neg(&one, &M61), max);
        assert_eq!(neg(&U256::ZERO, &M61), U256::ZERO);
    }

    #[test]
    fn inverse_multiplies_to_one() {
        let a = to_montgomery(&U256::from(987_654_321u64), &M61);
        let inv = invert(&a, &M61);

        assert_eq!(mul(&a, &inv, &M61), M61.r);
        assert_eq!(invert(&U256::ZERO, &M61), U256::ZERO);
    }
}
