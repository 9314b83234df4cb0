/// Constant-time comparison utilities.
///
/// Implementations must not let execution time depend on where (or
/// whether) the operands differ.
pub trait ConstantTimeEq {
    /// Returns `true` if `self == other`, in constant time.
    ///
    /// This method must not introduce data-dependent branches or early exits.
    fn ct_eq(&self, other: &Self) -> bool;
}

impl ConstantTimeEq for [u8; 32] {
    /// All bytes are XORed and accumulated before comparison, so the
    /// running time does not depend on the position of the first difference.
    #[inline(never)]
    fn ct_eq(&self, other: &Self) -> bool {
        self.iter()
            .zip(other)
            .map(|(a, b)| a ^ b)
            .fold(0, |acc, v| acc | v)
            == 0
    }
}

#[cfg(test)]
mod tests {
    use super::ConstantTimeEq;

    #[test]
    fn detects_single_byte_difference() {
        let a = [7u8; 32];
        let mut b = a;

        assert!(a.ct_eq(&b));

        b[31] ^= 1;
        assert!(!a.ct_eq(&b));
    }
}
