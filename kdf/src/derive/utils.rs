//! Derivation utility functions

/// Constant-time equality for derived key material
///
/// Prevents timing attacks when a caller compares a freshly derived key
/// against one presented to it. Differing lengths compare unequal.
#[must_use]
#[inline]
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    use subtle::ConstantTimeEq;
    a.ct_eq(b).into()
}
