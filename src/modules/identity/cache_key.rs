/// Deterministic non-negative key derived from a canonical identity string.
pub type CacheKey = u32;

/// Fold the string into a wrapping 32-bit accumulator, `hash * 31 + unit`
/// per UTF-16 code unit, and return the absolute value. Collisions are
/// tolerated downstream (last writer wins in the store).
pub fn compute_key(canonical: &str) -> CacheKey {
    let mut hash: i32 = 0;
    for unit in canonical.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}
