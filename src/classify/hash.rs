//! Rolling string hash used for fallback specialty assignment.

/// `hash = hash * 31 + unit` over UTF-16 code units, wrapped to `i32`,
/// returned as its absolute value.
///
/// `i32::MIN` maps to `2^31` rather than overflowing.
pub fn string_hash(s: &str) -> u32 {
    let hash = s
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)));
    hash.unsigned_abs()
}
