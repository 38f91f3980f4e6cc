//! SHA-256 Logical Functions
//!
//! The six functions of FIPS PUB 180-4 section 4.1.2, over 32-bit words.
//! All arithmetic in callers is wrapping; these helpers are pure bit logic.

/// Right rotate a 32-bit word
#[inline(always)]
pub fn rotr(x: u32, n: u32) -> u32 {
    x.rotate_right(n)
}

/// SHA-256 σ₀ function (message schedule)
#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    rotr(x, 7) ^ rotr(x, 18) ^ (x >> 3)
}

/// SHA-256 σ₁ function (message schedule)
#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    rotr(x, 17) ^ rotr(x, 19) ^ (x >> 10)
}

/// SHA-256 Σ₀ function (compression)
#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

/// SHA-256 Σ₁ function (compression)
#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

/// SHA-256 Ch function: for each bit, `x` chooses between `y` and `z`
#[inline(always)]
pub fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ ((!x) & z)
}

/// SHA-256 Maj function: bitwise majority vote
#[inline(always)]
pub fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}
