//! Арифметика в GF(2⁸) по модулю x⁸ + x⁴ + x³ + x + 1.
//!
//! Elements are bytes, bit i being the coefficient of x^i. Everything here is
//! `const` so the substitution tables can be built at compile time.

/// Low byte of the AES modulus, folded back in when a shift overflows bit 7.
pub const AES_REDUCTION: u8 = 0x1b;

/// Multiplication by x.
pub const fn xtime(a: u8) -> u8 {
    let reduction = if a & 0x80 != 0 { AES_REDUCTION } else { 0 };
    (a << 1) ^ reduction
}

/// Carry-less multiply with reduction (shift-and-add).
pub const fn galois_multiply(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// Быстрое возведение в степень.
pub const fn gf_pow(mut base: u8, mut exp: u32) -> u8 {
    let mut result = 1;
    while exp != 0 {
        if exp & 1 != 0 {
            result = galois_multiply(result, base);
        }
        base = galois_multiply(base, base);
        exp >>= 1;
    }
    result
}

/// Multiplicative inverse, a⁻¹ = a²⁵⁴. Zero maps to zero.
pub const fn gf_inverse(a: u8) -> u8 {
    if a == 0 { 0 } else { gf_pow(a, 254) }
}
