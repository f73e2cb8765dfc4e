use crate::gf::arithmetic::{gf_inverse, xtime};

/// Forward substitution table.
pub const SBOX: [u8; 256] = build_sbox();

/// Inverse substitution table, `INV_SBOX[SBOX[x]] == x`.
pub const INV_SBOX: [u8; 256] = build_inv_sbox();

/// Round constants: `RCON[i]` is x^(i-1). `RCON[0]` = x⁻¹ = 0x8d is never used by the schedule.
pub const RCON: [u8; 255] = build_rcon();

pub fn sbox(x: u8) -> u8 {
    SBOX[x as usize]
}

pub fn inv_sbox(x: u8) -> u8 {
    INV_SBOX[x as usize]
}

/// Аффинное преобразование FIPS-197:
/// b'_i = b_i ⊕ b_{i+4} ⊕ b_{i+5} ⊕ b_{i+6} ⊕ b_{i+7} ⊕ c_i, c = 0x63
pub const fn affine(b: u8) -> u8 {
    b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4) ^ 0x63
}

/// Обратное аффинное: b_i = b'_{i+2} ⊕ b'_{i+5} ⊕ b'_{i+7} ⊕ d_i, d = 0x05
pub const fn inv_affine(b: u8) -> u8 {
    b.rotate_left(1) ^ b.rotate_left(3) ^ b.rotate_left(6) ^ 0x05
}

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = affine(gf_inverse(i as u8));
        i += 1;
    }
    table
}

const fn build_inv_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = gf_inverse(inv_affine(i as u8));
        i += 1;
    }
    table
}

const fn build_rcon() -> [u8; 255] {
    let mut table = [0u8; 255];
    table[0] = 0x8d;
    let mut i = 1;
    while i < 255 {
        table[i] = xtime(table[i - 1]);
        i += 1;
    }
    table
}
