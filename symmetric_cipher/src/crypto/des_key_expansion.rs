use crate::crypto::des_tables::{PC1, PC2, SHIFT_BITS};
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{permute, rotate_half_left};
use bitvec::prelude::*;

pub type DesSubKey = [u8; 6];
pub type DesRoundKeys = [DesSubKey; 16];

pub struct DesKeyExpansion;

impl DesKeyExpansion {
    /// Splits the 56-bit PC-1 output into the 28-bit halves C and D.
    fn split(permuted: &[u8; 7]) -> ([u8; 4], [u8; 4]) {
        let bits = permuted.view_bits::<Msb0>();
        let mut c = [0u8; 4];
        let mut d = [0u8; 4];
        c.view_bits_mut::<Msb0>()[..28].copy_from_bitslice(&bits[..28]);
        d.view_bits_mut::<Msb0>()[..28].copy_from_bitslice(&bits[28..]);
        (c, d)
    }

    fn concat(c: &[u8; 4], d: &[u8; 4]) -> [u8; 7] {
        let mut cd = [0u8; 7];
        let bits = cd.view_bits_mut::<Msb0>();
        bits[..28].copy_from_bitslice(&c.view_bits::<Msb0>()[..28]);
        bits[28..].copy_from_bitslice(&d.view_bits::<Msb0>()[..28]);
        cd
    }
}

impl KeyExpansion for DesKeyExpansion {
    type Key = [u8; 8];
    type RoundKeys = DesRoundKeys;

    fn generate_round_keys(&self, key: &[u8; 8]) -> DesRoundKeys {
        // PC-1: 64 бита ключа → 56 бит, биты чётности отбрасываются
        let permuted: [u8; 7] = permute(key, &PC1);
        let (mut c, mut d) = Self::split(&permuted);

        let mut round_keys = [[0u8; 6]; 16];
        for (round_key, &shift) in round_keys.iter_mut().zip(SHIFT_BITS.iter()) {
            rotate_half_left(&mut c, shift);
            rotate_half_left(&mut d, shift);
            *round_key = permute(&Self::concat(&c, &d), &PC2);
        }
        round_keys
    }
}
