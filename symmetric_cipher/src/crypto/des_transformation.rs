use crate::crypto::des_key_expansion::DesSubKey;
use crate::crypto::des_tables::{E, P, S_BOXES};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::utils::{bits_to_value, permute, xor_blocks};
use bitvec::prelude::*;

/// The DES round function `f(R, K)`.
pub struct DesTransformation;

impl DesTransformation {
    /// Row from the outer two bits of a 6-bit group, column from the inner four.
    fn substitute(sbox: &[u8; 64], group: u8) -> u8 {
        let row = ((group & 0b10_0000) >> 4) | (group & 0b1);
        let column = (group >> 1) & 0x0F;
        sbox[usize::from(row * 16 + column)]
    }
}

impl EncryptionTransformation for DesTransformation {
    type RoundKey = DesSubKey;

    fn transform(&self, half: &[u8; 4], round_key: &DesSubKey) -> [u8; 4] {
        // 1. Expansion
        let expanded: [u8; 6] = permute(half, &E);

        // 2. XOR
        let mixed = xor_blocks(&expanded, round_key);

        // 3. S-boxes
        let mut substituted = [0u8; 4];
        {
            let out = substituted.view_bits_mut::<Msb0>();
            let groups = mixed.view_bits::<Msb0>().chunks(6);
            for (index, (group, sbox)) in groups.zip(S_BOXES.iter()).enumerate() {
                let value = Self::substitute(sbox, bits_to_value(group));
                for bit in 0..4 {
                    out.set(index * 4 + bit, (value >> (3 - bit)) & 1 == 1);
                }
            }
        }

        // 4. P-permutation
        permute(&substituted, &P)
    }
}
