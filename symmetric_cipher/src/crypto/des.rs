use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use crate::crypto::des_key_expansion::{DesKeyExpansion, DesRoundKeys};
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::des_transformation::DesTransformation;
use crate::crypto::error::{CipherError, Result};
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{odd_parity_bit, permute};
use bitvec::prelude::*;

/// Raw DES key length: 56 significant bits without parity.
pub const DES_RAW_KEY_SIZE: usize = 7;
pub const DES_KEY_SIZE: usize = 8;

/// A parity-extended 64-bit DES key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DesKey([u8; DES_KEY_SIZE]);

impl DesKey {
    /// Spreads 56 raw bits over eight bytes, seven per byte, and appends an
    /// odd-parity bit to each.
    pub fn from_raw(raw: &[u8; DES_RAW_KEY_SIZE]) -> Self {
        let source = raw.view_bits::<Msb0>();
        Self(std::array::from_fn(|i| {
            let byte = source[i * 7..i * 7 + 7]
                .iter()
                .by_vals()
                .fold(0u8, |acc, bit| (acc << 1) | u8::from(bit))
                << 1;
            byte | odd_parity_bit(byte)
        }))
    }

    /// Wraps a standard 8-byte key; its parity bits are ignored by PC-1.
    pub fn from_parity_bytes(bytes: [u8; DES_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(key: &[u8]) -> Result<Self> {
        match key.len() {
            DES_RAW_KEY_SIZE => {
                let mut raw = [0u8; DES_RAW_KEY_SIZE];
                raw.copy_from_slice(key);
                Ok(Self::from_raw(&raw))
            }
            DES_KEY_SIZE => {
                let mut bytes = [0u8; DES_KEY_SIZE];
                bytes.copy_from_slice(key);
                Ok(Self::from_parity_bytes(bytes))
            }
            actual => Err(CipherError::InvalidKeyLength {
                algorithm: DES::NAME,
                expected: DES_RAW_KEY_SIZE,
                actual,
            }),
        }
    }

    pub fn as_bytes(&self) -> &[u8; DES_KEY_SIZE] {
        &self.0
    }

    pub fn has_odd_parity(&self) -> bool {
        self.0.iter().all(|b| b.count_ones() % 2 == 1)
    }
}

pub struct DES {
    feistel_network: FeistelNetwork<DesTransformation>,
    round_keys: DesRoundKeys,
}

impl DES {
    pub fn new(key: &DesKey) -> Self {
        Self {
            feistel_network: FeistelNetwork::new(DesTransformation),
            round_keys: DesKeyExpansion.generate_round_keys(key.as_bytes()),
        }
    }

    pub fn round_keys(&self) -> &DesRoundKeys {
        &self.round_keys
    }

    pub fn encrypt(&self, block: &[u8; 8]) -> [u8; 8] {
        let permuted: [u8; 8] = permute(block, &IP);
        let result = self
            .feistel_network
            .encrypt_with_round_keys(&permuted, &self.round_keys);
        permute(&result, &FP)
    }

    pub fn decrypt(&self, block: &[u8; 8]) -> [u8; 8] {
        let permuted: [u8; 8] = permute(block, &IP);
        let result = self
            .feistel_network
            .decrypt_with_round_keys(&permuted, &self.round_keys);
        permute(&result, &FP)
    }
}

impl CipherAlgorithm for DES {
    type Block = [u8; 8];

    const BLOCK_SIZE: usize = 8;

    fn encrypt_block(&self, block: &[u8; 8]) -> [u8; 8] {
        self.encrypt(block)
    }

    fn decrypt_block(&self, block: &[u8; 8]) -> [u8; 8] {
        self.decrypt(block)
    }
}

impl SymmetricCipher for DES {
    const NAME: &'static str = "DES";
    const KEY_SIZE: usize = DES_RAW_KEY_SIZE;

    /// Accepts a 7-byte raw key or an 8-byte parity-extended one.
    fn with_key(key: &[u8]) -> Result<Self> {
        Ok(Self::new(&DesKey::from_slice(key)?))
    }
}
