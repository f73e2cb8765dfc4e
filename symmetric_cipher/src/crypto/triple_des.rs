use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use crate::crypto::des::{DES, DES_KEY_SIZE, DES_RAW_KEY_SIZE, DesKey};
use crate::crypto::error::{CipherError, Result};

/// Triple-DES in EDE3 form: `E(k3, D(k2, E(k1, P)))`.
pub struct TripleDES {
    stages: [DES; 3],
}

impl TripleDES {
    pub fn new(k1: &DesKey, k2: &DesKey, k3: &DesKey) -> Self {
        Self {
            stages: [DES::new(k1), DES::new(k2), DES::new(k3)],
        }
    }

    pub fn encrypt(&self, block: &[u8; 8]) -> [u8; 8] {
        let [first, second, third] = &self.stages;
        third.encrypt(&second.decrypt(&first.encrypt(block)))
    }

    pub fn decrypt(&self, block: &[u8; 8]) -> [u8; 8] {
        let [first, second, third] = &self.stages;
        first.decrypt(&second.encrypt(&third.decrypt(block)))
    }
}

impl CipherAlgorithm for TripleDES {
    type Block = [u8; 8];

    const BLOCK_SIZE: usize = 8;

    fn encrypt_block(&self, block: &[u8; 8]) -> [u8; 8] {
        self.encrypt(block)
    }

    fn decrypt_block(&self, block: &[u8; 8]) -> [u8; 8] {
        self.decrypt(block)
    }
}

impl SymmetricCipher for TripleDES {
    const NAME: &'static str = "3DES";
    const KEY_SIZE: usize = 3 * DES_RAW_KEY_SIZE;

    /// Accepts three concatenated raw keys (21 bytes) or three parity-extended keys (24 bytes).
    fn with_key(key: &[u8]) -> Result<Self> {
        let part = match key.len() {
            len if len == 3 * DES_RAW_KEY_SIZE => DES_RAW_KEY_SIZE,
            len if len == 3 * DES_KEY_SIZE => DES_KEY_SIZE,
            actual => {
                return Err(CipherError::InvalidKeyLength {
                    algorithm: Self::NAME,
                    expected: Self::KEY_SIZE,
                    actual,
                });
            }
        };

        let k1 = DesKey::from_slice(&key[..part])?;
        let k2 = DesKey::from_slice(&key[part..2 * part])?;
        let k3 = DesKey::from_slice(&key[2 * part..])?;
        Ok(Self::new(&k1, &k2, &k3))
    }
}
