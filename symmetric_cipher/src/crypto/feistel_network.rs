use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::utils::{join_halves, split_block, xor_blocks};

/// A balanced Feistel network over 64-bit blocks.
///
/// The number of rounds is the number of round keys supplied. Decryption is
/// the same loop fed the round keys in reverse order.
pub struct FeistelNetwork<T> {
    transformation: T,
}

impl<T: EncryptionTransformation> FeistelNetwork<T> {
    pub fn new(transformation: T) -> Self {
        Self { transformation }
    }

    pub fn encrypt_with_round_keys(&self, block: &[u8; 8], round_keys: &[T::RoundKey]) -> [u8; 8] {
        self.run(block, round_keys.iter())
    }

    pub fn decrypt_with_round_keys(&self, block: &[u8; 8], round_keys: &[T::RoundKey]) -> [u8; 8] {
        self.run(block, round_keys.iter().rev())
    }

    fn run<'k, I>(&self, block: &[u8; 8], round_keys: I) -> [u8; 8]
    where
        I: Iterator<Item = &'k T::RoundKey>,
        T::RoundKey: 'k,
    {
        let (mut left, mut right) = split_block(block);

        for round_key in round_keys {
            let feistel_out = self.transformation.transform(&right, round_key);
            let new_right = xor_blocks(&left, &feistel_out);
            left = right;
            right = new_right;
        }

        // после последнего раунда половины не меняются местами: R16 || L16
        join_halves(&right, &left)
    }
}
