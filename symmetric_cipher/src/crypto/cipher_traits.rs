use crate::crypto::error::Result;

/// A keyed block cipher operating on one fixed-size block at a time.
pub trait CipherAlgorithm {
    type Block: Copy + Default + AsRef<[u8]> + AsMut<[u8]>;

    const BLOCK_SIZE: usize;

    fn encrypt_block(&self, block: &Self::Block) -> Self::Block;
    fn decrypt_block(&self, block: &Self::Block) -> Self::Block;
}

/// A cipher that can be built from raw key bytes.
///
/// Round keys are derived once in `with_key` and reused for every block.
pub trait SymmetricCipher: CipherAlgorithm + Sized {
    const NAME: &'static str;
    const KEY_SIZE: usize;

    fn with_key(key: &[u8]) -> Result<Self>;
}
