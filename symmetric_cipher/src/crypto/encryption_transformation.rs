/// Round function of a Feistel network over 32-bit halves.
pub trait EncryptionTransformation {
    type RoundKey;

    fn transform(&self, half: &[u8; 4], round_key: &Self::RoundKey) -> [u8; 4];
}
