use crate::rijndael::cipher::inv_mix_columns;
use crate::rijndael::sbox::{RCON, sbox};
use symmetric_cipher::KeyExpansion;

pub const AES_KEY_SIZE: usize = 16;
pub const ROUNDS: usize = 10;
pub const EXPANDED_WORDS: usize = 4 * (ROUNDS + 1);

pub type Word = [u8; 4];
pub type RoundKey = [u8; 16];
pub type AesRoundKeys = [RoundKey; ROUNDS + 1];

/// Расширение ключа: 16 байт → 44 слова.
pub fn expand_key(key: &[u8; AES_KEY_SIZE]) -> [Word; EXPANDED_WORDS] {
    let mut words = [[0u8; 4]; EXPANDED_WORDS];
    for (word, chunk) in words.iter_mut().zip(key.chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    for i in 4..EXPANDED_WORDS {
        let mut temp = words[i - 1];
        if i % 4 == 0 {
            temp.rotate_left(1);
            temp = temp.map(sbox);
            temp[0] ^= RCON[i / 4];
        }
        let previous = words[i - 4];
        words[i] = std::array::from_fn(|j| previous[j] ^ temp[j]);
    }
    words
}

/// Repacks the expanded words into row-major round keys:
/// byte `j` of word `4k + i` lands at `round_keys[k][4 * j + i]`.
pub fn round_keys(key: &[u8; AES_KEY_SIZE]) -> AesRoundKeys {
    let words = expand_key(key);
    let mut keys = [[0u8; 16]; ROUNDS + 1];
    for (k, round_key) in keys.iter_mut().enumerate() {
        for i in 0..4 {
            for j in 0..4 {
                round_key[4 * j + i] = words[4 * k + i][j];
            }
        }
    }
    keys
}

/// Round keys for the equivalent inverse cipher: InvMixColumns applied to rounds 1..9.
pub fn inverse_round_keys(key: &[u8; AES_KEY_SIZE]) -> AesRoundKeys {
    let mut keys = round_keys(key);
    for round_key in &mut keys[1..ROUNDS] {
        inv_mix_columns(round_key);
    }
    keys
}

pub struct AesKeyExpansion;

impl KeyExpansion for AesKeyExpansion {
    type Key = [u8; AES_KEY_SIZE];
    type RoundKeys = AesRoundKeys;

    fn generate_round_keys(&self, key: &[u8; AES_KEY_SIZE]) -> AesRoundKeys {
        round_keys(key)
    }
}

pub struct AesInverseKeyExpansion;

impl KeyExpansion for AesInverseKeyExpansion {
    type Key = [u8; AES_KEY_SIZE];
    type RoundKeys = AesRoundKeys;

    fn generate_round_keys(&self, key: &[u8; AES_KEY_SIZE]) -> AesRoundKeys {
        inverse_round_keys(key)
    }
}
