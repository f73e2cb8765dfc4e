use crate::gf::arithmetic::galois_multiply;
use crate::rijndael::key_schedule::{
    AES_KEY_SIZE, AesInverseKeyExpansion, AesKeyExpansion, AesRoundKeys, ROUNDS,
};
use crate::rijndael::sbox::{INV_SBOX, SBOX};
use log::debug;
use symmetric_cipher::{CipherAlgorithm, CipherError, KeyExpansion, SymmetricCipher};

pub const AES_BLOCK_SIZE: usize = 16;

/// 4×4 state, `state[row * 4 + col]`.
pub type State = [u8; AES_BLOCK_SIZE];

const MIX: [[u8; 4]; 4] = [[2, 3, 1, 1], [1, 2, 3, 1], [1, 1, 2, 3], [3, 1, 1, 2]];
const INV_MIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Column-major block bytes (FIPS-197 order) to row-major state and back.
pub fn transpose(block: &[u8; AES_BLOCK_SIZE]) -> State {
    std::array::from_fn(|k| block[(k % 4) * 4 + k / 4])
}

pub fn sub_bytes(state: &mut State) {
    for byte in state.iter_mut() {
        *byte = SBOX[*byte as usize];
    }
}

pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.iter_mut() {
        *byte = INV_SBOX[*byte as usize];
    }
}

/// Row r is rotated left by r.
pub fn shift_rows(state: &mut State) {
    for (r, row) in state.chunks_exact_mut(4).enumerate() {
        row.rotate_left(r);
    }
}

pub fn inv_shift_rows(state: &mut State) {
    for (r, row) in state.chunks_exact_mut(4).enumerate() {
        row.rotate_right(r);
    }
}

fn mix_with(state: &mut State, matrix: &[[u8; 4]; 4]) {
    for col in 0..4 {
        let a: [u8; 4] = std::array::from_fn(|row| state[row * 4 + col]);
        for (row, coefficients) in matrix.iter().enumerate() {
            state[row * 4 + col] = coefficients
                .iter()
                .zip(a.iter())
                .fold(0, |acc, (&c, &x)| acc ^ galois_multiply(c, x));
        }
    }
}

pub fn mix_columns(state: &mut State) {
    mix_with(state, &MIX);
}

pub fn inv_mix_columns(state: &mut State) {
    mix_with(state, &INV_MIX);
}

pub fn add_round_key(state: &mut State, round_key: &[u8; 16]) {
    for (byte, key) in state.iter_mut().zip(round_key) {
        *byte ^= key;
    }
}

/// AES-128. Both round-key sets are derived once in the constructor.
pub struct Aes {
    round_keys: AesRoundKeys,
    inverse_round_keys: AesRoundKeys,
}

impl Aes {
    pub fn new(key: &[u8; AES_KEY_SIZE]) -> Self {
        debug!("AES: deriving {} round keys", ROUNDS + 1);
        Self {
            round_keys: AesKeyExpansion.generate_round_keys(key),
            inverse_round_keys: AesInverseKeyExpansion.generate_round_keys(key),
        }
    }

    pub fn round_keys(&self) -> &AesRoundKeys {
        &self.round_keys
    }

    pub fn inverse_round_keys(&self) -> &AesRoundKeys {
        &self.inverse_round_keys
    }

    /// Encrypts a row-major state in place.
    pub fn encrypt_state(&self, state: &mut State) {
        add_round_key(state, &self.round_keys[0]);
        for round_key in &self.round_keys[1..ROUNDS] {
            sub_bytes(state);
            shift_rows(state);
            mix_columns(state);
            add_round_key(state, round_key);
        }
        // последний раунд без MixColumns
        sub_bytes(state);
        shift_rows(state);
        add_round_key(state, &self.round_keys[ROUNDS]);
    }

    /// Equivalent inverse cipher over the pre-mixed inverse round keys.
    pub fn decrypt_state(&self, state: &mut State) {
        add_round_key(state, &self.inverse_round_keys[ROUNDS]);
        inv_sub_bytes(state);
        inv_shift_rows(state);
        for round_key in self.inverse_round_keys[1..ROUNDS].iter().rev() {
            inv_mix_columns(state);
            add_round_key(state, round_key);
            inv_sub_bytes(state);
            inv_shift_rows(state);
        }
        add_round_key(state, &self.inverse_round_keys[0]);
    }

    pub fn encrypt(&self, block: &[u8; AES_BLOCK_SIZE]) -> [u8; AES_BLOCK_SIZE] {
        let mut state = transpose(block);
        self.encrypt_state(&mut state);
        transpose(&state)
    }

    pub fn decrypt(&self, block: &[u8; AES_BLOCK_SIZE]) -> [u8; AES_BLOCK_SIZE] {
        let mut state = transpose(block);
        self.decrypt_state(&mut state);
        transpose(&state)
    }
}

impl CipherAlgorithm for Aes {
    type Block = [u8; AES_BLOCK_SIZE];

    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn encrypt_block(&self, block: &Self::Block) -> Self::Block {
        self.encrypt(block)
    }

    fn decrypt_block(&self, block: &Self::Block) -> Self::Block {
        self.decrypt(block)
    }
}

impl SymmetricCipher for Aes {
    const NAME: &'static str = "AES";
    const KEY_SIZE: usize = AES_KEY_SIZE;

    fn with_key(key: &[u8]) -> symmetric_cipher::crypto::error::Result<Self> {
        let key: &[u8; AES_KEY_SIZE] =
            key.try_into().map_err(|_| CipherError::InvalidKeyLength {
                algorithm: Self::NAME,
                expected: AES_KEY_SIZE,
                actual: key.len(),
            })?;
        Ok(Self::new(key))
    }
}
