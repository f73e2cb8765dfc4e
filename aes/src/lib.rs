pub mod gf;
pub mod rijndael;

pub use rijndael::cipher::Aes;
pub use rijndael::key_schedule::{AES_KEY_SIZE, AesRoundKeys};
