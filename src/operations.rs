use crate::error::Result;
use crate::keys::{KeyEntry, KeyMaterial};
use log::debug;
use rijndael::Aes;
use std::path::Path;
use symmetric_cipher::crypto::des::DesKey;
use symmetric_cipher::{
    CipherAlgorithm, CipherContext, CipherMode, DES, FileHeader, TripleDES, decrypt_file, encrypt_file,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Runs one file operation with the cipher, mode and IV of `entry`.
pub fn process_file(
    entry: &KeyEntry,
    direction: Direction,
    input: &Path,
    output: &Path,
) -> Result<FileHeader> {
    debug!(
        "{direction:?} {} -> {} with {} {} key `{}`",
        input.display(),
        output.display(),
        entry.algorithm(),
        entry.mode,
        entry.name
    );

    let (mode, iv) = (entry.mode, entry.iv.as_deref());
    match &entry.material {
        KeyMaterial::Aes(key) => run(Aes::new(key), mode, iv, direction, input, output),
        KeyMaterial::Des(key) => {
            run(DES::new(&DesKey::from_raw(key)), mode, iv, direction, input, output)
        }
        KeyMaterial::TripleDes([k1, k2, k3]) => {
            let cipher = TripleDES::new(
                &DesKey::from_raw(k1),
                &DesKey::from_raw(k2),
                &DesKey::from_raw(k3),
            );
            run(cipher, mode, iv, direction, input, output)
        }
    }
}

fn run<C: CipherAlgorithm>(
    cipher: C,
    mode: CipherMode,
    iv: Option<&[u8]>,
    direction: Direction,
    input: &Path,
    output: &Path,
) -> Result<FileHeader> {
    let context = CipherContext::new(cipher, mode, iv)?;
    let header = match direction {
        Direction::Encrypt => encrypt_file(&context, input, output)?,
        Direction::Decrypt => decrypt_file(&context, input, output)?,
    };
    Ok(header)
}
