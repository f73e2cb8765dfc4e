use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CipherError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{algorithm} key must be {expected} bytes, got {actual}")]
    InvalidKeyLength {
        algorithm: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("initialization vector must be {expected} bytes, got {actual}")]
    InvalidIvLength { expected: usize, actual: usize },

    #[error("CBC mode requires an initialization vector")]
    MissingIv,

    #[error("unknown cipher mode `{0}` (expected ECB or CBC)")]
    UnknownMode(String),

    #[error("ciphertext ends before the {expected}-byte file header ({actual} bytes read)")]
    TruncatedHeader { expected: usize, actual: usize },

    #[error("decrypted output does not match the file header: {0}")]
    HeaderMismatch(HeaderMismatch),
}

/// Расхождение между восстановленным файлом и заголовком.
///
/// Wrong key and corrupted ciphertext both end up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderMismatch {
    #[error("length {actual} differs from declared {expected}")]
    Length { expected: u64, actual: u64 },

    #[error("checksum {actual:08x} differs from declared {expected:08x}")]
    Checksum { expected: u32, actual: u32 },
}

pub type Result<T> = std::result::Result<T, CipherError>;
