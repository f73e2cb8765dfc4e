use std::io;
use std::path::PathBuf;
use symmetric_cipher::CipherError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error("cannot access key list {path}: {source}")]
    KeyListIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("key list line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("unknown algorithm `{0}` (expected AES, DES or TDES)")]
    UnknownAlgorithm(String),

    #[error("no key named `{0}`")]
    UnknownKey(String),

    #[error("a key named `{0}` already exists")]
    DuplicateName(String),

    #[error("invalid key name `{0}`: names must be non-empty and contain no whitespace")]
    InvalidName(String),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
