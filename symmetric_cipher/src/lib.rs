pub mod crypto;
pub use crypto::cipher_context::*;
pub use crypto::cipher_traits::*;
pub use crypto::cipher_types::*;
pub use crypto::des::{DES, DesKey};
pub use crypto::error::{CipherError, HeaderMismatch};
pub use crypto::file_header::{FileHeader, HEADER_SIZE};
pub use crypto::file_mode::{decrypt_file, decrypt_with_header, encrypt_file, encrypt_with_header};
pub use crypto::key_expansion::KeyExpansion;
pub use crypto::triple_des::TripleDES;
