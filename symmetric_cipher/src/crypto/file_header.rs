use crate::crypto::cipher_io::read_block;
use crate::crypto::error::{CipherError, HeaderMismatch, Result};
use crc32fast::Hasher;
use std::io::{Read, Seek, SeekFrom};

pub const HEADER_SIZE: usize = 48;
pub const FILE_NAME_CAPACITY: usize = 36;

const LENGTH_OFFSET: usize = FILE_NAME_CAPACITY;
const CHECKSUM_OFFSET: usize = LENGTH_OFFSET + 8;

const _: () = assert!(HEADER_SIZE % 8 == 0 && HEADER_SIZE % 16 == 0);
const _: () = assert!(CHECKSUM_OFFSET + 4 == HEADER_SIZE);

/// Leading record of every encrypted file.
///
/// Layout: name (NUL-padded) | length, u64 LE | CRC-32, u32 LE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    file_name: String,
    byte_length: u64,
    checksum: u32,
}

impl FileHeader {
    pub fn new(file_name: &str, byte_length: u64, checksum: u32) -> Self {
        Self {
            file_name: truncate_name(file_name).to_owned(),
            byte_length,
            checksum,
        }
    }

    /// Measures the whole stream and rewinds it to the start.
    pub fn create<R: Read + Seek + ?Sized>(stream: &mut R, file_name: &str) -> Result<Self> {
        stream.seek(SeekFrom::Start(0))?;
        let (byte_length, checksum) = measure(stream)?;
        stream.seek(SeekFrom::Start(0))?;
        Ok(Self::new(file_name, byte_length, checksum))
    }

    /// Checks a recovered plaintext against the declared length and checksum.
    pub fn verify<R: Read + ?Sized>(&self, stream: &mut R) -> Result<()> {
        let (byte_length, checksum) = measure(stream)?;
        if byte_length != self.byte_length {
            return Err(CipherError::HeaderMismatch(HeaderMismatch::Length {
                expected: self.byte_length,
                actual: byte_length,
            }));
        }
        if checksum != self.checksum {
            return Err(CipherError::HeaderMismatch(HeaderMismatch::Checksum {
                expected: self.checksum,
                actual: checksum,
            }));
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        let name = self.file_name.as_bytes();
        bytes[..name.len()].copy_from_slice(name);
        bytes[LENGTH_OFFSET..CHECKSUM_OFFSET].copy_from_slice(&self.byte_length.to_le_bytes());
        bytes[CHECKSUM_OFFSET..].copy_from_slice(&self.checksum.to_le_bytes());
        bytes
    }

    pub fn from_bytes(bytes: &[u8; HEADER_SIZE]) -> Self {
        let name = &bytes[..FILE_NAME_CAPACITY];
        let end = name.iter().position(|&b| b == 0).unwrap_or(FILE_NAME_CAPACITY);

        let mut length = [0u8; 8];
        length.copy_from_slice(&bytes[LENGTH_OFFSET..CHECKSUM_OFFSET]);
        let mut checksum = [0u8; 4];
        checksum.copy_from_slice(&bytes[CHECKSUM_OFFSET..]);

        Self {
            file_name: String::from_utf8_lossy(&name[..end]).into_owned(),
            byte_length: u64::from_le_bytes(length),
            checksum: u32::from_le_bytes(checksum),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn byte_length(&self) -> u64 {
        self.byte_length
    }

    pub fn checksum(&self) -> u32 {
        self.checksum
    }
}

fn measure<R: Read + ?Sized>(stream: &mut R) -> Result<(u64, u32)> {
    let mut hasher = Hasher::new();
    let mut buffer = [0u8; 8192];
    let mut length = 0u64;
    loop {
        let n = read_block(stream, &mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
        length += n as u64;
    }
    Ok((length, hasher.finalize()))
}

fn truncate_name(name: &str) -> &str {
    if name.len() <= FILE_NAME_CAPACITY {
        return name;
    }
    let mut end = FILE_NAME_CAPACITY;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}
