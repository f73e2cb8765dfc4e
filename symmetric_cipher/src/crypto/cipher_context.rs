use crate::crypto::cipher_io::read_block;
use crate::crypto::cipher_traits::CipherAlgorithm;
use crate::crypto::cipher_types::CipherMode;
use crate::crypto::error::{CipherError, Result};
use crate::crypto::utils::xor_in_place;
use log::{debug, trace, warn};
use rand::RngCore;
use std::io::{Read, Write};

/// A cipher bound to a chaining mode and, for CBC, an initialization vector.
///
/// The cipher value carries its round keys, so every block processed through
/// one context uses the same key schedule.
pub struct CipherContext<C: CipherAlgorithm> {
    algorithm: C,
    mode: CipherMode,
    iv: Option<C::Block>,
}

impl<C: CipherAlgorithm> CipherContext<C> {
    pub fn new(algorithm: C, mode: CipherMode, iv: Option<&[u8]>) -> Result<Self> {
        let iv = match (mode, iv) {
            (CipherMode::ECB, Some(_)) => {
                debug!("ECB mode ignores the initialization vector");
                None
            }
            (CipherMode::ECB, None) => None,
            (CipherMode::CBC, None) => return Err(CipherError::MissingIv),
            (CipherMode::CBC, Some(bytes)) => {
                if bytes.len() != C::BLOCK_SIZE {
                    return Err(CipherError::InvalidIvLength {
                        expected: C::BLOCK_SIZE,
                        actual: bytes.len(),
                    });
                }
                let mut block = C::Block::default();
                block.as_mut().copy_from_slice(bytes);
                Some(block)
            }
        };

        Ok(Self { algorithm, mode, iv })
    }

    pub fn algorithm(&self) -> &C {
        &self.algorithm
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    pub fn block_size(&self) -> usize {
        C::BLOCK_SIZE
    }

    /// Starts a fresh chain for one encryption pass.
    pub fn encryptor(&self) -> BlockChain<'_, C> {
        self.chain()
    }

    /// Starts a fresh chain for one decryption pass.
    pub fn decryptor(&self) -> BlockChain<'_, C> {
        self.chain()
    }

    fn chain(&self) -> BlockChain<'_, C> {
        BlockChain {
            algorithm: &self.algorithm,
            previous: self.iv,
        }
    }

    /// Encrypts a buffer, zero-padding the last partial block.
    pub fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        let mut buffer = data.to_vec();
        buffer.resize(padded_len(data.len(), C::BLOCK_SIZE), 0);
        self.encryptor().encrypt_slice(&mut buffer);
        buffer
    }

    /// Decrypts a buffer of whole blocks. The caller strips padding.
    pub fn decrypt(&self, data: &[u8]) -> Vec<u8> {
        let mut buffer = data.to_vec();
        if data.len() % C::BLOCK_SIZE != 0 {
            warn!(
                "ciphertext length {} is not a multiple of {}, padding with zeros",
                data.len(),
                C::BLOCK_SIZE
            );
            buffer.resize(padded_len(data.len(), C::BLOCK_SIZE), 0);
        }
        self.decryptor().decrypt_slice(&mut buffer);
        buffer
    }

    pub fn encrypt_stream<R, W>(&self, reader: &mut R, writer: &mut W) -> Result<u64>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        self.encryptor().encrypt_stream(reader, writer)
    }

    pub fn decrypt_stream<R, W>(
        &self,
        reader: &mut R,
        writer: &mut W,
        declared_length: Option<u64>,
    ) -> Result<u64>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        self.decryptor().decrypt_stream(reader, writer, declared_length)
    }
}

/// A fresh random initialization vector for `C`.
pub fn random_iv<C: CipherAlgorithm>() -> C::Block {
    let mut iv = C::Block::default();
    rand::rng().fill_bytes(iv.as_mut());
    iv
}

fn padded_len(len: usize, block_size: usize) -> usize {
    len.div_ceil(block_size) * block_size
}

/// Chaining state of a single pass: `None` under ECB, the previous
/// ciphertext block (initially the IV) under CBC.
pub struct BlockChain<'a, C: CipherAlgorithm> {
    algorithm: &'a C,
    previous: Option<C::Block>,
}

impl<C: CipherAlgorithm> BlockChain<'_, C> {
    pub fn encrypt_block(&mut self, block: &C::Block) -> C::Block {
        match self.previous.as_mut() {
            None => self.algorithm.encrypt_block(block),
            Some(previous) => {
                let mut input = *block;
                xor_in_place(input.as_mut(), previous.as_ref());
                let output = self.algorithm.encrypt_block(&input);
                *previous = output;
                output
            }
        }
    }

    pub fn decrypt_block(&mut self, block: &C::Block) -> C::Block {
        let mut output = self.algorithm.decrypt_block(block);
        if let Some(previous) = self.previous.as_mut() {
            xor_in_place(output.as_mut(), previous.as_ref());
            *previous = *block;
        }
        output
    }

    /// Encrypts whole blocks in place; a trailing partial block is left untouched.
    pub fn encrypt_slice(&mut self, data: &mut [u8]) {
        debug_assert_eq!(data.len() % C::BLOCK_SIZE, 0);
        for chunk in data.chunks_exact_mut(C::BLOCK_SIZE) {
            let encrypted = self.encrypt_block(&load_block::<C>(chunk));
            chunk.copy_from_slice(encrypted.as_ref());
        }
    }

    /// Decrypts whole blocks in place; a trailing partial block is left untouched.
    pub fn decrypt_slice(&mut self, data: &mut [u8]) {
        debug_assert_eq!(data.len() % C::BLOCK_SIZE, 0);
        for chunk in data.chunks_exact_mut(C::BLOCK_SIZE) {
            let decrypted = self.decrypt_block(&load_block::<C>(chunk));
            chunk.copy_from_slice(decrypted.as_ref());
        }
    }

    /// Encrypts `reader` to `writer` block by block and returns the plaintext length.
    pub fn encrypt_stream<R, W>(&mut self, reader: &mut R, writer: &mut W) -> Result<u64>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let mut buffer = C::Block::default();
        let mut total = 0u64;
        let mut blocks = 0u64;

        loop {
            let n = read_block(reader, buffer.as_mut())?;
            if n == 0 {
                break;
            }

            // последний неполный блок дополняется нулями
            buffer.as_mut()[n..].fill(0);
            let encrypted = self.encrypt_block(&buffer);
            writer.write_all(encrypted.as_ref())?;

            total += n as u64;
            blocks += 1;
            trace!("block {blocks}: {n} plaintext bytes");

            if n < C::BLOCK_SIZE {
                break;
            }
        }

        writer.flush()?;
        debug!("encrypted {total} bytes into {blocks} blocks");
        Ok(total)
    }

    /// Decrypts `reader` to `writer` and returns the number of bytes written.
    ///
    /// With a declared length the output is cut to exactly that many bytes,
    /// dropping the zero padding of the last block.
    pub fn decrypt_stream<R, W>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
        declared_length: Option<u64>,
    ) -> Result<u64>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let mut buffer = C::Block::default();
        let mut remaining = declared_length;
        let mut written = 0u64;

        loop {
            let n = read_block(reader, buffer.as_mut())?;
            if n == 0 {
                break;
            }
            if n < C::BLOCK_SIZE {
                warn!("ciphertext ends with a partial block of {n} bytes, padding with zeros");
                buffer.as_mut()[n..].fill(0);
            }

            let decrypted = self.decrypt_block(&buffer);
            let keep = match remaining {
                Some(left) => {
                    let keep = left.min(C::BLOCK_SIZE as u64);
                    remaining = Some(left - keep);
                    keep as usize
                }
                None => C::BLOCK_SIZE,
            };
            writer.write_all(&decrypted.as_ref()[..keep])?;
            written += keep as u64;
            trace!("block: kept {keep} of {} bytes", C::BLOCK_SIZE);

            if n < C::BLOCK_SIZE {
                break;
            }
        }

        writer.flush()?;
        if let Some(left) = remaining.filter(|&left| left > 0) {
            warn!("ciphertext is {left} bytes short of the declared length");
        }
        debug!("decrypted {written} bytes");
        Ok(written)
    }
}

fn load_block<C: CipherAlgorithm>(chunk: &[u8]) -> C::Block {
    let mut block = C::Block::default();
    block.as_mut()[..chunk.len()].copy_from_slice(chunk);
    block
}
