use crate::crypto::cipher_context::CipherContext;
use crate::crypto::cipher_io::read_block;
use crate::crypto::cipher_traits::CipherAlgorithm;
use crate::crypto::error::{CipherError, Result};
use crate::crypto::file_header::{FileHeader, HEADER_SIZE};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, ErrorKind, Read, Seek, Write};
use std::path::Path;

/// Writes the encrypted header followed by the encrypted contents of `reader`.
///
/// Header and data share one chain, so under CBC the first data block is
/// chained to the last header block.
pub fn encrypt_with_header<C, R, W>(
    context: &CipherContext<C>,
    reader: &mut R,
    original_name: &str,
    writer: &mut W,
) -> Result<FileHeader>
where
    C: CipherAlgorithm,
    R: Read + Seek + ?Sized,
    W: Write + ?Sized,
{
    let header = FileHeader::create(reader, original_name)?;
    debug!(
        "header: name={:?} length={} crc32={:08x}",
        header.file_name(),
        header.byte_length(),
        header.checksum()
    );

    let mut chain = context.encryptor();
    let mut header_bytes = header.to_bytes();
    chain.encrypt_slice(&mut header_bytes);
    writer.write_all(&header_bytes)?;

    chain.encrypt_stream(reader, writer)?;
    Ok(header)
}

/// Decrypts the header, then exactly `byte_length` bytes of data into `writer`.
pub fn decrypt_with_header<C, R, W>(
    context: &CipherContext<C>,
    reader: &mut R,
    writer: &mut W,
) -> Result<FileHeader>
where
    C: CipherAlgorithm,
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut header_bytes = [0u8; HEADER_SIZE];
    let n = read_block(reader, &mut header_bytes)?;
    if n < HEADER_SIZE {
        return Err(CipherError::TruncatedHeader {
            expected: HEADER_SIZE,
            actual: n,
        });
    }

    let mut chain = context.decryptor();
    chain.decrypt_slice(&mut header_bytes);
    let header = FileHeader::from_bytes(&header_bytes);
    debug!(
        "header: name={:?} length={} crc32={:08x}",
        header.file_name(),
        header.byte_length(),
        header.checksum()
    );

    chain.decrypt_stream(reader, writer, Some(header.byte_length()))?;
    Ok(header)
}

pub fn encrypt_file<C: CipherAlgorithm>(
    context: &CipherContext<C>,
    input_path: &Path,
    output_path: &Path,
) -> Result<FileHeader> {
    let original_name = input_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut reader = BufReader::new(File::open(input_path)?);
    ensure_distinct(input_path, output_path)?;
    let mut writer = BufWriter::new(File::create(output_path)?);
    let header = encrypt_with_header(context, &mut reader, &original_name, &mut writer)?;
    writer.flush()?;

    info!(
        "encrypted {} -> {} ({} bytes, {})",
        input_path.display(),
        output_path.display(),
        header.byte_length(),
        context.mode()
    );
    Ok(header)
}

/// Decrypts a file and checks the result against the recovered header.
///
/// On a mismatch the output file is left in place and `HeaderMismatch` is returned.
pub fn decrypt_file<C: CipherAlgorithm>(
    context: &CipherContext<C>,
    input_path: &Path,
    output_path: &Path,
) -> Result<FileHeader> {
    let header = {
        let mut reader = BufReader::new(File::open(input_path)?);
        ensure_distinct(input_path, output_path)?;
        let mut writer = BufWriter::new(File::create(output_path)?);
        let header = decrypt_with_header(context, &mut reader, &mut writer)?;
        writer.flush()?;
        header
    };

    let mut produced = BufReader::new(File::open(output_path)?);
    header.verify(&mut produced)?;

    info!(
        "decrypted {} -> {} ({} bytes, original name {:?})",
        input_path.display(),
        output_path.display(),
        header.byte_length(),
        header.file_name()
    );
    Ok(header)
}

/// Creating the output must not truncate the input.
fn ensure_distinct(input_path: &Path, output_path: &Path) -> Result<()> {
    // выходного файла ещё нет: совпасть не с чем
    let Ok(output) = output_path.canonicalize() else {
        return Ok(());
    };
    if input_path.canonicalize()? == output {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            format!("{} is both input and output", input_path.display()),
        )
        .into());
    }
    Ok(())
}
