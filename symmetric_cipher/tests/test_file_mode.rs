use std::fs;
use std::io::{Cursor, ErrorKind};
use std::path::Path;
use symmetric_cipher::crypto::des::DES;
use symmetric_cipher::crypto::triple_des::TripleDES;
use symmetric_cipher::{
    CipherAlgorithm, CipherContext, CipherError, CipherMode, HEADER_SIZE, HeaderMismatch,
    SymmetricCipher, decrypt_file, decrypt_with_header, encrypt_file, encrypt_with_header,
};
use tempfile::tempdir;

fn context<C: SymmetricCipher>(key: &[u8], mode: CipherMode) -> CipherContext<C> {
    let iv = vec![0x5Au8; C::BLOCK_SIZE];
    CipherContext::new(C::with_key(key).unwrap(), mode, Some(&iv)).unwrap()
}

fn round_trip<C: CipherAlgorithm>(context: &CipherContext<C>, dir: &Path, data: &[u8]) {
    let input = dir.join("plain.txt");
    let encrypted = dir.join("plain_c.txt");
    let decrypted = dir.join("plain_c_c.txt");
    fs::write(&input, data).unwrap();

    let header = encrypt_file(context, &input, &encrypted).unwrap();
    assert_eq!(header.file_name(), "plain.txt");
    assert_eq!(header.byte_length(), data.len() as u64);

    let size = fs::metadata(&encrypted).unwrap().len() as usize;
    assert_eq!(size, HEADER_SIZE + data.len().div_ceil(C::BLOCK_SIZE) * C::BLOCK_SIZE);

    let recovered = decrypt_file(context, &encrypted, &decrypted).unwrap();
    assert_eq!(recovered, header);
    assert_eq!(fs::read(&decrypted).unwrap(), data);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_des_file_round_trip_all_lengths() {
        let dir = tempdir().unwrap();
        for mode in [CipherMode::ECB, CipherMode::CBC] {
            let ctx = context::<DES>(&rand::random::<[u8; 7]>(), mode);
            for len in [0usize, 1, 7, 8, 9, 63, 64, 1000] {
                let data: Vec<u8> = (0..len).map(|_| rand::random()).collect();
                round_trip(&ctx, dir.path(), &data);
            }
        }
    }

    #[test]
    fn test_triple_des_file_round_trip() {
        let dir = tempdir().unwrap();
        for mode in [CipherMode::ECB, CipherMode::CBC] {
            let ctx = context::<TripleDES>(&rand::random::<[u8; 21]>(), mode);
            round_trip(&ctx, dir.path(), b"Triple DES file mode, odd length.");
        }
    }

    #[test]
    fn test_flipped_byte_fails_verification() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("data.bin");
        let encrypted = dir.path().join("data_c.bin");
        let decrypted = dir.path().join("data_c_c.bin");
        fs::write(&input, vec![0x33u8; 100]).unwrap();

        let ctx = context::<DES>(b"abcdefg", CipherMode::CBC);
        encrypt_file(&ctx, &input, &encrypted).unwrap();

        let mut bytes = fs::read(&encrypted).unwrap();
        let last = bytes.len() - 3;
        bytes[last] ^= 0x01;
        fs::write(&encrypted, &bytes).unwrap();

        assert!(matches!(
            decrypt_file(&ctx, &encrypted, &decrypted),
            Err(CipherError::HeaderMismatch(HeaderMismatch::Checksum { .. }))
        ));
    }

    #[test]
    fn test_wrong_key_fails_verification() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("data.bin");
        let encrypted = dir.path().join("data_c.bin");
        let decrypted = dir.path().join("data_c_c.bin");
        fs::write(&input, b"secret contents of the file").unwrap();

        encrypt_file(&context::<DES>(b"abcdefg", CipherMode::ECB), &input, &encrypted).unwrap();

        let result = decrypt_file(&context::<DES>(b"abcdefh", CipherMode::ECB), &encrypted, &decrypted);
        assert!(matches!(result, Err(CipherError::HeaderMismatch(_))));
    }

    #[test]
    fn test_truncated_header() {
        let ctx = context::<DES>(b"abcdefg", CipherMode::ECB);
        let short = vec![0u8; HEADER_SIZE - 1];

        let result = decrypt_with_header(&ctx, &mut Cursor::new(short), &mut Vec::<u8>::new());
        assert!(matches!(
            result,
            Err(CipherError::TruncatedHeader { expected: HEADER_SIZE, actual: 47 })
        ));
    }

    #[test]
    fn test_cbc_data_chains_from_header() {
        let ctx = context::<DES>(b"abcdefg", CipherMode::CBC);
        let data = [0u8; 8];

        let mut with_header = Vec::new();
        encrypt_with_header(&ctx, &mut Cursor::new(data), "x", &mut with_header).unwrap();

        // без заголовка первый блок данных сцеплялся бы с IV
        let alone = ctx.encrypt(&data);
        assert_ne!(with_header[HEADER_SIZE..], alone[..]);

        // нулевой блок данных, сцепленный с последним блоком заголовка
        let mut last_header_block = [0u8; 8];
        last_header_block.copy_from_slice(&with_header[HEADER_SIZE - 8..HEADER_SIZE]);
        let des = DES::with_key(b"abcdefg").unwrap();
        assert_eq!(with_header[HEADER_SIZE..], des.encrypt(&last_header_block));
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let dir = tempdir().unwrap();
        let ctx = context::<DES>(b"abcdefg", CipherMode::ECB);
        let result = encrypt_file(&ctx, &dir.path().join("absent"), &dir.path().join("out"));
        assert!(matches!(result, Err(CipherError::Io(_))));
    }

    #[test]
    fn test_same_input_and_output_is_rejected() {
        let dir = tempdir().unwrap();
        let ctx = context::<DES>(b"abcdefg", CipherMode::CBC);
        let path = dir.path().join("plain.txt");
        let data = [0x17u8; 32];
        fs::write(&path, data).unwrap();

        let alias = dir.path().join(".").join("plain.txt");
        for output in [&path, &alias] {
            let result = encrypt_file(&ctx, &path, output);
            assert!(matches!(result, Err(CipherError::Io(err)) if err.kind() == ErrorKind::InvalidInput));
            assert_eq!(fs::read(&path).unwrap(), data);
        }

        let result = decrypt_file(&ctx, &path, &path);
        assert!(matches!(result, Err(CipherError::Io(err)) if err.kind() == ErrorKind::InvalidInput));
        assert_eq!(fs::read(&path).unwrap(), data);
    }
}
