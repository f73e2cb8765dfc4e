use aes::Aes128;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit, generic_array::GenericArray};
use hex_literal::hex;
use rijndael::Aes;
use rijndael::rijndael::cipher::{
    inv_mix_columns, inv_shift_rows, mix_columns, shift_rows, transpose,
};
use std::io::Cursor;
use symmetric_cipher::{
    CipherContext, CipherError, CipherMode, SymmetricCipher, decrypt_with_header,
    encrypt_with_header,
};

#[test]
fn test_aes128_fips_vector() {
    let aes = Aes::new(&hex!("2b7e151628aed2a6abf7158809cf4f3c"));
    let plaintext = hex!("3243f6a8885a308d313198a2e0370734");
    let ciphertext = aes.encrypt(&plaintext);

    assert_eq!(ciphertext, hex!("3925841d02dc09fbdc118597196a0b32"));
    assert_eq!(aes.decrypt(&ciphertext), plaintext);
}

#[test]
fn test_aes128_appendix_c1() {
    let aes = Aes::new(&hex!("000102030405060708090a0b0c0d0e0f"));
    let plaintext = hex!("00112233445566778899aabbccddeeff");
    let ciphertext = aes.encrypt(&plaintext);

    assert_eq!(ciphertext, hex!("69c4e0d86a7b0430d8cdb78070b4c55a"));
    assert_eq!(aes.decrypt(&ciphertext), plaintext);
}

#[test]
fn test_round_trip_random() {
    for _ in 0..64 {
        let aes = Aes::new(&rand::random());
        let block: [u8; 16] = rand::random();
        assert_eq!(aes.decrypt(&aes.encrypt(&block)), block);
    }
}

#[test]
fn test_matches_reference_implementation() {
    for _ in 0..64 {
        let key: [u8; 16] = rand::random();
        let block: [u8; 16] = rand::random();

        let reference = Aes128::new(&GenericArray::from(key));
        let mut expected = GenericArray::from(block);
        reference.encrypt_block(&mut expected);

        let aes = Aes::new(&key);
        let ciphertext = aes.encrypt(&block);
        assert_eq!(ciphertext.as_slice(), expected.as_slice());

        let mut decrypted = expected;
        reference.decrypt_block(&mut decrypted);
        assert_eq!(aes.decrypt(&ciphertext).as_slice(), decrypted.as_slice());
    }
}

#[test]
fn test_round_steps_invert() {
    let state = transpose(&hex!("d4bf5d30e0b452aeb84111f11e2798e5"));

    let mut mixed = state;
    mix_columns(&mut mixed);
    // FIPS-197 C.1, round 1: первый столбец после MixColumns
    assert_eq!(&transpose(&mixed)[..4], &hex!("046681e5"));
    inv_mix_columns(&mut mixed);
    assert_eq!(mixed, state);

    let mut shifted = state;
    shift_rows(&mut shifted);
    assert_eq!(&shifted[4..8], &[state[5], state[6], state[7], state[4]]);
    inv_shift_rows(&mut shifted);
    assert_eq!(shifted, state);
}

#[test]
fn test_with_key_rejects_wrong_length() {
    assert!(Aes::with_key(&[0u8; 16]).is_ok());
    assert!(matches!(
        Aes::with_key(&[0u8; 15]),
        Err(CipherError::InvalidKeyLength { expected: 16, actual: 15, .. })
    ));
}

#[test]
fn test_cbc_through_context() {
    // NIST SP 800-38A, F.2.1
    let aes = Aes::with_key(&hex!("2b7e151628aed2a6abf7158809cf4f3c")).unwrap();
    let iv = hex!("000102030405060708090a0b0c0d0e0f");
    let context = CipherContext::new(aes, CipherMode::CBC, Some(&iv)).unwrap();

    let plaintext = hex!("6bc1bee22e409f96e93d7e117393172a ae2d8a571e03ac9c9eb76fac45af8e51");
    let ciphertext = context.encrypt(&plaintext);
    assert_eq!(
        ciphertext,
        hex!("7649abac8119b246cee98e9b12e9197d 5086cb9b507219ee95db113a917678b2")
    );
    assert_eq!(context.decrypt(&ciphertext), plaintext);
}

#[test]
fn test_header_round_trip_in_memory() {
    let aes = Aes::new(&rand::random());
    let context = CipherContext::new(aes, CipherMode::ECB, None).unwrap();
    let data: Vec<u8> = (0..1000u32).map(|i| (i * 7) as u8).collect();

    let mut encrypted = Vec::new();
    encrypt_with_header(&context, &mut Cursor::new(&data), "data.bin", &mut encrypted).unwrap();
    assert_eq!(encrypted.len() % 16, 0);

    let mut decrypted = Vec::new();
    let header = decrypt_with_header(&context, &mut Cursor::new(&encrypted), &mut decrypted).unwrap();
    assert_eq!(header.file_name(), "data.bin");
    assert_eq!(decrypted, data);
}

#[test]
fn test_file_round_trip_cbc() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("image.raw");
    let encrypted = dir.path().join("image_c.raw");
    let decrypted = dir.path().join("image_c_c.raw");
    let data: Vec<u8> = (0..5000).map(|_| rand::random()).collect();
    std::fs::write(&input, &data).unwrap();

    let iv: [u8; 16] = rand::random();
    let context = CipherContext::new(Aes::new(&rand::random()), CipherMode::CBC, Some(&iv)).unwrap();
    symmetric_cipher::encrypt_file(&context, &input, &encrypted).unwrap();
    let header = symmetric_cipher::decrypt_file(&context, &encrypted, &decrypted).unwrap();

    assert_eq!(header.byte_length(), 5000);
    assert_eq!(std::fs::read(&decrypted).unwrap(), data);
}
