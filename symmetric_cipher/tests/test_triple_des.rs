#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use symmetric_cipher::crypto::des::{DES, DesKey};
    use symmetric_cipher::crypto::triple_des::TripleDES;
    use symmetric_cipher::{CipherError, SymmetricCipher};

    fn key(bytes: [u8; 8]) -> DesKey {
        DesKey::from_parity_bytes(bytes)
    }

    #[test]
    fn test_ede3_known_answer() {
        // NIST SP 800-67, пример
        let tdes = TripleDES::new(
            &key(hex!("01 23 45 67 89 AB CD EF")),
            &key(hex!("23 45 67 89 AB CD EF 01")),
            &key(hex!("45 67 89 AB CD EF 01 23")),
        );
        let plaintext = hex!("54 68 65 20 71 75 66 63");

        let ciphertext = tdes.encrypt(&plaintext);
        assert_eq!(ciphertext, hex!("A8 26 FD 8C E5 3B 85 5F"));
        assert_eq!(tdes.decrypt(&ciphertext), plaintext);
    }

    #[test]
    fn test_equal_keys_degenerate_to_des() {
        let single = DesKey::from_raw(&rand::random());
        let tdes = TripleDES::new(&single, &single, &single);
        let des = DES::new(&single);

        let block: [u8; 8] = rand::random();
        assert_eq!(tdes.encrypt(&block), des.encrypt(&block));
        assert_eq!(tdes.decrypt(&block), des.decrypt(&block));
    }

    #[test]
    fn test_key_order_matters() {
        let k1 = DesKey::from_raw(&rand::random());
        let k2 = DesKey::from_raw(&rand::random());
        let k3 = DesKey::from_raw(&rand::random());
        let block: [u8; 8] = rand::random();

        let forward = TripleDES::new(&k1, &k2, &k3).encrypt(&block);
        let reversed = TripleDES::new(&k3, &k2, &k1).encrypt(&block);
        assert_ne!(forward, reversed);
    }

    #[test]
    fn test_round_trip_independent_keys() {
        for _ in 0..32 {
            let tdes = TripleDES::with_key(&rand::random::<[u8; 21]>()).unwrap();
            let block: [u8; 8] = rand::random();
            assert_eq!(tdes.decrypt(&tdes.encrypt(&block)), block);
        }
    }

    #[test]
    fn test_with_key_lengths() {
        let raw: [u8; 21] = rand::random();
        let parity: Vec<u8> = raw
            .chunks_exact(7)
            .flat_map(|chunk| {
                let mut part = [0u8; 7];
                part.copy_from_slice(chunk);
                *DesKey::from_raw(&part).as_bytes()
            })
            .collect();

        let a = TripleDES::with_key(&raw).unwrap();
        let b = TripleDES::with_key(&parity).unwrap();
        let block: [u8; 8] = rand::random();
        assert_eq!(a.encrypt(&block), b.encrypt(&block));

        assert!(matches!(
            TripleDES::with_key(&[0u8; 16]),
            Err(CipherError::InvalidKeyLength { expected: 21, actual: 16, .. })
        ));
    }
}
