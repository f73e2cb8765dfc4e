use hex_literal::hex;
use rijndael::rijndael::cipher::mix_columns;
use rijndael::rijndael::key_schedule::{
    AesInverseKeyExpansion, AesKeyExpansion, expand_key, inverse_round_keys, round_keys,
};
use symmetric_cipher::KeyExpansion;

const FIPS_KEY: [u8; 16] = hex!("2b7e151628aed2a6abf7158809cf4f3c");

#[test]
fn test_expansion_fips_a1() {
    let words = expand_key(&FIPS_KEY);

    assert_eq!(words[0], hex!("2b7e1516"));
    assert_eq!(words[3], hex!("09cf4f3c"));
    assert_eq!(words[4], hex!("a0fafe17"));
    assert_eq!(words[5], hex!("88542cb1"));
    assert_eq!(words[40], hex!("d014f9a8"));
    assert_eq!(words[41], hex!("c9ee2589"));
    assert_eq!(words[42], hex!("e13f0cc8"));
    assert_eq!(words[43], hex!("b6630ca6"));
}

#[test]
fn test_round_keys_are_transposed() {
    let words = expand_key(&FIPS_KEY);
    let keys = round_keys(&FIPS_KEY);

    assert_eq!(keys.len(), 11);
    for (k, key) in keys.iter().enumerate() {
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(key[4 * j + i], words[4 * k + i][j]);
            }
        }
    }
    // первая строка раундового ключа 0 — первые байты слов 0..3
    assert_eq!(&keys[0][..4], &[0x2b, 0x28, 0xab, 0x09]);
}

#[test]
fn test_inverse_round_keys() {
    let forward = round_keys(&FIPS_KEY);
    let inverse = inverse_round_keys(&FIPS_KEY);

    assert_eq!(inverse[0], forward[0]);
    assert_eq!(inverse[10], forward[10]);
    for round in 1..10 {
        assert_ne!(inverse[round], forward[round]);
        let mut restored = inverse[round];
        mix_columns(&mut restored);
        assert_eq!(restored, forward[round], "round {round}");
    }
}

#[test]
fn test_expansion_is_deterministic() {
    let key = rand::random::<[u8; 16]>();
    assert_eq!(
        AesKeyExpansion.generate_round_keys(&key),
        AesKeyExpansion.generate_round_keys(&key)
    );
    assert_eq!(
        AesInverseKeyExpansion.generate_round_keys(&key),
        inverse_round_keys(&key)
    );
}
