// examples/demo.rs

use hex_literal::hex;
use rijndael::Aes;
use rijndael::gf::arithmetic::{galois_multiply, gf_inverse};
use rijndael::rijndael::key_schedule::expand_key;
use rijndael::rijndael::sbox::{affine, sbox};
use symmetric_cipher::{CipherContext, CipherMode};

fn main() -> Result<(), symmetric_cipher::CipherError> {
    // Арифметика поля
    println!("{{57}} * {{83}} = {{{:02x}}}", galois_multiply(0x57, 0x83));
    for x in [0x01u8, 0x53, 0xca] {
        let inv = gf_inverse(x);
        println!(
            "x = {x:02x}: x^-1 = {inv:02x}, affine(x^-1) = {:02x}, sbox(x) = {:02x}",
            affine(inv),
            sbox(x)
        );
    }

    // Расширение ключа FIPS-197 A.1
    let key = hex!("2b7e151628aed2a6abf7158809cf4f3c");
    let words = expand_key(&key);
    for (i, word) in words.iter().enumerate().step_by(10) {
        println!("w[{i:2}] = {}", word.iter().map(|b| format!("{b:02x}")).collect::<String>());
    }

    // Шифрование одного блока
    let aes = Aes::new(&key);
    let ciphertext = aes.encrypt(&hex!("3243f6a8885a308d313198a2e0370734"));
    println!(
        "ciphertext = {}",
        ciphertext.iter().map(|b| format!("{b:02x}")).collect::<String>()
    );

    // Режимы
    let message = b"sixteen byte blksixteen byte blk and a short tail";
    for mode in [CipherMode::ECB, CipherMode::CBC] {
        let context = CipherContext::new(Aes::new(&key), mode, Some(&[0u8; 16]))?;
        let encrypted = context.encrypt(message);
        let decrypted = context.decrypt(&encrypted);
        println!(
            "{mode}: {} bytes -> {} bytes, first blocks equal: {}, round trip: {}",
            message.len(),
            encrypted.len(),
            encrypted[..16] == encrypted[16..32],
            decrypted.starts_with(message)
        );
    }
    Ok(())
}
