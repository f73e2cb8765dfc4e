use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use symmetric_cipher::crypto::des::DES;
use symmetric_cipher::crypto::triple_des::TripleDES;
use symmetric_cipher::{
    CipherAlgorithm, CipherContext, CipherMode, SymmetricCipher, decrypt_file, encrypt_file,
};

fn run<C: CipherAlgorithm>(
    label: &str,
    context: &CipherContext<C>,
    input: &Path,
    dir: &tempfile::TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let encrypted = dir.path().join(format!("{label}_{}.enc", context.mode()));
    let decrypted = dir.path().join(format!("{label}_{}.dec", context.mode()));

    let start = Instant::now();
    let header = encrypt_file(context, input, &encrypted)?;
    let encrypt_time = start.elapsed();

    let start = Instant::now();
    decrypt_file(context, &encrypted, &decrypted)?;
    let decrypt_time = start.elapsed();

    let same = fs::read(input)? == fs::read(&decrypted)?;
    println!(
        "{label:<4} {:<3} {:>10} bytes  crc32 {:08x}  enc {encrypt_time:>10.2?}  dec {decrypt_time:>10.2?}  {}",
        context.mode(),
        header.byte_length(),
        header.checksum(),
        if same { "OK" } else { "MISMATCH" }
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = match env::args_os().nth(1) {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("usage: encrypt_file <PATH>");
            std::process::exit(2);
        }
    };
    let dir = tempfile::tempdir()?;
    let iv = [0x24u8; 8];

    for mode in [CipherMode::ECB, CipherMode::CBC] {
        let des = DES::with_key(&rand::random::<[u8; 7]>())?;
        run("DES", &CipherContext::new(des, mode, Some(&iv))?, &input, &dir)?;

        let tdes = TripleDES::with_key(&rand::random::<[u8; 21]>())?;
        run("3DES", &CipherContext::new(tdes, mode, Some(&iv))?, &input, &dir)?;
    }
    Ok(())
}
