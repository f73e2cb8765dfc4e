use crate::error::{CliError, Result};
use crate::keys::{Algorithm, KeyEntry, KeyList, KeyMaterial};
use crate::naming::default_output_path;
use crate::operations::{Direction, process_file};
use clap::{Args, Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use symmetric_cipher::CipherMode;

#[derive(Parser, Debug)]
#[command(name = "blockcrypt", version, about = "Encrypt and decrypt files with AES-128, DES and Triple-DES")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encrypt a file
    Encrypt(CryptArgs),
    /// Decrypt a file and verify it against its header
    Decrypt(CryptArgs),
    /// Generate a random key and append it to the key list
    Keygen(KeygenArgs),
    /// List the stored keys
    Keys(KeyFileArgs),
}

#[derive(Args, Debug)]
pub struct KeyFileArgs {
    #[arg(long, value_name = "PATH", env = "BLOCKCRYPT_KEY_FILE", default_value = "keys.list")]
    pub key_file: PathBuf,
}

#[derive(Args, Debug)]
pub struct CryptArgs {
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Defaults to the input name with `_c` before the extension
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Use a key from the key list
    #[arg(long, value_name = "NAME", conflicts_with_all = ["algorithm", "key", "mode", "iv"])]
    pub key_name: Option<String>,

    #[command(flatten)]
    pub key_file: KeyFileArgs,

    #[arg(short, long, value_enum, requires = "key")]
    pub algorithm: Option<Algorithm>,

    /// Hex key; Triple-DES keys may be given as K1:K2:K3
    #[arg(short, long, value_name = "HEX", requires = "algorithm")]
    pub key: Option<String>,

    #[arg(short, long, default_value_t = CipherMode::ECB)]
    pub mode: CipherMode,

    #[arg(long, value_name = "HEX")]
    pub iv: Option<String>,
}

#[derive(Args, Debug)]
pub struct KeygenArgs {
    #[arg(short, long, value_enum)]
    pub algorithm: Algorithm,

    #[arg(short, long, default_value_t = CipherMode::ECB)]
    pub mode: CipherMode,

    #[arg(short, long)]
    pub name: String,

    #[command(flatten)]
    pub key_file: KeyFileArgs,
}

impl CryptArgs {
    /// The key named on the command line, or the one looked up in the key list.
    pub fn resolve_key(&self) -> Result<KeyEntry> {
        match (&self.key_name, self.algorithm, &self.key) {
            (Some(name), _, _) => {
                let list = KeyList::load(&self.key_file.key_file)?;
                Ok(list.get(name)?.clone())
            }
            (None, Some(algorithm), Some(key)) => {
                let material = KeyMaterial::parse(algorithm, key)?;
                let iv = self.iv.as_deref().map(hex::decode).transpose()?;
                KeyEntry::new("command-line", self.mode, material, iv)
            }
            _ => Err(CliError::Usage(
                "either --key-name or --algorithm with --key is required".to_string(),
            )),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }
}

pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Encrypt(args) => crypt(&args, Direction::Encrypt),
        Command::Decrypt(args) => crypt(&args, Direction::Decrypt),
        Command::Keygen(args) => keygen(&args),
        Command::Keys(args) => list_keys(&args),
    }
}

fn crypt(args: &CryptArgs, direction: Direction) -> Result<()> {
    let entry = args.resolve_key()?;
    let output = args.output_path();
    let header = process_file(&entry, direction, &args.input, &output)?;

    match direction {
        Direction::Encrypt => println!(
            "Encrypted {} ({} bytes) -> {}",
            args.input.display(),
            header.byte_length(),
            output.display()
        ),
        Direction::Decrypt => println!(
            "Decrypted {} -> {} (original name {}, {} bytes, checksum ok)",
            args.input.display(),
            output.display(),
            header.file_name(),
            header.byte_length()
        ),
    }
    Ok(())
}

fn keygen(args: &KeygenArgs) -> Result<()> {
    let path = &args.key_file.key_file;
    let mut list = KeyList::load(path)?;
    let entry = KeyEntry::generate(&args.name, args.algorithm, args.mode)?;
    println!("{entry}");

    list.insert(entry)?;
    list.save(path)?;
    info!("{} now holds {} keys", path.display(), list.len());
    Ok(())
}

fn list_keys(args: &KeyFileArgs) -> Result<()> {
    let list = KeyList::load(&args.key_file)?;
    if list.is_empty() {
        println!("No keys in {}", args.key_file.display());
        return Ok(());
    }

    println!("{:<5} {:<4} {:<16} Key(s)", "Type", "Mode", "Name");
    for entry in list.entries() {
        println!(
            "{:<5} {:<4} {:<16} {}",
            entry.algorithm().to_string(),
            entry.mode.to_string(),
            entry.name,
            entry.material.to_hex()
        );
    }
    Ok(())
}
