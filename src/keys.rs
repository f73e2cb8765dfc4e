use crate::error::{CliError, Result};
use clap::ValueEnum;
use log::{debug, warn};
use rand::RngCore;
use rijndael::Aes;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;
use symmetric_cipher::crypto::cipher_context::random_iv;
use symmetric_cipher::{CipherAlgorithm, CipherError, CipherMode, DES, SymmetricCipher, TripleDES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Algorithm {
    Aes,
    Des,
    #[value(name = "tdes", alias = "3des")]
    TripleDes,
}

impl Algorithm {
    pub fn key_size(self) -> usize {
        match self {
            Algorithm::Aes => Aes::KEY_SIZE,
            Algorithm::Des => DES::KEY_SIZE,
            Algorithm::TripleDes => TripleDES::KEY_SIZE,
        }
    }

    pub fn block_size(self) -> usize {
        match self {
            Algorithm::Aes => Aes::BLOCK_SIZE,
            Algorithm::Des => DES::BLOCK_SIZE,
            Algorithm::TripleDes => TripleDES::BLOCK_SIZE,
        }
    }

    fn cipher_name(self) -> &'static str {
        match self {
            Algorithm::Aes => Aes::NAME,
            Algorithm::Des => DES::NAME,
            Algorithm::TripleDes => TripleDES::NAME,
        }
    }

    /// A random IV of this algorithm's block size.
    pub fn random_iv(self) -> Vec<u8> {
        match self {
            Algorithm::Aes => random_iv::<Aes>().to_vec(),
            Algorithm::Des => random_iv::<DES>().to_vec(),
            Algorithm::TripleDes => random_iv::<TripleDES>().to_vec(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Aes => f.write_str("AES"),
            Algorithm::Des => f.write_str("DES"),
            Algorithm::TripleDes => f.write_str("TDES"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "AES" => Ok(Algorithm::Aes),
            "DES" => Ok(Algorithm::Des),
            "TDES" | "3DES" => Ok(Algorithm::TripleDes),
            _ => Err(CliError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Raw key bytes, sized per algorithm. DES keys are the 7-byte form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMaterial {
    Aes([u8; 16]),
    Des([u8; 7]),
    TripleDes([[u8; 7]; 3]),
}

impl KeyMaterial {
    pub fn generate(algorithm: Algorithm) -> Self {
        let mut rng = rand::rng();
        match algorithm {
            Algorithm::Aes => {
                let mut key = [0u8; 16];
                rng.fill_bytes(&mut key);
                KeyMaterial::Aes(key)
            }
            Algorithm::Des => {
                let mut key = [0u8; 7];
                rng.fill_bytes(&mut key);
                KeyMaterial::Des(key)
            }
            Algorithm::TripleDes => {
                let mut keys = [[0u8; 7]; 3];
                for key in &mut keys {
                    rng.fill_bytes(key);
                }
                KeyMaterial::TripleDes(keys)
            }
        }
    }

    /// Parses hex key text. Triple-DES accepts `K1:K2:K3` or one 42-digit string.
    pub fn parse(algorithm: Algorithm, text: &str) -> Result<Self> {
        let bytes: Vec<u8> = if algorithm == Algorithm::TripleDes && text.contains(':') {
            let parts: Vec<&str> = text.split(':').collect();
            if parts.len() != 3 {
                return Err(CliError::Usage(format!(
                    "Triple-DES key needs three parts, got {}",
                    parts.len()
                )));
            }
            let mut bytes = Vec::with_capacity(algorithm.key_size());
            for part in parts {
                let key = hex::decode(part)?;
                if key.len() != DES::KEY_SIZE {
                    return Err(CipherError::InvalidKeyLength {
                        algorithm: DES::NAME,
                        expected: DES::KEY_SIZE,
                        actual: key.len(),
                    }
                    .into());
                }
                bytes.extend(key);
            }
            bytes
        } else {
            hex::decode(text)?
        };

        if bytes.len() != algorithm.key_size() {
            return Err(CipherError::InvalidKeyLength {
                algorithm: algorithm.cipher_name(),
                expected: algorithm.key_size(),
                actual: bytes.len(),
            }
            .into());
        }

        Ok(match algorithm {
            Algorithm::Aes => KeyMaterial::Aes(std::array::from_fn(|i| bytes[i])),
            Algorithm::Des => KeyMaterial::Des(std::array::from_fn(|i| bytes[i])),
            Algorithm::TripleDes => {
                KeyMaterial::TripleDes(std::array::from_fn(|k| std::array::from_fn(|i| bytes[7 * k + i])))
            }
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            KeyMaterial::Aes(_) => Algorithm::Aes,
            KeyMaterial::Des(_) => Algorithm::Des,
            KeyMaterial::TripleDes(_) => Algorithm::TripleDes,
        }
    }

    pub fn to_hex(&self) -> String {
        match self {
            KeyMaterial::Aes(key) => hex::encode(key),
            KeyMaterial::Des(key) => hex::encode(key),
            KeyMaterial::TripleDes(keys) => keys.iter().map(hex::encode).collect::<Vec<_>>().join(":"),
        }
    }
}

/// One line of the key list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEntry {
    pub name: String,
    pub mode: CipherMode,
    pub material: KeyMaterial,
    pub iv: Option<Vec<u8>>,
}

impl KeyEntry {
    /// Checks the name and the IV against the mode and block size.
    pub fn new(name: &str, mode: CipherMode, material: KeyMaterial, iv: Option<Vec<u8>>) -> Result<Self> {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(CliError::InvalidName(name.to_string()));
        }

        let block_size = material.algorithm().block_size();
        let iv = match (mode, iv) {
            (CipherMode::CBC, None) => return Err(CipherError::MissingIv.into()),
            (CipherMode::CBC, Some(iv)) if iv.len() != block_size => {
                return Err(CipherError::InvalidIvLength {
                    expected: block_size,
                    actual: iv.len(),
                }
                .into());
            }
            (CipherMode::ECB, Some(_)) => {
                warn!("key `{name}`: ECB entry carries an IV, dropping it");
                None
            }
            (_, iv) => iv,
        };

        Ok(Self {
            name: name.to_string(),
            mode,
            material,
            iv,
        })
    }

    /// Random key, plus a random IV for CBC.
    pub fn generate(name: &str, algorithm: Algorithm, mode: CipherMode) -> Result<Self> {
        let iv = mode.requires_iv().then(|| algorithm.random_iv());
        Self::new(name, mode, KeyMaterial::generate(algorithm), iv)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.material.algorithm()
    }

    fn parse_line(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [algorithm, mode, name, key, rest @ ..] = fields.as_slice() else {
            return Err(CliError::Usage(format!(
                "expected `TYPE MODE NAME KEY [IV]`, got {} fields",
                fields.len()
            )));
        };
        let iv = match rest {
            [] => None,
            [iv] => Some(hex::decode(iv)?),
            _ => return Err(CliError::Usage(format!("{} trailing fields", rest.len()))),
        };

        let algorithm: Algorithm = algorithm.parse()?;
        let mode: CipherMode = mode.parse()?;
        Self::new(name, mode, KeyMaterial::parse(algorithm, key)?, iv)
    }
}

impl fmt::Display for KeyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.algorithm(), self.mode, self.name, self.material.to_hex())?;
        if let Some(iv) = &self.iv {
            write!(f, " {}", hex::encode(iv))?;
        }
        Ok(())
    }
}

/// Plain text key store: one `TYPE MODE NAME KEYHEX[:KEYHEX:KEYHEX] [IVHEX]` per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyList {
    entries: Vec<KeyEntry>,
}

impl KeyList {
    /// Reads a key list; a missing file is an empty list.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => {
                let list = Self::parse(&text)?;
                debug!("loaded {} keys from {}", list.entries.len(), path.display());
                Ok(list)
            }
            Err(source) if source.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist, starting with an empty key list", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(CliError::KeyListIo {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut list = Self::default();
        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let wrap = |err: CliError| CliError::Parse {
                line: index + 1,
                reason: err.to_string(),
            };
            let entry = KeyEntry::parse_line(line).map_err(wrap)?;
            list.insert(entry).map_err(wrap)?;
        }
        Ok(list)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_string()).map_err(|source| CliError::KeyListIo {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("saved {} keys to {}", self.entries.len(), path.display());
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&KeyEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn get(&self, name: &str) -> Result<&KeyEntry> {
        self.find(name)
            .ok_or_else(|| CliError::UnknownKey(name.to_string()))
    }

    pub fn insert(&mut self, entry: KeyEntry) -> Result<()> {
        if self.find(&entry.name).is_some() {
            return Err(CliError::DuplicateName(entry.name));
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn entries(&self) -> &[KeyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for KeyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
