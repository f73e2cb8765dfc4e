use crate::crypto::error::CipherError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CipherMode {
    #[default]
    ECB,
    CBC,
}

impl CipherMode {
    pub fn requires_iv(self) -> bool {
        matches!(self, CipherMode::CBC)
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherMode::ECB => f.write_str("ECB"),
            CipherMode::CBC => f.write_str("CBC"),
        }
    }
}

impl FromStr for CipherMode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ECB" => Ok(CipherMode::ECB),
            "CBC" => Ok(CipherMode::CBC),
            _ => Err(CipherError::UnknownMode(s.to_string())),
        }
    }
}
