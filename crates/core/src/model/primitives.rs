use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// On-chain address as produced by the analysis pass.
///
/// The string form is kept as given (trimmed, no checksum normalization);
/// ordering and equality are plain string comparisons, which is what the
/// snapshot sorts on. Use [`EthereumAddress::matches`] to compare addresses
/// that may differ only in hex letter case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct EthereumAddress(String);

impl EthereumAddress {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Same address regardless of letter case (`0xAbC` matches `0xabc`).
    pub fn matches(&self, other: &EthereumAddress) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl From<String> for EthereumAddress {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<EthereumAddress> for String {
    fn from(value: EthereumAddress) -> Self {
        value.0
    }
}

impl fmt::Display for EthereumAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EthereumAddress {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHashError {
    #[error("expected a 0x prefix")]
    MissingPrefix,
    #[error("expected 64 hex digits, found {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

/// 32-byte digest rendered as `0x` + 64 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hash256([u8; 32]);

impl Hash256 {
    pub const ZERO: Hash256 = Hash256([0u8; 32]);

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for Hash256 {
    type Err = ParseHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or(ParseHashError::MissingPrefix)?;
        if digits.len() != 64 {
            return Err(ParseHashError::InvalidLength(digits.len()));
        }

        let mut bytes = [0u8; 32];
        for (i, pair) in digits.as_bytes().chunks(2).enumerate() {
            let hi = hex_value(pair[0])?;
            let lo = hex_value(pair[1])?;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(byte: u8) -> Result<u8, ParseHashError> {
    (byte as char)
        .to_digit(16)
        .map(|d| d as u8)
        .ok_or(ParseHashError::InvalidDigit(byte as char))
}

impl TryFrom<String> for Hash256 {
    type Error = ParseHashError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Hash256> for String {
    fn from(value: Hash256) -> Self {
        value.to_string()
    }
}
