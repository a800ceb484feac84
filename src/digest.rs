//! Document hashing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha512};

use crate::codec;
use crate::error::{Error, Result};

/// Hash algorithm applied to the document before signing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }

    pub fn digest_size(&self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha512 => 64,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("SHA-256") {
            Ok(HashAlgorithm::Sha256)
        } else if s.eq_ignore_ascii_case("SHA-512") {
            Ok(HashAlgorithm::Sha512)
        } else {
            Err(Error::UnsupportedAlgorithm(s.to_string()))
        }
    }
}

impl TryFrom<String> for HashAlgorithm {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<HashAlgorithm> for String {
    fn from(value: HashAlgorithm) -> Self {
        value.as_str().to_string()
    }
}

/// Raw digest bytes together with the algorithm that produced them.
#[derive(Clone, PartialEq, Eq)]
pub struct DigestValue {
    algorithm: HashAlgorithm,
    bytes: Vec<u8>,
}

impl DigestValue {
    /// Wrap digest bytes computed elsewhere.
    pub fn from_bytes(algorithm: HashAlgorithm, bytes: Vec<u8>) -> Self {
        Self { algorithm, bytes }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// The bytes that get signed.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Digest bytes read as UTF-8 with replacement characters.
    ///
    /// Display only: this conversion loses information and must never be fed
    /// back into signing or verification.
    pub fn to_text_lossy(&self) -> String {
        codec::decode_text_lossy(&self.bytes)
    }
}

impl fmt::Debug for DigestValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestValue")
            .field("algorithm", &self.algorithm)
            .field("hex", &self.to_hex())
            .finish()
    }
}

/// Hash the UTF-8 encoding of `text`.
pub fn digest(text: &str, algorithm: HashAlgorithm) -> DigestValue {
    let data = codec::encode_text(text);
    let bytes = match algorithm {
        HashAlgorithm::Sha256 => Sha256::digest(&data).to_vec(),
        HashAlgorithm::Sha512 => Sha512::digest(&data).to_vec(),
    };
    DigestValue { algorithm, bytes }
}

/// Hash `text` with the algorithm called `algorithm` (`"SHA-256"` or `"SHA-512"`).
pub fn digest_named(text: &str, algorithm: &str) -> Result<DigestValue> {
    Ok(digest(text, algorithm.parse()?))
}
