//! Signer defaults.
//!
//! Options can be built in code, taken from [`Default`], or read from a JSON
//! file. Missing fields fall back to the defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::digest::HashAlgorithm;
use crate::error::{Error, Result};

/// Modulus lengths presented to the user. Generation itself accepts others.
pub const OFFERED_MODULUS_LENGTHS: [usize; 4] = [1024, 2048, 3072, 4096];

pub const DEFAULT_MODULUS_LENGTH: usize = 2048;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignerOptions {
    /// Hash applied to the document before signing
    pub hash_algorithm: HashAlgorithm,

    /// RSA modulus length for generated keys
    pub modulus_length_bits: usize,
}

impl Default for SignerOptions {
    fn default() -> Self {
        Self {
            hash_algorithm: HashAlgorithm::Sha256,
            modulus_length_bits: DEFAULT_MODULUS_LENGTH,
        }
    }
}

impl SignerOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read options from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Cannot read {}: {}", path.display(), e)))?;
        let options = Self::from_json(&data)?;
        log::debug!(
            "Loaded signer options from {}: {} / {} bits",
            path.display(),
            options.hash_algorithm,
            options.modulus_length_bits
        );
        if !options.is_offered_modulus_length() {
            log::warn!(
                "Modulus length {} is not one of the offered lengths {:?}",
                options.modulus_length_bits,
                OFFERED_MODULUS_LENGTHS
            );
        }
        Ok(options)
    }

    /// Write options to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)
            .map_err(|e| Error::Config(format!("Cannot write {}: {}", path.display(), e)))
    }

    pub fn is_offered_modulus_length(&self) -> bool {
        OFFERED_MODULUS_LENGTHS.contains(&self.modulus_length_bits)
    }
}
