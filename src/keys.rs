//! RSA key generation and PEM import/export.
//!
//! Keys are bound to RSASSA-PKCS1-v1_5 with SHA-256 as soon as they are
//! created or imported. Public keys travel as SPKI DER and private keys as
//! PKCS#8 DER, both wrapped by [`codec::encode_pem`] with the
//! `RSA PUBLIC KEY` / `RSA PRIVATE KEY` labels.

use std::fmt;

use rand::rngs::OsRng;
use rsa::pkcs1v15::{SigningKey, VerifyingKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::signature::Keypair;
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};

use crate::codec::{self, PemLabel};
use crate::digest::HashAlgorithm;
use crate::error::{Error, Result};

/// Public exponent used for every generated key.
pub const PUBLIC_EXPONENT: u32 = 65_537;

/// Hash bound to the signature scheme of every key.
pub const SCHEME_HASH: HashAlgorithm = HashAlgorithm::Sha256;

/// Verify-capable RSA public key.
#[derive(Clone)]
pub struct PublicKey {
    inner: VerifyingKey<Sha256>,
}

/// Sign-capable RSA private key.
#[derive(Clone)]
pub struct PrivateKey {
    inner: SigningKey<Sha256>,
}

/// A freshly generated key pair.
#[derive(Clone)]
pub struct KeyPair {
    pub public_key: PublicKey,
    pub private_key: PrivateKey,
    pub modulus_bits: usize,
    pub scheme_hash: HashAlgorithm,
}

impl PublicKey {
    pub(crate) fn verifying_key(&self) -> &VerifyingKey<Sha256> {
        &self.inner
    }

    /// Bit length of the modulus.
    pub fn modulus_bits(&self) -> usize {
        let key: &RsaPublicKey = self.inner.as_ref();
        key.n().bits()
    }

    /// Modulus length in bytes, which is also the signature length.
    pub fn size(&self) -> usize {
        let key: &RsaPublicKey = self.inner.as_ref();
        key.size()
    }

    /// Parse SPKI DER.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let inner = VerifyingKey::<Sha256>::from_public_key_der(der)
            .map_err(|e| Error::Import(format!("invalid SPKI public key: {}", e)))?;
        Ok(Self { inner })
    }

    /// Serialize as SPKI DER.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        let der = self
            .inner
            .to_public_key_der()
            .map_err(|e| Error::Export(e.to_string()))?;
        Ok(der.as_bytes().to_vec())
    }

    /// SHA-256 fingerprint of the SPKI DER, formatted as `sha256:<hex>`.
    pub fn key_id(&self) -> Result<String> {
        let der = self.to_der()?;
        let mut hasher = Sha256::new();
        hasher.update(&der);
        Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("modulus_bits", &self.modulus_bits())
            .finish()
    }
}

impl PrivateKey {
    pub(crate) fn signing_key(&self) -> &SigningKey<Sha256> {
        &self.inner
    }

    pub fn modulus_bits(&self) -> usize {
        let key: &RsaPrivateKey = self.inner.as_ref();
        key.n().bits()
    }

    /// Derive the matching public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            inner: self.inner.verifying_key(),
        }
    }

    /// Parse PKCS#8 DER.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let inner = SigningKey::<Sha256>::from_pkcs8_der(der)
            .map_err(|e| Error::Import(format!("invalid PKCS#8 private key: {}", e)))?;
        Ok(Self { inner })
    }

    /// Serialize as PKCS#8 DER.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        let der = self
            .inner
            .to_pkcs8_der()
            .map_err(|e| Error::Export(e.to_string()))?;
        Ok(der.as_bytes().to_vec())
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("modulus_bits", &self.modulus_bits())
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("modulus_bits", &self.modulus_bits)
            .field("scheme_hash", &self.scheme_hash)
            .finish_non_exhaustive()
    }
}

/// Generate an RSA key pair with the given modulus length.
///
/// The length is not restricted beyond what the RSA primitive accepts;
/// 1024-bit keys are weak and only kept for demonstration.
///
/// # Errors
///
/// Returns [`Error::KeyGeneration`] for a zero or rejected modulus length,
/// or when the OS random source fails. Entropy failures are safe to retry.
pub fn generate_key_pair(modulus_length_bits: usize) -> Result<KeyPair> {
    if modulus_length_bits == 0 {
        return Err(Error::KeyGeneration(
            "modulus length must be positive".to_string(),
        ));
    }

    log::debug!("Generating {}-bit RSA key pair", modulus_length_bits);

    let exponent = BigUint::from(PUBLIC_EXPONENT);
    let private_key = RsaPrivateKey::new_with_exp(&mut OsRng, modulus_length_bits, &exponent)
        .map_err(|e| Error::KeyGeneration(e.to_string()))?;

    let signing_key = SigningKey::<Sha256>::new(private_key);
    let private_key = PrivateKey { inner: signing_key };
    let public_key = private_key.public_key();

    log::info!(
        "Generated RSA key pair ({} bits)",
        public_key.modulus_bits()
    );

    Ok(KeyPair {
        modulus_bits: public_key.modulus_bits(),
        public_key,
        private_key,
        scheme_hash: SCHEME_HASH,
    })
}

/// Generate a key pair on tokio's blocking pool.
#[cfg(feature = "async")]
pub async fn generate_key_pair_async(modulus_length_bits: usize) -> Result<KeyPair> {
    tokio::task::spawn_blocking(move || generate_key_pair(modulus_length_bits)).await?
}

/// Export a public key as an `RSA PUBLIC KEY` PEM block over SPKI DER.
pub fn export_public_key(key: &PublicKey) -> Result<String> {
    let der = key.to_der()?;
    Ok(codec::encode_pem(&der, PemLabel::RsaPublicKey))
}

/// Export a private key as an `RSA PRIVATE KEY` PEM block over PKCS#8 DER.
pub fn export_private_key(key: &PrivateKey) -> Result<String> {
    let der = key.to_der()?;
    Ok(codec::encode_pem(&der, PemLabel::RsaPrivateKey))
}

/// Import a public key from PEM text (SPKI body).
///
/// # Errors
///
/// [`Error::Decode`] if the body is not base64, [`Error::Import`] if it does
/// not hold a valid SPKI RSA key.
pub fn import_public_key(pem: &str) -> Result<PublicKey> {
    let der = codec::decode_pem(pem)?;
    let key = PublicKey::from_der(&der)?;
    log::debug!("Imported {}-bit RSA public key", key.modulus_bits());
    Ok(key)
}

/// Import a private key from PEM text (PKCS#8 body).
pub fn import_private_key(pem: &str) -> Result<PrivateKey> {
    let der = codec::decode_pem(pem)?;
    let key = PrivateKey::from_der(&der)?;
    log::debug!("Imported {}-bit RSA private key", key.modulus_bits());
    Ok(key)
}
