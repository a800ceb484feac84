//! RSASSA-PKCS1-v1_5 signing and verification over document digests.
//!
//! The digest bytes are the signed message: the key's bound hash (SHA-256)
//! is applied to them again inside the PKCS#1 v1.5 scheme, which is what
//! standard tooling does for `sign(key, digest_bytes)`.

use rsa::signature::{SignatureEncoding, Signer, Verifier};

use crate::codec;
use crate::digest::DigestValue;
use crate::error::{Error, Result};
use crate::keys::{PrivateKey, PublicKey};

/// Raw RSA signature bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    bytes: Vec<u8>,
}

impl Signature {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Text form handed to the user.
    pub fn to_base64(&self) -> String {
        codec::bytes_to_base64(&self.bytes)
    }

    /// Parse a signature pasted by the user: bare base64, base64 wrapped over
    /// several lines, or a PEM-armored block.
    pub fn from_text(text: &str) -> Result<Self> {
        Ok(Self {
            bytes: codec::decode_pem(text)?,
        })
    }
}

/// Sign the digest bytes with `private_key`.
///
/// # Errors
///
/// Returns [`Error::Signing`] if the RSA primitive refuses the key.
pub fn sign(private_key: &PrivateKey, digest: &DigestValue) -> Result<Signature> {
    let signature = private_key
        .signing_key()
        .try_sign(digest.as_bytes())
        .map_err(|e| Error::Signing(e.to_string()))?;

    log::debug!(
        "Signed {} digest with {}-bit key",
        digest.algorithm(),
        private_key.modulus_bits()
    );

    Ok(Signature {
        bytes: signature.to_vec(),
    })
}

/// Verify `signature` over the digest bytes under `public_key`.
///
/// Returns `Ok(false)` when the signature is well-formed but does not match.
///
/// # Errors
///
/// Returns [`Error::Verification`] when the signature is empty or its length
/// differs from the key's modulus size.
pub fn verify(public_key: &PublicKey, signature: &Signature, digest: &DigestValue) -> Result<bool> {
    if signature.is_empty() {
        return Err(Error::Verification("signature is empty".to_string()));
    }

    let expected = public_key.size();
    if signature.len() != expected {
        return Err(Error::Verification(format!(
            "signature is {} bytes, expected {} for a {}-bit key",
            signature.len(),
            expected,
            public_key.modulus_bits()
        )));
    }

    let signature_obj = rsa::pkcs1v15::Signature::try_from(signature.as_bytes())
        .map_err(|e| Error::Verification(e.to_string()))?;

    match public_key
        .verifying_key()
        .verify(digest.as_bytes(), &signature_obj)
    {
        Ok(()) => Ok(true),
        Err(_) => {
            log::debug!("Signature does not match {} digest", digest.algorithm());
            Ok(false)
        }
    }
}
