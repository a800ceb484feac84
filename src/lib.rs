//! # docsign
//!
//! RSA document signing and verification with PEM key import/export.
//!
//! A document is hashed (SHA-256 or SHA-512), a fresh RSA key pair is
//! generated, and the digest is signed with RSASSA-PKCS1-v1_5. Keys leave the
//! crate as PEM text (SPKI / PKCS#8 bodies) and come back in the same way for
//! verification.
//!
//! ## Features
//!
//! - **Codecs**: bytes ↔ base64 ↔ PEM with 64-column CRLF wrapping
//! - **Digests**: SHA-256 and SHA-512 over UTF-8 document text
//! - **Keys**: RSA generation (e = 65537), SPKI/PKCS#8 export and import
//! - **Signatures**: PKCS#1 v1.5 sign and verify with a definite boolean result
//! - **Workflow**: serde request/response types for the sign and verify actions
//! - **Async** (feature `async`): the expensive calls on tokio's blocking pool
//!
//! ## Quick Start
//!
//! ```rust
//! use docsign::digest::{digest, HashAlgorithm};
//! use docsign::keys::{export_public_key, generate_key_pair, import_public_key};
//! use docsign::signature::{sign, verify};
//!
//! let key_pair = generate_key_pair(1024).unwrap();
//! let document_digest = digest("Hello, World!", HashAlgorithm::Sha256);
//!
//! let signature = sign(&key_pair.private_key, &document_digest).unwrap();
//!
//! let public_pem = export_public_key(&key_pair.public_key).unwrap();
//! let public_key = import_public_key(&public_pem).unwrap();
//! assert!(verify(&public_key, &signature, &document_digest).unwrap());
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result`]. A signature that is well-formed but
//! does not match is `Ok(false)`; [`Error::Verification`] is reserved for
//! malformed input.

pub mod codec;
pub mod config;
pub mod digest;
pub mod error;
pub mod keys;
pub mod signature;
pub mod workflow;

pub use config::SignerOptions;
pub use digest::{DigestValue, HashAlgorithm};
pub use error::{Error, ErrorCode, Result};
pub use keys::{KeyPair, PrivateKey, PublicKey};
pub use signature::Signature;
pub use workflow::{
    sign_document, verify_document, SignOutput, SignRequest, VerificationResult, VerifyRequest,
};
