//! Byte, base64, PEM and UTF-8 text conversions.
//!
//! The PEM reader is intentionally lenient: it drops blank lines and any line
//! containing one of the four recognized RSA marker substrings, then base64
//! decodes whatever is left. It does not check that BEGIN and END agree, nor
//! that markers are present at all, so a bare base64 blob decodes too.
//! Whitespace anywhere in the body is ignored and `=` padding is optional.

use base64::alphabet;
use base64::engine::{general_purpose, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

use crate::error::{Error, Result};

/// Maximum number of base64 characters per PEM body line.
pub const PEM_LINE_WIDTH: usize = 64;

const PEM_LINE_ENDING: &str = "\r\n";

/// Standard alphabet, padding accepted but not required.
const PEM_BODY_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

const RECOGNIZED_MARKERS: [&str; 4] = [
    "-BEGIN RSA PRIVATE KEY-",
    "-BEGIN RSA PUBLIC KEY-",
    "-END RSA PRIVATE KEY-",
    "-END RSA PUBLIC KEY-",
];

/// Label placed in the BEGIN/END lines of a PEM block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PemLabel {
    RsaPublicKey,
    RsaPrivateKey,
}

impl PemLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PemLabel::RsaPublicKey => "RSA PUBLIC KEY",
            PemLabel::RsaPrivateKey => "RSA PRIVATE KEY",
        }
    }
}

impl std::fmt::Display for PemLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Standard, padded base64 without line breaks.
pub fn bytes_to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode standard base64. Whitespace is rejected here; use [`decode_pem`]
/// for multi-line input.
pub fn base64_to_bytes(text: &str) -> Result<Vec<u8>> {
    Ok(general_purpose::STANDARD.decode(text)?)
}

/// Armor `bytes` as a PEM block with CRLF line endings.
///
/// Every line, including the END marker, is CRLF-terminated.
pub fn encode_pem(bytes: &[u8], label: PemLabel) -> String {
    let encoded = bytes_to_base64(bytes);
    let body_lines = (encoded.len() + PEM_LINE_WIDTH - 1) / PEM_LINE_WIDTH;
    let mut pem = String::with_capacity(encoded.len() + body_lines * 2 + 64);

    pem.push_str("-----BEGIN ");
    pem.push_str(label.as_str());
    pem.push_str("-----");
    pem.push_str(PEM_LINE_ENDING);

    // base64 output is ASCII, so any byte offset is a char boundary
    let mut start = 0;
    while start < encoded.len() {
        let end = usize::min(start + PEM_LINE_WIDTH, encoded.len());
        pem.push_str(&encoded[start..end]);
        pem.push_str(PEM_LINE_ENDING);
        start = end;
    }

    pem.push_str("-----END ");
    pem.push_str(label.as_str());
    pem.push_str("-----");
    pem.push_str(PEM_LINE_ENDING);
    pem
}

/// Recover the bytes from PEM text.
pub fn decode_pem(pem: &str) -> Result<Vec<u8>> {
    let encoded: String = pem
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .filter(|line| !RECOGNIZED_MARKERS.iter().any(|m| line.contains(m)))
        .flat_map(|line| line.chars().filter(|c| !c.is_ascii_whitespace()))
        .collect();

    PEM_BODY_ENGINE
        .decode(&encoded)
        .map_err(|e| Error::Decode(format!("invalid PEM body: {}", e)))
}

/// UTF-8 encode.
pub fn encode_text(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Strict UTF-8 decode.
pub fn decode_text(bytes: &[u8]) -> Result<String> {
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// UTF-8 decode replacing malformed sequences with U+FFFD.
pub fn decode_text_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
