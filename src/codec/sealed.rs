// SPDX-FileCopyrightText: 2026 Tokenveil Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sealed Codec
//!
//! Decorator providing real confidentiality and integrity: the inner codec's
//! bytes are encrypted with XChaCha20-Poly1305 under a 256-bit key.
//!
//! Token shape: `nonce (24 bytes) || ciphertext || tag (16 bytes)`. A fresh
//! random nonce is drawn per encode, so tokens are non-deterministic.
//! Tampered tokens and wrong keys fail decryption.

use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{XChaCha20Poly1305, XNonce};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

use super::{Codec, CodecError};
use crate::identity::Identity;

/// Nonce size for XChaCha20-Poly1305 (192 bits = 24 bytes).
const NONCE_SIZE: usize = 24;
/// Authentication tag size.
const TAG_SIZE: usize = 16;

/// 256-bit sealing key.
#[derive(Clone)]
pub struct SealKey {
    bytes: [u8; 32],
}

impl std::fmt::Debug for SealKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Don't expose key bytes in debug output
        f.debug_struct("SealKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

impl Drop for SealKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl SealKey {
    /// Generates a new random sealing key.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        SealKey { bytes }
    }

    /// Creates a key from raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        SealKey { bytes }
    }

    /// Returns a reference to the key bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }
}

/// Decorator that encrypts the inner codec's bytes.
#[derive(Debug)]
pub struct SealedCodec<C> {
    origin: C,
    key: SealKey,
}

impl<C: Codec> SealedCodec<C> {
    /// Wraps `origin`, sealing with `key`.
    pub fn new(origin: C, key: SealKey) -> Self {
        SealedCodec { origin, key }
    }
}

impl<C: Codec> Codec for SealedCodec<C> {
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>, CodecError> {
        let raw = self.origin.encode(identity)?;

        let mut nonce_bytes = [0u8; NONCE_SIZE];
        OsRng.fill_bytes(&mut nonce_bytes);

        let cipher = XChaCha20Poly1305::new(self.key.as_bytes().into());
        let nonce = XNonce::from_slice(&nonce_bytes);
        let ciphertext = cipher
            .encrypt(nonce, raw.as_slice())
            .map_err(|_| CodecError::EncryptionFailed)?;

        let mut output = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        output.extend_from_slice(&nonce_bytes);
        output.extend_from_slice(&ciphertext);
        Ok(output)
    }

    fn decode(&self, raw: &[u8]) -> Result<Identity, CodecError> {
        if raw.len() < NONCE_SIZE + TAG_SIZE {
            return Err(CodecError::Malformed("sealed token too short".into()));
        }
        let (nonce_bytes, ciphertext) = raw.split_at(NONCE_SIZE);

        let cipher = XChaCha20Poly1305::new(self.key.as_bytes().into());
        let nonce = XNonce::from_slice(nonce_bytes);
        let plaintext = cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| CodecError::DecryptionFailed)?;

        self.origin.decode(&plaintext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::PlainCodec;

    #[test]
    fn test_round_trip() {
        let codec = SealedCodec::new(PlainCodec, SealKey::generate());
        let identity = Identity::new("urn:tokenveil:alice").with_property("login", "alice");
        let token = codec.encode(&identity).unwrap();
        assert_eq!(codec.decode(&token).unwrap(), identity);
    }

    #[test]
    fn test_tampered_token_fails() {
        let codec = SealedCodec::new(PlainCodec, SealKey::generate());
        let mut token = codec.encode(&Identity::new("urn:tokenveil:bob")).unwrap();
        let last = token.len() - 1;
        token[last] ^= 0x01;
        assert!(matches!(
            codec.decode(&token).unwrap_err(),
            CodecError::DecryptionFailed
        ));
    }

    #[test]
    fn test_wrong_key_fails() {
        let encoder = SealedCodec::new(PlainCodec, SealKey::from_bytes([1u8; 32]));
        let decoder = SealedCodec::new(PlainCodec, SealKey::from_bytes([2u8; 32]));
        let token = encoder
            .encode(&Identity::new("urn:tokenveil:carol"))
            .unwrap();
        assert!(matches!(
            decoder.decode(&token).unwrap_err(),
            CodecError::DecryptionFailed
        ));
    }

    #[test]
    fn test_short_token_is_malformed() {
        let codec = SealedCodec::new(PlainCodec, SealKey::generate());
        assert!(matches!(
            codec.decode(&[0u8; 10]).unwrap_err(),
            CodecError::Malformed(_)
        ));
    }

    #[test]
    fn test_key_debug_is_redacted() {
        let printed = format!("{:?}", SealKey::from_bytes([7u8; 32]));
        assert!(printed.contains("REDACTED"));
    }
}
