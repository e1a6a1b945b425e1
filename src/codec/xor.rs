// SPDX-FileCopyrightText: 2026 Tokenveil Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! XOR Masking Codec
//!
//! Obfuscates the byte output of an inner codec with a repeating-key XOR.
//! XOR is self-inverse, so the same transform masks on encode and unmasks on
//! decode. This is obfuscation, not encryption: a short repeating key is
//! trivially breakable. Use [`SealedCodec`](super::SealedCodec) where real
//! confidentiality is needed.
//!
//! A token masked with one key and unmasked with another turns into garbage
//! bytes; this codec does not detect that itself, it relies on the inner
//! codec to reject the result.

use zeroize::Zeroize;

use super::{Codec, CodecError};
use crate::identity::Identity;

/// Masking key bytes, owned and immutable once constructed.
///
/// Construction copies the caller's buffer, so later mutation of the
/// original cannot change this codec's behavior. An empty secret is valid
/// and makes the mask a no-op.
#[derive(Clone)]
pub struct Secret {
    bytes: Vec<u8>,
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Don't expose key bytes in debug output
        f.debug_struct("Secret")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl Secret {
    /// Returns the key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// True when the secret holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<&str> for Secret {
    fn from(key: &str) -> Self {
        Secret {
            bytes: key.as_bytes().to_vec(),
        }
    }
}

impl From<&[u8]> for Secret {
    fn from(key: &[u8]) -> Self {
        Secret {
            bytes: key.to_vec(),
        }
    }
}

impl<const N: usize> From<[u8; N]> for Secret {
    fn from(key: [u8; N]) -> Self {
        Secret {
            bytes: key.to_vec(),
        }
    }
}

impl From<Vec<u8>> for Secret {
    fn from(bytes: Vec<u8>) -> Self {
        Secret { bytes }
    }
}

/// Decorator that XOR-masks the inner codec's bytes in both directions.
#[derive(Debug)]
pub struct XorCodec<C> {
    origin: C,
    secret: Secret,
}

impl<C: Codec> XorCodec<C> {
    /// Wraps `origin`, masking with `key`.
    ///
    /// The key may be given as text, a byte slice or an owned buffer; its
    /// bytes are copied into the codec.
    pub fn new(origin: C, key: impl Into<Secret>) -> Self {
        XorCodec {
            origin,
            secret: key.into(),
        }
    }
}

impl<C: Codec> Codec for XorCodec<C> {
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>, CodecError> {
        let raw = self.origin.encode(identity)?;
        Ok(xor(&raw, self.secret.as_bytes()))
    }

    fn decode(&self, raw: &[u8]) -> Result<Identity, CodecError> {
        self.origin.decode(&xor(raw, self.secret.as_bytes()))
    }
}

/// Repeating-key XOR over `input`.
///
/// The key cycles from its first byte on every call; an empty key copies the
/// input unchanged. Output length always equals input length, and applying
/// the transform twice with the same key restores the original bytes.
fn xor(input: &[u8], secret: &[u8]) -> Vec<u8> {
    if secret.is_empty() {
        return input.to_vec();
    }
    input
        .iter()
        .zip(secret.iter().cycle())
        .map(|(byte, key)| byte ^ key)
        .collect()
}
