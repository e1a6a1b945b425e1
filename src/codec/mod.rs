// SPDX-FileCopyrightText: 2026 Tokenveil Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Codec Capability
//!
//! A [`Codec`] encodes an [`Identity`] into an opaque byte token and decodes
//! it back. Decorator codecs own an inner codec of the same capability, so
//! chains like `Base64Codec(XorCodec(PlainCodec))` compose freely.
//!
//! Errors are a single opaque category: decorators propagate inner failures
//! unchanged, fail-fast, with no retries or local recovery.

pub mod base64;
pub mod hex;
pub mod plain;
pub mod safe;
pub mod salted;
pub mod sealed;
pub mod xor;

pub use self::base64::Base64Codec;
pub use self::hex::HexCodec;
pub use plain::PlainCodec;
pub use safe::SafeCodec;
pub use salted::SaltedCodec;
pub use sealed::{SealKey, SealedCodec};
pub use xor::{Secret, XorCodec};

use thiserror::Error;

use crate::identity::Identity;

/// Codec error types.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("malformed token: {0}")]
    Malformed(String),
    #[error("encryption failed")]
    EncryptionFailed,
    #[error("decryption failed: token may be corrupted or wrong key")]
    DecryptionFailed,
}

/// Encodes identities into byte tokens and back.
///
/// Implementations are stateless beyond construction-time configuration, so
/// a codec is safe for concurrent use whenever its inner codec is.
pub trait Codec {
    /// Encodes an identity into an opaque byte token.
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>, CodecError>;

    /// Decodes a byte token back into an identity.
    fn decode(&self, raw: &[u8]) -> Result<Identity, CodecError>;
}

impl<C: Codec + ?Sized> Codec for Box<C> {
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>, CodecError> {
        (**self).encode(identity)
    }

    fn decode(&self, raw: &[u8]) -> Result<Identity, CodecError> {
        (**self).decode(raw)
    }
}

impl<C: Codec + ?Sized> Codec for &C {
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>, CodecError> {
        (**self).encode(identity)
    }

    fn decode(&self, raw: &[u8]) -> Result<Identity, CodecError> {
        (**self).decode(raw)
    }
}
