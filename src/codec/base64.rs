// SPDX-FileCopyrightText: 2026 Tokenveil Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Base64 Codec
//!
//! Decorator that re-encodes the inner codec's bytes as standard-alphabet
//! base64 ASCII. The usual outermost layer when a token has to travel in a
//! textual carrier such as a cookie or header value.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::{Codec, CodecError};
use crate::identity::Identity;

/// Decorator producing base64 text over the inner codec's bytes.
#[derive(Debug)]
pub struct Base64Codec<C> {
    origin: C,
}

impl<C: Codec> Base64Codec<C> {
    /// Wraps `origin`.
    pub fn new(origin: C) -> Self {
        Base64Codec { origin }
    }
}

impl<C: Codec> Codec for Base64Codec<C> {
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>, CodecError> {
        let raw = self.origin.encode(identity)?;
        Ok(STANDARD.encode(raw).into_bytes())
    }

    fn decode(&self, raw: &[u8]) -> Result<Identity, CodecError> {
        let decoded = STANDARD
            .decode(raw)
            .map_err(|err| CodecError::Malformed(err.to_string()))?;
        self.origin.decode(&decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::PlainCodec;

    #[test]
    fn test_round_trip() {
        let codec = Base64Codec::new(PlainCodec);
        let identity = Identity::new("urn:tokenveil:alice");
        let token = codec.encode(&identity).unwrap();
        assert_eq!(codec.decode(&token).unwrap(), identity);
    }

    #[test]
    fn test_output_is_base64_text() {
        let codec = Base64Codec::new(PlainCodec);
        let token = codec.encode(&Identity::new("urn:tokenveil:bob")).unwrap();
        assert!(token
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=')));
    }

    #[test]
    fn test_invalid_base64_is_malformed() {
        let codec = Base64Codec::new(PlainCodec);
        let err = codec.decode(b"not valid base64!").unwrap_err();
        assert!(matches!(err, CodecError::Malformed(_)));
    }
}
