// SPDX-FileCopyrightText: 2026 Tokenveil Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Safe Codec
//!
//! Decorator that keeps the anonymous identity out of tokens: encoding it is
//! refused, and a token that decodes to it is rejected. Session layers wrap
//! their chain in this codec so "nobody" never round-trips as a principal.

use super::{Codec, CodecError};
use crate::identity::Identity;

/// Decorator that rejects the anonymous identity in both directions.
#[derive(Debug)]
pub struct SafeCodec<C> {
    origin: C,
}

impl<C: Codec> SafeCodec<C> {
    /// Wraps `origin`.
    pub fn new(origin: C) -> Self {
        SafeCodec { origin }
    }
}

impl<C: Codec> Codec for SafeCodec<C> {
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>, CodecError> {
        if identity.is_anonymous() {
            return Err(CodecError::Malformed(
                "anonymous identity cannot be encoded".into(),
            ));
        }
        self.origin.encode(identity)
    }

    fn decode(&self, raw: &[u8]) -> Result<Identity, CodecError> {
        let identity = self.origin.decode(raw)?;
        if identity.is_anonymous() {
            return Err(CodecError::Malformed(
                "token decodes to anonymous identity".into(),
            ));
        }
        Ok(identity)
    }
}
