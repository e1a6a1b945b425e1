// SPDX-FileCopyrightText: 2026 Tokenveil Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Salted Codec
//!
//! Decorator that prepends a random-length random salt to the inner codec's
//! bytes, so encoding the same identity twice yields different tokens.
//! Useful under an XOR mask, where equal plaintexts would otherwise produce
//! equal masked tokens.
//!
//! Token shape: `len (1 byte) || salt || inner bytes`, with `len` in 1..=16.

use rand::rngs::OsRng;
use rand::{Rng, RngCore};

use super::{Codec, CodecError};
use crate::identity::Identity;

/// Maximum salt length in bytes.
const MAX_SALT_LEN: usize = 16;

/// Decorator that salts the inner codec's bytes with random prefix bytes.
#[derive(Debug)]
pub struct SaltedCodec<C> {
    origin: C,
}

impl<C: Codec> SaltedCodec<C> {
    /// Wraps `origin`.
    pub fn new(origin: C) -> Self {
        SaltedCodec { origin }
    }
}

impl<C: Codec> Codec for SaltedCodec<C> {
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>, CodecError> {
        let raw = self.origin.encode(identity)?;

        let len = OsRng.gen_range(1..=MAX_SALT_LEN);
        let mut salt = vec![0u8; len];
        OsRng.fill_bytes(&mut salt);

        let mut output = Vec::with_capacity(1 + len + raw.len());
        output.push(len as u8);
        output.extend_from_slice(&salt);
        output.extend_from_slice(&raw);
        Ok(output)
    }

    fn decode(&self, raw: &[u8]) -> Result<Identity, CodecError> {
        let (&len, rest) = raw
            .split_first()
            .ok_or_else(|| CodecError::Malformed("empty salted token".into()))?;
        let len = len as usize;
        if len == 0 || len > MAX_SALT_LEN {
            return Err(CodecError::Malformed("salt length out of range".into()));
        }
        if rest.len() < len {
            return Err(CodecError::Malformed("salted token truncated".into()));
        }
        self.origin.decode(&rest[len..])
    }
}
