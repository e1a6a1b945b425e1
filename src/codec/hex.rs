// SPDX-FileCopyrightText: 2026 Tokenveil Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Hex Codec
//!
//! Decorator that re-encodes the inner codec's bytes as lowercase hex ASCII.
//! Twice the size of base64 but survives any carrier.

use super::{Codec, CodecError};
use crate::identity::Identity;

/// Decorator producing lowercase hex text over the inner codec's bytes.
#[derive(Debug)]
pub struct HexCodec<C> {
    origin: C,
}

impl<C: Codec> HexCodec<C> {
    /// Wraps `origin`.
    pub fn new(origin: C) -> Self {
        HexCodec { origin }
    }
}

impl<C: Codec> Codec for HexCodec<C> {
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>, CodecError> {
        let raw = self.origin.encode(identity)?;
        Ok(hex::encode(raw).into_bytes())
    }

    fn decode(&self, raw: &[u8]) -> Result<Identity, CodecError> {
        let decoded = hex::decode(raw).map_err(|err| CodecError::Malformed(err.to_string()))?;
        self.origin.decode(&decoded)
    }
}
