// SPDX-FileCopyrightText: 2026 Tokenveil Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Plain Codec
//!
//! The innermost codec: serializes an identity as compact JSON. Property
//! ordering is stable (sorted by key), so encoding is deterministic.

use super::{Codec, CodecError};
use crate::identity::Identity;

/// Serializes identities as JSON bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainCodec;

impl Codec for PlainCodec {
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(identity).map_err(|err| CodecError::Malformed(err.to_string()))
    }

    fn decode(&self, raw: &[u8]) -> Result<Identity, CodecError> {
        serde_json::from_slice(raw).map_err(|err| CodecError::Malformed(err.to_string()))
    }
}
