// SPDX-FileCopyrightText: 2026 Tokenveil Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tokenveil Core Library
//!
//! Composable codecs for identity tokens. An [`Identity`] is an opaque
//! authenticated-principal value; a [`Codec`] turns it into an opaque byte
//! token and back. Codecs nest decorator-style, so obfuscation, encryption,
//! salting and text-safe surfaces can be stacked freely:
//!
//! ```
//! use tokenveil::{Base64Codec, Codec, Identity, PlainCodec, XorCodec};
//!
//! let codec = Base64Codec::new(XorCodec::new(PlainCodec, "swordfish"));
//! let identity = Identity::new("urn:tokenveil:alice");
//! let token = codec.encode(&identity).unwrap();
//! assert_eq!(codec.decode(&token).unwrap(), identity);
//! ```
//!
//! Codec boundaries are bytes, not strings: XOR masking and encryption are
//! only round-trip-safe at the byte level. Wrap a chain in [`Base64Codec`]
//! or [`HexCodec`] when a token must travel as text.

pub mod codec;
pub mod identity;

pub use codec::{
    Base64Codec, Codec, CodecError, HexCodec, PlainCodec, SafeCodec, SaltedCodec, SealKey,
    SealedCodec, Secret, XorCodec,
};
pub use identity::Identity;
