// SPDX-FileCopyrightText: 2026 Tokenveil Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Identity Value
//!
//! The opaque authenticated-principal value that codecs encode and decode.
//! An identity is a URN plus an ordered set of string properties; ordering
//! is significant so that encoding the same identity twice yields the same
//! bytes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An authenticated principal: a URN plus optional string properties.
///
/// The distinguished [`Identity::anonymous`] value represents "nobody";
/// session layers typically wrap their codec chain in
/// [`SafeCodec`](crate::codec::SafeCodec) to keep it out of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    urn: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    properties: BTreeMap<String, String>,
}

impl Identity {
    /// Creates an identity with the given URN and no properties.
    pub fn new(urn: impl Into<String>) -> Self {
        Identity {
            urn: urn.into(),
            properties: BTreeMap::new(),
        }
    }

    /// The not-authenticated identity.
    pub fn anonymous() -> Self {
        Identity::new("")
    }

    /// Returns true for the anonymous identity.
    pub fn is_anonymous(&self) -> bool {
        self.urn.is_empty()
    }

    /// Adds a property, builder-style.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// The principal's URN.
    pub fn urn(&self) -> &str {
        &self.urn
    }

    /// Looks up a single property.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// All properties, ordered by key.
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }
}
