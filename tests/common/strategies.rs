// SPDX-FileCopyrightText: 2026 Tokenveil Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Reusable proptest strategies for property-based testing.

use proptest::prelude::*;
use tokenveil::Identity;

/// Strategy for generating URNs (non-empty, urn-shaped).
pub fn urn_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,11}(:[a-zA-Z0-9_-]{1,16}){1,3}".prop_map(|s| format!("urn:{}", s))
}

/// Strategy for generating identities with a few properties.
pub fn identity_strategy() -> impl Strategy<Value = Identity> {
    (
        urn_strategy(),
        proptest::collection::btree_map("[a-z]{1,10}", ".{0,40}", 0..4),
    )
        .prop_map(|(urn, properties)| {
            properties
                .into_iter()
                .fold(Identity::new(urn), |identity, (key, value)| {
                    identity.with_property(key, value)
                })
        })
}

/// Strategy for generating non-empty masking keys.
pub fn key_strategy() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 1..32)
}
