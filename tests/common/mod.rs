// SPDX-FileCopyrightText: 2026 Tokenveil Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Common Test Utilities
//!
//! Shared proptest strategies used across test modules.

pub mod strategies;
