// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how suggestions get their numbers.
//!
//! Match quality dominates. With equal counts, a prefix match beats a
//! word-start match no matter the lengths involved; the constants are checked
//! at compile time in [`crate::contracts`].

mod core;
pub mod ranking;

pub use core::*;
