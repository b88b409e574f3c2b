// File: lib.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::bool_assert_comparison)]

pub mod cachekey;
pub mod check;
pub mod cli;
pub mod config;
pub mod errors;
pub mod getstate;
pub mod http;
pub mod httpinner;
pub mod report;

#[cfg(test)]
mod cachekey_tests;

pub use cachekey::{decode, CacheKey, Ttl, TtlUnit};
pub use errors::{CacheKeyError, ClientError};
