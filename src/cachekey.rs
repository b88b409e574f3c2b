// File: cachekey.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

//! Decoder for the `X-Cache-Key` diagnostic response header.
//!
//! The edge returns the cache key as a `/` delimited positional string:
//!
//! ```text
//! [S]/L/<serial>/<cp code>/<ttl><unit>/<forward path>[?<query string>]
//! ```
//!
//! A value is either decoded completely or rejected with
//! [`CacheKeyError::InvalidCacheKeyFormat`]. A non-secure key may start
//! with either `/L/` or `L/`. The first `?` after the forward
//! path starts the query string, which is kept verbatim and may contain
//! further `?` characters.

use crate::errors::{CacheKeyError, CacheKeyResult};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

static CACHE_KEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(?:(S)/|(/))?(L)/([0-9]+)/([0-9]+)/([0-9]+)([msh])/([^?]+)(\?.*)?$")
        .expect("cache key pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TtlUnit {
    Seconds,
    Minutes,
    Hours,
}

impl TtlUnit {
    fn from_char(c: char) -> Option<Self> {
        match c {
            's' => Some(Self::Seconds),
            'm' => Some(Self::Minutes),
            'h' => Some(Self::Hours),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::Seconds => 's',
            Self::Minutes => 'm',
            Self::Hours => 'h',
        }
    }

    fn seconds(&self) -> u64 {
        match self {
            Self::Seconds => 1,
            Self::Minutes => 60,
            Self::Hours => 3600,
        }
    }
}

/// Time to live of the cached object, e.g. `3h`.
///
/// `Display` gives back the token exactly as the edge would print it, modulo
/// leading zeros in the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ttl {
    value: u64,
    unit: TtlUnit,
}

impl Ttl {
    pub fn new(value: u64, unit: TtlUnit) -> Self {
        Ttl { value, unit }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn unit(&self) -> TtlUnit {
        self.unit
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(self.value.saturating_mul(self.unit.seconds()))
    }
}

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.as_char())
    }
}

impl PartialEq<str> for Ttl {
    fn eq(&self, other: &str) -> bool {
        other.parse::<Ttl>().map_or(false, |ttl| ttl == *self)
    }
}

impl PartialEq<&str> for Ttl {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl FromStr for Ttl {
    type Err = CacheKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CacheKeyError::InvalidCacheKeyFormat(s.to_string());
        let unit_char = s.chars().last().ok_or_else(invalid)?;
        let unit = TtlUnit::from_char(unit_char).ok_or_else(invalid)?;
        let digits = &s[..s.len() - unit_char.len_utf8()];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value = digits.parse::<u64>().map_err(|_| invalid())?;
        Ok(Ttl { value, unit })
    }
}

impl Serialize for Ttl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A decoded `X-Cache-Key` value. Only obtainable through [`decode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheKey {
    secure: bool,
    #[serde(skip)]
    leading_slash: bool,
    type_code: char,
    serial: u64,
    cp_code: u64,
    ttl: Ttl,
    forward_path: String,
    query_string: Option<String>,
}

/// Decodes one `X-Cache-Key` header value.
pub fn decode(input: &str) -> CacheKeyResult<CacheKey> {
    let invalid = || CacheKeyError::InvalidCacheKeyFormat(input.to_string());
    let caps = CACHE_KEY_PATTERN.captures(input).ok_or_else(invalid)?;

    let serial = caps[4].parse::<u64>().map_err(|_| invalid())?;
    let cp_code = caps[5].parse::<u64>().map_err(|_| invalid())?;
    let ttl_value = caps[6].parse::<u64>().map_err(|_| invalid())?;
    let unit = caps[7]
        .chars()
        .next()
        .and_then(TtlUnit::from_char)
        .ok_or_else(invalid)?;

    let key = CacheKey {
        secure: caps.get(1).is_some(),
        leading_slash: caps.get(2).is_some(),
        type_code: 'L',
        serial,
        cp_code,
        ttl: Ttl::new(ttl_value, unit),
        forward_path: caps[8].to_string(),
        query_string: caps.get(9).map(|m| m.as_str().to_string()),
    };
    debug!("Decoded cache key {:?}", key);
    Ok(key)
}

impl CacheKey {
    pub fn decode(input: &str) -> CacheKeyResult<Self> {
        decode(input)
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// `"S"` for secure delivery, `""` otherwise.
    pub fn secure_delivery_indicator(&self) -> &'static str {
        if self.secure {
            "S"
        } else {
            ""
        }
    }

    pub fn type_code(&self) -> char {
        self.type_code
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }

    pub fn cp_code(&self) -> u64 {
        self.cp_code
    }

    pub fn ttl(&self) -> &Ttl {
        &self.ttl
    }

    pub fn forward_path(&self) -> &str {
        &self.forward_path
    }

    pub fn origin(&self) -> &str {
        self.forward_path()
    }

    /// Query string including its leading `?`.
    pub fn query_string(&self) -> Option<&str> {
        self.query_string.as_deref()
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.secure {
            f.write_str("S/")?;
        } else if self.leading_slash {
            f.write_str("/")?;
        }
        write!(
            f,
            "{}/{}/{}/{}/{}",
            self.type_code, self.serial, self.cp_code, self.ttl, self.forward_path
        )?;
        if let Some(query) = &self.query_string {
            f.write_str(query)?;
        }
        Ok(())
    }
}

impl FromStr for CacheKey {
    type Err = CacheKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}
