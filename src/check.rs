// File: check.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::cachekey::CacheKey;
use crate::http::{X_CACHE_KEY, X_CHECK_CACHEABLE};
use crate::httpinner::HttpInner;
use log::{info, warn};
use serde::Serialize;

/// Expected edge behaviour for a URL. Unset fields are not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expectations {
    pub status: Option<u16>,
    pub cacheable: Option<bool>,
    pub cp_code: Option<u64>,
    pub serial: Option<u64>,
    pub ttl: Option<String>,
    pub origin: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub url: String,
    pub status: Option<u16>,
    pub cacheable: Option<String>,
    pub cache_key: Option<CacheKey>,
    pub error: Option<String>,
    pub mismatches: Vec<String>,
}

impl CheckOutcome {
    pub fn failed(url: &str, error: String) -> Self {
        CheckOutcome {
            url: url.to_string(),
            status: None,
            cacheable: None,
            cache_key: None,
            error: Some(error),
            mismatches: Vec::new(),
        }
    }

    pub fn passed(&self) -> bool {
        self.error.is_none() && self.mismatches.is_empty()
    }
}

impl Expectations {
    fn needs_cache_key(&self) -> bool {
        self.cp_code.is_some()
            || self.serial.is_some()
            || self.ttl.is_some()
            || self.origin.is_some()
    }

    pub fn evaluate(&self, response: &HttpInner) -> CheckOutcome {
        let mut mismatches = Vec::new();

        if let Some(expected) = self.status {
            if response.status() != expected {
                mismatches.push(format!(
                    "status: expected {}, got {}",
                    expected,
                    response.status()
                ));
            }
        }

        if let Some(expected) = self.cacheable {
            if response.is_cacheable() != expected {
                mismatches.push(format!(
                    "{}: expected {}, got {:?}",
                    X_CHECK_CACHEABLE,
                    if expected { "YES" } else { "NO" },
                    response.check_cacheable()
                ));
            }
        }

        // An absent header only fails when key fields are expected; a header
        // that is present but malformed always fails.
        let header_present = !response.header(X_CACHE_KEY).is_empty();
        let (cache_key, error) = match response.cache_key() {
            Ok(key) => {
                info!("{}: cache key {}", response.url(), key);
                (Some(key), None)
            }
            Err(e) if header_present || self.needs_cache_key() => {
                warn!("{}: {}", response.url(), e);
                (None, Some(e.to_string()))
            }
            Err(_) => (None, None),
        };

        if let Some(key) = &cache_key {
            self.compare_key(key, &mut mismatches);
        }

        let cacheable = match response.check_cacheable() {
            "" => None,
            value => Some(value.to_string()),
        };

        CheckOutcome {
            url: response.url().to_string(),
            status: Some(response.status()),
            cacheable,
            cache_key,
            error,
            mismatches,
        }
    }

    fn compare_key(&self, key: &CacheKey, mismatches: &mut Vec<String>) {
        if let Some(expected) = self.cp_code {
            if key.cp_code() != expected {
                mismatches.push(format!(
                    "cp code: expected {}, got {}",
                    expected,
                    key.cp_code()
                ));
            }
        }
        if let Some(expected) = self.serial {
            if key.serial() != expected {
                mismatches.push(format!(
                    "serial: expected {}, got {}",
                    expected,
                    key.serial()
                ));
            }
        }
        if let Some(expected) = &self.ttl {
            if key.ttl() != expected.as_str() {
                mismatches.push(format!("ttl: expected {}, got {}", expected, key.ttl()));
            }
        }
        if let Some(expected) = &self.origin {
            if key.origin() != expected {
                mismatches.push(format!(
                    "origin: expected {}, got {}",
                    expected,
                    key.origin()
                ));
            }
        }
    }
}
