// File: httpinner.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::cachekey::{self, CacheKey};
use crate::errors::CacheKeyResult;
use crate::http::{X_CACHE_KEY, X_CHECK_CACHEABLE};
use reqwest::header::HeaderMap;

/// Status line and headers of one response.
#[derive(Debug, Clone)]
pub struct HttpInner {
    headers: HeaderMap,
    status: u16,
    url: String,
}

impl HttpInner {
    pub fn new_with_all(headers: HeaderMap, status: u16, url: String) -> Self {
        HttpInner {
            headers,
            status,
            url,
        }
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// First value of `name`, or `""` when the header is absent or not text.
    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
    }

    pub fn check_cacheable(&self) -> &str {
        self.header(X_CHECK_CACHEABLE)
    }

    pub fn is_cacheable(&self) -> bool {
        self.check_cacheable().eq_ignore_ascii_case("YES")
    }

    pub fn cache_key(&self) -> CacheKeyResult<CacheKey> {
        cachekey::decode(self.header(X_CACHE_KEY))
    }
}
