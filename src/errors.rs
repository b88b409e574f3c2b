// File: errors.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheKeyError {
    /// The header value does not match the cache key grammar in its entirety.
    InvalidCacheKeyFormat(String),
}

impl fmt::Display for CacheKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCacheKeyFormat(value) => {
                write!(f, "X-Cache-Key value not valid: {:?}", value)
            }
        }
    }
}

impl std::error::Error for CacheKeyError {}

#[derive(Debug)]
pub enum ClientError {
    Build(reqwest::Error),
    Request(reqwest::Error),
    InvalidHeader(String),
    ResponseHeaderTimeout(Duration),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build(e) => write!(f, "Failed to build HTTP client: {}", e),
            Self::Request(e) => write!(f, "Request failed: {}", e),
            Self::InvalidHeader(msg) => write!(f, "Invalid request header: {}", msg),
            Self::ResponseHeaderTimeout(d) => {
                write!(f, "No response headers within {:.1}s", d.as_secs_f64())
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Build(e) => Some(e),
            Self::Request(e) => Some(e),
            Self::InvalidHeader(_) => None,
            Self::ResponseHeaderTimeout(_) => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        Self::Request(error)
    }
}

pub type CacheKeyResult<T> = Result<T, CacheKeyError>;
pub type ClientResult<T> = Result<T, ClientError>;
