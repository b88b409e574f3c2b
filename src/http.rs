// File: http.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::config::Settings;
use crate::errors::{ClientError, ClientResult};
use crate::httpinner::HttpInner;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

pub const PRAGMA: &str = "Pragma";
pub const X_CACHE_KEY: &str = "X-Cache-Key";
pub const X_CHECK_CACHEABLE: &str = "X-Check-Cacheable";

/// Edge debug directives asking for the diagnostic response headers.
pub const PRAGMA_DIAGNOSTICS: &str = "no-cache,akamai-x-cache-on,akamai-x-cache-remote-on,akamai-x-check-cacheable,akamai-x-get-cache-key,akamai-x-get-ssl-client-session-id,akamai-x-get-true-cache-key,akamai-x-serial-no,akamai-x-get-request-id,X-Akamai-CacheTrack";

#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    response_header_timeout: Duration,
}

impl Client {
    pub fn new(settings: &Settings) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .connect_timeout(settings.effective_connect_timeout())
            .danger_accept_invalid_certs(settings.skip_ssl_verify())
            .build()
            .map_err(ClientError::Build)?;
        Ok(Client {
            client,
            response_header_timeout: settings.response_header_timeout(),
        })
    }

    pub async fn get(&self, url: &str) -> ClientResult<HttpInner> {
        self.get_with_headers(url, &[]).await
    }

    /// GET `url` with the diagnostic `Pragma` directives set.
    pub async fn get_with_pragma(&self, url: &str) -> ClientResult<HttpInner> {
        self.get_with_headers(url, &[(PRAGMA, PRAGMA_DIAGNOSTICS)])
            .await
    }

    /// GET `url`, setting each header and replacing any previous value.
    pub async fn get_with_headers(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> ClientResult<HttpInner> {
        let mut header_map = HeaderMap::new();
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ClientError::InvalidHeader(format!("{}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ClientError::InvalidHeader(format!("{}: {}", name, e)))?;
            header_map.insert(name, value);
        }

        debug!("GET {} with {} extra header(s)", url, header_map.len());
        let pending = self.client.get(url).headers(header_map).send();
        let resp = match tokio::time::timeout(self.response_header_timeout, pending).await {
            Ok(result) => result?,
            Err(_) => {
                warn!("No response headers from {} in time", url);
                return Err(ClientError::ResponseHeaderTimeout(
                    self.response_header_timeout,
                ));
            }
        };

        let url = resp.url().to_string();
        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        // Drain so the connection can be reused.
        if let Err(e) = resp.bytes().await {
            debug!("Failed to read body from {}: {}", url, e);
        }
        debug!("{} answered {}", url, status);
        Ok(HttpInner::new_with_all(headers, status, url))
    }
}
