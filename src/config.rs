// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client settings. Each caller builds its own and hands it to
/// [`crate::http::Client::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    tls_handshake_timeout: Duration,
    connect_timeout: Duration,
    response_header_timeout: Duration,
    timeout: Duration,
    skip_ssl_verify: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    pub fn new() -> Self {
        Self {
            tls_handshake_timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_TIMEOUT,
            response_header_timeout: DEFAULT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
            skip_ssl_verify: false,
        }
    }

    pub fn set_tls_handshake_timeout(&mut self, timeout: Duration) {
        self.tls_handshake_timeout = timeout;
    }

    pub fn tls_handshake_timeout(&self) -> Duration {
        self.tls_handshake_timeout
    }

    pub fn set_connect_timeout(&mut self, timeout: Duration) {
        self.connect_timeout = timeout;
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// reqwest has a single connect phase covering TCP and TLS.
    pub fn effective_connect_timeout(&self) -> Duration {
        self.connect_timeout.max(self.tls_handshake_timeout)
    }

    pub fn set_response_header_timeout(&mut self, timeout: Duration) {
        self.response_header_timeout = timeout;
    }

    pub fn response_header_timeout(&self) -> Duration {
        self.response_header_timeout
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn set_skip_ssl_verify(&mut self, skip_ssl_verify: bool) {
        self.skip_ssl_verify = skip_ssl_verify;
    }

    pub fn skip_ssl_verify(&self) -> bool {
        self.skip_ssl_verify
    }
}
