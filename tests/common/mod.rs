// File: common/mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use wiremock::matchers::{header_exists, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const MOCK_CACHE_KEY: &str = "S/L/8888/666666/3h/www.mockorig.com/it/donna";

/// Starts an origin that answers like an edge server: the diagnostic headers
/// only show up when the request carries a `Pragma` header.
pub async fn setup_edge_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header_exists("pragma"))
        .respond_with(
            ResponseTemplate::new(200)
                .append_header("X-Cache-Key", MOCK_CACHE_KEY)
                .append_header("X-Check-Cacheable", "YES"),
        )
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    server
}
