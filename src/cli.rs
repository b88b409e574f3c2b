// File: cli.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::check::Expectations;
use crate::config::Settings;
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
pub struct Cli {
    #[arg(required = true, help = "URLs to request with diagnostic Pragma headers")]
    pub urls: Vec<String>,

    #[arg(long = "log-level", default_value = "warn")]
    pub log_level: String,

    #[arg(long = "no-color", help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long = "json", help = "Print results as JSON")]
    pub json: bool,

    #[arg(
        short = 't',
        long = "timeout",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Overall request timeout in seconds"
    )]
    pub timeout: u64,

    #[arg(
        long = "connect-timeout",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub connect_timeout: u64,

    #[arg(
        long = "tls-handshake-timeout",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tls_handshake_timeout: u64,

    #[arg(
        long = "response-header-timeout",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub response_header_timeout: u64,

    #[arg(short = 'k', long = "insecure", help = "Skip TLS certificate verification")]
    pub insecure: bool,

    #[arg(long = "expect-status")]
    pub expect_status: Option<u16>,

    #[arg(long = "expect-cacheable")]
    pub expect_cacheable: Option<bool>,

    #[arg(long = "expect-cp-code")]
    pub expect_cp_code: Option<u64>,

    #[arg(long = "expect-serial")]
    pub expect_serial: Option<u64>,

    #[arg(long = "expect-ttl", help = "Expected TTL token, e.g. 3h")]
    pub expect_ttl: Option<String>,

    #[arg(long = "expect-origin", help = "Expected forward path")]
    pub expect_origin: Option<String>,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::new();
        settings.set_timeout(Duration::from_secs(self.timeout));
        settings.set_connect_timeout(Duration::from_secs(self.connect_timeout));
        settings.set_tls_handshake_timeout(Duration::from_secs(self.tls_handshake_timeout));
        settings.set_response_header_timeout(Duration::from_secs(self.response_header_timeout));
        settings.set_skip_ssl_verify(self.insecure);
        settings
    }

    pub fn expectations(&self) -> Expectations {
        Expectations {
            status: self.expect_status,
            cacheable: self.expect_cacheable,
            cp_code: self.expect_cp_code,
            serial: self.expect_serial,
            ttl: self.expect_ttl.clone(),
            origin: self.expect_origin.clone(),
        }
    }
}
