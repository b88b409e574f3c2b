// File: main.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::Parser;
use edgecheck::check::CheckOutcome;
use edgecheck::cli::Cli;
use edgecheck::getstate::GetState;
use edgecheck::http::Client;
use edgecheck::report::{self, ReportFormat};
use futures::stream::{FuturesUnordered, StreamExt};
use log::{error, LevelFilter};
use simple_logger::SimpleLogger;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = LevelFilter::from_str(&cli.log_level).unwrap_or(LevelFilter::Warn);
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("Failed to initialize logger: {}", e);
    }
    if cli.no_color {
        colored::control::set_override(false);
    }

    let client = match Client::new(&cli.settings()) {
        Ok(client) => client,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(2);
        }
    };
    let expectations = Arc::new(cli.expectations());
    let state = Arc::new(GetState::new());

    let mut futures = FuturesUnordered::new();
    for url in cli.urls.iter().cloned() {
        let client = client.clone();
        let expectations = Arc::clone(&expectations);
        let state = Arc::clone(&state);
        futures.push(tokio::spawn(async move {
            let outcome = match client.get_with_pragma(&url).await {
                Ok(response) => expectations.evaluate(&response),
                Err(e) => {
                    error!("{}: {}", url, e);
                    CheckOutcome::failed(&url, e.to_string())
                }
            };
            state.record(outcome.passed());
            outcome
        }));
    }

    let mut outcomes = Vec::new();
    while let Some(task) = futures.next().await {
        match task {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => error!("Probe task failed: {}", e),
        }
    }
    outcomes.sort_by(|a, b| a.url.cmp(&b.url));

    let format = if cli.json {
        ReportFormat::Json
    } else {
        ReportFormat::Text
    };
    match report::render(&outcomes, format) {
        Ok(rendered) => print!("{}", rendered),
        Err(e) => {
            error!("Failed to render report: {}", e);
            return ExitCode::from(2);
        }
    }
    if cli.json {
        println!();
    } else {
        println!(
            "\n{} checks. Passed: {}. Failed: {}.",
            state.total_checks(),
            state.passed_checks(),
            state.failed_checks()
        );
    }

    if state.all_passed() && outcomes.len() == cli.urls.len() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
