// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::check::CheckOutcome;
use colored::Colorize;
use std::fmt::{self, Write};

pub enum ReportFormat {
    Text,
    Json,
}

pub fn render(outcomes: &[CheckOutcome], format: ReportFormat) -> serde_json::Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(outcomes)),
        ReportFormat::Json => render_json(outcomes),
    }
}

pub fn render_text(outcomes: &[CheckOutcome]) -> String {
    let mut out = String::new();
    for outcome in outcomes {
        // Writing into a String never fails.
        if write_outcome(&mut out, outcome).is_err() {
            break;
        }
    }
    out
}

fn write_outcome(out: &mut String, outcome: &CheckOutcome) -> fmt::Result {
    let verdict = if outcome.passed() {
        "PASS".green().bold()
    } else {
        "FAIL".red().bold()
    };
    let status = outcome
        .status
        .map_or_else(|| "-".to_string(), |s| s.to_string());
    writeln!(out, "{} {} [{}]", verdict, outcome.url.bold(), status)?;

    if let Some(key) = &outcome.cache_key {
        writeln!(out, "    {:<12}{}", "cache key", key)?;
        writeln!(
            out,
            "    {:<12}{}  {:<8}{}  {:<5}{}",
            "cp code",
            key.cp_code(),
            "serial",
            key.serial(),
            "ttl",
            key.ttl()
        )?;
        writeln!(out, "    {:<12}{}", "origin", key.origin())?;
    }
    if let Some(cacheable) = &outcome.cacheable {
        writeln!(out, "    {:<12}{}", "cacheable", cacheable)?;
    }
    if let Some(error) = &outcome.error {
        writeln!(out, "    {}", error.yellow())?;
    }
    for mismatch in &outcome.mismatches {
        writeln!(out, "    {} {}", "✗".red(), mismatch)?;
    }
    Ok(())
}

pub fn render_json(outcomes: &[CheckOutcome]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcomes)
}
