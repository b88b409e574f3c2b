// File: getstate.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::sync::atomic::{AtomicUsize, Ordering};

/// Pass/fail counters shared between probe tasks.
#[derive(Debug, Default)]
pub struct GetState {
    total_checks: AtomicUsize,
    passed_checks: AtomicUsize,
    failed_checks: AtomicUsize,
}

impl GetState {
    pub fn new() -> GetState {
        GetState::default()
    }

    pub fn record(&self, passed: bool) {
        self.total_checks.fetch_add(1, Ordering::Relaxed);
        if passed {
            self.passed_checks.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed_checks.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn total_checks(&self) -> usize {
        self.total_checks.load(Ordering::Relaxed)
    }

    pub fn passed_checks(&self) -> usize {
        self.passed_checks.load(Ordering::Relaxed)
    }

    pub fn failed_checks(&self) -> usize {
        self.failed_checks.load(Ordering::Relaxed)
    }

    pub fn all_passed(&self) -> bool {
        self.failed_checks() == 0
    }
}
