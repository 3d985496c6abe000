// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

#![no_main]

use cuesort::classifier::classify;
use cuesort::router::Router;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|name: &str| {
    if let Some(entry) = classify(name, ".ogg") {
        assert!(entry.entity_code.chars().count() <= 6);
        assert!(entry.cue_code.chars().count() <= 2);
        let _ = Router::builtin().route(&entry);
    }
});
