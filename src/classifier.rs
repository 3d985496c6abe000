// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Filename classification into entity and cue codes

/// Length of the entity code prefix
pub const ENTITY_CODE_LEN: usize = 6;
/// Length of the cue code following the entity code
pub const CUE_CODE_LEN: usize = 2;

/// A candidate file with its embedded codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub entity_code: String,
    pub cue_code: String,
}

/// Classify a file name.
///
/// Returns `None` unless `name` ends with `extension` (exact, case-sensitive).
/// The stem is everything before the first `.`; codes are taken by character
/// offset and come out short or empty for short stems.
pub fn classify(name: &str, extension: &str) -> Option<FileEntry> {
    if !name.ends_with(extension) {
        return None;
    }

    let stem = name.split('.').next().unwrap_or("");
    let entity_code: String = stem.chars().take(ENTITY_CODE_LEN).collect();
    let cue_code: String = stem
        .chars()
        .skip(ENTITY_CODE_LEN)
        .take(CUE_CODE_LEN)
        .collect();

    Some(FileEntry {
        name: name.to_string(),
        entity_code,
        cue_code,
    })
}
