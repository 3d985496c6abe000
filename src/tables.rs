// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Built-in entity and cue code tables

use std::collections::BTreeMap;

/// Six-letter entity prefix to folder name
pub const ENTITY_CODES: &[(&str, &str)] = &[
    ("MAANTT", "ant"),
    ("MABRAN", "king_rat"),
    ("MACLAW", "adult_deathclaw"),
    ("MACLW2", "baby_deathclaw"),
    ("MACYBR", "robo_dog"),
    ("MADDOG", "dog"),
    ("MADEGG", "egg"),
    ("MADETH", "grey_deathclaw"),
    ("MAFEYE", "eye_robot"),
    ("MAFIRE", "fire_gecko"),
    ("MAGCKO", "golden_gecko"),
    ("MAGUN2", "plasma_turret"),
    ("MAGUNN", "mini_turret"),
    ("MAHAND", "mr_handy"),
    ("MALIEN", "alien_wanamingo"),
    ("MAMANT", "mantis"),
    ("MAMRAT", "mole_rat"),
    ("MAMTN2", "super_mutant_leather"),
    ("MAMTNT", "super_mutant"),
    ("MAMURT", "pig_rat"),
    ("MAPLNT", "mutant_plant"),
    ("MAQUEN", "queen_wanamingo"),
    ("MAROBE", "goris"),
    ("MAROBO", "brain_bot"),
    ("MAROBT", "assault_bot"),
    ("MASCRP", "radscorpion"),
    ("MASPHN", "floater"),
    ("MASRAT", "rat"),
    ("MATHNG", "centaur"),
];

/// Two-letter cue code to action folder name
pub const CUE_CODES: &[(&str, &str)] = &[
    ("AA", "Idle"),
    ("AN", "Dodge"),
    ("AO", "Hit"),
    ("AQ", "Attack"),
    ("LK", "Attack"),
    ("KL", "Attack"),
    ("JK", "Attack"),
    ("MJ", "Attack"),
    ("IK", "Attack"),
    ("HJ", "Attack"),
    ("GM", "Attack"),
    ("FG", "Attack"),
    ("DM", "Attack"),
    ("BA", "Falling"),
    ("BB", "Falling"),
    ("BC", "Falling"),
    ("BD", "HoleInBody"),
    ("BE", "Burned"),
    ("BK", "Burned"),
    ("BI", "SlicedInTwo"),
    ("BL", "Exploded"),
    ("BG", "Perforated"),
    ("BF", "RippedApart"),
    ("BM", "Meltdown"),
    ("BH", "Electrocuted"),
    ("BO", "Bleeding"),
    ("BP", "Bleeding"),
    ("CJ", "GetUp"),
    ("YA", "Death"),
    ("ZA", "Death"),
    ("ZB", "Death"),
    ("ZR", "Death"),
    ("ZQ", "Death"),
];

/// Collect a built-in table into an owned map
pub fn to_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Read-only code lookup table
#[derive(Debug, Clone)]
pub struct CodeTable {
    entries: BTreeMap<String, String>,
}

impl CodeTable {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn builtin_entities() -> Self {
        Self::new(to_map(ENTITY_CODES))
    }

    pub fn builtin_cues() -> Self {
        Self::new(to_map(CUE_CODES))
    }

    /// Look up a code (exact, case-sensitive)
    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
