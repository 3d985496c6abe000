// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Resolving classified files to destination folders

use crate::classifier::FileEntry;
use crate::tables::CodeTable;

/// Where a classified file should go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Both codes resolved
    Destination {
        entity: String,
        action: String,
    },
    /// Entity code not in the table
    UnknownEntity(String),
    /// Entity resolved, cue code not in the table
    UnknownCue(String),
}

/// Entity and cue tables used for routing
#[derive(Debug, Clone)]
pub struct Router {
    entities: CodeTable,
    cues: CodeTable,
}

impl Router {
    pub fn new(entities: CodeTable, cues: CodeTable) -> Self {
        Self { entities, cues }
    }

    /// Router over the built-in tables
    pub fn builtin() -> Self {
        Self::new(CodeTable::builtin_entities(), CodeTable::builtin_cues())
    }

    /// Resolve an entry. The cue code is only consulted once the entity matched.
    pub fn route(&self, entry: &FileEntry) -> Route {
        let Some(entity) = self.entities.get(&entry.entity_code) else {
            return Route::UnknownEntity(entry.entity_code.clone());
        };

        match self.cues.get(&entry.cue_code) {
            Some(action) => Route::Destination {
                entity: entity.to_string(),
                action: action.to_string(),
            },
            None => Route::UnknownCue(entry.cue_code.clone()),
        }
    }

    pub fn entities(&self) -> &CodeTable {
        &self.entities
    }

    pub fn cues(&self) -> &CodeTable {
        &self.cues
    }
}
