// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Single-pass classify-and-move over a root directory

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::classifier::classify;
use crate::mover::{ensure_dir, move_file};
use crate::router::{Route, Router};
use crate::scanner::{scan_dir, should_process};
use crate::{AppConfig, Result};

/// Per-run switches
#[derive(Debug, Clone, Copy, Default)]
pub struct SortOptions {
    /// Resolve destinations without touching the filesystem
    pub dry_run: bool,
    /// Abort the batch on the first filesystem error
    pub fail_fast: bool,
}

/// What happened to one candidate file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FileOutcome {
    Moved { from: PathBuf, to: PathBuf },
    Planned { from: PathBuf, to: PathBuf },
    UnknownEntity { file: PathBuf, code: String },
    UnknownCue { file: PathBuf, code: String },
    Failed { file: PathBuf, error: String },
}

/// Summary of a sort run
#[derive(Debug, Clone, Default, Serialize)]
pub struct SortReport {
    pub root: PathBuf,
    pub dry_run: bool,
    /// Entries that were not candidates (wrong extension, hidden, non-UTF-8)
    pub ignored: usize,
    pub outcomes: Vec<FileOutcome>,
}

impl SortReport {
    pub fn moved(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Moved { .. }))
    }

    pub fn planned(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Planned { .. }))
    }

    pub fn unknown_entities(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::UnknownEntity { .. }))
    }

    pub fn unknown_cues(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::UnknownCue { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

/// Classifier-mover built from an [`AppConfig`]
pub struct Sorter {
    router: Router,
    extension: String,
    skip_hidden: bool,
}

impl Sorter {
    pub fn new(config: &AppConfig) -> Self {
        let router = Router::new(config.entity_table(), config.cue_table());
        if router.entities().is_empty() || router.cues().is_empty() {
            warn!("A code table is empty; no file will be moved");
        }

        Self {
            router,
            extension: config.extension.clone(),
            skip_hidden: config.skip_hidden,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Sort every candidate directly inside `root`.
    ///
    /// A missing root is always an error. Per-file filesystem errors are
    /// recorded as [`FileOutcome::Failed`] unless `fail_fast` is set, in which
    /// case the first one is returned.
    pub fn run(&self, root: &Path, options: SortOptions) -> Result<SortReport> {
        let mut report = SortReport {
            root: root.to_path_buf(),
            dry_run: options.dry_run,
            ..Default::default()
        };

        for path in scan_dir(root)? {
            match self.process(root, &path, options) {
                Ok(Some(outcome)) => report.outcomes.push(outcome),
                Ok(None) => report.ignored += 1,
                Err(e) if options.fail_fast => return Err(e),
                Err(e) => {
                    error!("Failed to sort {:?}: {}", path, e);
                    report.outcomes.push(FileOutcome::Failed {
                        file: path,
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }

    /// Handle one entry; `Ok(None)` means it was not a candidate
    fn process(&self, root: &Path, path: &Path, options: SortOptions) -> Result<Option<FileOutcome>> {
        if !should_process(path, self.skip_hidden) {
            return Ok(None);
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            debug!("Skipping non UTF-8 name: {:?}", path);
            return Ok(None);
        };
        let Some(entry) = classify(name, &self.extension) else {
            return Ok(None);
        };

        let (entity_dir, action) = match self.router.route(&entry) {
            Route::Destination { entity, action } => (root.join(entity), action),
            Route::UnknownEntity(code) => {
                debug!("Entity code not found {} ({})", code, name);
                return Ok(Some(FileOutcome::UnknownEntity {
                    file: path.to_path_buf(),
                    code,
                }));
            }
            Route::UnknownCue(code) => {
                warn!("Cue code not found {} ({})", code, name);
                return Ok(Some(FileOutcome::UnknownCue {
                    file: path.to_path_buf(),
                    code,
                }));
            }
        };

        let dir = entity_dir.join(action);
        let target = dir.join(&entry.name);
        if options.dry_run {
            info!("DRY RUN: Would move {:?} to {:?}", path, target);
            return Ok(Some(FileOutcome::Planned {
                from: path.to_path_buf(),
                to: target,
            }));
        }

        ensure_dir(&entity_dir)?;
        ensure_dir(&dir)?;
        move_file(path, &target)?;
        Ok(Some(FileOutcome::Moved {
            from: path.to_path_buf(),
            to: target,
        }))
    }
}
