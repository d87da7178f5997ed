use crate::error::{IndexError, Result};
use crate::progress::Progress;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

/// One row of the dataset table. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub filepath: String,
    pub label: String,
}

impl Record {
    pub fn new(filepath: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            filepath: filepath.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexOptions {
    /// Sort both listings by file name instead of using the filesystem's order.
    pub sort: bool,
    /// Skip top-level entries that are not directories instead of failing.
    pub skip_non_dirs: bool,
}

/// Immediate entries of `dir`. Fails if `dir` is missing or not a directory.
fn list_dir(dir: &Path, sort: bool) -> Result<Vec<DirEntry>> {
    let meta = fs::metadata(dir).map_err(|source| IndexError::Access {
        path: dir.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(IndexError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut walker = WalkDir::new(dir).min_depth(1).max_depth(1);
    if sort {
        walker = walker.sort_by_file_name();
    }

    walker
        .into_iter()
        .map(|entry| {
            entry.map_err(|source| IndexError::Walk {
                path: source
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| dir.to_path_buf()),
                source,
            })
        })
        .collect()
}

/// Pairs every entry of every class directory under `input_root` with the
/// class directory's name. Outer order is labels, inner order is entries.
pub fn build_index(
    input_root: &Path,
    options: IndexOptions,
    progress: &mut dyn Progress,
) -> Result<Vec<Record>> {
    let candidates = list_dir(input_root, options.sort)?;
    info!(
        root = %input_root.display(),
        labels = candidates.len(),
        "Processing dataset..."
    );
    progress.labels_found(candidates.len());

    let mut records = Vec::new();

    for candidate in candidates {
        let label = candidate.file_name().to_string_lossy().into_owned();
        let label_dir = candidate.path();

        // is_dir follows symlinks, so a linked class directory still counts.
        if options.skip_non_dirs && !label_dir.is_dir() {
            debug!(path = %label_dir.display(), "Skipping non-directory entry");
            progress.label_finished(&label);
            continue;
        }

        let entries = list_dir(label_dir, options.sort)?;
        info!(label = %label, files = entries.len(), "Processing {}...", label);
        progress.label_started(&label, entries.len());

        for entry in entries {
            records.push(Record {
                filepath: entry.path().to_string_lossy().into_owned(),
                label: label.clone(),
            });
            progress.entry_indexed();
        }

        progress.label_finished(&label);
    }

    progress.finished(records.len());
    Ok(records)
}
