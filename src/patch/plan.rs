use std::fs;
use std::path::Path;

use crate::error::LocalizerError;
use crate::utils::hash::hash_file;

/// What copying one unpacked file would do to the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    /// File does not exist in the destination yet
    Added { file: String },
    /// File exists in the destination with different content
    Changed { file: String },
    /// File exists in the destination with identical content
    Unchanged { file: String },
}

impl FileChange {
    pub fn file(&self) -> &str {
        match self {
            FileChange::Added { file } => file,
            FileChange::Changed { file } => file,
            FileChange::Unchanged { file } => file,
        }
    }
}

/// Classification of every file in an unpacked tree against a destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchPlan {
    pub changes: Vec<FileChange>,
}

impl PatchPlan {
    pub fn added(&self) -> usize {
        self.count(|c| matches!(c, FileChange::Added { .. }))
    }

    pub fn changed(&self) -> usize {
        self.count(|c| matches!(c, FileChange::Changed { .. }))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|c| matches!(c, FileChange::Unchanged { .. }))
    }

    fn count(&self, pred: impl Fn(&FileChange) -> bool) -> usize {
        self.changes.iter().filter(|c| pred(c)).count()
    }
}

/// Compare `source` against `dest` by content hash. Read-only.
pub fn plan(source: &Path, dest: &Path) -> Result<PatchPlan, LocalizerError> {
    let mut changes = Vec::new();
    walk(source, dest, "", &mut changes)?;
    changes.sort_by(|a, b| a.file().cmp(b.file()));
    Ok(PatchPlan { changes })
}

fn walk(
    source: &Path,
    dest: &Path,
    prefix: &str,
    changes: &mut Vec<FileChange>,
) -> Result<(), LocalizerError> {
    let entries = fs::read_dir(source)
        .map_err(|e| LocalizerError::io("failed to read directory", source, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| LocalizerError::io("failed to read directory", source, e))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        let file = format!("{}{}", prefix, entry.file_name().to_string_lossy());

        if from.is_dir() {
            walk(&from, &to, &format!("{}/", file), changes)?;
            continue;
        }

        if !to.is_file() {
            changes.push(FileChange::Added { file });
            continue;
        }

        let from_hash =
            hash_file(&from).map_err(|e| LocalizerError::io("failed to read", &from, e))?;
        let to_hash = hash_file(&to).map_err(|e| LocalizerError::io("failed to read", &to, e))?;
        if from_hash == to_hash {
            changes.push(FileChange::Unchanged { file });
        } else {
            changes.push(FileChange::Changed { file });
        }
    }

    Ok(())
}
