use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::LocalizerError;

/// Extension (without the dot) that marks a file as a localization archive.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Expand a leading `~` to the current user's home directory.
pub fn expand_home(path: &Path) -> Result<PathBuf, LocalizerError> {
    match path.strip_prefix("~") {
        Ok(rest) => {
            let home = dirs::home_dir().ok_or(LocalizerError::HomeDirUnknown)?;
            Ok(home.join(rest))
        }
        Err(_) => Ok(path.to_path_buf()),
    }
}

/// Whether a directory entry name is an eligible archive.
///
/// The extension check is case-sensitive: `pack.ZIP` is not picked up.
fn is_archive_name(name: &str) -> bool {
    !name.starts_with('.')
        && Path::new(name).extension().and_then(|ext| ext.to_str()) == Some(ARCHIVE_EXTENSION)
}

/// List all regular files directly inside `dir` that look like archives.
/// Returns full paths sorted by file name.
pub fn list_archives(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut archives = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if is_archive_name(name) {
                archives.push(path);
            }
        }
    }

    archives.sort();
    Ok(archives)
}

/// Discover the archives a run will process.
///
/// Fails if `dir` is missing, is not a directory, or holds no archives.
pub fn discover_archives(dir: &Path) -> Result<Vec<PathBuf>, LocalizerError> {
    if !dir.exists() {
        return Err(LocalizerError::ArchiveDirMissing(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(LocalizerError::ArchiveDirNotADirectory(dir.to_path_buf()));
    }

    let archives = list_archives(dir)
        .map_err(|e| LocalizerError::io("failed to read directory", dir, e))?;

    if archives.is_empty() {
        return Err(LocalizerError::NoArchives(dir.to_path_buf()));
    }

    Ok(archives)
}
