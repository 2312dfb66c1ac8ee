use std::fs;
use std::path::Path;

use crate::error::LocalizerError;
use crate::patch::resources_dir;

/// Recursively copy `source` into `dest`, creating directories as needed.
///
/// Files at matching relative paths are overwritten. Files that exist only in
/// `dest` are left alone. Returns the number of files copied.
pub fn copy_tree(source: &Path, dest: &Path) -> Result<usize, LocalizerError> {
    fs::create_dir_all(dest)
        .map_err(|e| LocalizerError::io("failed to create directory", dest, e))?;

    let entries = fs::read_dir(source)
        .map_err(|e| LocalizerError::io("failed to read directory", source, e))?;

    let mut copied = 0;
    for entry in entries {
        let entry = entry.map_err(|e| LocalizerError::io("failed to read directory", source, e))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if from.is_dir() {
            copied += copy_tree(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(|e| LocalizerError::io("failed to copy", &from, e))?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Copy unpacked localization files over the game's resources.
pub fn patch_game(unpacked: &Path, app_path: &Path) -> Result<usize, LocalizerError> {
    let dest = resources_dir(app_path);
    tracing::debug!("copying {} into {}", unpacked.display(), dest.display());
    copy_tree(unpacked, &dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn merges_into_existing_destination() {
        let source = tempdir().unwrap();
        let dest = tempdir().unwrap();

        fs::write(dest.path().join("x"), b"original x").unwrap();
        fs::write(dest.path().join("z"), b"untouched z").unwrap();
        fs::write(source.path().join("x"), b"localized x").unwrap();
        fs::write(source.path().join("y"), b"new y").unwrap();

        let copied = copy_tree(source.path(), dest.path()).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read(dest.path().join("x")).unwrap(), b"localized x");
        assert_eq!(fs::read(dest.path().join("y")).unwrap(), b"new y");
        assert_eq!(fs::read(dest.path().join("z")).unwrap(), b"untouched z");
    }

    #[test]
    fn copies_nested_directories() {
        let source = tempdir().unwrap();
        let dest = tempdir().unwrap();

        fs::create_dir_all(source.path().join("games/Quiplash/content")).unwrap();
        fs::write(source.path().join("games/Quiplash/content/prompts.jet"), b"ru").unwrap();
        fs::create_dir_all(dest.path().join("games/Quiplash")).unwrap();
        fs::write(dest.path().join("games/Quiplash/keep.swf"), b"swf").unwrap();

        let copied = copy_tree(source.path(), dest.path()).unwrap();

        assert_eq!(copied, 1);
        assert_eq!(
            fs::read(dest.path().join("games/Quiplash/content/prompts.jet")).unwrap(),
            b"ru"
        );
        assert!(dest.path().join("games/Quiplash/keep.swf").exists());
    }

    #[test]
    fn patch_game_targets_resources_dir() {
        let unpacked = tempdir().unwrap();
        let app = tempdir().unwrap();
        fs::write(unpacked.path().join("strings.json"), b"{}").unwrap();

        patch_game(unpacked.path(), app.path()).unwrap();

        assert!(app.path().join("Contents/Resources/macos/strings.json").exists());
    }

    #[test]
    fn missing_source_returns_error() {
        let dest = tempdir().unwrap();

        let result = copy_tree(Path::new("/nonexistent/unpacked"), dest.path());

        assert!(matches!(result, Err(LocalizerError::Io { .. })));
    }
}
