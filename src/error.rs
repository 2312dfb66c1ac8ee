use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Homebrew bootstrap command shown when neither `unar` nor `brew` is available.
pub const BREW_INSTALL_HINT: &str = r#"/bin/bash -c "$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)""#;

/// Error type for every localizer operation.
#[derive(Debug, Error)]
pub enum LocalizerError {
    /// Archive directory does not exist
    #[error("{} does not exist", .0.display())]
    ArchiveDirMissing(PathBuf),
    /// Archive directory path points at something other than a directory
    #[error("{} is not a directory", .0.display())]
    ArchiveDirNotADirectory(PathBuf),
    /// Archive directory contains no eligible archives
    #[error("{} does not contain any zip archives", .0.display())]
    NoArchives(PathBuf),
    /// Archive name does not carry a pack version
    #[error("cannot detect party pack version from archive name '{name}'")]
    UnrecognizedArchiveName { name: String },
    /// Steam library directory not found
    #[error("{} does not exist, is Steam installed?", .0.display())]
    SteamLibraryMissing(PathBuf),
    /// Home directory could not be determined
    #[error("cannot determine the home directory")]
    HomeDirUnknown,
    /// An external program could not be found on PATH
    #[error("'{0}' not found")]
    ToolNotFound(String),
    /// Neither the extractor nor the package manager is installed
    #[error("'{extractor}' is not installed and '{package_manager}' is missing; install brew first: {hint}")]
    PackageManagerMissing {
        extractor: String,
        package_manager: String,
        hint: &'static str,
    },
    /// Extractor is still missing after an install attempt
    #[error("'{0}' is still unavailable after installing it")]
    ExtractorUnavailable(String),
    /// External program could not be started
    #[error("failed to run '{program}': {source}")]
    ToolFailed {
        program: String,
        #[source]
        source: io::Error,
    },
    /// Extractor reported success but did not produce the expected directory
    #[error("extraction finished but {} was not created", .0.display())]
    ExtractedDirMissing(PathBuf),
    /// Extractor exited with a failure status
    #[error("failed to extract {}", .0.display())]
    ExtractionFailed(PathBuf),
    /// Filesystem operation failed on a path
    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LocalizerError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        LocalizerError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn package_manager_message_includes_hint() {
        let err = LocalizerError::PackageManagerMissing {
            extractor: "unar".to_string(),
            package_manager: "brew".to_string(),
            hint: BREW_INSTALL_HINT,
        };

        let message = err.to_string();

        assert!(message.contains("install brew first"));
        assert!(message.contains("Homebrew/install"));
    }

    #[test]
    fn io_error_names_path_and_action() {
        let err = LocalizerError::io(
            "failed to copy",
            Path::new("/tmp/a.bin"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );

        assert_eq!(err.to_string(), "failed to copy /tmp/a.bin: denied");
    }
}
