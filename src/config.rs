use std::path::{Path, PathBuf};

use crate::error::LocalizerError;
use crate::game::default_steam_common;
use crate::tools::Toolchain;
use crate::utils::dir_scan::expand_home;

/// Name of the working directory created next to the archives.
pub const UNARCHIVED_DIR_NAME: &str = "unarchived";

/// Everything a localizer run needs.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding the localization archives
    pub archive_dir: PathBuf,
    /// Skip copying into game files
    pub dry_run: bool,
    /// Steam `steamapps/common` directory
    pub steam_common: PathBuf,
    pub tools: Toolchain,
}

impl Settings {
    /// Build settings from command-line values, filling in defaults.
    pub fn new(
        archive_dir: &Path,
        dry_run: bool,
        steam_common: Option<&Path>,
    ) -> Result<Self, LocalizerError> {
        let steam_common = match steam_common {
            Some(path) => expand_home(path)?,
            None => default_steam_common()?,
        };
        Ok(Self {
            archive_dir: expand_home(archive_dir)?,
            dry_run,
            steam_common,
            tools: Toolchain::default(),
        })
    }

    /// Working directory for unpacked archives.
    pub fn work_dir(&self) -> PathBuf {
        self.archive_dir.join(UNARCHIVED_DIR_NAME)
    }
}
