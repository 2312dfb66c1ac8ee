//! Locating installed Jackbox Party Pack editions inside the Steam library.
//!
//! Steam on macOS keeps each game under
//! `~/Library/Application Support/Steam/steamapps/common/<Game>/<Game>.app`.

use std::path::{Path, PathBuf};

use crate::error::LocalizerError;
use crate::utils::version::PackVersion;

/// Steam library location relative to the home directory
pub const STEAM_COMMON_SUBDIR: &str = "Library/Application Support/Steam/steamapps/common";
/// Name of the first party pack; later packs append their number
pub const GAME_NAME: &str = "The Jackbox Party Pack";
/// Directory inside the app bundle that receives localized resources
pub const RESOURCES_SUBDIR: &str = "Contents/Resources/macos";

/// Default `steamapps/common` directory for the current user.
pub fn default_steam_common() -> Result<PathBuf, LocalizerError> {
    let home = dirs::home_dir().ok_or(LocalizerError::HomeDirUnknown)?;
    Ok(home.join(STEAM_COMMON_SUBDIR))
}

/// Game directory and bundle name for a pack edition.
pub fn bundle_name(version: &PackVersion) -> String {
    if version.is_first() {
        GAME_NAME.to_string()
    } else {
        format!("{} {}", GAME_NAME, version)
    }
}

/// The `steamapps/common` directory of an existing Steam installation.
#[derive(Debug, Clone)]
pub struct SteamLibrary {
    common: PathBuf,
}

impl SteamLibrary {
    /// Open the library, failing if Steam is not installed there.
    pub fn open(common: &Path) -> Result<Self, LocalizerError> {
        if !common.is_dir() {
            return Err(LocalizerError::SteamLibraryMissing(common.to_path_buf()));
        }
        Ok(Self {
            common: common.to_path_buf(),
        })
    }

    /// Where the bundle for `version` would be, whether or not it is installed.
    pub fn app_path(&self, version: &PackVersion) -> PathBuf {
        let name = bundle_name(version);
        self.common.join(&name).join(format!("{}.app", name))
    }

    /// Installed bundle for `version`, or `None` when that edition is not installed.
    pub fn locate(&self, version: &PackVersion) -> Option<PathBuf> {
        let path = self.app_path(version);
        if path.is_dir() { Some(path) } else { None }
    }
}

/// Display name of an installed bundle (`The Jackbox Party Pack 5`).
pub fn app_display_name(app_path: &Path) -> String {
    app_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| app_path.display().to_string())
}
