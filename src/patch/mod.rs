pub mod apply;
pub mod plan;

use std::path::{Path, PathBuf};

use crate::game::RESOURCES_SUBDIR;

pub use apply::{copy_tree, patch_game};
pub use plan::{plan, FileChange, PatchPlan};

/// Directory inside an installed bundle that localized files are copied into.
pub fn resources_dir(app_path: &Path) -> PathBuf {
    app_path.join(RESOURCES_SUBDIR)
}
