use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::LocalizerError;
use crate::game::{app_display_name, SteamLibrary};
use crate::patch::{patch_game, plan, resources_dir, PatchPlan};
use crate::tools::{ensure_extractor, extract};
use crate::utils::dir_scan::discover_archives;
use crate::utils::version::archive_pack_version;

/// Progress information for the archive about to be processed.
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    pub archive: &'a Path,
    pub index: usize,
    pub total: usize,
}

/// What happened to one archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Files were copied into the game
    Patched { files: usize, plan: PatchPlan },
    /// Everything but the copy was done
    DryRun { plan: PatchPlan },
    /// The matching game edition is not installed
    Skipped,
    /// The archive could not be processed
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReport {
    pub archive: PathBuf,
    pub outcome: Outcome,
}

/// Per-archive results of a whole run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub reports: Vec<ArchiveReport>,
}

impl RunSummary {
    pub fn patched(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Patched { .. }))
    }

    pub fn dry_run(&self) -> usize {
        self.count(|o| matches!(o, Outcome::DryRun { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed { .. }))
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Warn about archives that cannot be installed before doing any work.
fn preflight(library: &SteamLibrary, archives: &[PathBuf]) {
    for archive in archives {
        match archive_pack_version(archive) {
            Ok(version) => {
                if library.locate(&version).is_none() {
                    tracing::warn!(
                        "you have localization {}, but no game installed at {}",
                        archive.display(),
                        library.app_path(&version).display()
                    );
                }
            }
            Err(e) => tracing::warn!("{}: {}", archive.display(), e),
        }
    }
}

/// Remove the working directory left by a previous run and create it empty.
fn recreate_dir(path: &Path) -> Result<(), LocalizerError> {
    if path.exists() {
        fs::remove_dir_all(path)
            .map_err(|e| LocalizerError::io("failed to clear directory", path, e))?;
    }
    fs::create_dir_all(path).map_err(|e| LocalizerError::io("failed to create directory", path, e))
}

fn process_archive(
    settings: &Settings,
    library: &SteamLibrary,
    archive: &Path,
    work_dir: &Path,
) -> Result<Outcome, LocalizerError> {
    let version = archive_pack_version(archive)?;
    let Some(app_path) = library.locate(&version) else {
        tracing::info!(
            "Skipping {}: party pack {} is not installed",
            archive.display(),
            version
        );
        return Ok(Outcome::Skipped);
    };
    let app_name = app_display_name(&app_path);

    tracing::info!("Unzipping: {} into {}", archive.display(), work_dir.display());
    let unpacked = extract(&settings.tools.extractor, archive, work_dir)?
        .ok_or_else(|| LocalizerError::ExtractionFailed(archive.to_path_buf()))?;
    tracing::info!(
        "Successful, files are under: {}, detected version of party pack is {}",
        unpacked.display(),
        version
    );

    let plan = plan(&unpacked, &resources_dir(&app_path))?;

    if settings.dry_run {
        tracing::info!(
            "{} is not patched, due to flag \"--dry-run\" (would add {}, change {}, keep {} files)",
            app_name,
            plan.added(),
            plan.changed(),
            plan.unchanged()
        );
        return Ok(Outcome::DryRun { plan });
    }

    let files = patch_game(&unpacked, &app_path)?;
    tracing::info!(
        "{} is patched successfully! ({} files copied: {} added, {} changed)",
        app_name,
        files,
        plan.added(),
        plan.changed()
    );
    Ok(Outcome::Patched { files, plan })
}

/// Install every localization archive in `settings.archive_dir`.
///
/// Workflow:
/// 1. Discover archives and open the Steam library
/// 2. Warn about archives that cannot be matched to an installed game
/// 3. Make sure the extractor is installed
/// 4. Recreate the working directory
/// 5. Extract and patch each archive; failures are recorded per archive
///
/// Only setup failures are returned as errors.
pub fn run<F>(settings: &Settings, mut on_progress: Option<F>) -> Result<RunSummary, LocalizerError>
where
    F: FnMut(Progress),
{
    let archives = discover_archives(&settings.archive_dir)?;
    let library = SteamLibrary::open(&settings.steam_common)?;

    preflight(&library, &archives);
    ensure_extractor(&settings.tools)?;

    let work_dir = settings.work_dir();
    recreate_dir(&work_dir)?;

    let total = archives.len();
    let mut summary = RunSummary::default();
    for (index, archive) in archives.iter().enumerate() {
        if let Some(ref mut callback) = on_progress {
            callback(Progress {
                archive,
                index,
                total,
            });
        }

        let outcome = match process_archive(settings, &library, archive, &work_dir) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("{}: {}", archive.display(), e);
                Outcome::Failed {
                    reason: e.to_string(),
                }
            }
        };
        summary.reports.push(ArchiveReport {
            archive: archive.clone(),
            outcome,
        });
    }

    if summary.has_failures() {
        tracing::warn!(
            "Finished with errors: {} patched, {} dry run, {} skipped, {} failed",
            summary.patched(),
            summary.dry_run(),
            summary.skipped(),
            summary.failed()
        );
    } else {
        tracing::info!("All packs are patched successfully!");
    }

    Ok(summary)
}
