//! Making sure the extractor is installed before any archive is touched.

use crate::error::{LocalizerError, BREW_INSTALL_HINT};
use crate::tools::{run_tool, Toolchain, ToolOutput};

/// How the extractor became available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStatus {
    /// Already on PATH
    Present,
    /// Installed through the package manager during this run
    Installed,
}

fn report_version(program: &str, output: &ToolOutput) {
    if output.success() {
        tracing::info!("You have {} installed: {}", program, output.stdout.trim());
    } else {
        tracing::warn!(
            "'{} -v' exited with {}: {}",
            program,
            output.status,
            output.stderr.trim()
        );
    }
}

/// Check that the extractor is installed, installing it once through the
/// package manager if it is not.
///
/// Side effect: may run `brew install unar` on the host.
pub fn ensure_extractor(tools: &Toolchain) -> Result<ToolStatus, LocalizerError> {
    if let Some(output) = run_tool(&tools.extractor, ["-v"])? {
        report_version(&tools.extractor, &output);
        return Ok(ToolStatus::Present);
    }

    tracing::warn!("{} not found, trying to install it", tools.extractor);

    if run_tool(&tools.package_manager, ["-v"])?.is_none() {
        return Err(LocalizerError::PackageManagerMissing {
            extractor: tools.extractor.clone(),
            package_manager: tools.package_manager.clone(),
            hint: BREW_INSTALL_HINT,
        });
    }

    tracing::info!("Installing {} with {}", tools.extractor, tools.package_manager);
    let install = run_tool(&tools.package_manager, ["install", tools.extractor.as_str()])?
        .ok_or_else(|| LocalizerError::ToolNotFound(tools.package_manager.clone()))?;
    if !install.success() {
        tracing::warn!(
            "'{} install {}' exited with {}: {}",
            tools.package_manager,
            tools.extractor,
            install.status,
            install.stderr.trim()
        );
    }

    match run_tool(&tools.extractor, ["-v"])? {
        Some(output) => {
            report_version(&tools.extractor, &output);
            Ok(ToolStatus::Installed)
        }
        None => Err(LocalizerError::ExtractorUnavailable(tools.extractor.clone())),
    }
}
