use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LocalizerError;
use crate::tools::run_tool;

/// Unpack `archive` into `out_dir` with `unar`, overwriting existing output.
///
/// `unar` places the contents under `<out_dir>/<archive stem>`; that path is
/// returned on success. A non-zero exit gives `Ok(None)` and leaves any
/// partial output in place.
pub fn extract(
    extractor: &str,
    archive: &Path,
    out_dir: &Path,
) -> Result<Option<PathBuf>, LocalizerError> {
    fs::create_dir_all(out_dir)
        .map_err(|e| LocalizerError::io("failed to create directory", out_dir, e))?;

    let args: [&OsStr; 5] = [
        OsStr::new("-f"),
        OsStr::new("-q"),
        OsStr::new("-o"),
        out_dir.as_os_str(),
        archive.as_os_str(),
    ];
    let output = run_tool(extractor, args)?
        .ok_or_else(|| LocalizerError::ToolNotFound(extractor.to_string()))?;

    if !output.success() {
        tracing::warn!(
            "{} exited with {} for {}: {}",
            extractor,
            output.status,
            archive.display(),
            output.stderr.trim()
        );
        return Ok(None);
    }

    let stem = archive.file_stem().unwrap_or_default();
    let unpacked = out_dir.join(stem);
    if !unpacked.is_dir() {
        return Err(LocalizerError::ExtractedDirMissing(unpacked));
    }
    Ok(Some(unpacked))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::tools::testing::{fake_unar, write_script};
    use tempfile::tempdir;

    #[test]
    fn extracts_into_stem_directory() {
        let bin = tempdir().unwrap();
        let work = tempdir().unwrap();
        let unar = fake_unar(bin.path());
        let archive = work.path().join("JPP5ruRussian.zip");
        fs::write(&archive, b"{\"hello\": \"privet\"}").unwrap();
        let out_dir = work.path().join("unarchived");

        let unpacked = extract(unar.to_str().unwrap(), &archive, &out_dir)
            .unwrap()
            .unwrap();

        assert_eq!(unpacked, out_dir.join("JPP5ruRussian"));
        assert_eq!(
            fs::read(unpacked.join("strings.json")).unwrap(),
            b"{\"hello\": \"privet\"}"
        );
    }

    #[test]
    fn failed_extraction_returns_none() {
        let bin = tempdir().unwrap();
        let work = tempdir().unwrap();
        let unar = fake_unar(bin.path());
        let archive = work.path().join("JPP5ruBroken.zip");
        fs::write(&archive, b"not a zip").unwrap();

        let result = extract(unar.to_str().unwrap(), &archive, &work.path().join("out")).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn success_without_output_is_an_error() {
        let bin = tempdir().unwrap();
        let work = tempdir().unwrap();
        let unar = write_script(bin.path(), "unar", "exit 0");
        let archive = work.path().join("JPP2ruFull.zip");
        fs::write(&archive, b"zip").unwrap();

        let result = extract(unar.to_str().unwrap(), &archive, &work.path().join("out"));

        assert!(matches!(result, Err(LocalizerError::ExtractedDirMissing(_))));
    }

    #[test]
    fn missing_extractor_is_an_error() {
        let work = tempdir().unwrap();
        let archive = work.path().join("JPP2ruFull.zip");

        let result = extract("/nonexistent/unar", &archive, &work.path().join("out"));

        assert!(matches!(result, Err(LocalizerError::ToolNotFound(_))));
    }
}
