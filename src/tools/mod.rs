//! External programs: the `unar` extractor and the `brew` package manager.

pub mod prereq;
pub mod unar;

use std::ffi::OsStr;
use std::io;
use std::process::{Command, ExitStatus};

use crate::error::LocalizerError;

pub use prereq::{ensure_extractor, ToolStatus};
pub use unar::extract;

/// Program names used for extraction and for installing the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub extractor: String,
    pub package_manager: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            extractor: "unar".to_string(),
            package_manager: "brew".to_string(),
        }
    }
}

/// Captured result of a finished subprocess.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Run `program` with `args` and wait for it to exit.
///
/// Returns `Ok(None)` when the program is not installed, so callers can
/// decide whether that is fatal.
pub fn run_tool<I, S>(program: &str, args: I) -> Result<Option<ToolOutput>, LocalizerError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(program);
    cmd.args(args);
    tracing::debug!("running {:?}", cmd);

    match cmd.output() {
        Ok(output) => Ok(Some(ToolOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(LocalizerError::ToolFailed {
            program: program.to_string(),
            source: e,
        }),
    }
}

#[cfg(all(test, unix))]
pub(crate) mod testing {
    //! Shell-script stand-ins for external programs.

    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    /// Write an executable script named `name` into `dir` and return its path.
    pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// A fake `unar` that honors `-o <dir>` and unpacks `<stem>/strings.json`
    /// containing the archive's own bytes. Exits 1 for archives whose name contains `Broken`.
    pub fn fake_unar(dir: &Path) -> PathBuf {
        write_script(
            dir,
            "unar",
            r#"
if [ "$1" = "-v" ]; then echo "unar v1.10.8"; exit 0; fi
out=""
while [ $# -gt 1 ]; do
  if [ "$1" = "-o" ]; then out="$2"; shift; fi
  shift
done
archive="$1"
name=$(basename "$archive" .zip)
case "$name" in *Broken*) echo "cannot open $archive" >&2; exit 1;; esac
mkdir -p "$out/$name/text"
cp "$archive" "$out/$name/strings.json"
echo "translated" > "$out/$name/text/menu.txt"
"#,
        )
    }
}
