use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::LocalizerError;

/// Archive names look like `JPP5ruRussian`: pack number, language tag, free-form rest.
const PACK_VERSION_PATTERN: &str = r"^JPP([0-9]+)ru.+";

fn pack_version_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PACK_VERSION_PATTERN).expect("pack version pattern is valid"))
}

/// Party pack edition number taken from an archive name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackVersion(String);

impl PackVersion {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first pack ships without a number in its name.
    pub fn is_first(&self) -> bool {
        self.0 == "1"
    }
}

impl fmt::Display for PackVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse the pack version from an archive stem (name without extension).
pub fn parse_pack_version(stem: &str) -> Result<PackVersion, LocalizerError> {
    pack_version_re()
        .captures(stem)
        .and_then(|caps| caps.get(1))
        .map(|m| PackVersion(m.as_str().to_string()))
        .ok_or_else(|| LocalizerError::UnrecognizedArchiveName {
            name: stem.to_string(),
        })
}

/// Parse the pack version from an archive path.
pub fn archive_pack_version(archive: &Path) -> Result<PackVersion, LocalizerError> {
    let stem = archive
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    parse_pack_version(&stem)
}
