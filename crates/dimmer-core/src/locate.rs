use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::consts::{PROFILE_EXTENSION, REFERENCE_PROFILE_NAME};
use crate::error::{DimmerError, Result};

/// What to do when more than one file in the search directory looks like the
/// base profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPolicy {
    /// Take the first candidate in directory listing order.
    #[default]
    FirstMatch,
    /// Fail unless exactly one candidate exists.
    RequireUnique,
}

impl std::fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FirstMatch => write!(f, "First match"),
            Self::RequireUnique => write!(f, "Require unique"),
        }
    }
}

/// List regular files directly inside `search_dir` whose name starts with
/// `prefix` and whose extension is `.icc`, in listing order.
pub fn find_candidates(search_dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();
    for entry in fs::read_dir(search_dir)? {
        let path = entry?.path();
        if is_candidate(&path, prefix) {
            debug!(path = %path.display(), "Candidate base profile");
            candidates.push(path);
        }
    }
    Ok(candidates)
}

fn is_candidate(path: &Path, prefix: &str) -> bool {
    let name_matches = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with(prefix));
    let ext_matches = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == PROFILE_EXTENSION);
    name_matches && ext_matches && path.is_file()
}

/// Pick the base profile among the candidates according to `policy`.
pub fn resolve_base_profile(
    search_dir: &Path,
    prefix: &str,
    policy: MatchPolicy,
) -> Result<PathBuf> {
    let mut candidates = find_candidates(search_dir, prefix)?;
    let count = candidates.len();

    if count == 0 {
        return Err(DimmerError::ProfileNotFound {
            dir: search_dir.to_path_buf(),
            prefix: prefix.to_string(),
        });
    }

    if count > 1 {
        match policy {
            MatchPolicy::RequireUnique => {
                return Err(DimmerError::AmbiguousProfile {
                    dir: search_dir.to_path_buf(),
                    count,
                });
            }
            MatchPolicy::FirstMatch => {
                warn!(
                    count,
                    chosen = %candidates[0].display(),
                    "Multiple base profiles found, using the first one"
                );
            }
        }
    }

    Ok(candidates.swap_remove(0))
}

/// Find the built-in display's "Color LCD*.icc" profile in `search_dir`.
pub fn find_base_profile(search_dir: &Path) -> Result<PathBuf> {
    resolve_base_profile(search_dir, REFERENCE_PROFILE_NAME, MatchPolicy::FirstMatch)
}

/// Output directory for derived profiles. Falls back to the search directory;
/// the path is not created or checked here.
pub fn resolve_output_dir(cli_arg: Option<&Path>, search_dir: &Path) -> PathBuf {
    cli_arg.unwrap_or(search_dir).to_path_buf()
}
