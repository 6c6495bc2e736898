use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DimmerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No {prefix} profile found in {}", .dir.display())]
    ProfileNotFound { dir: PathBuf, prefix: String },

    #[error("Found {count} candidate profiles in {}, expected exactly one", .dir.display())]
    AmbiguousProfile { dir: PathBuf, count: usize },

    #[error("Brightness {value} is invalid. Must be between {min} and 1.0")]
    InvalidBrightness { value: f64, min: f64 },

    #[error("Profile too small: {len} bytes, patch needs at least {required}")]
    ProfileTooSmall { len: usize, required: usize },

    #[error("Two brightness levels map to the same output {}", .path.display())]
    DuplicateOutput { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, DimmerError>;
