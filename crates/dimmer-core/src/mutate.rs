use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::consts::{DEFAULT_MIN_BRIGHTNESS, PROFILE_EXTENSION, REFERENCE_PROFILE_NAME};
use crate::encode::{encode_brightness, format_name_for, pack_name_utf16le, pack_uint32_be};
use crate::error::{DimmerError, Result};
use crate::layout::ProfileLayout;

/// Create a dimmed copy of the built-in display profile.
///
/// Returns `(profile name, profile bytes)`. `base` is left untouched.
pub fn create_profile(base: &[u8], brightness: f64) -> Result<(String, Vec<u8>)> {
    create_profile_with(
        base,
        brightness,
        &ProfileLayout::default(),
        DEFAULT_MIN_BRIGHTNESS,
    )
}

/// Create a dimmed copy of `base`, patching the fields described by `layout`.
///
/// The name is written over the localized description and the same
/// brightness integer over each of the three channel maxima. Every other
/// byte, including the header checksum and tag offsets, is copied as is, so
/// the output has exactly the length of `base`.
pub fn create_profile_with(
    base: &[u8],
    brightness: f64,
    layout: &ProfileLayout,
    min_brightness: f64,
) -> Result<(String, Vec<u8>)> {
    let brightness_int = encode_brightness(brightness, min_brightness)?;
    let name = format_name_for(brightness, &layout.reference_name);
    let name_bytes = pack_name_utf16le(&name);

    let required = layout
        .required_len()
        .max(layout.name_offset + name_bytes.len());
    if base.len() < required {
        return Err(DimmerError::ProfileTooSmall {
            len: base.len(),
            required,
        });
    }
    if base.len() != layout.expected_len {
        warn!(
            len = base.len(),
            expected = layout.expected_len,
            "Profile size differs from the layout it is patched with"
        );
    }

    let mut profile = base.to_vec();

    let name_range = layout.name_offset..layout.name_offset + name_bytes.len();
    profile[name_range].copy_from_slice(&name_bytes);

    let brightness_bytes = pack_uint32_be(brightness_int);
    for &offset in &layout.channel_offsets {
        profile[offset..offset + brightness_bytes.len()].copy_from_slice(&brightness_bytes);
    }

    debug!(
        brightness,
        brightness_int,
        name = name.as_str(),
        "Patched profile"
    );
    Ok((name, profile))
}

/// Output path for a derived profile: `<output_dir>/<name><id>.icc`, where
/// `<id>` is whatever follows "Color LCD" in the input file stem.
pub fn build_output_path(input_path: &Path, name: &str, output_dir: &Path) -> PathBuf {
    build_output_path_for(input_path, name, output_dir, REFERENCE_PROFILE_NAME)
}

/// Like [`build_output_path`] with an explicit filename prefix to strip.
/// A stem that doesn't start with `prefix` is kept whole.
pub fn build_output_path_for(
    input_path: &Path,
    name: &str,
    output_dir: &Path,
    prefix: &str,
) -> PathBuf {
    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let suffix = stem.strip_prefix(prefix).unwrap_or(&stem);
    output_dir.join(format!("{name}{suffix}.{PROFILE_EXTENSION}"))
}
