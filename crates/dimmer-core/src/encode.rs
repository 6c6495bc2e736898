use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::consts::{BRIGHTNESS_ONE, DIM_NAME_PREFIX, REFERENCE_PROFILE_NAME};
use crate::error::{DimmerError, Result};

/// Convert a brightness fraction to the profile's fixed-point representation,
/// where 1.0 is stored as `0x00010000`.
///
/// Both bounds are inclusive. NaN is rejected along with anything outside
/// `[min_brightness, 1.0]`.
pub fn encode_brightness(fraction: f64, min_brightness: f64) -> Result<u32> {
    if !(min_brightness..=1.0).contains(&fraction) {
        return Err(DimmerError::InvalidBrightness {
            value: fraction,
            min: min_brightness,
        });
    }
    Ok((fraction * BRIGHTNESS_ONE as f64).floor() as u32)
}

/// Inverse of [`encode_brightness`], up to truncation.
pub fn brightness_fraction(value: u32) -> f64 {
    value as f64 / BRIGHTNESS_ONE as f64
}

pub fn pack_uint32_be(value: u32) -> [u8; 4] {
    let mut buf = [0u8; 4];
    BigEndian::write_u32(&mut buf, value);
    buf
}

pub fn unpack_uint32_be(bytes: [u8; 4]) -> u32 {
    BigEndian::read_u32(&bytes)
}

/// UTF-16LE code units, no BOM and no terminator.
pub fn pack_name_utf16le(text: &str) -> Vec<u8> {
    let units: Vec<u16> = text.encode_utf16().collect();
    let mut buf = vec![0u8; units.len() * 2];
    LittleEndian::write_u16_into(&units, &mut buf);
    buf
}

/// Decode UTF-16LE bytes. A trailing odd byte is ignored and unpaired
/// surrogates become U+FFFD.
pub fn unpack_name_utf16le(bytes: &[u8]) -> String {
    let units = bytes.chunks_exact(2).map(LittleEndian::read_u16);
    char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// Name of a dimmed profile, e.g. `"Dim 0.3  "`, sized to match "Color LCD".
pub fn format_name(brightness: f64) -> String {
    format_name_for(brightness, REFERENCE_PROFILE_NAME)
}

/// Build `"Dim <brightness>"` and pad with spaces or truncate it to the
/// character count of `reference`.
///
/// The name is patched in place, so its encoded length has to equal the
/// length of the field it replaces.
pub fn format_name_for(brightness: f64, reference: &str) -> String {
    let width = reference.chars().count();
    // Debug keeps the trailing ".0" on whole numbers ("1.0", not "1").
    let label = format!("{DIM_NAME_PREFIX}{brightness:?}");
    format!("{label:<width$}").chars().take(width).collect()
}
