use serde::{Deserialize, Serialize};

use crate::consts::{
    BLUE_MAX_OFFSET, COLOR_LCD_PROFILE_LEN, GREEN_MAX_OFFSET, NAME_OFFSET, RED_MAX_OFFSET,
    REFERENCE_PROFILE_NAME,
};

/// Byte offsets of the patched fields for one known profile layout.
///
/// Offsets are absolute positions in the file. Nothing here is derived from
/// the profile's tag table, so a layout is only valid for the exact file it
/// was measured on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileLayout {
    /// Name stored in the unmodified profile. Also the filename prefix used
    /// to locate it.
    pub reference_name: String,
    /// Start of the UTF-16LE name field.
    pub name_offset: usize,
    /// Red, green and blue maxima, 4 bytes big-endian each.
    pub channel_offsets: [usize; 3],
    /// Length of the profile the offsets were measured on.
    pub expected_len: usize,
}

impl Default for ProfileLayout {
    fn default() -> Self {
        Self {
            reference_name: REFERENCE_PROFILE_NAME.to_string(),
            name_offset: NAME_OFFSET,
            channel_offsets: [RED_MAX_OFFSET, GREEN_MAX_OFFSET, BLUE_MAX_OFFSET],
            expected_len: COLOR_LCD_PROFILE_LEN,
        }
    }
}

impl ProfileLayout {
    /// Encoded byte length of the name field.
    pub fn name_len(&self) -> usize {
        self.reference_name.encode_utf16().count() * 2
    }

    /// Smallest profile length that contains every patched range.
    pub fn required_len(&self) -> usize {
        self.channel_offsets
            .iter()
            .map(|&offset| offset + 4)
            .chain(std::iter::once(self.name_offset + self.name_len()))
            .max()
            .unwrap_or(0)
    }
}
