use crate::encode::{brightness_fraction, unpack_name_utf16le, unpack_uint32_be};
use crate::error::{DimmerError, Result};
use crate::layout::ProfileLayout;

/// The fields a dimmed profile differs in, read back from raw bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileSummary {
    pub len: usize,
    pub name: String,
    /// Red, green and blue maxima as stored (`0x00010000` = full brightness).
    pub channel_maxima: [u32; 3],
}

impl ProfileSummary {
    /// Channel maxima as fractions of full brightness.
    pub fn brightness(&self) -> [f64; 3] {
        self.channel_maxima.map(brightness_fraction)
    }
}

/// Read the name and channel maxima at the offsets of `layout`.
pub fn inspect_profile(bytes: &[u8], layout: &ProfileLayout) -> Result<ProfileSummary> {
    let required = layout.required_len();
    if bytes.len() < required {
        return Err(DimmerError::ProfileTooSmall {
            len: bytes.len(),
            required,
        });
    }

    let name_end = layout.name_offset + layout.name_len();
    let name = unpack_name_utf16le(&bytes[layout.name_offset..name_end]);

    let channel_maxima = layout.channel_offsets.map(|offset| {
        let mut field = [0u8; 4];
        field.copy_from_slice(&bytes[offset..offset + 4]);
        unpack_uint32_be(field)
    });

    Ok(ProfileSummary {
        len: bytes.len(),
        name,
        channel_maxima,
    })
}
