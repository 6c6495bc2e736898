#![allow(dead_code)]

use std::path::{Path, PathBuf};

use dimmer_core::consts::{
    BLUE_MAX_OFFSET, BRIGHTNESS_ONE, COLOR_LCD_PROFILE_LEN, GREEN_MAX_OFFSET, NAME_OFFSET,
    RED_MAX_OFFSET, REFERENCE_PROFILE_NAME,
};

/// Identifier appended to "Color LCD" in synthetic profile filenames.
pub const DISPLAY_ID: &str = "-4C6E9C2A-1D3B-4F5E-8A7B-0C1D2E3F4A5B";

/// Build a profile-sized buffer that looks like a stock built-in display
/// profile at the patched offsets: "Color LCD" in the name field and full
/// brightness on every channel. Other bytes follow a repeating pattern so
/// accidental writes show up.
pub fn build_stock_profile() -> Vec<u8> {
    let mut buf: Vec<u8> = (0..COLOR_LCD_PROFILE_LEN).map(|i| (i % 251) as u8).collect();

    let mut offset = NAME_OFFSET;
    for unit in REFERENCE_PROFILE_NAME.encode_utf16() {
        buf[offset..offset + 2].copy_from_slice(&unit.to_le_bytes());
        offset += 2;
    }
    for channel in [RED_MAX_OFFSET, GREEN_MAX_OFFSET, BLUE_MAX_OFFSET] {
        buf[channel..channel + 4].copy_from_slice(&BRIGHTNESS_ONE.to_be_bytes());
    }
    buf
}

/// Write a stock profile named "Color LCD<DISPLAY_ID>.icc" into `dir`.
pub fn write_stock_profile(dir: &Path) -> PathBuf {
    let path = dir.join(format!("{REFERENCE_PROFILE_NAME}{DISPLAY_ID}.icc"));
    std::fs::write(&path, build_stock_profile()).unwrap();
    path
}

/// Byte ranges a dimmed profile is allowed to differ in.
pub fn patched_ranges() -> Vec<std::ops::Range<usize>> {
    let name_len = REFERENCE_PROFILE_NAME.encode_utf16().count() * 2;
    vec![
        NAME_OFFSET..NAME_OFFSET + name_len,
        RED_MAX_OFFSET..RED_MAX_OFFSET + 4,
        GREEN_MAX_OFFSET..GREEN_MAX_OFFSET + 4,
        BLUE_MAX_OFFSET..BLUE_MAX_OFFSET + 4,
    ]
}

pub fn in_patched_range(index: usize) -> bool {
    patched_ranges().iter().any(|r| r.contains(&index))
}
