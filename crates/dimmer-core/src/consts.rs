/// Profile name embedded in the built-in display profile. Derived names are
/// padded or truncated to its character count.
pub const REFERENCE_PROFILE_NAME: &str = "Color LCD";

/// Extension of profile files, without the leading dot.
pub const PROFILE_EXTENSION: &str = "icc";

/// Where macOS keeps per-display ColorSync profiles.
pub const DEFAULT_PROFILE_DIR: &str = "/Library/ColorSync/Profiles/Displays";

/// Prefix of every derived profile name.
pub const DIM_NAME_PREFIX: &str = "Dim ";

/// Offset of the "en" string inside the `mluc` description tag.
pub const NAME_OFFSET: usize = 0x5b9;

/// Offsets of the red, green and blue maxima inside the `vcgt` tag.
pub const RED_MAX_OFFSET: usize = 0xf10;
pub const GREEN_MAX_OFFSET: usize = 0xf1c;
pub const BLUE_MAX_OFFSET: usize = 0xf28;

/// Size in bytes of the stock built-in display profile the offsets above belong to.
pub const COLOR_LCD_PROFILE_LEN: usize = 4088;

/// Fixed-point value of full brightness (1.0).
pub const BRIGHTNESS_ONE: u32 = 0x0001_0000;

/// Lowest brightness accepted by default. Anything darker is unusable.
pub const DEFAULT_MIN_BRIGHTNESS: f64 = 0.05;

/// Brightness levels generated by a default batch, ascending.
pub const DEFAULT_BRIGHTNESS_LEVELS: [f64; 9] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];
