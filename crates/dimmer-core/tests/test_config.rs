use std::path::PathBuf;

use dimmer_core::batch::config::BatchConfig;
use dimmer_core::consts::{DEFAULT_BRIGHTNESS_LEVELS, DEFAULT_PROFILE_DIR};
use dimmer_core::layout::ProfileLayout;
use dimmer_core::locate::MatchPolicy;

#[test]
fn test_default_config() {
    let config = BatchConfig::default();
    assert_eq!(config.search_dir, PathBuf::from(DEFAULT_PROFILE_DIR));
    assert_eq!(config.output_dir, None);
    assert_eq!(config.levels, DEFAULT_BRIGHTNESS_LEVELS.to_vec());
    assert_eq!(config.min_brightness, 0.05);
    assert_eq!(config.match_policy, MatchPolicy::FirstMatch);
    assert_eq!(config.layout, ProfileLayout::default());
}

#[test]
fn test_default_layout_offsets() {
    let layout = ProfileLayout::default();
    assert_eq!(layout.reference_name, "Color LCD");
    assert_eq!(layout.name_offset, 0x5b9);
    assert_eq!(layout.channel_offsets, [0xf10, 0xf1c, 0xf28]);
    assert_eq!(layout.expected_len, 4088);
    assert_eq!(layout.name_len(), 18);
    assert_eq!(layout.required_len(), 0xf2c);
}

#[test]
fn test_config_toml_roundtrip() {
    let config = BatchConfig {
        output_dir: Some(PathBuf::from("/tmp/dimmed")),
        levels: vec![0.25, 0.75],
        match_policy: MatchPolicy::RequireUnique,
        ..BatchConfig::default()
    };
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: BatchConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_config_partial_toml_uses_defaults() {
    let parsed: BatchConfig = toml::from_str(
        r#"
        search_dir = "/profiles"
        levels = [0.5]
        "#,
    )
    .unwrap();
    assert_eq!(parsed.search_dir, PathBuf::from("/profiles"));
    assert_eq!(parsed.output_dir, None);
    assert_eq!(parsed.levels, vec![0.5]);
    assert_eq!(parsed.min_brightness, 0.05);
    assert_eq!(parsed.layout, ProfileLayout::default());
}

#[test]
fn test_config_partial_layout() {
    let parsed: BatchConfig = toml::from_str(
        r#"
        match_policy = "RequireUnique"

        [layout]
        name_offset = 100
        "#,
    )
    .unwrap();
    assert_eq!(parsed.match_policy, MatchPolicy::RequireUnique);
    assert_eq!(parsed.layout.name_offset, 100);
    assert_eq!(parsed.layout.reference_name, "Color LCD");
    assert_eq!(parsed.layout.channel_offsets, [0xf10, 0xf1c, 0xf28]);
}

#[test]
fn test_empty_toml_is_default() {
    let parsed: BatchConfig = toml::from_str("").unwrap();
    assert_eq!(parsed, BatchConfig::default());
}
