use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use dimmer_core::consts::DEFAULT_PROFILE_DIR;
use dimmer_core::inspect::inspect_profile;
use dimmer_core::io::profile_io::read_profile;
use dimmer_core::layout::ProfileLayout;
use dimmer_core::locate::find_base_profile;

#[derive(Args)]
pub struct InfoArgs {
    /// Profile to inspect [default: the "Color LCD" profile in --search-dir]
    pub file: Option<PathBuf>,

    /// Directory scanned when no file is given
    #[arg(long, default_value = DEFAULT_PROFILE_DIR)]
    pub search_dir: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let path = match args.file {
        Some(ref file) => file.clone(),
        None => find_base_profile(&args.search_dir).context("Failed to locate base profile")?,
    };
    let bytes =
        read_profile(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let summary = inspect_profile(&bytes, &ProfileLayout::default())?;
    let [red, green, blue] = summary.channel_maxima;
    let [red_f, green_f, blue_f] = summary.brightness();

    println!("File:        {}", path.display());
    println!("Size:        {} bytes", summary.len);
    println!("Name:        {:?}", summary.name);
    println!("Red max:     {:#010x} ({:.4})", red, red_f);
    println!("Green max:   {:#010x} ({:.4})", green, green_f);
    println!("Blue max:    {:#010x} ({:.4})", blue, blue_f);

    Ok(())
}
