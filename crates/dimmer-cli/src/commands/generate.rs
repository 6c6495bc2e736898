use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use dimmer_core::batch::config::BatchConfig;
use dimmer_core::batch::{run_batch_reported, BatchReporter, BatchStage};
use dimmer_core::locate::MatchPolicy;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::summary::{print_batch_summary, print_written_profiles};

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to which to write color profiles [default: the search directory]
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Directory scanned for the "Color LCD" base profile
    #[arg(long)]
    pub search_dir: Option<PathBuf>,

    /// Batch config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fail instead of picking one when several base profiles match
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: &GenerateArgs) -> Result<()> {
    let config = build_config(args)?;
    debug!(?config, "Batch config");

    print_batch_summary(&config);

    let reporter = BarReporter::new()?;
    let output = run_batch_reported(&config, &reporter)
        .context("Failed to generate dimmed profiles")?;
    reporter.bar.finish_with_message("Done");

    print_written_profiles(&output);
    Ok(())
}

/// Load the config file if one was given, then apply command-line overrides.
fn build_config(args: &GenerateArgs) -> Result<BatchConfig> {
    let mut config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid batch config")?
    } else {
        BatchConfig::default()
    };

    if let Some(ref dir) = args.search_dir {
        config.search_dir = dir.clone();
    }
    if let Some(ref dir) = args.output_dir {
        config.output_dir = Some(dir.clone());
    }
    if args.strict {
        config.match_policy = MatchPolicy::RequireUnique;
    }
    Ok(config)
}

/// Drives an indicatif bar from batch progress.
struct BarReporter {
    bar: ProgressBar,
}

impl BarReporter {
    fn new() -> Result<Self> {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg:24} [{bar:40}] {pos}/{len}")?
                .progress_chars("=> "),
        );
        Ok(Self { bar })
    }
}

impl BatchReporter for BarReporter {
    fn begin_stage(&self, stage: BatchStage, total_items: Option<usize>) {
        self.bar.set_message(stage.to_string());
        self.bar.set_position(0);
        self.bar.set_length(total_items.unwrap_or(1) as u64);
    }

    fn advance(&self, items_done: usize) {
        self.bar.set_position(items_done as u64);
    }

    fn finish_stage(&self) {
        if let Some(len) = self.bar.length() {
            self.bar.set_position(len);
        }
    }
}
