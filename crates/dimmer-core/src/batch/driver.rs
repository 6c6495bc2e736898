use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::encode::format_name_for;
use crate::error::{DimmerError, Result};
use crate::io::profile_io::{read_profile, write_profile};
use crate::locate::{resolve_base_profile, resolve_output_dir};
use crate::mutate::{build_output_path_for, create_profile_with};

use super::config::BatchConfig;
use super::types::{BatchOutput, BatchReporter, BatchStage, NoOpReporter, WrittenProfile};

/// Compute the output path of every level in `config`, in order.
///
/// Fails with [`DimmerError::DuplicateOutput`] if two levels would write the
/// same file, which happens when their names truncate to the same label.
pub fn plan_outputs(
    base_path: &Path,
    output_dir: &Path,
    config: &BatchConfig,
) -> Result<Vec<(f64, PathBuf)>> {
    let reference = &config.layout.reference_name;
    let mut seen = HashSet::with_capacity(config.levels.len());
    let mut plan = Vec::with_capacity(config.levels.len());

    for &brightness in &config.levels {
        let name = format_name_for(brightness, reference);
        let path = build_output_path_for(base_path, &name, output_dir, reference);
        if !seen.insert(path.clone()) {
            return Err(DimmerError::DuplicateOutput { path });
        }
        plan.push((brightness, path));
    }
    Ok(plan)
}

/// Generate every dimmed profile with a progress reporter.
///
/// The base profile is read once. Each level patches its own copy of those
/// bytes and is written before the next level starts. The first error stops
/// the batch; profiles written before it stay on disk.
pub fn run_batch_reported(
    config: &BatchConfig,
    reporter: &dyn BatchReporter,
) -> Result<BatchOutput> {
    reporter.begin_stage(BatchStage::Locating, None);
    let base_path = resolve_base_profile(
        &config.search_dir,
        &config.layout.reference_name,
        config.match_policy,
    )?;
    let output_dir = resolve_output_dir(config.output_dir.as_deref(), &config.search_dir);
    reporter.finish_stage();
    info!(
        base = %base_path.display(),
        output_dir = %output_dir.display(),
        "Found base profile"
    );

    reporter.begin_stage(BatchStage::Reading, None);
    let base = read_profile(&base_path)?;
    reporter.finish_stage();

    reporter.begin_stage(BatchStage::Planning, Some(config.levels.len()));
    let plan = plan_outputs(&base_path, &output_dir, config)?;
    reporter.finish_stage();

    reporter.begin_stage(BatchStage::Writing, Some(plan.len()));
    let mut written = Vec::with_capacity(plan.len());
    for (brightness, path) in plan {
        let (name, profile) =
            create_profile_with(&base, brightness, &config.layout, config.min_brightness)?;
        write_profile(&path, &profile)?;
        info!(brightness, path = %path.display(), "Wrote dimmed profile");

        written.push(WrittenProfile {
            brightness,
            name,
            path,
            len: profile.len(),
        });
        reporter.advance(written.len());
    }
    reporter.finish_stage();

    Ok(BatchOutput {
        base_profile: base_path,
        output_dir,
        written,
    })
}

/// Generate every dimmed profile described by `config`.
pub fn run_batch(config: &BatchConfig) -> Result<BatchOutput> {
    run_batch_reported(config, &NoOpReporter)
}
