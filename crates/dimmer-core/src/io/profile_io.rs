use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Read a whole profile into memory.
pub fn read_profile(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path)?;
    debug!(path = %path.display(), len = bytes.len(), "Read profile");
    Ok(bytes)
}

/// Write `bytes` to `path`, replacing any existing file.
pub fn write_profile(path: &Path, bytes: &[u8]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes)?;
    writer.flush()?;
    debug!(path = %path.display(), len = bytes.len(), "Wrote profile");
    Ok(())
}
