//! Generated output file names.
//!
//! Names for `OutputNaming::Unique` are reserved by creating the file, so two
//! runs in the same directory can never be handed the same path.

use crate::error::CoreResult;
use std::path::{Path, PathBuf};
use tempfile::Builder as TempFileBuilder;

/// Creates an empty `{prefix}_XXXXXX.{extension}` file in `dir` and returns its
/// path. The file is kept on disk; the caller overwrites it.
pub fn reserve_output_file(dir: &Path, prefix: &str, extension: &str) -> CoreResult<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let placeholder = TempFileBuilder::new()
        .prefix(&format!("{prefix}_"))
        .suffix(&format!(".{extension}"))
        .tempfile_in(dir)?;

    let (_file, path) = placeholder.keep().map_err(|e| e.error)?;
    Ok(path)
}
