//! JSON file output

use crate::GleanError;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes `data` to `output_path` as pretty-printed JSON (2-space indent)
///
/// The value is serialized before the file is touched, so a value that
/// cannot be encoded leaves an existing file intact. An existing file is
/// otherwise overwritten.
///
/// # Arguments
///
/// * `data` - Any serializable value
/// * `output_path` - Path of the file to create or overwrite
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the file
/// * `Err(GleanError::Serialization)` - The value could not be encoded
/// * `Err(GleanError::File)` - The file could not be created or written
pub fn save_to_json<T>(data: &T, output_path: &Path) -> Result<(), GleanError>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string_pretty(data)?;

    let file_error = |source: std::io::Error| GleanError::File {
        path: output_path.to_path_buf(),
        source,
    };

    let mut file = File::create(output_path).map_err(file_error)?;
    file.write_all(json.as_bytes()).map_err(file_error)?;

    tracing::debug!("Wrote {} bytes to {}", json.len(), output_path.display());

    Ok(())
}
