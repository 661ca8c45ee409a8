//! Loading pabot console logs from disk.

use super::pabot_log::{parse_log, LogEvent};
use crate::utils::error::InputError;
use log::debug;
use std::path::Path;

/// Read a whole log file into memory
///
/// **Public** - used by the analyze command
///
/// Invalid UTF-8 from worker output is replaced rather than rejected so a
/// single garbled line does not abort the run.
///
/// # Errors
/// * `InputError::NotFound` - path does not exist
/// * `InputError::ReadFailed` - any other I/O error
pub fn read_log(input_path: impl AsRef<Path>) -> Result<String, InputError> {
    let input_path = input_path.as_ref();

    debug!("Reading log from: {}", input_path.display());

    let bytes = std::fs::read(input_path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            InputError::NotFound(input_path.to_path_buf())
        } else {
            InputError::ReadFailed {
                path: input_path.to_path_buf(),
                source,
            }
        }
    })?;

    debug!("Log loaded: {} bytes", bytes.len());

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read a log file and extract its events
///
/// **Public** - convenience wrapper around `read_log` + `parse_log`
pub fn parse_log_file(input_path: impl AsRef<Path>) -> Result<Vec<LogEvent>, InputError> {
    let text = read_log(input_path)?;
    Ok(parse_log(&text))
}
