use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// Checks that every argument names an existing, non-directory file.
///
/// Paths that fail the check are logged and left out of the returned list;
/// the order of the accepted paths follows the arguments.
pub fn validate_paths<I, S>(args: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<Path>,
{
    args.into_iter()
        .filter_map(|arg| match check_path(arg.as_ref()) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::error!("{}", e);
                None
            }
        })
        .collect()
}

/// Validate a single path without opening it.
pub fn check_path(path: &Path) -> Result<PathBuf, ScanError> {
    let metadata = std::fs::metadata(path).map_err(|source| ScanError::Stat {
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.is_dir() {
        return Err(ScanError::IsDirectory(path.to_path_buf()));
    }
    Ok(path.to_path_buf())
}

/// Local archive file opened for sequential reading
pub struct LocalFileReader;

impl LocalFileReader {
    pub fn open(path: &Path) -> Result<BufReader<File>, ScanError> {
        let file = File::open(path).map_err(ScanError::Open)?;
        Ok(BufReader::new(file))
    }
}
