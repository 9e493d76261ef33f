mod gzip;
mod local;

pub use gzip::{GZIP_MAGIC, GzipReader};
pub use local::{LocalFileReader, check_path, validate_paths};
