use std::io::ErrorKind;
use std::path::Path;

#[cfg(windows)]
const PATH_LIST_SEPARATOR: char = ';';
#[cfg(not(windows))]
const PATH_LIST_SEPARATOR: char = ':';

/// Splits a list of directories on the platform path-list separator, or on
/// commas when the separator does not occur.
pub fn split_dir(d: &str) -> Vec<String> {
    let dirs: Vec<&str> = d.split(PATH_LIST_SEPARATOR).collect();
    if dirs.len() == 1 {
        d.split(',').map(String::from).collect()
    } else {
        dirs.into_iter().map(String::from).collect()
    }
}

/// Reports whether something exists at `path`. Errors other than "not
/// found" (permission denied on a parent, for one) count as existing.
pub async fn exists<P: AsRef<Path>>(path: P) -> bool {
    match async_fs::metadata(path.as_ref()).await {
        Ok(_) => true,
        Err(e) => e.kind() != ErrorKind::NotFound,
    }
}

const OCTET_STREAM: &str = "application/octet-stream";

/// MIME type registered for the extension of `key`, falling back to
/// `application/octet-stream`.
pub fn guess_mime_type(key: &str) -> &'static str {
    mime_guess::from_path(key).first_raw().unwrap_or(OCTET_STREAM)
}
