use nix::unistd::isatty;
use std::os::unix::io::RawFd;

/// Whether output written to `fd` should carry ANSI color escapes.
/// Only terminals qualify; a closed or invalid descriptor does not.
pub fn supports_ansi_color(fd: RawFd) -> bool {
    isatty(fd).unwrap_or(false)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::os::unix::io::AsRawFd;

    #[test]
    fn test_supports_ansi_color() {
        let file = tempfile::tempfile().unwrap();
        assert!(!supports_ansi_color(file.as_raw_fd()));
        assert!(!supports_ansi_color(-1));
    }
}
