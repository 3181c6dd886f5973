//! Small system helpers: cached uid/gid name resolution, byte formatting,
//! path and URI helpers, local address discovery and a timeout wrapper.

pub mod error;
pub mod human;
pub mod net;
pub mod path;
pub mod timeout;
pub mod tty;
pub mod uri;
pub mod user;

pub use error::{Cause, Lookup, LookupFailure, TimeoutError};
pub use human::format_bytes;
pub use net::local_ip;
pub use path::{exists, guess_mime_type, split_dir};
pub use timeout::{with_timeout, with_timeout_blocking};
pub use tty::supports_ansi_color;
pub use uri::remove_password;
pub use user::{Directory, IdentityCache, SystemDirectory, UNRESOLVED_ID};

/// Returns the smaller of `a` and `b`, preferring `b` when they compare equal.
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

pub fn contains<S: AsRef<str>>(items: &[S], e: &str) -> bool {
    items.iter().any(|item| item.as_ref() == e)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_min() {
        assert_eq!(min(1, 2), 1);
        assert_eq!(min(2, 1), 1);
        assert_eq!(min(-3, -3), -3);
        assert_eq!(min(0.5, -0.5), -0.5);
    }

    #[test]
    fn test_contains() {
        let dirs = split_dir("/a:/b");
        assert!(contains(&dirs, "/b"));
        assert!(!contains(&dirs, "/c"));
        assert!(contains(&["x", "y"], "x"));
        assert!(!contains::<&str>(&[], "x"));
    }
}
