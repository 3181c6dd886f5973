use std::fmt;
use std::io;
use std::time::Duration;
use thiserror::Error;

/// Which of the four identity lookups failed.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Lookup {
    Uid,
    Gid,
    User,
    Group,
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Lookup::Uid => "uid",
            Lookup::Gid => "gid",
            Lookup::User => "user",
            Lookup::Group => "group",
        })
    }
}

#[derive(Debug, Error)]
pub enum Cause {
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A directory lookup that ended in a fallback value.
///
/// These are never returned to callers of `IdentityCache`; they are logged
/// and handed to the failure observer, if one is registered.
#[derive(Debug, Error)]
#[error("lookup {lookup} {key}: {cause}")]
pub struct LookupFailure {
    pub lookup: Lookup,
    pub key: String,
    #[source]
    pub cause: Cause,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("timeout after {0:?}")]
pub struct TimeoutError(pub Duration);
