//! Memoized translation between numeric user/group ids and their names.
//!
//! Every answer is cached for the lifetime of the [`IdentityCache`], including
//! fallback answers for ids and names the directory does not know about.

use crate::error::{Cause, Lookup, LookupFailure};
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

pub mod directory;

pub use directory::{Directory, SystemDirectory};

/// Returned by [`IdentityCache::user_id`] and [`IdentityCache::group_id`]
/// when a name is neither registered nor a decimal integer.
pub const UNRESOLVED_ID: i64 = -1;

type Observer = Box<dyn Fn(&LookupFailure) + Send + Sync>;

#[derive(Debug, Default)]
struct Maps {
    uid_to_name: HashMap<u32, String>,
    gid_to_name: HashMap<u32, String>,
    name_to_uid: HashMap<String, i64>,
    name_to_gid: HashMap<String, i64>,
}

pub struct IdentityCache<D = SystemDirectory> {
    directory: D,
    maps: Mutex<Maps>,
    observer: Option<Observer>,
}

impl IdentityCache<SystemDirectory> {
    pub fn new() -> Self {
        Self::with_directory(SystemDirectory)
    }
}

impl Default for IdentityCache<SystemDirectory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> fmt::Debug for IdentityCache<D>
where
    D: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityCache")
            .field("directory", &self.directory)
            .field("maps", &self.maps)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl<D: Directory> IdentityCache<D> {
    pub fn with_directory(directory: D) -> Self {
        IdentityCache {
            directory,
            maps: Mutex::new(Maps::default()),
            observer: None,
        }
    }

    /// Registers a callback run for every lookup that falls back to a
    /// numeric name or to [`UNRESOLVED_ID`]. It runs with the cache locked
    /// and must not call back into the cache.
    pub fn on_failure<F>(mut self, observer: F) -> Self
    where
        F: Fn(&LookupFailure) + Send + Sync + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Name of user `uid`, or `uid` in decimal if it cannot be resolved.
    pub fn user_name(&self, uid: u32) -> String {
        let mut maps = self.lock();
        if let Some(name) = maps.uid_to_name.get(&uid) {
            return name.clone();
        }
        let name = match self.directory.user_by_id(uid) {
            Ok(Some(name)) => {
                debug!(uid, name = %name, "resolved user name");
                name
            }
            Ok(None) => self.fallback_name(Lookup::Uid, uid, Cause::NotFound),
            Err(e) => self.fallback_name(Lookup::Uid, uid, Cause::Io(e)),
        };
        maps.uid_to_name.insert(uid, name.clone());
        name
    }

    /// Name of group `gid`, or `gid` in decimal if it cannot be resolved.
    pub fn group_name(&self, gid: u32) -> String {
        let mut maps = self.lock();
        if let Some(name) = maps.gid_to_name.get(&gid) {
            return name.clone();
        }
        let name = match self.directory.group_by_id(gid) {
            Ok(Some(name)) => {
                debug!(gid, name = %name, "resolved group name");
                name
            }
            Ok(None) => self.fallback_name(Lookup::Gid, gid, Cause::NotFound),
            Err(e) => self.fallback_name(Lookup::Gid, gid, Cause::Io(e)),
        };
        maps.gid_to_name.insert(gid, name.clone());
        name
    }

    /// Uid of user `name`. A name that is not a registered user but parses
    /// as a decimal integer resolves to that integer; anything else resolves
    /// to [`UNRESOLVED_ID`].
    pub fn user_id(&self, name: &str) -> i64 {
        let mut maps = self.lock();
        if let Some(uid) = maps.name_to_uid.get(name) {
            return *uid;
        }
        let found = self.directory.user_by_name(name);
        let uid = self.resolve_id(Lookup::User, name, found);
        maps.name_to_uid.insert(name.to_string(), uid);
        uid
    }

    /// Gid of group `name`, with the same fallbacks as [`Self::user_id`].
    pub fn group_id(&self, name: &str) -> i64 {
        let mut maps = self.lock();
        if let Some(gid) = maps.name_to_gid.get(name) {
            return *gid;
        }
        let found = self.directory.group_by_name(name);
        let gid = self.resolve_id(Lookup::Group, name, found);
        maps.name_to_gid.insert(name.to_string(), gid);
        gid
    }

    fn lock(&self) -> MutexGuard<'_, Maps> {
        // Maps are only written after a lookup completes, so a panic in an
        // observer cannot leave them half-updated.
        self.maps.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn resolve_id(&self, lookup: Lookup, name: &str, found: io::Result<Option<u32>>) -> i64 {
        let cause = match found {
            Ok(Some(id)) => {
                debug!(key = name, id, "resolved {} id", lookup);
                return i64::from(id);
            }
            Ok(None) => Cause::NotFound,
            Err(e) => Cause::Io(e),
        };
        if let Ok(id) = name.parse::<i64>() {
            return id;
        }
        self.report(LookupFailure {
            lookup,
            key: name.to_string(),
            cause,
        });
        UNRESOLVED_ID
    }

    fn fallback_name(&self, lookup: Lookup, id: u32, cause: Cause) -> String {
        let name = id.to_string();
        self.report(LookupFailure {
            lookup,
            key: name.clone(),
            cause,
        });
        name
    }

    fn report(&self, failure: LookupFailure) {
        warn!(lookup = %failure.lookup, key = %failure.key, "{}", failure);
        if let Some(observer) = &self.observer {
            observer(&failure);
        }
    }
}
