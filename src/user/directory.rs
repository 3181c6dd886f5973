use nix::unistd::{Gid, Group, Uid, User};
use std::io::Result;

/// Platform user/group directory.
///
/// `Ok(None)` means the id or name is not registered, `Err` means the
/// lookup itself failed.
pub trait Directory {
    fn user_by_id(&self, uid: u32) -> Result<Option<String>>;
    fn group_by_id(&self, gid: u32) -> Result<Option<String>>;
    fn user_by_name(&self, name: &str) -> Result<Option<u32>>;
    fn group_by_name(&self, name: &str) -> Result<Option<u32>>;
}

/// The system's passwd/group databases, through getpwuid_r and friends.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDirectory;

impl Directory for SystemDirectory {
    fn user_by_id(&self, uid: u32) -> Result<Option<String>> {
        Ok(User::from_uid(Uid::from_raw(uid))?.map(|u| u.name))
    }

    fn group_by_id(&self, gid: u32) -> Result<Option<String>> {
        Ok(Group::from_gid(Gid::from_raw(gid))?.map(|g| g.name))
    }

    fn user_by_name(&self, name: &str) -> Result<Option<u32>> {
        // nix panics on an interior NUL; no such entry can exist anyway.
        if name.contains('\0') {
            return Ok(None);
        }
        Ok(User::from_name(name)?.map(|u| u.uid.as_raw()))
    }

    fn group_by_name(&self, name: &str) -> Result<Option<u32>> {
        if name.contains('\0') {
            return Ok(None);
        }
        Ok(Group::from_name(name)?.map(|g| g.gid.as_raw()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_system_directory_root() {
        let dir = SystemDirectory;
        assert_eq!(dir.user_by_id(0).unwrap().as_deref(), Some("root"));
        assert_eq!(dir.user_by_name("root").unwrap(), Some(0));
        assert_eq!(
            dir.user_by_name("no-such-user-kosutils").unwrap(),
            None
        );
    }
}
