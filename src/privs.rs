//! Dropping from root to an unprivileged user and group once privileged
//! setup is done.

use std::{
    ffi::{c_char, CString},
    io,
    mem::MaybeUninit,
    ptr::{null, null_mut},
};

use libc::{gid_t, uid_t};

use crate::{Error, Result};

/// The user and group to drop privileges to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Identity<'a> {
    pub user: &'a str,
    pub group: &'a str,
}

/// Starting size for the getpwnam_r/getgrnam_r string buffer, doubled on
/// ERANGE.
const BUF_SIZE: usize = 1024;

/// errno values that getpwnam_r and getgrnam_r may use to mean "not found"
fn is_not_found(errno: i32) -> bool {
    matches!(errno, libc::ENOENT | libc::ESRCH | libc::EBADF | libc::EPERM)
}

fn cstring(name: &str, what: &'static str) -> Result<CString> {
    if name.is_empty() {
        return Err(Error::EmptyName(what));
    }
    CString::new(name).map_err(|e| Error::Lookup {
        name: name.to_owned(),
        source: io::Error::new(io::ErrorKind::InvalidInput, e),
    })
}

impl Identity<'_> {
    pub fn uid(&self) -> Result<uid_t> {
        let name = cstring(self.user, "user")?;
        let mut buf = vec![0 as c_char; BUF_SIZE];
        let mut pwd = MaybeUninit::<libc::passwd>::uninit();
        let mut result: *mut libc::passwd = null_mut();
        loop {
            let ret = unsafe {
                libc::getpwnam_r(
                    name.as_ptr(),
                    pwd.as_mut_ptr(),
                    buf.as_mut_ptr(),
                    buf.len(),
                    &mut result,
                )
            };
            match ret {
                libc::ERANGE => buf.resize(buf.len() * 2, 0),
                0 if !result.is_null() => {
                    return Ok(unsafe { (*result).pw_uid });
                }
                0 => return Err(Error::UnknownUser(self.user.to_owned())),
                e if is_not_found(e) => {
                    return Err(Error::UnknownUser(self.user.to_owned()));
                }
                e => {
                    return Err(Error::Lookup {
                        name: self.user.to_owned(),
                        source: io::Error::from_raw_os_error(e),
                    });
                }
            }
        }
    }

    pub fn gid(&self) -> Result<gid_t> {
        let name = cstring(self.group, "group")?;
        let mut buf = vec![0 as c_char; BUF_SIZE];
        let mut grp = MaybeUninit::<libc::group>::uninit();
        let mut result: *mut libc::group = null_mut();
        loop {
            let ret = unsafe {
                libc::getgrnam_r(
                    name.as_ptr(),
                    grp.as_mut_ptr(),
                    buf.as_mut_ptr(),
                    buf.len(),
                    &mut result,
                )
            };
            match ret {
                libc::ERANGE => buf.resize(buf.len() * 2, 0),
                0 if !result.is_null() => {
                    return Ok(unsafe { (*result).gr_gid });
                }
                0 => return Err(Error::UnknownGroup(self.group.to_owned())),
                e if is_not_found(e) => {
                    return Err(Error::UnknownGroup(self.group.to_owned()));
                }
                e => {
                    return Err(Error::Lookup {
                        name: self.group.to_owned(),
                        source: io::Error::from_raw_os_error(e),
                    });
                }
            }
        }
    }

    /// Look up both names, returning `(uid, gid)`.
    pub fn resolve(&self) -> Result<(uid_t, gid_t)> {
        Ok((self.uid()?, self.gid()?))
    }
}

fn os_call(call: &'static str, ret: i32) -> Result<()> {
    if ret < 0 {
        let source = io::Error::last_os_error();
        return Err(Error::Privileges { call, source });
    }
    Ok(())
}

/// Drop supplementary groups, then the group, then the user. The order
/// matters: after `setuid` there is no permission left to change groups.
pub fn drop_privileges(uid: uid_t, gid: gid_t) -> Result<()> {
    log::debug!("dropping privileges to uid {uid}, gid {gid}");
    os_call("setgroups", unsafe { libc::setgroups(0, null()) })?;
    os_call("setgid", unsafe { libc::setgid(gid) })?;
    os_call("setuid", unsafe { libc::setuid(uid) })?;
    if uid != 0 && unsafe { libc::setuid(0) } == 0 {
        return Err(Error::RegainedRoot);
    }
    Ok(())
}
