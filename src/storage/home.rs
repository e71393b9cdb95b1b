//! Home directory resolution
//!
//! The store never reads process state on its own. Whatever decides where
//! "home" is gets passed to [`JsonStore::with_home`](super::JsonStore::with_home)
//! as a [`HomeProvider`].

use std::path::PathBuf;

use directories::BaseDirs;

/// Source of the directory application folders are created under
pub trait HomeProvider {
    /// Returns the home directory, or `None` if it cannot be determined
    fn home_dir(&self) -> Option<PathBuf>;
}

impl<P: HomeProvider + ?Sized> HomeProvider for &P {
    fn home_dir(&self) -> Option<PathBuf> {
        (**self).home_dir()
    }
}

/// The current user's home directory as reported by the platform
#[derive(Debug, Clone, Copy, Default)]
pub struct UserHome;

impl HomeProvider for UserHome {
    fn home_dir(&self) -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    }
}

/// A fixed directory standing in for home
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedHome(pub PathBuf);

impl FixedHome {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self(dir.into())
    }
}

impl HomeProvider for FixedHome {
    fn home_dir(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}
