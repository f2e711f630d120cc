//! Session navigator: the current directory and path resolution.

use tracing::debug;

use super::error::FsError;
use super::filesystem::Mount;
use crate::models::FsEntry;

/// Outcome of listing a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Listing {
    /// Child names of a directory, in ascending byte order
    Entries(Vec<String>),
    /// The path names a file, not a directory
    File,
}

/// A resolved path: the node and its absolute component sequence.
struct Resolution<'a> {
    components: Vec<String>,
    entry: &'a FsEntry,
}

/// Navigation state over a single mount.
///
/// `current` always names an existing directory of `mount`. Only a
/// successful [`Session::change_directory`] replaces it.
#[derive(Clone, Debug)]
pub struct Session {
    mount: Mount,
    /// Components from the root to the current directory; empty at the root
    current: Vec<String>,
}

impl Session {
    /// Start a session at the root of `mount`.
    pub fn new(mount: Mount) -> Self {
        Self {
            mount,
            current: Vec::new(),
        }
    }

    pub fn mount(&self) -> &Mount {
        &self.mount
    }

    /// Components from the root to the current directory.
    pub fn current_components(&self) -> &[String] {
        &self.current
    }

    /// Resolve a path expression to a node without moving.
    ///
    /// # Path Convention
    /// - Leading `/` starts at the mount root, anything else at the current directory
    /// - `""` and `.` name the starting directory itself
    /// - `..` goes up one level and stops at the root
    /// - Empty components (`a//b`, `a/`) are ignored
    pub fn resolve(&self, path: &str) -> Result<&FsEntry, FsError> {
        self.resolve_components(path).map(|r| r.entry)
    }

    fn resolve_components(&self, path: &str) -> Result<Resolution<'_>, FsError> {
        let start: &[String] = if path.starts_with('/') {
            &[]
        } else {
            &self.current
        };

        let mut components: Vec<String> = Vec::new();
        let mut parents: Vec<&FsEntry> = Vec::new();
        let mut entry = self.mount.root();

        for part in start.iter().map(String::as_str).chain(path.split('/')) {
            match part {
                "" | "." => {}
                ".." => {
                    if let Some(parent) = parents.pop() {
                        components.pop();
                        entry = parent;
                    }
                }
                name => {
                    let child = entry.child(name).ok_or_else(|| FsError::not_found(path))?;
                    parents.push(entry);
                    components.push(name.to_string());
                    entry = child;
                }
            }
        }

        Ok(Resolution { components, entry })
    }

    /// List a directory, or report that the path names a file.
    pub fn list(&self, path: &str) -> Result<Listing, FsError> {
        let listing = match self.resolve(path)?.children() {
            Some(children) => Listing::Entries(children.keys().cloned().collect()),
            None => Listing::File,
        };
        Ok(listing)
    }

    /// Move to the directory named by `path`.
    ///
    /// On any error the current directory is left unchanged.
    pub fn change_directory(&mut self, path: &str) -> Result<(), FsError> {
        let Resolution { components, entry } = self.resolve_components(path)?;
        if !entry.is_directory() {
            return Err(FsError::not_a_directory(path));
        }

        self.current = components;
        debug!(cwd = %self.current_path_string(), "changed directory");
        Ok(())
    }

    /// The current directory as an absolute path (`/` at the root).
    pub fn current_path_string(&self) -> String {
        format!("/{}", self.current.join("/"))
    }

    /// Read every line of the file named by `path`.
    pub fn read_file(&self, path: &str) -> Result<&[String], FsError> {
        self.resolve(path)?
            .lines()
            .ok_or_else(|| FsError::is_a_directory(path))
    }
}
