use std::collections::BTreeMap;

/// A node in the virtual filesystem.
///
/// Directories own their children keyed by name, so iteration is always in
/// name order. Files hold their content already split into lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FsEntry {
    Directory { children: BTreeMap<String, FsEntry> },
    File { lines: Vec<String> },
}

impl FsEntry {
    /// Create a directory from `(name, entry)` pairs.
    pub fn directory<I, K>(children: I) -> Self
    where
        I: IntoIterator<Item = (K, FsEntry)>,
        K: Into<String>,
    {
        FsEntry::Directory {
            children: children
                .into_iter()
                .map(|(name, entry)| (name.into(), entry))
                .collect(),
        }
    }

    /// Create an empty directory.
    pub fn empty_dir() -> Self {
        FsEntry::Directory {
            children: BTreeMap::new(),
        }
    }

    /// Create a file from its lines.
    pub fn file<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FsEntry::File {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if this entry is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, FsEntry::Directory { .. })
    }

    /// Look up a direct child by name (directories only).
    pub fn child(&self, name: &str) -> Option<&FsEntry> {
        match self {
            FsEntry::Directory { children } => children.get(name),
            FsEntry::File { .. } => None,
        }
    }

    /// Get the children of a directory.
    pub fn children(&self) -> Option<&BTreeMap<String, FsEntry>> {
        match self {
            FsEntry::Directory { children } => Some(children),
            FsEntry::File { .. } => None,
        }
    }

    /// Get the content of a file.
    pub fn lines(&self) -> Option<&[String]> {
        match self {
            FsEntry::File { lines } => Some(lines),
            FsEntry::Directory { .. } => None,
        }
    }
}
