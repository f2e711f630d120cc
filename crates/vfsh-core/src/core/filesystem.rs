use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::error::MountError;
use crate::config::READ_ERROR_SENTINEL;
use crate::models::FsEntry;

/// Directory and file counts of a mount, excluding the root itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MountStats {
    pub directories: usize,
    pub files: usize,
}

/// Immutable snapshot of a real directory tree.
///
/// Directory structure and file contents are read once in [`Mount::build`];
/// the underlying storage is never consulted again.
///
/// # Path Convention
///
/// Nodes are addressed by component sequences from the root:
/// - Root: `[]`
/// - File in root: `["notes.txt"]`
/// - Nested file: `["docs", "a.txt"]`
#[derive(Clone, Debug)]
pub struct Mount {
    /// Root directory entry containing all files
    root: FsEntry,
    /// Absolute path the snapshot was taken from
    source: PathBuf,
}

impl Mount {
    /// Snapshot the directory tree at `root_path`.
    ///
    /// The build is best effort below the root: a file that cannot be read
    /// as text holds the single line [`READ_ERROR_SENTINEL`], and a
    /// subdirectory that cannot be enumerated is mounted empty. Both are
    /// logged as warnings.
    pub fn build(root_path: impl AsRef<Path>) -> Result<Self, MountError> {
        let root_path = root_path.as_ref();
        let source = std::path::absolute(root_path).map_err(|source| MountError::Io {
            path: root_path.to_path_buf(),
            source,
        })?;

        let meta = match fs::metadata(&source) {
            Ok(meta) => meta,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(MountError::NotFound(source));
            }
            Err(source_err) => {
                return Err(MountError::Io {
                    path: source,
                    source: source_err,
                });
            }
        };
        if !meta.is_dir() {
            return Err(MountError::NotADirectory(source));
        }

        let mut ancestors = Vec::new();
        let root = read_directory(&source, &mut ancestors).map_err(|err| MountError::Io {
            path: source.clone(),
            source: err,
        })?;

        let mount = Self { root, source };
        let stats = mount.stats();
        info!(
            root = %mount.source.display(),
            directories = stats.directories,
            files = stats.files,
            "mounted filesystem"
        );
        Ok(mount)
    }

    /// Create a mount from in-memory `(name, entry)` pairs for the root.
    pub fn new<I, K>(children: I, source: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = (K, FsEntry)>,
        K: Into<String>,
    {
        Self {
            root: FsEntry::directory(children),
            source: source.into(),
        }
    }

    /// The root directory.
    pub fn root(&self) -> &FsEntry {
        &self.root
    }

    /// The absolute path this mount was built from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Get an entry by its component sequence.
    ///
    /// - `[]` returns the root directory
    /// - `["docs"]` returns the docs directory
    /// - `["docs", "a.txt"]` returns the file
    pub fn get_entry<S: AsRef<str>>(&self, components: &[S]) -> Option<&FsEntry> {
        components
            .iter()
            .try_fold(&self.root, |node, name| node.child(name.as_ref()))
    }

    /// Count every directory and file below the root.
    pub fn stats(&self) -> MountStats {
        fn walk(entry: &FsEntry, stats: &mut MountStats) {
            if let Some(children) = entry.children() {
                for child in children.values() {
                    if child.is_directory() {
                        stats.directories += 1;
                        walk(child, stats);
                    } else {
                        stats.files += 1;
                    }
                }
            }
        }

        let mut stats = MountStats::default();
        walk(&self.root, &mut stats);
        stats
    }
}

/// Read one directory level and recurse into subdirectories.
///
/// `ancestors` holds the canonical paths of the directories currently being
/// read, so a symlink pointing back up the tree can be detected.
fn read_directory(dir: &Path, ancestors: &mut Vec<PathBuf>) -> io::Result<FsEntry> {
    let entries = fs::read_dir(dir)?;
    ancestors.push(fs::canonicalize(dir)?);

    let mut children = BTreeMap::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "skipping unreadable directory entry");
                continue;
            }
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        let Some(node) = read_entry(&entry.path(), ancestors) else {
            continue;
        };
        match children.entry(name) {
            Entry::Vacant(slot) => {
                slot.insert(node);
            }
            Entry::Occupied(slot) => {
                warn!(
                    path = %entry.path().display(),
                    name = %slot.key(),
                    "entry name collides after lossy decoding, skipping"
                );
            }
        }
    }

    ancestors.pop();
    Ok(FsEntry::Directory { children })
}

/// Build the node for a single path. Symlinks are followed.
fn read_entry(path: &Path, ancestors: &mut Vec<PathBuf>) -> Option<FsEntry> {
    if !path.is_dir() {
        return Some(FsEntry::File {
            lines: read_lines(path),
        });
    }

    if let Ok(target) = fs::canonicalize(path)
        && ancestors.contains(&target)
    {
        warn!(path = %path.display(), "skipping symlink cycle");
        return None;
    }

    match read_directory(path, ancestors) {
        Ok(dir) => Some(dir),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "cannot enumerate directory, mounting it empty");
            Some(FsEntry::empty_dir())
        }
    }
}

/// Read a file as UTF-8 text split into lines.
fn read_lines(path: &Path) -> Vec<String> {
    let text = fs::read(path).map(String::from_utf8);
    match text {
        Ok(Ok(text)) => split_lines(&text),
        Ok(Err(_)) => {
            warn!(path = %path.display(), "file is not valid UTF-8, using read error sentinel");
            vec![READ_ERROR_SENTINEL.to_string()]
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "cannot read file, using read error sentinel");
            vec![READ_ERROR_SENTINEL.to_string()]
        }
    }
}

/// Line terminators recognized when splitting file content. `\r\n` counts
/// as one terminator.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split text on every line terminator. A trailing terminator does not
/// start an extra empty line.
fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some(end) = rest.find(&LINE_BREAKS[..]) else {
            lines.push(rest.to_string());
            break;
        };
        lines.push(rest[..end].to_string());

        let tail = &rest[end..];
        let width = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[width..];
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, content: &[u8]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn create_test_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("docs/a.txt"), b"x\ny\nx\n");
        write(&dir.path().join("docs/empty.txt"), b"");
        write(&dir.path().join("notes.txt"), b"one\r\ntwo");
        fs::create_dir_all(dir.path().join("projects/web")).unwrap();
        dir
    }

    #[test]
    fn test_build_snapshots_tree() {
        let dir = create_test_tree();
        let mount = Mount::build(dir.path()).unwrap();

        assert!(mount.root().is_directory());
        assert!(mount.get_entry(&["docs"]).unwrap().is_directory());
        assert!(mount.get_entry(&["projects", "web"]).unwrap().is_directory());
        assert_eq!(
            mount.get_entry(&["docs", "a.txt"]).unwrap().lines().unwrap(),
            &["x", "y", "x"]
        );
        assert_eq!(
            mount.get_entry(&["notes.txt"]).unwrap().lines().unwrap(),
            &["one", "two"]
        );
    }

    #[test]
    fn test_build_keeps_empty_directory_distinct_from_empty_file() {
        let dir = create_test_tree();
        let mount = Mount::build(dir.path()).unwrap();

        let empty_file = mount.get_entry(&["docs", "empty.txt"]).unwrap();
        assert!(!empty_file.is_directory());
        assert!(empty_file.lines().unwrap().is_empty());

        let empty_dir = mount.get_entry(&["projects", "web"]).unwrap();
        assert!(empty_dir.is_directory());
        assert!(empty_dir.children().unwrap().is_empty());
    }

    #[test]
    fn test_build_is_a_snapshot() {
        let dir = create_test_tree();
        let mount = Mount::build(dir.path()).unwrap();

        write(&dir.path().join("docs/a.txt"), b"changed\n");
        write(&dir.path().join("late.txt"), b"late\n");

        assert_eq!(
            mount.get_entry(&["docs", "a.txt"]).unwrap().lines().unwrap(),
            &["x", "y", "x"]
        );
        assert!(mount.get_entry(&["late.txt"]).is_none());
    }

    #[test]
    fn test_build_cr_line_endings() {
        let dir = create_test_tree();
        write(&dir.path().join("mac.txt"), b"a\rb\rc\r");
        let mount = Mount::build(dir.path()).unwrap();

        assert_eq!(
            mount.get_entry(&["mac.txt"]).unwrap().lines().unwrap(),
            &["a", "b", "c"]
        );
    }

    #[test]
    fn test_split_lines_terminators() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\r\n\r\nb"), vec!["a", "", "b"]);
        assert_eq!(
            split_lines("a\x0bb\x0cc\x1cd\u{85}e\u{2028}f\u{2029}"),
            vec!["a", "b", "c", "d", "e", "f"]
        );
    }

    #[test]
    fn test_split_lines_trailing_terminator() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("x\n"), vec!["x"]);
        assert_eq!(split_lines("x\n\n"), vec!["x", ""]);
        assert_eq!(split_lines("x\r"), vec!["x"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_build_keeps_one_of_colliding_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(OsStr::from_bytes(b"a\xff")), b"1\n").unwrap();
        fs::write(dir.path().join(OsStr::from_bytes(b"a\xfe")), b"2\n").unwrap();
        let mount = Mount::build(dir.path()).unwrap();

        let names: Vec<_> = mount.root().children().unwrap().keys().cloned().collect();
        assert_eq!(names, vec!["a\u{fffd}"]);
        assert_eq!(mount.stats().files, 1);
    }

    #[test]
    fn test_build_invalid_utf8_uses_sentinel() {
        let dir = create_test_tree();
        write(&dir.path().join("blob.bin"), &[0xff, 0xfe, 0x00, 0x80]);
        let mount = Mount::build(dir.path()).unwrap();

        assert_eq!(
            mount.get_entry(&["blob.bin"]).unwrap().lines().unwrap(),
            &[READ_ERROR_SENTINEL]
        );
    }

    #[test]
    fn test_build_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            Mount::build(&missing),
            Err(MountError::NotFound(_))
        ));
    }

    #[test]
    fn test_build_root_is_file() {
        let dir = create_test_tree();
        assert!(matches!(
            Mount::build(dir.path().join("notes.txt")),
            Err(MountError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_build_records_absolute_source() {
        let dir = create_test_tree();
        let mount = Mount::build(dir.path()).unwrap();
        assert!(mount.source().is_absolute());
    }

    #[cfg(unix)]
    #[test]
    fn test_build_skips_symlink_cycle() {
        let dir = create_test_tree();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("docs/loop")).unwrap();
        let mount = Mount::build(dir.path()).unwrap();

        assert!(mount.get_entry(&["docs", "loop"]).is_none());
        assert!(mount.get_entry(&["docs", "a.txt"]).is_some());
    }

    #[cfg(unix)]
    #[test]
    fn test_build_follows_symlinked_directory() {
        let dir = create_test_tree();
        let outside = tempfile::tempdir().unwrap();
        write(&outside.path().join("far.txt"), b"far\n");
        std::os::unix::fs::symlink(outside.path(), dir.path().join("link")).unwrap();
        let mount = Mount::build(dir.path()).unwrap();

        assert_eq!(
            mount.get_entry(&["link", "far.txt"]).unwrap().lines().unwrap(),
            &["far"]
        );
    }

    #[test]
    fn test_get_entry_through_file_is_none() {
        let mount = Mount::new([("a.txt", FsEntry::file(["x"]))], "/virtual");
        assert!(mount.get_entry(&["a.txt", "x"]).is_none());
        assert!(mount.get_entry(&["missing"]).is_none());
        assert!(mount.get_entry::<&str>(&[]).unwrap().is_directory());
    }

    #[test]
    fn test_stats() {
        let dir = create_test_tree();
        let mount = Mount::build(dir.path()).unwrap();
        assert_eq!(
            mount.stats(),
            MountStats {
                directories: 3,
                files: 3
            }
        );
    }
}
