//! End-to-end scenarios over a real directory tree.

use std::fs;
use std::path::Path;

use vfsh_core::config::READ_ERROR_SENTINEL;
use vfsh_core::core::script::run_script;
use vfsh_core::{Mount, MountError, Shell};

fn write(root: &Path, rel: &str, content: &[u8]) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn create_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "docs/a.txt", b"x\ny\nx\n");
    write(root, "docs/guides/intro.md", b"# Intro\nline 2\n");
    write(root, "zeta.txt", b"1\n2\n3\n4\n5\n6\n7\n8\n9\n10\n11\n12\n");
    write(root, "Alpha.txt", b"only\n");
    write(root, "broken.bin", &[0xc3, 0x28, 0xa0]);
    fs::create_dir_all(root.join("empty")).unwrap();
    dir
}

fn shell_for(dir: &tempfile::TempDir) -> Shell {
    Shell::new(Some(Mount::build(dir.path()).unwrap()))
}

fn run(shell: &mut Shell, line: &str) -> Vec<String> {
    shell
        .execute_line(line)
        .output
        .iter()
        .map(|l| l.to_string())
        .collect()
}

#[test]
fn test_listing_is_sorted() {
    let dir = create_tree();
    let mut shell = shell_for(&dir);
    assert_eq!(
        run(&mut shell, "ls"),
        vec!["Alpha.txt", "broken.bin", "docs", "empty", "zeta.txt"]
    );
    assert_eq!(run(&mut shell, "ls /docs"), vec!["a.txt", "guides"]);
    assert!(run(&mut shell, "ls empty").is_empty());
}

#[test]
fn test_cd_then_pwd_is_normalized() {
    let dir = create_tree();
    let mut shell = shell_for(&dir);
    for (path, expected) in [
        ("docs", "/docs"),
        ("guides", "/docs/guides"),
        ("/docs//guides/", "/docs/guides"),
        ("../..", "/"),
        ("docs/./guides/..", "/docs"),
        ("/", "/"),
    ] {
        assert!(run(&mut shell, &format!("cd {}", path)).is_empty(), "{}", path);
        assert_eq!(run(&mut shell, "pwd"), vec![expected], "{}", path);
    }
}

#[test]
fn test_head_defaults_to_ten_lines() {
    let dir = create_tree();
    let mut shell = shell_for(&dir);
    let head = run(&mut shell, "head zeta.txt");
    assert_eq!(head.len(), 10);
    assert_eq!(head.last().unwrap(), "10");
}

#[test]
fn test_cat_equals_long_head() {
    let dir = create_tree();
    let mut shell = shell_for(&dir);
    let cat = run(&mut shell, "cat zeta.txt");
    assert_eq!(cat.len(), 12);
    assert_eq!(run(&mut shell, "head zeta.txt 12"), cat);
    assert_eq!(run(&mut shell, "head zeta.txt 500"), cat);
}

#[test]
fn test_uniq_on_distinct_lines_equals_cat() {
    let dir = create_tree();
    let mut shell = shell_for(&dir);
    assert_eq!(
        run(&mut shell, "uniq docs/guides/intro.md"),
        run(&mut shell, "cat docs/guides/intro.md")
    );
    assert_eq!(run(&mut shell, "uniq docs/a.txt"), vec!["x", "y"]);
}

#[test]
fn test_unreadable_file_shows_sentinel() {
    let dir = create_tree();
    let mut shell = shell_for(&dir);
    assert_eq!(run(&mut shell, "cat broken.bin"), vec![READ_ERROR_SENTINEL]);
}

#[test]
fn test_mount_survives_source_changes() {
    let dir = create_tree();
    let mut shell = shell_for(&dir);
    fs::remove_dir_all(dir.path().join("docs")).unwrap();
    assert_eq!(run(&mut shell, "cat docs/a.txt"), vec!["x", "y", "x"]);
}

#[test]
fn test_invalid_mount_gives_degraded_shell() {
    let dir = create_tree();
    let mount = Mount::build(dir.path().join("missing"));
    assert!(matches!(mount, Err(MountError::NotFound(_))));

    let mut shell = Shell::new(mount.ok());
    assert_eq!(run(&mut shell, "pwd"), vec!["pwd: no filesystem mounted"]);
    assert_eq!(run(&mut shell, "help").len(), 9);
}

#[test]
fn test_startup_script_runs_line_by_line() {
    let dir = create_tree();
    let mut shell = shell_for(&dir);
    let script = "\
# navigate and inspect
cd docs
ls

cat nosuch.txt
uniq a.txt
cd ..
pwd
";
    let result = run_script(&mut shell, "startup.vfs", script);
    let out: Vec<String> = result.output.iter().map(|l| l.to_string()).collect();

    assert_eq!(
        out,
        vec![
            "# running: startup.vfs",
            "vfs> cd docs",
            "vfs> ls",
            "a.txt",
            "guides",
            "vfs> cat nosuch.txt",
            "cat: nosuch.txt: No such file or directory",
            "vfs> uniq a.txt",
            "x",
            "y",
            "vfs> cd ..",
            "vfs> pwd",
            "/",
            "# end of script: startup.vfs",
        ]
    );
    assert!(!result.exit);
}
