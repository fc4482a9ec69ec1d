use assert_cmd::Command;
use image::{Rgb, RgbImage};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn project_with_source() -> TempDir {
    let root = tempfile::tempdir().unwrap();
    let source = RgbImage::from_fn(200, 200, |x, y| Rgb([x as u8, y as u8, 64]));
    source.save(root.path().join("KR_fav.jpg")).unwrap();
    root
}

fn favicon_gen(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("favicon-gen").unwrap();
    cmd.current_dir(root).env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> (i32, String) {
    let output = cmd.output().unwrap();
    (
        output.status.code().unwrap(),
        String::from_utf8(output.stdout).unwrap(),
    )
}

#[test]
fn should_write_favicons_and_report_progress() {
    let root = project_with_source();
    let (code, stdout) = stdout_of(&mut favicon_gen(root.path()));
    assert_eq!(code, 0, "{stdout}");

    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 6, "{stdout}");
    assert!(lines[0].starts_with("Wrote ") && lines[0].ends_with("favicon-16x16.png (16x16)"));
    assert!(lines[1].ends_with("favicon-32x32.png (32x32)"));
    assert!(lines[2].ends_with("apple-touch-icon.png (180x180)"));
    assert!(lines[3].ends_with("favicon.ico (ICO with sizes: 16x16, 32x32)"));
    assert_eq!(lines[4], "");
    assert!(lines[5].starts_with("Done."));

    let output_dir = root.path().join("assets").join("favicons");
    let apple = image::open(output_dir.join("apple-touch-icon.png")).unwrap();
    assert_eq!((apple.width(), apple.height()), (180, 180));
    assert_eq!(fs::read_dir(&output_dir).unwrap().count(), 4);
}

#[test]
fn should_fail_when_source_is_missing() {
    let root = tempfile::tempdir().unwrap();
    let (code, stdout) = stdout_of(&mut favicon_gen(root.path()));
    assert_eq!(code, 1);
    assert!(stdout.starts_with("Source image not found: "), "{stdout}");
    assert!(stdout.contains("KR_fav.jpg"), "{stdout}");
    assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
}

#[test]
fn should_fail_on_undecodable_source() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("KR_fav.jpg"), b"not a jpeg").unwrap();
    favicon_gen(root.path()).assert().failure();
    assert!(!root.path().join("assets").exists());
}

#[test]
fn should_succeed_when_run_twice() {
    let root = project_with_source();
    favicon_gen(root.path()).assert().success();
    let ico_path = root.path().join("assets/favicons/favicon.ico");
    let first = fs::read(&ico_path).unwrap();

    favicon_gen(root.path()).assert().success();
    assert_eq!(fs::read(&ico_path).unwrap(), first);
    assert_eq!(
        fs::read_dir(root.path().join("assets/favicons")).unwrap().count(),
        4
    );
}
