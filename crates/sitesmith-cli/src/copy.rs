use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

/// What a mirror pass produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyStats {
    pub files: usize,
    pub dirs: usize,
}

/// Replaces `dest` with a recursive copy of `source`.
///
/// Anything already at `dest` is removed first, so files that no longer exist
/// in `source` do not survive a rebuild. `dest` must not be the source, an
/// ancestor or descendant of it, or the current directory.
pub fn copy_static_dir(source: &Path, dest: &Path) -> Result<CopyStats> {
    if !source.is_dir() {
        bail!("static directory not found: {}", source.display());
    }
    check_destination(source, dest)?;

    if dest.exists() {
        log::info!("Removing {}", dest.display());
        fs::remove_dir_all(dest).with_context(|| format!("removing {}", dest.display()))?;
    }

    let mut stats = CopyStats::default();
    copy_directory_recursive(source, dest, &mut stats)?;
    Ok(stats)
}

fn check_destination(source: &Path, dest: &Path) -> Result<()> {
    let source = resolve(source)?;
    let dest = resolve(dest)?;
    let cwd = resolve(&std::env::current_dir()?)?;

    if dest == cwd || cwd.starts_with(&dest) {
        bail!(
            "refusing to replace {}: it holds the current directory",
            dest.display()
        );
    }
    if source.starts_with(&dest) {
        bail!(
            "refusing to replace {}: it holds the static directory {}",
            dest.display(),
            source.display()
        );
    }
    if dest.starts_with(&source) {
        bail!(
            "refusing to copy {} into itself at {}",
            source.display(),
            dest.display()
        );
    }
    Ok(())
}

/// Canonical form of `path`, or its absolute form when it does not exist yet.
fn resolve(path: &Path) -> Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(canonical) => Ok(canonical),
        Err(_) => std::path::absolute(path)
            .with_context(|| format!("resolving {}", path.display())),
    }
}

fn copy_directory_recursive(source: &Path, dest: &Path, stats: &mut CopyStats) -> Result<()> {
    fs::create_dir_all(dest).with_context(|| format!("creating {}", dest.display()))?;
    log::info!("Created {}", dest.display());
    stats.dirs += 1;

    let entries = fs::read_dir(source).with_context(|| format!("reading {}", source.display()))?;
    for entry in entries {
        let entry = entry?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if from.is_dir() {
            copy_directory_recursive(&from, &to, stats)?;
        } else {
            fs::copy(&from, &to)
                .with_context(|| format!("copying {} to {}", from.display(), to.display()))?;
            log::info!("Copied {} -> {}", from.display(), to.display());
            stats.files += 1;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_copies_nested_tree() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("static");
        let dest = tmp.path().join("public");
        write(&source, "index.css", "body {}");
        write(&source, "images/logo.png", "png");
        write(&source, "images/icons/x.svg", "<svg/>");

        let stats = copy_static_dir(&source, &dest).unwrap();

        assert_eq!(stats, CopyStats { files: 3, dirs: 3 });
        assert_eq!(fs::read_to_string(dest.join("index.css")).unwrap(), "body {}");
        assert_eq!(
            fs::read_to_string(dest.join("images/icons/x.svg")).unwrap(),
            "<svg/>"
        );
    }

    #[test]
    fn test_stale_destination_files_are_removed() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("static");
        let dest = tmp.path().join("public");
        write(&source, "keep.txt", "new");
        write(&dest, "stale.txt", "old");
        write(&dest, "keep.txt", "old");

        copy_static_dir(&source, &dest).unwrap();

        assert!(!dest.join("stale.txt").exists());
        assert_eq!(fs::read_to_string(dest.join("keep.txt")).unwrap(), "new");
    }

    #[test]
    fn test_empty_source_creates_empty_destination() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("static");
        fs::create_dir_all(&source).unwrap();
        let dest = tmp.path().join("public");

        let stats = copy_static_dir(&source, &dest).unwrap();

        assert_eq!(stats, CopyStats { files: 0, dirs: 1 });
        assert!(dest.is_dir());
    }

    #[test]
    fn test_destination_equal_to_source_is_refused() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("static");
        write(&source, "index.css", "body {}");

        let err = copy_static_dir(&source, &source).unwrap_err();

        assert!(err.to_string().contains("refusing"));
        assert!(source.join("index.css").exists());
    }

    #[test]
    fn test_destination_holding_source_is_refused() {
        let tmp = TempDir::new().unwrap();
        let site = tmp.path().join("site");
        let source = site.join("static");
        write(&source, "index.css", "body {}");

        let err = copy_static_dir(&source, &site).unwrap_err();

        assert!(err.to_string().contains("refusing"));
        assert!(source.join("index.css").exists());
    }

    #[test]
    fn test_destination_inside_source_is_refused() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("static");
        write(&source, "index.css", "body {}");

        let err = copy_static_dir(&source, &source.join("public")).unwrap_err();

        assert!(err.to_string().contains("refusing"));
        assert!(!source.join("public").exists());
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("nope");

        let err = copy_static_dir(&source, &tmp.path().join("public")).unwrap_err();

        assert!(err.to_string().contains("nope"));
    }
}
