//! File helpers shared by the changelog operations

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

/// Read a text file as lines, without line terminators
pub(crate) fn read_lines(path: &Path) -> std::io::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Join lines with every line newline-terminated
pub(crate) fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut output = String::new();
    for line in lines {
        output.push_str(line.as_ref());
        output.push('\n');
    }
    output
}

/// Replace `path` with `content` through a temporary sibling file, so the
/// path holds either the old or the new content at every point. An existing
/// file keeps its permissions.
pub(crate) fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(content.as_bytes())?;
    match std::fs::metadata(path) {
        Ok(existing) => temp.as_file().set_permissions(existing.permissions())?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    debug!(path = %path.display(), bytes = content.len(), "file replaced");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_join_lines_terminates_each_line() {
        assert_eq!(join_lines(&["a", "", "b"]), "a\n\nb\n");
        assert_eq!(join_lines::<&str>(&[]), "");
    }

    #[test]
    fn test_read_lines_handles_crlf() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("crlf.md");
        std::fs::write(&path, "one\r\ntwo\r\n").unwrap();
        assert_eq!(read_lines(&path).unwrap(), vec!["one", "two"]);
    }

    #[test]
    fn test_write_atomic_replaces_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("changelog");
        std::fs::write(&path, "old\n").unwrap();

        write_atomic(&path, "new\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\n");
        let leftovers = std::fs::read_dir(temp.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_keeps_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        std::fs::write(&path, "old\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o664)).unwrap();

        write_atomic(&path, "new\n").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o664);
    }
}
