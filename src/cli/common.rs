//! Shared input/output plumbing for CLI commands.

use anyhow::{Context, Result};
use json2rss::log;
use std::{
    fs,
    io::Read,
    path::Path,
};

/// Read the input document from a file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))
    }
}

/// Write the result to a file (logged) or stdout.
pub fn write_output(path: Option<&Path>, text: &str, module: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, text)
                .with_context(|| format!("failed to write `{}`", path.display()))?;
            log!(module; "{}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_write_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.json");

        write_output(Some(&path), "{}", "feed").unwrap();
        assert_eq!(read_input(&path).unwrap(), "{}");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_input(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
