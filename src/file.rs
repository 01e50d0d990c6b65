// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{ExportError, Result};

/// Where a "download" lands: `out` may be empty (cwd), a directory, or a file path.
pub fn resolve_out_path(out: Option<&Path>, default_filename: &str) -> Result<PathBuf> {
    let Some(p) = out else {
        return Ok(PathBuf::from(default_filename));
    };
    if looks_like_dir_hint(p) || p.is_dir() {
        ensure_directory(p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p.to_path_buf())
    }
}

/// Write the rendered text, creating parent directories as needed.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, text)?;
    logf!("File: wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::Args(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_out_means_cwd_filename() {
        let p = resolve_out_path(None, "calendar_2025_12.csv").unwrap();
        assert_eq!(p, PathBuf::from("calendar_2025_12.csv"));
    }

    #[test]
    fn dir_hint_gets_filename_appended() {
        let tmp = tempfile::tempdir().unwrap();
        let hinted = PathBuf::from(format!("{}/exports/", tmp.path().display()));
        let p = resolve_out_path(Some(&hinted), "timetable.json").unwrap();
        assert!(p.ends_with("exports/timetable.json"));
        assert!(tmp.path().join("exports").is_dir());
    }

    #[test]
    fn explicit_file_is_kept_and_parents_created() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("a/b/mine.json");
        let p = resolve_out_path(Some(&target), "timetable.json").unwrap();
        assert_eq!(p, target);
        write_text(&p, "[]").unwrap();
        assert_eq!(fs::read_to_string(&p).unwrap(), "[]");
    }
}
