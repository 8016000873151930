//! General utility functions for unhma
//!
//! This module contains common helper functions used across the library.

use anyhow::{Context, Result};
use globset::{Glob, GlobMatcher};
use std::fs;
use std::path::{Path, PathBuf};

/// Format a file size in human-readable form (B, KB, MB)
pub fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} B", size)
    }
}

/// Create a glob matcher from a pattern string
///
/// Handles common patterns:
/// - `*.ext` becomes `**/*.ext` (match in any directory)
/// - Plain text without wildcards becomes `**/*text*` (substring search)
pub fn create_glob_matcher(pattern: &str) -> Result<GlobMatcher> {
    let pattern = if pattern.starts_with("*.") {
        format!("**/{}", pattern)
    } else if !pattern.contains('*') && !pattern.contains('?') {
        format!("**/*{}*", pattern)
    } else {
        pattern.to_string()
    };

    let glob = Glob::new(&pattern).with_context(|| format!("Invalid pattern: {}", pattern))?;
    Ok(glob.compile_matcher())
}

/// Check if a name matches the optional filter
pub fn matches_filter(name: &str, matcher: Option<&GlobMatcher>) -> bool {
    match matcher {
        Some(m) => m.is_match(name),
        None => true,
    }
}

/// Whether a path carries the `.hma` extension (any case)
pub fn is_hma_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("hma"))
        .unwrap_or(false)
}

/// Collect the files in a directory, descending into subdirectories if `recursive`
pub fn collect_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_files_into(dir, recursive, &mut files)
        .with_context(|| format!("Failed to list {}", dir.display()))?;
    files.sort();
    Ok(files)
}

fn collect_files_into(dir: &Path, recursive: bool, files: &mut Vec<PathBuf>) -> Result<()> {
    if dir.is_dir() {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_dir() {
                if recursive {
                    collect_files_into(&path, recursive, files)?;
                }
            } else {
                files.push(path);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_patterns() {
        let ext = create_glob_matcher("*.hma").unwrap();
        assert!(matches_filter("designs/Sabre.hma", Some(&ext)));
        assert!(!matches_filter("designs/Sabre.hmp", Some(&ext)));

        let substring = create_glob_matcher("Sabre").unwrap();
        assert!(matches_filter("designs/Sabre SB-27.hma", Some(&substring)));
        assert!(matches_filter("anything", None));
    }

    #[test]
    fn test_is_hma_file() {
        assert!(is_hma_file(Path::new("a/Stuka.hma")));
        assert!(is_hma_file(Path::new("Stuka.HMA")));
        assert!(!is_hma_file(Path::new("Stuka.hmp")));
        assert!(!is_hma_file(Path::new("hma")));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn test_collect_files_depth() {
        let root = std::env::temp_dir().join(format!("unhma-collect-{}", std::process::id()));
        let nested = root.join("nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.join("a.hma"), b"").unwrap();
        fs::write(nested.join("b.hma"), b"").unwrap();

        assert_eq!(collect_files(&root, false).unwrap().len(), 1);
        assert_eq!(collect_files(&root, true).unwrap().len(), 2);

        fs::remove_dir_all(&root).unwrap();
    }
}
