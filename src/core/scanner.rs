//! This module provides recursive directory traversal to discover configuration files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::AppConfig;

/// Options controlling which files the scanner reports
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// File name pattern, e.g. `*.ini`
    pub pattern: String,
    /// Maximum directory depth below the root (0 means unlimited)
    pub max_depth: usize,
    /// Directory name patterns that are never entered
    pub exclude_dirs: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            pattern: "*.ini".to_string(),
            max_depth: 0,
            exclude_dirs: Vec::new(),
        }
    }
}

impl From<&AppConfig> for ScanOptions {
    fn from(cfg: &AppConfig) -> Self {
        Self {
            pattern: cfg.main.pattern.clone(),
            max_depth: cfg.main.max_depth,
            exclude_dirs: cfg.internal.exclude_dirs.clone(),
        }
    }
}

/// Something the scanner found while walking the tree
#[derive(Debug)]
pub enum ScanEvent<'a> {
    /// A file whose name matches the pattern
    File(&'a Path),
    /// A directory whose traversal was abandoned
    Skipped { dir: &'a Path, reason: SkipReason },
}

/// Why a directory was not (fully) traversed
#[derive(Debug)]
pub enum SkipReason {
    PermissionDenied,
    Io(io::Error),
}

impl From<io::Error> for SkipReason {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::PermissionDenied {
            Self::PermissionDenied
        } else {
            Self::Io(err)
        }
    }
}

/// Totals for a finished scan
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub files: usize,
    pub skipped_dirs: usize,
}

/// Walk `root` and report every matching file exactly once.
///
/// Files of a directory are reported before any of its subdirectories are
/// entered. Entries are visited in file name order. Errors never abort the
/// walk: the affected directory is reported as skipped and its siblings are
/// still visited.
pub fn scan_tree<F>(root: &Path, opts: &ScanOptions, mut on_event: F) -> ScanSummary
where
    F: FnMut(ScanEvent<'_>),
{
    let mut summary = ScanSummary::default();
    scan_recursive(root, opts, 0, &mut summary, &mut on_event);
    debug!(
        root = %root.display(),
        files = summary.files,
        skipped_dirs = summary.skipped_dirs,
        "Directory scan finished"
    );
    summary
}

/// Collect matching file paths under `root`, ignoring skipped directories
pub fn collect_files(root: &Path, opts: &ScanOptions) -> Vec<PathBuf> {
    let mut files = Vec::new();
    scan_tree(root, opts, |event| {
        if let ScanEvent::File(path) = event {
            files.push(path.to_path_buf());
        }
    });
    files
}

fn scan_recursive<F>(
    dir: &Path,
    opts: &ScanOptions,
    depth: usize,
    summary: &mut ScanSummary,
    on_event: &mut F,
) where
    F: FnMut(ScanEvent<'_>),
{
    if opts.max_depth > 0 && depth >= opts.max_depth {
        return;
    }

    let (files, subdirs) = match list_directory(dir, &opts.pattern, &opts.exclude_dirs) {
        Ok(listing) => listing,
        Err(err) => {
            let reason = SkipReason::from(err);
            warn!(dir = %dir.display(), reason = ?reason, "Skipping directory");
            summary.skipped_dirs += 1;
            on_event(ScanEvent::Skipped { dir, reason });
            return;
        }
    };

    for file in &files {
        summary.files += 1;
        on_event(ScanEvent::File(file));
    }

    for subdir in &subdirs {
        scan_recursive(subdir, opts, depth + 1, summary, on_event);
    }
}

/// List a directory, split into matching files and subdirectories to descend into
fn list_directory(
    dir: &Path,
    pattern: &str,
    exclude_dirs: &[String],
) -> io::Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut files = Vec::new();
    let mut subdirs = Vec::new();

    for entry in entries {
        let file_type = entry.file_type()?;
        let entry_path = entry.path();
        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();

        // Symlinked directories are not followed, which keeps cycles out.
        if file_type.is_dir() {
            if !is_excluded(&file_name, exclude_dirs) {
                subdirs.push(entry_path);
            }
        } else if matches_wildcard(&file_name, pattern) && entry_path.is_file() {
            files.push(entry_path);
        }
    }

    Ok((files, subdirs))
}

/// Check if a directory should be excluded from scanning
#[inline]
fn is_excluded(dir_name: &str, exclude_patterns: &[String]) -> bool {
    exclude_patterns
        .iter()
        .any(|pattern| matches_wildcard(dir_name, pattern))
}

/// Match a name against a pattern with wildcard support
#[inline]
pub fn matches_wildcard(name: &str, pattern: &str) -> bool {
    if !pattern.contains('*') {
        return name == pattern;
    }

    let parts: Vec<&str> = pattern.split('*').collect();

    match parts.len() {
        1 => true,
        2 => {
            let (prefix, suffix) = (parts[0], parts[1]);
            match (prefix.is_empty(), suffix.is_empty()) {
                (true, false) => name.ends_with(suffix),   // "*suffix"
                (false, true) => name.starts_with(prefix), // "prefix*"
                (false, false) => {
                    // "prefix*suffix"
                    name.starts_with(prefix)
                        && name.ends_with(suffix)
                        && name.len() >= prefix.len() + suffix.len()
                }
                (true, true) => true, // "*"
            }
        }
        _ => name == pattern, // complex patterns fallback to exact match
    }
}
