//! Scan phase: walk the tree and feed every matching file to the index.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

use crate::console::Painter;
use crate::core::{
    BindingIndex, ScanEvent, ScanOptions, ScanSummary, SkipReason, scan_tree, two_level_label,
};

/// Populate `index` from every file under `root`, writing a notice per file to `out`.
///
/// Unreadable directories and files are reported and skipped.
pub fn build_index<W: Write>(
    root: &Path,
    opts: &ScanOptions,
    index: &mut BindingIndex,
    painter: &Painter,
    out: &mut W,
) -> Result<ScanSummary> {
    let colors = *painter.colors();
    let mut written = Ok(());

    let summary = scan_tree(root, opts, |event| {
        let line = match event {
            ScanEvent::File(path) => {
                let label = two_level_label(path);
                let reading = painter.paint(&format!("Reading file {}", label), colors.notice);
                match index.ingest_file(path) {
                    Ok(_) => reading,
                    Err(e) => {
                        warn!(file = %path.display(), "Skipping file: {:#}", e);
                        let failed = format!("Could not read file {}: {:#}", label, e);
                        format!("{}\n{}", reading, painter.paint(&failed, colors.invalid))
                    }
                }
            }
            ScanEvent::Skipped { dir, reason } => match reason {
                SkipReason::PermissionDenied => painter.paint(
                    &format!("Access denied to directory: {}", dir.display()),
                    colors.invalid,
                ),
                SkipReason::Io(e) => painter.paint(
                    &format!("An error occurred in {}: {}", dir.display(), e),
                    colors.invalid,
                ),
            },
        };

        if written.is_ok() {
            written = writeln!(out, "{}", line);
        }
    });

    written.context("Failed to write scan progress")?;

    info!(
        files = summary.files,
        keys = index.len(),
        records = index.record_count(),
        "Index built"
    );
    Ok(summary)
}
