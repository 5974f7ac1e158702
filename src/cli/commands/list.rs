use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};
use std::time::Instant;
use tracing::info;

use crate::config::AppConfig;
use crate::console::{Painter, build_index};
use crate::core::{BindingIndex, ScanOptions};

/// Scan the configured root and print every indexed key with its bindings
pub fn list_bindings(config: AppConfig, json: bool) -> Result<()> {
    let start = Instant::now();

    let mut index = BindingIndex::new();
    build_index(
        &config.scan_root(),
        &ScanOptions::from(&config),
        &mut index,
        &Painter::plain(),
        &mut io::sink(),
    )
    .context("Failed to build key binding index")?;

    info!(
        files = index.file_count(),
        keys = index.len(),
        elapsed = ?start.elapsed(),
        "Scan finished"
    );

    let mut stdout = io::stdout().lock();
    if json {
        let json = bindings_json(&index)?;
        writeln!(stdout, "{}", json)?;
    } else {
        write_bindings_list(&index, &Painter::from_config(&config), &mut stdout)?;
    }

    Ok(())
}

/// JSON view of one indexed key
#[derive(Debug, Serialize)]
struct KeyBindingsView {
    key: &'static str,
    kind: &'static str,
    records: Vec<String>,
}

/// Serialize the whole index, keys in enumeration order
fn bindings_json(index: &BindingIndex) -> Result<String> {
    let views: Vec<KeyBindingsView> = index
        .iter()
        .map(|(key, records)| KeyBindingsView {
            key: key.name(),
            kind: key.kind(),
            records: records.iter().map(ToString::to_string).collect(),
        })
        .collect();
    serde_json::to_string_pretty(&views).context("Failed to serialize bindings to JSON")
}

/// Print `Key : record,record` lines, leaving out the placeholder `None` key
fn write_bindings_list<W: Write>(
    index: &BindingIndex,
    painter: &Painter,
    out: &mut W,
) -> Result<()> {
    if index.is_empty() {
        info!("No key bindings found");
        return Ok(());
    }

    let colors = *painter.colors();
    for (key, records) in index.iter().filter(|(key, _)| !key.is_none()) {
        let joined = records
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        writeln!(out, "{} : {}", painter.paint(key.name(), colors.found), joined)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;

    fn sample_index() -> BindingIndex {
        let mut index = BindingIndex::new();
        index.ingest_str("one.ini", "Jump = Space\nUnset = None\nRadio = DPadLeft\n");
        index.ingest_str("two.ini", "Jump = Space\n");
        index
    }

    #[test]
    fn test_list_skips_none_key() {
        let mut out = Vec::new();
        write_bindings_list(&sample_index(), &Painter::plain(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "Space : [one.ini] Jump,[two.ini] Jump\nDPadLeft : [one.ini] Radio\n"
        );
    }

    #[test]
    fn test_list_empty_index_prints_nothing() {
        let mut out = Vec::new();
        write_bindings_list(&BindingIndex::new(), &Painter::plain(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_list_uses_theme_colors() {
        let mut config = AppConfig::default();
        config.ui.theme = Theme::Light;
        let painter = Painter::from_config(&config);

        let mut out = Vec::new();
        write_bindings_list(&sample_index(), &painter, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let space = painter.paint("Space", Theme::Light.colors().found);
        assert!(text.starts_with(&format!("{} : [one.ini] Jump,[two.ini] Jump\n", space)));

        config.ui.color = false;
        let mut out = Vec::new();
        write_bindings_list(&sample_index(), &Painter::from_config(&config), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("Space : "));
    }

    #[test]
    fn test_json_output() {
        let json = bindings_json(&sample_index()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = value.as_array().unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["key"], "None");
        assert_eq!(entries[1]["key"], "Space");
        assert_eq!(entries[1]["kind"], "keyboard");
        assert_eq!(entries[1]["records"][1], "[two.ini] Jump");
        assert_eq!(entries[2]["kind"], "controller");
    }
}
