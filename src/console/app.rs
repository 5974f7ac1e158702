use anyhow::{Context, Result};
use std::io::{self, Write};

use crate::config::AppConfig;
use crate::console::input::TerminalKeys;
use crate::console::painter::Painter;
use crate::console::scan::build_index;
use crate::console::session::QuerySession;
use crate::core::{BindingIndex, ScanOptions};

/// Scan the configured root, then answer queries until the user quits
pub fn run_interactive(cfg: &AppConfig) -> Result<()> {
    let painter = Painter::from_config(cfg);
    let mut stdout = io::stdout().lock();

    let mut index = BindingIndex::new();
    build_index(
        &cfg.scan_root(),
        &ScanOptions::from(cfg),
        &mut index,
        &painter,
        &mut stdout,
    )
    .context("Failed to build key binding index")?;
    writeln!(stdout, "{}", cfg.internal.separator)?;

    let stdin = io::stdin().lock();
    let mut session = QuerySession::new(&index, cfg, stdin, stdout, TerminalKeys::default());
    session.run().context("Query loop failed")
}
