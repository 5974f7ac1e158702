//! Interactive query loop over a built index.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::console::command::Command;
use crate::console::input::KeySource;
use crate::console::painter::Painter;
use crate::console::probe::{ProbeAction, describe_key};
use crate::core::{BindingIndex, MODIFIER_KEYS, SymbolicKey};

/// Result of answering one key query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The input names no known key
    Invalid,
    /// The key is known but nothing binds it
    Empty,
    /// This many records were printed
    Found(usize),
}

/// Prompt session: reads commands from `input` and answers on `output`
pub struct QuerySession<'a, R, W, K> {
    index: &'a BindingIndex,
    painter: Painter,
    separator: String,
    input: R,
    output: W,
    keys: K,
}

impl<'a, R, W, K> QuerySession<'a, R, W, K>
where
    R: BufRead,
    W: Write,
    K: KeySource,
{
    pub fn new(index: &'a BindingIndex, cfg: &AppConfig, input: R, output: W, keys: K) -> Self {
        Self {
            index,
            painter: Painter::from_config(cfg),
            separator: cfg.internal.separator.clone(),
            input,
            output,
            keys,
        }
    }

    /// Run until `quit` is entered or input is closed
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_banner()?;

            let Some(line) = self.read_line()? else {
                debug!("Input closed, leaving query loop");
                return Ok(());
            };
            self.print_separator()?;

            match Command::parse(&line) {
                Command::Quit => return Ok(()),
                Command::Modifiers => self.print_modifiers()?,
                Command::Lookup => {
                    if let Err(e) = self.run_key_probe() {
                        warn!("Key lookup ended early: {:#}", e);
                        let notice = format!("Key lookup is unavailable: {:#}", e);
                        let colors = *self.painter.colors();
                        writeln!(self.output, "{}", self.painter.paint(&notice, colors.invalid))?;
                    }
                }
                Command::Query(query) => {
                    let outcome = self.answer_query(query)?;
                    debug!(query, ?outcome, "Answered query");
                }
            }

            self.print_separator()?;
        }
    }

    /// Consume the session and hand back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    fn print_banner(&mut self) -> Result<()> {
        let lookup = self.painter.emphasis("lookup");
        let modifiers = self.painter.emphasis("modifiers");
        let quit = self.painter.emphasis("quit");
        writeln!(
            self.output,
            "Type in any keybind to see matching keybinds. It has to match what you would write in the ini.\n\
             Type in {} if you need to figure out what a key should be typed out as.\n\
             Type in {} to see modifier keys.\n\
             Type in {} to exit.",
            lookup, modifiers, quit
        )?;
        writeln!(self.output, "{}", self.separator)?;
        write!(self.output, "> ")?;
        self.output.flush().context("Failed to flush prompt")
    }

    fn print_separator(&mut self) -> Result<()> {
        let line = self
            .painter
            .paint(&self.separator, self.painter.colors().separator);
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Read one line, `None` once input is exhausted
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read command")?;
        Ok((read > 0).then_some(line))
    }

    fn print_modifiers(&mut self) -> Result<()> {
        for (label, key) in MODIFIER_KEYS {
            writeln!(self.output, "{} -> {}", label, key)?;
        }
        Ok(())
    }

    /// Print every record bound to the key named by `query`
    pub fn answer_query(&mut self, query: &str) -> Result<QueryOutcome> {
        let colors = *self.painter.colors();

        let Some(key) = SymbolicKey::resolve(query) else {
            let line = self.painter.paint("Invalid keybind", colors.invalid);
            writeln!(self.output, "{}", line)?;
            return Ok(QueryOutcome::Invalid);
        };

        let records = self.index.lookup(key);
        if records.is_empty() {
            let line = self
                .painter
                .paint(&format!("No keys found for {}", query), colors.empty);
            writeln!(self.output, "{}", line)?;
            return Ok(QueryOutcome::Empty);
        }

        let header = format!("Found {} keys for {}", records.len(), key);
        writeln!(self.output, "{}", self.painter.paint(&header, colors.found))?;
        for record in records {
            writeln!(self.output, "{}", record)?;
        }
        Ok(QueryOutcome::Found(records.len()))
    }

    fn run_key_probe(&mut self) -> Result<()> {
        let colors = *self.painter.colors();
        let modifiers = self.painter.emphasis("modifiers");
        let escape = self.painter.emphasis("escape");

        writeln!(
            self.output,
            "Whenever you press a key, it will show you the proper way of typing in that keybind. \
             This also helps when looking for your keybinds."
        )?;
        let caveat = "Controller keybinds do not work. Modifier keys do not work as expected either.\n\
                      If there are keys that do not print out correctly, please let me know.";
        writeln!(self.output, "{}", self.painter.paint(caveat, colors.invalid))?;
        writeln!(
            self.output,
            "To see how to input modifier keys, use the {} command instead.",
            modifiers
        )?;
        let exit_hint = format!("Press {} to exit this mode.", escape);
        writeln!(self.output, "{}", self.painter.paint(&exit_hint, colors.warning))?;
        self.output.flush()?;

        self.keys.begin_capture()?;
        let probed = self.probe_keys();
        let ended = self.keys.end_capture();
        probed.and(ended)
    }

    fn probe_keys(&mut self) -> Result<()> {
        loop {
            let event = self.keys.next_key()?;
            match describe_key(&event) {
                ProbeAction::Exit => return Ok(()),
                // Raw mode does not translate "\n" into a carriage return.
                ProbeAction::Print(name) => {
                    write!(self.output, "{}\r\n", name)?;
                    self.output.flush()?;
                }
                ProbeAction::Ignore => debug!(?event, "Key has no name"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::collections::VecDeque;
    use std::io::Cursor;

    /// Replays a fixed list of key presses
    #[derive(Default)]
    struct ScriptedKeys {
        presses: VecDeque<KeyEvent>,
        captures: usize,
        active: bool,
        no_terminal: bool,
    }

    impl ScriptedKeys {
        fn new(codes: &[(KeyCode, KeyModifiers)]) -> Self {
            Self {
                presses: codes
                    .iter()
                    .map(|&(code, modifiers)| KeyEvent::new(code, modifiers))
                    .collect(),
                ..Self::default()
            }
        }
    }

    impl KeySource for ScriptedKeys {
        fn next_key(&mut self) -> Result<KeyEvent> {
            self.presses
                .pop_front()
                .ok_or_else(|| anyhow!("no more scripted keys"))
        }

        fn begin_capture(&mut self) -> Result<()> {
            if self.no_terminal {
                return Err(anyhow!("Failed to enable terminal raw mode"));
            }
            self.captures += 1;
            self.active = true;
            Ok(())
        }

        fn end_capture(&mut self) -> Result<()> {
            self.active = false;
            Ok(())
        }
    }

    fn plain_config() -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.ui.color = false;
        cfg
    }

    fn run_session(index: &BindingIndex, input: &str, keys: ScriptedKeys) -> (Result<()>, String) {
        let cfg = plain_config();
        let mut session = QuerySession::new(index, &cfg, Cursor::new(input), Vec::new(), keys);
        let result = session.run();
        let output = String::from_utf8(session.into_output()).unwrap();
        (result, output)
    }

    fn sample_index() -> BindingIndex {
        let mut index = BindingIndex::new();
        index.ingest_str("game/a/settings.ini", "Drive = Up\nCount = 3\n");
        index
    }

    #[test]
    fn test_quit_ends_immediately() {
        let index = sample_index();
        let (result, output) = run_session(&index, "quit\nUp\n", ScriptedKeys::default());

        assert!(result.is_ok());
        assert_eq!(output.matches("Type in any keybind").count(), 1);
        assert!(!output.contains("Found"));
    }

    #[test]
    fn test_quit_is_case_insensitive() {
        let index = sample_index();
        let (result, output) = run_session(&index, "QuIt\n", ScriptedKeys::default());
        assert!(result.is_ok());
        assert_eq!(output.matches("Type in any keybind").count(), 1);
    }

    #[test]
    fn test_found_query_prints_records() {
        let index = sample_index();
        let (_, output) = run_session(&index, "Up\nquit\n", ScriptedKeys::default());

        assert!(output.contains("Found 1 keys for Up\n[game/a/settings.ini] Drive\n"));
        assert_eq!(output.matches("Type in any keybind").count(), 2);
    }

    #[test]
    fn test_known_key_without_records_is_empty_not_invalid() {
        let index = sample_index();
        let (_, output) = run_session(&index, "Down\nquit\n", ScriptedKeys::default());

        assert!(output.contains("No keys found for Down"));
        assert!(!output.contains("Invalid keybind"));
    }

    #[test]
    fn test_unknown_or_miscased_query_is_invalid() {
        let index = sample_index();
        let (result, output) =
            run_session(&index, "up\nNotAKey\n\nquit\n", ScriptedKeys::default());

        assert!(result.is_ok());
        assert_eq!(output.matches("Invalid keybind").count(), 3);
        assert!(!output.contains("No keys found"));
    }

    #[test]
    fn test_query_reports_outcome() {
        let index = sample_index();
        let cfg = plain_config();
        let mut session = QuerySession::new(
            &index,
            &cfg,
            Cursor::new(""),
            Vec::new(),
            ScriptedKeys::default(),
        );

        assert_eq!(session.answer_query("Up").unwrap(), QueryOutcome::Found(1));
        assert_eq!(session.answer_query("DPadUp").unwrap(), QueryOutcome::Empty);
        assert_eq!(session.answer_query("3").unwrap(), QueryOutcome::Invalid);
    }

    #[test]
    fn test_alias_query_reports_canonical_name() {
        let mut index = BindingIndex::new();
        index.ingest_str("menu.ini", "Confirm = Return\n");
        let (_, output) = run_session(&index, "Enter\nquit\n", ScriptedKeys::default());

        assert!(output.contains("Found 1 keys for Return\n[menu.ini] Confirm\n"));
    }

    #[test]
    fn test_modifiers_table() {
        let index = BindingIndex::new();
        let (_, output) = run_session(&index, "MODIFIERS\nquit\n", ScriptedKeys::default());

        assert!(output.contains("Left Shift -> LShiftKey\n"));
        assert!(output.contains("Right Alt -> RMenu\n"));
        assert!(!output.contains("Invalid keybind"));
    }

    #[test]
    fn test_lookup_mode_prints_keys_until_escape() {
        let index = BindingIndex::new();
        let keys = ScriptedKeys::new(&[
            (KeyCode::Backspace, KeyModifiers::NONE),
            (KeyCode::Char('Q'), KeyModifiers::SHIFT),
            (KeyCode::Null, KeyModifiers::NONE),
            (KeyCode::Esc, KeyModifiers::NONE),
        ]);
        let (result, output) = run_session(&index, "lookup\nquit\n", keys);

        assert!(result.is_ok());
        assert!(output.contains("Press escape to exit this mode."));
        assert!(output.contains("Back\r\nSHIFT + Q\r\n"));
        assert_eq!(output.matches("Type in any keybind").count(), 2);
    }

    #[test]
    fn test_lookup_mode_ignores_typed_commands() {
        let index = BindingIndex::new();
        let keys = ScriptedKeys::new(&[
            (KeyCode::Char('q'), KeyModifiers::NONE),
            (KeyCode::Char('u'), KeyModifiers::NONE),
            (KeyCode::Enter, KeyModifiers::NONE),
            (KeyCode::Esc, KeyModifiers::NONE),
        ]);
        let cfg = plain_config();
        let input = Cursor::new("lookup\nquit\n");
        let mut session = QuerySession::new(&index, &cfg, input, Vec::new(), keys);
        session.run().unwrap();

        assert_eq!(session.keys.captures, 1);
        assert!(!session.keys.active);
        let output = String::from_utf8(session.into_output()).unwrap();
        assert!(output.contains("Q\r\nU\r\nEnter\r\n"));
    }

    #[test]
    fn test_key_source_failure_returns_to_commands() {
        let index = sample_index();
        let keys = ScriptedKeys::new(&[(KeyCode::Char('a'), KeyModifiers::NONE)]);
        let cfg = plain_config();
        let input = Cursor::new("lookup\nUp\nquit\n");
        let mut session = QuerySession::new(&index, &cfg, input, Vec::new(), keys);

        assert!(session.run().is_ok());
        assert!(!session.keys.active);
        let output = String::from_utf8(session.into_output()).unwrap();
        assert!(output.contains("A\r\nKey lookup is unavailable: no more scripted keys\n"));
        assert!(output.contains("Found 1 keys for Up"));
        assert_eq!(output.matches("Type in any keybind").count(), 3);
    }

    #[test]
    fn test_missing_terminal_keeps_loop_alive() {
        let index = sample_index();
        let keys = ScriptedKeys {
            no_terminal: true,
            ..ScriptedKeys::default()
        };
        let (result, output) = run_session(&index, "LOOKUP\nUp\nquit\n", keys);

        assert!(result.is_ok());
        assert!(output.contains("Key lookup is unavailable: Failed to enable terminal raw mode"));
        assert!(output.contains("Found 1 keys for Up\n[game/a/settings.ini] Drive\n"));
        assert_eq!(output.matches("Type in any keybind").count(), 3);
    }

    #[test]
    fn test_closed_input_ends_loop() {
        let index = sample_index();
        let (result, output) = run_session(&index, "Up\n", ScriptedKeys::default());

        assert!(result.is_ok());
        assert!(output.contains("Found 1 keys for Up"));
    }
}
