//! Key probe: name each pressed key the way it should be written in a config file.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MediaKeyCode, ModifierKeyCode};

/// Console key names that differ from the spelling a config file expects
const NAME_OVERRIDES: &[(&str, &str)] = &[
    ("Backspace", "Back"),
    ("UpArrow", "Up"),
    ("DownArrow", "Down"),
    ("LeftArrow", "Left"),
    ("RightArrow", "Right"),
    ("Spacebar", "Space"),
    ("OemComma", "Oemcomma"),
    ("OemPlus", "Oemplus"),
    ("OemTilde", "Oemtilde"),
    ("MediaNext", "MediaNextTrack"),
    ("MediaPrevious", "MediaPreviousTrack"),
];

/// What to do with one key press in probe mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeAction {
    /// Escape was pressed, leave probe mode
    Exit,
    /// Print this line
    Print(String),
    /// The key has no name, print nothing
    Ignore,
}

/// Decide what to show for a key press
pub fn describe_key(event: &KeyEvent) -> ProbeAction {
    if event.code == KeyCode::Esc {
        return ProbeAction::Exit;
    }

    let Some(name) = console_name(event.code) else {
        return ProbeAction::Ignore;
    };

    let mut line = modifier_prefix(event.modifiers);
    line.push_str(config_spelling(&name));
    ProbeAction::Print(line)
}

/// `ALT + `, `SHIFT + ` and `CTL + ` for every held modifier, in that order
fn modifier_prefix(modifiers: KeyModifiers) -> String {
    let mut prefix = String::new();
    if modifiers.contains(KeyModifiers::ALT) {
        prefix.push_str("ALT + ");
    }
    if modifiers.contains(KeyModifiers::SHIFT) {
        prefix.push_str("SHIFT + ");
    }
    if modifiers.contains(KeyModifiers::CONTROL) {
        prefix.push_str("CTL + ");
    }
    prefix
}

/// Map a console key name to its config spelling, if it differs
fn config_spelling(name: &str) -> &str {
    NAME_OVERRIDES
        .iter()
        .find(|(console, _)| *console == name)
        .map_or(name, |&(_, config)| config)
}

/// Console name of a physical key
fn console_name(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Char(c) => return char_key_name(c),
        KeyCode::F(n) => return Some(format!("F{}", n)),
        KeyCode::Backspace => "Backspace",
        KeyCode::Enter => "Enter",
        KeyCode::Left => "LeftArrow",
        KeyCode::Right => "RightArrow",
        KeyCode::Up => "UpArrow",
        KeyCode::Down => "DownArrow",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::Tab | KeyCode::BackTab => "Tab",
        KeyCode::Delete => "Delete",
        KeyCode::Insert => "Insert",
        KeyCode::CapsLock => "CapsLock",
        KeyCode::ScrollLock => "Scroll",
        KeyCode::NumLock => "NumLock",
        KeyCode::PrintScreen => "PrintScreen",
        KeyCode::Pause => "Pause",
        KeyCode::Menu => "Apps",
        KeyCode::Media(media) => media_key_name(media)?,
        KeyCode::Modifier(modifier) => modifier_key_name(modifier)?,
        _ => return None,
    };
    Some(name.to_string())
}

/// Name of a character key, ignoring the shift state that produced it
fn char_key_name(c: char) -> Option<String> {
    if c.is_ascii_alphabetic() {
        return Some(c.to_ascii_uppercase().to_string());
    }
    if c.is_ascii_digit() {
        return Some(format!("D{}", c));
    }

    let name = match c {
        ' ' => "Spacebar",
        ')' => "D0",
        '!' => "D1",
        '@' => "D2",
        '#' => "D3",
        '$' => "D4",
        '%' => "D5",
        '^' => "D6",
        '&' => "D7",
        '*' => "D8",
        '(' => "D9",
        ',' | '<' => "OemComma",
        '.' | '>' => "OemPeriod",
        '-' | '_' => "OemMinus",
        '=' | '+' => "OemPlus",
        '`' | '~' => "OemTilde",
        ';' | ':' => "Oem1",
        '/' | '?' => "Oem2",
        '[' | '{' => "Oem4",
        '\\' | '|' => "Oem5",
        ']' | '}' => "Oem6",
        '\'' | '"' => "Oem7",
        _ => return None,
    };
    Some(name.to_string())
}

fn media_key_name(media: MediaKeyCode) -> Option<&'static str> {
    let name = match media {
        MediaKeyCode::Play | MediaKeyCode::Pause | MediaKeyCode::PlayPause => "MediaPlayPause",
        MediaKeyCode::Stop => "MediaStop",
        MediaKeyCode::TrackNext => "MediaNext",
        MediaKeyCode::TrackPrevious => "MediaPrevious",
        MediaKeyCode::LowerVolume => "VolumeDown",
        MediaKeyCode::RaiseVolume => "VolumeUp",
        MediaKeyCode::MuteVolume => "VolumeMute",
        _ => return None,
    };
    Some(name)
}

fn modifier_key_name(modifier: ModifierKeyCode) -> Option<&'static str> {
    let name = match modifier {
        ModifierKeyCode::LeftShift => "LShiftKey",
        ModifierKeyCode::RightShift => "RShiftKey",
        ModifierKeyCode::LeftControl => "LControlKey",
        ModifierKeyCode::RightControl => "RControlKey",
        ModifierKeyCode::LeftAlt => "LMenu",
        ModifierKeyCode::RightAlt => "RMenu",
        ModifierKeyCode::LeftSuper => "LWin",
        ModifierKeyCode::RightSuper => "RWin",
        _ => return None,
    };
    Some(name)
}
