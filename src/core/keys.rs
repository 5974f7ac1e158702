//! Symbolic key names recognized in configuration files.
//!
//! Two closed enumerations are supported: keyboard keys, spelled the way
//! Windows Forms names them (`Up`, `D1`, `LShiftKey`, `Oemcomma`, ...), and
//! gamepad buttons (`DPadUp`, `LeftShoulder`, ...). Matching is exact and
//! case-sensitive.

use std::fmt;
use std::str::FromStr;

/// Declare a closed set of key names.
///
/// Each variant's identifier is its canonical spelling. Extra spellings that
/// name the same key may follow the variant as `| "Alias"` literals.
macro_rules! symbolic_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident $(| $alias:literal)* ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $( $variant ),*
        }

        impl $name {
            /// Every key in declaration order
            pub const ALL: &'static [Self] = &[$( Self::$variant ),*];

            /// Alternative spellings and the key they name
            const ALIASES: &'static [(&'static str, Self)] = &[
                $( $( ($alias, Self::$variant), )* )*
            ];

            /// Canonical spelling of this key
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant), )*
                }
            }

            /// Look up a key by canonical spelling or alias
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|key| key.name() == name)
                    .or_else(|| {
                        Self::ALIASES
                            .iter()
                            .find(|(alias, _)| *alias == name)
                            .map(|&(_, key)| key)
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s)
                    .ok_or_else(|| format!("Unknown {} '{}'", stringify!($name), s))
            }
        }
    };
}

symbolic_enum! {
    /// Keyboard key names
    pub enum KeyboardKey {
        None,
        KeyCode,
        Modifiers,
        LButton,
        RButton,
        Cancel,
        MButton,
        XButton1,
        XButton2,
        Back,
        Tab,
        LineFeed,
        Clear,
        Return | "Enter",
        ShiftKey,
        ControlKey,
        Menu,
        Pause,
        Capital | "CapsLock",
        KanaMode | "HanguelMode" | "HangulMode",
        JunjaMode,
        FinalMode,
        HanjaMode | "KanjiMode",
        Escape,
        IMEConvert,
        IMENonconvert,
        IMEAccept | "IMEAceept",
        IMEModeChange,
        Space,
        PageUp | "Prior",
        PageDown | "Next",
        End,
        Home,
        Left,
        Up,
        Right,
        Down,
        Select,
        Print,
        Execute,
        PrintScreen | "Snapshot",
        Insert,
        Delete,
        Help,
        D0,
        D1,
        D2,
        D3,
        D4,
        D5,
        D6,
        D7,
        D8,
        D9,
        A,
        B,
        C,
        D,
        E,
        F,
        G,
        H,
        I,
        J,
        K,
        L,
        M,
        N,
        O,
        P,
        Q,
        R,
        S,
        T,
        U,
        V,
        W,
        X,
        Y,
        Z,
        LWin,
        RWin,
        Apps,
        Sleep,
        NumPad0,
        NumPad1,
        NumPad2,
        NumPad3,
        NumPad4,
        NumPad5,
        NumPad6,
        NumPad7,
        NumPad8,
        NumPad9,
        Multiply,
        Add,
        Separator,
        Subtract,
        Decimal,
        Divide,
        F1,
        F2,
        F3,
        F4,
        F5,
        F6,
        F7,
        F8,
        F9,
        F10,
        F11,
        F12,
        F13,
        F14,
        F15,
        F16,
        F17,
        F18,
        F19,
        F20,
        F21,
        F22,
        F23,
        F24,
        NumLock,
        Scroll,
        LShiftKey,
        RShiftKey,
        LControlKey,
        RControlKey,
        LMenu,
        RMenu,
        BrowserBack,
        BrowserForward,
        BrowserRefresh,
        BrowserStop,
        BrowserSearch,
        BrowserFavorites,
        BrowserHome,
        VolumeMute,
        VolumeDown,
        VolumeUp,
        MediaNextTrack,
        MediaPreviousTrack,
        MediaStop,
        MediaPlayPause,
        LaunchMail,
        SelectMedia,
        LaunchApplication1,
        LaunchApplication2,
        OemSemicolon | "Oem1",
        Oemplus,
        Oemcomma,
        OemMinus,
        OemPeriod,
        OemQuestion | "Oem2",
        Oemtilde | "Oem3",
        OemOpenBrackets | "Oem4",
        OemPipe | "Oem5",
        OemCloseBrackets | "Oem6",
        OemQuotes | "Oem7",
        Oem8,
        OemBackslash | "Oem102",
        ProcessKey,
        Packet,
        Attn,
        Crsel,
        Exsel,
        EraseEof,
        Play,
        Zoom,
        NoName,
        Pa1,
        OemClear,
        Shift,
        Control,
        Alt,
    }
}

symbolic_enum! {
    /// Gamepad button names
    pub enum ControllerButton {
        None,
        DPadUp,
        DPadDown,
        DPadLeft,
        DPadRight,
        Start,
        Back,
        LeftThumb,
        RightThumb,
        LeftShoulder,
        RightShoulder,
        A,
        B,
        X,
        Y,
    }
}

/// Human-readable modifier names and the keyboard key to write in a config file
pub const MODIFIER_KEYS: &[(&str, KeyboardKey)] = &[
    ("Left Shift", KeyboardKey::LShiftKey),
    ("Right Shift", KeyboardKey::RShiftKey),
    ("Left Control", KeyboardKey::LControlKey),
    ("Right Control", KeyboardKey::RControlKey),
    ("Left Alt", KeyboardKey::LMenu),
    ("Right Alt", KeyboardKey::RMenu),
];

/// A key from either enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SymbolicKey {
    Keyboard(KeyboardKey),
    Controller(ControllerButton),
}

impl SymbolicKey {
    /// Resolve a token against the keyboard names first, then controller names.
    ///
    /// Names shared by both sets (`A`, `Back`, `None`, ...) always resolve to
    /// the keyboard key.
    pub fn resolve(token: &str) -> Option<Self> {
        KeyboardKey::from_name(token)
            .map(Self::Keyboard)
            .or_else(|| ControllerButton::from_name(token).map(Self::Controller))
    }

    /// Canonical spelling of the key
    pub const fn name(self) -> &'static str {
        match self {
            Self::Keyboard(key) => key.name(),
            Self::Controller(button) => button.name(),
        }
    }

    /// Which enumeration the key belongs to
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Keyboard(_) => "keyboard",
            Self::Controller(_) => "controller",
        }
    }

    /// Whether this is the placeholder "no key" entry of either set
    pub const fn is_none(self) -> bool {
        matches!(
            self,
            Self::Keyboard(KeyboardKey::None) | Self::Controller(ControllerButton::None)
        )
    }
}

impl fmt::Display for SymbolicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<KeyboardKey> for SymbolicKey {
    fn from(key: KeyboardKey) -> Self {
        Self::Keyboard(key)
    }
}

impl From<ControllerButton> for SymbolicKey {
    fn from(button: ControllerButton) -> Self {
        Self::Controller(button)
    }
}
