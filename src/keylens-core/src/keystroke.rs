//! Keystroke data model: modifier combinations, keystrokes, and shortcuts.
//!
//! A [`Keystroke`] pairs a [`ModifierCombo`] with a [`KeyName`] and is the
//! index key of both inverted maps built in [`crate::invert`]. A
//! [`Shortcut`] is either a keyboard shortcut (one keystroke, or a
//! two-keystroke chord) or a mouse shortcut; only keyboard shortcuts
//! participate in the grid and ledger views.

use std::fmt;
use std::str::FromStr;

/// Symbolic name of a physical key (`"A"`, `"F5"`, `"ENTER"`, `"BACK_SPACE"`).
///
/// Normalized to upper case so lookups against the key catalog and the
/// inverted indexes are case-insensitive at the edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyName(String);

impl KeyName {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KeyName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A combination of zero or more of the four modifier keys.
///
/// Displayed space-joined in the fixed canonical order
/// `shift ctrl meta alt`; the empty combo displays as nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModifierCombo {
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
}

impl ModifierCombo {
    pub const NONE: Self = Self::new(false, false, false, false);

    pub const fn new(shift: bool, ctrl: bool, meta: bool, alt: bool) -> Self {
        Self {
            shift,
            ctrl,
            meta,
            alt,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Modifier tokens in canonical order.
    pub fn tokens(&self) -> Vec<&'static str> {
        let mut tokens = Vec::new();
        if self.shift {
            tokens.push("shift");
        }
        if self.ctrl {
            tokens.push("ctrl");
        }
        if self.meta {
            tokens.push("meta");
        }
        if self.alt {
            tokens.push("alt");
        }
        tokens
    }

    fn with_token(mut self, token: &str) -> Result<Self, ShortcutParseError> {
        let flag = match token {
            "shift" => &mut self.shift,
            "ctrl" => &mut self.ctrl,
            "meta" => &mut self.meta,
            "alt" => &mut self.alt,
            other => return Err(ShortcutParseError::UnknownModifier(other.to_string())),
        };
        if *flag {
            return Err(ShortcutParseError::DuplicateModifier(token.to_string()));
        }
        *flag = true;
        Ok(self)
    }
}

impl fmt::Display for ModifierCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens().join(" "))
    }
}

/// One physical key press combined with a modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub combo: ModifierCombo,
    pub key: KeyName,
}

impl Keystroke {
    pub fn new(combo: ModifierCombo, key: impl Into<KeyName>) -> Self {
        Self {
            combo,
            key: key.into(),
        }
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.combo.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{} {}", self.combo, self.key)
        }
    }
}

impl FromStr for Keystroke {
    type Err = ShortcutParseError;

    /// Parses `"[modifiers...] KEY"`, e.g. `"ctrl C"`, `"shift alt F5"`, `"ENTER"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens: Vec<&str> = s.split_whitespace().collect();
        let key = tokens
            .pop()
            .ok_or_else(|| ShortcutParseError::Empty(s.to_string()))?;
        let mut combo = ModifierCombo::NONE;
        for token in tokens {
            combo = combo.with_token(&token.to_ascii_lowercase())?;
        }
        Ok(Keystroke::new(combo, key))
    }
}

/// A keyboard shortcut: a first keystroke, optionally chorded with a second.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyboardShortcut {
    pub first: Keystroke,
    pub second: Option<Keystroke>,
}

impl KeyboardShortcut {
    pub fn single(first: Keystroke) -> Self {
        Self {
            first,
            second: None,
        }
    }

    pub fn chord(first: Keystroke, second: Keystroke) -> Self {
        Self {
            first,
            second: Some(second),
        }
    }
}

impl fmt::Display for KeyboardShortcut {
    /// Both strokes space-joined: `"ctrl C"`, `"ctrl B ctrl B"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        if let Some(second) = &self.second {
            write!(f, " {second}")?;
        }
        Ok(())
    }
}

/// A mouse shortcut. Carried through parsing for completeness; the
/// grid/ledger pipeline skips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseShortcut {
    pub button: u8,
    pub clicks: u8,
}

impl fmt::Display for MouseShortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mouse button{}", self.button)?;
        if self.clicks > 1 {
            write!(f, " x{}", self.clicks)?;
        }
        Ok(())
    }
}

/// A shortcut assigned to an action.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Shortcut {
    Keyboard(KeyboardShortcut),
    Mouse(MouseShortcut),
}

impl Shortcut {
    pub fn keyboard(&self) -> Option<&KeyboardShortcut> {
        match self {
            Shortcut::Keyboard(keyboard) => Some(keyboard),
            Shortcut::Mouse(_) => None,
        }
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shortcut::Keyboard(keyboard) => keyboard.fmt(f),
            Shortcut::Mouse(mouse) => mouse.fmt(f),
        }
    }
}

impl FromStr for Shortcut {
    type Err = ShortcutParseError;

    /// Parses the textual shortcut forms used in keymap documents:
    ///
    /// - `"ctrl C"` — single keystroke
    /// - `"ctrl B, ctrl B"` — two-stroke chord (strokes separated by `,`)
    /// - `"mouse button1"` / `"mouse button1 x2"` — mouse shortcut
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(rest) = trimmed.strip_prefix("mouse ") {
            return parse_mouse(trimmed, rest);
        }

        let strokes: Vec<&str> = trimmed.split(',').collect();
        match strokes.as_slice() {
            [single] => Ok(Shortcut::Keyboard(KeyboardShortcut::single(
                single.parse()?,
            ))),
            [first, second] => Ok(Shortcut::Keyboard(KeyboardShortcut::chord(
                first.parse()?,
                second.parse()?,
            ))),
            _ => Err(ShortcutParseError::TooManyStrokes(trimmed.to_string())),
        }
    }
}

fn parse_mouse(full: &str, rest: &str) -> Result<Shortcut, ShortcutParseError> {
    let mut button = None;
    let mut clicks = 1u8;
    for token in rest.split_whitespace() {
        if let Some(n) = token.strip_prefix("button") {
            button = Some(
                n.parse()
                    .map_err(|_| ShortcutParseError::BadMouseShortcut(full.to_string()))?,
            );
        } else if let Some(n) = token.strip_prefix('x') {
            clicks = n
                .parse()
                .map_err(|_| ShortcutParseError::BadMouseShortcut(full.to_string()))?;
        } else {
            return Err(ShortcutParseError::BadMouseShortcut(full.to_string()));
        }
    }
    let button = button.ok_or_else(|| ShortcutParseError::BadMouseShortcut(full.to_string()))?;
    Ok(Shortcut::Mouse(MouseShortcut { button, clicks }))
}

/// Errors produced while parsing shortcut text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortcutParseError {
    #[error("empty keystroke in {0:?}")]
    Empty(String),
    #[error("unknown modifier token {0:?}")]
    UnknownModifier(String),
    #[error("modifier token {0:?} repeated")]
    DuplicateModifier(String),
    #[error("shortcut {0:?} has more than two keystrokes")]
    TooManyStrokes(String),
    #[error("malformed mouse shortcut {0:?}")]
    BadMouseShortcut(String),
}
