//! Keyboard shortcut strings

/// Modifier keys held during a key-down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub command: bool,
    pub control: bool,
    pub option: bool,
    pub shift: bool,
}

impl Modifiers {
    /// Cmd, Ctrl or Opt held. Shift alone is plain typing.
    #[must_use]
    pub const fn is_chord(&self) -> bool {
        self.command || self.control || self.option
    }
}

/// Build the `Cmd+Ctrl+Opt+Shift+KEY` string for a key-down.
///
/// Returns `None` for plain typing (no Cmd/Ctrl/Opt). `chars` is the
/// key's characters ignoring modifiers; it is upper-cased.
///
/// # Examples
///
/// ```
/// use stepcast_core::capture::{build_key_combo, Modifiers};
///
/// let mods = Modifiers { command: true, shift: true, ..Modifiers::default() };
/// assert_eq!(build_key_combo(mods, Some("z")).as_deref(), Some("Cmd+Shift+Z"));
/// assert_eq!(build_key_combo(Modifiers::default(), Some("a")), None);
/// ```
#[must_use]
pub fn build_key_combo(modifiers: Modifiers, chars: Option<&str>) -> Option<String> {
    if !modifiers.is_chord() {
        return None;
    }

    let mut parts: Vec<String> = Vec::with_capacity(5);
    if modifiers.command {
        parts.push("Cmd".to_string());
    }
    if modifiers.control {
        parts.push("Ctrl".to_string());
    }
    if modifiers.option {
        parts.push("Opt".to_string());
    }
    if modifiers.shift {
        parts.push("Shift".to_string());
    }
    if let Some(chars) = chars {
        parts.push(chars.to_uppercase());
    }

    Some(parts.join("+"))
}
