//! Abstract editing commands and the default key binding.
//!
//! A key-to-command mapper translates low-level key events into these
//! commands; the cancelable command handler then gets a chance to intercept
//! each one before the editor applies its default behavior.

use smol_str::SmolStr;
use tracing::trace;

use crate::input::{Key, KeyEvent};

/// Semantic editing commands, decoupled from how they are triggered.
///
/// `Custom` carries host-defined command names produced by a host key-binding
/// function and consumed by its own command handler.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EditorCommand {
    // === Deletion ===
    Backspace,
    BackspaceWord,
    BackspaceToStartOfLine,
    Delete,
    DeleteWord,
    DeleteToEndOfBlock,

    // === Inline formatting ===
    Bold,
    Italic,
    Underline,
    Code,
    Strikethrough,

    // === Structure ===
    SplitBlock,

    // === History ===
    Undo,
    Redo,

    // === Host-defined ===
    Custom(SmolStr),
}

impl EditorCommand {
    /// The wire name of this command.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Backspace => "backspace",
            Self::BackspaceWord => "backspace-word",
            Self::BackspaceToStartOfLine => "backspace-to-start-of-line",
            Self::Delete => "delete",
            Self::DeleteWord => "delete-word",
            Self::DeleteToEndOfBlock => "delete-to-end-of-block",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Code => "code",
            Self::Strikethrough => "strikethrough",
            Self::SplitBlock => "split-block",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::Custom(name) => name,
        }
    }
}

impl From<&str> for EditorCommand {
    fn from(name: &str) -> Self {
        match name {
            "backspace" => Self::Backspace,
            "backspace-word" => Self::BackspaceWord,
            "backspace-to-start-of-line" => Self::BackspaceToStartOfLine,
            "delete" => Self::Delete,
            "delete-word" => Self::DeleteWord,
            "delete-to-end-of-block" => Self::DeleteToEndOfBlock,
            "bold" => Self::Bold,
            "italic" => Self::Italic,
            "underline" => Self::Underline,
            "code" => Self::Code,
            "strikethrough" => Self::Strikethrough,
            "split-block" => Self::SplitBlock,
            "undo" => Self::Undo,
            "redo" => Self::Redo,
            other => Self::Custom(SmolStr::new(other)),
        }
    }
}

impl std::fmt::Display for EditorCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The key binding the editor falls back to when the host supplies no
/// key-to-command mapper.
///
/// Either Ctrl or Meta counts as the primary command modifier so the mapping
/// works on every platform without threading platform detection through.
pub fn default_key_binding(event: &KeyEvent) -> Option<EditorCommand> {
    let mods = event.modifiers;

    if mods.has_primary() {
        if let Key::Character(ch) = &event.key {
            return match ch.as_str() {
                "b" => Some(EditorCommand::Bold),
                "i" => Some(EditorCommand::Italic),
                "u" => Some(EditorCommand::Underline),
                "j" => Some(EditorCommand::Code),
                "z" if mods.shift => Some(EditorCommand::Redo),
                "z" => Some(EditorCommand::Undo),
                "y" => Some(EditorCommand::Redo),
                _ => None,
            };
        }
        // Primary+Backspace deletes to start of line, primary+Delete to end.
        return match event.key {
            Key::Backspace => Some(EditorCommand::BackspaceToStartOfLine),
            Key::Delete => Some(EditorCommand::DeleteToEndOfBlock),
            _ => None,
        };
    }

    match event.key {
        Key::Backspace if mods.alt => Some(EditorCommand::BackspaceWord),
        Key::Backspace => Some(EditorCommand::Backspace),
        Key::Delete if mods.alt => Some(EditorCommand::DeleteWord),
        Key::Delete => Some(EditorCommand::Delete),
        Key::Enter => Some(EditorCommand::SplitBlock),
        _ => {
            trace!(key = ?event.key, "no default key binding");
            None
        }
    }
}
