//! vellum-editor-core: the content and input model for the editor contract.
//!
//! This crate provides:
//! - `ContentBlock` / `BlockType` - structural units of editor content
//! - `EditorState` / `SelectionState` - the host-owned, immutable state value
//! - `Key`, `Modifiers`, `KeyEvent` - platform-agnostic input representation
//! - `EditorCommand` - abstract editing commands and the default key binding
//! - `InlineStyle` / `InlineStyleSet` - named character-level styles
//! - `DataTransfer`, `FileBlob`, `DragType` - paste and drop payloads
//!
//! Everything here is framework-agnostic. The view-boundary contract that
//! consumes these types lives in `vellum-editor`.

pub mod block;
pub mod command;
pub mod input;
pub mod state;
pub mod style;
pub mod transfer;

pub use block::{BlockType, ContentBlock};
pub use command::{EditorCommand, default_key_binding};
pub use input::{Key, KeyEvent, Modifiers};
pub use smol_str::SmolStr;
pub use state::{EditorState, Position, SelectionState};
pub use style::{InlineStyle, InlineStyleSet};
pub use transfer::{DataTransfer, DragType, FileBlob};
