//! vellum-editor: the configuration contract for the editor view component.
//!
//! A host application builds an [`EditorConfig`] and hands it to the editor
//! view. The record carries:
//! - the controlled state pair (`state` + `on_change`) - the editor never
//!   owns state; every interaction hands a new [`EditorState`] back to the
//!   host, which must feed it back in to make the change visible
//! - cancelable behavior hooks returning [`Handled`] - `Yes` suppresses the
//!   editor's default behavior for that event, `No` or absence applies it
//! - fire-and-forget observers for escape/tab/arrow/focus/blur
//! - presentation customization: the required [`BlockRenderMap`], the
//!   optional style map/function pair, per-block renderer and class hooks,
//!   and accessibility passthrough attributes
//!
//! The dispatch methods in [`dispatch`] implement the suppression semantics;
//! the consuming engine supplies its default behavior as closures.
//!
//! ```
//! use vellum_editor::{BlockRenderMap, EditorConfig, Handled};
//! use vellum_editor_core::EditorState;
//!
//! let config = EditorConfig::builder()
//!     .state(EditorState::empty())
//!     .on_change(|next| {
//!         // Hand `next` back via `set_state` on the following render pass.
//!         let _ = next;
//!     })
//!     .block_render_map(BlockRenderMap::default_map())
//!     .placeholder("Tell your story")
//!     .handle_return(|_| Handled::No)
//!     .build()?;
//! assert!(!config.read_only());
//! # Ok::<(), vellum_editor::ConfigError>(())
//! ```

pub mod config;
pub mod dispatch;
pub mod handled;
pub mod render_map;
pub mod styles;

pub use config::{
    BlockRenderOverride, ConfigError, EditorConfig, EditorConfigBuilder, TextAlignment,
};
pub use handled::Handled;
pub use render_map::{BlockRenderConfig, BlockRenderMap, BlockRenderer};
pub use styles::{CustomStyleMap, StyleDescriptor};

pub use vellum_editor_core::EditorState;
