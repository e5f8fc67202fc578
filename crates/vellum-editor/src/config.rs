//! The editor configuration record.
//!
//! `EditorConfig` is the boundary contract between a host application and
//! the editor view component. The two most critical fields are `state` and
//! `on_change`: the state defines the entire content and selection of the
//! editor, and every interaction hands a new state value back to the host
//! through `on_change`. The host must feed that value back in for the change
//! to become visible (controlled-component pattern).
//!
//! Every other field except `block_render_map` is optional; absence means
//! "use the editor's default behavior for that concern". The record carries
//! no validation of field values - malformed contents are the consuming
//! component's problem. Only presence of the three required fields is
//! checked, at build time.

use std::fmt;

use smol_str::SmolStr;
use vellum_editor_core::{
    BlockType, ContentBlock, DataTransfer, DragType, EditorCommand, EditorState, FileBlob,
    InlineStyleSet, KeyEvent, SelectionState,
};

use crate::handled::Handled;
use crate::render_map::BlockRenderMap;
use crate::styles::{CustomStyleMap, StyleDescriptor};

/// Forced paragraph alignment, irrespective of detected script direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAlignment {
    Left,
    Center,
    Right,
}

impl TextAlignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Host-substituted renderer for a single block, returned by the block
/// renderer selector. `None` from the selector keeps the stock renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRenderOverride {
    /// Name of the host component that renders this block.
    pub component: SmolStr,
    /// Whether the block stays editable under the custom renderer.
    pub editable: bool,
}

impl BlockRenderOverride {
    pub fn new(component: impl Into<SmolStr>) -> Self {
        Self {
            component: component.into(),
            editable: true,
        }
    }

    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }
}

// Hook signatures. Cancelable hooks return `Handled`; observers return
// nothing. State flows out exclusively through `ChangeFn`.
pub type ChangeFn = Box<dyn FnMut(EditorState)>;
pub type BlockRendererFn = Box<dyn Fn(&ContentBlock) -> Option<BlockRenderOverride>>;
pub type BlockStyleFn = Box<dyn Fn(&BlockType) -> Option<SmolStr>>;
pub type KeyBindingFn = Box<dyn Fn(&KeyEvent) -> Option<EditorCommand>>;
pub type CustomStyleFn = Box<dyn Fn(&InlineStyleSet) -> Option<StyleDescriptor>>;
pub type KeyHandlerFn = Box<dyn FnMut(&KeyEvent) -> Handled>;
pub type CommandHandlerFn = Box<dyn FnMut(&EditorCommand) -> Handled>;
pub type TextInputHandlerFn = Box<dyn FnMut(&str) -> Handled>;
pub type PastedTextHandlerFn = Box<dyn FnMut(&str, Option<&str>) -> Handled>;
pub type FilesHandlerFn = Box<dyn FnMut(&[FileBlob]) -> Handled>;
pub type DroppedFilesHandlerFn = Box<dyn FnMut(&SelectionState, &[FileBlob]) -> Handled>;
pub type DropHandlerFn = Box<dyn FnMut(&SelectionState, &DataTransfer, DragType) -> Handled>;
pub type KeyObserverFn = Box<dyn FnMut(&KeyEvent)>;
pub type FocusObserverFn = Box<dyn FnMut()>;

/// Everything a host supplies to the editor view component.
///
/// Build through [`EditorConfig::builder`]. The record is a value object for
/// the duration of one render pass: the editor reads it and calls its hooks,
/// but never rewrites host-visible fields.
pub struct EditorConfig {
    // Controlled state (required).
    pub(crate) state: EditorState,
    pub(crate) on_change: ChangeFn,
    // The one required presentation field: without it the editor cannot
    // render any block.
    pub(crate) block_render_map: BlockRenderMap,

    // Presentation / customization.
    pub(crate) placeholder: Option<SmolStr>,
    pub(crate) text_alignment: Option<TextAlignment>,
    pub(crate) block_renderer_fn: Option<BlockRendererFn>,
    pub(crate) block_style_fn: Option<BlockStyleFn>,
    pub(crate) key_binding_fn: Option<KeyBindingFn>,
    pub(crate) custom_style_map: Option<CustomStyleMap>,
    pub(crate) custom_style_fn: Option<CustomStyleFn>,

    // Behavioral toggles.
    pub(crate) read_only: bool,
    pub(crate) spell_check: bool,
    pub(crate) strip_pasted_styles: bool,

    // Focusable-element passthrough.
    pub(crate) tab_index: Option<i32>,
    pub(crate) aria_active_descendant_id: Option<SmolStr>,
    pub(crate) aria_auto_complete: Option<SmolStr>,
    pub(crate) aria_described_by: Option<SmolStr>,
    pub(crate) aria_expanded: Option<bool>,
    pub(crate) aria_has_popup: Option<bool>,
    pub(crate) aria_label: Option<SmolStr>,
    pub(crate) aria_owns: Option<SmolStr>,
    pub(crate) web_driver_test_id: Option<SmolStr>,

    // Cancelable handlers.
    pub(crate) handle_return: Option<KeyHandlerFn>,
    pub(crate) handle_key_command: Option<CommandHandlerFn>,
    pub(crate) handle_before_input: Option<TextInputHandlerFn>,
    pub(crate) handle_pasted_text: Option<PastedTextHandlerFn>,
    pub(crate) handle_pasted_files: Option<FilesHandlerFn>,
    pub(crate) handle_dropped_files: Option<DroppedFilesHandlerFn>,
    pub(crate) handle_drop: Option<DropHandlerFn>,
    pub(crate) allow_native_insertion: Option<TextInputHandlerFn>,

    // Non-cancelable observers.
    pub(crate) on_escape: Option<KeyObserverFn>,
    pub(crate) on_tab: Option<KeyObserverFn>,
    pub(crate) on_up_arrow: Option<KeyObserverFn>,
    pub(crate) on_down_arrow: Option<KeyObserverFn>,
    pub(crate) on_blur: Option<FocusObserverFn>,
    pub(crate) on_focus: Option<FocusObserverFn>,
}

/// A required field was missing at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("editor state is required")]
    MissingState,
    #[error("change notifier is required")]
    MissingChangeNotifier,
    #[error("block render map is required")]
    MissingBlockRenderMap,
}

impl EditorConfig {
    pub fn builder() -> EditorConfigBuilder {
        EditorConfigBuilder::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Supply the next state value. This is the host side of the controlled
    /// loop: state handed out through `on_change` only takes effect once fed
    /// back here.
    pub fn set_state(&mut self, state: EditorState) {
        self.state = state;
    }

    pub fn block_render_map(&self) -> &BlockRenderMap {
        &self.block_render_map
    }

    /// The placeholder, but only while the document is empty.
    pub fn visible_placeholder(&self) -> Option<&str> {
        match &self.placeholder {
            Some(text) if self.state.is_empty() => Some(text),
            _ => None,
        }
    }

    pub fn text_alignment(&self) -> Option<TextAlignment> {
        self.text_alignment
    }

    pub fn read_only(&self) -> bool {
        self.read_only
    }

    pub fn spell_check(&self) -> bool {
        self.spell_check
    }

    pub fn strip_pasted_styles(&self) -> bool {
        self.strip_pasted_styles
    }

    pub fn tab_index(&self) -> Option<i32> {
        self.tab_index
    }

    pub fn aria_active_descendant_id(&self) -> Option<&str> {
        self.aria_active_descendant_id.as_deref()
    }

    pub fn aria_auto_complete(&self) -> Option<&str> {
        self.aria_auto_complete.as_deref()
    }

    pub fn aria_described_by(&self) -> Option<&str> {
        self.aria_described_by.as_deref()
    }

    pub fn aria_expanded(&self) -> Option<bool> {
        self.aria_expanded
    }

    pub fn aria_has_popup(&self) -> Option<bool> {
        self.aria_has_popup
    }

    pub fn aria_label(&self) -> Option<&str> {
        self.aria_label.as_deref()
    }

    pub fn aria_owns(&self) -> Option<&str> {
        self.aria_owns.as_deref()
    }

    pub fn web_driver_test_id(&self) -> Option<&str> {
        self.web_driver_test_id.as_deref()
    }
}

impl fmt::Debug for EditorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn hook<T>(slot: &Option<T>) -> bool {
            slot.is_some()
        }

        f.debug_struct("EditorConfig")
            .field("state", &self.state)
            .field("block_render_map", &self.block_render_map)
            .field("placeholder", &self.placeholder)
            .field("text_alignment", &self.text_alignment)
            .field("read_only", &self.read_only)
            .field("spell_check", &self.spell_check)
            .field("strip_pasted_styles", &self.strip_pasted_styles)
            .field("tab_index", &self.tab_index)
            .field("block_renderer_fn", &hook(&self.block_renderer_fn))
            .field("block_style_fn", &hook(&self.block_style_fn))
            .field("key_binding_fn", &hook(&self.key_binding_fn))
            .field("custom_style_map", &self.custom_style_map)
            .field("custom_style_fn", &hook(&self.custom_style_fn))
            .field("handle_return", &hook(&self.handle_return))
            .field("handle_key_command", &hook(&self.handle_key_command))
            .field("handle_before_input", &hook(&self.handle_before_input))
            .field("handle_pasted_text", &hook(&self.handle_pasted_text))
            .field("handle_pasted_files", &hook(&self.handle_pasted_files))
            .field("handle_dropped_files", &hook(&self.handle_dropped_files))
            .field("handle_drop", &hook(&self.handle_drop))
            .field("allow_native_insertion", &hook(&self.allow_native_insertion))
            .field("on_escape", &hook(&self.on_escape))
            .field("on_tab", &hook(&self.on_tab))
            .field("on_up_arrow", &hook(&self.on_up_arrow))
            .field("on_down_arrow", &hook(&self.on_down_arrow))
            .field("on_blur", &hook(&self.on_blur))
            .field("on_focus", &hook(&self.on_focus))
            .finish_non_exhaustive()
    }
}

/// Builder for [`EditorConfig`]. `build` fails when a required field is
/// missing; everything else falls back to the documented default.
#[derive(Default)]
pub struct EditorConfigBuilder {
    state: Option<EditorState>,
    on_change: Option<ChangeFn>,
    block_render_map: Option<BlockRenderMap>,

    placeholder: Option<SmolStr>,
    text_alignment: Option<TextAlignment>,
    block_renderer_fn: Option<BlockRendererFn>,
    block_style_fn: Option<BlockStyleFn>,
    key_binding_fn: Option<KeyBindingFn>,
    custom_style_map: Option<CustomStyleMap>,
    custom_style_fn: Option<CustomStyleFn>,

    read_only: bool,
    spell_check: bool,
    strip_pasted_styles: bool,

    tab_index: Option<i32>,
    aria_active_descendant_id: Option<SmolStr>,
    aria_auto_complete: Option<SmolStr>,
    aria_described_by: Option<SmolStr>,
    aria_expanded: Option<bool>,
    aria_has_popup: Option<bool>,
    aria_label: Option<SmolStr>,
    aria_owns: Option<SmolStr>,
    web_driver_test_id: Option<SmolStr>,

    handle_return: Option<KeyHandlerFn>,
    handle_key_command: Option<CommandHandlerFn>,
    handle_before_input: Option<TextInputHandlerFn>,
    handle_pasted_text: Option<PastedTextHandlerFn>,
    handle_pasted_files: Option<FilesHandlerFn>,
    handle_dropped_files: Option<DroppedFilesHandlerFn>,
    handle_drop: Option<DropHandlerFn>,
    allow_native_insertion: Option<TextInputHandlerFn>,

    on_escape: Option<KeyObserverFn>,
    on_tab: Option<KeyObserverFn>,
    on_up_arrow: Option<KeyObserverFn>,
    on_down_arrow: Option<KeyObserverFn>,
    on_blur: Option<FocusObserverFn>,
    on_focus: Option<FocusObserverFn>,
}

impl EditorConfigBuilder {
    pub fn state(mut self, state: EditorState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn on_change(mut self, f: impl FnMut(EditorState) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn block_render_map(mut self, map: BlockRenderMap) -> Self {
        self.block_render_map = Some(map);
        self
    }

    pub fn placeholder(mut self, text: impl Into<SmolStr>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn text_alignment(mut self, alignment: TextAlignment) -> Self {
        self.text_alignment = Some(alignment);
        self
    }

    pub fn block_renderer_fn(
        mut self,
        f: impl Fn(&ContentBlock) -> Option<BlockRenderOverride> + 'static,
    ) -> Self {
        self.block_renderer_fn = Some(Box::new(f));
        self
    }

    pub fn block_style_fn(mut self, f: impl Fn(&BlockType) -> Option<SmolStr> + 'static) -> Self {
        self.block_style_fn = Some(Box::new(f));
        self
    }

    pub fn key_binding_fn(
        mut self,
        f: impl Fn(&KeyEvent) -> Option<EditorCommand> + 'static,
    ) -> Self {
        self.key_binding_fn = Some(Box::new(f));
        self
    }

    pub fn custom_style_map(mut self, map: CustomStyleMap) -> Self {
        self.custom_style_map = Some(map);
        self
    }

    pub fn custom_style_fn(
        mut self,
        f: impl Fn(&InlineStyleSet) -> Option<StyleDescriptor> + 'static,
    ) -> Self {
        self.custom_style_fn = Some(Box::new(f));
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn spell_check(mut self, spell_check: bool) -> Self {
        self.spell_check = spell_check;
        self
    }

    pub fn strip_pasted_styles(mut self, strip: bool) -> Self {
        self.strip_pasted_styles = strip;
        self
    }

    pub fn tab_index(mut self, index: i32) -> Self {
        self.tab_index = Some(index);
        self
    }

    pub fn aria_active_descendant_id(mut self, id: impl Into<SmolStr>) -> Self {
        self.aria_active_descendant_id = Some(id.into());
        self
    }

    pub fn aria_auto_complete(mut self, value: impl Into<SmolStr>) -> Self {
        self.aria_auto_complete = Some(value.into());
        self
    }

    pub fn aria_described_by(mut self, id: impl Into<SmolStr>) -> Self {
        self.aria_described_by = Some(id.into());
        self
    }

    pub fn aria_expanded(mut self, expanded: bool) -> Self {
        self.aria_expanded = Some(expanded);
        self
    }

    pub fn aria_has_popup(mut self, has_popup: bool) -> Self {
        self.aria_has_popup = Some(has_popup);
        self
    }

    pub fn aria_label(mut self, label: impl Into<SmolStr>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn aria_owns(mut self, id: impl Into<SmolStr>) -> Self {
        self.aria_owns = Some(id.into());
        self
    }

    pub fn web_driver_test_id(mut self, id: impl Into<SmolStr>) -> Self {
        self.web_driver_test_id = Some(id.into());
        self
    }

    pub fn handle_return(mut self, f: impl FnMut(&KeyEvent) -> Handled + 'static) -> Self {
        self.handle_return = Some(Box::new(f));
        self
    }

    pub fn handle_key_command(
        mut self,
        f: impl FnMut(&EditorCommand) -> Handled + 'static,
    ) -> Self {
        self.handle_key_command = Some(Box::new(f));
        self
    }

    pub fn handle_before_input(mut self, f: impl FnMut(&str) -> Handled + 'static) -> Self {
        self.handle_before_input = Some(Box::new(f));
        self
    }

    pub fn handle_pasted_text(
        mut self,
        f: impl FnMut(&str, Option<&str>) -> Handled + 'static,
    ) -> Self {
        self.handle_pasted_text = Some(Box::new(f));
        self
    }

    pub fn handle_pasted_files(mut self, f: impl FnMut(&[FileBlob]) -> Handled + 'static) -> Self {
        self.handle_pasted_files = Some(Box::new(f));
        self
    }

    pub fn handle_dropped_files(
        mut self,
        f: impl FnMut(&SelectionState, &[FileBlob]) -> Handled + 'static,
    ) -> Self {
        self.handle_dropped_files = Some(Box::new(f));
        self
    }

    pub fn handle_drop(
        mut self,
        f: impl FnMut(&SelectionState, &DataTransfer, DragType) -> Handled + 'static,
    ) -> Self {
        self.handle_drop = Some(Box::new(f));
        self
    }

    pub fn allow_native_insertion(mut self, f: impl FnMut(&str) -> Handled + 'static) -> Self {
        self.allow_native_insertion = Some(Box::new(f));
        self
    }

    pub fn on_escape(mut self, f: impl FnMut(&KeyEvent) + 'static) -> Self {
        self.on_escape = Some(Box::new(f));
        self
    }

    pub fn on_tab(mut self, f: impl FnMut(&KeyEvent) + 'static) -> Self {
        self.on_tab = Some(Box::new(f));
        self
    }

    pub fn on_up_arrow(mut self, f: impl FnMut(&KeyEvent) + 'static) -> Self {
        self.on_up_arrow = Some(Box::new(f));
        self
    }

    pub fn on_down_arrow(mut self, f: impl FnMut(&KeyEvent) + 'static) -> Self {
        self.on_down_arrow = Some(Box::new(f));
        self
    }

    pub fn on_blur(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_blur = Some(Box::new(f));
        self
    }

    pub fn on_focus(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_focus = Some(Box::new(f));
        self
    }

    /// Validate required fields and produce the record.
    pub fn build(self) -> Result<EditorConfig, ConfigError> {
        let state = self.state.ok_or(ConfigError::MissingState)?;
        let on_change = self.on_change.ok_or(ConfigError::MissingChangeNotifier)?;
        let block_render_map = self
            .block_render_map
            .ok_or(ConfigError::MissingBlockRenderMap)?;

        Ok(EditorConfig {
            state,
            on_change,
            block_render_map,
            placeholder: self.placeholder,
            text_alignment: self.text_alignment,
            block_renderer_fn: self.block_renderer_fn,
            block_style_fn: self.block_style_fn,
            key_binding_fn: self.key_binding_fn,
            custom_style_map: self.custom_style_map,
            custom_style_fn: self.custom_style_fn,
            read_only: self.read_only,
            spell_check: self.spell_check,
            strip_pasted_styles: self.strip_pasted_styles,
            tab_index: self.tab_index,
            aria_active_descendant_id: self.aria_active_descendant_id,
            aria_auto_complete: self.aria_auto_complete,
            aria_described_by: self.aria_described_by,
            aria_expanded: self.aria_expanded,
            aria_has_popup: self.aria_has_popup,
            aria_label: self.aria_label,
            aria_owns: self.aria_owns,
            web_driver_test_id: self.web_driver_test_id,
            handle_return: self.handle_return,
            handle_key_command: self.handle_key_command,
            handle_before_input: self.handle_before_input,
            handle_pasted_text: self.handle_pasted_text,
            handle_pasted_files: self.handle_pasted_files,
            handle_dropped_files: self.handle_dropped_files,
            handle_drop: self.handle_drop,
            allow_native_insertion: self.allow_native_insertion,
            on_escape: self.on_escape,
            on_tab: self.on_tab,
            on_up_arrow: self.on_up_arrow,
            on_down_arrow: self.on_down_arrow,
            on_blur: self.on_blur,
            on_focus: self.on_focus,
        })
    }
}
