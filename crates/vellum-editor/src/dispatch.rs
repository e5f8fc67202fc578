//! Event dispatch through the configuration record.
//!
//! The editor engine consults the record here before applying its own
//! behavior. Each cancelable category takes the engine's default behavior as
//! a closure: a hook returning [`Handled::Yes`] suppresses it, `Handled::No`
//! or an absent hook runs it exactly once. The return value reports whether
//! the host consumed the event.
//!
//! Key events flow through one fixed pipeline ([`EditorConfig::dispatch_key`]):
//! the return-key hook first, then key-to-command mapping, then the command
//! hook, then the engine's command execution. Only one handler category
//! applies per event; the first stage that reports `Handled::Yes` ends the
//! dispatch.
//!
//! Observers fire after default handling and have no return contract.

use tracing::trace;
use vellum_editor_core::{
    DataTransfer, DragType, EditorCommand, EditorState, FileBlob, Key, KeyEvent, SelectionState,
    default_key_binding,
};

use crate::config::EditorConfig;
use crate::handled::Handled;

/// Run one cancelable hook outcome against the engine default.
fn settle(hook: &'static str, outcome: Option<Handled>, default: impl FnOnce()) -> Handled {
    match outcome {
        Some(Handled::Yes) => {
            trace!(hook, "host handled event, default suppressed");
            Handled::Yes
        }
        Some(Handled::No) => {
            trace!(hook, "host declined, applying default");
            default();
            Handled::No
        }
        None => {
            default();
            Handled::No
        }
    }
}

impl EditorConfig {
    /// Hand a new state value to the host. The value only becomes visible
    /// once the host feeds it back through [`EditorConfig::set_state`].
    pub fn notify_change(&mut self, next: EditorState) {
        trace!("propagating state change to host");
        (self.on_change)(next);
    }

    /// Map a key event to a command. A host key-binding function replaces
    /// the default binding entirely: its `None` means "no command", not
    /// "fall back".
    pub fn map_key(&self, event: &KeyEvent) -> Option<EditorCommand> {
        match &self.key_binding_fn {
            Some(f) => f(event),
            None => default_key_binding(event),
        }
    }

    pub fn dispatch_return(&mut self, event: &KeyEvent, default: impl FnOnce()) -> Handled {
        let outcome = self.handle_return.as_mut().map(|h| h(event));
        settle("handle_return", outcome, default)
    }

    pub fn dispatch_key_command(
        &mut self,
        command: &EditorCommand,
        default: impl FnOnce(),
    ) -> Handled {
        let outcome = self.handle_key_command.as_mut().map(|h| h(command));
        settle("handle_key_command", outcome, default)
    }

    /// Consult the pre-insertion hook for text about to be inserted.
    pub fn dispatch_before_input(&mut self, chars: &str, default: impl FnOnce()) -> Handled {
        let outcome = self.handle_before_input.as_mut().map(|h| h(chars));
        settle("handle_before_input", outcome, default)
    }

    pub fn dispatch_pasted_text(
        &mut self,
        text: &str,
        html: Option<&str>,
        default: impl FnOnce(),
    ) -> Handled {
        let outcome = self.handle_pasted_text.as_mut().map(|h| h(text, html));
        settle("handle_pasted_text", outcome, default)
    }

    pub fn dispatch_pasted_files(&mut self, files: &[FileBlob], default: impl FnOnce()) -> Handled {
        let outcome = self.handle_pasted_files.as_mut().map(|h| h(files));
        settle("handle_pasted_files", outcome, default)
    }

    pub fn dispatch_dropped_files(
        &mut self,
        selection: &SelectionState,
        files: &[FileBlob],
        default: impl FnOnce(),
    ) -> Handled {
        let outcome = self
            .handle_dropped_files
            .as_mut()
            .map(|h| h(selection, files));
        settle("handle_dropped_files", outcome, default)
    }

    pub fn dispatch_drop(
        &mut self,
        selection: &SelectionState,
        data: &DataTransfer,
        drag_type: DragType,
        default: impl FnOnce(),
    ) -> Handled {
        let outcome = self
            .handle_drop
            .as_mut()
            .map(|h| h(selection, data, drag_type));
        settle("handle_drop", outcome, default)
    }

    /// Consult the native-insertion hook before letting the platform insert
    /// text without a round trip through the engine.
    pub fn dispatch_native_insertion(&mut self, chars: &str, default: impl FnOnce()) -> Handled {
        let outcome = self.allow_native_insertion.as_mut().map(|h| h(chars));
        settle("allow_native_insertion", outcome, default)
    }

    /// The fixed key pipeline. `default` receives the mapped command when no
    /// hook consumed the event; unmapped keys run no default at all.
    pub fn dispatch_key(
        &mut self,
        event: &KeyEvent,
        default: impl FnOnce(&EditorCommand),
    ) -> Handled {
        if event.key == Key::Enter {
            if let Some(h) = self.handle_return.as_mut() {
                if h(event).is_handled() {
                    trace!("host handled return key, default suppressed");
                    return Handled::Yes;
                }
            }
        }

        let Some(command) = self.map_key(event) else {
            trace!(key = ?event.key, "key maps to no command");
            return Handled::No;
        };

        let outcome = self.handle_key_command.as_mut().map(|h| h(&command));
        match outcome {
            Some(Handled::Yes) => {
                trace!(command = %command, "host handled command, default suppressed");
                Handled::Yes
            }
            Some(Handled::No) | None => {
                trace!(command = %command, "applying default command behavior");
                default(&command);
                Handled::No
            }
        }
    }

    // Non-cancelable observers. Invoked after default handling; there is
    // nothing to return.

    pub fn notify_escape(&mut self, event: &KeyEvent) {
        if let Some(f) = self.on_escape.as_mut() {
            f(event);
        }
    }

    pub fn notify_tab(&mut self, event: &KeyEvent) {
        if let Some(f) = self.on_tab.as_mut() {
            f(event);
        }
    }

    pub fn notify_up_arrow(&mut self, event: &KeyEvent) {
        if let Some(f) = self.on_up_arrow.as_mut() {
            f(event);
        }
    }

    pub fn notify_down_arrow(&mut self, event: &KeyEvent) {
        if let Some(f) = self.on_down_arrow.as_mut() {
            f(event);
        }
    }

    pub fn notify_blur(&mut self) {
        if let Some(f) = self.on_blur.as_mut() {
            f();
        }
    }

    pub fn notify_focus(&mut self) {
        if let Some(f) = self.on_focus.as_mut() {
            f();
        }
    }
}
