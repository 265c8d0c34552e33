//! Message types for the widget's transition function.

use crate::context::ContextKeyValue;
use crate::model::{CollapsibleState, CommentThread};

/// Every event the widget reacts to: routed pointer gestures, external
/// store notifications, draft keystrokes, and action activations.
#[derive(Debug, Clone)]
pub enum Message {
    // === Routed pointer gestures ===
    /// Expand a collapsed thread at the clicked gutter line.
    OpenThread { line: u32 },
    /// Hide the overlay of an expanded thread (never deletes).
    CloseThread,
    /// Flip expand/collapse at the clicked thread decoration.
    ToggleExpand { line: u32 },

    // === Header ===
    /// Collapse requested from the header action; deletes the thread
    /// when it holds no comments.
    Collapse,

    // === External store notifications ===
    /// The store changed the thread's collapsible state.
    CollapsibleStateChanged(Option<CollapsibleState>),
    /// The store replaced the thread's data (comments, label, range).
    ThreadUpdated(CommentThread),
    /// An externally-owned context key changed value.
    ContextKeyChanged {
        key: String,
        value: ContextKeyValue,
    },

    // === Draft input ===
    /// Append text at the draft cursor (keystroke or paste).
    DraftInput(String),
    DraftBackspace,
    DraftNewline,
    DraftCursorUp,
    DraftCursorDown,
    DraftCursorLeft,
    DraftCursorRight,
    DraftHome,
    DraftEnd,
    DraftWordLeft,
    DraftWordRight,
    /// Delete the word before the cursor.
    DraftDeleteWord,
    /// Clear from cursor to start of line.
    DraftClearLine,

    // === Actions ===
    /// A visible action-bar button was clicked.
    ActivateAction { node_id: String },

    /// No-op (ignored event).
    Noop,
}
