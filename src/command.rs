//! Command registry contract.
//!
//! Commands are owned and executed by the embedding application; the
//! widget only asks whether an id is enabled and fires activations with
//! a payload. Execution is fire-and-forget: the widget clears its draft
//! before any asynchronous command work completes.

use serde::Serialize;

use crate::model::CommentThread;

/// Payload handed to a command on action activation.
#[derive(Debug, Clone, Serialize)]
pub struct CommandArgs {
    /// Snapshot of the thread the action was activated on.
    pub thread: CommentThread,
    /// The submitted draft text.
    pub text: String,
}

/// External command executor consumed by the widget.
pub trait CommandRegistry {
    /// Whether the command is currently runnable; disabled commands are
    /// rendered but never invoked.
    fn is_enabled(&self, command_id: &str) -> bool;

    fn execute(&mut self, command_id: &str, args: CommandArgs);
}
