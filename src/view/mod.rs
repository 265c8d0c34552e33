//! View derivation.
//!
//! Pure projection of {thread, draft, context keys, menu} into a render
//! tree; no rendering technology lives in this crate.

mod actions;
mod comment;
mod thread;
mod tree;

pub use tree::{ButtonAction, Element};

use crate::command::CommandRegistry;
use crate::context::ContextKeySet;
use crate::menu::Menu;
use crate::model::{CommentThread, DraftEditor};

/// Derive the overlay's render tree from the current widget state.
#[must_use]
pub fn view<C>(
    thread: &CommentThread,
    draft: &DraftEditor,
    keys: &ContextKeySet,
    menu: &Menu,
    commands: &C,
) -> Element
where
    C: CommandRegistry + ?Sized,
{
    thread::view(thread, draft, keys, menu, commands)
}
